//! Shape, coordinate mapping and generator tests

use std::collections::HashSet;

use blockdrop::core::{
    coordinates_for, BagGenerator, RandomGenerator, SequenceGenerator, Shape, ShapeGenerator,
};
use blockdrop::types::{PieceKind, Rotation};

#[test]
fn test_every_rotation_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let mut shape = Shape::new(kind);
        for _ in 0..4 {
            let cells: HashSet<_> = shape.occupied_offsets().iter().copied().collect();
            assert_eq!(cells.len(), 4, "{kind:?} {:?}", shape.rotation());
            shape.rotate_right();
        }
        assert_eq!(shape.rotation(), Rotation::Up);
    }
}

#[test]
fn test_square_is_rotation_invariant() {
    let mut shape = Shape::new(PieceKind::O);
    let up = *shape.occupied_offsets();
    for _ in 0..3 {
        shape.rotate_right();
        assert_eq!(*shape.occupied_offsets(), up);
    }
}

#[test]
fn test_bar_has_two_orientations() {
    let mut shape = Shape::new(PieceKind::I);
    let horizontal = *shape.occupied_offsets();
    shape.rotate_right();
    let vertical = *shape.occupied_offsets();
    assert_ne!(horizontal, vertical);
    shape.rotate_right();
    assert_eq!(*shape.occupied_offsets(), horizontal);
    shape.rotate_right();
    assert_eq!(*shape.occupied_offsets(), vertical);
}

#[test]
fn test_coordinates_are_offsets_plus_anchor() {
    let shape = Shape::new(PieceKind::T);
    let cells = coordinates_for(&shape, 4, 7);
    for (cell, offset) in cells.iter().zip(shape.occupied_offsets()) {
        assert_eq!(*cell, (4 + offset.0, 7 + offset.1));
    }
}

#[test]
fn test_custom_offsets_are_used() {
    let flat = [[(0, 0), (1, 0), (2, 0), (3, 0)]; 4];
    let shape = Shape::with_offsets(PieceKind::L, flat);
    assert_eq!(shape.kind(), PieceKind::L);
    assert_eq!(coordinates_for(&shape, 1, 1), [(1, 1), (2, 1), (3, 1), (4, 1)]);
    assert_eq!(shape.bounds(), (0, 0, 3, 0));
}

#[test]
fn test_generators_start_in_up_rotation() {
    let mut random = RandomGenerator::new(7);
    let mut bag = BagGenerator::new(7);
    for _ in 0..50 {
        assert_eq!(random.next_shape().rotation(), Rotation::Up);
        assert_eq!(bag.next_shape().rotation(), Rotation::Up);
    }
}

#[test]
fn test_same_seed_same_pieces() {
    let mut a = RandomGenerator::new(12345);
    let mut b = RandomGenerator::new(12345);
    for _ in 0..100 {
        assert_eq!(a.next_shape().kind(), b.next_shape().kind());
    }
}

#[test]
fn test_bag_deals_every_kind_per_seven() {
    let mut bag = BagGenerator::new(3);
    for _ in 0..5 {
        let kinds: HashSet<_> = (0..7).map(|_| bag.next_shape().kind()).collect();
        assert_eq!(kinds.len(), 7);
    }
}

#[test]
fn test_sequence_cycles() {
    let mut seq = SequenceGenerator::new(vec![PieceKind::S, PieceKind::Z]);
    let kinds: Vec<_> = (0..5).map(|_| seq.next_shape().kind()).collect();
    assert_eq!(
        kinds,
        vec![PieceKind::S, PieceKind::Z, PieceKind::S, PieceKind::Z, PieceKind::S]
    );
}

#[test]
fn test_boxed_generator_delegates() {
    let mut boxed: Box<dyn ShapeGenerator> = Box::new(SequenceGenerator::repeat(PieceKind::J));
    assert_eq!(boxed.next_shape().kind(), PieceKind::J);
}
