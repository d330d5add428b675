//! Coordinate mapping from shape offsets to grid space

use crate::shape::Shape;

/// Absolute grid coordinate `(x, y)`; may lie outside the grid
pub type Coord = (i32, i32);

/// The four absolute cells a shape covers
pub type Footprint = [Coord; 4];

/// Map the shape's current offsets onto the grid at the given anchor.
///
/// Results are not clamped. Callers decide what an out-of-range cell means.
pub fn coordinates_for(shape: &Shape, anchor_x: i32, anchor_y: i32) -> Footprint {
    let offsets = *shape.occupied_offsets();
    offsets.map(|(dx, dy)| (anchor_x + dx, anchor_y + dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn maps_offsets_relative_to_anchor() {
        let shape = Shape::new(PieceKind::I);
        assert_eq!(
            coordinates_for(&shape, 5, 0),
            [(4, 0), (5, 0), (6, 0), (7, 0)]
        );
    }

    #[test]
    fn out_of_range_cells_are_reported_as_is() {
        let shape = Shape::new(PieceKind::I);
        assert_eq!(
            coordinates_for(&shape, 0, -3),
            [(-1, -3), (0, -3), (1, -3), (2, -3)]
        );
    }

    #[test]
    fn same_input_yields_same_footprint() {
        let mut shape = Shape::new(PieceKind::S);
        shape.rotate_right();
        assert_eq!(coordinates_for(&shape, 3, 7), coordinates_for(&shape, 3, 7));
    }
}
