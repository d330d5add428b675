//! Shape module - tetromino geometry
//!
//! A [`Shape`] is one tetromino kind plus its current rotation. The four
//! rotation states are fixed offset tables chosen at construction; rotating
//! only moves the index into that table, nothing is recomputed.
//!
//! Offsets are `(dx, dy)` relative to the anchor, x to the right and y down.
//! Every Up table occupies rows 0 and 1 only, so a piece spawned at row 0 is
//! fully on the grid. Every table also spans the anchor column, so an anchor
//! inside the grid is implied by a footprint inside the grid.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to the anchor
pub type CellOffset = (i32, i32);

/// The four cells of one rotation state
pub type ShapeOffsets = [CellOffset; 4];

/// Offset tables for all four rotations, indexed by [`Rotation::index`]
pub type RotationTable = [ShapeOffsets; 4];

/// Get the offset table for a piece kind
pub fn rotation_table(kind: PieceKind) -> &'static RotationTable {
    match kind {
        PieceKind::I => &I_TABLE,
        PieceKind::J => &J_TABLE,
        PieceKind::L => &L_TABLE,
        PieceKind::O => &O_TABLE,
        PieceKind::S => &S_TABLE,
        PieceKind::T => &T_TABLE,
        PieceKind::Z => &Z_TABLE,
    }
}

// Two distinct orientations: horizontal on the anchor row, vertical below it.
const I_TABLE: RotationTable = [
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(-1, 0), (0, 0), (1, 0), (2, 0)],
    [(0, 0), (0, 1), (0, 2), (0, 3)],
];

const J_TABLE: RotationTable = [
    [(-1, 0), (-1, 1), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(-1, 1), (0, 1), (1, 1), (1, 2)],
    [(0, 0), (0, 1), (-1, 2), (0, 2)],
];

const L_TABLE: RotationTable = [
    [(1, 0), (-1, 1), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(-1, 1), (0, 1), (1, 1), (-1, 2)],
    [(-1, 0), (0, 0), (0, 1), (0, 2)],
];

const O_TABLE: RotationTable = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];

const S_TABLE: RotationTable = [
    [(0, 0), (1, 0), (-1, 1), (0, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (-1, 2), (0, 2)],
    [(-1, 0), (-1, 1), (0, 1), (0, 2)],
];

const T_TABLE: RotationTable = [
    [(0, 0), (-1, 1), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (0, 2)],
    [(-1, 1), (0, 1), (1, 1), (0, 2)],
    [(0, 0), (-1, 1), (0, 1), (0, 2)],
];

const Z_TABLE: RotationTable = [
    [(-1, 0), (0, 0), (0, 1), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
    [(-1, 1), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (-1, 1), (0, 1), (-1, 2)],
];

/// A tetromino with its current rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    kind: PieceKind,
    rotation: Rotation,
    rotations: RotationTable,
}

impl Shape {
    /// Create a shape of the given kind in the Up rotation using the standard table
    pub fn new(kind: PieceKind) -> Self {
        Self::with_offsets(kind, *rotation_table(kind))
    }

    /// Create a shape from explicit offsets for Up, Right, Down and Left
    pub fn with_offsets(kind: PieceKind, rotations: RotationTable) -> Self {
        Self {
            kind,
            rotation: Rotation::Up,
            rotations,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Offsets occupied in the current rotation
    pub fn occupied_offsets(&self) -> &ShapeOffsets {
        &self.rotations[self.rotation.index()]
    }

    pub fn rotate_right(&mut self) {
        self.rotation = self.rotation.rotate_cw();
    }

    pub fn rotate_left(&mut self) {
        self.rotation = self.rotation.rotate_ccw();
    }

    /// Inclusive `(min_dx, min_dy, max_dx, max_dy)` of the current rotation
    pub fn bounds(&self) -> (i32, i32, i32, i32) {
        self.occupied_offsets().iter().fold(
            (i32::MAX, i32::MAX, i32::MIN, i32::MIN),
            |(min_x, min_y, max_x, max_y), &(dx, dy)| {
                (min_x.min(dx), min_y.min(dy), max_x.max(dx), max_y.max(dy))
            },
        )
    }
}
