//! Shape definitions and fixed-center rotation.
//!
//! Five variants, each four (row, col) offsets from the piece anchor.
//! Rotation is a clockwise quarter turn about a constant per-shape
//! center in offset space; the square is rotationally symmetric and
//! never rotates. There is no wall-kick fallback: a rotation that would
//! collide or leave the grid is rejected outright.

use crate::types::{ShapeId, COLUMNS};

/// A single cell offset from the piece anchor, as (row, col).
pub type CellOffset = (i8, i8);

/// The four cell offsets making up one shape.
pub type ShapeCells = [CellOffset; 4];

/// Cell offsets for a shape in its spawn orientation.
pub fn shape_cells(id: ShapeId) -> ShapeCells {
    match id {
        ShapeId::Square => [(0, 0), (0, 1), (1, 0), (1, 1)],
        ShapeId::Bar => [(0, 1), (1, 1), (2, 1), (3, 1)],
        ShapeId::Tee => [(0, 1), (1, 0), (1, 1), (1, 2)],
        ShapeId::Ess => [(0, 0), (0, 1), (1, 1), (1, 2)],
        ShapeId::Zee => [(0, 1), (0, 2), (1, 0), (1, 1)],
    }
}

/// Anchor position for a freshly spawned piece: top row, centered.
pub fn spawn_position() -> (i8, i8) {
    (0, COLUMNS / 2 - 1)
}

/// Rotation center in offset space, or None for the square.
fn rotation_center(id: ShapeId) -> Option<CellOffset> {
    match id {
        ShapeId::Square => None,
        ShapeId::Bar | ShapeId::Tee | ShapeId::Ess | ShapeId::Zee => Some((1, 1)),
    }
}

/// Rotate offsets a quarter turn clockwise about `center`.
///
/// The center stays fixed across successive turns, so repeated
/// rotations compose without recomputing it from geometry.
pub fn rotated_cw(cells: &ShapeCells, center: CellOffset) -> ShapeCells {
    let (cr, cc) = center;
    cells.map(|(r, c)| (cr - (c - cc), cc + (r - cr)))
}

/// Try to rotate a piece anchored at (row, col).
///
/// Returns the rotated offsets when every resulting absolute cell
/// satisfies `is_open`, or None to leave the piece unrotated.
pub fn try_rotate(
    id: ShapeId,
    cells: &ShapeCells,
    row: i8,
    col: i8,
    is_open: impl Fn(i8, i8) -> bool,
) -> Option<ShapeCells> {
    let center = rotation_center(id)?;
    let rotated = rotated_cw(cells, center);
    let valid = rotated.iter().all(|&(dr, dc)| is_open(row + dr, col + dc));
    valid.then_some(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_sorted(cells: ShapeCells) -> Vec<CellOffset> {
        let mut v = cells.to_vec();
        v.sort();
        v
    }

    #[test]
    fn test_shape_table() {
        assert_eq!(
            shape_cells(ShapeId::Square),
            [(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(shape_cells(ShapeId::Bar), [(0, 1), (1, 1), (2, 1), (3, 1)]);
        assert_eq!(shape_cells(ShapeId::Tee), [(0, 1), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(shape_cells(ShapeId::Ess), [(0, 0), (0, 1), (1, 1), (1, 2)]);
        assert_eq!(shape_cells(ShapeId::Zee), [(0, 1), (0, 2), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_spawn_position_is_top_center() {
        assert_eq!(spawn_position(), (0, 4));
    }

    #[test]
    fn test_square_never_rotates() {
        let cells = shape_cells(ShapeId::Square);
        assert_eq!(try_rotate(ShapeId::Square, &cells, 5, 5, |_, _| true), None);
    }

    #[test]
    fn test_bar_rotates_to_horizontal() {
        let cells = shape_cells(ShapeId::Bar);
        let rotated = try_rotate(ShapeId::Bar, &cells, 5, 3, |_, _| true).unwrap();
        assert_eq!(as_sorted(rotated), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_tee_rotates_about_fixed_center() {
        let cells = shape_cells(ShapeId::Tee);
        let rotated = try_rotate(ShapeId::Tee, &cells, 5, 3, |_, _| true).unwrap();
        assert_eq!(as_sorted(rotated), vec![(0, 1), (1, 0), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_four_rotations_restore_original_cells() {
        for id in [ShapeId::Bar, ShapeId::Tee, ShapeId::Ess, ShapeId::Zee] {
            let original = shape_cells(id);
            let mut cells = original;
            for _ in 0..4 {
                cells = try_rotate(id, &cells, 10, 4, |_, _| true).unwrap();
            }
            assert_eq!(as_sorted(cells), as_sorted(original), "{:?}", id);
        }
    }

    #[test]
    fn test_rejected_rotation_returns_none() {
        let cells = shape_cells(ShapeId::Bar);
        assert_eq!(try_rotate(ShapeId::Bar, &cells, 0, 4, |_, _| false), None);
    }
}
