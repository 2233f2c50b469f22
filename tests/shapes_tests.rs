//! Shape table and rotation tests.

use quadris::core::{shape_cells, spawn_position, try_rotate};
use quadris::types::ShapeId;

fn sorted(cells: [(i8, i8); 4]) -> Vec<(i8, i8)> {
    let mut v = cells.to_vec();
    v.sort();
    v
}

#[test]
fn test_the_five_shape_variants() {
    assert_eq!(
        shape_cells(ShapeId::Square),
        [(0, 0), (0, 1), (1, 0), (1, 1)]
    );
    assert_eq!(shape_cells(ShapeId::Bar), [(0, 1), (1, 1), (2, 1), (3, 1)]);
    assert_eq!(shape_cells(ShapeId::Tee), [(0, 1), (1, 0), (1, 1), (1, 2)]);
    assert_eq!(shape_cells(ShapeId::Ess), [(0, 0), (0, 1), (1, 1), (1, 2)]);
    assert_eq!(shape_cells(ShapeId::Zee), [(0, 1), (0, 2), (1, 0), (1, 1)]);
    assert_eq!(ShapeId::ALL.len(), 5);
}

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for shape in ShapeId::ALL {
        let cells = sorted(shape_cells(shape));
        let mut deduped = cells.clone();
        deduped.dedup();
        assert_eq!(cells.len(), 4, "{:?}", shape);
        assert_eq!(deduped.len(), 4, "{:?}", shape);
    }
}

#[test]
fn test_spawn_anchor_is_top_center() {
    assert_eq!(spawn_position(), (0, 4));
}

#[test]
fn test_square_rotation_is_identity_anywhere() {
    let cells = shape_cells(ShapeId::Square);
    for (row, col) in [(0, 0), (0, 4), (10, 5), (18, 8)] {
        assert_eq!(
            try_rotate(ShapeId::Square, &cells, row, col, |_, _| true),
            None
        );
    }
}

#[test]
fn test_bar_becomes_horizontal() {
    let cells = shape_cells(ShapeId::Bar);
    let rotated = try_rotate(ShapeId::Bar, &cells, 8, 4, |_, _| true).unwrap();
    assert_eq!(sorted(rotated), vec![(1, 0), (1, 1), (1, 2), (1, 3)]);
}

#[test]
fn test_rotation_composes_back_to_start() {
    for shape in [ShapeId::Bar, ShapeId::Tee, ShapeId::Ess, ShapeId::Zee] {
        let original = shape_cells(shape);
        let mut cells = original;
        for turn in 0..4 {
            cells = try_rotate(shape, &cells, 10, 4, |_, _| true)
                .unwrap_or_else(|| panic!("{:?} turn {} rejected", shape, turn));
        }
        assert_eq!(sorted(cells), sorted(original), "{:?}", shape);
    }
}

#[test]
fn test_rotation_rejected_when_any_cell_is_blocked() {
    let cells = shape_cells(ShapeId::Tee);
    // Rotated tee occupies local (0,1),(1,0),(1,1),(2,1); block the
    // absolute cell under (2,1) only.
    let blocked = (7, 5);
    let result = try_rotate(ShapeId::Tee, &cells, 5, 4, |r, c| (r, c) != blocked);
    assert_eq!(result, None);
}
