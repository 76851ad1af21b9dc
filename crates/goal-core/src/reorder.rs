//! Drop Geometry
//!
//! Resolves where a dragged row lands from the pointer's vertical position
//! and the bounding spans of the rendered rows. Pure arithmetic, so any UI
//! toolkit can feed it measured rectangles.

/// Vertical extent of a rendered row, in the same coordinate space as the
/// pointer (client pixels in the browser).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    pub top: f64,
    pub height: f64,
}

impl RowSpan {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Index of the row the dragged row should be inserted before, or
/// `rows.len()` to append.
///
/// A row qualifies when its midpoint lies strictly below the pointer. Among
/// qualifying rows the nearest one wins (largest negative offset); on equal
/// offsets the earlier row is kept.
pub fn insertion_index(pointer_y: f64, rows: &[RowSpan]) -> usize {
    let mut closest: Option<(usize, f64)> = None;
    for (index, row) in rows.iter().enumerate() {
        let offset = pointer_y - row.midpoint();
        let nearer = match closest {
            Some((_, best)) => offset > best,
            None => true,
        };
        if offset < 0.0 && nearer {
            closest = Some((index, offset));
        }
    }
    closest.map_or(rows.len(), |(index, _)| index)
}

/// Target position for `GoalList::move_to` when the row at `dragged` is
/// dropped at `pointer_y`. `rows` holds every rendered row, the dragged one
/// included; it is skipped when measuring.
pub fn drop_position(dragged: usize, pointer_y: f64, rows: &[RowSpan]) -> usize {
    let others: Vec<RowSpan> = rows
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != dragged)
        .map(|(_, row)| *row)
        .collect();
    insertion_index(pointer_y, &others)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three 20px rows stacked from y=100: midpoints 110, 130, 150
    fn stacked() -> Vec<RowSpan> {
        vec![
            RowSpan::new(100.0, 20.0),
            RowSpan::new(120.0, 20.0),
            RowSpan::new(140.0, 20.0),
        ]
    }

    #[test]
    fn test_pointer_above_all_rows() {
        assert_eq!(insertion_index(0.0, &stacked()), 0);
    }

    #[test]
    fn test_pointer_below_all_rows() {
        assert_eq!(insertion_index(500.0, &stacked()), 3);
    }

    #[test]
    fn test_pointer_between_midpoints() {
        assert_eq!(insertion_index(125.0, &stacked()), 1);
        assert_eq!(insertion_index(131.0, &stacked()), 2);
    }

    #[test]
    fn test_pointer_on_midpoint_does_not_qualify() {
        assert_eq!(insertion_index(130.0, &stacked()), 2);
    }

    #[test]
    fn test_nearest_row_wins_regardless_of_order() {
        let rows = vec![RowSpan::new(140.0, 20.0), RowSpan::new(100.0, 20.0)];
        assert_eq!(insertion_index(90.0, &rows), 1);
    }

    #[test]
    fn test_equal_offsets_keep_first() {
        let rows = vec![RowSpan::new(100.0, 20.0), RowSpan::new(100.0, 20.0)];
        assert_eq!(insertion_index(90.0, &rows), 0);
    }

    #[test]
    fn test_empty_rows_append() {
        assert_eq!(insertion_index(42.0, &[]), 0);
    }

    #[test]
    fn test_drop_position_skips_dragged_row() {
        let rows = stacked();
        // Dragging the last row above everything
        assert_eq!(drop_position(2, 0.0, &rows), 0);
        // Dragging the first row below everything
        assert_eq!(drop_position(0, 500.0, &rows), 2);
        // Dragging the first row between B and C
        assert_eq!(drop_position(0, 140.0, &rows), 1);
    }
}
