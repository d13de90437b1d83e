//! Snapshot diffing between two consecutive renders

use crate::types::{CellChange, Grid, GRID_SIZE};

/// Compute the cells whose value differs between `previous` and `current`.
///
/// Without a previous snapshot (first render, or after the board was reset
/// out-of-band) there is nothing to compare against and the diff is empty.
/// Changes are listed in row-major order.
pub fn diff_grids(previous: Option<&Grid>, current: &Grid) -> Vec<CellChange> {
    let Some(previous) = previous else {
        return Vec::new();
    };

    let mut changes = Vec::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if previous[row][col] != current[row][col] {
                changes.push(CellChange {
                    row,
                    col,
                    born: current[row][col],
                });
            }
        }
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::default();
        for &(row, col) in cells {
            grid[row][col] = true;
        }
        grid
    }

    #[test]
    fn test_no_previous_snapshot_yields_no_changes() {
        let current = grid_with(&[(0, 0), (2, 2)]);
        assert!(diff_grids(None, &current).is_empty());
    }

    #[test]
    fn test_identical_grids_yield_no_changes() {
        let grid = grid_with(&[(1, 1), (3, 4)]);
        assert!(diff_grids(Some(&grid), &grid).is_empty());
    }

    #[test]
    fn test_births_and_deaths_are_reported() {
        let previous = grid_with(&[(0, 0), (1, 2)]);
        let current = grid_with(&[(1, 2), (4, 4)]);

        let changes = diff_grids(Some(&previous), &current);

        assert_eq!(
            changes,
            vec![
                CellChange {
                    row: 0,
                    col: 0,
                    born: false
                },
                CellChange {
                    row: 4,
                    col: 4,
                    born: true
                },
            ]
        );
    }

    #[test]
    fn test_diff_contains_exactly_differing_coordinates() {
        // Blinker: horizontal to vertical
        let previous = grid_with(&[(2, 1), (2, 2), (2, 3)]);
        let current = grid_with(&[(1, 2), (2, 2), (3, 2)]);

        let changes = diff_grids(Some(&previous), &current);

        assert_eq!(changes.len(), 4);
        for change in &changes {
            assert_ne!(
                previous[change.row][change.col],
                current[change.row][change.col]
            );
            assert_eq!(change.born, current[change.row][change.col]);
        }
        assert!(!changes.iter().any(|c| c.row == 2 && c.col == 2));
    }

    #[test]
    fn test_full_flip() {
        let previous = Grid::default();
        let current = [[true; GRID_SIZE]; GRID_SIZE];

        let changes = diff_grids(Some(&previous), &current);

        assert_eq!(changes.len(), GRID_SIZE * GRID_SIZE);
        assert!(changes.iter().all(|c| c.born));
    }
}
