//! Strategies for choosing the next column to branch on.

use crate::grid::{Grid, HeaderId};

/// Decides which uncovered column the [`Solver`](crate::Solver) branches on.
///
/// The choice changes which solution is found first and how much of the search
/// tree is visited, never whether a solution exists.
pub trait ColumnPolicy {
    /// Return the column to branch on, or `None` if no column is left.
    fn choose<T>(&self, grid: &Grid<T>) -> Option<HeaderId>;
}

/// Always branch on the leftmost uncovered column.
///
/// This is the default policy, it makes the row selection order follow the
/// order of the universe.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct FirstColumn;

impl ColumnPolicy for FirstColumn {
    fn choose<T>(&self, grid: &Grid<T>) -> Option<HeaderId> {
        grid.first_header()
    }
}

/// Branch on the column with the fewest uncovered rows, the leftmost one on
/// ties.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MinimumRemaining;

impl ColumnPolicy for MinimumRemaining {
    fn choose<T>(&self, grid: &Grid<T>) -> Option<HeaderId> {
        grid.headers().min_by_key(|header| grid.column_len(*header))
    }
}
