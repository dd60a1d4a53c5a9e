use crate::{
    grid::{CellId, Grid},
    policy::{ColumnPolicy, FirstColumn},
    ConstructionError, Item,
};
use core::sync::atomic::{AtomicBool, Ordering};

/// Solver that searches for the first exact cover of a [`Grid`].
#[derive(Debug)]
pub struct Solver<T: Item, P = FirstColumn> {
    grid: Result<Grid<T>, ConstructionError<T>>,
    policy: P,
    stats: SearchStats,
}

/// Result of a search that may be interrupted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A cover was found, listed as 1-based row indices in selection order.
    Found(Vec<usize>),
    /// The search tree was exhausted without finding a cover.
    Exhausted,
    /// The search was stopped before it could finish.
    Cancelled,
}

/// Counters collected during the most recent search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of rows covered.
    pub covers: usize,
    /// Number of rows uncovered.
    pub uncovers: usize,
    /// Number of columns found without any remaining row.
    pub dead_ends: usize,
    /// Largest number of rows selected at once.
    pub max_depth: usize,
}

#[derive(Debug)]
enum Frame {
    // Before covering the next row of the chosen column, `None` once every row
    // has been tried
    Cover(Option<CellId>),
    // After descending into the row, before uncovering it
    Uncover(CellId),
}

impl<T> Solver<T, FirstColumn>
where
    T: Item,
{
    /// Create a new `Solver` from a universe and an ordered list of candidate
    /// sets.
    ///
    /// If the input is invalid the solver is inert: the error is kept and
    /// every search reports that no solution exists, see
    /// [`Solver::construction_error`].
    pub fn new<U, S, I>(universe: U, sets: S) -> Self
    where
        U: IntoIterator<Item = T>,
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let grid = Grid::build(universe, sets);
        if let Err(err) = &grid {
            log::warn!("Solver is inert: {}", err);
        }

        Solver {
            grid,
            policy: FirstColumn,
            stats: SearchStats::default(),
        }
    }

    /// Create a new `Solver` for an existing grid.
    pub fn from_grid(grid: Grid<T>) -> Self {
        Solver {
            grid: Ok(grid),
            policy: FirstColumn,
            stats: SearchStats::default(),
        }
    }
}

impl<T, P> Solver<T, P>
where
    T: Item,
    P: ColumnPolicy,
{
    /// Replace the column selection policy.
    pub fn with_policy<Q: ColumnPolicy>(self, policy: Q) -> Solver<T, Q> {
        Solver {
            grid: self.grid,
            policy,
            stats: self.stats,
        }
    }

    /// Return the grid, or `None` if construction failed.
    pub fn grid(&self) -> Option<&Grid<T>> {
        self.grid.as_ref().ok()
    }

    /// Return the reason construction failed, if it did.
    pub fn construction_error(&self) -> Option<&ConstructionError<T>> {
        self.grid.as_ref().err()
    }

    /// Return the counters of the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Return the first solution, as 1-based row indices in the order the rows
    /// were selected, or `None` if there is no solution.
    ///
    /// The grid is restored to its initial state before returning, so calling
    /// this again yields the same answer.
    pub fn solve(&mut self) -> Option<Vec<usize>> {
        match self.solve_until(&AtomicBool::new(false)) {
            SearchOutcome::Found(rows) => Some(rows),
            SearchOutcome::Exhausted | SearchOutcome::Cancelled => None,
        }
    }

    /// Search like [`Solver::solve`], giving up once `cancel` is set.
    ///
    /// The flag is checked before each row is tried. A cancelled search still
    /// uncovers every row it selected, leaving the grid intact.
    pub fn solve_until(&mut self, cancel: &AtomicBool) -> SearchOutcome {
        self.stats = SearchStats::default();

        let grid = match &mut self.grid {
            Ok(grid) => grid,
            Err(err) => {
                log::debug!("Skipping search on inert solver: {}", err);
                return SearchOutcome::Exhausted;
            }
        };

        let outcome = Self::search(grid, &self.policy, cancel, &mut self.stats);

        log::debug!(
            "Search finished with [{:?}] after [{}] covers, [{}] dead ends, max depth [{}].",
            outcome,
            self.stats.covers,
            self.stats.dead_ends,
            self.stats.max_depth
        );

        outcome
    }

    fn search(
        grid: &mut Grid<T>,
        policy: &P,
        cancel: &AtomicBool,
        stats: &mut SearchStats,
    ) -> SearchOutcome {
        let mut partial_solution = Vec::new();
        let mut stack = Vec::new();

        if grid.is_solved() {
            return SearchOutcome::Found(partial_solution);
        }
        stack.push(Self::branch(grid, policy, stats));

        while let Some(curr_frame) = stack.last_mut() {
            match *curr_frame {
                // Try the next row of this frame's column, or give up on the
                // column once all rows are exhausted.
                Frame::Cover(None) => {
                    stack.pop();
                }
                Frame::Cover(Some(cell)) => {
                    if cancel.load(Ordering::Relaxed) {
                        Self::unwind(grid, &mut stack, stats);
                        return SearchOutcome::Cancelled;
                    }

                    partial_solution.push(grid.row_of(cell));
                    grid.cover(cell);
                    stats.covers += 1;
                    stats.max_depth = stats.max_depth.max(partial_solution.len());

                    *curr_frame = Frame::Uncover(cell);

                    // This is where the recursion happens
                    if grid.is_solved() {
                        Self::unwind(grid, &mut stack, stats);
                        return SearchOutcome::Found(partial_solution);
                    }
                    let next_frame = Self::branch(grid, policy, stats);
                    stack.push(next_frame);
                }
                // Back from the row, restore the grid and move down the column.
                Frame::Uncover(cell) => {
                    grid.uncover(cell);
                    stats.uncovers += 1;
                    partial_solution.pop();

                    *curr_frame = Frame::Cover(grid.next_in_column(cell));
                }
            }
        }

        SearchOutcome::Exhausted
    }

    /// Choose a column and return the frame that tries each of its rows.
    fn branch(grid: &Grid<T>, policy: &P, stats: &mut SearchStats) -> Frame {
        let first = policy
            .choose(grid)
            .and_then(|column| grid.first_in_column(column));

        if first.is_none() {
            // If there exists a column with no viable rows, then this
            // particular branch does not contain any solutions
            stats.dead_ends += 1;
        }

        Frame::Cover(first)
    }

    /// Uncover every row still selected, innermost first.
    fn unwind(grid: &mut Grid<T>, stack: &mut Vec<Frame>, stats: &mut SearchStats) {
        while let Some(frame) = stack.pop() {
            if let Frame::Uncover(cell) = frame {
                grid.uncover(cell);
                stats.uncovers += 1;
            }
        }
    }
}
