#![deny(missing_docs)]

//! Implementation of [Dancing Links](https://en.wikipedia.org/wiki/Dancing_Links)
//! and [Algorithm X](https://en.wikipedia.org/wiki/Knuth%27s_Algorithm_X) for finding
//! the first solution of [exact cover](https://en.wikipedia.org/wiki/Exact_cover)
//! problems.
//!
//! ```
//! use exact_cover_dlx::Solver;
//!
//! let mut solver = Solver::new(
//!     ["a", "b", "c"],
//!     [vec!["a", "b"], vec!["c"], vec!["a"], vec!["b", "c"]],
//! );
//!
//! assert_eq!(solver.solve(), Some(vec![1, 2]));
//! ```

pub mod dot;
mod error;
pub mod grid;
pub mod policy;
mod problem;
pub(crate) mod solver;
pub mod sudoku;

pub use error::ConstructionError;
pub use grid::Grid;
pub use policy::{ColumnPolicy, FirstColumn, MinimumRemaining};
pub use problem::Problem;
pub use solver::{SearchOutcome, SearchStats, Solver};

use core::{fmt::Debug, hash::Hash};

/// A value that can be used as an item of the universe.
pub trait Item: Eq + Hash + Clone + Debug {}

impl<T> Item for T where T: Eq + Hash + Clone + Debug {}

/// An instance of an exact cover problem.
pub trait ExactCover {
    /// The type of the items that make up the universe.
    type Item: Item;

    /// The type of a decoded solution.
    type Solution;

    /// Return the items that must each be covered exactly once.
    fn universe(&self) -> &[Self::Item];

    /// Return the candidate sets, in row order.
    fn sets(&self) -> &[Vec<Self::Item>];

    /// Translate the 1-based row indices of a solution back into the terms of
    /// the problem.
    fn decode(&self, rows: &[usize]) -> Self::Solution;

    /// Return a solver for this instance of the problem.
    fn solver(&self) -> Solver<Self::Item> {
        Solver::new(
            self.universe().iter().cloned(),
            self.sets().iter().map(|set| set.iter().cloned()),
        )
    }

    /// Return the first solution to this instance of the problem.
    fn solve(&self) -> Option<Self::Solution> {
        self.solver().solve().map(|rows| self.decode(&rows))
    }
}

impl<E> ExactCover for &E
where
    E: ExactCover,
{
    type Item = E::Item;
    type Solution = E::Solution;

    fn universe(&self) -> &[Self::Item] {
        <E as ExactCover>::universe(self)
    }

    fn sets(&self) -> &[Vec<Self::Item>] {
        <E as ExactCover>::sets(self)
    }

    fn decode(&self, rows: &[usize]) -> Self::Solution {
        <E as ExactCover>::decode(self, rows)
    }
}
