use core::fmt::Debug;
use thiserror::Error;

/// Reasons a [`Grid`](crate::Grid) cannot be built from its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstructionError<T: Debug> {
    /// A candidate set refers to an item that is missing from the universe.
    #[error("item {item:?} in set {set} is not in the universe")]
    UnknownItem {
        /// The offending item.
        item: T,
        /// The 1-based position of the candidate set containing the item.
        set: usize,
    },
}
