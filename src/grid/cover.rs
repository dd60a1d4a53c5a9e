//! Covering and uncovering rows of a [`Grid`].

use super::{node, CellId, Grid, HeaderId, NodeId};

/// A node removed by a call to `cover`, tagged with its kind so the column
/// counters can be restored without inspecting the arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Removed {
    Cell(CellId),
    Header(HeaderId),
}

#[derive(Debug, Clone)]
struct Frame {
    cell: CellId,
    removed: Vec<Removed>,
}

/// Stack of the nodes removed by each outstanding `cover`, in removal order.
#[derive(Debug, Clone, Default)]
pub(super) struct History {
    frames: Vec<Frame>,
}

impl<T> Grid<T> {
    /// Select the row containing `cell`.
    ///
    /// Every column satisfied by the row is removed from the header row, and
    /// every row intersecting one of those columns (the selected row included)
    /// is unlinked from all of its columns.
    pub fn cover(&mut self, cell: CellId) {
        let mut removed = Vec::new();

        let mut current = Some(self.leftmost(cell));
        while let Some(row_cell) = current {
            let header = self.header_of(row_cell);
            self.cover_column(header, &mut removed);

            current = self.next_in_row(row_cell);
        }

        log::trace!(
            "Covered row [{}], removing [{}] nodes.",
            self.row_of(cell),
            removed.len()
        );

        self.history.frames.push(Frame { cell, removed });
    }

    /// Undo the most recent `cover`, which must have been made for `cell`.
    ///
    /// # Panics
    ///
    /// Panics if there is no outstanding `cover`, or if the most recent one was
    /// made for a different cell.
    pub fn uncover(&mut self, cell: CellId) {
        let frame = self
            .history
            .frames
            .pop()
            .expect("mismatched number of cover & uncover");
        assert_eq!(
            frame.cell, cell,
            "Expected cell argument to match top cover"
        );

        for removed in frame.removed.iter().rev() {
            match *removed {
                Removed::Cell(removed_cell) => {
                    node::relink(&mut self.links, removed_cell.into());
                    let header = self.header_of(removed_cell);
                    self.column_lens[header.0 .0 - 1] += 1;
                }
                Removed::Header(header) => {
                    node::relink(&mut self.links, header.into());
                }
            }
        }

        log::trace!("Uncovered row [{}].", self.row_of(cell));
    }

    /// Return the number of `cover` calls not yet matched by an `uncover`.
    pub fn history_depth(&self) -> usize {
        self.history.frames.len()
    }

    fn cover_column(&mut self, header: HeaderId, removed: &mut Vec<Removed>) {
        let mut current = self.first_in_column(header);
        while let Some(column_cell) = current {
            self.cover_row(column_cell, removed);

            current = self.next_in_column(column_cell);
        }

        node::unlink(&mut self.links, header.into());
        removed.push(Removed::Header(header));
    }

    fn cover_row(&mut self, cell: CellId, removed: &mut Vec<Removed>) {
        let mut current = Some(self.leftmost(cell));
        while let Some(row_cell) = current {
            node::unlink(&mut self.links, NodeId::from(row_cell));
            let header = self.header_of(row_cell);
            self.column_lens[header.0 .0 - 1] -= 1;
            removed.push(Removed::Cell(row_cell));

            current = self.next_in_row(row_cell);
        }
    }
}
