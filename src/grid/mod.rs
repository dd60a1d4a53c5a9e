//! Sentinel-terminated dancing links grid.
//!
//! All nodes live in a single arena and refer to each other by index. The arena
//! is laid out as the root header, followed by one header per item of the
//! universe, followed by the cells of every row in row order. Neither the header
//! row nor any row or column wraps around, every list ends at a `None`
//! sentinel.

mod cover;
mod node;

pub use node::{CellId, HeaderId, Links, NodeId, NodeKind, Walk};

use crate::{ConstructionError, Item};
use cover::History;
use std::collections::HashMap;

/// The incidence structure of an exact cover problem.
///
/// Rows are identified by the 1-based position of the candidate set they were
/// built from.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    links: Vec<Links>,
    items: Vec<T>,
    column_lens: Vec<usize>,
    cells: Vec<Cell>,
    num_rows: usize,
    history: History,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Cell {
    header: HeaderId,
    leftmost: CellId,
    row: usize,
}

impl<T> Grid<T>
where
    T: Item,
{
    /// Build a grid from a universe of items and an ordered list of candidate
    /// sets.
    ///
    /// Headers are linked in universe order, and the cells of each row in the
    /// order its items are yielded. Repeated items collapse onto their first
    /// occurrence, both in the universe and inside a single set.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::UnknownItem`] for the first set (in input
    /// order) that contains an item missing from the universe.
    pub fn build<U, S, I>(universe: U, sets: S) -> Result<Self, ConstructionError<T>>
    where
        U: IntoIterator<Item = T>,
        S: IntoIterator<Item = I>,
        I: IntoIterator<Item = T>,
    {
        let mut items = Vec::new();
        let mut headers: HashMap<T, HeaderId> = HashMap::new();
        let mut links = vec![Links::default()];

        for item in universe {
            if headers.contains_key(&item) {
                continue;
            }

            let id = NodeId(links.len());
            links.push(Links::default());
            node::add_right(&mut links, NodeId(id.0 - 1), id);

            headers.insert(item.clone(), HeaderId(id));
            items.push(item);
        }

        let mut column_lens = vec![0; items.len()];
        // Bottom node of every column, starting at the header itself
        let mut bottoms: Vec<NodeId> = (1..=items.len()).map(NodeId).collect();
        let mut cells = Vec::new();
        let mut num_rows = 0;

        for (position, set) in sets.into_iter().enumerate() {
            let row = position + 1;
            num_rows = row;

            let mut columns: Vec<HeaderId> = Vec::new();
            for item in set {
                match headers.get(&item) {
                    Some(header) if !columns.contains(header) => columns.push(*header),
                    Some(_) => {}
                    None => {
                        log::debug!("Rejecting set [{}], item [{:?}] is unknown.", row, item);

                        return Err(ConstructionError::UnknownItem { item, set: row });
                    }
                }
            }

            let leftmost = CellId(NodeId(links.len()));
            let mut previous: Option<NodeId> = None;
            for header in columns {
                let id = NodeId(links.len());
                links.push(Links::default());
                cells.push(Cell {
                    header,
                    leftmost,
                    row,
                });

                if let Some(previous) = previous {
                    node::add_right(&mut links, previous, id);
                }
                previous = Some(id);

                let column = header.0 .0 - 1;
                node::add_below(&mut links, bottoms[column], id);
                bottoms[column] = id;
                column_lens[column] += 1;
            }
        }

        log::debug!(
            "Built grid with [{}] items, [{}] rows and [{}] nodes.",
            items.len(),
            num_rows,
            links.len()
        );

        Ok(Grid {
            links,
            items,
            column_lens,
            cells,
            num_rows,
            history: History::default(),
        })
    }
}

impl<T> Grid<T> {
    /// Return the root header.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Return the universe, in header order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Return the number of candidate sets the grid was built from.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Return the total number of nodes, root and headers included.
    pub fn num_nodes(&self) -> usize {
        self.links.len()
    }

    /// Return the current neighbor relations of a node.
    pub fn links(&self, id: NodeId) -> Links {
        self.links[id.0]
    }

    /// Return the right neighbor of a node.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].right
    }

    /// Return the left neighbor of a node.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].left
    }

    /// Return the node above.
    pub fn up(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].up
    }

    /// Return the node below.
    pub fn down(&self, id: NodeId) -> Option<NodeId> {
        self.links[id.0].down
    }

    /// Return a copy of the neighbor relations of every node, indexed by
    /// [`NodeId::index`].
    pub fn snapshot(&self) -> Vec<Links> {
        self.links.clone()
    }

    /// Return what the node stands for.
    pub fn kind(&self, id: NodeId) -> NodeKind {
        if id == NodeId::ROOT {
            NodeKind::Root
        } else if id.0 <= self.items.len() {
            NodeKind::Header(id.0 - 1)
        } else {
            NodeKind::Cell(self.cell(CellId(id)).row)
        }
    }

    /// Return true if every column has been covered.
    pub fn is_solved(&self) -> bool {
        self.links[NodeId::ROOT.0].right.is_none()
    }

    /// Return the first header still linked into the header row.
    pub fn first_header(&self) -> Option<HeaderId> {
        self.links[NodeId::ROOT.0].right.map(HeaderId)
    }

    /// Return an iterator over the headers still linked into the header row,
    /// from left to right.
    pub fn headers(&self) -> impl Iterator<Item = HeaderId> + '_ {
        Walk::right(&self.links, self.links[NodeId::ROOT.0].right).map(HeaderId)
    }

    /// Return an iterator over the uncovered cells in a column, top to bottom.
    pub fn column(&self, header: HeaderId) -> impl Iterator<Item = CellId> + '_ {
        Walk::down(&self.links, self.links[header.0 .0].down).map(CellId)
    }

    /// Return an iterator over every cell of the row `cell` belongs to,
    /// starting from the leftmost one.
    pub fn row(&self, cell: CellId) -> impl Iterator<Item = CellId> + '_ {
        Walk::right(&self.links, Some(self.leftmost(cell).0)).map(CellId)
    }

    /// Return the topmost uncovered cell in a column.
    pub fn first_in_column(&self, header: HeaderId) -> Option<CellId> {
        self.links[header.0 .0].down.map(CellId)
    }

    /// Return the cell below `cell`.
    pub fn next_in_column(&self, cell: CellId) -> Option<CellId> {
        self.links[cell.0 .0].down.map(CellId)
    }

    /// Return the cell to the right of `cell`.
    pub fn next_in_row(&self, cell: CellId) -> Option<CellId> {
        self.links[cell.0 .0].right.map(CellId)
    }

    /// Return the header of the column `cell` belongs to.
    pub fn header_of(&self, cell: CellId) -> HeaderId {
        self.cell(cell).header
    }

    /// Return the first cell created for the row `cell` belongs to.
    pub fn leftmost(&self, cell: CellId) -> CellId {
        self.cell(cell).leftmost
    }

    /// Return the 1-based row index of `cell`.
    pub fn row_of(&self, cell: CellId) -> usize {
        self.cell(cell).row
    }

    /// Return the item a header stands for.
    pub fn item(&self, header: HeaderId) -> &T {
        &self.items[header.0 .0 - 1]
    }

    /// Return the number of uncovered rows in a column.
    pub fn column_len(&self, header: HeaderId) -> usize {
        self.column_lens[header.0 .0 - 1]
    }

    fn cell(&self, cell: CellId) -> &Cell {
        &self.cells[cell.0 .0 - 1 - self.items.len()]
    }
}
