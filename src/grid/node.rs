//! Arena addressing and link manipulation for the nodes of a
//! [`Grid`](super::Grid).

use core::fmt;

/// Position of a node inside the grid arena.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root header always occupies the first slot of the arena.
    pub const ROOT: NodeId = NodeId(0);

    /// Return the arena index of this node.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A node known to be a column header.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HeaderId(pub(crate) NodeId);

/// A node known to be a cell of some row.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(pub(crate) NodeId);

impl From<HeaderId> for NodeId {
    fn from(header: HeaderId) -> Self {
        header.0
    }
}

impl From<CellId> for NodeId {
    fn from(cell: CellId) -> Self {
        cell.0
    }
}

/// What a node in the arena stands for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The permanent anchor of the header row.
    Root,
    /// The header of the column for the item at this index of the universe.
    Header(usize),
    /// A cell belonging to the given 1-based row.
    Cell(usize),
}

/// The four neighbor relations of a node.
///
/// `None` is the sentinel that terminates every list, lists never wrap around.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Links {
    /// Left neighbor in the header row or in the cell's row.
    pub left: Option<NodeId>,
    /// Right neighbor in the header row or in the cell's row.
    pub right: Option<NodeId>,
    /// Neighbor above, the header for the topmost cell of a column.
    pub up: Option<NodeId>,
    /// Neighbor below.
    pub down: Option<NodeId>,
}

// NOTE: Unlinking only retargets the neighbors of `id`. The links stored on
// `id` itself are left untouched so that `relink` can put it back in place.
pub(crate) fn unlink(links: &mut [Links], id: NodeId) {
    let Links {
        left,
        right,
        up,
        down,
    } = links[id.0];

    if let Some(right) = right {
        links[right.0].left = left;
    }
    if let Some(left) = left {
        links[left.0].right = right;
    }
    if let Some(down) = down {
        links[down.0].up = up;
    }
    if let Some(up) = up {
        links[up.0].down = down;
    }
}

pub(crate) fn relink(links: &mut [Links], id: NodeId) {
    let Links {
        left,
        right,
        up,
        down,
    } = links[id.0];

    if let Some(up) = up {
        links[up.0].down = Some(id);
    }
    if let Some(down) = down {
        links[down.0].up = Some(id);
    }
    if let Some(left) = left {
        links[left.0].right = Some(id);
    }
    if let Some(right) = right {
        links[right.0].left = Some(id);
    }
}

macro_rules! add_direction {
    ($name:ident, $direction:ident, $opposite:ident) => {
        pub(crate) fn $name(links: &mut [Links], id: NodeId, neighbor: NodeId) {
            links[id.0].$direction = Some(neighbor);
            links[neighbor.0].$opposite = Some(id);
        }
    };
}

add_direction!(add_right, right, left);

add_direction!(add_below, down, up);

/// Iterator that follows one direction from a starting node until it reaches
/// the sentinel.
#[derive(Debug, Clone)]
pub struct Walk<'g> {
    links: &'g [Links],
    next: Option<NodeId>,
    direction: fn(&Links) -> Option<NodeId>,
}

impl<'g> Walk<'g> {
    /// Walk rightwards, yielding `start` first.
    pub(crate) fn right(links: &'g [Links], start: Option<NodeId>) -> Self {
        Walk {
            links,
            next: start,
            direction: |node: &Links| node.right,
        }
    }

    /// Walk downwards, yielding `start` first.
    pub(crate) fn down(links: &'g [Links], start: Option<NodeId>) -> Self {
        Walk {
            links,
            next: start,
            direction: |node: &Links| node.down,
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = (self.direction)(&self.links[current.0]);

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three nodes in a horizontal line and a vertical line through the middle:
    //
    //      3
    //      |
    //  0 - 1 - 2
    //      |
    //      4
    fn cross() -> Vec<Links> {
        let mut links = vec![Links::default(); 5];
        add_right(&mut links, NodeId(0), NodeId(1));
        add_right(&mut links, NodeId(1), NodeId(2));
        add_below(&mut links, NodeId(3), NodeId(1));
        add_below(&mut links, NodeId(1), NodeId(4));
        links
    }

    #[test]
    fn unlink_skips_node_in_both_directions() {
        let mut links = cross();
        let before = links[1];

        unlink(&mut links, NodeId(1));

        assert_eq!(links[0].right, Some(NodeId(2)));
        assert_eq!(links[2].left, Some(NodeId(0)));
        assert_eq!(links[3].down, Some(NodeId(4)));
        assert_eq!(links[4].up, Some(NodeId(3)));
        assert_eq!(links[1], before);
    }

    #[test]
    fn relink_restores_original_links() {
        let original = cross();
        let mut links = original.clone();

        unlink(&mut links, NodeId(1));
        relink(&mut links, NodeId(1));

        assert_eq!(links, original);
    }

    #[test]
    fn unlink_at_list_ends_stops_at_sentinel() {
        let mut links = cross();

        unlink(&mut links, NodeId(0));
        assert_eq!(links[1].left, None);

        unlink(&mut links, NodeId(4));
        assert_eq!(links[1].down, None);
    }

    #[test]
    fn walk_stops_at_sentinel() {
        let links = cross();

        assert_eq!(
            Walk::right(&links, Some(NodeId(0))).collect::<Vec<_>>(),
            vec![NodeId(0), NodeId(1), NodeId(2)]
        );
        assert_eq!(
            Walk::down(&links, Some(NodeId(3))).collect::<Vec<_>>(),
            vec![NodeId(3), NodeId(1), NodeId(4)]
        );
        assert_eq!(Walk::down(&links, None).count(), 0);
    }
}
