//! Render a snapshot of a [`Grid`] in the
//! [Graphviz DOT](https://graphviz.org/doc/info/lang.html) language.
//!
//! Every node of the arena is written, including nodes currently unlinked by a
//! cover, together with the four neighbor relations it stores. Right links are
//! drawn green, left links red, down links magenta and up links blue.

use crate::grid::{Grid, NodeId, NodeKind};
use core::fmt::Debug;
use std::io::{self, Write};

/// Write the grid as a directed graph to `out`.
pub fn write_dot<T, W>(grid: &Grid<T>, mut out: W) -> io::Result<()>
where
    T: Debug,
    W: Write,
{
    writeln!(out, "// Dancing Links Graph")?;
    writeln!(out, "digraph {{")?;
    writeln!(out, "    rankdir=LR")?;

    let nodes = (0..grid.num_nodes()).map(NodeId);
    for id in nodes.clone() {
        let label = match grid.kind(id) {
            NodeKind::Root => String::from("ROOT"),
            NodeKind::Header(index) => format!("{:?}", grid.items()[index]),
            NodeKind::Cell(_) => String::new(),
        };
        writeln!(out, "    {} [label=\"{}\"]", id, escape(&label))?;
    }

    for id in nodes {
        let links = grid.links(id);
        for (neighbor, color) in [
            (links.right, "green"),
            (links.left, "red"),
            (links.down, "magenta"),
            (links.up, "blue"),
        ] {
            if let Some(neighbor) = neighbor {
                writeln!(out, "    {} -> {} [color={}]", id, neighbor, color)?;
            }
        }
    }

    writeln!(out, "}}")
}

/// Return the grid rendered as a DOT document.
pub fn to_dot<T: Debug>(grid: &Grid<T>) -> String {
    let mut out = Vec::new();
    // Writing into a `Vec` cannot fail
    let _ = write_dot(grid, &mut out);

    String::from_utf8_lossy(&out).into_owned()
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
