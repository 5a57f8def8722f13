//! Human- and machine-readable summaries of grids and component trees

use serde::Serialize;

use crate::builder::{ComponentTree, Frame};
use crate::grid::{Cell, LayoutGrid};

/// Everything the grid parser derived from a layout
#[derive(Debug, Serialize)]
pub struct GridReport<'a> {
    pub rows: usize,
    pub columns: usize,
    pub column_starts: &'a [usize],
    pub cells: Vec<Cell<'a>>,
}

impl<'a> GridReport<'a> {
    pub fn new(grid: &'a LayoutGrid) -> Self {
        Self {
            rows: grid.row_count(),
            columns: grid.column_count(),
            column_starts: grid.column_starts(),
            cells: grid.cells().collect(),
        }
    }

    /// One header line, then one line per cell origin
    pub fn to_text(&self) -> String {
        let starts: Vec<String> = self.column_starts.iter().map(|s| s.to_string()).collect();
        let mut out = format!(
            "{} rows x {} columns (starts: {})\n",
            self.rows,
            self.columns,
            starts.join(", ")
        );
        for cell in &self.cells {
            out.push_str(&format!(
                "({}, {}) {:?} colspan={} rowspan={}\n",
                cell.column, cell.row, cell.text, cell.column_span, cell.row_span
            ));
        }
        out
    }
}

/// Indented outline of a component tree, one line per placed component
pub fn tree_outline<W>(tree: &ComponentTree<W>) -> String {
    let mut out = String::new();
    outline_frame(tree, tree.root(), 0, &mut out);
    out
}

fn outline_frame<W>(tree: &ComponentTree<W>, frame: &Frame, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    for node in tree.children(frame) {
        let p = &node.placement;
        out.push_str(&format!(
            "{}{} {:?} at ({}, {}) span {}x{} sticky={}\n",
            indent,
            node.component.kind(),
            node.name,
            p.column,
            p.row,
            p.column_span,
            p.row_span,
            p.sticky
        ));
        if let Some(child) = node.component.frame() {
            outline_frame(tree, child, depth + 1, out);
        }
    }
}
