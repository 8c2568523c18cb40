//! Row/cell extraction from a located table
//!
//! The extractor walks every descendant of the table in document order. Each
//! `tr` contributes one row built from its direct `td`/`th` children, so rows
//! inside `thead`, `tbody`, `tfoot` or any other wrapper are all collected in
//! source order. Rows without cells are dropped.

use markup5ever_rcdom::Handle;
use phf::phf_set;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::node_util::{element_tag_name, first_child_text, flattened_text, is_element_named};

/// One table row: cell texts in document order.
pub type Row = Vec<String>;

static CELL_TAGS: phf::Set<&'static str> = phf_set! {
    "td",
    "th",
};

/// How the text of a `td`/`th` cell is read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellTextMode {
    /// All descendant text, concatenated and trimmed.
    ///
    /// `<td><b>Name</b></td>` yields `Name`.
    #[default]
    Flatten,
    /// The cell's first child only, untrimmed.
    ///
    /// A text child yields its raw text and an element child yields its tag
    /// name, so `<td><b>Name</b></td>` yields `b`. Empty cells yield `""`.
    FirstChild,
}

impl CellTextMode {
    fn cell_text(self, cell: &Handle) -> String {
        match self {
            CellTextMode::Flatten => flattened_text(cell).trim().to_string(),
            CellTextMode::FirstChild => first_child_text(cell),
        }
    }
}

impl FromStr for CellTextMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flatten" => Ok(CellTextMode::Flatten),
            "first-child" | "first_child" => Ok(CellTextMode::FirstChild),
            other => Err(format!(
                "unknown cell text mode '{other}' (expected 'flatten' or 'first-child')"
            )),
        }
    }
}

/// Ordered rows extracted from one table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, ignoring rows without cells.
    pub fn push_row(&mut self, row: Row) {
        if !row.is_empty() {
            self.rows.push(row);
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        let mut grid = Grid::new();
        for row in rows {
            grid.push_row(row);
        }
        grid
    }
}

/// Collect the rows below `table` in document order.
///
/// Safe on any node: a subtree without `tr` elements yields an empty grid.
pub fn extract_grid(table: &Handle, mode: CellTextMode) -> Grid {
    let mut grid = Grid::new();
    let mut stack: Vec<Handle> = table.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if is_element_named(&node, "tr") {
            grid.push_row(extract_row(&node, mode));
        }
        stack.extend(node.children.borrow().iter().rev().cloned());
    }

    grid
}

/// Cells of one `tr`, taken from its direct children only.
fn extract_row(tr: &Handle, mode: CellTextMode) -> Row {
    tr.children
        .borrow()
        .iter()
        .filter(|child| element_tag_name(child).is_some_and(|tag| CELL_TAGS.contains(tag)))
        .map(|cell| mode.cell_text(cell))
        .collect()
}
