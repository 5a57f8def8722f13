//! Lint checks for grid layouts.
//!
//! Almost any text parses, so most authoring mistakes surface as a surprising
//! layout rather than an error. These checks point at the suspicious cells:
//! overlapping cells, continuation markers with nothing to continue, and names
//! used twice in one grid.

use std::collections::HashMap;
use std::fmt;

use ariadne::{Color, Label, Report, ReportKind, Source};

use crate::error::Span;

use super::layout::{Cell, LayoutGrid};

/// A lint warning about a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
    /// Character range of the offending cell in the grid source
    pub span: Span,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Overlap,
    Continuation,
    Duplicate,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Continuation => write!(f, "continuation"),
            LintCategory::Duplicate => write!(f, "duplicate"),
        }
    }
}

impl LintWarning {
    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Warning, filename, self.span.start)
            .with_message(format!("{}: {}", self.category, self.message))
            .with_label(
                Label::new((filename, self.span.clone()))
                    .with_message(&self.message)
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);
        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => format!("{}: {}", self.category, self.message),
        }
    }
}

/// Run all lint checks on a grid.
pub fn check(grid: &LayoutGrid) -> Vec<LintWarning> {
    let cells: Vec<Cell<'_>> = grid.cells().collect();
    let mut warnings = Vec::new();
    check_overlaps(grid, &cells, &mut warnings);
    check_continuations(grid, &mut warnings);
    check_duplicates(grid, &cells, &mut warnings);
    warnings
}

/// Only the overlap check; builds use it to vet each grid they resolve.
pub fn overlaps_in(grid: &LayoutGrid) -> Vec<LintWarning> {
    let cells: Vec<Cell<'_>> = grid.cells().collect();
    let mut warnings = Vec::new();
    check_overlaps(grid, &cells, &mut warnings);
    warnings
}

fn span_of(grid: &LayoutGrid, col: usize, row: usize) -> Span {
    grid.cell_span(col, row).unwrap_or_default()
}

fn overlaps(a: &Cell<'_>, b: &Cell<'_>) -> bool {
    a.column < b.column + b.column_span
        && b.column < a.column + a.column_span
        && a.row < b.row + b.row_span
        && b.row < a.row + a.row_span
}

// ── Overlapping cells ─────────────────────────────────────────────

fn check_overlaps(grid: &LayoutGrid, cells: &[Cell<'_>], warnings: &mut Vec<LintWarning>) {
    for (i, later) in cells.iter().enumerate() {
        for earlier in &cells[..i] {
            if overlaps(earlier, later) {
                warnings.push(LintWarning {
                    category: LintCategory::Overlap,
                    message: format!(
                        "\"{}\" at ({}, {}) overlaps \"{}\" at ({}, {})",
                        later.text, later.column, later.row, earlier.text, earlier.column, earlier.row
                    ),
                    span: span_of(grid, later.column, later.row),
                });
            }
        }
    }
}

// ── Orphaned continuation markers ─────────────────────────────────

fn check_continuations(grid: &LayoutGrid, warnings: &mut Vec<LintWarning>) {
    for row in 0..grid.row_count() {
        for col in 0..grid.column_count() {
            if !grid.is_continuation(col, row) {
                continue;
            }
            let continues_above = row > 0
                && (matches!(grid.is_cell_origin(col, row - 1), Ok(true))
                    || grid.is_continuation(col, row - 1));
            if !continues_above {
                warnings.push(LintWarning {
                    category: LintCategory::Continuation,
                    message: format!(
                        "continuation marker at ({}, {}) has no cell above it",
                        col, row
                    ),
                    span: span_of(grid, col, row),
                });
            }
        }
    }
}

// ── Duplicate names ───────────────────────────────────────────────

fn check_duplicates(grid: &LayoutGrid, cells: &[Cell<'_>], warnings: &mut Vec<LintWarning>) {
    let mut first_seen: HashMap<&str, (usize, usize)> = HashMap::new();
    for cell in cells {
        match first_seen.get(cell.text) {
            Some(&(col, row)) => warnings.push(LintWarning {
                category: LintCategory::Duplicate,
                message: format!(
                    "\"{}\" at ({}, {}) replaces the one at ({}, {})",
                    cell.text, cell.column, cell.row, col, row
                ),
                span: span_of(grid, cell.column, cell.row),
            }),
            None => {
                first_seen.insert(cell.text, (cell.column, cell.row));
            }
        }
    }
}
