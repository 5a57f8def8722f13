//! Blueprint Grid - ASCII-art grid layouts resolved to component trees
//!
//! A layout is written as text, with `|` between cells:
//!
//! ```text
//! Username: | username
//! Password: | password
//! quit
//! ```
//!
//! [`LayoutGrid`] parses the text into rows, columns, and cells with column and
//! row spans. [`ComponentBuilder`] walks those cells and resolves each name
//! through caller-supplied hooks into a [`ComponentTree`].
//!
//! # Example
//!
//! ```rust
//! use blueprint_grid::LayoutGrid;
//!
//! let grid = LayoutGrid::parse("a | b\nwide");
//! assert_eq!(grid.column_count(), 2);
//! assert_eq!(grid.text(0, 1).unwrap(), "wide");
//! assert_eq!(grid.column_span(0, 1).unwrap(), 2);
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod grid;
pub mod report;

pub use builder::{
    BuildError, Component, ComponentBuilder, ComponentId, ComponentTree, Frame, LayoutSource,
    Placement, PlacementOverrides, Sticky, Value, Variable,
};
pub use config::{BuilderConfig, ConfigError};
pub use error::{Axis, GridError};
pub use grid::{Cell, LayoutGrid, LintCategory, LintWarning};
pub use report::{tree_outline, GridReport};

/// Lint a layout, returning its warnings
///
/// # Example
///
/// ```rust
/// use blueprint_grid::{lint, LintCategory};
///
/// let warnings = lint(". | a");
/// assert_eq!(warnings[0].category, LintCategory::Continuation);
/// ```
pub fn lint(source: &str) -> Vec<LintWarning> {
    grid::lint::check(&LayoutGrid::parse(source))
}
