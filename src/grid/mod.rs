//! Parser for the grid layout notation

mod layout;
pub mod lexer;
pub mod lint;

pub use layout::{Cell, LayoutGrid, EMPTY, VERTICAL_CONTINUATION};
pub use lint::{LintCategory, LintWarning};
