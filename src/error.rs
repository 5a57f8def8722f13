//! Error types for grid parsing and queries

use std::fmt;

use thiserror::Error;

/// Character range in source text
pub type Span = std::ops::Range<usize>;

/// Grid dimension an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index outside the addressable grid
    #[error("{axis} index {index} out of bounds (grid has {len} {axis}s)")]
    OutOfBounds { axis: Axis, index: usize, len: usize },

    /// Grid text that cannot describe a valid layout
    #[error("malformed layout: {reason}")]
    MalformedLayout { reason: String },
}

impl GridError {
    pub fn row_out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds {
            axis: Axis::Row,
            index,
            len,
        }
    }

    pub fn column_out_of_bounds(index: usize, len: usize) -> Self {
        Self::OutOfBounds {
            axis: Axis::Column,
            index,
            len,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedLayout {
            reason: reason.into(),
        }
    }
}
