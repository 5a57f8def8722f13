//! Error types for building component trees

use thiserror::Error;

use crate::error::GridError;

/// Errors that can occur while building a component tree
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A grid query failed or a strict build rejected the layout
    #[error(transparent)]
    Grid(#[from] GridError),

    /// A sub-layout contains itself, directly or through further nesting
    #[error("circular sub-layout reference: {}", chain.join(" -> "))]
    CircularLayout { chain: Vec<String> },
}

impl BuildError {
    pub fn circular(chain: Vec<String>) -> Self {
        Self::CircularLayout { chain }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circular_display() {
        let err = BuildError::circular(vec!["form".to_string(), "inner".to_string(), "form".to_string()]);
        assert!(err.to_string().contains("form -> inner -> form"));
    }

    #[test]
    fn test_grid_error_is_transparent() {
        let err = BuildError::from(GridError::malformed("cells overlap"));
        assert_eq!(err.to_string(), "malformed layout: cells overlap");
    }
}
