//! Where a component sits in its frame's grid

use std::fmt;

use bitflags::bitflags;

use crate::grid::Cell;

bitflags! {
    /// Sides of its grid area a component sticks to.
    ///
    /// Sticking to opposite sides stretches the component along that axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Sticky: u8 {
        const N = 1 << 0;
        const S = 1 << 1;
        const E = 1 << 2;
        const W = 1 << 3;
        const NS = Self::N.bits() | Self::S.bits();
        const EW = Self::E.bits() | Self::W.bits();
        const NSEW = Self::NS.bits() | Self::EW.bits();
    }
}

impl Sticky {
    /// Parse a string over the letters `n`, `s`, `e`, `w` (any case, any order).
    ///
    /// Returns the first unrecognised character on failure.
    pub fn parse(text: &str) -> Result<Self, char> {
        text.chars().try_fold(Sticky::empty(), |acc, ch| {
            let side = match ch.to_ascii_lowercase() {
                'n' => Sticky::N,
                's' => Sticky::S,
                'e' => Sticky::E,
                'w' => Sticky::W,
                _ => return Err(ch),
            };
            Ok(acc | side)
        })
    }
}

impl Default for Sticky {
    fn default() -> Self {
        Sticky::NSEW
    }
}

impl fmt::Display for Sticky {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, letter) in [
            (Sticky::N, 'n'),
            (Sticky::S, 's'),
            (Sticky::E, 'e'),
            (Sticky::W, 'w'),
        ] {
            if self.contains(flag) {
                write!(f, "{}", letter)?;
            }
        }
        Ok(())
    }
}

/// Grid position, spans, and alignment of a placed component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub column: usize,
    pub row: usize,
    pub column_span: usize,
    pub row_span: usize,
    pub sticky: Sticky,
    /// Horizontal padding on each side
    pub pad_x: u32,
    /// Vertical padding on each side
    pub pad_y: u32,
}

impl Placement {
    /// Placement covering a cell's area with the given alignment
    pub fn from_cell(cell: &Cell<'_>, sticky: Sticky) -> Self {
        Self {
            column: cell.column,
            row: cell.row,
            column_span: cell.column_span,
            row_span: cell.row_span,
            sticky,
            pad_x: 0,
            pad_y: 0,
        }
    }

    /// Merge configurator overrides over this placement
    pub fn apply(&mut self, overrides: &PlacementOverrides) {
        if let Some(sticky) = overrides.sticky {
            self.sticky = sticky;
        }
        if let Some(pad_x) = overrides.pad_x {
            self.pad_x = pad_x;
        }
        if let Some(pad_y) = overrides.pad_y {
            self.pad_y = pad_y;
        }
    }
}

/// Attributes a configurator hook may override; `None` keeps the default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementOverrides {
    pub sticky: Option<Sticky>,
    pub pad_x: Option<u32>,
    pub pad_y: Option<u32>,
}

impl PlacementOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sticky(mut self, sticky: Sticky) -> Self {
        self.sticky = Some(sticky);
        self
    }

    pub fn padding(mut self, pad_x: u32, pad_y: u32) -> Self {
        self.pad_x = Some(pad_x);
        self.pad_y = Some(pad_y);
        self
    }
}
