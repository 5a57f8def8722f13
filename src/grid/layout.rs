//! The human-authored grid notation
//!
//! A layout is a block of text where `|` separates cells. Every separator, on
//! any row, opens a column boundary one character to its right; the union of
//! those boundaries (plus offset 0) forms the grid's columns.
//!
//! ```text
//! a | b | c
//! x     | .
//!   |   y
//!      z
//! ```
//!
//! Here `x` spans two columns because its row has no separator between the
//! starts of columns 0 and 1, `c` spans two rows because of the `.` below it,
//! and the blank cell at the start of the third row reserves space.

use serde::Serialize;

use crate::error::{GridError, Span};

use super::lexer::separator_offsets;

/// Text of a cell that reserves space without holding anything
pub const EMPTY: &str = "";

/// Text of a cell that continues the cell above it downward
pub const VERTICAL_CONTINUATION: &str = ".";

/// One line of the grid, indexed by character
#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    line: String,
    /// Byte offset of every char, plus one trailing entry for `line.len()`
    char_bytes: Vec<usize>,
    /// Character offsets of separators, ascending
    separators: Vec<usize>,
    /// Character offset of the line within the parsed source
    source_offset: usize,
}

impl Row {
    fn new(line: &str, source_offset: usize) -> Self {
        let mut char_bytes: Vec<usize> = line.char_indices().map(|(i, _)| i).collect();
        char_bytes.push(line.len());
        Self {
            line: line.to_string(),
            char_bytes,
            separators: separator_offsets(line),
            source_offset,
        }
    }

    /// Length in characters
    fn len(&self) -> usize {
        self.char_bytes.len() - 1
    }

    fn is_separator_at(&self, pos: usize) -> bool {
        self.separators.binary_search(&pos).is_ok()
    }

    /// First separator at or after `from`
    fn next_separator(&self, from: usize) -> Option<usize> {
        let idx = self.separators.partition_point(|&p| p < from);
        self.separators.get(idx).copied()
    }

    /// Character range of the cell text starting at `start`, untrimmed
    fn region(&self, start: usize) -> (usize, usize) {
        let start = start.min(self.len());
        let end = self.next_separator(start).unwrap_or(self.len());
        (start, end)
    }

    fn slice(&self, start: usize, end: usize) -> &str {
        &self.line[self.char_bytes[start]..self.char_bytes[end]]
    }
}

/// A parsed layout; immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutGrid {
    rows: Vec<Row>,
    column_starts: Vec<usize>,
}

/// The origin of a cell, as yielded by [`LayoutGrid::cells`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell<'a> {
    pub column: usize,
    pub row: usize,
    pub text: &'a str,
    pub column_span: usize,
    pub row_span: usize,
}

impl LayoutGrid {
    /// Parse layout text. Never fails; empty text gives an empty grid.
    pub fn parse(text: &str) -> Self {
        let text = text.trim_end_matches(|c: char| c.is_whitespace() || is_line_break(c));
        let rows: Vec<Row> = if text.is_empty() {
            Vec::new()
        } else {
            split_lines(text)
                .into_iter()
                .map(|(line, offset)| Row::new(line, offset))
                .collect()
        };

        let mut column_starts: Vec<usize> = rows
            .iter()
            .flat_map(|row| row.separators.iter().map(|&sep| sep + 1))
            .chain(std::iter::once(0))
            .collect();
        column_starts.sort_unstable();
        column_starts.dedup();

        tracing::debug!(
            rows = rows.len(),
            columns = column_starts.len(),
            "parsed layout grid"
        );

        Self {
            rows,
            column_starts,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_starts.len()
    }

    /// Ascending character offsets where columns begin; always starts with 0
    pub fn column_starts(&self) -> &[usize] {
        &self.column_starts
    }

    /// The raw text of a row
    pub fn line(&self, row: usize) -> Result<&str, GridError> {
        Ok(&self.row(row)?.line)
    }

    /// Is `(col, row)` the top-left corner of a cell?
    pub fn is_cell_origin(&self, col: usize, row: usize) -> Result<bool, GridError> {
        let (start, line) = self.address(col, row)?;
        Ok(self.is_origin_at(col, start, line))
    }

    /// Trimmed text of the cell region starting at `(col, row)`
    pub fn text(&self, col: usize, row: usize) -> Result<&str, GridError> {
        let (start, line) = self.address(col, row)?;
        Ok(text_at(start, line))
    }

    /// Number of columns covered by the cell starting at `(col, row)`
    pub fn column_span(&self, col: usize, row: usize) -> Result<usize, GridError> {
        let (start, line) = self.address(col, row)?;
        Ok(self.column_span_at(col, start, line))
    }

    /// Number of rows covered by the cell starting at `(col, row)`
    pub fn row_span(&self, col: usize, row: usize) -> Result<usize, GridError> {
        self.address(col, row)?;
        Ok(self.row_span_at(col, row))
    }

    /// Character range of the cell's trimmed text within the parsed source
    pub fn cell_span(&self, col: usize, row: usize) -> Result<Span, GridError> {
        let (start, line) = self.address(col, row)?;
        let (start, end) = line.region(start);
        let raw = line.slice(start, end);
        let lead = raw.chars().count() - raw.trim_start().chars().count();
        let len = raw.trim().chars().count();
        let from = line.source_offset + start + lead;
        Ok(from..from + len)
    }

    /// All cell origins in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell<'_>> + '_ {
        self.rows.iter().enumerate().flat_map(move |(r, line)| {
            self.column_starts
                .iter()
                .enumerate()
                .filter(move |&(c, &start)| self.is_origin_at(c, start, line))
                .map(move |(c, &start)| Cell {
                    column: c,
                    row: r,
                    text: text_at(start, line),
                    column_span: self.column_span_at(c, start, line),
                    row_span: self.row_span_at(c, r),
                })
        })
    }

    fn row(&self, row: usize) -> Result<&Row, GridError> {
        self.rows
            .get(row)
            .ok_or_else(|| GridError::row_out_of_bounds(row, self.rows.len()))
    }

    fn address(&self, col: usize, row: usize) -> Result<(usize, &Row), GridError> {
        let line = self.row(row)?;
        let start = *self
            .column_starts
            .get(col)
            .ok_or_else(|| GridError::column_out_of_bounds(col, self.column_starts.len()))?;
        Ok((start, line))
    }

    fn is_left_closed(&self, col: usize, start: usize, line: &Row) -> bool {
        col == 0 || line.is_separator_at(start - 1)
    }

    fn is_origin_at(&self, col: usize, start: usize, line: &Row) -> bool {
        if !self.is_left_closed(col, start, line) {
            return false;
        }
        let text = text_at(start, line);
        text != EMPTY && text != VERTICAL_CONTINUATION
    }

    pub(crate) fn is_continuation(&self, col: usize, row: usize) -> bool {
        let start = self.column_starts[col];
        let line = &self.rows[row];
        self.is_left_closed(col, start, line) && text_at(start, line) == VERTICAL_CONTINUATION
    }

    fn column_span_at(&self, col: usize, start: usize, line: &Row) -> usize {
        let span_end = if start > line.len() {
            line.len()
        } else {
            line.next_separator(start).unwrap_or(line.len())
        };
        let end = self.column_starts.partition_point(|&pos| pos <= span_end);
        end.saturating_sub(col).max(1)
    }

    fn row_span_at(&self, col: usize, row: usize) -> usize {
        1 + (row + 1..self.rows.len())
            .take_while(|&r| self.is_continuation(col, r))
            .count()
    }
}

impl From<&str> for LayoutGrid {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Characters that end a row; `\r\n` counts as a single break
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines, each with the character offset where it starts
fn split_lines(text: &str) -> Vec<(&str, usize)> {
    let mut lines = Vec::new();
    let mut chars = text.char_indices().peekable();
    let (mut start_byte, mut start_char, mut pos) = (0, 0, 0);
    while let Some((i, c)) = chars.next() {
        pos += 1;
        if !is_line_break(c) {
            continue;
        }
        lines.push((&text[start_byte..i], start_char));
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                pos += 1;
                end = j + 1;
            }
        }
        start_byte = end;
        start_char = pos;
    }
    lines.push((&text[start_byte..], start_char));
    lines
}

fn text_at(start: usize, line: &Row) -> &str {
    let (start, end) = line.region(start);
    line.slice(start, end).trim()
}
