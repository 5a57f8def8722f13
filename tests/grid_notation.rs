//! Integration tests for the grid notation parser

use blueprint_grid::{Axis, GridError, LayoutGrid};
use pretty_assertions::assert_eq;

/// The reference grid, indented the way layouts usually are in source code
fn sample() -> LayoutGrid {
    LayoutGrid::parse(concat!(
        "    a | b | c\n",
        "    x     | .\n",
        "      |   y\n",
        "         z\n",
        "    ",
    ))
}

#[test]
fn test_cell_origins() {
    let g = sample();
    assert!(g.is_cell_origin(0, 0).unwrap()); // a
    assert!(g.is_cell_origin(1, 0).unwrap()); // b
    assert!(g.is_cell_origin(0, 1).unwrap()); // x
    assert!(!g.is_cell_origin(1, 1).unwrap()); // horizontal continuation of x
    assert!(!g.is_cell_origin(2, 1).unwrap()); // vertical continuation under c
    assert!(!g.is_cell_origin(0, 2).unwrap()); // blank
    assert!(g.is_cell_origin(1, 2).unwrap()); // y
    assert!(g.is_cell_origin(0, 3).unwrap()); // z
}

#[test]
fn test_row_past_end_is_out_of_bounds() {
    let g = sample();
    assert_eq!(g.row_count(), 4);
    assert_eq!(
        g.is_cell_origin(0, 4),
        Err(GridError::OutOfBounds {
            axis: Axis::Row,
            index: 4,
            len: 4
        })
    );
    assert!(g.text(0, 4).is_err());
    assert!(g.column_span(0, 4).is_err());
    assert!(g.row_span(0, 4).is_err());
}

#[test]
fn test_cell_text() {
    let g = sample();
    assert_eq!(g.text(1, 0).unwrap(), "b");
    assert_eq!(g.text(0, 1).unwrap(), "x");
    assert_eq!(g.text(0, 3).unwrap(), "z");
    assert_eq!(g.text(0, 2).unwrap(), "");
    assert_eq!(g.text(2, 1).unwrap(), ".");
}

#[test]
fn test_column_spans() {
    let g = sample();
    assert_eq!(g.column_span(0, 0).unwrap(), 1);
    assert_eq!(g.column_span(2, 0).unwrap(), 1);
    assert_eq!(g.column_span(1, 2).unwrap(), 2); // y
    assert_eq!(g.column_span(0, 3).unwrap(), 2); // z
}

#[test]
fn test_row_spans() {
    let g = sample();
    assert_eq!(g.row_span(0, 0).unwrap(), 1); // a
    assert_eq!(g.row_span(0, 1).unwrap(), 1); // x
    assert_eq!(g.row_span(1, 0).unwrap(), 1); // b
    assert_eq!(g.row_span(2, 0).unwrap(), 2); // c
}

#[test]
fn test_unindented_sample_matches() {
    let g = LayoutGrid::parse("a | b | c\nx     | .\n  |   y\n     z\n");
    assert_eq!(g.column_starts(), &[0, 3, 7]);
    assert_eq!(g.column_span(0, 3).unwrap(), 2);
    assert_eq!(g.row_span(2, 0).unwrap(), 2);
    assert!(!g.is_cell_origin(1, 1).unwrap());
}

#[test]
fn test_overlapping_grid_spans() {
    // Describes overlapping cells: x and y both claim column 1 of row 2
    let g = LayoutGrid::parse(concat!(
        "    a | b | c\n",
        "    x     | .\n",
        "    . |   y .\n",
        "        z\n",
    ));
    assert_eq!(g.row_span(0, 0).unwrap(), 1); // a
    assert_eq!(g.row_span(2, 0).unwrap(), 2); // c
    assert_eq!(g.row_span(0, 1).unwrap(), 2); // x
    assert_eq!(g.text(1, 2).unwrap(), "y .");
}

#[test]
fn test_continuation_must_be_left_closed() {
    // The '.' lines up with column 1 but no separator closes it there, so it
    // is the text of column 0 and continues "a" instead of "b"
    let g = LayoutGrid::parse("a | b\n   .");
    assert_eq!(g.text(1, 1).unwrap(), ".");
    assert!(!g.is_cell_origin(1, 1).unwrap());
    assert_eq!(g.row_span(1, 0).unwrap(), 1);
    assert_eq!(g.row_span(0, 0).unwrap(), 2);
}

#[test]
fn test_continuation_text_must_match_exactly() {
    let g = LayoutGrid::parse("a | b\nc |  .x\n  |   .");
    assert_eq!(g.row_span(1, 0).unwrap(), 1);
    assert_eq!(g.text(1, 1).unwrap(), ".x");
    assert_eq!(g.row_span(1, 1).unwrap(), 2);
}

#[test]
fn test_row_span_stops_at_last_row() {
    let g = LayoutGrid::parse("a\n.\n.");
    assert_eq!(g.row_span(0, 0).unwrap(), 3);
    assert_eq!(g.row_span(0, 2).unwrap(), 1);
}

#[test]
fn test_row_count_ignores_trailing_blank_lines() {
    assert_eq!(LayoutGrid::parse("").row_count(), 0);
    assert_eq!(LayoutGrid::parse("a\nb\n\n   \n").row_count(), 2);
    assert_eq!(LayoutGrid::parse("\na").row_count(), 2);
}

#[test]
fn test_column_starts_ascending_with_zero() {
    for text in ["", "a", "a|b", "  | x |\n|", "x |  y\n    | z |"] {
        let g = LayoutGrid::parse(text);
        let starts = g.column_starts();
        assert_eq!(starts[0], 0, "text {:?}", text);
        assert!(starts.windows(2).all(|w| w[0] < w[1]), "text {:?}", text);
        assert_eq!(g.column_count(), starts.len());
    }
}

#[test]
fn test_parse_is_idempotent() {
    let text = "a | b | c\nx     | .\n  |   y\n     z";
    let first = LayoutGrid::parse(text);
    let second = LayoutGrid::parse(text);
    assert_eq!(first, second);
    for row in 0..first.row_count() {
        for col in 0..first.column_count() {
            assert_eq!(first.is_cell_origin(col, row), second.is_cell_origin(col, row));
            assert_eq!(first.text(col, row), second.text(col, row));
            assert_eq!(first.column_span(col, row), second.column_span(col, row));
            assert_eq!(first.row_span(col, row), second.row_span(col, row));
        }
    }
}

#[test]
fn test_rows_define_spans_independently() {
    let g = LayoutGrid::parse("a | b | c\nd     | e\nf");
    assert_eq!(g.column_span(0, 0).unwrap(), 1);
    assert_eq!(g.column_span(0, 1).unwrap(), 2);
    assert_eq!(g.column_span(2, 1).unwrap(), 1);
    assert_eq!(g.column_span(0, 2).unwrap(), 1);
}

#[test]
fn test_every_line_terminator_breaks_rows() {
    let g = LayoutGrid::parse("a | b\rc | d");
    assert_eq!(g.row_count(), 2);
    assert_eq!(g.text(1, 0).unwrap(), "b");
    assert_eq!(g.text(1, 1).unwrap(), "d");
    assert_eq!(g.cell_span(1, 1).unwrap(), 10..11);

    let g = LayoutGrid::parse("a | b\u{0c}c\u{2028}d | e\r\n\r");
    assert_eq!(g.row_count(), 3);
    assert_eq!(g.text(0, 1).unwrap(), "c");
    assert_eq!(g.text(1, 2).unwrap(), "e");
}
