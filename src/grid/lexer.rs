//! Lexer for a single grid row using logos

use logos::Logos;

/// Byte range in a row
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("|")]
    Separator,

    #[regex(r"[^|\r\n]+")]
    Text,
}

/// Lex a row into tokens with byte spans.
///
/// Anything logos cannot match (only line breaks, which rows never contain)
/// is folded into `Text`.
pub fn lex_row(line: &str) -> Vec<(Token, Span)> {
    Token::lexer(line)
        .spanned()
        .map(|(tok, span)| (tok.unwrap_or(Token::Text), span))
        .collect()
}

/// Character offsets of every separator in a row, ascending.
pub fn separator_offsets(line: &str) -> Vec<usize> {
    let mut offsets = Vec::new();
    let mut chars = 0;
    for (tok, span) in lex_row(line) {
        if tok == Token::Separator {
            offsets.push(chars);
        }
        chars += line[span].chars().count();
    }
    offsets
}
