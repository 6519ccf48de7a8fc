//! Structural lexer for Keccak PRG reports
//!
//! Tokenizes report text into runs of `=`, runs of newlines, and plain text
//! using logos. Block separators, blank lines and line breaks are all carved
//! out of those runs, so splitting never needs the lexer to backtrack.

use kprg_ast::Span;
use logos::Logos;

/// Literal line that delimits blocks in a report
pub const SEPARATOR: &str = "================================";

/// Number of `=` characters in [`SEPARATOR`]
pub const SEPARATOR_WIDTH: usize = SEPARATOR.len();

/// Report tokens
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Run of `=` characters; every 32 of them form a block separator
    #[regex(r"=+")]
    Equals,

    /// Run of `\n` characters; every pair of them is a blank line
    #[regex(r"\n+")]
    Newlines,

    /// Anything else, up to the next `=` or newline
    #[regex(r"[^=\n]+")]
    Text,

    /// End of input
    Eof,

    /// Lexer error
    Error,
}

/// Token with location information
#[derive(Debug, Clone)]
pub struct SpannedToken {
    pub token: Token,
    pub span: Span,
    pub text: String,
}

/// Literal delimiters a report is cut on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    /// [`SEPARATOR`], between blocks
    Separator,
    /// `\n\n`, between paragraphs
    ParagraphBreak,
    /// `\n`, between lines
    LineBreak,
}

impl Delimiter {
    const fn token(self) -> Token {
        match self {
            Self::Separator => Token::Equals,
            Self::ParagraphBreak | Self::LineBreak => Token::Newlines,
        }
    }

    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Self::Separator => SEPARATOR_WIDTH,
            Self::ParagraphBreak => 2,
            Self::LineBreak => 1,
        }
    }
}

/// Lexer that produces tokens with spans
///
/// Spans are absolute: `offset` is added to every position so a slice of a
/// larger report can be lexed on its own.
pub struct Lexer<'input> {
    lexer: logos::Lexer<'input, Token>,
    input: &'input str,
    offset: usize,
}

impl<'input> Lexer<'input> {
    #[must_use]
    pub fn new(input: &'input str) -> Self {
        Self::with_offset(input, 0)
    }

    #[must_use]
    pub fn with_offset(input: &'input str, offset: usize) -> Self {
        Self {
            lexer: Token::lexer(input),
            input,
            offset,
        }
    }

    /// Get the next token with span information
    pub fn next_token(&mut self) -> SpannedToken {
        match self.lexer.next() {
            Some(Ok(token)) => self.spanned(token),
            Some(Err(())) => self.spanned(Token::Error),
            None => SpannedToken {
                token: Token::Eof,
                span: Span::new(self.offset + self.input.len(), self.offset + self.input.len()),
                text: String::new(),
            },
        }
    }

    fn spanned(&self, token: Token) -> SpannedToken {
        let span = self.lexer.span();
        SpannedToken {
            token,
            span: Span::new(self.offset + span.start, self.offset + span.end),
            text: self.input[span].to_string(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<SpannedToken> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.token == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Cut the input on `delimiter` and return the spans of the pieces
    ///
    /// Delimiters are matched literally, left to right and without overlap,
    /// so a run of 33 `=` yields one separator followed by a stray `=` that
    /// belongs to the next piece. An input with `n` delimiters always yields
    /// `n + 1` pieces, empty ones included.
    pub fn split(&mut self, delimiter: Delimiter) -> Vec<Span> {
        let width = delimiter.width();
        let mut pieces = Vec::new();
        let mut piece_start = self.offset;

        for token in self.tokenize() {
            if token.token != delimiter.token() {
                continue;
            }
            let count = token.span.len() / width;
            for cut in 0..count {
                let cut_start = token.span.start + cut * width;
                pieces.push(Span::new(piece_start, cut_start));
                piece_start = cut_start + width;
            }
        }

        pieces.push(Span::new(piece_start, self.offset + self.input.len()));
        pieces
    }
}

/// Split the slice of `source` covered by `span` on `delimiter`
#[must_use]
pub fn split_span(source: &str, span: Span, delimiter: Delimiter) -> Vec<Span> {
    Lexer::with_offset(span.slice(source), span.start).split(delimiter)
}
