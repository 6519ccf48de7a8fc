//! Data model for kprg
//!
//! Extracted test-case records plus the located diagnostics reported while
//! reading a Keccak PRG report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte range in the report text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice `source` with this span
    #[must_use]
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }

    /// Shrink the span so it excludes leading and trailing whitespace of `source`
    #[must_use]
    pub fn trimmed(self, source: &str) -> Self {
        let text = self.slice(source);
        let leading = text.len() - text.trim_start().len();
        let trimmed_len = text.trim().len();
        if trimmed_len == 0 {
            return Self::new(self.start, self.start);
        }
        Self::new(self.start + leading, self.start + leading + trimmed_len)
    }
}

/// Line and column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Convert byte span to line/column positions
pub struct SourceMap {
    line_starts: Vec<usize>,
}

impl SourceMap {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(pos + 1);
            }
        }
        Self { line_starts }
    }

    #[must_use]
    pub fn position(&self, byte_offset: usize) -> Position {
        match self.line_starts.binary_search(&byte_offset) {
            Ok(line) => Position::new(line + 1, 1),
            Err(line) => {
                let line_start = self.line_starts[line - 1];
                Position::new(line, byte_offset - line_start + 1)
            }
        }
    }
}

/// One extracted test case, serialized as `{capacity, input, output}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseRecord {
    /// Capacity `c` of the sponge, in bits, kept verbatim
    pub capacity: String,
    /// Input bits as hex, no separators
    pub input: String,
    /// Output bits as hex, no separators
    pub output: String,
}

impl TestCaseRecord {
    #[must_use]
    pub fn new(
        capacity: impl Into<String>,
        input: impl Into<String>,
        output: impl Into<String>,
    ) -> Self {
        Self {
            capacity: capacity.into(),
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Named line of a data paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// `Keccak[r=<R>, c=<C>]`
    Header,
    /// `Input of <N> bits: <hex>`
    Input,
    /// `Output of <N> bits: <hex>`
    Output,
}

impl Field {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Input => "input",
            Self::Output => "output",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category of a [`Diagnostic`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    FormatAnomaly,
    ExtractionFailure,
    MissingLine,
}

impl DiagnosticKind {
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FormatAnomaly => "WARN_FORMAT",
            Self::ExtractionFailure => "ERR_EXTRACT",
            Self::MissingLine => "ERR_MISSING_LINE",
        }
    }

    /// Whether the block's record was dropped because of this diagnostic
    #[must_use]
    pub const fn drops_record(self) -> bool {
        !matches!(self, Self::FormatAnomaly)
    }
}

/// Non-fatal problem found in one block, with location information
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    #[error(
        "kprg:{filename}:{line}:{column}: WARN_FORMAT: block {block}: {field} line does not start with {expected:?}: {found:?}"
    )]
    FormatAnomaly {
        block: usize,
        field: Field,
        expected: &'static str,
        found: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("kprg:{filename}:{line}:{column}: ERR_EXTRACT: block {block}: {message}")]
    ExtractionFailure {
        block: usize,
        field: Field,
        message: String,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },

    #[error("kprg:{filename}:{line}:{column}: ERR_MISSING_LINE: block {block}: no {field} line")]
    MissingLine {
        block: usize,
        field: Field,
        span: Span,
        filename: String,
        line: usize,
        column: usize,
    },
}

impl Diagnostic {
    #[must_use]
    pub fn format_anomaly(
        block: usize,
        field: Field,
        expected: &'static str,
        found: &str,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::FormatAnomaly {
            block,
            field,
            expected,
            found: found.to_string(),
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn extraction_failure(
        block: usize,
        field: Field,
        message: String,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::ExtractionFailure {
            block,
            field,
            message,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub fn missing_line(
        block: usize,
        field: Field,
        span: Span,
        source_map: &SourceMap,
        filename: &str,
    ) -> Self {
        let pos = source_map.position(span.start);
        Self::MissingLine {
            block,
            field,
            span,
            filename: filename.to_string(),
            line: pos.line,
            column: pos.column,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::FormatAnomaly { .. } => DiagnosticKind::FormatAnomaly,
            Self::ExtractionFailure { .. } => DiagnosticKind::ExtractionFailure,
            Self::MissingLine { .. } => DiagnosticKind::MissingLine,
        }
    }

    /// Zero-based index of the block the diagnostic belongs to
    #[must_use]
    pub const fn block(&self) -> usize {
        match self {
            Self::FormatAnomaly { block, .. }
            | Self::ExtractionFailure { block, .. }
            | Self::MissingLine { block, .. } => *block,
        }
    }

    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::FormatAnomaly { field, .. }
            | Self::ExtractionFailure { field, .. }
            | Self::MissingLine { field, .. } => *field,
        }
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::FormatAnomaly { span, .. }
            | Self::ExtractionFailure { span, .. }
            | Self::MissingLine { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::FormatAnomaly { line, column, .. }
            | Self::ExtractionFailure { line, column, .. }
            | Self::MissingLine { line, column, .. } => Position::new(*line, *column),
        }
    }
}

/// Everything a parse produces
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseOutput {
    pub records: Vec<TestCaseRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn into_records(self) -> Vec<TestCaseRecord> {
        self.records
    }
}
