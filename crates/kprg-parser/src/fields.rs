//! Named-field extraction for data paragraphs
//!
//! A data paragraph is read through [`SCHEMA`], which says which line holds
//! which field and what that line is expected to start with. Lines past the
//! last slot are ignored.

use kprg_ast::{Field, Span};
use once_cell::sync::Lazy;
use regex::Regex;

/// Where a field lives in a data paragraph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    /// Zero-based line index within the paragraph
    pub slot: usize,
    /// Expected line prefix; a mismatch is only a warning
    pub prefix: &'static str,
}

pub const SCHEMA: [FieldSpec; 3] = [
    FieldSpec {
        field: Field::Header,
        slot: 0,
        prefix: "Keccak[",
    },
    FieldSpec {
        field: Field::Input,
        slot: 1,
        prefix: "Input of",
    },
    FieldSpec {
        field: Field::Output,
        slot: 2,
        prefix: "Output of",
    },
];

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Keccak\[r=([0-9]+), c=([0-9]+)\]").expect("static regex must compile")
});

/// A paragraph line bound to the field it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLine<'a> {
    pub spec: FieldSpec,
    pub text: &'a str,
    pub span: Span,
}

impl FieldLine<'_> {
    #[must_use]
    pub fn has_expected_prefix(&self) -> bool {
        self.text.starts_with(self.spec.prefix)
    }

    /// Extract the normalized value of this line
    ///
    /// # Errors
    ///
    /// Returns a description of the failure when the line holds no value
    pub fn extract(&self) -> Result<String, String> {
        match self.spec.field {
            Field::Header => capacity(self.text)
                .map(str::to_string)
                .ok_or_else(|| format!("no capacity in header line {:?}", self.text)),
            Field::Input | Field::Output => hex_value(self.text).ok_or_else(|| {
                format!("no ':' in {} line {:?}", self.spec.field, self.text)
            }),
        }
    }
}

/// Bind paragraph lines to fields
///
/// # Errors
///
/// Returns the first field whose line is missing
pub fn locate<'a>(source: &'a str, lines: &[Span]) -> Result<Vec<FieldLine<'a>>, Field> {
    SCHEMA
        .iter()
        .map(|spec| {
            lines
                .get(spec.slot)
                .map(|span| FieldLine {
                    spec: *spec,
                    text: span.slice(source),
                    span: *span,
                })
                .ok_or(spec.field)
        })
        .collect()
}

/// The `c` value of a `Keccak[r=<R>, c=<C>]` header, found anywhere in the line
#[must_use]
pub fn capacity(header: &str) -> Option<&str> {
    HEADER_RE
        .captures(header)
        .and_then(|captures| captures.get(2))
        .map(|c| c.as_str())
}

/// Everything after the first `:`, trimmed, with spaces removed
#[must_use]
pub fn hex_value(line: &str) -> Option<String> {
    line.split_once(':')
        .map(|(_, value)| value.trim().replace(' ', ""))
}
