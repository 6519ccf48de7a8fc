//! Block and paragraph segmentation

use kprg_ast::Span;
use kprg_lexer::{Delimiter, split_span};

/// Paragraphs containing any of these are verification commentary, not data
pub const NOISE_MARKERS: [&str; 3] = ["Checksum", "* Keccak with width", "    - OK"];

/// Whether a paragraph is commentary to be dropped
///
/// Markers match as case-sensitive substrings anywhere in the paragraph.
/// Whitespace-only paragraphs carry no content and are dropped as well.
#[must_use]
pub fn is_noise(paragraph: &str) -> bool {
    paragraph.trim().is_empty() || NOISE_MARKERS.iter().any(|marker| paragraph.contains(marker))
}

/// One separator-delimited segment of a report, trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Zero-based position among all segments, skipped ones included
    pub index: usize,
    pub span: Span,
    /// Paragraphs left after noise filtering, in source order
    pub paragraphs: Vec<Span>,
}

impl Block {
    /// The paragraph holding the test case; later ones are ignored
    #[must_use]
    pub fn data_paragraph(&self) -> Option<Span> {
        self.paragraphs.first().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

/// Cut `source` into blocks and filter their paragraphs
#[must_use]
pub fn blocks(source: &str) -> Vec<Block> {
    split_span(source, Span::new(0, source.len()), Delimiter::Separator)
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            let span = raw.trimmed(source);
            let paragraphs = split_span(source, span, Delimiter::ParagraphBreak)
                .into_iter()
                .filter(|paragraph| !is_noise(paragraph.slice(source)))
                .collect();
            Block {
                index,
                span,
                paragraphs,
            }
        })
        .collect()
}
