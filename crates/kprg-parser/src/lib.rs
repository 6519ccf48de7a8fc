//! Report parser for kprg
//!
//! Turns the text of a Keccak PRG report into test-case records. Parsing
//! never fails: anomalies become diagnostics and the affected block is
//! reported instead of aborting the run.

use kprg_ast::{Diagnostic, Field, ParseOutput, SourceMap, Span, TestCaseRecord};
use kprg_lexer::{Delimiter, split_span};

// Block and paragraph segmentation
pub mod segment;

// Named-field extraction
pub mod fields;

pub use segment::{Block, NOISE_MARKERS};

pub struct Parser {
    input: String,
    source_map: SourceMap,
    filename: String,
}

impl Parser {
    /// Create a new parser for the given report text
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::new_with_filename(input, "<input>")
    }

    /// Create a new parser for the given report text with a filename
    #[must_use]
    pub fn new_with_filename(input: &str, filename: &str) -> Self {
        Self {
            input: input.to_string(),
            source_map: SourceMap::new(input),
            filename: filename.to_string(),
        }
    }

    /// Extract every record the report holds, in block order
    #[must_use]
    pub fn parse(&self) -> ParseOutput {
        let mut output = ParseOutput::default();

        for block in segment::blocks(&self.input) {
            if let Some(record) = self.parse_block(&block, &mut output.diagnostics) {
                output.records.push(record);
            }
        }

        output
    }

    fn parse_block(
        &self,
        block: &Block,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Option<TestCaseRecord> {
        let paragraph = block.data_paragraph()?;
        let lines = split_span(&self.input, paragraph, Delimiter::LineBreak);

        let field_lines = match fields::locate(&self.input, &lines) {
            Ok(field_lines) => field_lines,
            Err(field) => {
                diagnostics.push(Diagnostic::missing_line(
                    block.index,
                    field,
                    Span::new(paragraph.end, paragraph.end),
                    &self.source_map,
                    &self.filename,
                ));
                return None;
            }
        };

        let mut capacity = None;
        let mut input = None;
        let mut output = None;

        for line in &field_lines {
            if !line.has_expected_prefix() {
                diagnostics.push(Diagnostic::format_anomaly(
                    block.index,
                    line.spec.field,
                    line.spec.prefix,
                    line.text,
                    line.span,
                    &self.source_map,
                    &self.filename,
                ));
            }

            match line.extract() {
                Ok(value) => match line.spec.field {
                    Field::Header => capacity = Some(value),
                    Field::Input => input = Some(value),
                    Field::Output => output = Some(value),
                },
                Err(message) => diagnostics.push(Diagnostic::extraction_failure(
                    block.index,
                    line.spec.field,
                    message,
                    line.span,
                    &self.source_map,
                    &self.filename,
                )),
            }
        }

        Some(TestCaseRecord {
            capacity: capacity?,
            input: input?,
            output: output?,
        })
    }

    /// Get access to the source map for error reporting
    #[must_use]
    pub const fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    /// Get access to the filename
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Get access to the original input
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Parse report text that has no file name attached
#[must_use]
pub fn parse(text: &str) -> ParseOutput {
    Parser::new(text).parse()
}
