//! kprg - Keccak PRG test-vector report extractor
//!
//! Re-exports the workspace crates so the whole pipeline is reachable from
//! one place.

pub use kprg_ast::{
    Diagnostic, DiagnosticKind, Field, ParseOutput, Position, SourceMap, Span, TestCaseRecord,
};
pub use kprg_cli::{Options, render_records, run};
pub use kprg_lexer::SEPARATOR;
pub use kprg_parser::{Parser, parse};
