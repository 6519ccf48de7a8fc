//! Integration tests for lexer + segmentation
//! Tests how reports are cut into blocks and paragraphs

use kprg_lexer::{split_span, Delimiter, Lexer, Token, SEPARATOR};
use kprg_parser::segment::{blocks, is_noise};
use kprg_parser::NOISE_MARKERS;

#[test]
fn test_separator_splits_blocks() {
    let text = format!("a\n{SEPARATOR}\nb\n{SEPARATOR}\nc");
    let blocks = blocks(&text);

    let bodies: Vec<&str> = blocks.iter().map(|b| b.span.slice(&text)).collect();
    assert_eq!(bodies, vec!["a", "b", "c"]);
    let indices: Vec<usize> = blocks.iter().map(|b| b.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_separator_inside_a_line_still_splits() {
    let text = format!("Keccak[r=1344, c=256]{SEPARATOR}tail");
    let blocks = blocks(&text);

    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].span.slice(&text), "Keccak[r=1344, c=256]");
    assert_eq!(blocks[1].span.slice(&text), "tail");
}

#[test]
fn test_every_noise_marker_drops_its_paragraph() {
    for marker in NOISE_MARKERS {
        let text = format!("data\n\nbefore {marker} after");
        let blocks = blocks(&text);

        assert_eq!(blocks[0].paragraphs.len(), 1, "marker {marker:?}");
        assert!(is_noise(marker));
    }
}

#[test]
fn test_paragraph_spans_are_absolute() {
    let text = format!("{SEPARATOR}\nfirst\n\nsecond");
    let blocks = blocks(&text);

    let block = &blocks[1];
    let paragraphs: Vec<&str> = block.paragraphs.iter().map(|p| p.slice(&text)).collect();
    assert_eq!(paragraphs, vec!["first", "second"]);
    assert_eq!(block.paragraphs[0].start, SEPARATOR.len() + 1);
}

#[test]
fn test_lexer_covers_whole_input() {
    let text = format!("Input of 8 bits: 0A\n\n{SEPARATOR}==\n");
    let tokens = Lexer::new(&text).tokenize();

    let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(rebuilt, text);
    assert!(tokens.iter().all(|t| t.token != Token::Error));
}

#[test]
fn test_line_split_keeps_empty_lines() {
    let text = "Keccak[r=1344, c=256]\n\nInput";
    let whole = kprg::Span::new(0, text.len());
    let lines: Vec<&str> = split_span(text, whole, Delimiter::LineBreak)
        .into_iter()
        .map(|span| span.slice(text))
        .collect();

    assert_eq!(lines, vec!["Keccak[r=1344, c=256]", "", "Input"]);
}
