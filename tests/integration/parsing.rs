//! Integration tests for lexer + parser pipeline
//! Tests report text all the way to records and diagnostics

use kprg::{parse, DiagnosticKind, Field, Parser, TestCaseRecord, SEPARATOR};
use proptest::prelude::*;

fn data_paragraph(rate: usize, capacity: usize, input: &str, output: &str) -> String {
    format!(
        "Keccak[r={rate}, c={capacity}]\nInput of {} bits: {input}\nOutput of {} bits: {output}",
        input.split_whitespace().count() * 8,
        output.split_whitespace().count() * 8,
    )
}

/// A block shaped like the ones the report generator writes
fn report_block(rate: usize, capacity: usize, input: &str, output: &str) -> String {
    format!(
        "* Keccak with width 1600\n\n{}\n\n    - OK\n",
        data_paragraph(rate, capacity, input, output)
    )
}

#[test]
fn test_single_block_without_separator() {
    let output = parse("Keccak[r=1152, c=448]\nInput of 0 bits: \nOutput of 448 bits: A3 B1");

    assert_eq!(output.records, vec![TestCaseRecord::new("448", "", "A3B1")]);
    assert!(output.is_clean());
}

#[test]
fn test_trailing_checksum_block() {
    let text = format!(
        "Keccak[r=1152, c=448]\nInput of 0 bits: \nOutput of 448 bits: A3 B1\n{SEPARATOR}\nChecksum: 9A 8B 7C\n"
    );
    let output = parse(&text);

    assert_eq!(output.records, vec![TestCaseRecord::new("448", "", "A3B1")]);
}

#[test]
fn test_bogus_header_is_reported_not_fatal() {
    let text = format!(
        "{}\n{SEPARATOR}\nKeccak[bogus]\nInput of 8 bits: 00\nOutput of 8 bits: 11\n{SEPARATOR}\n{}",
        report_block(1344, 256, "01", "02"),
        report_block(1088, 512, "03", "04"),
    );
    let output = parse(&text);

    assert_eq!(
        output.records,
        vec![
            TestCaseRecord::new("256", "01", "02"),
            TestCaseRecord::new("512", "03", "04"),
        ]
    );
    assert_eq!(output.diagnostics.len(), 1);
    assert_eq!(
        output.diagnostics[0].kind(),
        DiagnosticKind::ExtractionFailure
    );
    assert_eq!(output.diagnostics[0].block(), 1);
}

#[test]
fn test_capacity_is_kept_verbatim() {
    let output = parse("Keccak[r=1344, c=0256]\nInput of 0 bits: \nOutput of 0 bits: ");
    assert_eq!(output.records[0].capacity, "0256");
}

#[test]
fn test_typical_report() {
    let blocks = [
        report_block(1344, 256, "", "7F 9C 2B A4"),
        report_block(1088, 512, "CC", "56 0F AB"),
        report_block(576, 1024, "41 FB", "00 01 02 03"),
    ];
    let text = format!(
        "{}{SEPARATOR}\nChecksum: 01 23 45 67\n\n    - OK\n{SEPARATOR}\n",
        blocks
            .iter()
            .map(|block| format!("{block}{SEPARATOR}\n"))
            .collect::<String>()
    );
    let output = parse(&text);

    assert_eq!(
        output.records,
        vec![
            TestCaseRecord::new("256", "", "7F9C2BA4"),
            TestCaseRecord::new("512", "CC", "560FAB"),
            TestCaseRecord::new("1024", "41FB", "00010203"),
        ]
    );
    assert!(output.is_clean());
}

#[test]
fn test_diagnostic_positions() {
    let text = format!("{SEPARATOR}\nKeccak[r=1344, c=256]\nInput of 8 bits: 00\nDigest: 11\n");
    let parser = Parser::new_with_filename(&text, "report.txt");
    let output = parser.parse();

    assert_eq!(output.records.len(), 1);
    assert_eq!(output.diagnostics.len(), 1);
    let diagnostic = &output.diagnostics[0];
    assert_eq!(diagnostic.kind(), DiagnosticKind::FormatAnomaly);
    assert_eq!(diagnostic.field(), Field::Output);
    assert_eq!(diagnostic.position().line, 4);
    assert_eq!(diagnostic.position().column, 1);
    assert!(diagnostic
        .to_string()
        .starts_with("kprg:report.txt:4:1: WARN_FORMAT"));
}

proptest! {
    #[test]
    fn prop_records_follow_block_order(capacities in proptest::collection::vec(1usize..2000, 0..12)) {
        let text: String = capacities
            .iter()
            .map(|c| format!("{}{SEPARATOR}\n", report_block(1600, *c, "AB CD", "EF")))
            .collect();
        let output = parse(&text);

        let expected: Vec<String> = capacities.iter().map(ToString::to_string).collect();
        let got: Vec<String> = output.records.iter().map(|r| r.capacity.clone()).collect();
        prop_assert_eq!(got, expected);
        prop_assert!(output.records.iter().all(|r| r.input == "ABCD" && r.output == "EF"));
    }

    #[test]
    fn prop_reparse_is_identical(text in "\\PC{0,200}") {
        prop_assert_eq!(parse(&text), parse(&text));
    }
}
