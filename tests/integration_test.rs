//! Integration Tests for radixsteps
//!
//! End-to-end coverage of the public API: step-by-step conversion,
//! LaTeX transcription, batch processing, and Excel export.

use radixsteps::{
    convert, record_steps, transcribe, Base, ConverterBuilder, RadixStepsError, SolutionFormat,
};

#[test]
fn test_binary_to_decimal_full_trace() {
    let result = record_steps("1010", Base::Binary, Base::Decimal).unwrap();
    assert_eq!(result.input, "1010");
    assert_eq!(result.output, "10");
    assert_eq!(result.input_base, Base::Binary);
    assert_eq!(result.output_base, Base::Decimal);

    let lines = result.lines();
    assert_eq!(lines[0], "Converting binary number 1010 to decimal:");
    assert!(lines.contains(&"  1 x 2^3 = 1 x 8 = 8".to_string()));
    assert!(lines.contains(&"  0 x 2^0 = 0 x 1 = 0".to_string()));
    assert_eq!(lines.last().unwrap(), "Sum: 10");
}

#[test]
fn test_decimal_to_binary_full_trace() {
    let result = record_steps("42", Base::Decimal, Base::Binary).unwrap();
    assert_eq!(result.output, "101010");

    let lines = result.lines();
    assert!(lines.contains(&"42 ÷ 2 = 21 remainder 0".to_string()));
    assert!(lines.contains(&"1 ÷ 2 = 0 remainder 1".to_string()));
    assert_eq!(lines.last().unwrap(), "Result: 101010");
}

#[test]
fn test_every_numeric_route_round_trips() {
    // Converting forward and back reproduces the canonical form
    for from in Base::numeric_bases() {
        for to in Base::numeric_bases() {
            if from == to {
                continue;
            }
            let forward = convert("101010", Base::Binary, from).unwrap();
            let there = convert(&forward, from, to).unwrap();
            let back = convert(&there, to, from).unwrap();
            assert_eq!(back, forward, "route {} -> {}", from, to);
        }
    }
}

#[test]
fn test_latex_single_group_binary_to_hex() {
    let result = record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap();
    let latex = transcribe(&result);
    assert!(latex.contains("groups of 4 bits"));
    assert!(latex.contains("1010 & A \\\\ \\hline"));
    assert!(latex.contains("\\textbf{Final Answer:} \\(1010_{2} = A_{16}\\)"));
}

#[test]
fn test_latex_two_stage_octal_to_hex() {
    let result = record_steps("17", Base::Octal, Base::Hexadecimal).unwrap();
    let latex = transcribe(&result);
    assert!(latex.contains("Convert Octal to Decimal"));
    assert!(latex.contains("Convert Decimal to Hexadecimal"));
    assert!(latex.contains("\\textbf{Final Answer:} \\(17_{8} = F_{16}\\)"));
}

#[test]
fn test_batch_processing_order_and_expansion() {
    let converter = ConverterBuilder::new().build().unwrap();
    let input = "\
1010 binary decimal
17 octal hexadecimal
42 decimal all
";
    let results = converter.process_batch(input.as_bytes()).unwrap();
    assert_eq!(results.len(), 5);
    assert_eq!(results[0].output, "10");
    assert_eq!(results[1].output, "F");
    // "all" expands in declaration order: binary, octal, hexadecimal
    assert_eq!(results[2].output, "101010");
    assert_eq!(results[3].output, "52");
    assert_eq!(results[4].output, "2A");
}

#[test]
fn test_batch_skips_malformed_and_failed_lines() {
    let converter = ConverterBuilder::new().build().unwrap();
    let input = "\
1010 binary decimal
garbage line without enough sense to parse into four fields
102 binary decimal
FF hexadecimal binary
";
    let results = converter.process_batch(input.as_bytes()).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].output, "10");
    assert_eq!(results[1].output, "11111111");
}

#[test]
fn test_export_to_file() {
    let converter = ConverterBuilder::new()
        .with_solution_format(SolutionFormat::Latex)
        .with_sheet_name("Conversions")
        .build()
        .unwrap();
    let results = vec![
        record_steps("1010", Base::Binary, Base::Hexadecimal).unwrap(),
        record_steps("255", Base::Decimal, Base::Binary).unwrap(),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conversions.xlsx");
    converter.export_to_path(&results, &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(!bytes.is_empty());
    // xlsx files are zip containers
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_to_buffer_plain_format() {
    let converter = ConverterBuilder::new().build().unwrap();
    let results = converter.convert_all("255", Base::Decimal);
    assert_eq!(results.len(), 3);
    let buffer = converter.export_to_buffer(&results).unwrap();
    assert_eq!(&buffer[..2], b"PK");
}

#[test]
fn test_steps_serialize_to_json() {
    let result = record_steps("FF", Base::Hexadecimal, Base::Decimal).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["input"], "FF");
    assert_eq!(json["input_base"], "hexadecimal");
    assert_eq!(json["output"], "255");

    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps[0]["kind"], "header");
    let digit = steps
        .iter()
        .find(|s| s["kind"] == "digit")
        .expect("digit step present");
    assert_eq!(digit["data"]["symbol"], "F");
    assert_eq!(digit["data"]["value"], 15);
}

#[test]
fn test_ascii_routes_are_rejected() {
    let err = record_steps("65", Base::Decimal, Base::Ascii).unwrap_err();
    assert!(matches!(err, RadixStepsError::UnsupportedRoute { .. }));
    let converter = ConverterBuilder::new().build().unwrap();
    let err = converter.convert("A", Base::Ascii, Base::Decimal).unwrap_err();
    assert!(matches!(err, RadixStepsError::UnsupportedRoute { .. }));
}
