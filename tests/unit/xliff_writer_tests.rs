/*!
 * Tests for alignment validation and XLIFF 1.2 serialization
 */

use anyhow::{Result, anyhow};
use quick_xml::Reader;
use quick_xml::events::Event;
use std::fs;
use txt2xliff::errors::ConvertError;
use txt2xliff::xliff_writer::{XLIFF_NAMESPACE, serialize};

use crate::common;
use crate::common::lines;

/// Attributes of the file element plus the ordered (source, target) pairs
struct ParsedXliff {
    source_language: String,
    target_language: String,
    datatype: String,
    original: String,
    unit_ids: Vec<String>,
    pairs: Vec<(String, String)>,
}

/// Parse a produced document back into its translation pairs
fn parse_xliff(xml: &str) -> Result<ParsedXliff> {
    let mut reader = Reader::from_reader(xml.as_bytes());

    let mut parsed = ParsedXliff {
        source_language: String::new(),
        target_language: String::new(),
        datatype: String::new(),
        original: String::new(),
        unit_ids: Vec::new(),
        pairs: Vec::new(),
    };

    let attr = |e: &quick_xml::events::BytesStart, name: &str| -> Result<String> {
        let attr = e
            .try_get_attribute(name)?
            .ok_or_else(|| anyhow!("missing attribute {}", name))?;
        Ok(attr.unescape_value()?.into_owned())
    };

    let mut buf = Vec::new();
    let mut text = String::new();
    let mut current_source: Option<String> = None;
    let mut in_segment = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.name().as_ref() {
                b"file" => {
                    parsed.source_language = attr(&e, "source-language")?;
                    parsed.target_language = attr(&e, "target-language")?;
                    parsed.datatype = attr(&e, "datatype")?;
                    parsed.original = attr(&e, "original")?;
                }
                b"trans-unit" => parsed.unit_ids.push(attr(&e, "id")?),
                b"source" | b"target" => {
                    in_segment = true;
                    text.clear();
                }
                _ => {}
            },
            Event::Text(t) => {
                if in_segment {
                    text.push_str(&t.unescape()?);
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"source" => {
                    in_segment = false;
                    current_source = Some(text.clone());
                }
                b"target" => {
                    in_segment = false;
                    let source = current_source
                        .take()
                        .ok_or_else(|| anyhow!("target without preceding source"))?;
                    parsed.pairs.push((source, text.clone()));
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(parsed)
}

/// Test the reference scenario: two aligned lines become two trans-units
#[test]
fn test_serialize_withAlignedPair_shouldEmitOneUnitPerLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("greet_en_fr.xliff");

    let written = serialize(
        &lines(&["Hello", "World"]),
        &lines(&["Bonjour", "Monde"]),
        "en",
        "fr",
        "greet.en",
        &output,
    )?;

    assert_eq!(written, output);

    let xml = fs::read_to_string(&output)?;
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains(&format!("xmlns=\"{}\"", XLIFF_NAMESPACE)));
    assert!(xml.contains("version=\"1.2\""));

    let parsed = parse_xliff(&xml)?;
    assert_eq!(parsed.source_language, "en");
    assert_eq!(parsed.target_language, "fr");
    assert_eq!(parsed.datatype, "plaintext");
    assert_eq!(parsed.original, "greet.en");
    assert_eq!(parsed.unit_ids, vec!["1", "2"]);
    assert_eq!(
        parsed.pairs,
        vec![
            ("Hello".to_string(), "Bonjour".to_string()),
            ("World".to_string(), "Monde".to_string()),
        ]
    );
    Ok(())
}

/// Test that unit ids form the contiguous 1-based sequence
#[test]
fn test_serialize_withManyLines_shouldNumberUnitsSequentially() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("numbers.xliff");

    let source: Vec<String> = (0..25).map(|i| format!("line {}", i)).collect();
    let target: Vec<String> = (0..25).map(|i| format!("ligne {}", i)).collect();

    serialize(&source, &target, "en", "fr", "numbers.en", &output)?;

    let parsed = parse_xliff(&fs::read_to_string(&output)?)?;
    let expected_ids: Vec<String> = (1..=25).map(|i| i.to_string()).collect();
    assert_eq!(parsed.unit_ids, expected_ids);
    assert_eq!(parsed.pairs.len(), 25);
    Ok(())
}

/// Test that mismatched line counts fail with both counts and write nothing
#[test]
fn test_serialize_withMismatchedLengths_shouldFailWithoutWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("mismatch.xliff");

    let err = serialize(
        &lines(&["a", "b", "c"]),
        &lines(&["x", "y"]),
        "en",
        "fr",
        "three.en",
        &output,
    )
    .unwrap_err();

    match &err {
        ConvertError::LengthMismatch {
            source_lines,
            target_lines,
        } => {
            assert_eq!(*source_lines, 3);
            assert_eq!(*target_lines, 2);
        }
        other => panic!("expected LengthMismatch, got {:?}", other),
    }
    assert_eq!(
        err.to_string(),
        "Line count mismatch: source has 3 lines, target has 2 lines"
    );
    assert!(err.is_user_data_error());
    assert!(!output.exists(), "no output file may be produced");
    Ok(())
}

/// Test that a mismatch leaves a pre-existing file at the output path untouched
#[test]
fn test_serialize_withMismatchAndExistingOutput_shouldNotModifyIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = common::create_test_file(temp_dir.path(), "keep.xliff", "sentinel")?;

    let result = serialize(
        &lines(&["a"]),
        &lines(&[]),
        "en",
        "fr",
        "keep.en",
        &output,
    );

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&output)?, "sentinel");
    Ok(())
}

/// Test that empty inputs produce a valid document with zero units
#[test]
fn test_serialize_withEmptySequences_shouldProduceZeroUnitDocument() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("empty.xliff");

    serialize(&[], &[], "en", "fr", "empty.en", &output)?;

    let xml = fs::read_to_string(&output)?;
    let parsed = parse_xliff(&xml)?;
    assert_eq!(parsed.source_language, "en");
    assert!(parsed.unit_ids.is_empty());
    assert!(parsed.pairs.is_empty());
    Ok(())
}

/// Test that identical inputs produce byte-identical output files
#[test]
fn test_serialize_calledTwiceWithSameInputs_shouldBeByteIdentical() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let first = temp_dir.path().join("first.xliff");
    let second = temp_dir.path().join("second.xliff");

    let source = lines(&["one", "two", ""]);
    let target = lines(&["un", "deux", ""]);

    serialize(&source, &target, "en", "fr", "pair.en", &first)?;
    serialize(&source, &target, "en", "fr", "pair.en", &second)?;

    assert_eq!(fs::read(&first)?, fs::read(&second)?);
    Ok(())
}

/// Test that re-running onto the same path overwrites the previous document
#[test]
fn test_serialize_withExistingOutput_shouldOverwriteIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("replace.xliff");

    serialize(&lines(&["old"]), &lines(&["alt"]), "en", "de", "a.en", &output)?;
    serialize(&lines(&["new"]), &lines(&["neu"]), "en", "de", "a.en", &output)?;

    let parsed = parse_xliff(&fs::read_to_string(&output)?)?;
    assert_eq!(parsed.pairs, vec![("new".to_string(), "neu".to_string())]);
    Ok(())
}

/// Test that markup-significant characters and blank lines survive the round trip
#[test]
fn test_serialize_withSpecialCharacters_shouldRoundTrip() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("escape.xliff");

    let source = lines(&["a < b & c > d", "", "\"quoted\" 'text'"]);
    let target = lines(&["x < y & z > w", "", "« cité »"]);

    serialize(&source, &target, "en", "fr", "escape.en", &output)?;

    let xml = fs::read_to_string(&output)?;
    let parsed = parse_xliff(&xml)?;
    let expected: Vec<(String, String)> = source
        .iter()
        .cloned()
        .zip(target.iter().cloned())
        .collect();
    assert_eq!(parsed.pairs, expected);
    Ok(())
}

/// Test that a blank line pair becomes an inline empty source/target element
#[test]
fn test_serialize_withBlankLinePair_shouldEmitInlineEmptyElements() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("blank.xliff");

    serialize(
        &lines(&["", "next"]),
        &lines(&["", "suivant"]),
        "en",
        "fr",
        "blank.en",
        &output,
    )?;

    let xml = fs::read_to_string(&output)?;
    assert!(xml.contains("\n        <source></source>"));
    assert!(xml.contains("\n        <target></target>"));

    let parsed = parse_xliff(&xml)?;
    assert_eq!(
        parsed.pairs,
        vec![
            (String::new(), String::new()),
            ("next".to_string(), "suivant".to_string()),
        ]
    );
    Ok(())
}

/// Test that language tags are carried verbatim, including free-form ones
#[test]
fn test_serialize_withFreeFormLanguageTags_shouldCarryThemVerbatim() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("tags.xliff");

    serialize(
        &lines(&["hi"]),
        &lines(&["ola"]),
        "en-US",
        "pt-BR-informal",
        "hi.en",
        &output,
    )?;

    let parsed = parse_xliff(&fs::read_to_string(&output)?)?;
    assert_eq!(parsed.source_language, "en-US");
    assert_eq!(parsed.target_language, "pt-BR-informal");
    Ok(())
}

/// Test the pretty-printed shape: two-space indentation, inline text elements
#[test]
fn test_serialize_output_shouldUseTwoSpaceIndentation() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let output = temp_dir.path().join("indent.xliff");

    serialize(
        &lines(&["Hello"]),
        &lines(&["Bonjour"]),
        "en",
        "fr",
        "greet.en",
        &output,
    )?;

    let xml = fs::read_to_string(&output)?;
    assert!(xml.contains("\n  <file "));
    assert!(xml.contains("\n    <body>"));
    assert!(xml.contains("\n      <trans-unit id=\"1\">"));
    assert!(xml.contains("\n        <source>Hello</source>"));
    assert!(xml.contains("\n        <target>Bonjour</target>"));
    assert!(xml.ends_with("</xliff>\n"));
    Ok(())
}
