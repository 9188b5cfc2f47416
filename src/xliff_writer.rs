use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info};
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tempfile::NamedTempFile;

use crate::errors::ConvertError;

// @module: Alignment-to-XLIFF serialization

/// XLIFF 1.2 namespace URI
pub const XLIFF_NAMESPACE: &str = "urn:oasis:names:tc:xliff:document:1.2";

/// XLIFF format version emitted by this tool
pub const XLIFF_VERSION: &str = "1.2";

/// Serialize two line-aligned sequences into an XLIFF 1.2 document.
///
/// Line `i` of the source sequence is paired with line `i` of the target
/// sequence to form one `trans-unit` with the 1-based id `i`. The document
/// carries the given language tags verbatim (tags are free-form strings)
/// and `original_name` as the `original` attribute of the `file` element.
///
/// The sequences must have equal length; otherwise the call fails with
/// `ConvertError::LengthMismatch` and nothing is written. Empty sequences
/// are valid and produce a document with zero translation units.
///
/// The document is written atomically: the XML is built in memory, written
/// to a temporary file next to `output_path` and renamed over it, so no
/// failure path leaves a truncated file behind. An existing file at
/// `output_path` is replaced. The transform is pure: identical inputs
/// produce byte-identical output files.
pub fn serialize<P: AsRef<Path>>(
    source_lines: &[String],
    target_lines: &[String],
    source_lang: &str,
    target_lang: &str,
    original_name: &str,
    output_path: P,
) -> Result<PathBuf, ConvertError> {
    let output_path = output_path.as_ref();

    if source_lines.len() != target_lines.len() {
        return Err(ConvertError::LengthMismatch {
            source_lines: source_lines.len(),
            target_lines: target_lines.len(),
        });
    }

    debug!(
        "Serializing {} translation unit(s) ({} -> {}) to {:?}",
        source_lines.len(),
        source_lang,
        target_lang,
        output_path
    );

    let xml = build_document(
        source_lines,
        target_lines,
        source_lang,
        target_lang,
        original_name,
    )?;

    write_atomically(&xml, output_path)?;

    info!("XLIFF file created: {}", output_path.display());
    Ok(output_path.to_path_buf())
}

/// Build the XLIFF document as a pretty-printed UTF-8 byte buffer.
///
/// Caller guarantees the sequences have equal length.
fn build_document(
    source_lines: &[String],
    target_lines: &[String],
    source_lang: &str,
    target_lang: &str,
    original_name: &str,
) -> Result<Vec<u8>, ConvertError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut xliff = BytesStart::new("xliff");
    xliff.push_attribute(("version", XLIFF_VERSION));
    xliff.push_attribute(("xmlns", XLIFF_NAMESPACE));
    writer.write_event(Event::Start(xliff))?;

    let mut file = BytesStart::new("file");
    file.push_attribute(("source-language", source_lang));
    file.push_attribute(("target-language", target_lang));
    file.push_attribute(("datatype", "plaintext"));
    file.push_attribute(("original", original_name));
    writer.write_event(Event::Start(file))?;

    writer.write_event(Event::Start(BytesStart::new("body")))?;

    for (i, (source, target)) in source_lines.iter().zip(target_lines.iter()).enumerate() {
        let mut unit = BytesStart::new("trans-unit");
        unit.push_attribute(("id", (i + 1).to_string().as_str()));
        writer.write_event(Event::Start(unit))?;

        writer.write_event(Event::Start(BytesStart::new("source")))?;
        writer.write_event(Event::Text(BytesText::new(source)))?;
        writer.write_event(Event::End(BytesEnd::new("source")))?;

        writer.write_event(Event::Start(BytesStart::new("target")))?;
        writer.write_event(Event::Text(BytesText::new(target)))?;
        writer.write_event(Event::End(BytesEnd::new("target")))?;

        writer.write_event(Event::End(BytesEnd::new("trans-unit")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("body")))?;
    writer.write_event(Event::End(BytesEnd::new("file")))?;
    writer.write_event(Event::End(BytesEnd::new("xliff")))?;

    let mut xml = writer.into_inner();
    xml.push(b'\n');
    Ok(xml)
}

/// Write the document to a temporary file in the destination directory,
/// then rename it over the output path. The rename replaces any existing
/// file; on failure the temporary file is cleaned up by its guard and the
/// destination is untouched.
fn write_atomically(xml: &[u8], output_path: &Path) -> Result<(), ConvertError> {
    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(xml)?;
    tmp.persist(output_path).map_err(|e| e.error)?;
    Ok(())
}
