use anyhow::{Context, Result, anyhow};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::language_utils;

// @module: Interactive collaborator gathering conversion inputs

/// Read one line of user input, trimmed
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    let bytes = input
        .read_line(&mut line)
        .context("Failed to read user input")?;
    if bytes == 0 {
        return Err(anyhow!("Input stream closed while waiting for user input"));
    }
    Ok(line.trim().to_string())
}

/// Prompt until an existing directory path is entered
pub fn prompt_directory<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    loop {
        write!(output, "Enter the directory containing the text files: ")?;
        output.flush()?;

        let entered = read_line(input)?;
        if FileManager::dir_exists(&entered) {
            return Ok(PathBuf::from(entered));
        }
        writeln!(output, "Invalid directory. Please try again.")?;
    }
}

/// List candidate files in a directory, extending the recognized-extensions
/// set interactively.
///
/// Files whose extension is already recognized become candidates directly.
/// Each unrecognized extension is offered once; accepting it inserts it
/// into the caller's set (the set is an explicit mutable parameter, so the
/// caller can persist the extended set) and includes the file. Extension
/// strings are accepted verbatim, without validation. Files without any
/// extension share the empty extension '' and are offered like any other
/// unrecognized one.
pub fn list_candidate_files<R: BufRead, W: Write>(
    dir: &Path,
    extensions: &mut BTreeSet<String>,
    input: &mut R,
    output: &mut W,
) -> Result<Vec<String>> {
    let mut candidates = Vec::new();
    let mut asked = BTreeSet::new();

    for file_name in FileManager::list_file_names(dir)? {
        let ext = FileManager::dotted_extension(&file_name).unwrap_or_default();

        if extensions.contains(&ext) {
            candidates.push(file_name);
        } else if asked.insert(ext.clone()) {
            writeln!(
                output,
                "Unrecognized extension '{}' for file: {}",
                ext, file_name
            )?;
            write!(
                output,
                "Would you like to add '{}' to the recognized extensions? (y/n): ",
                ext
            )?;
            output.flush()?;

            if read_line(input)?.eq_ignore_ascii_case("y") {
                extensions.insert(ext.clone());
                writeln!(
                    output,
                    "Extension '{}' has been added to the recognized list.",
                    ext
                )?;
                candidates.push(file_name);
            }
        }
    }

    Ok(candidates)
}

/// Prompt the user to pick one file from a numbered menu.
///
/// `role` names what is being selected ("source" or "target"). The menu is
/// 1-based; invalid input re-prompts.
pub fn select_file<R: BufRead, W: Write>(
    files: &[String],
    role: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if files.is_empty() {
        return Err(anyhow!("No files available to select a {} file from", role));
    }

    writeln!(output, "Available {} files:", role)?;
    for (i, file) in files.iter().enumerate() {
        writeln!(output, "{}: {}", i + 1, file)?;
    }

    loop {
        write!(output, "Select the {} file (1-{}): ", role, files.len())?;
        output.flush()?;

        if let Ok(choice) = read_line(input)?.parse::<usize>() {
            if (1..=files.len()).contains(&choice) {
                return Ok(files[choice - 1].clone());
            }
        }
        writeln!(output, "Invalid selection. Please try again.")?;
    }
}

/// Prompt for a language tag.
///
/// Tags are free-form and never rejected; an unrecognized ISO code only
/// draws an advisory note. An empty entry falls back to `default`.
pub fn prompt_language<R: BufRead, W: Write>(
    role: &str,
    default: &str,
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    write!(
        output,
        "Enter the {} language code (e.g., 'en', 'fr') [{}]: ",
        role, default
    )?;
    output.flush()?;

    let entered = read_line(input)?;
    let tag = if entered.is_empty() {
        default.to_string()
    } else {
        entered
    };

    match language_utils::describe(&tag) {
        Some(name) => writeln!(output, "Using {} language: {} ({})", role, tag, name)?,
        None => writeln!(
            output,
            "Note: '{}' is not a known ISO 639 code; using it as-is.",
            tag
        )?,
    }

    Ok(tag)
}
