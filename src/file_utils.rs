use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

// @module: File and directory utilities

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Directory existence
    pub fn dir_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_dir()
    }

    /// List the file names in a directory, sorted for stable menus.
    ///
    /// Non-recursive: the conversion works on sibling files within one
    /// directory, so subdirectories are skipped. Entries whose names are
    /// not valid Unicode are skipped as well.
    pub fn list_file_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
        let dir = dir.as_ref();
        let mut names = Vec::new();

        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        {
            let entry = entry.context("Failed to read directory entry")?;
            if entry.path().is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }

        names.sort();
        Ok(names)
    }

    /// Extension of a file name including the leading dot, e.g. ".en".
    ///
    /// Mirrors how the recognized-extensions set stores its entries.
    pub fn dotted_extension(file_name: &str) -> Option<String> {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
    }

    // @generates: Output path for the XLIFF document
    // @params: source_file, source_language, target_language
    pub fn generate_output_path<P: AsRef<Path>>(
        source_file: P,
        source_language: &str,
        target_language: &str,
    ) -> PathBuf {
        let source_file = source_file.as_ref();

        // Get the file stem (filename without extension)
        let stem = source_file.file_stem().unwrap_or_default();

        // Create the output filename with both language codes
        let mut output_filename = stem.to_string_lossy().to_string();
        output_filename.push('_');
        output_filename.push_str(source_language);
        output_filename.push('_');
        output_filename.push_str(target_language);
        output_filename.push_str(".xliff");

        // Place it alongside the source file
        match source_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.join(output_filename),
            _ => PathBuf::from(output_filename),
        }
    }

    /// Display name of a file for the XLIFF `original` attribute
    pub fn display_name<P: AsRef<Path>>(path: P) -> String {
        path.as_ref()
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.as_ref().to_string_lossy().to_string())
    }
}
