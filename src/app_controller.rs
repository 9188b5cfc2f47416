use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::line_reader;
use crate::prompt;
use crate::xliff_writer;

// @module: Application controller for text-pair to XLIFF conversion

/// Main application controller for one conversion run
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        Ok(Self { config })
    }

    /// Convert an explicitly named file pair.
    ///
    /// Reads both files, derives the output path next to the source file
    /// when none is given, and refuses to replace an existing output file
    /// unless `force_overwrite` is set. Returns the path of the written
    /// XLIFF document.
    pub fn run(
        &self,
        source_file: &Path,
        target_file: &Path,
        source_lang: &str,
        target_lang: &str,
        output_path: Option<PathBuf>,
        force_overwrite: bool,
    ) -> Result<PathBuf> {
        if !FileManager::file_exists(source_file) {
            return Err(anyhow!("Source file does not exist: {:?}", source_file));
        }
        if !FileManager::file_exists(target_file) {
            return Err(anyhow!("Target file does not exist: {:?}", target_file));
        }
        if source_file == target_file {
            // Valid degenerate case: produces an identity translation memory
            debug!("Source and target are the same file: {:?}", source_file);
        }

        let output_path = output_path.unwrap_or_else(|| {
            FileManager::generate_output_path(source_file, source_lang, target_lang)
        });

        if FileManager::file_exists(&output_path) && !force_overwrite {
            return Err(anyhow!(
                "Output file already exists: {:?}. Use -f to force overwrite.",
                output_path
            ));
        }

        info!(
            "Converting {:?} + {:?} ({} -> {})",
            source_file, target_file, source_lang, target_lang
        );

        let source_lines = line_reader::read_lines(source_file)
            .with_context(|| format!("Failed to read source file: {:?}", source_file))?;
        let target_lines = line_reader::read_lines(target_file)
            .with_context(|| format!("Failed to read target file: {:?}", target_file))?;

        let original_name = FileManager::display_name(source_file);

        let written = xliff_writer::serialize(
            &source_lines,
            &target_lines,
            source_lang,
            target_lang,
            &original_name,
            &output_path,
        )
        .with_context(|| format!("Failed to write XLIFF document to {:?}", output_path))?;

        Ok(written)
    }

    /// Run the interactive flow: prompt for a directory, discover candidate
    /// files (extending the recognized-extensions set on the fly), select
    /// the file pair and language tags, then convert.
    ///
    /// Generic over the input/output streams so tests can drive the whole
    /// flow with in-memory buffers.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        directory: Option<PathBuf>,
        force_overwrite: bool,
        input: &mut R,
        output: &mut W,
    ) -> Result<PathBuf> {
        let directory = match directory {
            Some(dir) if FileManager::dir_exists(&dir) => dir,
            Some(dir) => {
                warn!("Directory does not exist: {:?}", dir);
                prompt::prompt_directory(input, output)?
            }
            None => prompt::prompt_directory(input, output)?,
        };

        // The recognized-extensions set is an explicit mutable parameter of
        // the discovery step; extensions accepted during this run extend a
        // working copy without touching the saved configuration.
        let mut extensions = self.config.recognized_extensions.clone();
        let files = prompt::list_candidate_files(&directory, &mut extensions, input, output)?;

        if files.is_empty() {
            return Err(anyhow!(
                "No files with recognized extensions {:?} found in {:?}",
                extensions,
                directory
            ));
        }

        let source_name = prompt::select_file(&files, "source", input, output)?;
        let target_name = prompt::select_file(&files, "target", input, output)?;

        let source_lang =
            prompt::prompt_language("source", &self.config.source_language, input, output)?;
        let target_lang =
            prompt::prompt_language("target", &self.config.target_language, input, output)?;

        self.run(
            &directory.join(&source_name),
            &directory.join(&target_name),
            &source_lang,
            &target_lang,
            None,
            force_overwrite,
        )
    }
}
