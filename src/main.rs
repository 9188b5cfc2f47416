// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod line_reader;
mod prompt;
mod xliff_writer;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a pair of line-aligned text files into an XLIFF document (default command)
    #[command(alias = "convert")]
    Convert(ConvertArgs),

    /// Generate shell completions for txt2xliff
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Directory containing the text files (interactive selection)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Source-language text file (skips interactive selection when paired with --target-file)
    #[arg(long)]
    source_file: Option<PathBuf>,

    /// Target-language text file
    #[arg(long)]
    target_file: Option<PathBuf>,

    /// Source language tag (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language tag (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output file path (default: {source-stem}_{src}_{tgt}.xliff next to the source file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// txt2xliff - text-file pairs to XLIFF 1.2 translation memories
///
/// Converts two line-aligned plain-text files (a source-language file and
/// a target-language file) into one bilingual XLIFF 1.2 document, with one
/// trans-unit per line pair.
#[derive(Parser, Debug)]
#[command(name = "txt2xliff")]
#[command(version = "1.0.0")]
#[command(about = "Convert line-aligned text-file pairs into XLIFF 1.2 documents")]
#[command(long_about = "txt2xliff pairs line i of a source-language text file with line i of a
target-language text file and writes the result as an XLIFF 1.2
translation-memory document.

EXAMPLES:
    txt2xliff ./corpus                                  # Pick files interactively
    txt2xliff --source-file a.en --target-file a.fr -s en -t fr
    txt2xliff --source-file a.en --target-file a.fr -s en -t fr -o memory.xliff
    txt2xliff -f ./corpus                               # Overwrite an existing output file
    txt2xliff --log-level debug ./corpus                # Verbose logging
    txt2xliff completions bash > txt2xliff.bash         # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the text files (interactive selection)
    #[arg(value_name = "DIRECTORY")]
    directory: Option<PathBuf>,

    /// Source-language text file (skips interactive selection when paired with --target-file)
    #[arg(long)]
    source_file: Option<PathBuf>,

    /// Target-language text file
    #[arg(long)]
    target_file: Option<PathBuf>,

    /// Source language tag (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language tag (e.g., 'en', 'es', 'fr')
    #[arg(short, long)]
    target_language: Option<String>,

    /// Output file path (default: {source-stem}_{src}_{tgt}.xliff next to the source file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "txt2xliff", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let convert_args = ConvertArgs {
                directory: cli.directory,
                source_file: cli.source_file,
                target_file: cli.target_file,
                source_language: cli.source_language,
                target_language: cli.target_language,
                output: cli.output,
                force_overwrite: cli.force_overwrite,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_convert(convert_args)
        }
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config
            .save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(source_lang) = &options.source_language {
        config.source_language = source_lang.clone();
    }
    if let Some(target_lang) = &options.target_language {
        config.target_language = target_lang.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller (validates the configuration)
    let source_language = config.source_language.clone();
    let target_language = config.target_language.clone();
    let controller = Controller::with_config(config)?;

    match (&options.source_file, &options.target_file) {
        (Some(source_file), Some(target_file)) => {
            // Non-interactive mode: everything is already on the command line
            controller.run(
                source_file,
                target_file,
                &source_language,
                &target_language,
                options.output.clone(),
                options.force_overwrite,
            )?;
        }
        (None, None) => {
            let mut stdin = std::io::stdin().lock();
            let mut stdout = std::io::stdout();
            controller.run_interactive(
                options.directory.clone(),
                options.force_overwrite,
                &mut stdin,
                &mut stdout,
            )?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "--source-file and --target-file must be given together"
            ));
        }
    }

    Ok(())
}
