// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use subreader::app_config::{Config, LogLevel};
use subreader::app_controller::{ConvertOutcome, Controller};
use subreader::formats::SkippedBlock;
use subreader::subtitle_processor::Cue;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse subtitle files and write them back in normalized form
    Convert(ConvertArgs),

    /// Print the cues of a subtitle file and the blocks that were dropped
    Inspect(InspectArgs),

    /// Generate shell completions for subreader
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ConvertArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Directory for the output file (defaults to the input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Subtitle file to inspect
    #[arg(value_name = "INPUT_FILE")]
    input_file: PathBuf,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// subreader - WebVTT subtitle reader and writer
#[derive(Parser, Debug)]
#[command(name = "subreader")]
#[command(version)]
#[command(about = "Parse, inspect and rewrite WebVTT subtitles")]
#[command(long_about = "subreader loads WebVTT files into timed cues and writes them back out.

EXAMPLES:
    subreader convert movie.vtt                 # Writes movie.clean.vtt next to the input
    subreader convert -f -o out/ movie.vtt      # Overwrite, write into out/
    subreader convert /subtitles/               # Convert every .vtt file in a directory
    subreader inspect --json movie.vtt          # Dump cues and dropped blocks as JSON
    subreader completions bash > subreader.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. If the file doesn't exist,
    a default one is created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, global = true, value_enum)]
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
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("1;31", "ERROR"),
            Level::Warn => ("1;33", "WARN "),
            Level::Info => ("1;32", "INFO "),
            Level::Debug => ("1;36", "DEBUG"),
            Level::Trace => ("1;35", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level && metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "\x1B[{}m{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// JSON shape printed by `inspect --json`
#[derive(Serialize)]
struct InspectOutput<'a> {
    cues: &'a [Cue],
    skipped: &'a [SkippedBlock],
}

fn main() -> Result<()> {
    // Info until the configuration says otherwise
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "subreader", &mut std::io::stdout());
        return Ok(());
    }

    if let Some(level) = cli.log_level {
        log::set_max_level(LogLevel::from(level).to_level_filter());
    }

    let mut config = Config::load_or_create(&cli.config_path)?;
    match cli.log_level {
        Some(level) => config.log_level = level.into(),
        None => log::set_max_level(config.log_level.to_level_filter()),
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::Convert(args) => run_convert(&controller, args),
        Commands::Inspect(args) => run_inspect(&controller, args),
        Commands::Completions { .. } => Ok(()),
    }
}

fn run_convert(controller: &Controller, options: ConvertArgs) -> Result<()> {
    if options.input_path.is_file() {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options.input_path.parent().unwrap_or(Path::new(".")).to_path_buf()
        });

        if let ConvertOutcome::SkippedExisting(path) =
            controller.convert_file(&options.input_path, &output_dir, options.force_overwrite)?
        {
            info!("Nothing written, {:?} already exists", path);
        }
    } else if options.input_path.is_dir() {
        if options.output_dir.is_some() {
            return Err(anyhow!("--output-dir is only supported for single files"));
        }

        let summary = controller.convert_folder(&options.input_path, options.force_overwrite)?;
        if summary.failed > 0 {
            return Err(anyhow!("{} file(s) could not be converted", summary.failed));
        }
    } else {
        return Err(anyhow!("Input path does not exist: {:?}", options.input_path));
    }

    Ok(())
}

fn run_inspect(controller: &Controller, options: InspectArgs) -> Result<()> {
    let report = controller.inspect_file(&options.input_file)?;
    let mut stdout = std::io::stdout().lock();

    if options.json {
        let output = InspectOutput {
            cues: report.document.cues(),
            skipped: &report.skipped,
        };
        let json = serde_json::to_string_pretty(&output).context("Failed to serialize cues to JSON")?;
        writeln!(stdout, "{}", json)?;
        return Ok(());
    }

    write!(stdout, "{}", report.document)?;
    for (index, cue) in report.document.iter().enumerate() {
        writeln!(stdout)?;
        writeln!(stdout, "{}", index + 1)?;
        write!(stdout, "{}", cue)?;
    }

    if !report.skipped.is_empty() {
        writeln!(stdout)?;
        writeln!(stdout, "Skipped blocks: {}", report.skipped.len())?;
        for block in &report.skipped {
            writeln!(stdout, "  #{} {}: {:?}", block.index, block.reason, block.excerpt)?;
        }
    }

    Ok(())
}
