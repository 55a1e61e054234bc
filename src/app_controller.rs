use anyhow::{anyhow, Context, Result};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::formats::{self, ParseReport, SubtitleFormat};
use crate::vtt::Vtt;

// @module: Application controller for subtitle conversion

/// Result of converting one file
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertOutcome {
    /// Output written with this many cues, after dropping `skipped` blocks
    Written {
        path: PathBuf,
        cues: usize,
        skipped: usize,
    },
    /// Output already existed and overwriting was not requested
    SkippedExisting(PathBuf),
}

/// Totals for a folder run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderSummary {
    pub written: usize,
    pub skipped_existing: usize,
    pub failed: usize,
}

/// Main application controller
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Invalid configuration")?;
        Ok(Self { config })
    }

    /// Parse a file and return the document with the skipped blocks
    pub fn inspect_file(&self, input_file: &Path) -> Result<ParseReport> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let format = formats::format_for_path(input_file)?;
        let content = FileManager::read_to_string(input_file)?;
        let report = format.decode_with_report(&content);

        debug!(
            "Parsed {:?} as {}: {} cues, {} blocks skipped",
            input_file,
            format.info().name,
            report.document.len(),
            report.skipped.len()
        );

        Ok(report)
    }

    /// Re-serialize one subtitle file into `output_dir`
    pub fn convert_file(&self, input_file: &Path, output_dir: &Path, force_overwrite: bool) -> Result<ConvertOutcome> {
        if !FileManager::file_exists(input_file) {
            return Err(anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output = &self.config.output;
        let output_path = FileManager::generate_output_path(input_file, output_dir, &output.suffix, &output.extension);

        if output_path.exists() && !force_overwrite {
            warn!("Skipping file, output already exists (use -f to force overwrite): {:?}", output_path);
            return Ok(ConvertOutcome::SkippedExisting(output_path));
        }

        let report = self.inspect_file(input_file)?;
        if self.config.output.report_skipped {
            log_skipped(input_file, &report);
        }

        let format = formats::format_for_path(input_file)?;
        let content = format.encode(&report.document);

        FileManager::write_to_file(&output_path, &content)
            .with_context(|| format!("Subtitles from {:?} were not saved", input_file))?;

        info!("Success: {:?} ({} cues)", output_path, report.document.len());

        Ok(ConvertOutcome::Written {
            path: output_path,
            cues: report.document.len(),
            skipped: report.malformed().count(),
        })
    }

    /// Convert every subtitle file below `input_dir`, next to its source
    pub fn convert_folder(&self, input_dir: &Path, force_overwrite: bool) -> Result<FolderSummary> {
        if !FileManager::dir_exists(input_dir) {
            return Err(anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        info!("Starting subtitle conversion for directory: {:?}", input_dir);

        let output = &self.config.output;
        let generated_marker = format!(".{}.{}", output.suffix, output.extension);
        let mut summary = FolderSummary::default();

        let mut inputs = Vec::new();
        for extension in &Vtt::new().info().extensions {
            inputs.extend(FileManager::find_files(input_dir, extension)?);
        }
        inputs.sort();
        inputs.dedup();

        for path in inputs {
            let file_name = path.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default();
            if file_name.ends_with(&generated_marker) {
                debug!("Ignoring generated file: {:?}", path);
                continue;
            }

            let output_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            match self.convert_file(&path, &output_dir, force_overwrite) {
                Ok(ConvertOutcome::Written { .. }) => summary.written += 1,
                Ok(ConvertOutcome::SkippedExisting(_)) => summary.skipped_existing += 1,
                Err(e) => {
                    error!("Error processing file {:?}: {:#}", path, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Finished: {} written, {} already present, {} failed",
            summary.written, summary.skipped_existing, summary.failed
        );

        Ok(summary)
    }
}

fn log_skipped(input_file: &Path, report: &ParseReport) {
    let malformed: Vec<_> = report.malformed().collect();
    for block in &malformed {
        warn!("{:?}: dropped block {} ({}): {:?}", input_file, block.index, block.reason, block.excerpt);
    }
    if !malformed.is_empty() {
        warn!("{:?}: {} malformed block(s) dropped", input_file, malformed.len());
    }
}
