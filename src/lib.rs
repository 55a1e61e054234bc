/*!
 * # subreader - WebVTT subtitle reader and writer
 *
 * A Rust library for loading WebVTT caption files into timed cues and
 * writing them back out.
 *
 * ## Features
 *
 * - Lenient parsing: headers, comments and damaged blocks are dropped
 *   without failing the whole file
 * - Optional report of every dropped block
 * - `[hh:]mm:ss.mmm` timecodes decoded to seconds, always written with hours
 * - All-or-nothing file output
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `timecode`: Timecode decoding and encoding
 * - `subtitle_processor`: Cue and document model
 * - `vtt`: Block splitting, cue parsing and serialization for WebVTT
 * - `formats`: The format capability trait and format lookup
 * - `file_utils`: File system operations
 * - `app_config`: Configuration management
 * - `app_controller`: Conversion workflow used by the CLI
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod formats;
pub mod subtitle_processor;
pub mod timecode;
pub mod vtt;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, SubtitleError};
pub use formats::{format_for_path, FormatInfo, ParseReport, SkipReason, SkippedBlock, SubtitleFormat};
pub use subtitle_processor::{Cue, SubtitleDocument};
pub use timecode::{decode_timecode, encode_timecode};
pub use vtt::Vtt;
