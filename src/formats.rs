/*!
 * Subtitle format capability.
 *
 * A format turns raw file text into a `SubtitleDocument` and back. Formats
 * share no state, only this contract; WebVTT is the one implementation.
 */

use std::fmt;
use std::path::Path;
use serde::Serialize;

use crate::errors::SubtitleError;
use crate::subtitle_processor::SubtitleDocument;
use crate::vtt::Vtt;

/// Metadata about a subtitle format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    /// Format name (e.g., "WebVTT")
    pub name: String,
    /// File extensions handled by this format, without the dot
    pub extensions: Vec<String>,
    /// MIME type for this format
    pub mime_type: String,
    /// Brief description of the format
    pub description: String,
}

/// Why a block produced no cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Empty or whitespace-only block
    Blank,
    /// File header block
    Header,
    /// Comment block
    Comment,
    /// No `start --> end` timing line followed by a line break
    NoCueTiming,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Blank => "blank block",
            Self::Header => "file header",
            Self::Comment => "comment",
            Self::NoCueTiming => "no cue timing",
        };
        f.write_str(label)
    }
}

/// A block that was dropped while decoding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedBlock {
    /// Zero-based position of the block in the input
    pub index: usize,
    pub reason: SkipReason,
    /// First line of the block, shortened
    pub excerpt: String,
}

/// Decoded document together with the blocks that were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    pub document: SubtitleDocument,
    pub skipped: Vec<SkippedBlock>,
}

impl ParseReport {
    /// Skipped blocks that look like damaged cues rather than headers,
    /// comments or blank separators
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedBlock> {
        self.skipped.iter().filter(|block| block.reason == SkipReason::NoCueTiming)
    }
}

/// Capability implemented once per concrete subtitle format
pub trait SubtitleFormat: fmt::Debug + Send + Sync {
    /// Get information about this format
    fn info(&self) -> &FormatInfo;

    /// Check if this format handles the given file extension
    fn can_handle(&self, extension: &str) -> bool {
        self.info()
            .extensions
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }

    /// Decode raw file text, collecting the blocks that were dropped
    fn decode_with_report(&self, content: &str) -> ParseReport;

    /// Decode raw file text. Malformed blocks are skipped silently.
    fn decode(&self, content: &str) -> SubtitleDocument {
        self.decode_with_report(content).document
    }

    /// Render a document as file text
    fn encode(&self, document: &SubtitleDocument) -> String;
}

/// Pick the format implementation for a file based on its extension
pub fn format_for_path(path: &Path) -> Result<Box<dyn SubtitleFormat>, SubtitleError> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_string())
        .unwrap_or_default();

    let vtt = Vtt::new();
    if vtt.can_handle(&extension) {
        return Ok(Box::new(vtt));
    }

    Err(SubtitleError::UnsupportedFormat(path.display().to_string()))
}
