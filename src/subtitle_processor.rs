use std::fmt;
use serde::{Deserialize, Serialize};

use crate::timecode;

// @module: In-memory subtitle model

// @struct: Single timed cue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cue {
    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Display lines, top to bottom
    pub text: Vec<String>,
}

impl Cue {
    /// Creates a new cue
    pub fn new(start: f64, end: f64, text: Vec<String>) -> Self {
        Cue { start, end, text }
    }

    /// Time the cue stays on screen, zero when end precedes start
    pub fn duration(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }

    /// Start time as a `hh:mm:ss.mmm` timecode
    pub fn start_timecode(&self) -> String {
        timecode::encode_timecode(self.start)
    }

    /// End time as a `hh:mm:ss.mmm` timecode
    pub fn end_timecode(&self) -> String {
        timecode::encode_timecode(self.end)
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} --> {}", self.start_timecode(), self.end_timecode())?;
        for line in &self.text {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Ordered list of cues making up one subtitle file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleDocument {
    /// Cues in playback order
    cues: Vec<Cue>,
}

impl SubtitleDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from cues already in playback order
    pub fn from_cues(cues: Vec<Cue>) -> Self {
        SubtitleDocument { cues }
    }

    /// Append a cue at the end
    pub fn push(&mut self, cue: Cue) {
        self.cues.push(cue);
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    /// Earliest start and latest end across all cues
    pub fn time_span(&self) -> Option<(f64, f64)> {
        let first = self.cues.first()?;
        let span = self.cues.iter().fold((first.start, first.end), |(lo, hi), cue| {
            (lo.min(cue.start), hi.max(cue.end))
        });
        Some(span)
    }
}

impl FromIterator<Cue> for SubtitleDocument {
    fn from_iter<I: IntoIterator<Item = Cue>>(iter: I) -> Self {
        SubtitleDocument { cues: iter.into_iter().collect() }
    }
}

impl IntoIterator for SubtitleDocument {
    type Item = Cue;
    type IntoIter = std::vec::IntoIter<Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.into_iter()
    }
}

impl<'a> IntoIterator for &'a SubtitleDocument {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

impl fmt::Display for SubtitleDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Subtitle Document")?;
        writeln!(f, "Cues: {}", self.cues.len())?;
        if let Some((start, end)) = self.time_span() {
            writeln!(
                f,
                "Span: {} --> {}",
                timecode::encode_timecode(start),
                timecode::encode_timecode(end)
            )?;
        }
        Ok(())
    }
}
