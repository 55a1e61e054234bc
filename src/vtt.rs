/*!
 * WebVTT reading and writing.
 *
 * Reading splits the file into blank-line separated blocks and scans each
 * block for a `start --> end` timing line. Blocks without one are dropped.
 * Writing numbers cues from 1 and always emits CRLF line breaks.
 */

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::formats::{FormatInfo, ParseReport, SkipReason, SkippedBlock, SubtitleFormat};
use crate::subtitle_processor::{Cue, SubtitleDocument};
use crate::timecode::{decode_timecode, encode_timecode};

/// First line of every serialized file
pub const HEADER: &str = "WEBVTT";

const LINE_BREAK: &str = "\r\n";
const CUE_SEPARATOR: &str = "\r\n\r\n";

/// Characters removed when trimming payloads and text lines
const TRIM_SET: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// `start --> end` line, one padding char around the arrow, settings ignored
static TIMING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"([0-9]{2}:(?:[0-9]{2}:)?[0-9]{2}\.[0-9]{3})[^\r\n]-->[^\r\n]([0-9]{2}:(?:[0-9]{2}:)?[0-9]{2}\.[0-9]{3})[^\r\n]*(?:\r\n|\r|\n)",
    )
    .expect("timing pattern is valid")
});

/// Karaoke style timestamps such as `<00:00:01.000>`
static TIMING_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[0-9:.]*>").expect("tag pattern is valid"));

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("line break pattern is valid"));

const EXCERPT_CHARS: usize = 40;

/// WebVTT format handler
#[derive(Debug)]
pub struct Vtt {
    info: FormatInfo,
}

impl Vtt {
    pub fn new() -> Self {
        Self {
            info: FormatInfo {
                name: "WebVTT".to_string(),
                extensions: vec!["vtt".to_string(), "webvtt".to_string()],
                mime_type: "text/vtt".to_string(),
                description: "WebVTT captions, text lines with markup tags stripped".to_string(),
            },
        }
    }
}

impl Default for Vtt {
    fn default() -> Self {
        Self::new()
    }
}

impl SubtitleFormat for Vtt {
    fn info(&self) -> &FormatInfo {
        &self.info
    }

    fn decode_with_report(&self, content: &str) -> ParseReport {
        parse_with_report(content)
    }

    fn decode(&self, content: &str) -> SubtitleDocument {
        parse(content)
    }

    fn encode(&self, document: &SubtitleDocument) -> String {
        serialize(document)
    }
}

/// Parse file text into a document, dropping blocks that are not cues
pub fn parse(content: &str) -> SubtitleDocument {
    split_blocks(content).filter_map(parse_block).collect()
}

/// Parse file text and record every block that produced no cue
pub fn parse_with_report(content: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, block) in split_blocks(content).enumerate() {
        match parse_block(block) {
            Some(cue) => report.document.push(cue),
            None => {
                let skipped = describe_skipped(index, block);
                debug!("Skipping block {} ({}): {:?}", index, skipped.reason, skipped.excerpt);
                report.skipped.push(skipped);
            }
        }
    }

    report
}

/// Split file text on every pair of consecutive line breaks
pub fn split_blocks(content: &str) -> Blocks<'_> {
    Blocks {
        source: content,
        cursor: 0,
        finished: false,
    }
}

/// Lazy iterator over the raw blocks of a file.
///
/// A line break is CRLF, LF or CR. CRLF always counts as one break, so a
/// lone CRLF never separates blocks. Empty blocks are yielded too.
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    source: &'a str,
    cursor: usize,
    finished: bool,
}

impl<'a> Iterator for Blocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.finished {
            return None;
        }

        let bytes = self.source.as_bytes();
        let start = self.cursor;
        let mut at = start;
        while at < bytes.len() {
            let first = line_break_len(bytes, at);
            if first > 0 {
                let second = line_break_len(bytes, at + first);
                if second > 0 {
                    self.cursor = at + first + second;
                    return Some(&self.source[start..at]);
                }
            }
            at += 1;
        }

        self.finished = true;
        Some(&self.source[start..])
    }
}

/// Parse one raw block, `None` when it holds no cue timing
pub fn parse_block(block: &str) -> Option<Cue> {
    let timing = find_timing(block)?;
    let start = decode_timecode(timing.start)?;
    let end = decode_timecode(timing.end)?;
    Some(Cue::new(start, end, extract_lines(timing.payload)))
}

/// Render a document as WebVTT text
pub fn serialize(document: &SubtitleDocument) -> String {
    let mut content = String::with_capacity(HEADER.len() + document.len() * 64);
    content.push_str(HEADER);
    content.push_str(LINE_BREAK);

    for (index, cue) in document.iter().enumerate() {
        if index > 0 {
            content.push_str(CUE_SEPARATOR);
        }
        content.push_str(&(index + 1).to_string());
        content.push_str(LINE_BREAK);
        content.push_str(&encode_timecode(cue.start));
        content.push_str(" --> ");
        content.push_str(&encode_timecode(cue.end));
        content.push_str(LINE_BREAK);
        content.push_str(&cue.text.join(LINE_BREAK));
    }

    content
}

/// Pieces of a block matched by the timing grammar
#[derive(Debug, PartialEq)]
struct CueTiming<'a> {
    start: &'a str,
    end: &'a str,
    payload: &'a str,
}

/// Length of the line break starting at `at`, 0 when there is none
fn line_break_len(bytes: &[u8], at: usize) -> usize {
    match bytes.get(at) {
        Some(b'\r') if bytes.get(at + 1) == Some(&b'\n') => 2,
        Some(b'\r') | Some(b'\n') => 1,
        _ => 0,
    }
}

/// Leftmost position in the block where the timing grammar matches
fn find_timing(block: &str) -> Option<CueTiming<'_>> {
    let captures = TIMING_REGEX.captures(block)?;
    let whole = captures.get(0)?;
    Some(CueTiming {
        start: captures.get(1)?.as_str(),
        end: captures.get(2)?.as_str(),
        payload: &block[whole.end()..],
    })
}

/// Turn the text after the timing line into display lines
fn extract_lines(payload: &str) -> Vec<String> {
    let trimmed = payload.trim_matches(TRIM_SET);
    if trimmed.is_empty() {
        return Vec::new();
    }

    split_lines(trimmed)
        .into_iter()
        .map(|line| strip_timing_tags(line.trim_matches(TRIM_SET)))
        .collect()
}

fn split_lines(text: &str) -> Vec<&str> {
    LINE_BREAK_REGEX.split(text).collect()
}

/// Remove inline tags made only of digits, `:` and `.`, like `<00:00:01.000>`
fn strip_timing_tags(line: &str) -> String {
    TIMING_TAG_REGEX.replace_all(line, "").into_owned()
}

fn describe_skipped(index: usize, block: &str) -> SkippedBlock {
    let trimmed = block.trim_matches(TRIM_SET);
    let reason = if trimmed.is_empty() {
        SkipReason::Blank
    } else if trimmed.starts_with(HEADER) {
        SkipReason::Header
    } else if trimmed.starts_with("NOTE") {
        SkipReason::Comment
    } else {
        SkipReason::NoCueTiming
    };

    let first_line = split_lines(trimmed).into_iter().next().unwrap_or_default();
    SkippedBlock {
        index,
        reason,
        excerpt: first_line.chars().take(EXCERPT_CHARS).collect(),
    }
}
