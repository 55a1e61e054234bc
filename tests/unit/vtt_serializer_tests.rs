/*!
 * Tests for WebVTT serialization
 */

use subreader::subtitle_processor::{Cue, SubtitleDocument};
use subreader::vtt::{serialize, HEADER};

fn cue(start: f64, end: f64, lines: &[&str]) -> Cue {
    Cue::new(start, end, lines.iter().map(|l| l.to_string()).collect())
}

#[test]
fn test_serialize_withEmptyDocument_shouldEmitOnlyHeader() {
    assert_eq!(serialize(&SubtitleDocument::new()), "WEBVTT\r\n");
    assert_eq!(HEADER, "WEBVTT");
}

#[test]
fn test_serialize_withSingleCue_shouldNotAppendSeparator() {
    let document = SubtitleDocument::from_cues(vec![cue(1.0, 2.0, &["Hi"])]);
    assert_eq!(serialize(&document), "WEBVTT\r\n1\r\n00:00:01.000 --> 00:00:02.000\r\nHi");
}

#[test]
fn test_serialize_withSeveralCues_shouldNumberAndSeparateThem() {
    let document = SubtitleDocument::from_cues(vec![
        cue(1.0, 2.5, &["Hello", "World"]),
        cue(3723.456, 3725.0, &["Later"]),
    ]);

    let expected = "WEBVTT\r\n\
        1\r\n00:00:01.000 --> 00:00:02.500\r\nHello\r\nWorld\r\n\r\n\
        2\r\n01:02:03.456 --> 01:02:05.000\r\nLater";
    assert_eq!(serialize(&document), expected);
}

#[test]
fn test_serialize_withEmptyText_shouldEndAfterTimingLine() {
    let document = SubtitleDocument::from_cues(vec![cue(0.0, 1.0, &[])]);
    assert_eq!(serialize(&document), "WEBVTT\r\n1\r\n00:00:00.000 --> 00:00:01.000\r\n");
}

#[test]
fn test_serialize_withUnroundedTimes_shouldRoundToMilliseconds() {
    let document = SubtitleDocument::from_cues(vec![cue(0.12345, 59.9996, &["x"])]);
    assert_eq!(serialize(&document), "WEBVTT\r\n1\r\n00:00:00.123 --> 00:01:00.000\r\nx");
}

#[test]
fn test_serialize_withAnyDocument_shouldOnlyUseCrlf() {
    let document = SubtitleDocument::from_cues(vec![cue(1.0, 2.0, &["a", "b"]), cue(3.0, 4.0, &["c"])]);
    let output = serialize(&document);
    let bare_lf = output.match_indices('\n').filter(|(i, _)| *i == 0 || output.as_bytes()[i - 1] != b'\r').count();
    assert_eq!(bare_lf, 0);
}
