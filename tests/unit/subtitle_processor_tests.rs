/*!
 * Tests for the cue and document model
 */

use subreader::subtitle_processor::{Cue, SubtitleDocument};

#[test]
fn test_cue_properties_withValidCue_shouldHaveCorrectValues() {
    let cue = Cue::new(61.234, 65.432, vec!["Hello".to_string(), "World".to_string()]);

    assert_eq!(cue.start_timecode(), "00:01:01.234");
    assert_eq!(cue.end_timecode(), "00:01:05.432");
    assert!((cue.duration() - 4.198).abs() < 1e-9);
}

#[test]
fn test_cue_duration_withEndBeforeStart_shouldBeZero() {
    let cue = Cue::new(5.0, 4.0, Vec::new());
    assert_eq!(cue.duration(), 0.0);
}

#[test]
fn test_cue_display_withTwoLines_shouldPrintTimingAndText() {
    let cue = Cue::new(5.0, 10.0, vec!["One".to_string(), "Two".to_string()]);
    assert_eq!(cue.to_string(), "00:00:05.000 --> 00:00:10.000\nOne\nTwo\n");
}

#[test]
fn test_document_push_withSeveralCues_shouldKeepInsertionOrder() {
    let mut document = SubtitleDocument::new();
    assert!(document.is_empty());

    document.push(Cue::new(10.0, 11.0, vec!["later".to_string()]));
    document.push(Cue::new(1.0, 2.0, vec!["earlier".to_string()]));
    document.push(Cue::new(1.0, 2.0, vec!["same time".to_string()]));

    assert_eq!(document.len(), 3);
    let texts: Vec<&str> = document.iter().map(|c| c.text[0].as_str()).collect();
    assert_eq!(texts, vec!["later", "earlier", "same time"]);
}

#[test]
fn test_document_time_span_withCues_shouldCoverAll() {
    let document: SubtitleDocument = vec![
        Cue::new(4.0, 6.0, Vec::new()),
        Cue::new(1.0, 2.0, Vec::new()),
        Cue::new(3.0, 9.5, Vec::new()),
    ]
    .into_iter()
    .collect();

    assert_eq!(document.time_span(), Some((1.0, 9.5)));
    assert_eq!(SubtitleDocument::new().time_span(), None);
}

#[test]
fn test_document_display_withCues_shouldSummarize() {
    let document = SubtitleDocument::from_cues(vec![Cue::new(1.0, 62.0, Vec::new())]);
    let output = document.to_string();

    assert!(output.contains("Cues: 1"));
    assert!(output.contains("00:00:01.000 --> 00:01:02.000"));
}

#[test]
fn test_cue_serde_withJson_shouldUseFieldNames() {
    let cue = Cue::new(1.5, 2.0, vec!["Hi".to_string()]);
    let json = serde_json::to_value(&cue).unwrap();

    assert_eq!(json, serde_json::json!({ "start": 1.5, "end": 2.0, "text": ["Hi"] }));
}
