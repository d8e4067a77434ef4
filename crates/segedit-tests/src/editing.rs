//! Integration tests for interactive segment editing.
//!
//! Exercises the editor the way a host view drives it: load a
//! segmentation, bind labels, commit user text, react to notifications.

use std::sync::Arc;

use parking_lot::Mutex;
use segedit_core::{format_millis, parse_time};
use segedit_timeline::{
    EditOutcome, Player, SegmentEdit, SegmentEditor, SegmentId, TimelineError, Video,
};

use crate::init_tracing;

// ── Helpers ────────────────────────────────────────────────────

const LECTURE_JSON: &[u8] = br#"{
    "duration": 6000,
    "segments": [
        { "start": 0,    "end": 1000 },
        { "start": 1000, "end": 3000, "selected": true },
        { "start": 3000, "end": 6000 }
    ]
}"#;

fn load_lecture() -> (SegmentEditor, Vec<SegmentId>) {
    init_tracing();
    let video = Video::from_json(LECTURE_JSON).unwrap();
    let ids = video.segments.iter().map(|s| s.id).collect();
    (SegmentEditor::new(video), ids)
}

fn bounds(editor: &SegmentEditor) -> Vec<(i64, i64)> {
    editor.segments().iter().map(|s| (s.start, s.end)).collect()
}

#[derive(Default)]
struct ScrubBar {
    position: Option<f64>,
    seeks: usize,
}

impl Player for ScrubBar {
    fn set_current_time(&mut self, seconds: f64) {
        self.position = Some(seconds);
        self.seeks += 1;
    }
}

// ── Loading ────────────────────────────────────────────────────

#[test]
fn loaded_segmentation_gets_labels() {
    let (editor, _) = load_lecture();
    let labels: Vec<(&str, &str)> = editor
        .segments()
        .iter()
        .map(|s| (s.start_time.as_str(), s.end_time.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("00:00:00.000", "00:00:01.000"),
            ("00:00:01.000", "00:00:03.000"),
            ("00:00:03.000", "00:00:06.000"),
        ]
    );
    assert!(editor.video().validate().is_ok());
}

#[test]
fn labels_parse_back_to_bounds() {
    let (editor, _) = load_lecture();
    for segment in editor.segments() {
        assert_eq!(parse_time(&segment.start_time), Some(segment.start));
        assert_eq!(parse_time(&segment.end_time), Some(segment.end));
    }
}

// ── Boundary edits ─────────────────────────────────────────────

#[test]
fn dragging_start_backward_consumes_previous_segments() {
    let (mut editor, ids) = load_lecture();

    let outcome = editor.set_start_time(ids[2], "00:00:00.500").unwrap();

    assert_eq!(outcome, EditOutcome::Applied);
    assert_eq!(bounds(&editor), vec![(0, 500), (500, 6_000)]);
    assert_eq!(editor.segments()[0].end_time, "00:00:00.500");
    assert_eq!(editor.segments()[1].start_time, "00:00:00.500");
}

#[test]
fn rejected_start_restores_label() {
    let (mut editor, ids) = load_lecture();

    let outcome = editor.set_start_time(ids[1], "00:00:04.000").unwrap();

    assert_eq!(outcome, EditOutcome::Rejected);
    assert_eq!(editor.segment(ids[1]).unwrap().start, 1_000);
    assert_eq!(
        editor.segment(ids[1]).unwrap().start_time,
        format_millis(1_000, true)
    );
}

#[test]
fn end_beyond_duration_is_rejected() {
    let (mut editor, ids) = load_lecture();
    let before = bounds(&editor);

    let outcome = editor.set_end_time(ids[2], "00:00:06.001").unwrap();

    assert_eq!(outcome, EditOutcome::Rejected);
    assert_eq!(bounds(&editor), before);
}

#[test]
fn shortening_last_segment_opens_coverage_gap() {
    let (mut editor, ids) = load_lecture();

    editor.set_end_time(ids[2], "00:00:05.000").unwrap();

    assert!(editor.video().validate_contiguity().is_ok());
    assert!(matches!(
        editor.video().validate(),
        Err(TimelineError::CoverageGap { last_end: 5_000, .. })
    ));
}

// ── Merge / toggle / skip ──────────────────────────────────────

#[test]
fn merge_down_to_one_segment_then_refuse() {
    let (mut editor, ids) = load_lecture();

    editor.merge_segment(ids[1]).unwrap();
    editor.merge_segment(ids[2]).unwrap();
    assert_eq!(bounds(&editor), vec![(0, 6_000)]);

    let err = editor.merge_segment(ids[0]).unwrap_err();
    assert!(matches!(err, TimelineError::SoleSegmentMerge { .. }));
    assert!(editor.video().validate().is_ok());
}

#[test]
fn toggled_segments_drop_out_of_included_duration() {
    let (mut editor, ids) = load_lecture();
    editor.toggle_segment(ids[2]).unwrap();

    assert_eq!(editor.video().included_duration(), 3_000);
    assert!(editor.segment_class(ids[2]).unwrap().deleted);
}

#[test]
fn skip_respects_selection() {
    let (editor, ids) = load_lecture();
    let mut player = ScrubBar::default();

    assert!(!editor.skip_to_segment(ids[1], &mut player).unwrap());
    assert!(editor.skip_to_segment(ids[2], &mut player).unwrap());

    assert_eq!(player.seeks, 1);
    assert_eq!(player.position, Some(3.0));
}

#[test]
fn skip_accepts_trait_objects() {
    let (editor, ids) = load_lecture();
    let mut player = ScrubBar::default();
    let dyn_player: &mut dyn Player = &mut player;

    editor.skip_to_segment(ids[0], dyn_player).unwrap();
    assert_eq!(player.position, Some(0.0));
}

// ── Notifications ──────────────────────────────────────────────

#[test]
fn listeners_see_refreshed_labels() {
    let (mut editor, ids) = load_lecture();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    editor.subscribe(move |video| {
        sink.lock()
            .push(video.segments.iter().map(|s| s.end_time.clone()).collect::<Vec<_>>());
    });

    editor.merge_segment(ids[1]).unwrap();

    let seen = seen.lock();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], vec!["00:00:03.000", "00:00:06.000"]);
}

#[test]
fn command_stream_replays_a_session() {
    let (mut editor, ids) = load_lecture();
    let session = vec![
        SegmentEdit::Select {
            id: ids[1],
            selected: false,
        },
        SegmentEdit::SetEndTime {
            id: ids[0],
            text: "00:00:02.000".into(),
        },
        SegmentEdit::Toggle { id: ids[2] },
        SegmentEdit::Merge { id: ids[1] },
    ];

    for edit in &session {
        edit.apply(&mut editor).unwrap();
        assert!(editor.video().validate().is_ok());
    }

    assert_eq!(bounds(&editor), vec![(0, 3_000), (3_000, 6_000)]);
    assert!(editor.segments()[1].deleted);
    assert!(!editor.segments()[0].selected);
}

#[test]
fn into_video_returns_edited_segments() {
    let (mut editor, ids) = load_lecture();
    editor.merge_segment(ids[0]).unwrap();

    let video = editor.into_video();
    assert_eq!(video.len(), 2);
    assert_eq!(video.segments[0].id, ids[1]);
    assert_eq!(video.segments[0].start, 0);
}
