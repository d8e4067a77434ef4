//! Integration tests for the deferred settle refresh.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use segedit_timeline::{
    schedule_refresh_after, schedule_settle_refresh, shared, EditorConfig, SegmentEditor,
    SharedEditor, Video,
};

use crate::init_tracing;

fn view_with_counter(settle_delay_ms: u64) -> (SharedEditor, Arc<AtomicUsize>) {
    init_tracing();
    let config = EditorConfig {
        settle_delay_ms,
        ..EditorConfig::default()
    };
    let video = Video::from_cuts(60_000, &[10_000, 25_000, 40_000]).unwrap();
    let mut editor = SegmentEditor::with_config(video, config);

    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&refreshes);
    editor.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (shared(editor), refreshes)
}

#[tokio::test]
async fn late_label_writes_are_overwritten_by_settle_refresh() {
    let (editor, refreshes) = view_with_counter(20);
    let handle = schedule_settle_refresh(&editor).unwrap();

    // Neighbouring widgets write stale text before the view settles.
    {
        let mut guard = editor.lock();
        let id = guard.segments()[1].id;
        if let Some(segment) = guard.segment_mut(id) {
            segment.end_time = "00:00:00.000".into();
        }
    }

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(handle.is_finished());
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
    assert_eq!(editor.lock().segments()[1].end_time, "00:00:25.000");
}

#[tokio::test]
async fn edits_before_settle_still_get_the_refresh() {
    let (editor, refreshes) = view_with_counter(30);
    let _handle = schedule_settle_refresh(&editor).unwrap();

    {
        let mut guard = editor.lock();
        let id = guard.segments()[2].id;
        guard.merge_segment(id).unwrap();
    }
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn teardown_by_dropping_handle_suppresses_refresh() {
    let (editor, refreshes) = view_with_counter(30);
    let handle = schedule_settle_refresh(&editor).unwrap();
    drop(handle);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
    drop(editor);
}

#[tokio::test]
async fn view_destroyed_before_refresh_is_tolerated() {
    let (editor, refreshes) = view_with_counter(30);
    let handle = schedule_refresh_after(&editor, Duration::from_millis(30)).unwrap();
    drop(editor);

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(handle.is_finished());
    assert_eq!(refreshes.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn refresh_runs_on_worker_threads() {
    let (editor, refreshes) = view_with_counter(10);
    let handle = schedule_settle_refresh(&editor).unwrap();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(handle.is_finished());
    assert_eq!(refreshes.load(Ordering::SeqCst), 1);
}
