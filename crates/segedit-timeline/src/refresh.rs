//! Deferred one-shot timeline refresh.
//!
//! When a segment list is first shown, neighbouring UI state may still be
//! arriving, so the host asks for one more refresh after a short settle
//! delay. The task holds only a weak reference: if the editor is gone when
//! the delay elapses, nothing happens. The host cancels the task on
//! teardown through the returned [`RefreshHandle`].

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::editor::SegmentEditor;
use crate::error::{TimelineError, TimelineResult};

/// An editor shared between the host and deferred tasks.
pub type SharedEditor = Arc<Mutex<SegmentEditor>>;

/// Wrap an editor for sharing with deferred tasks.
pub fn shared(editor: SegmentEditor) -> SharedEditor {
    Arc::new(Mutex::new(editor))
}

/// Handle to a scheduled refresh. Dropping it cancels the refresh.
#[must_use = "dropping the handle cancels the refresh"]
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Cancel the refresh if it has not fired yet.
    pub fn cancel(&self) {
        self.task.abort();
    }

    /// Whether the task has run to completion or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Schedule the settle refresh after the editor's configured delay.
///
/// Must be called from within a Tokio runtime.
pub fn schedule_settle_refresh(editor: &SharedEditor) -> TimelineResult<RefreshHandle> {
    let delay = editor.lock().config().settle_delay();
    schedule_refresh_after(editor, delay)
}

/// Schedule a single timeline-changed refresh after `delay`.
pub fn schedule_refresh_after(
    editor: &SharedEditor,
    delay: Duration,
) -> TimelineResult<RefreshHandle> {
    let runtime = Handle::try_current().map_err(|_| TimelineError::NoRuntime)?;
    let weak: Weak<Mutex<SegmentEditor>> = Arc::downgrade(editor);

    let task = runtime.spawn(async move {
        tokio::time::sleep(delay).await;
        match weak.upgrade() {
            Some(editor) => {
                editor.lock().timeline_changed();
                debug!(delay_ms = delay.as_millis() as u64, "Settle refresh fired");
            }
            None => debug!("Editor dropped before settle refresh"),
        }
    });

    Ok(RefreshHandle { task })
}
