//! Interactive editing of a segment timeline.
//!
//! Boundary edits arrive as label text typed by the user. An accepted edit
//! moves one boundary and drags the neighbouring segment's boundary with it,
//! consuming any neighbours the move jumps over. Rejected input only resets
//! the label that was typed into.

use segedit_core::{format_millis, millis_to_seconds, parse_time};
use tracing::{debug, warn};

use crate::config::{EditorConfig, SoleSegmentPolicy};
use crate::edit::EditOutcome;
use crate::error::{TimelineError, TimelineResult};
use crate::events::{SubscriptionId, TimelineListeners};
use crate::player::Player;
use crate::segment::{Segment, SegmentClass, SegmentId};
use crate::video::Video;

/// Editing session over one video's segments.
#[derive(Debug)]
pub struct SegmentEditor {
    video: Video,
    config: EditorConfig,
    listeners: TimelineListeners,
}

impl SegmentEditor {
    /// Create an editor with default settings. Labels are refreshed
    /// immediately.
    pub fn new(video: Video) -> Self {
        Self::with_config(video, EditorConfig::default())
    }

    pub fn with_config(video: Video, config: EditorConfig) -> Self {
        let mut editor = Self {
            video,
            config,
            listeners: TimelineListeners::new(),
        };
        editor.refresh_labels();
        editor
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    /// End the session and hand the segments back.
    pub fn into_video(self) -> Video {
        self.video
    }

    pub fn segments(&self) -> &[Segment] {
        &self.video.segments
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn duration(&self) -> i64 {
        self.video.duration
    }

    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.video.get(id)
    }

    /// Mutable access for the host's label and flag bindings.
    ///
    /// Writing `start` or `end` directly bypasses the editing rules.
    pub fn segment_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.video.get_mut(id)
    }

    pub fn previous_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.video.previous(id)
    }

    pub fn next_segment(&self, id: SegmentId) -> Option<&Segment> {
        self.video.next(id)
    }

    /// Whether `time` lies within `0..=duration`.
    pub fn time_valid(&self, time: i64) -> bool {
        self.video.time_valid(time)
    }

    pub fn segment_class(&self, id: SegmentId) -> TimelineResult<SegmentClass> {
        self.require(id).map(Segment::class)
    }

    // ── Boundary edits ──────────────────────────────────────────

    /// Write `text` into the segment's start label and apply it.
    pub fn set_start_time(
        &mut self,
        id: SegmentId,
        text: impl Into<String>,
    ) -> TimelineResult<EditOutcome> {
        self.require_mut(id)?.start_time = text.into();
        self.update_start_time(id)
    }

    /// Write `text` into the segment's end label and apply it.
    pub fn set_end_time(
        &mut self,
        id: SegmentId,
        text: impl Into<String>,
    ) -> TimelineResult<EditOutcome> {
        self.require_mut(id)?.end_time = text.into();
        self.update_end_time(id)
    }

    /// Apply the segment's start label as its new start.
    ///
    /// Previous segments starting after the new start are removed, and the
    /// nearest remaining one is extended or shortened to meet it. A first
    /// segment moved off zero is left that way.
    pub fn update_start_time(&mut self, id: SegmentId) -> TimelineResult<EditOutcome> {
        let index = self.index(id)?;
        let current = &self.video.segments[index];
        let (start, end) = (current.start, current.end);

        let new_start = match parse_time(&current.start_time) {
            Some(time) if time == start => {
                let segment = &mut self.video.segments[index];
                segment.start_time = format_millis(segment.start, true);
                return Ok(EditOutcome::Unchanged);
            }
            Some(time) if time <= end && self.time_valid(time) => time,
            parsed => {
                debug!(segment = %id, ?parsed, "Rejected start time");
                let segment = &mut self.video.segments[index];
                segment.start_time = format_millis(segment.start, true);
                return Ok(EditOutcome::Rejected);
            }
        };

        self.video.segments[index].start = new_start;

        let mut index = index;
        let mut consumed = 0;
        while index > 0 && self.video.segments[index - 1].start > new_start {
            self.remove_at(index - 1);
            index -= 1;
            consumed += 1;
        }
        if index > 0 {
            self.video.segments[index - 1].end = new_start;
        }

        debug!(segment = %id, from = start, to = new_start, consumed, "Moved segment start");
        self.timeline_changed();
        Ok(EditOutcome::Applied)
    }

    /// Apply the segment's end label as its new end.
    ///
    /// Mirror image of [`update_start_time`](Self::update_start_time): next
    /// segments ending before the new end are removed and the nearest
    /// remaining one starts where this one now ends.
    pub fn update_end_time(&mut self, id: SegmentId) -> TimelineResult<EditOutcome> {
        let index = self.index(id)?;
        let current = &self.video.segments[index];
        let (start, end) = (current.start, current.end);

        let new_end = match parse_time(&current.end_time) {
            Some(time) if time == end => {
                let segment = &mut self.video.segments[index];
                segment.end_time = format_millis(segment.end, true);
                return Ok(EditOutcome::Unchanged);
            }
            Some(time) if time >= start && self.time_valid(time) => time,
            parsed => {
                debug!(segment = %id, ?parsed, "Rejected end time");
                let segment = &mut self.video.segments[index];
                segment.end_time = format_millis(segment.end, true);
                return Ok(EditOutcome::Rejected);
            }
        };

        self.video.segments[index].end = new_end;

        let mut consumed = 0;
        while self
            .video
            .segments
            .get(index + 1)
            .is_some_and(|next| next.end < new_end)
        {
            self.remove_at(index + 1);
            consumed += 1;
        }
        if let Some(next) = self.video.segments.get_mut(index + 1) {
            next.start = new_end;
        }

        debug!(segment = %id, from = end, to = new_end, consumed, "Moved segment end");
        self.timeline_changed();
        Ok(EditOutcome::Applied)
    }

    // ── Structural edits ────────────────────────────────────────

    /// Remove a segment and let a neighbour take over its span.
    ///
    /// The previous segment grows forward if there is one, otherwise the next
    /// segment grows backward. A lone segment is handled per
    /// [`SoleSegmentPolicy`].
    pub fn merge_segment(&mut self, id: SegmentId) -> TimelineResult<EditOutcome> {
        let index = self.index(id)?;
        let Segment { start, end, .. } = self.video.segments[index];

        if index > 0 {
            self.video.segments[index - 1].end = end;
            self.remove_at(index);
            debug!(segment = %id, into = "previous", "Merged segment");
        } else if index + 1 < self.video.segments.len() {
            self.video.segments[index + 1].start = start;
            self.remove_at(index);
            debug!(segment = %id, into = "next", "Merged segment");
        } else {
            match self.config.sole_segment_policy {
                SoleSegmentPolicy::Reject => {
                    warn!(segment = %id, "Refusing to merge the only segment");
                    return Err(TimelineError::SoleSegmentMerge { id });
                }
                SoleSegmentPolicy::Snap => {
                    let duration = self.video.duration;
                    if start == 0 && end == duration {
                        return Ok(EditOutcome::Unchanged);
                    }
                    let segment = &mut self.video.segments[index];
                    segment.start = 0;
                    segment.end = duration;
                    debug!(segment = %id, "Snapped sole segment to full timeline");
                }
            }
        }

        self.timeline_changed();
        Ok(EditOutcome::Applied)
    }

    /// Flip the segment's `deleted` flag. Returns the new value.
    pub fn toggle_segment(&mut self, id: SegmentId) -> TimelineResult<bool> {
        let segment = self.require_mut(id)?;
        segment.deleted = !segment.deleted;
        Ok(segment.deleted)
    }

    pub fn select_segment(&mut self, id: SegmentId, selected: bool) -> TimelineResult<()> {
        self.require_mut(id)?.selected = selected;
        Ok(())
    }

    /// Seek the player to the segment's start unless it is already selected.
    /// Returns whether a seek was issued.
    pub fn skip_to_segment<P>(&self, id: SegmentId, player: &mut P) -> TimelineResult<bool>
    where
        P: Player + ?Sized,
    {
        let segment = self.require(id)?;
        if segment.selected {
            return Ok(false);
        }
        player.set_current_time(millis_to_seconds(segment.start));
        Ok(true)
    }

    /// Take a segment off the timeline without touching its neighbours.
    ///
    /// This leaves a gap; callers must repair the adjacent boundary
    /// themselves. No notification is sent.
    pub fn remove_segment(&mut self, id: SegmentId) -> Option<Segment> {
        let index = self.video.index_of(id)?;
        Some(self.remove_at(index))
    }

    // ── Refresh protocol ────────────────────────────────────────

    /// Rewrite every segment's labels from its bounds.
    pub fn refresh_labels(&mut self) {
        for segment in &mut self.video.segments {
            segment.refresh_labels();
        }
    }

    /// Refresh labels, then notify every subscriber.
    pub fn timeline_changed(&mut self) {
        self.refresh_labels();
        self.listeners.notify(&self.video);
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Video) + Send + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    // ── Helpers ─────────────────────────────────────────────────

    fn index(&self, id: SegmentId) -> TimelineResult<usize> {
        self.video
            .index_of(id)
            .ok_or(TimelineError::SegmentNotFound { id })
    }

    fn require(&self, id: SegmentId) -> TimelineResult<&Segment> {
        self.video
            .get(id)
            .ok_or(TimelineError::SegmentNotFound { id })
    }

    fn require_mut(&mut self, id: SegmentId) -> TimelineResult<&mut Segment> {
        self.video
            .get_mut(id)
            .ok_or(TimelineError::SegmentNotFound { id })
    }

    fn remove_at(&mut self, index: usize) -> Segment {
        self.video.segments.remove(index)
    }
}
