//! Segment types for the timeline.

use std::fmt;

use segedit_core::format_millis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a segment for the lifetime of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(Uuid);

impl SegmentId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SegmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SegmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One contiguous interval of a video's timeline.
///
/// `start` and `end` are the authoritative millisecond bounds. `start_time`
/// and `end_time` are display labels: the host may overwrite them with user
/// input, and the editor rewrites them from the bounds on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Unique segment ID
    #[serde(default)]
    pub id: SegmentId,
    /// Start offset in milliseconds
    pub start: i64,
    /// End offset in milliseconds
    pub end: i64,
    /// Excluded from downstream use (still occupies the timeline)
    #[serde(default)]
    pub deleted: bool,
    /// UI highlight
    #[serde(default)]
    pub selected: bool,
    /// `HH:MM:SS.mmm` label for `start`
    #[serde(default)]
    pub start_time: String,
    /// `HH:MM:SS.mmm` label for `end`
    #[serde(default)]
    pub end_time: String,
}

impl Segment {
    /// Create a segment spanning `start..end` with labels filled in.
    pub fn new(start: i64, end: i64) -> Self {
        let mut segment = Self {
            id: SegmentId::new(),
            start,
            end,
            deleted: false,
            selected: false,
            start_time: String::new(),
            end_time: String::new(),
        };
        segment.refresh_labels();
        segment
    }

    /// Length of the segment in milliseconds.
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Check if a time falls within this segment (start inclusive, end exclusive).
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time < self.end
    }

    /// Rewrite both labels from the authoritative bounds.
    pub fn refresh_labels(&mut self) {
        self.start_time = format_millis(self.start, true);
        self.end_time = format_millis(self.end, true);
    }

    /// Presentation tags for this segment.
    pub fn class(&self) -> SegmentClass {
        SegmentClass {
            deleted: self.deleted,
            selected: self.selected,
        }
    }
}

/// Presentation tags derived from a segment's flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentClass {
    pub deleted: bool,
    pub selected: bool,
}
