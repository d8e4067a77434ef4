//! Editor settings.

use std::time::Duration;

use segedit_core::SegEditError;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};

/// What merging the only segment on the timeline does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoleSegmentPolicy {
    /// Leave the timeline untouched and report an error.
    #[default]
    Reject,
    /// Keep the segment and stretch it over the whole video.
    Snap,
}

/// Settings for a [`SegmentEditor`](crate::SegmentEditor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Delay before the one-shot settle refresh, in milliseconds.
    pub settle_delay_ms: u64,
    /// Behaviour of a merge on a single-segment timeline.
    pub sole_segment_policy: SoleSegmentPolicy,
}

impl EditorConfig {
    pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(data: &[u8]) -> TimelineResult<Self> {
        serde_json::from_slice(data).map_err(|e| {
            TimelineError::from(SegEditError::Serialization(format!(
                "Invalid editor config: {}",
                e
            )))
        })
    }

    /// Load settings from a JSON file.
    pub fn load_from_file(path: &std::path::Path) -> TimelineResult<Self> {
        let data = std::fs::read(path).map_err(SegEditError::from)?;
        Self::from_json(&data)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: Self::DEFAULT_SETTLE_DELAY_MS,
            sole_segment_policy: SoleSegmentPolicy::default(),
        }
    }
}
