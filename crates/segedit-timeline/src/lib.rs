//! SegEdit Timeline - Segment timeline editing
//!
//! Maintains the segmentation of a single video as an ordered list of
//! contiguous intervals:
//! - Boundary moves with cascading removal of jumped-over segments
//! - Merge, toggle and selection of segments
//! - Display labels refreshed from authoritative bounds
//! - Timeline-changed observers and a deferred settle refresh

pub mod config;
pub mod edit;
pub mod editor;
pub mod error;
pub mod events;
pub mod player;
pub mod refresh;
pub mod segment;
pub mod video;

pub use config::{EditorConfig, SoleSegmentPolicy};
pub use edit::{EditOutcome, SegmentEdit};
pub use editor::SegmentEditor;
pub use error::{TimelineError, TimelineResult};
pub use events::{SubscriptionId, TimelineListeners};
pub use player::Player;
pub use refresh::{
    schedule_refresh_after, schedule_settle_refresh, shared, RefreshHandle, SharedEditor,
};
pub use segment::{Segment, SegmentClass, SegmentId};
pub use segedit_core::{format_millis, format_millis_f64, parse_time};
pub use video::Video;
