//! Error types for the timeline subsystem.

use segedit_core::SegEditError;
use thiserror::Error;

use crate::segment::SegmentId;

/// Errors that can occur while editing or validating a segment timeline.
///
/// Bad user input (unparsable or out-of-range times) is not an error; it is
/// reported as [`EditOutcome::Rejected`](crate::EditOutcome::Rejected).
#[derive(Debug, Error)]
pub enum TimelineError {
    /// No segment with this id is on the timeline.
    #[error("Segment not found: {id}")]
    SegmentNotFound { id: SegmentId },

    /// The only segment on the timeline has no neighbour to merge into.
    #[error("Cannot merge {id}: it is the only segment on the timeline")]
    SoleSegmentMerge { id: SegmentId },

    /// Two segments share an id, so lookups would only ever reach the first.
    #[error("Segment {index} reuses id {id}")]
    DuplicateSegment { index: usize, id: SegmentId },

    #[error("Timeline has no segments")]
    EmptyTimeline,

    #[error("Segment {index} ends before it starts ({start} > {end})")]
    InvertedSegment { index: usize, start: i64, end: i64 },

    #[error("Segment {index} lies outside 0..={duration} ({start}..{end})")]
    OutOfBounds {
        index: usize,
        start: i64,
        end: i64,
        duration: i64,
    },

    /// Adjacent segments do not share a boundary.
    #[error("Segment {index} ends at {end} but the next one starts at {next_start}")]
    Discontinuity {
        index: usize,
        end: i64,
        next_start: i64,
    },

    /// The segments do not span the whole video.
    #[error("Timeline covers {first_start}..{last_end}, expected 0..{duration}")]
    CoverageGap {
        first_start: i64,
        last_end: i64,
        duration: i64,
    },

    /// Deferred work was requested outside a Tokio runtime.
    #[error("No Tokio runtime available to schedule the refresh")]
    NoRuntime,

    #[error(transparent)]
    Core(#[from] SegEditError),
}

/// Result type alias for timeline operations.
pub type TimelineResult<T> = std::result::Result<T, TimelineError>;
