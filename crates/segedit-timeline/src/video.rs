//! The video being segmented: a fixed duration and its ordered segments.

use std::collections::HashSet;

use segedit_core::SegEditError;
use serde::{Deserialize, Serialize};

use crate::error::{TimelineError, TimelineResult};
use crate::segment::{Segment, SegmentId};

/// A video with a fixed duration and an ordered list of segments.
///
/// Segments are expected to be sorted, contiguous and to cover
/// `0..=duration`; see [`Video::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Total duration in milliseconds
    pub duration: i64,
    /// Segments in timeline order
    pub segments: Vec<Segment>,
}

impl Video {
    /// Create a video from an existing segmentation.
    pub fn new(duration: i64, segments: Vec<Segment>) -> Self {
        Self { duration, segments }
    }

    /// Build a fully covered timeline from interior cut points.
    ///
    /// Cuts are sorted and deduplicated; cuts outside `(0, duration)` are
    /// ignored, so `from_cuts(d, &[])` yields a single segment.
    pub fn from_cuts(duration: i64, cuts: &[i64]) -> TimelineResult<Self> {
        if duration < 0 {
            return Err(SegEditError::InvalidParameter(format!(
                "video duration must not be negative, got {duration}"
            ))
            .into());
        }

        let mut bounds: Vec<i64> = cuts
            .iter()
            .copied()
            .filter(|&cut| cut > 0 && cut < duration)
            .collect();
        bounds.sort_unstable();
        bounds.dedup();
        bounds.insert(0, 0);
        bounds.push(duration);

        let segments = bounds
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Ok(Self { duration, segments })
    }

    /// Load a segmentation delivered by the host as JSON.
    ///
    /// Every segment gets a fresh id; ids present in the payload are
    /// ignored.
    pub fn from_json(data: &[u8]) -> TimelineResult<Self> {
        let mut video: Self = serde_json::from_slice(data).map_err(|e| {
            TimelineError::from(SegEditError::Serialization(format!(
                "Failed to parse segmentation: {}",
                e
            )))
        })?;
        for segment in &mut video.segments {
            segment.id = SegmentId::new();
        }
        Ok(video)
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Position of a segment in timeline order.
    pub fn index_of(&self, id: SegmentId) -> Option<usize> {
        self.segments.iter().position(|s| s.id == id)
    }

    pub fn get(&self, id: SegmentId) -> Option<&Segment> {
        self.segments.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut Segment> {
        self.segments.iter_mut().find(|s| s.id == id)
    }

    /// The segment immediately before `id`, or `None` at the first segment.
    pub fn previous(&self, id: SegmentId) -> Option<&Segment> {
        let index = self.index_of(id)?;
        index.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    /// The segment immediately after `id`, or `None` at the last segment.
    pub fn next(&self, id: SegmentId) -> Option<&Segment> {
        let index = self.index_of(id)?;
        self.segments.get(index + 1)
    }

    /// Whether `time` lies within `0..=duration`.
    pub fn time_valid(&self, time: i64) -> bool {
        (0..=self.duration).contains(&time)
    }

    /// Find the segment playing at `time`. The end of the video belongs to
    /// the last segment.
    pub fn segment_at(&self, time: i64) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(time)).or_else(|| {
            self.segments
                .last()
                .filter(|last| time == self.duration && last.end == time)
        })
    }

    /// Total time covered by segments not marked deleted.
    pub fn included_duration(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.deleted)
            .map(Segment::duration)
            .sum()
    }

    /// Check ordering, contiguity, per-segment bounds and id uniqueness.
    ///
    /// Edge coverage is not checked; a timeline whose first segment no
    /// longer starts at zero still passes.
    pub fn validate_contiguity(&self) -> TimelineResult<()> {
        let mut seen = HashSet::with_capacity(self.segments.len());
        for (index, segment) in self.segments.iter().enumerate() {
            if !seen.insert(segment.id) {
                return Err(TimelineError::DuplicateSegment {
                    index,
                    id: segment.id,
                });
            }
            if segment.start > segment.end {
                return Err(TimelineError::InvertedSegment {
                    index,
                    start: segment.start,
                    end: segment.end,
                });
            }
            if !self.time_valid(segment.start) || !self.time_valid(segment.end) {
                return Err(TimelineError::OutOfBounds {
                    index,
                    start: segment.start,
                    end: segment.end,
                    duration: self.duration,
                });
            }
        }

        for (index, pair) in self.segments.windows(2).enumerate() {
            if pair[0].end != pair[1].start {
                return Err(TimelineError::Discontinuity {
                    index,
                    end: pair[0].end,
                    next_start: pair[1].start,
                });
            }
        }

        Ok(())
    }

    /// Check every timeline invariant, including full `0..duration` coverage.
    pub fn validate(&self) -> TimelineResult<()> {
        let (Some(first), Some(last)) = (self.segments.first(), self.segments.last()) else {
            return Err(TimelineError::EmptyTimeline);
        };

        self.validate_contiguity()?;

        if first.start != 0 || last.end != self.duration {
            return Err(TimelineError::CoverageGap {
                first_start: first.start,
                last_end: last.end,
                duration: self.duration,
            });
        }

        Ok(())
    }
}
