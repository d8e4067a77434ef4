//! Edit commands for the segment timeline.
//!
//! Uses the Command pattern: the host turns each user gesture into a
//! `SegmentEdit` and hands it to the editor, so gestures can be queued,
//! logged or batched without the host touching segment bounds itself.

use crate::editor::SegmentEditor;
use crate::error::TimelineResult;
use crate::segment::SegmentId;

/// What an edit did to the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The timeline or a segment flag changed.
    Applied,
    /// The requested value was already in place.
    Unchanged,
    /// The input was unparsable or out of range; the label was reset.
    Rejected,
}

// ── Edit commands ───────────────────────────────────────────────

/// A user-level edit on the segment timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentEdit {
    /// Commit `text` as the new start of a segment.
    SetStartTime { id: SegmentId, text: String },
    /// Commit `text` as the new end of a segment.
    SetEndTime { id: SegmentId, text: String },
    /// Fold a segment into its neighbour.
    Merge { id: SegmentId },
    /// Flip a segment's deleted flag.
    Toggle { id: SegmentId },
    /// Set a segment's highlight.
    Select { id: SegmentId, selected: bool },
    /// Several edits applied in order; stops at the first error.
    Batch(Vec<SegmentEdit>),
}

impl SegmentEdit {
    /// Apply this command to an editor.
    pub fn apply(&self, editor: &mut SegmentEditor) -> TimelineResult<EditOutcome> {
        match self {
            Self::SetStartTime { id, text } => editor.set_start_time(*id, text.as_str()),
            Self::SetEndTime { id, text } => editor.set_end_time(*id, text.as_str()),
            Self::Merge { id } => editor.merge_segment(*id),
            Self::Toggle { id } => editor.toggle_segment(*id).map(|_| EditOutcome::Applied),
            Self::Select { id, selected } => {
                let changed = editor
                    .segment(*id)
                    .is_some_and(|segment| segment.selected != *selected);
                editor.select_segment(*id, *selected)?;
                Ok(if changed {
                    EditOutcome::Applied
                } else {
                    EditOutcome::Unchanged
                })
            }
            Self::Batch(commands) => {
                let mut outcome = EditOutcome::Unchanged;
                for cmd in commands {
                    outcome = match (outcome, cmd.apply(editor)?) {
                        (EditOutcome::Applied, _) | (_, EditOutcome::Applied) => {
                            EditOutcome::Applied
                        }
                        (EditOutcome::Rejected, _) | (_, EditOutcome::Rejected) => {
                            EditOutcome::Rejected
                        }
                        _ => EditOutcome::Unchanged,
                    };
                }
                Ok(outcome)
            }
        }
    }

    /// The segment this edit targets, if it targets exactly one.
    pub fn target(&self) -> Option<SegmentId> {
        match self {
            Self::SetStartTime { id, .. }
            | Self::SetEndTime { id, .. }
            | Self::Merge { id }
            | Self::Toggle { id }
            | Self::Select { id, .. } => Some(*id),
            Self::Batch(_) => None,
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────
