//! The playback cursor the editor drives.

/// A media player whose position the editor can move.
pub trait Player {
    /// Seek to `seconds` from the start of the video.
    fn set_current_time(&mut self, seconds: f64);
}
