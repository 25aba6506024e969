use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

/// Reads frames from a camera, video or image source.
///
/// Implementations handle transport details (decoding, device access)
/// while the pipeline works with the abstract `Frame` and `StreamInfo`
/// types. Capture timestamps are assigned here, at the ingestion boundary.
pub trait FrameSource: Send {
    /// Opens the source and returns its stream metadata.
    fn open(&mut self, path: &Path) -> Result<StreamInfo, Box<dyn std::error::Error>>;

    /// Returns an iterator over frames in arrival order.
    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_>;

    /// Releases any resources held by the source.
    fn close(&mut self);
}
