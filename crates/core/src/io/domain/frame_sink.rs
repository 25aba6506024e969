use std::path::Path;

use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

/// Output boundary for filtered frames.
///
/// `deliver` hands over one outbound frame; the sink must not alter the
/// frame's capture timestamp, which downstream consumers use for temporal
/// correlation.
pub trait FrameSink: Send {
    /// Prepares the sink for a stream with the given metadata.
    fn open(
        &mut self,
        path: &Path,
        info: &StreamInfo,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Hands one frame to the output boundary.
    fn deliver(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Flushes and releases the sink.
    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>>;
}
