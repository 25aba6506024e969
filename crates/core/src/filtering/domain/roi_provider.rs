use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// Supplies the region of interest for a frame.
///
/// The filter does not decide where the ROI lies; it asks this
/// collaborator once per pass when ROI processing is enabled.
pub trait RoiProvider: Send + Sync {
    fn get_roi(&self, frame: &Frame) -> Rect;
}
