use crate::filtering::domain::roi_provider::RoiProvider;
use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

/// ROI provider that always returns a pre-configured rectangle.
///
/// Stands in for the perception node's ROI service when the region is
/// known up front, e.g. from CLI flags. No clamping: a rectangle that does
/// not fit the frame surfaces as an extraction error downstream.
pub struct FixedRoiProvider {
    rect: Rect,
}

impl FixedRoiProvider {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

impl RoiProvider for FixedRoiProvider {
    fn get_roi(&self, _frame: &Frame) -> Rect {
        self.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::PixelFormat;

    #[test]
    fn test_returns_configured_rect_for_any_frame() {
        let provider = FixedRoiProvider::new(Rect::new(10, 20, 30, 40));
        let small = Frame::new(vec![0u8; 3], 1, 1, PixelFormat::Rgb8, 0, 0);
        let large = Frame::new(vec![0u8; 300], 10, 10, PixelFormat::Bgr8, 1, 5);

        assert_eq!(provider.get_roi(&small), Rect::new(10, 20, 30, 40));
        assert_eq!(provider.get_roi(&large), Rect::new(10, 20, 30, 40));
    }
}
