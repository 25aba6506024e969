use std::sync::Arc;

use ndarray::Axis;

use crate::config::store::ConfigStore;
use crate::config::threshold::ThresholdRange;
use crate::filtering::domain::frame_processor::FrameProcessor;
use crate::filtering::domain::roi_extractor;
use crate::filtering::domain::roi_provider::RoiProvider;
use crate::shared::frame::Frame;

use super::color;

/// Threshold filter over the HSV representation of a frame.
///
/// Classifies every pixel against the live threshold range and blacks out
/// those that fall inside it; everything else passes through
/// byte-identical. Note the direction: in-range pixels are removed, not
/// kept.
///
/// The configuration snapshot is taken once at the start of a pass, so a
/// reconfiguration landing mid-frame only affects the next frame.
pub struct HsvThresholdFilter {
    store: Arc<ConfigStore>,
    roi: Box<dyn RoiProvider>,
}

impl HsvThresholdFilter {
    pub fn new(store: Arc<ConfigStore>, roi: Box<dyn RoiProvider>) -> Self {
        Self { store, roi }
    }
}

impl FrameProcessor for HsvThresholdFilter {
    fn process(&self, frame: &Frame) -> Result<Frame, Box<dyn std::error::Error>> {
        let config = self.store.snapshot();

        let working = if config.use_roi {
            roi_extractor::extract(frame, &self.roi.get_roi(frame))?
        } else {
            frame.clone()
        };

        let mask = in_range_mask(&working, &config.range);
        Ok(apply_mask(working, &mask))
    }
}

/// Per-pixel membership test, true where the pixel's HSV coordinates lie
/// inside the inclusive per-channel bounds. Row-major, one entry per
/// pixel.
fn in_range_mask(frame: &Frame, range: &ThresholdRange) -> Vec<bool> {
    let format = frame.format();
    frame
        .as_ndarray()
        .lanes(Axis(2))
        .into_iter()
        .map(|px| range.contains(color::hsv_from_pixel(format, [px[0], px[1], px[2]])))
        .collect()
}

/// Zeroes every masked pixel across all channels.
///
/// Black is the same point in the native and HSV encodings, so zeroing in
/// place realizes the HSV-space mask while unmasked pixels keep their
/// source bytes exactly.
fn apply_mask(mut frame: Frame, mask: &[bool]) -> Frame {
    let channels = frame.channels() as usize;
    for (px, &inside) in frame.data_mut().chunks_exact_mut(channels).zip(mask) {
        if inside {
            px.fill(0);
        }
    }
    frame
}
