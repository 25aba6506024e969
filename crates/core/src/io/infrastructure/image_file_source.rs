use std::path::Path;
use std::time::UNIX_EPOCH;

use crate::io::domain::frame_source::FrameSource;
use crate::shared::frame::{Frame, PixelFormat};
use crate::shared::stream_info::StreamInfo;

/// Adapts a single image file to the [`FrameSource`] interface.
///
/// Decodes via the `image` crate into an RGB frame and presents it as a
/// one-frame stream with `fps = 0`. The file's modification time stands in
/// for the capture timestamp, since still files carry no camera clock.
pub struct ImageFileSource {
    frame: Option<Frame>,
    info: Option<StreamInfo>,
}

impl ImageFileSource {
    pub fn new() -> Self {
        Self {
            frame: None,
            info: None,
        }
    }
}

impl Default for ImageFileSource {
    fn default() -> Self {
        Self::new()
    }
}

fn capture_timestamp_ms(path: &Path) -> i64 {
    std::fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

impl FrameSource for ImageFileSource {
    fn open(&mut self, path: &Path) -> Result<StreamInfo, Box<dyn std::error::Error>> {
        let img = image::open(path)?.to_rgb8();
        let (width, height) = img.dimensions();
        let captured_at_ms = capture_timestamp_ms(path);

        self.frame = Some(Frame::new(
            img.into_raw(),
            width,
            height,
            PixelFormat::Rgb8,
            0,
            captured_at_ms,
        ));

        let info = StreamInfo {
            width,
            height,
            fps: 0.0,
            total_frames: 1,
            source_path: Some(path.to_path_buf()),
        };
        self.info = Some(info.clone());
        Ok(info)
    }

    fn frames(
        &mut self,
    ) -> Box<dyn Iterator<Item = Result<Frame, Box<dyn std::error::Error>>> + '_> {
        if self.frame.is_none() {
            return Box::new(std::iter::once(Err("ImageFileSource: not opened".into())));
        }
        Box::new(self.frame.take().into_iter().map(Ok))
    }

    fn close(&mut self) {
        self.frame = None;
        self.info = None;
    }
}
