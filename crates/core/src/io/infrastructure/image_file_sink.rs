use std::path::{Path, PathBuf};

use crate::io::domain::frame_sink::FrameSink;
use crate::shared::frame::{Frame, PixelFormat};
use crate::shared::stream_info::StreamInfo;

/// Writes delivered frames to image files via the `image` crate.
///
/// The first frame lands at the configured path; any further frames get a
/// `_NNNN` suffix before the extension. BGR frames are reordered to RGB
/// here, at the encoding boundary.
pub struct ImageFileSink {
    path: Option<PathBuf>,
    delivered: usize,
}

impl ImageFileSink {
    pub fn new() -> Self {
        Self {
            path: None,
            delivered: 0,
        }
    }
}

impl Default for ImageFileSink {
    fn default() -> Self {
        Self::new()
    }
}

fn numbered(path: &Path, n: usize) -> PathBuf {
    let stem = path.file_stem().unwrap_or_default().to_string_lossy();
    let mut name = format!("{stem}_{n:04}");
    if let Some(ext) = path.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    path.with_file_name(name)
}

fn rgb_bytes(frame: &Frame) -> Vec<u8> {
    match frame.format() {
        PixelFormat::Rgb8 => frame.data().to_vec(),
        PixelFormat::Bgr8 => frame
            .data()
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0]])
            .collect(),
    }
}

impl FrameSink for ImageFileSink {
    fn open(
        &mut self,
        path: &Path,
        _info: &StreamInfo,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        self.path = Some(path.to_path_buf());
        self.delivered = 0;
        Ok(())
    }

    fn deliver(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        let base = self.path.as_ref().ok_or("ImageFileSink: not opened")?;
        let target = if self.delivered == 0 {
            base.clone()
        } else {
            numbered(base, self.delivered)
        };

        let img =
            image::RgbImage::from_raw(frame.width(), frame.height(), rgb_bytes(frame))
                .ok_or("frame buffer does not match its dimensions")?;
        img.save(&target)?;

        self.delivered += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.path = None;
        Ok(())
    }
}
