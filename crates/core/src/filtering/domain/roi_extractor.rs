use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::rect::Rect;

#[derive(Error, Debug)]
pub enum RoiError {
    #[error(
        "roi {x},{y} {width}x{height} exceeds frame extent {frame_width}x{frame_height}"
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        frame_width: u32,
        frame_height: u32,
    },
}

/// Copies the sub-grid bounded by `rect` into a new frame.
///
/// The pixel format is preserved. Sequence index and capture timestamp are
/// carried over mechanically; the emitter stays authoritative for stamping
/// the outbound frame. An out-of-bounds rectangle is a caller error and is
/// propagated, not clamped.
pub fn extract(frame: &Frame, rect: &Rect) -> Result<Frame, RoiError> {
    if !rect.fits_within(frame.width(), frame.height()) {
        return Err(RoiError::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            frame_width: frame.width(),
            frame_height: frame.height(),
        });
    }

    let channels = frame.channels() as usize;
    let fw = frame.width() as usize;
    let rx = rect.x as usize;
    let rw = rect.width as usize;
    let rh = rect.height as usize;

    let mut data = Vec::with_capacity(rw * rh * channels);
    for row in 0..rh {
        let src = ((rect.y as usize + row) * fw + rx) * channels;
        data.extend_from_slice(&frame.data()[src..src + rw * channels]);
    }

    Ok(Frame::new(
        data,
        rect.width,
        rect.height,
        frame.format(),
        frame.index(),
        frame.captured_at_ms(),
    ))
}
