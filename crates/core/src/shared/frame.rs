use ndarray::{ArrayView3, ArrayViewMut3};
use thiserror::Error;

/// Channel order of a frame's pixel buffer.
///
/// Cameras and image decoders disagree on channel order; the tag travels
/// with the frame so classification and encoding read the right bytes.
/// Reordering happens at I/O boundaries only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFormat {
    Rgb8,
    Bgr8,
}

impl PixelFormat {
    pub fn channels(self) -> u8 {
        3
    }
}

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("frame {index} has zero extent ({width}x{height})")]
    ZeroExtent { index: usize, width: u32, height: u32 },
}

/// A single camera frame: contiguous pixel bytes in row-major order plus
/// capture metadata.
///
/// The capture timestamp travels with the frame so downstream stages can
/// correlate filter output with other sensor streams. Processing stages
/// produce derived frames; an input frame is never mutated in place.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
    index: usize,
    captured_at_ms: i64,
}

impl Frame {
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        format: PixelFormat,
        index: usize,
        captured_at_ms: i64,
    ) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (format.channels() as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            format,
            index,
            captured_at_ms,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.format.channels()
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn captured_at_ms(&self) -> i64 {
        self.captured_at_ms
    }

    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn set_captured_at_ms(&mut self, captured_at_ms: i64) {
        self.captured_at_ms = captured_at_ms;
    }

    /// Rejects frames a camera boundary should never have produced.
    pub fn validate(&self) -> Result<(), FrameError> {
        if self.width == 0 || self.height == 0 {
            return Err(FrameError::ZeroExtent {
                index: self.index,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.format.channels() as usize,
        )
    }
}
