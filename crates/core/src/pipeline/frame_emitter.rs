use std::path::Path;

use crate::io::domain::frame_sink::FrameSink;
use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

/// Hands filtered frames to the output boundary with provenance intact.
///
/// The outbound frame carries the *source* frame's capture timestamp and
/// sequence index — never the time the filter finished — so downstream
/// stages that correlate streams on matching timestamps keep working.
pub struct FrameEmitter {
    sink: Box<dyn FrameSink>,
}

impl FrameEmitter {
    pub fn new(sink: Box<dyn FrameSink>) -> Self {
        Self { sink }
    }

    pub fn open(
        &mut self,
        path: &Path,
        info: &StreamInfo,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.sink.open(path, info)
    }

    /// Stamps `filtered` with `source`'s provenance and delivers it.
    pub fn emit(
        &mut self,
        mut filtered: Frame,
        source: &Frame,
    ) -> Result<(), Box<dyn std::error::Error>> {
        filtered.set_index(source.index());
        filtered.set_captured_at_ms(source.captured_at_ms());
        self.sink.deliver(&filtered)
    }

    pub fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.sink.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::PixelFormat;
    use std::sync::{Arc, Mutex};

    struct CapturingSink {
        delivered: Arc<Mutex<Vec<Frame>>>,
        closed: Arc<Mutex<bool>>,
    }

    impl CapturingSink {
        fn new() -> Self {
            Self {
                delivered: Arc::new(Mutex::new(Vec::new())),
                closed: Arc::new(Mutex::new(false)),
            }
        }
    }

    impl FrameSink for CapturingSink {
        fn open(
            &mut self,
            _path: &Path,
            _info: &StreamInfo,
        ) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }

        fn deliver(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.delivered.lock().unwrap().push(frame.clone());
            Ok(())
        }

        fn close(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            *self.closed.lock().unwrap() = true;
            Ok(())
        }
    }

    fn frame(index: usize, captured_at_ms: i64) -> Frame {
        Frame::new(vec![0u8; 12], 2, 2, PixelFormat::Rgb8, index, captured_at_ms)
    }

    #[test]
    fn test_emit_copies_source_timestamp_verbatim() {
        let sink = CapturingSink::new();
        let delivered = sink.delivered.clone();
        let mut emitter = FrameEmitter::new(Box::new(sink));

        let source = frame(7, 1708300000123);
        // The filter output lost the stamp (e.g. a cropped intermediate).
        let filtered = frame(0, 0);

        emitter.emit(filtered, &source).unwrap();

        let delivered = delivered.lock().unwrap();
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].captured_at_ms(), 1708300000123);
        assert_eq!(delivered[0].index(), 7);
    }

    #[test]
    fn test_emit_never_stamps_completion_time() {
        let sink = CapturingSink::new();
        let delivered = sink.delivered.clone();
        let mut emitter = FrameEmitter::new(Box::new(sink));

        // Source captured far in the past; the stamp must survive as-is.
        let source = frame(0, 1);
        emitter.emit(frame(0, 99999), &source).unwrap();

        assert_eq!(delivered.lock().unwrap()[0].captured_at_ms(), 1);
    }

    #[test]
    fn test_emit_preserves_pixel_data() {
        let sink = CapturingSink::new();
        let delivered = sink.delivered.clone();
        let mut emitter = FrameEmitter::new(Box::new(sink));

        let mut filtered = frame(0, 0);
        filtered.data_mut()[0] = 200;
        emitter.emit(filtered, &frame(1, 2)).unwrap();

        assert_eq!(delivered.lock().unwrap()[0].data()[0], 200);
    }

    #[test]
    fn test_close_reaches_sink() {
        let sink = CapturingSink::new();
        let closed = sink.closed.clone();
        let mut emitter = FrameEmitter::new(Box::new(sink));
        emitter.close().unwrap();
        assert!(*closed.lock().unwrap());
    }
}
