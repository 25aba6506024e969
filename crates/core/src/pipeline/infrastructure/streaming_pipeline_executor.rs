use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::filtering::domain::frame_processor::FrameProcessor;
use crate::io::domain::frame_source::FrameSource;
use crate::pipeline::frame_emitter::FrameEmitter;
use crate::pipeline::pipeline_executor::{PipelineConfig, PipelineExecutor};
use crate::shared::frame::Frame;
use crate::shared::stream_info::StreamInfo;

const DEFAULT_CHANNEL_CAPACITY: usize = 8;

type SendError = Box<dyn std::error::Error + Send + Sync>;

/// Executes the filter pipeline with a dedicated source-reader thread.
///
/// Layout: `source → [bounded channel] → main [snapshot/roi/filter/emit]`.
/// Frames are filtered and emitted strictly one at a time in arrival
/// order; the reader thread only overlaps ingest I/O with the per-frame
/// work. A frame with zero extent fails the run before it reaches the
/// filter.
pub struct StreamingPipelineExecutor {
    channel_capacity: usize,
}

impl StreamingPipelineExecutor {
    pub fn new() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}

impl Default for StreamingPipelineExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineExecutor for StreamingPipelineExecutor {
    fn execute(
        &self,
        source: Box<dyn FrameSource>,
        processor: Box<dyn FrameProcessor>,
        mut emitter: FrameEmitter,
        info: &StreamInfo,
        output_path: &Path,
        mut config: PipelineConfig,
    ) -> Result<(), Box<dyn std::error::Error>> {
        emitter.open(output_path, info)?;

        let (frame_tx, frame_rx) =
            crossbeam_channel::bounded::<Result<Frame, SendError>>(self.channel_capacity);
        let reader_handle = spawn_source_reader(source, frame_tx, config.cancelled.clone());

        let total_frames = info.total_frames;
        let mut frames_processed: usize = 0;
        let mut main_error: Option<Box<dyn std::error::Error>> = None;

        for frame_result in frame_rx {
            if config.cancelled.load(Ordering::Relaxed) {
                break;
            }

            let frame = match frame_result {
                Ok(frame) => frame,
                Err(e) => {
                    main_error = Some(e.to_string().into());
                    break;
                }
            };
            if let Err(e) = frame.validate() {
                main_error = Some(Box::new(e));
                break;
            }

            let started = Instant::now();
            let filtered = match processor.process(&frame) {
                Ok(filtered) => filtered,
                Err(e) => {
                    main_error = Some(e);
                    break;
                }
            };
            config
                .logger
                .timing("filter", started.elapsed().as_secs_f64() * 1000.0);

            if let Err(e) = emitter.emit(filtered, &frame) {
                main_error = Some(e);
                break;
            }

            frames_processed += 1;
            config.logger.progress(frames_processed, total_frames);
            if let Some(ref callback) = config.on_progress {
                if !callback(frames_processed, total_frames) {
                    main_error = Some("Cancelled".into());
                    break;
                }
            }
        }

        match reader_handle.join() {
            Ok(mut source) => source.close(),
            Err(_) => {
                if main_error.is_none() {
                    main_error = Some("Source thread panicked".into());
                }
            }
        }

        if let Err(e) = emitter.close() {
            if main_error.is_none() {
                main_error = Some(e);
            }
        }

        config.logger.summary();

        match main_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn spawn_source_reader(
    mut source: Box<dyn FrameSource>,
    frame_tx: crossbeam_channel::Sender<Result<Frame, SendError>>,
    cancelled: Arc<AtomicBool>,
) -> std::thread::JoinHandle<Box<dyn FrameSource>> {
    std::thread::spawn(move || {
        for frame_result in source.frames() {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            let mapped = frame_result.map_err(|e| -> SendError { e.to_string().into() });
            if frame_tx.send(mapped).is_err() {
                break;
            }
        }
        drop(frame_tx);
        source
    })
}
