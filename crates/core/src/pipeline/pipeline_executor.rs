use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::filtering::domain::frame_processor::FrameProcessor;
use crate::io::domain::frame_source::FrameSource;
use crate::pipeline::frame_emitter::FrameEmitter;
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::shared::stream_info::StreamInfo;

/// Configuration for a pipeline execution run.
///
/// `on_progress` may return `false` to stop the run between frames;
/// `cancelled` does the same from another thread. Neither interrupts a
/// frame that has already entered filtering.
pub struct PipelineConfig {
    pub on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    pub cancelled: Arc<AtomicBool>,
    pub logger: Box<dyn PipelineLogger>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            on_progress: None,
            cancelled: Arc::new(AtomicBool::new(false)),
            logger: Box::new(NullPipelineLogger),
        }
    }
}

/// Abstracts how the ingest → filter → emit pipeline is executed.
///
/// This is a port (application-layer interface); infrastructure provides
/// concrete implementations.
pub trait PipelineExecutor: Send {
    fn execute(
        &self,
        source: Box<dyn FrameSource>,
        processor: Box<dyn FrameProcessor>,
        emitter: FrameEmitter,
        info: &StreamInfo,
        output_path: &Path,
        config: PipelineConfig,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
