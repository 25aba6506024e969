use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::filtering::domain::frame_processor::FrameProcessor;
use crate::io::domain::frame_source::FrameSource;
use crate::pipeline::frame_emitter::FrameEmitter;
use crate::pipeline::pipeline_executor::{PipelineConfig, PipelineExecutor};
use crate::pipeline::pipeline_logger::{NullPipelineLogger, PipelineLogger};
use crate::shared::stream_info::StreamInfo;

/// Orchestrates one filter pipeline run.
///
/// Wires the source, processor and emitter together and delegates
/// execution to a [`PipelineExecutor`]. Single-use: `execute` consumes the
/// owned components, so calling it twice will fail.
pub struct FilterFramesUseCase {
    source: Option<Box<dyn FrameSource>>,
    processor: Option<Box<dyn FrameProcessor>>,
    emitter: Option<FrameEmitter>,
    executor: Box<dyn PipelineExecutor>,
    logger: Option<Box<dyn PipelineLogger>>,
    on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
    cancelled: Arc<AtomicBool>,
}

impl FilterFramesUseCase {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Box<dyn FrameSource>,
        processor: Box<dyn FrameProcessor>,
        emitter: FrameEmitter,
        executor: Box<dyn PipelineExecutor>,
        logger: Option<Box<dyn PipelineLogger>>,
        on_progress: Option<Box<dyn Fn(usize, usize) -> bool + Send>>,
        cancelled: Option<Arc<AtomicBool>>,
    ) -> Self {
        Self {
            source: Some(source),
            processor: Some(processor),
            emitter: Some(emitter),
            executor,
            logger,
            on_progress,
            cancelled: cancelled.unwrap_or_else(|| Arc::new(AtomicBool::new(false))),
        }
    }

    pub fn execute(
        &mut self,
        info: &StreamInfo,
        output_path: &Path,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let config = PipelineConfig {
            on_progress: self.on_progress.take(),
            cancelled: self.cancelled.clone(),
            logger: self
                .logger
                .take()
                .unwrap_or_else(|| Box::new(NullPipelineLogger)),
        };

        self.executor.execute(
            self.source.take().ok_or("Pipeline already executed")?,
            self.processor.take().ok_or("Pipeline already executed")?,
            self.emitter.take().ok_or("Pipeline already executed")?,
            info,
            output_path,
            config,
        )
    }
}
