pub mod filter_frames_use_case;
pub mod frame_emitter;
pub mod infrastructure;
pub mod pipeline_executor;
pub mod pipeline_logger;
