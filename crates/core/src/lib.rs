//! Runtime-tunable HSV threshold filtering for camera frame pipelines.
//!
//! Frames enter through an [`io::domain::frame_source::FrameSource`], pass
//! through the [`filtering::infrastructure::hsv_threshold_filter::HsvThresholdFilter`]
//! (optionally restricted to a region of interest), and leave through the
//! [`pipeline::frame_emitter::FrameEmitter`] with their capture timestamp
//! intact. Threshold bounds live in a [`config::store::ConfigStore`] and can
//! be swapped atomically while frames are in flight.

/// Threshold model and the live configuration store.
pub mod config;

/// Pixel classification: domain interfaces and the HSV filter.
pub mod filtering;

/// Frame source/sink ports and file-backed adapters.
pub mod io;

/// Pipeline orchestration: emitter, executor, use case, logging.
pub mod pipeline;

/// Frame, rectangle and stream metadata types shared across layers.
pub mod shared;
