use std::path::PathBuf;

/// Describes an inbound frame stream: dimensions, rate and provenance.
///
/// Still images are represented as single-frame streams with `fps = 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamInfo {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub source_path: Option<PathBuf>,
}
