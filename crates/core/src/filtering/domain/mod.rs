pub mod frame_processor;
pub mod roi_extractor;
pub mod roi_provider;
