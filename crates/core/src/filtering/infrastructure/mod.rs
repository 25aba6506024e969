pub mod color;
pub mod fixed_roi_provider;
pub mod hsv_threshold_filter;
