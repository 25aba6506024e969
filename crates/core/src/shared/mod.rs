pub mod frame;
pub mod rect;
pub mod stream_info;
