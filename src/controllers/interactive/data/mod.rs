pub mod frame_data;
pub mod render_failure;
pub mod render_request;
