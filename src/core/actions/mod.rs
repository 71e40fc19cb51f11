pub mod cancellation;
pub mod render;
