pub mod color;
pub mod paint;
pub mod recorder;
pub mod traits;
