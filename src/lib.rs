pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod section;

pub use config::CenterlineConfig;
pub use error::{BoxlineError, Result};
