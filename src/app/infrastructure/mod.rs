//! Infrastructure layer - cross-cutting concerns.
//!
//! - Error types
//! - Logger setup

pub mod error;
pub mod logging;

pub use error::{AppError, Result};
pub use logging::init_logging;
