// Re-export from the core module
pub use crate::core::error::{Error, Result};
