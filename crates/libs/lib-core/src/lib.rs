//! # Core Library
//!
//! Configuration, error handling and the Actions wire DTOs shared by every crate.

pub mod config;
pub mod error;
pub mod dto;

// Re-export commonly used types
pub use config::{Config, Network, ACTION_VERSION};
pub use error::{AppError, Result};
