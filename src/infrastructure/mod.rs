//! Infrastructure layer - I/O at the edges
//!
//! This layer contains:
//! - Configuration loading (config)
//! - The JSON record database (storage)

pub mod config;
pub mod storage;

pub use config::Config;
