//! # PlantID Common Library
//!
//! Shared code for the plant identification crates including:
//! - Error types
//! - TOML bootstrap configuration loading
//! - Configuration file discovery

pub mod config;
pub mod error;

pub use error::{Error, Result};
