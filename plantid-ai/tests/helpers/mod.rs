//! Test Helper Utilities
//!
//! Shared utilities for testing plantid-ai

#![allow(dead_code)]

pub mod log_capture;
pub mod mock_service;

// Re-export commonly used items (not every test binary uses every helper)
#[allow(unused_imports)]
pub use log_capture::{capture_logs, LogCapture};
#[allow(unused_imports)]
pub use mock_service::{plant_id_body, MockReply, MockService};
