//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - start: Start the HTTP server
//! - estimate: Compute and print an ROI report
//! - test: Test configuration validity
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod start;
