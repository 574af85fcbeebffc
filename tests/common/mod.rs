//! Shared test utilities for the demo player
//!
//! - Script fixtures and app construction
//! - A local fake of the GitHub repository endpoint
//! - TUI terminal testing helpers

pub mod fake_github;
pub mod terminal;
