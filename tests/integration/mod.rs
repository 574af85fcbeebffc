//! Integration tests for the demo player
//!
//! These tests drive the public API the way the binary does: the app
//! rendering into a test backend, the star fetch against a local server,
//! and the CLI itself.

#[path = "../common/mod.rs"]
pub mod common;

pub mod cli;
pub mod playback_flow;
pub mod star_count;
