//! neuropsy-cli library root.
//!
//! Command-line parsing, configuration and evaluation-file loading live here
//! so integration tests can exercise them without spawning the binary.

pub mod cli;
pub mod config;
pub mod input;
pub mod output;
