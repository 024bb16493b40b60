//! Command-line front end for report comparison and consistency checks
//!
//! Reads JSON inputs, runs the pipeline and returns serializable results;
//! the binary only parses arguments and prints.

pub mod commands;
pub mod config;

pub use config::{CompareConfig, Overrides};
