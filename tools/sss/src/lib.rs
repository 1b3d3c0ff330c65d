//! Threshold secret sharing from the command line.

pub mod args;
pub mod config;
pub mod output;
pub mod runner;
