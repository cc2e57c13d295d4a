//! Application layer
//!
//! CLI definitions and configuration management.

pub mod cli;
pub mod config;
