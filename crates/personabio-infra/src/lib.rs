//! Infrastructure layer for PersonaBio.
//!
//! Resolves the data directory and loads `config.toml` from it. Interview
//! sessions themselves are never written to disk.

pub mod config;
pub mod paths;
