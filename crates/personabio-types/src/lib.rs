//! Shared domain types for PersonaBio.
//!
//! This crate contains the types used across the PersonaBio workspace:
//! interview phases, chat messages, operation outcomes, the dashboard
//! chapter outline, configuration, and the associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod interview;
