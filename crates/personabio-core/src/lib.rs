//! Interview logic for PersonaBio.
//!
//! This crate owns the interview state machine, the draft synthesis seam,
//! and the dashboard model. It depends only on `personabio-types` -- never
//! on `personabio-infra` or any IO crate.

pub mod dashboard;
pub mod interview;
