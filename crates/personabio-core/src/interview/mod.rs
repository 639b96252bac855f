//! Interview flow: question sequencing, answer collection, and
//! threshold-triggered draft synthesis.
//!
//! `InterviewScript` holds the validated canned text, `InterviewSession`
//! drives the `collecting -> ready -> drafted` lifecycle, and
//! `DraftSynthesizer` is the seam where the fixed template could be
//! replaced by a generative backend.

pub mod script;
pub mod session;
pub mod synthesizer;
