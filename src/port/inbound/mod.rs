//! Inbound (driving) ports.
//!
//! # Modules
//!
//! - [`recommendation`]: Candidate matchers blended into recommendations

pub mod recommendation;
