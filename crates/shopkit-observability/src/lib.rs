//! Structured command logging for shopkit tools.
//!
//! This crate provides:
//! - `RunId` - Identifier correlating every log line of one invocation
//! - `StructuredLogger` - JSON or human-readable logging with run context

mod logging;
mod run;

pub use logging::*;
pub use run::*;
