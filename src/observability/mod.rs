//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate; subsystems emit events,
//!   the embedding process picks the subscriber
//! - Warnings for skipped rules and transient failures, debug for pass
//!   progress

pub mod logging;

pub use logging::init_logging;
