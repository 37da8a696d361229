//! Application layer containing the engagement pipeline.
//!
//! This module defines the `EngagementEngine`, the entry point for evaluating
//! incoming messages, along with the pure pieces it orchestrates: the keyword
//! scorer, the entity extractor and the reply decision.

pub mod engine;
pub mod extractor;
pub mod reply;
pub mod scorer;
