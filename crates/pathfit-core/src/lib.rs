//! pathfit-core — Question bank, assessment session, and scoring engine.
//!
//! This crate defines the fundamental data model, the response store, and the
//! deterministic scoring logic that the entire pathfit system builds on.

pub mod bank;
pub mod feedback;
pub mod model;
pub mod parser;
pub mod report;
pub mod results;
pub mod scoring;
pub mod session;
