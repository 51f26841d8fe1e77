//! Shared functionality
//!
//! This crate supplies the support code used across the Cascadia crates:
//! source locations, error types and the timing instrumentation.

pub mod errors;
pub mod location;
pub mod timing;
pub mod types;
