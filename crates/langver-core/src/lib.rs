//! # langver-core
//!
//! Errors, configuration, tracing setup, shared constants, and collection
//! types for the langver release detection engine.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;
