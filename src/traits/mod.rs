//! Core trait abstractions.
//!
//! [`FromConfig`] separates pool construction from the registry that
//! stores pools, so the registry never needs to know how a pool validates
//! its parameters.

mod from_config;

pub use from_config::FromConfig;
