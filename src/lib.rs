//! Tether - cloud auth import reconciler
//!
//! This library provides the core functionality for reconciling a
//! user-supplied identifier set for a pre-existing authentication backend
//! against live provider state, producing a single internally-consistent
//! resource descriptor or a classified error.

pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod provider;
pub mod registry;
