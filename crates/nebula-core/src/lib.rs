//! Nebula Core
//!
//! Shared building blocks for the Nebula galaxy client: logging bootstrap,
//! profiling hooks, geometry primitives and fast collections.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
