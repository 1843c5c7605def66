//! Core data types and structures
//!
//! The module tree and the resolved dependency data the graph builders walk.

pub mod resolution;
pub mod types;

pub use resolution::{ComponentId, Resolution, ResolvedDependency};
pub use types::*;
