//! # Configuration Module
//!
//! Configuration structures for the CLI commands. Each command has its own
//! config module with a builder implementing
//! [`ConfigBuilder`](crate::common::ConfigBuilder).
//!
//! ## Command Configurations
//!
//! - **GraphOptions**: Configuration for the `dependencies` and `modules`
//!   commands
//! - **ModuleDepsConfig**: Configuration for the `lineup` command
//!
//! ## Example
//!
//! ```
//! use dependency_graph_generator::common::ConfigBuilder;
//! use dependency_graph_generator::config::{GraphKind, GraphOptions};
//!
//! let options = GraphOptions::builder()
//!     .with_kind(GraphKind::Modules)
//!     .with_manifest("project.toml".into())
//!     .with_output_dir(Some("build/graphs".into()))
//!     .build()
//!     .unwrap();
//!
//! assert!(options.settings.is_none());
//! ```

pub mod deps;
pub mod graph;

pub use deps::ModuleDepsConfig;
pub use graph::{GraphKind, GraphOptions};
