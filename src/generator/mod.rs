//! # Generator Configuration
//!
//! A generator bundles the hooks that decide what ends up in one graph and how
//! it looks. [`Generator`] drives the library dependency graph, and
//! [`ModuleGenerator`] drives the module graph.
//!
//! Every hook is a shared closure so generators are `Send + Sync` and can be
//! handed to several builders running in parallel. Hooks must be
//! deterministic for identical input. A hook returning an error aborts the
//! build, and the error reaches the caller unchanged.
//!
//! ## Example
//!
//! ```
//! use dependency_graph_generator::common::ConfigBuilder;
//! use dependency_graph_generator::generator::{Generator, tint_dependency_by_group};
//!
//! # fn main() -> miette::Result<()> {
//! let generator = Generator::builder()
//!     .with_name("firebase")
//!     .with_include_dependency(|dependency| {
//!         Ok(dependency.group().starts_with("com.google.firebase"))
//!     })
//!     .with_dependency_mapper(tint_dependency_by_group)
//!     .build()?;
//!
//! assert_eq!(generator.output_file_name(), "dependency-graph-firebase.dot");
//! # Ok(())
//! # }
//! ```

mod dependency;
mod mappers;
mod module;
pub mod settings;

use std::sync::Arc;

pub use dependency::{Generator, GeneratorBuilder};
use miette::Result;
pub use mappers::{
    ModuleType, default_configuration_predicate, default_module_mapper, java_string_hash,
    tint_dependency_by_group,
};
pub use module::{ModuleGenerator, ModuleGeneratorBuilder};

use crate::core::{Configuration, DependencyContainer, Module, RelationshipKind, ResolvedDependency};
use crate::dot::{EdgeAttributes, NodeAttributes};
use crate::error::GraphGeneratorError;
use crate::graph::Graph;

pub type ModulePredicate = Arc<dyn Fn(&Module) -> Result<bool> + Send + Sync>;

pub type ConfigurationPredicate = Arc<dyn Fn(&Configuration) -> Result<bool> + Send + Sync>;

pub type DependencyPredicate = Arc<dyn Fn(&ResolvedDependency<'_>) -> Result<bool> + Send + Sync>;

/// Attribute override for a module node; `None` keeps the defaults
pub type ModuleMapper = Arc<dyn Fn(&Module) -> Result<Option<NodeAttributes>> + Send + Sync>;

/// Attribute override for a library node; `None` keeps the defaults
pub type DependencyMapper =
    Arc<dyn Fn(&ResolvedDependency<'_>) -> Result<Option<NodeAttributes>> + Send + Sync>;

/// Attribute override for a dependency-graph edge, given its parent and child
pub type DependencyEdgeHook = Arc<
    dyn Fn(&DependencyContainer<'_>, &ResolvedDependency<'_>) -> Result<Option<EdgeAttributes>>
        + Send
        + Sync,
>;

/// Attribute override for a module-graph edge
pub type ModuleEdgeHook = Arc<
    dyn Fn(&Module, &Module, RelationshipKind) -> Result<Option<EdgeAttributes>> + Send + Sync,
>;

/// Whole-graph mutation applied after construction
pub type GraphHook = Arc<dyn Fn(&mut Graph) -> Result<()> + Send + Sync>;

/// Generator names become part of file names
fn validate_name(name: &str) -> Result<(), GraphGeneratorError> {
    if name
        .chars()
        .any(|c| c.is_whitespace() || c == '/' || c == '\\')
    {
        return Err(GraphGeneratorError::ConfigurationError {
            message: format!(
                "Generator name '{name}' must not contain whitespace or path separators"
            ),
        });
    }
    Ok(())
}
