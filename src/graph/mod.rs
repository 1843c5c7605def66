//! # Graph Construction and Rendering Module
//!
//! This module turns module trees into attributed graphs and serializes them
//! as DOT.
//!
//! ## Components
//!
//! ### Graph Building
//! - **DependencyGraphBuilder**: walks resolved library dependency trees from
//!   the root modules, deduplicating repeated edges
//! - **ModuleGraphBuilder**: connects modules through their declared module
//!   dependencies, marking leaf modules and relationship kinds
//! - **Graph**: the attributed graph both builders produce
//!
//! ### Graph Rendering
//! - **GraphRenderer**: deterministic DOT output
//!
//! ## Example
//!
//! ```
//! use dependency_graph_generator::core::{Configuration, Coordinate, Module, Resolution};
//! use dependency_graph_generator::generator::Generator;
//! use dependency_graph_generator::graph::{DependencyGraphBuilder, GraphRenderer};
//!
//! # fn main() -> miette::Result<()> {
//! let mut resolution = Resolution::new();
//! let annotations = resolution.component(Coordinate::new("org.jetbrains", "annotations"));
//! resolution.add_first_level(annotations);
//!
//! let module = Module::builder()
//!     .with_name("single")
//!     .with_configuration(Configuration::new("compileClasspath").with_resolution(resolution))
//!     .build()?;
//!
//! let graph = DependencyGraphBuilder::new(&Generator::all()).build(&module)?;
//! let dot = GraphRenderer::to_dot(&graph)?;
//!
//! assert!(dot.contains(r#""single" -> "orgjetbrainsannotations";"#));
//! assert!(dot.contains(r#"label="jetbrains-annotations""#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod display_name;
mod module_builder;
mod renderer;
mod types;

pub use builder::{DependencyGraphBuilder, dependency_identifier, module_identifier};
pub use display_name::display_name;
pub use module_builder::ModuleGraphBuilder;
pub use renderer::GraphRenderer;
pub use types::{Graph, GraphEdge, GraphNode};
