//! # Dependency Graph Generator
//!
//! Generates Graphviz DOT graphs for multi-module projects: one graph of the
//! resolved library dependencies and one graph of module-to-module
//! dependencies, each shaped by a generator of filtering and styling hooks.
//!
//! ## Main Components
//!
//! - **Core**: the module tree and the resolved dependency trees of its
//!   configurations
//! - **Generator**: predicates, attribute mappers and hooks driving one graph
//! - **Graph**: the graph builders, the attributed graph model and the DOT
//!   renderer
//! - **Manifest**: reading module trees from TOML or JSON files
//!
//! ## Usage
//!
//! ### Example: A Library Dependency Graph
//!
//! ```
//! use dependency_graph_generator::core::{Configuration, Coordinate, Module, Resolution};
//! use dependency_graph_generator::generator::Generator;
//! use dependency_graph_generator::graph::{DependencyGraphBuilder, GraphRenderer};
//!
//! # fn main() -> miette::Result<()> {
//! // rxjava depends on reactive-streams; both reach the app module
//! let mut resolution = Resolution::new();
//! let rxjava = resolution.component(Coordinate::new("io.reactivex.rxjava2", "rxjava"));
//! let streams = resolution.component(Coordinate::new("org.reactivestreams", "reactive-streams"));
//! resolution.add_child(rxjava, streams);
//! resolution.add_first_level(rxjava);
//!
//! let app = Module::builder()
//!     .with_name("app")
//!     .with_configuration(Configuration::new("compileClasspath").with_resolution(resolution))
//!     .build()?;
//!
//! let graph = DependencyGraphBuilder::new(&Generator::all()).build(&app)?;
//! assert_eq!(graph.node_count(), 3);
//! assert_eq!(graph.edge_count(), 2);
//!
//! let dot = GraphRenderer::to_dot(&graph)?;
//! assert!(dot.contains(r#""ioreactivexrxjava2rxjava" -> "orgreactivestreamsreactivestreams";"#));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: A Module Graph
//!
//! ```
//! use dependency_graph_generator::core::{Configuration, Module};
//! use dependency_graph_generator::generator::ModuleGenerator;
//! use dependency_graph_generator::graph::{GraphRenderer, ModuleGraphBuilder};
//!
//! # fn main() -> miette::Result<()> {
//! let project = Module::builder()
//!     .with_name("project")
//!     .with_submodule(
//!         Module::builder()
//!             .with_name("app")
//!             .with_configuration(Configuration::new("implementation").with_module_dependency(":core")),
//!     )
//!     .with_submodule(Module::builder().with_name("core"))
//!     .build()?;
//!
//! let graph = ModuleGraphBuilder::new(&ModuleGenerator::all()).build(&project)?;
//! let dot = GraphRenderer::to_dot(&graph)?;
//!
//! // implementation dependencies are dotted
//! assert!(dot.contains(r#"":app" -> ":core" [style="dotted"];"#));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Generators From a Settings File
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dependency_graph_generator::generator::settings::Settings;
//! use dependency_graph_generator::graph::{DependencyGraphBuilder, GraphRenderer};
//! use dependency_graph_generator::manifest::load_manifest;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let root = load_manifest(Path::new("project.toml"))?;
//! let settings = Settings::parse_file(Path::new("graphs.toml"))?;
//!
//! for generator in settings.dependency_generators()? {
//!     let graph = DependencyGraphBuilder::new(&generator).build(&root)?;
//!     std::fs::write(generator.output_file_name(), GraphRenderer::to_dot(&graph)?)
//!         .into_diagnostic()?;
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod dot;
pub mod error;
pub mod executors;
pub mod generator;
pub mod graph;
pub mod identifier;
pub mod manifest;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    execute_command(cli.command)
}
