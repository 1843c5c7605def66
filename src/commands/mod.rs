//! Command implementations for the CLI
//!
//! - dependencies: library dependency graphs, one per generator
//! - modules: module dependency graphs, one per module generator
//! - lineup: modules reachable from one module

pub mod deps;
pub mod graph;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Dependencies { .. } | Commands::Modules { .. } => {
            graph::execute_graph_command(command)
        }
        Commands::Lineup { .. } => deps::execute_deps_command(command),
    }
}
