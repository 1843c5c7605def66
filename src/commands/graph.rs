//! Dependencies and modules command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{GraphKind, GraphOptions};
use crate::error::GraphGeneratorError;

impl FromCommand for GraphOptions {
    fn from_command(command: Commands) -> Result<Self, GraphGeneratorError> {
        let (kind, input, output) = match command {
            Commands::Dependencies { input, output } => (GraphKind::Dependencies, input, output),
            Commands::Modules { input, output } => (GraphKind::Modules, input, output),
            _ => {
                return Err(GraphGeneratorError::ConfigurationError {
                    message: "Invalid command type for GraphOptions".to_string(),
                });
            }
        };

        GraphOptions::builder()
            .with_kind(kind)
            .with_manifest(input.manifest)
            .with_settings(input.settings)
            .with_output_dir(output.output_dir)
            .build()
    }
}

crate::impl_try_from_command!(GraphOptions);

/// Execute the dependencies or modules command
pub fn execute_graph_command(command: Commands) -> Result<()> {
    let config = GraphOptions::from_command(command)
        .wrap_err("Failed to parse graph command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::graph::GraphExecutor;
    GraphExecutor::execute(config)
}
