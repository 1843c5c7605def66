//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Module tree manifest (TOML, or JSON for files ending in .json)
    #[arg(long, value_name = "FILE", env = "DEPENDENCY_GRAPH_MANIFEST")]
    pub manifest: PathBuf,

    /// Settings file declaring the generators (one unfiltered generator if
    /// not specified)
    #[arg(long, value_name = "FILE", env = "DEPENDENCY_GRAPH_SETTINGS")]
    pub settings: Option<PathBuf>,
}

/// Output arguments for graph-producing commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Directory receiving one DOT file per generator (stdout if not
    /// specified)
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "DEPENDENCY_GRAPH_OUTPUT_DIR"
    )]
    pub output_dir: Option<PathBuf>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::GraphGeneratorError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(
        command: crate::cli::Commands,
    ) -> Result<Self, crate::error::GraphGeneratorError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::GraphGeneratorError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}
