use clap::{Parser, Subcommand};

use crate::common::{InputArgs, OutputArgs};

#[derive(Parser)]
#[command(
    name = "dependency-graph-generator",
    about = "Generate DOT dependency graphs for multi-module projects",
    long_about = "dependency-graph-generator reads a module tree manifest with the resolved \
                  dependency trees of each module and writes Graphviz DOT graphs: one graph of \
                  library dependencies and one graph of module-to-module dependencies per \
                  configured generator.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Graph the library dependencies of every module
    ///
    /// Builds one graph per dependency generator declared in the settings
    /// file. Each library appears once; repeated edges are collapsed.
    #[command(
        long_about = "Walk the resolved dependency trees of every module and render them as DOT. \
                      Each generator from the settings file filters modules, configurations and \
                      dependencies on its own and is written to its own file, named \
                      dependency-graph[-<name>].dot. Generators run in parallel."
    )]
    Dependencies {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Graph the dependencies between modules
    ///
    /// Builds one graph per module generator declared in the settings file.
    /// Modules nothing depends on are drawn as boxes on a shared rank;
    /// implementation dependencies are dotted.
    #[command(
        long_about = "Follow the module dependencies declared by each module's configurations and \
                      render them as DOT, colored by module type. Each module generator is \
                      written to its own file, named module-dependency-graph[-<name>].dot."
    )]
    Modules {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List every module reachable from a module
    #[command(
        long_about = "Print the sorted paths of all modules the given module depends on, directly \
                      or transitively, using the filters of the first module generator from the \
                      settings file."
    )]
    Lineup {
        #[command(flatten)]
        input: InputArgs,

        /// Path of the module to start from
        #[arg(
            long,
            value_name = "PATH",
            default_value = crate::core::ROOT_PATH,
            env = "DEPENDENCY_GRAPH_MODULE"
        )]
        module: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: LineupFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum LineupFormat {
    Human,
    Json,
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_dependencies() {
        let cli = Cli::try_parse_from([
            "dependency-graph-generator",
            "dependencies",
            "--manifest",
            "project.toml",
            "--output-dir",
            "out",
        ])
        .unwrap();

        match cli.command {
            Commands::Dependencies { input, output } => {
                assert_eq!(input.manifest, PathBuf::from("project.toml"));
                assert_eq!(output.output_dir, Some(PathBuf::from("out")));
            }
            _ => panic!("Expected dependencies command"),
        }
    }

    #[test]
    fn test_lineup_defaults_to_root() {
        let cli = Cli::try_parse_from([
            "dependency-graph-generator",
            "lineup",
            "--manifest",
            "project.toml",
        ])
        .unwrap();

        match cli.command {
            Commands::Lineup { module, format, .. } => {
                assert_eq!(module, ":");
                assert_eq!(format, LineupFormat::Human);
            }
            _ => panic!("Expected lineup command"),
        }
    }
}
