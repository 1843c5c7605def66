//! Lineup command implementation

use std::fmt::Write;

use miette::{Result, WrapErr};
use serde::{Deserialize, Serialize};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ModuleDepsConfig;
use crate::error::GraphGeneratorError;
use crate::utils::string::pluralize;

/// JSON output structure for the modules reachable from one module
#[derive(Debug, Serialize, Deserialize)]
pub struct ModuleDepsJsonReport {
    pub module: String,
    pub dependencies: Vec<String>,
}

impl FromCommand for ModuleDepsConfig {
    fn from_command(command: Commands) -> Result<Self, GraphGeneratorError> {
        match command {
            Commands::Lineup {
                input,
                module,
                format,
            } => ModuleDepsConfig::builder()
                .with_manifest(input.manifest)
                .with_settings(input.settings)
                .with_module(module)
                .with_format(format)
                .build(),
            _ => Err(GraphGeneratorError::ConfigurationError {
                message: "Invalid command type for ModuleDepsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ModuleDepsConfig);

/// Execute the lineup command for listing module dependencies
pub fn execute_deps_command(command: Commands) -> Result<()> {
    let config = ModuleDepsConfig::from_command(command)
        .wrap_err("Failed to parse lineup command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::deps::DepsExecutor;
    DepsExecutor::execute(config)
}

/// Report generator for the modules reachable from one module
pub struct ModuleDepsReportGenerator<'a> {
    module: &'a str,
    dependencies: &'a [String],
}

impl<'a> ModuleDepsReportGenerator<'a> {
    pub fn new(module: &'a str, dependencies: &'a [String]) -> Self {
        Self {
            module,
            dependencies,
        }
    }

    pub fn generate_human_report(&self) -> Result<String, GraphGeneratorError> {
        let mut output = String::new();

        writeln!(output, "Module: {}", self.module)?;
        writeln!(
            output,
            "  {} {}:",
            self.dependencies.len(),
            pluralize("module", self.dependencies.len())
        )?;
        if self.dependencies.is_empty() {
            writeln!(output, "    (none)")?;
        }
        for dependency in self.dependencies {
            writeln!(output, "    - {dependency}")?;
        }

        Ok(output)
    }

    pub fn generate_json_report(&self) -> Result<String, GraphGeneratorError> {
        let report = ModuleDepsJsonReport {
            module: self.module.to_string(),
            dependencies: self.dependencies.to_vec(),
        };

        serde_json::to_string_pretty(&report).map_err(|e| GraphGeneratorError::GraphError {
            message: format!("Failed to serialize lineup report: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_report() {
        let dependencies = vec![":core".to_string(), ":lib".to_string()];
        let report = ModuleDepsReportGenerator::new(":app", &dependencies)
            .generate_human_report()
            .unwrap();

        assert_eq!(
            report,
            "Module: :app\n  2 modules:\n    - :core\n    - :lib\n"
        );
    }

    #[test]
    fn test_human_report_without_dependencies() {
        let report = ModuleDepsReportGenerator::new(":core", &[])
            .generate_human_report()
            .unwrap();

        assert!(report.contains("0 modules"));
        assert!(report.contains("(none)"));
    }

    #[test]
    fn test_json_report() {
        let dependencies = vec![":core".to_string()];
        let report = ModuleDepsReportGenerator::new(":app", &dependencies)
            .generate_json_report()
            .unwrap();

        let json: ModuleDepsJsonReport = serde_json::from_str(&report).unwrap();
        assert_eq!(json.module, ":app");
        assert_eq!(json.dependencies, dependencies);
    }
}
