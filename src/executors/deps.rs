//! Lineup command executor

use console::style;
use miette::{Result, WrapErr};
use tracing::info;

use crate::cli::LineupFormat;
use crate::commands::deps::ModuleDepsReportGenerator;
use crate::config::ModuleDepsConfig;
use crate::executors::CommandExecutor;
use crate::generator::settings::Settings;
use crate::graph::ModuleGraphBuilder;
use crate::manifest::load_manifest;

pub struct DepsExecutor;

impl CommandExecutor for DepsExecutor {
    type Config = ModuleDepsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Listing modules reachable from {}...\n",
            style("🔍").cyan(),
            style(&config.module).green()
        );

        let root = load_manifest(&config.manifest)?;
        let settings = Settings::load(config.settings.as_deref())
            .wrap_err("Failed to load generator settings")?;
        let generator = settings
            .module_generators()?
            .into_iter()
            .next()
            .unwrap_or_default();

        let dependencies = ModuleGraphBuilder::new(&generator)
            .reachable_from(&root, &config.module)
            .wrap_err_with(|| format!("Failed to list dependencies of '{}'", config.module))?;
        info!(
            module = %config.module,
            count = dependencies.len(),
            "Collected reachable modules"
        );

        let report_generator = ModuleDepsReportGenerator::new(&config.module, &dependencies);
        let report = match config.format {
            LineupFormat::Human => report_generator.generate_human_report(),
            LineupFormat::Json => report_generator.generate_json_report(),
        }
        .wrap_err("Failed to generate lineup report")?;

        print!("{report}");
        if config.format == LineupFormat::Json {
            println!();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ModuleGenerator;

    #[test]
    fn test_default_module_generator_used_without_settings() {
        let settings = Settings::load(None).unwrap();
        let generator = settings
            .module_generators()
            .unwrap()
            .into_iter()
            .next()
            .unwrap_or_else(ModuleGenerator::all);
        assert_eq!(generator.name(), "");
    }
}
