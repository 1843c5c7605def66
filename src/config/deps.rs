//! Lineup command configuration

use std::path::PathBuf;

use crate::cli::LineupFormat;
use crate::common::ConfigBuilder;
use crate::core::ROOT_PATH;
use crate::error::GraphGeneratorError;

#[derive(Debug, Clone)]
pub struct ModuleDepsConfig {
    pub manifest: PathBuf,
    pub settings: Option<PathBuf>,
    pub module: String,
    pub format: LineupFormat,
}

impl ModuleDepsConfig {
    pub fn builder() -> ModuleDepsConfigBuilder {
        ModuleDepsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ModuleDepsConfigBuilder {
    manifest: Option<PathBuf>,
    settings: Option<PathBuf>,
    module: Option<String>,
    format: Option<LineupFormat>,
}

impl ModuleDepsConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_settings(mut self, settings: Option<PathBuf>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.module = Some(module.into());
        self
    }

    pub fn with_format(mut self, format: LineupFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl ConfigBuilder for ModuleDepsConfigBuilder {
    type Config = ModuleDepsConfig;

    fn build(self) -> Result<Self::Config, GraphGeneratorError> {
        let module = self.module.unwrap_or_else(|| ROOT_PATH.to_string());
        if !module.starts_with(ROOT_PATH) {
            return Err(GraphGeneratorError::ConfigurationError {
                message: format!("Module path '{module}' must start with '{ROOT_PATH}'"),
            });
        }

        Ok(ModuleDepsConfig {
            manifest: self
                .manifest
                .ok_or_else(|| GraphGeneratorError::ConfigurationError {
                    message: "Missing required field: manifest".to_string(),
                })?,
            settings: self.settings,
            module,
            format: self.format.unwrap_or(LineupFormat::Human),
        })
    }
}
