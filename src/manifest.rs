//! Module tree manifests
//!
//! A manifest describes a module tree together with the resolved dependency
//! trees of its configurations. TOML is the default format; files ending in
//! `.json` are read as JSON with the same structure.

use std::fs;
use std::path::Path;

use miette::{NamedSource, Result, SourceSpan, WrapErr};
use serde::Deserialize;

use crate::core::{Configuration, Coordinate, Module, ModuleBuilder, Resolution};
use crate::error::{GraphGeneratorError, TomlParseError};
use crate::identifier::Identifier;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleManifest {
    pub name: String,
    pub group: Option<String>,
    /// Explicit path; derived from the position in the tree otherwise
    pub path: Option<String>,
    /// Explicit node identifier, used verbatim
    pub id: Option<String>,
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(default)]
    pub configurations: Vec<ConfigurationManifest>,
    #[serde(default)]
    pub submodules: Vec<ModuleManifest>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationManifest {
    pub name: String,
    #[serde(default = "default_resolvable")]
    pub resolvable: bool,
    /// First-level dependency coordinates, in declaration order
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Paths of the modules this configuration depends on
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub components: Vec<ComponentManifest>,
}

/// Children of one resolved component
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentManifest {
    pub coordinate: String,
    #[serde(default)]
    pub children: Vec<String>,
}

fn default_resolvable() -> bool {
    true
}

impl ModuleManifest {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphGeneratorError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&content).map_err(|e| {
                GraphGeneratorError::ManifestJson {
                    path: path.to_path_buf(),
                    source: e,
                }
                .into()
            })
        } else {
            Self::parse_toml(&content, &path.display().to_string())
        }
    }

    pub fn parse_toml(content: &str, file: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            let span = e
                .span()
                .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

            GraphGeneratorError::TomlParseError(Box::new(TomlParseError {
                file: file.to_string(),
                source_code: NamedSource::new(file, content.to_string()),
                span,
                source: e,
            }))
            .into()
        })
    }

    /// Build the module tree, validating identifiers and coordinates
    pub fn into_module(self) -> Result<Module> {
        let root = self.name.clone();
        let builder = self
            .into_builder()
            .wrap_err_with(|| format!("Invalid manifest for module '{root}'"))?;
        Ok(builder.build()?)
    }

    fn into_builder(self) -> Result<ModuleBuilder> {
        let mut builder = Module::builder()
            .with_name(self.name.as_str())
            .with_markers(self.markers);

        if let Some(group) = self.group {
            builder = builder.with_group(group);
        }
        if let Some(path) = self.path {
            builder = builder.with_path(path);
        }
        if let Some(id) = self.id {
            builder = builder.with_identifier(Identifier::new(id)?);
        }

        for configuration in self.configurations {
            let name = configuration.name.clone();
            builder = builder.with_configuration(
                configuration
                    .into_configuration()
                    .wrap_err_with(|| format!("Invalid configuration '{name}' in '{}'", self.name))?,
            );
        }

        for submodule in self.submodules {
            builder = builder.with_submodule(submodule.into_builder()?);
        }

        Ok(builder)
    }
}

impl ConfigurationManifest {
    fn into_configuration(self) -> Result<Configuration> {
        let mut resolution = Resolution::new();

        for component in &self.components {
            let parent = resolution.component(Coordinate::parse(&component.coordinate)?);
            for child in &component.children {
                let child = resolution.component(Coordinate::parse(child)?);
                resolution.add_child(parent, child);
            }
        }

        for dependency in &self.dependencies {
            let id = resolution.component(Coordinate::parse(dependency)?);
            resolution.add_first_level(id);
        }

        Ok(Configuration::new(self.name)
            .with_resolvable(self.resolvable)
            .with_resolution(resolution)
            .with_module_dependencies(self.modules))
    }
}

/// Read the manifest at `path` into a module tree
pub fn load_manifest(path: &Path) -> Result<Module> {
    ModuleManifest::parse_file(path)
        .wrap_err_with(|| format!("Failed to load manifest '{}'", path.display()))?
        .into_module()
}
