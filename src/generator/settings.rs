//! Declarative generators loaded from a TOML settings file
//!
//! ```toml
//! [[generators]]
//! name = "rx"
//! include = ["io.reactivex*:*"]
//! skip_children = ["org.jetbrains.kotlin:*"]
//! tint_by_group = true
//!
//! [generators.label]
//! label = "Rx dependencies"
//! location = "bottom"
//!
//! [[module_generators]]
//! exclude_modules = [":samples:*"]
//!
//! [[module_generators.highlight]]
//! from = ":app"
//! to = ":core*"
//! color = "red"
//! style = "bold"
//! ```

use std::fs;
use std::path::Path;

use glob::Pattern;
use miette::{NamedSource, Result, SourceSpan};
use serde::Deserialize;

use super::{
    Generator, ModuleGenerator, default_configuration_predicate, tint_dependency_by_group,
};
use crate::common::ConfigBuilder;
use crate::core::{Configuration, Module, ResolvedDependency};
use crate::dot::{Color, EdgeAttributes, GraphLabel, LabelJustification, LabelLocation, Style};
use crate::error::{GraphGeneratorError, TomlParseError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub generators: Vec<GeneratorSettings>,
    #[serde(default)]
    pub module_generators: Vec<ModuleGeneratorSettings>,
}

/// One library dependency graph
///
/// Dependency patterns match against `group:name`, module patterns against
/// module paths.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub name: String,
    /// Keep only matching dependencies; empty keeps everything
    #[serde(default)]
    pub include: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Show matching dependencies without their children
    #[serde(default)]
    pub skip_children: Vec<String>,
    /// Configuration names to walk; compile classpaths without tests otherwise
    pub configurations: Option<Vec<String>>,
    #[serde(default)]
    pub exclude_modules: Vec<String>,
    pub label: Option<LabelSettings>,
    #[serde(default)]
    pub tint_by_group: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleGeneratorSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub exclude_modules: Vec<String>,
    /// Configuration names whose module dependencies count; all otherwise
    pub configurations: Option<Vec<String>>,
    pub label: Option<LabelSettings>,
    #[serde(default)]
    pub highlight: Vec<HighlightSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelSettings {
    pub label: String,
    pub font_size: Option<u32>,
    pub height: Option<u32>,
    #[serde(default)]
    pub location: LabelLocation,
    #[serde(default)]
    pub justification: LabelJustification,
}

/// Edge styling for module links whose endpoints match `from` and `to`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HighlightSettings {
    pub from: String,
    pub to: String,
    pub color: Option<String>,
    pub style: Option<Style>,
}

impl Settings {
    /// Settings from `path`, or the defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::parse_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphGeneratorError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    /// Parse settings text, reporting syntax errors against `file`
    pub fn parse_str(content: &str, file: &str) -> Result<Self> {
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

    /// Dependency generators; a single unfiltered one when none are declared
    pub fn dependency_generators(&self) -> Result<Vec<Generator>> {
        if self.generators.is_empty() {
            return Ok(vec![GeneratorSettings::default().to_generator()?]);
        }
        self.generators
            .iter()
            .map(GeneratorSettings::to_generator)
            .collect()
    }

    /// Module generators; a single unfiltered one when none are declared
    pub fn module_generators(&self) -> Result<Vec<ModuleGenerator>> {
        if self.module_generators.is_empty() {
            return Ok(vec![ModuleGeneratorSettings::default().to_generator()?]);
        }
        self.module_generators
            .iter()
            .map(ModuleGeneratorSettings::to_generator)
            .collect()
    }
}

impl GeneratorSettings {
    pub fn to_generator(&self) -> Result<Generator> {
        let include = compile_patterns(&self.include)?;
        let exclude = compile_patterns(&self.exclude)?;
        let skip_children = compile_patterns(&self.skip_children)?;
        let exclude_modules = compile_patterns(&self.exclude_modules)?;
        let configurations = self
            .configurations
            .as_deref()
            .map(compile_patterns)
            .transpose()?;

        let mut builder = Generator::builder()
            .with_name(self.name.as_str())
            .with_include_module(move |module: &Module| {
                Ok(!matches_any(&exclude_modules, module.path()))
            })
            .with_include_configuration(move |configuration: &Configuration| {
                match &configurations {
                    Some(patterns) => Ok(matches_any(patterns, configuration.name())),
                    None => default_configuration_predicate(configuration),
                }
            })
            .with_include_dependency(move |dependency: &ResolvedDependency<'_>| {
                let key = dependency_key(dependency);
                Ok((include.is_empty() || matches_any(&include, &key))
                    && !matches_any(&exclude, &key))
            })
            .with_include_children(move |dependency: &ResolvedDependency<'_>| {
                Ok(!matches_any(&skip_children, &dependency_key(dependency)))
            })
            .with_label(self.label.as_ref().map(LabelSettings::to_label));

        if self.tint_by_group {
            builder = builder.with_dependency_mapper(tint_dependency_by_group);
        }

        Ok(builder.build()?)
    }
}

impl ModuleGeneratorSettings {
    pub fn to_generator(&self) -> Result<ModuleGenerator> {
        let exclude_modules = compile_patterns(&self.exclude_modules)?;
        let configurations = self
            .configurations
            .as_deref()
            .map(compile_patterns)
            .transpose()?;
        let highlights = self
            .highlight
            .iter()
            .map(HighlightSettings::compile)
            .collect::<Result<Vec<_>>>()?;

        let builder = ModuleGenerator::builder()
            .with_name(self.name.as_str())
            .with_include_module(move |module: &Module| {
                Ok(!matches_any(&exclude_modules, module.path()))
            })
            .with_include_configuration(move |configuration: &Configuration| {
                Ok(configurations
                    .as_ref()
                    .is_none_or(|patterns| matches_any(patterns, configuration.name())))
            })
            .with_edge_hook(move |from: &Module, to: &Module, _kind| {
                Ok(highlights
                    .iter()
                    .find(|highlight| highlight.applies_to(from, to))
                    .map(|highlight| highlight.attributes.clone()))
            })
            .with_label(self.label.as_ref().map(LabelSettings::to_label));

        Ok(builder.build()?)
    }
}

impl LabelSettings {
    pub fn to_label(&self) -> GraphLabel {
        let label = GraphLabel::new(self.label.as_str())
            .with_location(self.location)
            .with_justification(self.justification)
            .with_height(self.height);
        match self.font_size {
            Some(font_size) => label.with_font_size(Some(font_size)),
            None => label,
        }
    }
}

struct CompiledHighlight {
    from: Pattern,
    to: Pattern,
    attributes: EdgeAttributes,
}

impl CompiledHighlight {
    fn applies_to(&self, from: &Module, to: &Module) -> bool {
        self.from.matches(from.path()) && self.to.matches(to.path())
    }
}

impl HighlightSettings {
    fn compile(&self) -> Result<CompiledHighlight> {
        let mut attributes = EdgeAttributes::new();
        if let Some(color) = &self.color {
            attributes = attributes.with_color(color.parse::<Color>()?);
        }
        if let Some(style) = self.style {
            attributes = attributes.with_style(style);
        }

        Ok(CompiledHighlight {
            from: compile_pattern(&self.from)?,
            to: compile_pattern(&self.to)?,
            attributes,
        })
    }
}

fn dependency_key(dependency: &ResolvedDependency<'_>) -> String {
    format!("{}:{}", dependency.group(), dependency.name())
}

fn compile_pattern(pattern: &str) -> Result<Pattern, GraphGeneratorError> {
    Pattern::new(pattern).map_err(|e| GraphGeneratorError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Pattern>, GraphGeneratorError> {
    patterns.iter().map(|pattern| compile_pattern(pattern)).collect()
}

fn matches_any(patterns: &[Pattern], value: &str) -> bool {
    patterns.iter().any(|pattern| pattern.matches(value))
}
