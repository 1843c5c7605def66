//! Core type definitions
//!
//! The build description the graph builders consume: a tree of modules, each
//! with configurations that carry a resolved dependency tree and the paths of
//! the sibling modules they depend on.

use std::fmt;
use std::str::FromStr;

use miette::Diagnostic;
use thiserror::Error;

use super::resolution::{Resolution, ResolvedDependency};
use crate::error::GraphGeneratorError;
use crate::identifier::Identifier;

/// Path of the root module
pub const ROOT_PATH: &str = ":";

/// `group:name[:version]` coordinate of a library
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group: String,
    pub name: String,
    pub version: Option<String>,
}

impl Coordinate {
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn parse(coordinate: &str) -> Result<Self, GraphGeneratorError> {
        let invalid = || GraphGeneratorError::InvalidCoordinate {
            coordinate: coordinate.to_string(),
        };

        let parts: Vec<&str> = coordinate.trim().split(':').collect();
        match parts.as_slice() {
            [group, name] if !group.is_empty() && !name.is_empty() => {
                Ok(Self::new(*group, *name))
            }
            [group, name, version]
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group, *name).with_version(*version))
            }
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(version) = &self.version {
            write!(f, ":{version}")?;
        }
        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = GraphGeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Strength of a module-to-module dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationshipKind {
    /// Exposed to consumers of the depending module
    Api,
    /// Internal to the depending module
    Implementation,
}

impl RelationshipKind {
    pub fn from_configuration_name(name: &str) -> Self {
        if name.to_lowercase().ends_with("implementation") {
            RelationshipKind::Implementation
        } else {
            RelationshipKind::Api
        }
    }
}

/// A named bucket of dependencies on a module
#[derive(Debug, Clone)]
pub struct Configuration {
    name: String,
    resolvable: bool,
    resolution: Resolution,
    module_dependencies: Vec<String>,
}

impl Configuration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resolvable: true,
            resolution: Resolution::new(),
            module_dependencies: Vec::new(),
        }
    }

    pub fn with_resolvable(mut self, resolvable: bool) -> Self {
        self.resolvable = resolvable;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    pub fn with_module_dependency(mut self, path: impl Into<String>) -> Self {
        self.module_dependencies.push(path.into());
        self
    }

    pub fn with_module_dependencies<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.module_dependencies
            .extend(paths.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_resolvable(&self) -> bool {
        self.resolvable
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    pub fn module_dependencies(&self) -> &[String] {
        &self.module_dependencies
    }

    pub fn relationship_kind(&self) -> RelationshipKind {
        RelationshipKind::from_configuration_name(&self.name)
    }
}

/// A module of the build, possibly with nested submodules
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    group: String,
    path: String,
    identifier: Option<Identifier>,
    markers: Vec<String>,
    submodules: Vec<Module>,
    configurations: Vec<Configuration>,
}

impl Module {
    pub fn builder() -> ModuleBuilder {
        ModuleBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Explicit identifier, when one was supplied
    pub fn identifier(&self) -> Option<&Identifier> {
        self.identifier.as_ref()
    }

    /// Type markers, such as applied plugin ids
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    pub fn submodules(&self) -> &[Module] {
        &self.submodules
    }

    pub fn configurations(&self) -> &[Configuration] {
        &self.configurations
    }

    pub fn has_any_marker(&self, markers: &[&str]) -> bool {
        self.markers
            .iter()
            .any(|marker| markers.contains(&marker.as_str()))
    }

    /// Every nested module in pre-order, excluding `self`
    pub fn descendants(&self) -> Vec<&Module> {
        let mut result = Vec::new();
        let mut stack: Vec<&Module> = self.submodules.iter().rev().collect();
        while let Some(module) = stack.pop() {
            result.push(module);
            stack.extend(module.submodules.iter().rev());
        }
        result
    }

    /// `self` followed by [`Module::descendants`]
    pub fn all_modules(&self) -> Vec<&Module> {
        let mut result = vec![self];
        result.extend(self.descendants());
        result
    }

    pub fn find_by_path(&self, path: &str) -> Option<&Module> {
        self.all_modules()
            .into_iter()
            .find(|module| module.path == path)
    }

    pub fn depends_on_other_modules(&self) -> bool {
        self.configurations
            .iter()
            .any(|configuration| !configuration.module_dependencies.is_empty())
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum ModuleBuilderError {
    #[error("Module name is required")]
    #[diagnostic(
        code(dependency_graph::core::missing_module_name),
        help("Provide a name for the module using with_name()")
    )]
    MissingName,
}

#[derive(Default)]
pub struct ModuleBuilder {
    name: Option<String>,
    group: Option<String>,
    path: Option<String>,
    identifier: Option<Identifier>,
    markers: Vec<String>,
    submodules: Vec<ModuleBuilder>,
    configurations: Vec<Configuration>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Override the `:`-joined path derived from the module's position
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.markers.push(marker.into());
        self
    }

    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers.extend(markers.into_iter().map(Into::into));
        self
    }

    pub fn with_submodule(mut self, submodule: ModuleBuilder) -> Self {
        self.submodules.push(submodule);
        self
    }

    pub fn with_configuration(mut self, configuration: Configuration) -> Self {
        self.configurations.push(configuration);
        self
    }

    /// Build the module tree; a module without an explicit path is the root
    pub fn build(self) -> Result<Module, ModuleBuilderError> {
        self.build_under(None)
    }

    fn build_under(self, parent_path: Option<&str>) -> Result<Module, ModuleBuilderError> {
        let name = self.name.ok_or(ModuleBuilderError::MissingName)?;
        let path = match (self.path, parent_path) {
            (Some(path), _) => path,
            (None, None) => ROOT_PATH.to_string(),
            (None, Some(ROOT_PATH)) => format!(":{name}"),
            (None, Some(parent)) => format!("{parent}:{name}"),
        };

        let submodules = self
            .submodules
            .into_iter()
            .map(|submodule| submodule.build_under(Some(&path)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Module {
            name,
            group: self.group.unwrap_or_default(),
            path,
            identifier: self.identifier,
            markers: self.markers,
            submodules,
            configurations: self.configurations,
        })
    }
}

/// The parent side of a dependency edge
#[derive(Debug, Clone, Copy)]
pub enum DependencyContainer<'a> {
    Module(&'a Module),
    Dependency(ResolvedDependency<'a>),
}

impl<'a> DependencyContainer<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            DependencyContainer::Module(module) => module.name(),
            DependencyContainer::Dependency(dependency) => dependency.name(),
        }
    }

    pub fn group(&self) -> &'a str {
        match self {
            DependencyContainer::Module(module) => module.group(),
            DependencyContainer::Dependency(dependency) => dependency.group(),
        }
    }

    pub fn as_module(&self) -> Option<&'a Module> {
        match self {
            DependencyContainer::Module(module) => Some(module),
            DependencyContainer::Dependency(_) => None,
        }
    }
}
