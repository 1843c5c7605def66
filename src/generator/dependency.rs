use std::fmt;
use std::sync::Arc;

use miette::Result;

use super::{
    ConfigurationPredicate, DependencyEdgeHook, DependencyMapper, DependencyPredicate, GraphHook,
    ModuleMapper, ModulePredicate, default_configuration_predicate, validate_name,
};
use crate::common::ConfigBuilder;
use crate::constants::output::{DEPENDENCY_GRAPH_STEM, DOT_EXTENSION};
use crate::core::{Configuration, DependencyContainer, Module, ResolvedDependency};
use crate::dot::{EdgeAttributes, GraphLabel, NodeAttributes};
use crate::error::GraphGeneratorError;
use crate::graph::Graph;
use crate::utils::string::{non_empty_prepend, to_hyphen_case};

/// Hooks driving one library dependency graph
#[derive(Clone)]
pub struct Generator {
    name: String,
    include_module: ModulePredicate,
    include_configuration: ConfigurationPredicate,
    include_dependency: DependencyPredicate,
    include_children: DependencyPredicate,
    module_mapper: ModuleMapper,
    dependency_mapper: DependencyMapper,
    edge_hook: DependencyEdgeHook,
    graph_hook: GraphHook,
    label: Option<GraphLabel>,
}

impl Generator {
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Everything on the non-test compile classpaths, formatted as is
    pub fn all() -> Self {
        GeneratorBuilder::new().into_generator()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> Option<&GraphLabel> {
        self.label.as_ref()
    }

    /// `dependency-graph`, followed by the hyphen-cased name when set
    pub fn output_file_stem(&self) -> String {
        format!(
            "{DEPENDENCY_GRAPH_STEM}{}",
            non_empty_prepend(&to_hyphen_case(&self.name), "-")
        )
    }

    pub fn output_file_name(&self) -> String {
        format!("{}.{DOT_EXTENSION}", self.output_file_stem())
    }

    pub fn include_module(&self, module: &Module) -> Result<bool> {
        (self.include_module)(module)
    }

    pub fn include_configuration(&self, configuration: &Configuration) -> Result<bool> {
        (self.include_configuration)(configuration)
    }

    pub fn include_dependency(&self, dependency: &ResolvedDependency<'_>) -> Result<bool> {
        (self.include_dependency)(dependency)
    }

    pub fn include_children(&self, dependency: &ResolvedDependency<'_>) -> Result<bool> {
        (self.include_children)(dependency)
    }

    pub fn map_module(&self, module: &Module) -> Result<Option<NodeAttributes>> {
        (self.module_mapper)(module)
    }

    pub fn map_dependency(&self, dependency: &ResolvedDependency<'_>) -> Result<Option<NodeAttributes>> {
        (self.dependency_mapper)(dependency)
    }

    pub fn map_edge(
        &self,
        parent: &DependencyContainer<'_>,
        dependency: &ResolvedDependency<'_>,
    ) -> Result<Option<EdgeAttributes>> {
        (self.edge_hook)(parent, dependency)
    }

    pub fn apply_graph_hook(&self, graph: &mut Graph) -> Result<()> {
        (self.graph_hook)(graph)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub struct GeneratorBuilder {
    name: String,
    include_module: ModulePredicate,
    include_configuration: ConfigurationPredicate,
    include_dependency: DependencyPredicate,
    include_children: DependencyPredicate,
    module_mapper: ModuleMapper,
    dependency_mapper: DependencyMapper,
    edge_hook: DependencyEdgeHook,
    graph_hook: GraphHook,
    label: Option<GraphLabel>,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            include_module: Arc::new(|_| Ok(true)),
            include_configuration: Arc::new(default_configuration_predicate),
            include_dependency: Arc::new(|_| Ok(true)),
            include_children: Arc::new(|_| Ok(true)),
            module_mapper: Arc::new(|_| Ok(None)),
            dependency_mapper: Arc::new(|_| Ok(None)),
            edge_hook: Arc::new(|_, _| Ok(None)),
            graph_hook: Arc::new(|_| Ok(())),
            label: None,
        }
    }

    /// lowerCamelCase name, reused for the output file name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_include_module<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Module) -> Result<bool> + Send + Sync + 'static,
    {
        self.include_module = Arc::new(predicate);
        self
    }

    pub fn with_include_configuration<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Configuration) -> Result<bool> + Send + Sync + 'static,
    {
        self.include_configuration = Arc::new(predicate);
        self
    }

    pub fn with_include_dependency<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ResolvedDependency<'_>) -> Result<bool> + Send + Sync + 'static,
    {
        self.include_dependency = Arc::new(predicate);
        self
    }

    pub fn with_include_children<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&ResolvedDependency<'_>) -> Result<bool> + Send + Sync + 'static,
    {
        self.include_children = Arc::new(predicate);
        self
    }

    pub fn with_module_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Module) -> Result<Option<NodeAttributes>> + Send + Sync + 'static,
    {
        self.module_mapper = Arc::new(mapper);
        self
    }

    pub fn with_dependency_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&ResolvedDependency<'_>) -> Result<Option<NodeAttributes>> + Send + Sync + 'static,
    {
        self.dependency_mapper = Arc::new(mapper);
        self
    }

    pub fn with_edge_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&DependencyContainer<'_>, &ResolvedDependency<'_>) -> Result<Option<EdgeAttributes>>
            + Send
            + Sync
            + 'static,
    {
        self.edge_hook = Arc::new(hook);
        self
    }

    pub fn with_graph_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Graph) -> Result<()> + Send + Sync + 'static,
    {
        self.graph_hook = Arc::new(hook);
        self
    }

    pub fn with_label(mut self, label: Option<GraphLabel>) -> Self {
        self.label = label;
        self
    }

    fn into_generator(self) -> Generator {
        Generator {
            name: self.name,
            include_module: self.include_module,
            include_configuration: self.include_configuration,
            include_dependency: self.include_dependency,
            include_children: self.include_children,
            module_mapper: self.module_mapper,
            dependency_mapper: self.dependency_mapper,
            edge_hook: self.edge_hook,
            graph_hook: self.graph_hook,
            label: self.label,
        }
    }
}

impl ConfigBuilder for GeneratorBuilder {
    type Config = Generator;

    fn build(self) -> Result<Self::Config, GraphGeneratorError> {
        validate_name(&self.name)?;
        Ok(self.into_generator())
    }
}
