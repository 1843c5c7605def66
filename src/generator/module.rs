use std::fmt;
use std::sync::Arc;

use miette::Result;

use super::{
    ConfigurationPredicate, GraphHook, ModuleEdgeHook, ModuleMapper, ModulePredicate,
    default_module_mapper, validate_name,
};
use crate::common::ConfigBuilder;
use crate::constants::output::{DOT_EXTENSION, MODULE_GRAPH_STEM};
use crate::core::{Configuration, Module, RelationshipKind};
use crate::dot::{EdgeAttributes, GraphLabel, NodeAttributes};
use crate::error::GraphGeneratorError;
use crate::graph::Graph;
use crate::utils::string::{non_empty_prepend, to_hyphen_case};

/// Hooks driving one module graph
#[derive(Clone)]
pub struct ModuleGenerator {
    name: String,
    include_module: ModulePredicate,
    include_configuration: ConfigurationPredicate,
    module_mapper: ModuleMapper,
    edge_hook: ModuleEdgeHook,
    graph_hook: GraphHook,
    label: Option<GraphLabel>,
}

impl ModuleGenerator {
    pub fn builder() -> ModuleGeneratorBuilder {
        ModuleGeneratorBuilder::new()
    }

    /// Every module, colored by module type
    pub fn all() -> Self {
        ModuleGeneratorBuilder::new().into_generator()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Header override; the root module name is used otherwise
    pub fn label(&self) -> Option<&GraphLabel> {
        self.label.as_ref()
    }

    pub fn output_file_stem(&self) -> String {
        format!(
            "{MODULE_GRAPH_STEM}{}",
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

    pub fn map_module(&self, module: &Module) -> Result<Option<NodeAttributes>> {
        (self.module_mapper)(module)
    }

    pub fn map_edge(
        &self,
        from: &Module,
        to: &Module,
        kind: RelationshipKind,
    ) -> Result<Option<EdgeAttributes>> {
        (self.edge_hook)(from, to, kind)
    }

    pub fn apply_graph_hook(&self, graph: &mut Graph) -> Result<()> {
        (self.graph_hook)(graph)
    }
}

impl Default for ModuleGenerator {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for ModuleGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleGenerator")
            .field("name", &self.name)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

pub struct ModuleGeneratorBuilder {
    name: String,
    include_module: ModulePredicate,
    include_configuration: ConfigurationPredicate,
    module_mapper: ModuleMapper,
    edge_hook: ModuleEdgeHook,
    graph_hook: GraphHook,
    label: Option<GraphLabel>,
}

impl Default for ModuleGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            name: String::new(),
            include_module: Arc::new(|_| Ok(true)),
            include_configuration: Arc::new(|_| Ok(true)),
            module_mapper: Arc::new(default_module_mapper),
            edge_hook: Arc::new(|_, _, _| Ok(None)),
            graph_hook: Arc::new(|_| Ok(())),
            label: None,
        }
    }

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

    pub fn with_module_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Module) -> Result<Option<NodeAttributes>> + Send + Sync + 'static,
    {
        self.module_mapper = Arc::new(mapper);
        self
    }

    pub fn with_edge_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Module, &Module, RelationshipKind) -> Result<Option<EdgeAttributes>>
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

    fn into_generator(self) -> ModuleGenerator {
        ModuleGenerator {
            name: self.name,
            include_module: self.include_module,
            include_configuration: self.include_configuration,
            module_mapper: self.module_mapper,
            edge_hook: self.edge_hook,
            graph_hook: self.graph_hook,
            label: self.label,
        }
    }
}

impl ConfigBuilder for ModuleGeneratorBuilder {
    type Config = ModuleGenerator;

    fn build(self) -> Result<Self::Config, GraphGeneratorError> {
        validate_name(&self.name)?;
        Ok(self.into_generator())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_file_names() {
        assert_eq!(
            ModuleGenerator::all().output_file_name(),
            "module-dependency-graph.dot"
        );

        let generator = ModuleGenerator::builder()
            .with_name("coreOnly")
            .build()
            .unwrap();
        assert_eq!(generator.output_file_name(), "module-dependency-graph-core-only.dot");
    }

    #[test]
    fn test_default_mapper_colors_by_type() {
        let generator = ModuleGenerator::all();
        let module = Module::builder()
            .with_name("app")
            .with_marker("com.android.application")
            .build()
            .unwrap();

        let attributes = generator.map_module(&module).unwrap().unwrap();
        assert_eq!(attributes.fill_color.unwrap().as_str(), "#66BB6A");
    }

    #[test]
    fn test_mapper_returning_none() {
        let generator = ModuleGenerator::builder()
            .with_module_mapper(|_| Ok(None))
            .build()
            .unwrap();
        let module = Module::builder().with_name("app").build().unwrap();

        assert!(generator.map_module(&module).unwrap().is_none());
    }
}
