use std::collections::HashSet;

use miette::{Result, WrapErr};
use tracing::{debug, trace};

use super::display_name::display_name;
use super::types::Graph;
use crate::constants::graph::{DEPENDENCY_GRAPH_FONT_NAME, DEPENDENCY_GRAPH_NAME};
use crate::core::{DependencyContainer, Module, ResolvedDependency};
use crate::dot::{NodeAttributes, Shape};
use crate::generator::Generator;
use crate::identifier::Identifier;

/// Builder for library dependency graphs
///
/// Walks the resolved dependency trees of the root modules depth-first.
/// Deduplication is keyed on `(parent, child)` edges rather than on visited
/// nodes: a library reached from two parents gets both edges, while a repeated
/// edge stops the walk. Every edge is recorded at most once, so cyclic input
/// terminates.
pub struct DependencyGraphBuilder<'g> {
    generator: &'g Generator,
    graph: Graph,
    recorded_edges: HashSet<(Identifier, Identifier)>,
    rank_candidates: Vec<Identifier>,
}

/// Pending visit of `dependency` below `parent`
struct Visit<'a> {
    dependency: ResolvedDependency<'a>,
    parent: Identifier,
    container: DependencyContainer<'a>,
}

/// Identifier of a root module node
pub fn module_identifier(module: &Module) -> Identifier {
    module
        .identifier()
        .cloned()
        .unwrap_or_else(|| Identifier::canonicalize(&format!("{}{}", module.group(), module.name())))
}

/// Identifier of a library node
pub fn dependency_identifier(dependency: &ResolvedDependency<'_>) -> Identifier {
    Identifier::canonicalize(&format!("{}{}", dependency.group(), dependency.name()))
}

impl<'g> DependencyGraphBuilder<'g> {
    pub fn new(generator: &'g Generator) -> Self {
        let mut graph = Graph::new().with_name(DEPENDENCY_GRAPH_NAME);
        graph.node_defaults_mut().font_name = Some(DEPENDENCY_GRAPH_FONT_NAME.to_string());

        Self {
            generator,
            graph,
            recorded_edges: HashSet::new(),
            rank_candidates: Vec::new(),
        }
    }

    /// Build the graph of `root`'s submodules, or of `root` itself when it has
    /// none
    pub fn build(self, root: &Module) -> Result<Graph> {
        let roots = if root.submodules().is_empty() {
            vec![root]
        } else {
            root.descendants()
        };
        self.build_roots(&roots)
    }

    pub fn build_roots(mut self, roots: &[&Module]) -> Result<Graph> {
        let mut included = Vec::with_capacity(roots.len());
        for &module in roots {
            if self.generator.include_module(module)? {
                included.push(module);
            } else {
                trace!(module = module.path(), "Module excluded by generator");
            }
        }

        for &module in &included {
            self.add_root(module)
                .wrap_err_with(|| format!("Failed to add module '{}'", module.path()))?;
        }

        for &module in &included {
            let parent = module_identifier(module);
            for configuration in module.configurations() {
                if !configuration.is_resolvable()
                    || !self.generator.include_configuration(configuration)?
                {
                    continue;
                }

                debug!(
                    module = module.path(),
                    configuration = configuration.name(),
                    "Walking configuration"
                );
                for dependency in configuration.resolution().first_level() {
                    self.append(dependency, parent.clone(), DependencyContainer::Module(module))?;
                }
            }
        }

        if let Some(label) = self.generator.label() {
            self.graph.set_label(Some(label.clone()));
        }
        self.graph.set_rank_group(std::mem::take(&mut self.rank_candidates));

        self.generator.apply_graph_hook(&mut self.graph)?;

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Dependency graph built"
        );
        Ok(self.graph)
    }

    fn add_root(&mut self, module: &Module) -> Result<()> {
        let id = module_identifier(module);
        if !self.graph.contains_node(&id) {
            let mut attributes = NodeAttributes::new()
                .with_label(module.name())
                .with_shape(Shape::Rectangle);
            if let Some(mapped) = self.generator.map_module(module)? {
                attributes = attributes.merge(mapped);
            }
            self.graph.add_node(id.clone(), attributes);
        }

        if !self.rank_candidates.contains(&id) {
            self.rank_candidates.push(id);
        }
        Ok(())
    }

    /// Depth-first walk from `dependency`, in the same order as a recursive
    /// pre-order traversal
    fn append<'a>(
        &mut self,
        dependency: ResolvedDependency<'a>,
        parent: Identifier,
        container: DependencyContainer<'a>,
    ) -> Result<()> {
        let mut stack = vec![Visit {
            dependency,
            parent,
            container,
        }];

        while let Some(Visit {
            dependency,
            parent,
            container,
        }) = stack.pop()
        {
            if !self.generator.include_dependency(&dependency)? {
                trace!(dependency = %dependency, "Dependency excluded by generator");
                continue;
            }

            let id = dependency_identifier(&dependency);
            if !self.recorded_edges.insert((parent.clone(), id.clone())) {
                trace!(from = %parent, to = %id, "Edge already recorded");
                continue;
            }

            if !self.graph.contains_node(&id) {
                let mut attributes = NodeAttributes::new()
                    .with_label(display_name(dependency.group(), dependency.name()))
                    .with_shape(Shape::Rectangle);
                if let Some(mapped) = self.generator.map_dependency(&dependency)? {
                    attributes = attributes.merge(mapped);
                }
                self.graph.add_node(id.clone(), attributes);
            }

            let edge_attributes = self
                .generator
                .map_edge(&container, &dependency)?
                .unwrap_or_default();
            self.graph.add_edge(&parent, &id, edge_attributes)?;
            debug!(from = %parent, to = %id, "Recorded edge");

            self.rank_candidates.retain(|candidate| candidate != &id);

            if self.generator.include_children(&dependency)? {
                for child in dependency.children().rev() {
                    stack.push(Visit {
                        dependency: child,
                        parent: id.clone(),
                        container: DependencyContainer::Dependency(dependency),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::core::{Configuration, Coordinate, Resolution};

    fn single_module(resolution: Resolution) -> Module {
        Module::builder()
            .with_name("single")
            .with_configuration(Configuration::new("compileClasspath").with_resolution(resolution))
            .build()
            .unwrap()
    }

    #[test]
    fn test_module_identifier_prefers_explicit() {
        let module = Module::builder()
            .with_name("app")
            .with_group("com.example")
            .with_identifier(Identifier::new("custom").unwrap())
            .build()
            .unwrap();
        assert_eq!(module_identifier(&module).as_str(), "custom");

        let module = Module::builder()
            .with_name("my-app")
            .with_group("com.example")
            .build()
            .unwrap();
        assert_eq!(module_identifier(&module).as_str(), "comexamplemyapp");
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let mut resolution = Resolution::new();
        let mut previous = resolution.component(Coordinate::new("g", "n0"));
        resolution.add_first_level(previous);
        for index in 1..20_000 {
            let next = resolution.component(Coordinate::new("g", format!("n{index}")));
            resolution.add_child(previous, next);
            previous = next;
        }

        let module = single_module(resolution);
        let graph = DependencyGraphBuilder::new(&Generator::all())
            .build(&module)
            .unwrap();

        assert_eq!(graph.node_count(), 20_001);
        assert_eq!(graph.edge_count(), 20_000);
    }

    #[test]
    fn test_non_resolvable_configurations_skipped() {
        let mut resolution = Resolution::new();
        let a = resolution.component(Coordinate::new("g", "a"));
        resolution.add_first_level(a);

        let module = Module::builder()
            .with_name("single")
            .with_configuration(
                Configuration::new("compileClasspath")
                    .with_resolvable(false)
                    .with_resolution(resolution),
            )
            .build()
            .unwrap();

        let graph = DependencyGraphBuilder::new(&Generator::all())
            .build(&module)
            .unwrap();
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_mapper_called_once_per_node() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let mut resolution = Resolution::new();
        let a = resolution.component(Coordinate::new("g", "a"));
        let b = resolution.component(Coordinate::new("g", "b"));
        let c = resolution.component(Coordinate::new("g", "c"));
        resolution.add_child(a, c);
        resolution.add_child(b, c);
        resolution.add_first_level(a);
        resolution.add_first_level(b);

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let generator = Generator::builder()
            .with_dependency_mapper(move |dependency| {
                if dependency.name() == "c" {
                    counter.fetch_add(1, Ordering::SeqCst);
                }
                Ok(None)
            })
            .build()
            .unwrap();

        let graph = DependencyGraphBuilder::new(&generator)
            .build(&single_module(resolution))
            .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(graph.edge_count(), 4);
    }
}
