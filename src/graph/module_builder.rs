use std::collections::{BTreeSet, HashMap, HashSet};

use miette::Result;
use tracing::{debug, warn};

use super::types::Graph;
use crate::constants::graph::{MODULE_GRAPH_DPI, MODULE_GRAPH_HEADER_FONT_SIZE};
use crate::core::{Module, RelationshipKind};
use crate::dot::{EdgeAttributes, GraphLabel, NodeAttributes, Shape, Style};
use crate::error::GraphGeneratorError;
use crate::generator::ModuleGenerator;
use crate::identifier::Identifier;

/// Builder for module-to-module graphs
pub struct ModuleGraphBuilder<'g> {
    generator: &'g ModuleGenerator,
}

/// A declared dependency of one module on another
#[derive(Debug, Clone, Copy)]
struct Link<'a> {
    from: &'a Module,
    to: &'a Module,
    kind: RelationshipKind,
}

/// Modules taking part in the graph and the links between them
struct Discovery<'a> {
    modules: HashMap<&'a str, &'a Module>,
    participants: Vec<&'a Module>,
    positions: HashMap<&'a str, usize>,
    links: Vec<Link<'a>>,
}

/// Modules still to expand, with the targets not yet visited
type Frame<'a> = (&'a Module, std::vec::IntoIter<(&'a Module, RelationshipKind)>);

impl<'a> Discovery<'a> {
    fn is_participant(&self, module: &Module) -> bool {
        self.positions.contains_key(module.path())
    }

    fn position(&self, module: &Module) -> usize {
        self.positions
            .get(module.path())
            .copied()
            .unwrap_or(usize::MAX)
    }
}

fn module_identifier(module: &Module) -> Identifier {
    Identifier::canonicalize(module.path())
}

impl<'g> ModuleGraphBuilder<'g> {
    pub fn new(generator: &'g ModuleGenerator) -> Self {
        Self { generator }
    }

    pub fn build(&self, root: &Module) -> Result<Graph> {
        let discovery = self.discover(root, root.all_modules())?;
        let links = Self::normalize_links(&discovery);

        let targets: HashSet<Identifier> =
            links.iter().map(|link| module_identifier(link.to)).collect();

        let mut graph = Graph::new();
        graph.set_dpi(Some(MODULE_GRAPH_DPI));
        graph.set_label(Some(
            self.generator
                .label()
                .cloned()
                .unwrap_or_else(|| {
                    GraphLabel::new(root.name()).with_font_size(Some(MODULE_GRAPH_HEADER_FONT_SIZE))
                }),
        ));
        graph.node_defaults_mut().style = Some(Style::Filled);

        let mut rank_group = Vec::new();
        for &module in &discovery.participants {
            let id = module_identifier(module);
            if graph.contains_node(&id) {
                continue;
            }
            let is_root = !targets.contains(&id);

            let mut attributes = NodeAttributes::new().with_label(module.path());
            if is_root {
                attributes = attributes.with_shape(Shape::Rectangle);
                rank_group.push(id.clone());
            }
            if let Some(mapped) = self.generator.map_module(module)? {
                attributes = attributes.merge(mapped);
            }
            graph.add_node(id, attributes);
        }
        graph.set_rank_group(rank_group);

        for link in &links {
            let mut attributes = match link.kind {
                RelationshipKind::Implementation => EdgeAttributes::new().with_style(Style::Dotted),
                RelationshipKind::Api => EdgeAttributes::new(),
            };
            if let Some(custom) = self.generator.map_edge(link.from, link.to, link.kind)? {
                attributes = attributes.merge(custom);
            }
            graph.add_edge(
                &module_identifier(link.from),
                &module_identifier(link.to),
                attributes,
            )?;
        }

        self.generator.apply_graph_hook(&mut graph)?;

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Module graph built"
        );
        Ok(graph)
    }

    /// Sorted paths of every module reachable from `path`, excluding itself
    pub fn reachable_from(&self, root: &Module, path: &str) -> Result<Vec<String>> {
        let start = root.find_by_path(path).ok_or_else(|| {
            GraphGeneratorError::ConfigurationError {
                message: format!("Unknown module path '{path}'"),
            }
        })?;

        let discovery = self.discover(root, vec![start])?;
        let links = Self::normalize_links(&discovery);

        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for link in &links {
            adjacency
                .entry(link.from.path())
                .or_default()
                .push(link.to.path());
        }

        let mut reachable = BTreeSet::new();
        let mut stack = vec![start.path()];
        while let Some(current) = stack.pop() {
            for &next in adjacency.get(current).into_iter().flatten() {
                if next != start.path() && reachable.insert(next) {
                    stack.push(next);
                }
            }
        }

        Ok(reachable.into_iter().map(str::to_string).collect())
    }

    /// Collect participants depth-first from every starting module that
    /// declares module dependencies
    fn discover<'a>(&self, root: &'a Module, starts: Vec<&'a Module>) -> Result<Discovery<'a>> {
        let mut discovery = Discovery {
            modules: root
                .all_modules()
                .into_iter()
                .map(|module| (module.path(), module))
                .collect(),
            participants: Vec::new(),
            positions: HashMap::new(),
            links: Vec::new(),
        };

        for start in starts {
            if !start.depends_on_other_modules() {
                continue;
            }
            self.visit(start, &mut discovery)?;
        }

        Ok(discovery)
    }

    fn visit<'a>(&self, start: &'a Module, discovery: &mut Discovery<'a>) -> Result<()> {
        let Some(targets) = self.enter(start, discovery)? else {
            return Ok(());
        };

        let mut stack: Vec<Frame<'a>> = vec![(start, targets.into_iter())];
        while let Some((from, targets)) = stack.last_mut() {
            let from: &'a Module = *from;
            let Some((to, kind)) = targets.next() else {
                stack.pop();
                continue;
            };

            discovery.links.push(Link { from, to, kind });
            if let Some(next_targets) = self.enter(to, discovery)? {
                stack.push((to, next_targets.into_iter()));
            }
        }

        Ok(())
    }

    /// Record `module` as a participant, returning its declared targets, or
    /// `None` when it is excluded or already known
    fn enter<'a>(
        &self,
        module: &'a Module,
        discovery: &mut Discovery<'a>,
    ) -> Result<Option<Vec<(&'a Module, RelationshipKind)>>> {
        if discovery.is_participant(module) || !self.generator.include_module(module)? {
            return Ok(None);
        }

        discovery
            .positions
            .insert(module.path(), discovery.participants.len());
        discovery.participants.push(module);

        let mut targets = Vec::new();
        for configuration in module.configurations() {
            if !self.generator.include_configuration(configuration)? {
                continue;
            }
            let kind = configuration.relationship_kind();
            for path in configuration.module_dependencies() {
                match discovery.modules.get(path.as_str()) {
                    Some(&target) => targets.push((target, kind)),
                    None => warn!(
                        module = module.path(),
                        target = path.as_str(),
                        "Skipping dependency on unknown module"
                    ),
                }
            }
        }

        Ok(Some(targets))
    }

    /// Keep links between participants, drop self-loops and repeats, and order
    /// them by the discovery position of their source
    ///
    /// Self-loops and repeats are judged on node identifiers, so paths that
    /// canonicalize to the same identifier count as one module.
    fn normalize_links<'a>(discovery: &Discovery<'a>) -> Vec<Link<'a>> {
        let mut seen = HashSet::new();
        let mut links: Vec<Link<'a>> = discovery
            .links
            .iter()
            .filter(|link| discovery.is_participant(link.to) && discovery.is_participant(link.from))
            .filter(|link| {
                let from = module_identifier(link.from);
                let to = module_identifier(link.to);
                from != to && seen.insert((from, to))
            })
            .copied()
            .collect();

        links.sort_by_key(|link| discovery.position(link.from));
        links
    }
}
