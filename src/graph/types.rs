//! Core graph types
//!
//! [`Graph`] is the attributed graph the builders produce and the renderer
//! serializes. Nodes and edges live in a petgraph `DiGraph`, whose indices
//! preserve insertion order, plus an identifier index for lookups.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::dot::{EdgeAttributes, GraphLabel, NodeAttributes};
use crate::error::GraphGeneratorError;
use crate::identifier::Identifier;

/// A node and its rendering attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: Identifier,
    pub attributes: NodeAttributes,
}

/// Borrowed view of one edge
#[derive(Debug, Clone, Copy)]
pub struct GraphEdge<'a> {
    pub from: &'a Identifier,
    pub to: &'a Identifier,
    pub attributes: &'a EdgeAttributes,
}

#[derive(Debug, Clone)]
pub struct Graph {
    name: Option<String>,
    directed: bool,
    label: Option<GraphLabel>,
    dpi: Option<u32>,
    node_defaults: NodeAttributes,
    inner: DiGraph<GraphNode, EdgeAttributes>,
    indices: HashMap<Identifier, NodeIndex>,
    rank_group: Vec<Identifier>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    pub fn new() -> Self {
        Self {
            name: None,
            directed: true,
            label: None,
            dpi: None,
            node_defaults: NodeAttributes::default(),
            inner: DiGraph::new(),
            indices: HashMap::new(),
            rank_group: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    pub fn label(&self) -> Option<&GraphLabel> {
        self.label.as_ref()
    }

    pub fn set_label(&mut self, label: Option<GraphLabel>) {
        self.label = label;
    }

    pub fn dpi(&self) -> Option<u32> {
        self.dpi
    }

    pub fn set_dpi(&mut self, dpi: Option<u32>) {
        self.dpi = dpi;
    }

    /// Attributes applied to every node unless overridden
    pub fn node_defaults(&self) -> &NodeAttributes {
        &self.node_defaults
    }

    pub fn node_defaults_mut(&mut self) -> &mut NodeAttributes {
        &mut self.node_defaults
    }

    pub fn contains_node(&self, id: &Identifier) -> bool {
        self.indices.contains_key(id)
    }

    /// Insert a node unless one with the same identifier exists
    ///
    /// Returns `false` when the node already existed; its attributes are left
    /// untouched in that case.
    pub fn add_node(&mut self, id: Identifier, attributes: NodeAttributes) -> bool {
        if self.indices.contains_key(&id) {
            return false;
        }
        let index = self.inner.add_node(GraphNode {
            id: id.clone(),
            attributes,
        });
        self.indices.insert(id, index);
        true
    }

    pub fn node(&self, id: &Identifier) -> Option<&GraphNode> {
        self.indices.get(id).map(|&index| &self.inner[index])
    }

    pub fn node_attributes_mut(&mut self, id: &Identifier) -> Option<&mut NodeAttributes> {
        let index = *self.indices.get(id)?;
        Some(&mut self.inner[index].attributes)
    }

    /// Connect two existing nodes
    pub fn add_edge(
        &mut self,
        from: &Identifier,
        to: &Identifier,
        attributes: EdgeAttributes,
    ) -> Result<(), GraphGeneratorError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;
        self.inner.add_edge(from_index, to_index, attributes);
        Ok(())
    }

    pub fn edge(&self, from: &Identifier, to: &Identifier) -> Option<&EdgeAttributes> {
        let from_index = *self.indices.get(from)?;
        let to_index = *self.indices.get(to)?;
        self.inner
            .find_edge(from_index, to_index)
            .map(|edge| &self.inner[edge])
    }

    pub fn edge_attributes_mut(
        &mut self,
        from: &Identifier,
        to: &Identifier,
    ) -> Option<&mut EdgeAttributes> {
        let from_index = *self.indices.get(from)?;
        let to_index = *self.indices.get(to)?;
        let edge = self.inner.find_edge(from_index, to_index)?;
        Some(&mut self.inner[edge])
    }

    pub fn has_incoming(&self, id: &Identifier) -> bool {
        self.indices.get(id).is_some_and(|&index| {
            self.inner
                .neighbors_directed(index, Direction::Incoming)
                .next()
                .is_some()
        })
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.inner.node_indices().map(move |index| &self.inner[index])
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge<'_>> {
        self.inner.edge_indices().filter_map(move |edge| {
            let (from, to) = self.inner.edge_endpoints(edge)?;
            Some(GraphEdge {
                from: &self.inner[from].id,
                to: &self.inner[to].id,
                attributes: &self.inner[edge],
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Identifiers rendered at the same rank
    pub fn rank_group(&self) -> &[Identifier] {
        &self.rank_group
    }

    pub fn set_rank_group(&mut self, rank_group: Vec<Identifier>) {
        self.rank_group = rank_group;
    }

    fn index_of(&self, id: &Identifier) -> Result<NodeIndex, GraphGeneratorError> {
        self.indices
            .get(id)
            .copied()
            .ok_or_else(|| GraphGeneratorError::GraphError {
                message: format!("Node '{id}' does not exist"),
            })
    }
}
