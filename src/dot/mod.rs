//! # DOT Attribute Model
//!
//! Value types describing how nodes, edges and the graph header look once
//! rendered by Graphviz. None of these types know about traversal; the graph
//! builders attach them to nodes and edges, and the renderer turns them into
//! `key="value"` lists.

mod attributes;
mod color;
mod label;
mod shape;
mod style;

pub use attributes::{EdgeAttributes, NodeAttributes};
pub use color::Color;
pub use label::{GraphLabel, LabelJustification, LabelLocation};
pub use shape::Shape;
pub use style::Style;
