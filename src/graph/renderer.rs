use std::io::Write;

use miette::Result;

use super::types::Graph;
use crate::error::GraphGeneratorError;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(GraphGeneratorError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(GraphGeneratorError::from)
    };
}

const INDENT: &str = "  ";

/// DOT serializer
///
/// Output is fully determined by the graph: nodes and edges appear in
/// insertion order and attributes in a fixed key order, so equal graphs
/// always render to identical text.
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn render_dot(graph: &Graph, output: &mut dyn Write) -> Result<()> {
        let (keyword, connector) = if graph.is_directed() {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        match graph.name() {
            Some(name) => writeln_out!(output, "{keyword} {} {{", quote(name))?,
            None => writeln_out!(output, "{keyword} {{")?,
        }

        let graph_attributes = graph_attributes(graph);
        if !graph_attributes.is_empty() {
            writeln_out!(
                output,
                "{INDENT}graph [{}];",
                attribute_list(&graph_attributes)
            )?;
        }

        let node_defaults = graph.node_defaults().entries();
        if !node_defaults.is_empty() {
            writeln_out!(output, "{INDENT}node [{}];", attribute_list(&node_defaults))?;
        }

        for node in graph.nodes() {
            let entries = node.attributes.entries();
            if entries.is_empty() {
                writeln_out!(output, "{INDENT}{};", quote(node.id.as_str()))?;
            } else {
                writeln_out!(
                    output,
                    "{INDENT}{} [{}];",
                    quote(node.id.as_str()),
                    attribute_list(&entries)
                )?;
            }
        }

        if !graph.rank_group().is_empty() {
            let members: String = graph
                .rank_group()
                .iter()
                .map(|id| format!(" {};", quote(id.as_str())))
                .collect();
            writeln_out!(output, "{INDENT}{{ rank=same;{members} }}")?;
        }

        for edge in graph.edges() {
            let entries = edge.attributes.entries();
            let from = quote(edge.from.as_str());
            let to = quote(edge.to.as_str());
            if entries.is_empty() {
                writeln_out!(output, "{INDENT}{from} {connector} {to};")?;
            } else {
                writeln_out!(
                    output,
                    "{INDENT}{from} {connector} {to} [{}];",
                    attribute_list(&entries)
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    pub fn to_dot(graph: &Graph) -> Result<String> {
        let mut buffer = Vec::new();
        Self::render_dot(graph, &mut buffer)?;
        String::from_utf8(buffer).map_err(|error| {
            GraphGeneratorError::GraphError {
                message: format!("Rendered DOT is not valid UTF-8: {error}"),
            }
            .into()
        })
    }
}

fn graph_attributes(graph: &Graph) -> Vec<(&'static str, String)> {
    let mut entries = Vec::new();
    if let Some(label) = graph.label() {
        entries.push(("label", label.text.clone()));
        entries.push(("labelloc", label.location.to_string()));
        entries.push(("labeljust", label.justification.to_string()));
        if let Some(font_size) = label.font_size {
            entries.push(("fontsize", font_size.to_string()));
        }
        if let Some(height) = label.height {
            entries.push(("height", height.to_string()));
        }
    }
    if let Some(dpi) = graph.dpi() {
        entries.push(("dpi", dpi.to_string()));
    }
    entries
}

fn attribute_list(entries: &[(&'static str, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}={}", quote(value)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a DOT identifier or value, escaping backslashes, quotes and newlines
fn quote(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
