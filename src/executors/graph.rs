//! Graph command executor

use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;
use tracing::info;

use crate::config::{GraphKind, GraphOptions};
use crate::core::Module;
use crate::error::GraphGeneratorError;
use crate::executors::CommandExecutor;
use crate::generator::settings::Settings;
use crate::generator::{Generator, ModuleGenerator};
use crate::graph::{DependencyGraphBuilder, Graph, GraphRenderer, ModuleGraphBuilder};
use crate::manifest::load_manifest;
use crate::progress::ProgressReporter;

pub struct GraphExecutor;

/// A generator that knows how to build its graph from a module tree
pub(crate) trait GraphSource: Sync {
    fn file_name(&self) -> String;

    fn build_graph(&self, root: &Module) -> Result<Graph>;
}

impl GraphSource for Generator {
    fn file_name(&self) -> String {
        self.output_file_name()
    }

    fn build_graph(&self, root: &Module) -> Result<Graph> {
        DependencyGraphBuilder::new(self).build(root)
    }
}

impl GraphSource for ModuleGenerator {
    fn file_name(&self) -> String {
        self.output_file_name()
    }

    fn build_graph(&self, root: &Module) -> Result<Graph> {
        ModuleGraphBuilder::new(self).build(root)
    }
}

/// DOT text of one generator's graph
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    pub file_name: String,
    pub dot: String,
}

impl CommandExecutor for GraphExecutor {
    type Config = GraphOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let progress = ProgressReporter::new();
        progress.start_loading(&config.manifest);

        let root = load_manifest(&config.manifest)?;
        let settings = Settings::load(config.settings.as_deref())
            .wrap_err("Failed to load generator settings")?;

        let rendered = match config.kind {
            GraphKind::Dependencies => {
                let generators = settings.dependency_generators()?;
                progress.start_generating(&config.kind.to_string(), generators.len());
                render_graphs(&generators, &root, &progress)?
            }
            GraphKind::Modules => {
                let generators = settings.module_generators()?;
                progress.start_generating(&config.kind.to_string(), generators.len());
                render_graphs(&generators, &root, &progress)?
            }
        };

        match config.output_dir.as_deref() {
            Some(dir) => write_graphs(&rendered, dir)?,
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                for graph in &rendered {
                    handle
                        .write_all(graph.dot.as_bytes())
                        .map_err(GraphGeneratorError::from)?;
                }
                handle.flush().map_err(GraphGeneratorError::from)?;
            }
        }

        progress.finish_writing(rendered.len(), config.output_dir.as_deref());
        Ok(())
    }
}

/// Build and render every generator's graph in parallel, keeping the
/// generators' order
pub(crate) fn render_graphs<G: GraphSource>(
    generators: &[G],
    root: &Module,
    progress: &ProgressReporter,
) -> Result<Vec<RenderedGraph>> {
    let mut file_names = HashSet::new();
    for generator in generators {
        let file_name = generator.file_name();
        if !file_names.insert(file_name.clone()) {
            return Err(GraphGeneratorError::ConfigurationError {
                message: format!("Several generators would write '{file_name}'"),
            }
            .into());
        }
    }

    generators
        .par_iter()
        .map(|generator| {
            let file_name = generator.file_name();
            let pb = progress.start_generator(&file_name);

            let result = generator.build_graph(root).and_then(|graph| {
                let dot = GraphRenderer::to_dot(&graph)?;
                Ok((graph.node_count(), graph.edge_count(), dot))
            });

            match result {
                Ok((nodes, edges, dot)) => {
                    progress.finish_generator(&pb, &file_name, nodes, edges);
                    info!(file = %file_name, nodes, edges, "Rendered graph");
                    Ok(RenderedGraph { file_name, dot })
                }
                Err(error) => {
                    progress.fail_generator(&pb, &file_name);
                    Err(error.wrap_err(format!("Failed to generate '{file_name}'")))
                }
            }
        })
        .collect()
}

fn write_graphs(rendered: &[RenderedGraph], dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to create output directory '{}'", dir.display()))?;

    for graph in rendered {
        let path = dir.join(&graph.file_name);
        let file = File::create(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create output file '{}'", path.display()))?;

        let mut writer = BufWriter::new(file);
        writer
            .write_all(graph.dot.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(GraphGeneratorError::from)?;
        info!(path = %path.display(), "Wrote graph");
    }

    Ok(())
}
