//! Graph command configuration

use std::fmt;
use std::path::PathBuf;

use crate::common::ConfigBuilder;
use crate::error::GraphGeneratorError;

/// Which graph family a command renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Dependencies,
    Modules,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GraphKind::Dependencies => "dependency",
            GraphKind::Modules => "module",
        })
    }
}

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub kind: GraphKind,
    pub manifest: PathBuf,
    pub settings: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl GraphOptions {
    pub fn builder() -> GraphOptionsBuilder {
        GraphOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct GraphOptionsBuilder {
    kind: Option<GraphKind>,
    manifest: Option<PathBuf>,
    settings: Option<PathBuf>,
    output_dir: Option<PathBuf>,
}

impl GraphOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: GraphKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_manifest(mut self, manifest: PathBuf) -> Self {
        self.manifest = Some(manifest);
        self
    }

    pub fn with_settings(mut self, settings: Option<PathBuf>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }
}

impl ConfigBuilder for GraphOptionsBuilder {
    type Config = GraphOptions;

    fn build(self) -> Result<Self::Config, GraphGeneratorError> {
        Ok(GraphOptions {
            kind: self
                .kind
                .ok_or_else(|| GraphGeneratorError::ConfigurationError {
                    message: "Missing required field: kind".to_string(),
                })?,
            manifest: self
                .manifest
                .ok_or_else(|| GraphGeneratorError::ConfigurationError {
                    message: "Missing required field: manifest".to_string(),
                })?,
            settings: self.settings,
            output_dir: self.output_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_manifest() {
        let result = GraphOptions::builder()
            .with_kind(GraphKind::Modules)
            .build();
        assert!(matches!(
            result,
            Err(GraphGeneratorError::ConfigurationError { .. })
        ));
    }

    #[test]
    fn test_build() {
        let options = GraphOptions::builder()
            .with_kind(GraphKind::Dependencies)
            .with_manifest(PathBuf::from("project.toml"))
            .with_output_dir(Some(PathBuf::from("out")))
            .build()
            .unwrap();

        assert_eq!(options.kind, GraphKind::Dependencies);
        assert_eq!(options.settings, None);
        assert_eq!(options.kind.to_string(), "dependency");
    }
}
