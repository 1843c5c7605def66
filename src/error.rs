use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(dependency_graph::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum GraphGeneratorError {
    #[error("Invalid identifier '{value}': character {character:?} is not allowed")]
    #[diagnostic(
        code(dependency_graph::invalid_identifier),
        help("Identifiers must not contain '-', '.' or whitespace")
    )]
    InvalidIdentifier { value: String, character: char },

    #[error("Invalid color '{value}'")]
    #[diagnostic(
        code(dependency_graph::invalid_color),
        help("Use a hex color such as #rgb, #rrggbb or #rrggbbaa")
    )]
    InvalidColor { value: String },

    #[error("Invalid dependency coordinate '{coordinate}'")]
    #[diagnostic(
        code(dependency_graph::invalid_coordinate),
        help("Coordinates use the group:name or group:name:version notation")
    )]
    InvalidCoordinate { coordinate: String },

    #[error("Invalid glob pattern '{pattern}'")]
    #[diagnostic(
        code(dependency_graph::invalid_pattern),
        help("Check the pattern syntax in your settings file")
    )]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dependency_graph::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("Invalid JSON manifest '{path}'")]
    #[diagnostic(
        code(dependency_graph::json_error),
        help("Check the JSON syntax of the manifest")
    )]
    ManifestJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("String formatting error")]
    #[diagnostic(
        code(dependency_graph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dependency_graph::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dependency_graph::config_error),
        help("Check your command arguments and settings")
    )]
    ConfigurationError { message: String },

    #[error("Graph error: {message}")]
    #[diagnostic(
        code(dependency_graph::graph_error),
        help("This may be an internal error with graph processing")
    )]
    GraphError { message: String },
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "settings.toml".to_string(),
            source_code: NamedSource::new("settings.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'settings.toml'");
    }

    #[test]
    fn test_invalid_identifier_display() {
        let error = GraphGeneratorError::InvalidIdentifier {
            value: "a-b".to_string(),
            character: '-',
        };

        assert_eq!(
            error.to_string(),
            "Invalid identifier 'a-b': character '-' is not allowed"
        );
    }

    #[test]
    fn test_file_read_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let error = GraphGeneratorError::FileReadError {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io_err,
        };

        assert_eq!(error.to_string(), "Failed to read file '/tmp/missing.toml'");
    }

    #[test]
    fn test_invalid_pattern_keeps_source() {
        let pattern_err = glob::Pattern::new("a[").unwrap_err();
        let error = GraphGeneratorError::InvalidPattern {
            pattern: "a[".to_string(),
            source: pattern_err,
        };

        use std::error::Error;
        assert!(error.source().is_some());
        assert_eq!(error.to_string(), "Invalid glob pattern 'a['");
    }

    #[test]
    fn test_error_codes() {
        use miette::Diagnostic;

        let error = GraphGeneratorError::InvalidColor {
            value: "#zzz".to_string(),
        };
        assert!(error.code().is_some());
        assert!(error.help().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("some io error");
        let error: GraphGeneratorError = io_err.into();

        match error {
            GraphGeneratorError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }
}
