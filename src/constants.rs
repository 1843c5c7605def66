//! Configuration constants for the dependency graph generator
//!
//! Defaults used when a generator or settings file does not say otherwise.

use std::time::Duration;

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames, the last one is shown when a generator finishes
    pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒", "✓"];
}

/// Graph defaults
pub mod graph {
    /// Name of every dependency graph
    pub const DEPENDENCY_GRAPH_NAME: &str = "G";

    /// Font applied to every node of a dependency graph
    pub const DEPENDENCY_GRAPH_FONT_NAME: &str = "Times New Roman";

    /// Font size of a header label when none is configured
    pub const DEFAULT_HEADER_FONT_SIZE: u32 = 24;

    /// Header font size of the module graph
    pub const MODULE_GRAPH_HEADER_FONT_SIZE: u32 = 35;

    /// Resolution of the module graph
    pub const MODULE_GRAPH_DPI: u32 = 100;

    /// Marker of the configurations feeding a dependency graph by default
    pub const COMPILE_CLASSPATH: &str = "compileClasspath";

    /// Fragments that disqualify a classpath configuration by default
    pub const TEST_CONFIGURATION_MARKERS: &[&str] = &["test", "AndroidTest", "UnitTest"];
}

/// Output naming
pub mod output {
    /// File stem of dependency graphs
    pub const DEPENDENCY_GRAPH_STEM: &str = "dependency-graph";

    /// File stem of module graphs
    pub const MODULE_GRAPH_STEM: &str = "module-dependency-graph";

    /// Extension of every generated file
    pub const DOT_EXTENSION: &str = "dot";
}
