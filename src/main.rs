use miette::Result;
use tracing_subscriber::EnvFilter;

/// Main entry point for the dependency-graph-generator CLI tool
fn main() -> Result<()> {
    // Install miette's panic and error handler for beautiful error reporting
    miette::set_panic_hook();

    // Diagnostics stay quiet unless RUST_LOG asks for them
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    dependency_graph_generator::run()
}
