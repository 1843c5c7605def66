//! Tests for module-to-module graphs

use dependency_graph_generator::common::ConfigBuilder;
use dependency_graph_generator::core::{Configuration, Module, ModuleBuilder, RelationshipKind};
use dependency_graph_generator::dot::{Color, EdgeAttributes, GraphLabel, Style};
use dependency_graph_generator::generator::ModuleGenerator;
use dependency_graph_generator::graph::{Graph, GraphRenderer, ModuleGraphBuilder};
use pretty_assertions::assert_eq;

fn module(name: &str) -> ModuleBuilder {
    Module::builder().with_name(name)
}

fn depends(builder: ModuleBuilder, configuration: &str, paths: &[&str]) -> ModuleBuilder {
    builder.with_configuration(
        Configuration::new(configuration).with_module_dependencies(paths.iter().copied()),
    )
}

/// app -> core, app -> feature (implementation), feature -> core (api), plus
/// a module without dependencies
fn project() -> Module {
    module("project")
        .with_submodule(depends(
            module("app").with_marker("com.android.application"),
            "implementation",
            &[":core", ":feature"],
        ))
        .with_submodule(depends(
            module("feature").with_marker("java-library"),
            "api",
            &[":core"],
        ))
        .with_submodule(module("core").with_marker("org.jetbrains.kotlin.multiplatform"))
        .with_submodule(module("docs"))
        .build()
        .unwrap()
}

fn build(generator: &ModuleGenerator, root: &Module) -> Graph {
    ModuleGraphBuilder::new(generator).build(root).unwrap()
}

fn edge_pairs(graph: &Graph) -> Vec<(String, String)> {
    graph
        .edges()
        .map(|edge| (edge.from.to_string(), edge.to.to_string()))
        .collect()
}

fn rank_group(graph: &Graph) -> Vec<&str> {
    graph.rank_group().iter().map(|id| id.as_str()).collect()
}

#[test]
fn test_module_graph_rendering() {
    let graph = build(&ModuleGenerator::all(), &project());

    let expected = r##"digraph {
  graph [label="project",labelloc="t",labeljust="c",fontsize="35",dpi="100"];
  node [style="filled"];
  ":app" [label=":app",shape="rectangle",fillcolor="#66BB6A"];
  ":core" [label=":core",fillcolor="#A280FF"];
  ":feature" [label=":feature",fillcolor="#FF7043"];
  { rank=same; ":app"; }
  ":app" -> ":core" [style="dotted"];
  ":app" -> ":feature" [style="dotted"];
  ":feature" -> ":core";
}
"##;
    assert_eq!(GraphRenderer::to_dot(&graph).unwrap(), expected);
}

#[test]
fn test_rank_group_tracks_incoming_links() {
    let root = module("project")
        .with_submodule(depends(module("x"), "api", &[":z"]))
        .with_submodule(depends(module("y"), "api", &[":z"]))
        .with_submodule(module("z"))
        .build()
        .unwrap();
    let graph = build(&ModuleGenerator::all(), &root);
    assert_eq!(rank_group(&graph), vec![":x", ":y"]);

    let root = module("project")
        .with_submodule(depends(module("x"), "api", &[":z", ":y"]))
        .with_submodule(depends(module("y"), "api", &[":z"]))
        .with_submodule(module("z"))
        .build()
        .unwrap();
    let graph = build(&ModuleGenerator::all(), &root);
    assert_eq!(rank_group(&graph), vec![":x"]);
}

#[test]
fn test_first_relationship_kind_wins() {
    let root = module("project")
        .with_submodule(
            module("app")
                .with_configuration(Configuration::new("api").with_module_dependency(":core"))
                .with_configuration(
                    Configuration::new("implementation").with_module_dependency(":core"),
                ),
        )
        .with_submodule(module("core"))
        .build()
        .unwrap();

    let graph = build(&ModuleGenerator::all(), &root);
    let edges: Vec<_> = graph.edges().collect();
    assert_eq!(edges.len(), 1);
    assert!(edges[0].attributes.is_empty());
}

#[test]
fn test_self_loops_and_unknown_paths_dropped() {
    let root = module("project")
        .with_submodule(depends(module("app"), "api", &[":app", ":missing", ":core"]))
        .with_submodule(module("core"))
        .build()
        .unwrap();

    let graph = build(&ModuleGenerator::all(), &root);
    assert_eq!(
        edge_pairs(&graph),
        vec![(":app".to_string(), ":core".to_string())]
    );
}

#[test]
fn test_colliding_paths_share_one_node() {
    // :feature-x and :featurex canonicalize to the same identifier
    let root = module("project")
        .with_submodule(depends(module("app"), "api", &[":feature-x", ":featurex"]))
        .with_submodule(module("feature-x"))
        .with_submodule(depends(module("featurex"), "api", &[":feature-x"]))
        .build()
        .unwrap();

    let graph = build(&ModuleGenerator::all(), &root);
    assert_eq!(
        edge_pairs(&graph),
        vec![(":app".to_string(), ":featurex".to_string())]
    );
    assert_eq!(graph.node_count(), 2);
    assert_eq!(rank_group(&graph), vec![":app"]);

    let dot = GraphRenderer::to_dot(&graph).unwrap();
    assert_eq!(dot.matches(r#"":app" -> ":featurex";"#).count(), 1);
}

#[test]
fn test_cyclic_modules_terminate() {
    let root = module("project")
        .with_submodule(depends(module("a"), "api", &[":b"]))
        .with_submodule(depends(module("b"), "api", &[":a"]))
        .build()
        .unwrap();

    let graph = build(&ModuleGenerator::all(), &root);
    assert_eq!(
        edge_pairs(&graph),
        vec![
            (":a".to_string(), ":b".to_string()),
            (":b".to_string(), ":a".to_string()),
        ]
    );
    assert!(rank_group(&graph).is_empty());
}

#[test]
fn test_excluded_module_and_configuration() {
    let generator = ModuleGenerator::builder()
        .with_include_module(|module| Ok(module.path() != ":feature"))
        .with_include_configuration(|configuration| Ok(configuration.name() != "api"))
        .build()
        .unwrap();

    let graph = build(&generator, &project());
    let nodes: Vec<_> = graph.nodes().map(|node| node.id.as_str()).collect();
    assert_eq!(nodes, vec![":app", ":core"]);
    assert_eq!(
        edge_pairs(&graph),
        vec![(":app".to_string(), ":core".to_string())]
    );
}

#[test]
fn test_mapper_label_and_edge_hook() {
    let generator = ModuleGenerator::builder()
        .with_name("highlighted")
        .with_label(Some(GraphLabel::new("Modules").with_font_size(None)))
        .with_module_mapper(|_| Ok(None))
        .with_edge_hook(|from, _to, kind| {
            Ok((from.path() == ":feature" && kind == RelationshipKind::Api)
                .then(|| EdgeAttributes::new().with_color(Color::RED)))
        })
        .build()
        .unwrap();

    let dot = GraphRenderer::to_dot(&build(&generator, &project())).unwrap();
    assert!(dot.contains(r#"graph [label="Modules",labelloc="t",labeljust="c",dpi="100"];"#));
    assert!(dot.contains(r#"":core" [label=":core"];"#));
    assert!(dot.contains(r#"":feature" -> ":core" [color="red"];"#));
    assert_eq!(generator.output_file_name(), "module-dependency-graph-highlighted.dot");
}

#[test]
fn test_hook_errors_propagate() {
    let generator = ModuleGenerator::builder()
        .with_edge_hook(|_, _, _| Err(miette::miette!("edge hook failed")))
        .build()
        .unwrap();

    let error = ModuleGraphBuilder::new(&generator)
        .build(&project())
        .unwrap_err();
    assert_eq!(error.to_string(), "edge hook failed");
}

#[test]
fn test_graph_hook_runs_last() {
    let generator = ModuleGenerator::builder()
        .with_graph_hook(|graph| {
            graph.set_rank_group(Vec::new());
            graph.node_defaults_mut().style = Some(Style::Rounded);
            Ok(())
        })
        .build()
        .unwrap();

    let dot = GraphRenderer::to_dot(&build(&generator, &project())).unwrap();
    assert!(!dot.contains("rank=same"));
    assert!(dot.contains(r#"node [style="rounded"];"#));
}

#[test]
fn test_reachable_from() {
    let root = project();
    let generator = ModuleGenerator::all();
    let builder = ModuleGraphBuilder::new(&generator);

    assert_eq!(
        builder.reachable_from(&root, ":app").unwrap(),
        vec![":core".to_string(), ":feature".to_string()]
    );
    assert_eq!(
        builder.reachable_from(&root, ":feature").unwrap(),
        vec![":core".to_string()]
    );
    assert!(builder.reachable_from(&root, ":docs").unwrap().is_empty());
    assert!(builder.reachable_from(&root, ":").unwrap().is_empty());
    assert!(builder.reachable_from(&root, ":unknown").is_err());
}
