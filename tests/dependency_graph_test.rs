//! Tests for library dependency graphs

use dependency_graph_generator::common::ConfigBuilder;
use dependency_graph_generator::core::{Configuration, Coordinate, Module, ModuleBuilder, Resolution};
use dependency_graph_generator::dot::{EdgeAttributes, GraphLabel, Style};
use dependency_graph_generator::generator::{Generator, tint_dependency_by_group};
use dependency_graph_generator::graph::{DependencyGraphBuilder, Graph, GraphRenderer};
use pretty_assertions::assert_eq;

/// Resolution from `parent -> child` pairs and first-level names, all in the
/// `lib` group unless the name carries its own `group:` prefix
fn resolution(edges: &[(&str, &str)], first_level: &[&str]) -> Resolution {
    fn coordinate(name: &str) -> Coordinate {
        match name.split_once(':') {
            Some((group, name)) => Coordinate::new(group, name),
            None => Coordinate::new("lib", name),
        }
    }

    let mut resolution = Resolution::new();
    for (parent, child) in edges {
        let parent = resolution.component(coordinate(parent));
        let child = resolution.component(coordinate(child));
        resolution.add_child(parent, child);
    }
    for name in first_level {
        let id = resolution.component(coordinate(name));
        resolution.add_first_level(id);
    }
    resolution
}

fn module(name: &str, resolution: Resolution) -> ModuleBuilder {
    Module::builder()
        .with_name(name)
        .with_configuration(Configuration::new("releaseCompileClasspath").with_resolution(resolution))
}

fn build(generator: &Generator, root: &Module) -> Graph {
    DependencyGraphBuilder::new(generator).build(root).unwrap()
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
fn test_single_module_without_dependencies() {
    let root = Module::builder().with_name("M").build().unwrap();
    let graph = build(&Generator::all(), &root);

    let expected = r#"digraph "G" {
  node [fontname="Times New Roman"];
  "M" [label="M",shape="rectangle"];
  { rank=same; "M"; }
}
"#;
    assert_eq!(GraphRenderer::to_dot(&graph).unwrap(), expected);
}

#[test]
fn test_direct_and_transitive_path_to_same_library() {
    // M -> A -> B and M -> B
    let root = module("M", resolution(&[("a", "b")], &["a", "b"]))
        .build()
        .unwrap();
    let graph = build(&Generator::all(), &root);

    let expected = r#"digraph "G" {
  node [fontname="Times New Roman"];
  "M" [label="M",shape="rectangle"];
  "liba" [label="a",shape="rectangle"];
  "libb" [label="b",shape="rectangle"];
  { rank=same; "M"; }
  "M" -> "liba";
  "liba" -> "libb";
  "M" -> "libb";
}
"#;
    assert_eq!(GraphRenderer::to_dot(&graph).unwrap(), expected);
}

#[test]
fn test_diamond_records_each_edge_once() {
    let root = module(
        "M",
        resolution(&[("a", "c"), ("b", "c"), ("c", "d")], &["a", "b"]),
    )
    .build()
    .unwrap();
    let graph = build(&Generator::all(), &root);

    assert_eq!(graph.node_count(), 5);
    assert_eq!(
        edge_pairs(&graph),
        vec![
            ("M".to_string(), "liba".to_string()),
            ("liba".to_string(), "libc".to_string()),
            ("libc".to_string(), "libd".to_string()),
            ("M".to_string(), "libb".to_string()),
            ("libb".to_string(), "libc".to_string()),
        ]
    );
}

#[test]
fn test_cycle_terminates() {
    let root = module("M", resolution(&[("a", "b"), ("b", "a")], &["a"]))
        .build()
        .unwrap();
    let graph = build(&Generator::all(), &root);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(
        edge_pairs(&graph),
        vec![
            ("M".to_string(), "liba".to_string()),
            ("liba".to_string(), "libb".to_string()),
            ("libb".to_string(), "liba".to_string()),
        ]
    );
}

#[test]
fn test_independent_roots_share_rank() {
    fn project(x_dependencies: &[&str]) -> Module {
        Module::builder()
            .with_name("project")
            .with_submodule(
                module("x", resolution(&[], x_dependencies)).with_group("com.example"),
            )
            .with_submodule(Module::builder().with_name("y").with_group("com.example"))
            .build()
            .unwrap()
    }

    let graph = build(&Generator::all(), &project(&[]));
    assert_eq!(rank_group(&graph), vec!["comexamplex", "comexampley"]);
    assert_eq!(graph.edge_count(), 0);

    // x now depends on the artifact published by y
    let graph = build(&Generator::all(), &project(&["com.example:y"]));
    assert_eq!(rank_group(&graph), vec!["comexamplex"]);
    assert_eq!(
        edge_pairs(&graph),
        vec![("comexamplex".to_string(), "comexampley".to_string())]
    );
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_excluded_dependency_drops_only_its_subtree() {
    let root = module(
        "M",
        resolution(
            &[
                ("excluded:x", "shared"),
                ("excluded:x", "only"),
                ("y", "shared"),
            ],
            &["excluded:x", "y"],
        ),
    )
    .build()
    .unwrap();

    let generator = Generator::builder()
        .with_include_dependency(|dependency| Ok(dependency.group() != "excluded"))
        .build()
        .unwrap();
    let graph = build(&generator, &root);

    let nodes: Vec<_> = graph.nodes().map(|node| node.id.as_str()).collect();
    assert_eq!(nodes, vec!["M", "liby", "libshared"]);
    assert_eq!(
        edge_pairs(&graph),
        vec![
            ("M".to_string(), "liby".to_string()),
            ("liby".to_string(), "libshared".to_string()),
        ]
    );
}

#[test]
fn test_skipped_children() {
    let root = module("M", resolution(&[("a", "b")], &["a"]))
        .build()
        .unwrap();
    let generator = Generator::builder()
        .with_include_children(|dependency| Ok(dependency.name() != "a"))
        .build()
        .unwrap();

    let graph = build(&generator, &root);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_display_names() {
    let root = module(
        "M",
        resolution(
            &[],
            &[
                "android.arch.lifecycle:runtime",
                "com.squareup.sqldelight:runtime",
                "org.jetbrains:annotations",
                "io.reactivex.rxjava2:rxjava",
            ],
        ),
    )
    .build()
    .unwrap();
    let graph = build(&Generator::all(), &root);

    let labels: Vec<_> = graph
        .nodes()
        .skip(1)
        .filter_map(|node| node.attributes.label.clone())
        .collect();
    assert_eq!(
        labels,
        vec![
            "lifecycle-runtime",
            "sqldelight-runtime",
            "jetbrains-annotations",
            "rxjava"
        ]
    );
}

#[test]
fn test_default_configuration_filter() {
    let root = Module::builder()
        .with_name("M")
        .with_configuration(
            Configuration::new("debugUnitTestCompileClasspath")
                .with_resolution(resolution(&[], &["unit"])),
        )
        .with_configuration(
            Configuration::new("debugAndroidTestCompileClasspath")
                .with_resolution(resolution(&[], &["android"])),
        )
        .with_configuration(
            Configuration::new("implementation").with_resolution(resolution(&[], &["declared"])),
        )
        .with_configuration(
            Configuration::new("debugCompileClasspath").with_resolution(resolution(&[], &["debug"])),
        )
        .build()
        .unwrap();

    let graph = build(&Generator::all(), &root);
    let nodes: Vec<_> = graph.nodes().map(|node| node.id.as_str()).collect();
    assert_eq!(nodes, vec!["M", "libdebug"]);
}

#[test]
fn test_tint_by_group() {
    let root = module(
        "M",
        resolution(
            &[],
            &[
                "io.reactivex.rxjava2:rxjava",
                "io.reactivex.rxjava2:rxandroid",
                "org.jetbrains.kotlin:kotlin-stdlib",
            ],
        ),
    )
    .build()
    .unwrap();
    let generator = Generator::builder()
        .with_dependency_mapper(tint_dependency_by_group)
        .build()
        .unwrap();
    let graph = build(&generator, &root);

    let fills: Vec<_> = graph
        .nodes()
        .skip(1)
        .map(|node| node.attributes.fill_color.as_ref().unwrap().to_string())
        .collect();
    assert_eq!(fills, vec!["#0afeb3", "#0afeb3", "#9b5ba3"]);
}

#[test]
fn test_hook_errors_propagate() {
    let root = module("M", resolution(&[], &["a"])).build().unwrap();
    let generator = Generator::builder()
        .with_include_dependency(|dependency| {
            Err(miette::miette!("cannot decide on {}", dependency.name()))
        })
        .build()
        .unwrap();

    let error = DependencyGraphBuilder::new(&generator)
        .build(&root)
        .unwrap_err();
    assert_eq!(error.to_string(), "cannot decide on a");
}

#[test]
fn test_label_edge_and_graph_hooks() {
    let root = module("M", resolution(&[("a", "b")], &["a"]))
        .build()
        .unwrap();
    let generator = Generator::builder()
        .with_label(Some(GraphLabel::new("Header")))
        .with_edge_hook(|container, _dependency| {
            Ok(container
                .as_module()
                .is_none()
                .then(|| EdgeAttributes::new().with_style(Style::Dashed)))
        })
        .with_graph_hook(|graph| {
            graph.set_directed(false);
            Ok(())
        })
        .build()
        .unwrap();

    let dot = GraphRenderer::to_dot(&build(&generator, &root)).unwrap();
    let expected = r#"graph "G" {
  graph [label="Header",labelloc="t",labeljust="c",fontsize="24"];
  node [fontname="Times New Roman"];
  "M" [label="M",shape="rectangle"];
  "liba" [label="a",shape="rectangle"];
  "libb" [label="b",shape="rectangle"];
  { rank=same; "M"; }
  "M" -- "liba";
  "liba" -- "libb" [style="dashed"];
}
"#;
    assert_eq!(dot, expected);
}

#[test]
fn test_output_is_deterministic() {
    let root = module(
        "M",
        resolution(&[("a", "c"), ("b", "c"), ("c", "a")], &["b", "a"]),
    )
    .build()
    .unwrap();

    let first = GraphRenderer::to_dot(&build(&Generator::all(), &root)).unwrap();
    for _ in 0..5 {
        let again = GraphRenderer::to_dot(&build(&Generator::all(), &root)).unwrap();
        assert_eq!(first, again);
    }
}
