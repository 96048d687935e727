use ordered_float::OrderedFloat;
use shortest_paths::graph::{LabeledGraph, MutableGraph};
use shortest_paths::report::NodeDistance;
use shortest_paths::{Report, ShortestPaths, Weight};

fn sample_graph() -> LabeledGraph<Weight> {
    let mut graph: LabeledGraph<Weight> = LabeledGraph::new();
    for (from, to, weight) in [("A", "B", 1.0), ("A", "C", 2.0), ("C", "D", 2.5)] {
        let from = graph.get_or_create_node(from);
        let to = graph.get_or_create_node(to);
        graph.add_edge(from, to, OrderedFloat(weight));
    }
    graph.get_or_create_node("Z");
    graph
}

fn report_for(graph: &LabeledGraph<Weight>, origin: &str, destination: Option<&str>) -> Report {
    let mut engine: ShortestPaths<Weight, _> = ShortestPaths::new(graph);
    let result = engine.compute(graph.node(origin).unwrap()).unwrap();
    let destination = destination.map(|label| graph.node(label).unwrap());
    Report::build(graph, result, destination)
}

#[test]
fn test_reachable_report_skips_unreachable_nodes() {
    let graph = sample_graph();
    let report = report_for(&graph, "A", None);

    match &report {
        Report::Reachable { origin, distances } => {
            assert_eq!(origin, "A");
            assert_eq!(
                distances,
                &vec![
                    NodeDistance { node: "A".into(), distance: 0.0 },
                    NodeDistance { node: "B".into(), distance: 1.0 },
                    NodeDistance { node: "C".into(), distance: 2.0 },
                    NodeDistance { node: "D".into(), distance: 4.5 },
                ]
            );
        }
        other => panic!("unexpected report {:?}", other),
    }

    assert_eq!(
        report.to_string(),
        "Shortest paths from A:\nA: 0.0\nB: 1.0\nC: 2.0\nD: 4.5"
    );
}

#[test]
fn test_path_report() {
    let graph = sample_graph();
    let report = report_for(&graph, "A", Some("D"));

    assert_eq!(
        report,
        Report::Path {
            origin: "A".into(),
            destination: "D".into(),
            nodes: vec!["A".into(), "C".into(), "D".into()],
            length: 4.5,
        }
    );
    assert_eq!(report.to_string(), "A C D 4.5");
}

#[test]
fn test_origin_as_destination() {
    let graph = sample_graph();
    let report = report_for(&graph, "B", Some("B"));
    assert_eq!(report.to_string(), "B 0.0");
}

#[test]
fn test_no_path_report() {
    let graph = sample_graph();
    let report = report_for(&graph, "A", Some("Z"));

    assert_eq!(
        report,
        Report::NoPath {
            origin: "A".into(),
            destination: "Z".into(),
        }
    );
    assert_eq!(report.to_string(), "No path exists from A to Z");
}

#[test]
fn test_json_report() {
    let graph = sample_graph();
    let report = report_for(&graph, "A", Some("B"));

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["kind"], "path");
    assert_eq!(json["nodes"], serde_json::json!(["A", "B"]));
    assert_eq!(json["length"], 1.0);
}
