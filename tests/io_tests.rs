use std::io::Write;

use ordered_float::OrderedFloat;
use shortest_paths::graph::Graph;
use shortest_paths::{parse_graph, Error, GraphFormat};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_basic_file() {
    let file = write_temp("A B 1.0\nA C 2.0\nB C 4\nS\n");
    let graph = parse_graph(GraphFormat::Basic, file.path()).unwrap();

    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 3);
    let labels: Vec<&str> = graph.nodes().map(|(_, label)| label).collect();
    assert_eq!(labels, ["A", "B", "C", "S"]);

    let b = graph.node("B").unwrap();
    let c = graph.node("C").unwrap();
    assert_eq!(graph.edge_weight(b, c), Some(OrderedFloat(4.0)));
}

#[test]
fn test_parse_db_file() {
    let file = write_temp(
        "start_code,end_code,length,street\n\
         1001,1002,55.25,Main St\n\
         1002,1003,10.0,High St\n",
    );
    let graph = parse_graph(GraphFormat::Db, file.path()).unwrap();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 4);
    let start = graph.node("1001").unwrap();
    let end = graph.node("1002").unwrap();
    assert_eq!(graph.edge_weight(end, start), Some(OrderedFloat(55.25)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    let err = parse_graph(GraphFormat::Basic, &path).unwrap_err();
    match err {
        Error::Io { path: reported, .. } => assert!(reported.ends_with("missing.txt")),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

#[test]
fn test_unreadable_file_is_io_error_for_every_format() {
    // Opening a directory succeeds on Linux, reading it does not
    let dir = tempfile::tempdir().unwrap();
    let expected = dir.path().display().to_string();

    for format in [GraphFormat::Basic, GraphFormat::Db] {
        let err = parse_graph(format, dir.path()).unwrap_err();
        match err {
            Error::Io { path, .. } => assert_eq!(path, expected),
            other => panic!("{}: expected an I/O error, got {:?}", format, other),
        }
    }
}

#[test]
fn test_invalid_utf8_is_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"A B 1\n\xff\xfe 2\n").unwrap();
    file.flush().unwrap();

    let err = parse_graph(GraphFormat::Basic, file.path()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 2, .. }));
}

#[test]
fn test_unsupported_format_fails_before_reading() {
    let err = "graphml".parse::<GraphFormat>().unwrap_err();
    assert_eq!(err.to_string(), "Unsupported file type: graphml");
}

#[test]
fn test_malformed_basic_line_reports_line_number() {
    let file = write_temp("A B 1\n\n# note\nA B C D\n");
    let err = parse_graph(GraphFormat::Basic, file.path()).unwrap_err();
    assert!(matches!(err, Error::Parse { line: 4, .. }));
}
