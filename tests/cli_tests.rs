use std::io::Write;
use std::process::Command;

use tempfile::NamedTempFile;

fn basic_graph() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "A B 5").unwrap();
    writeln!(file, "A C 2").unwrap();
    writeln!(file, "C B 1").unwrap();
    writeln!(file, "D").unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_shortest_paths"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn test_lists_reachable_nodes() {
    let file = basic_graph();
    let (ok, stdout, _) = run(&["basic", file.path().to_str().unwrap(), "A"]);

    assert!(ok);
    assert_eq!(stdout, "Shortest paths from A:\nA: 0.0\nB: 3.0\nC: 2.0\n");
}

#[test]
fn test_prints_path_and_length() {
    let file = basic_graph();
    let (ok, stdout, _) = run(&["basic", file.path().to_str().unwrap(), "A", "B"]);

    assert!(ok);
    assert_eq!(stdout, "A C B 3.0\n");
}

#[test]
fn test_reports_missing_path() {
    let file = basic_graph();
    let (ok, stdout, _) = run(&["basic", file.path().to_str().unwrap(), "A", "D"]);

    assert!(ok);
    assert_eq!(stdout, "No path exists from A to D\n");
}

#[test]
fn test_missing_file_aborts_cleanly() {
    let (ok, stdout, stderr) = run(&["basic", "/nonexistent/graph.txt", "A"]);

    assert!(!ok);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Could not open file /nonexistent/graph.txt"));
}

#[test]
fn test_directory_as_graph_file_aborts_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().to_str().unwrap();

    for format in ["basic", "db"] {
        let (ok, stdout, stderr) = run(&[format, path, "A"]);
        assert!(!ok);
        assert!(stdout.is_empty());
        assert!(stderr.contains(&format!("Could not open file {}", path)));
    }
}

#[test]
fn test_unknown_format_and_node() {
    let file = basic_graph();
    let path = file.path().to_str().unwrap();

    let (ok, _, stderr) = run(&["xml", path, "A"]);
    assert!(!ok);
    assert!(stderr.contains("Unsupported file type: xml"));

    let (ok, _, stderr) = run(&["basic", path, "Q"]);
    assert!(!ok);
    assert!(stderr.contains("Unknown node label: Q"));
}
