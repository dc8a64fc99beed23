use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vertex-cover-ilp"))
        .args(args)
        .env("RUST_LOG", "off")
        .env_remove("VC_SEED")
        .env_remove("VC_SOLVER")
        .env_remove("VC_FORMAT")
        .output()
        .expect("failed to launch binary")
}

#[test]
fn test_cli_given_valid_arguments_should_print_text_report() {
    let output = run_cli(&["0.3", "10", "--seed", "7"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Minimum-weight vertex cover (GLPK)"));
    assert!(stdout.contains("seed:             7"));
    assert!(stdout.contains("nodes:            10"));
    assert!(stdout.contains("compilation time:"));
    assert!(stdout.contains("solve time:"));
    assert!(stdout.contains("cover nodes:"));
}

#[test]
fn test_cli_given_same_seed_should_print_same_cover() {
    let cover_line = |output: Output| {
        String::from_utf8_lossy(&output.stdout)
            .lines()
            .find(|l| l.contains("cover nodes:"))
            .map(str::to_string)
    };
    let first = cover_line(run_cli(&["0.4", "12", "--seed", "11"]));
    let second = cover_line(run_cli(&["0.4", "12", "--seed", "11"]));
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_cli_given_json_format_should_print_parseable_report() {
    let output = run_cli(&["0.5", "6", "--seed", "3", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["seed"], 3);
    assert_eq!(value["node_count"], 6);
    assert!(value["cover"]["nodes"].is_array());
}

#[test]
fn test_cli_given_zero_nodes_should_succeed_with_empty_cover() {
    let output = run_cli(&["0.3", "0", "--seed", "1"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("edges:            0"));
    assert!(stdout.contains("cover nodes:      []"));
}

#[test]
fn test_cli_given_probability_out_of_range_should_exit_non_zero() {
    for args in [&["1.5", "10"][..], &["-0.2", "10"][..], &["abc", "10"][..]] {
        let output = run_cli(args);
        assert!(!output.status.success(), "{:?} should be rejected", args);
        assert_eq!(output.status.code(), Some(2));
    }
}

#[test]
fn test_cli_given_negative_node_count_should_exit_non_zero() {
    let output = run_cli(&["0.5", "-3"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_given_unknown_solver_should_exit_non_zero() {
    let output = run_cli(&["0.5", "5", "--solver", "cplex"]);
    assert_eq!(output.status.code(), Some(2));
}
