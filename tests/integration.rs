//! Integration tests for the piezas engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_piezas");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start piezas");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Drops that fill the board column by column, O forfeiting every turn.
fn all_x_fill() -> Vec<String> {
    let mut cmds = Vec::new();
    for col in 0..4 {
        for _ in 0..3 {
            cmds.push(format!("drop {}", col));
            cmds.push("drop -1".to_string());
        }
    }
    cmds
}

#[test]
fn handshake_ends_with_piezasok() {
    let lines = run_engine(&["piezas", "quit"]);

    assert_eq!(lines.first().map(String::as_str), Some("id name piezas"));
    assert!(lines.iter().any(|l| l == "rows 3"));
    assert!(lines.iter().any(|l| l == "cols 4"));
    assert_eq!(lines.last().map(String::as_str), Some("piezasok"));

    for opt in lines.iter().filter(|l| l.starts_with("option ")) {
        assert!(opt.contains(" type "), "option line missing type: {}", opt);
    }
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn unknown_and_malformed_commands_are_ignored() {
    let lines = run_engine(&["foobar", "drop", "drop left", "piece 1", "", "isready", "quit"]);
    assert_eq!(lines, vec!["readyok"]);
}

#[test]
fn drops_and_queries() {
    let lines = run_engine(&[
        "drop 0",
        "piece 0 0",
        "drop 0",
        "piece 1 0",
        "piece 2 0",
        "piece 3 0",
        "piece 0 4",
        "turn",
        "quit",
    ]);
    assert_eq!(
        lines,
        vec![
            "dropped x",
            "piece x",
            "dropped o",
            "piece o",
            "piece blank",
            "piece invalid",
            "piece invalid",
            "turn x",
        ]
    );
}

#[test]
fn full_column_and_off_board_drops_forfeit() {
    let lines = run_engine(&["drop 0", "drop 0", "drop 0", "drop 0", "drop 4", "drop -1", "turn", "quit"]);
    assert_eq!(
        lines,
        vec![
            "dropped x",
            "dropped o",
            "dropped x",
            "dropped blank",
            "dropped invalid",
            "dropped invalid",
            "turn x",
        ]
    );
}

#[test]
fn all_x_board_wins_for_x() {
    let mut cmds = all_x_fill();
    cmds.push("state".to_string());
    cmds.push("quit".to_string());
    let refs: Vec<&str> = cmds.iter().map(String::as_str).collect();

    let lines = run_engine(&refs);
    assert_eq!(lines.last().map(String::as_str), Some("state winner x"));
}

#[test]
fn leader_reset_option_changes_scoring() {
    let mut cmds = vec!["setoption name Scoring value leaderreset".to_string()];
    cmds.extend(all_x_fill());
    cmds.push("state".to_string());
    cmds.push("quit".to_string());
    let refs: Vec<&str> = cmds.iter().map(String::as_str).collect();

    let lines = run_engine(&refs);
    assert_eq!(lines.last().map(String::as_str), Some("state tie"));
}

#[test]
fn striped_board_is_a_tie() {
    let mut cmds = vec!["state"];
    for _ in 0..3 {
        cmds.extend(["drop 0", "drop 1", "drop 2", "drop 3"]);
    }
    cmds.extend(["state", "quit"]);

    let lines = run_engine(&cmds);
    assert_eq!(lines.first().map(String::as_str), Some("state ongoing"));
    assert_eq!(lines.last().map(String::as_str), Some("state tie"));
}

#[test]
fn reset_starts_over() {
    let lines = run_engine(&["drop 2", "drop 2", "reset", "position", "drop 1", "newgame", "turn", "quit"]);
    assert_eq!(
        lines,
        vec![
            "dropped x",
            "dropped o",
            "position ..../..../.... x",
            "dropped x",
            "turn x",
        ]
    );
}

#[test]
fn show_board_prints_grid_after_drop() {
    let lines = run_engine(&["setoption name ShowBoard value true", "drop 1", "quit"]);
    assert_eq!(
        lines,
        vec!["dropped x", "| | | | |", "| | | | |", "| |X| | |", "turn o"]
    );
}

#[test]
fn snapshot_is_json() {
    let lines = run_engine(&["drop 3", "snapshot", "quit"]);
    assert_eq!(lines.len(), 2);
    let value: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(value["turn"], "o");
    assert_eq!(value["state"], "invalid");
    assert_eq!(value["rows"][0], "   X");
}

#[test]
fn eof_without_quit_exits_cleanly() {
    let lines = run_engine(&["drop 0"]);
    assert_eq!(lines, vec!["dropped x"]);
}
