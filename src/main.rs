//! Piezas -- a 3x4 drop-piece board game engine.
//!
//! This binary reads commands from stdin and writes responses to stdout.
//! Diagnostics go to stderr through `env_logger`; set `RUST_LOG=debug` to
//! see forfeits and scoring.

use std::io::{self, BufRead, Write};

use log::{error, warn};

use piezas::engine::Engine;
use piezas::protocol::parser::{parse_command, Command};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if let Err(e) = run(stdin.lock(), &mut out) {
        error!("output failed: {}", e);
        std::process::exit(1);
    }
}

/// Runs the protocol loop until `quit` or end of input.
fn run<R: BufRead, W: Write>(input: R, out: &mut W) -> io::Result<()> {
    let mut engine = Engine::new();

    for line in input.lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Ok(Some(c)) => c,
            Ok(None) => continue,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match cmd {
            Command::Hello => engine.handle_hello(out)?,
            Command::IsReady => engine.handle_isready(out)?,
            Command::SetOption { name, value } => {
                if let Err(e) = engine.set_option(&name, value.as_deref()) {
                    warn!("{}", e);
                }
            }
            Command::NewGame => engine.new_game(),
            Command::Drop { column } => engine.handle_drop(column, out)?,
            Command::PieceAt { row, column } => engine.handle_piece(row, column, out)?,
            Command::State => engine.handle_state(out)?,
            Command::Turn => engine.handle_turn(out)?,
            Command::Board => engine.handle_board(out)?,
            Command::Position => engine.handle_position(out)?,
            Command::Snapshot => engine.handle_snapshot(out)?,
            Command::Quit => break,
        }
    }

    out.flush()
}
