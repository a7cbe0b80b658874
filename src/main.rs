//! Console driver for a single game.
//!
//! Reads one command per line from stdin. A bare move such as `e2-e4` plays
//! it for the side to move; `help` lists the other commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use sleddog_chess::chess_errors::{ChessErrors, ChessResult};
use sleddog_chess::config::EngineConfig;
use sleddog_chess::game_state::chess_types::{Color, Square};
use sleddog_chess::move_generation::legal_move_apply::legal_move_list;
use sleddog_chess::move_generation::perft::perft_multi_threaded;
use sleddog_chess::session::game_session::GameSession;
use sleddog_chess::session::opponent::OpponentResponse;
use sleddog_chess::utils::board_config::{board_config_from_json, board_to_json};
use sleddog_chess::utils::long_algebraic::{move_to_long_algebraic, parse_long_algebraic};
use sleddog_chess::utils::render_board::render_board;

#[derive(Parser, Debug)]
#[command(name = "sleddog_chess", version, about = "Chess rules engine console")]
struct Cli {
    /// Start from this FEN instead of the standard position.
    #[arg(long, conflicts_with_all = ["random", "board"])]
    fen: Option<String>,

    /// Start from a JSON square-to-piece-code mapping, White to move.
    #[arg(long, conflicts_with = "random")]
    board: Option<String>,

    /// Start from a randomly populated board.
    #[arg(long)]
    random: bool,

    /// Percent chance that a square of a random board holds a piece.
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    piece_chance: Option<u8>,

    /// JSON engine configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print perft counts of the initial position to this depth and exit.
    #[arg(long)]
    perft: Option<u8>,
}

const HELP: &str = "\
<from>-<to>[piece]   play a move, e.g. e2-e4 or e7-e8q
legal <square>       legal destinations of the piece on <square>
moves                every legal move for the side to move
board | mapping | fen | status | history
request              print the opponent request JSON and wait for a reply
reply <json>         deliver the opponent response JSON
expire               time out the pending opponent request if its deadline passed
quit";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(Cli::parse()) {
        error!(error = %err, "fatal");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> ChessResult<()> {
    let mut config = match &cli.config {
        Some(path) => EngineConfig::from_path(path)?,
        None => EngineConfig::default(),
    };
    if let Some(chance) = cli.piece_chance {
        config.random_piece_chance = chance;
    }

    let mut session = if let Some(fen) = &cli.fen {
        GameSession::from_fen(fen, config)?
    } else if let Some(json) = &cli.board {
        GameSession::from_board_config(&board_config_from_json(json)?, Color::White, config)?
    } else if cli.random {
        GameSession::random(&mut rand::rng(), config)?
    } else {
        GameSession::new_game(config)?
    };

    if let Some(depth) = cli.perft {
        let counts = perft_multi_threaded(session.state(), depth, session.config().rules())?;
        println!("{counts:?}");
        return Ok(());
    }

    info!(fen = %session.fen(), "game started");
    println!("{}", render_board(&session.state().board));

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| ChessErrors::FormatError(format!("stdin: {err}")))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        // Bad input is reported and the loop continues.
        if let Err(err) = handle_command(&mut session, line) {
            println!("error: {err}");
        }
        io::stdout().flush().ok();
    }

    Ok(())
}

fn handle_command(session: &mut GameSession, line: &str) -> ChessResult<()> {
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match command {
        "help" => println!("{HELP}"),
        "board" => println!("{}", render_board(&session.state().board)),
        "mapping" => println!("{}", board_to_json(&session.state().board)?),
        "fen" => println!("{}", session.fen()),
        "status" => println!("{:?}", session.status()?),
        "history" => println!("{}", session.movetext()),
        "legal" => {
            let square = Square::from_algebraic(rest)?;
            let names: Vec<String> = session
                .legal_destinations(square)?
                .iter()
                .map(|to| to.to_algebraic())
                .collect();
            println!("{}", names.join(" "));
        }
        "moves" => {
            let moves = legal_move_list(session.state(), session.config().rules())?;
            let names: Vec<String> = moves.into_iter().map(move_to_long_algebraic).collect();
            println!("{}", names.join(" "));
        }
        "request" => {
            println!("{}", session.request_opponent_move()?.to_json()?);
            if let Some(deadline) = session.opponent_deadline() {
                println!("reply due by {deadline}");
            }
        }
        "reply" => match session.receive_opponent_response(&OpponentResponse::from_json(rest)?)? {
            Some(entry) => println!("{} {}", entry.notation, entry.resulting_fen),
            None => println!("opponent passed"),
        },
        "expire" => {
            let deadline = session.opponent_deadline();
            if !session.expire_opponent_request(Utc::now())? {
                if let Some(deadline) = deadline {
                    println!("deadline not reached, reply due by {deadline}");
                }
            }
        }
        _ => {
            let entry = session.apply_local_move(parse_long_algebraic(line)?)?;
            println!("{} {}", entry.notation, entry.resulting_fen);
        }
    }

    Ok(())
}
