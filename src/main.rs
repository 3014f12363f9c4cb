use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use minimax_chess::cli::Cli;
use minimax_chess::{Board, EngineController};

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut board = match cli.board() {
        Ok(board) => board,
        Err(e) => {
            error!("bad --fen: {e}");
            return ExitCode::FAILURE;
        }
    };
    let controller = EngineController::new(cli.engine_config());

    if board.side_to_move() != cli.human {
        controller.compute_reply(&mut board);
    }

    match play(&controller, &mut board) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("console error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Read moves from stdin until the game ends, input closes, or "quit".
fn play(controller: &EngineController, board: &mut Board) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    loop {
        writeln!(stdout, "\n{board}")?;
        if !board.status().is_in_progress() {
            writeln!(stdout, "Game over: {}", board.status())?;
            return Ok(());
        }
        write!(stdout, "Your move ({}): ", board.side_to_move())?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let text = line.trim();
        match text {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            _ => {}
        }

        let result = board
            .parse_move(text)
            .and_then(|mv| controller.process_move(board, &mv));
        if let Err(e) = result {
            writeln!(stdout, "{e}")?;
        }
    }
}
