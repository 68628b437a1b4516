use std::env;
use std::process::ExitCode;

use chess_rules::board::{check_report, Board};
use chess_rules::cli::options::CliOptions;
use chess_rules::cli::print::{render_board, render_report};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let board = if args.is_empty() {
        Board::new()
    } else {
        match Board::try_from_fen(&args.join(" ")) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("error: {e}");
                eprintln!("usage: check_status [fen placement]");
                return ExitCode::from(2);
            }
        }
    };

    print!("{}", render_board(&board, None, &CliOptions::default()));
    match check_report(&board) {
        Ok(report) => {
            print!("{}", render_report(&report));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
