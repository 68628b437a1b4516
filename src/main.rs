use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match chess_rules::cli::run_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("i/o error: {e}");
            ExitCode::FAILURE
        }
    }
}
