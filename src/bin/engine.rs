//! Line-protocol driver: reads requests from stdin, writes events to
//! stdout and diagnostics to stderr.

use std::io::{self, BufReader};
use std::process::ExitCode;

use matchcore::Engine;

fn main() -> ExitCode {
    let mut engine = Engine::new();
    let stdin = BufReader::new(io::stdin());
    let stdout = io::stdout();
    let stderr = io::stderr();

    match engine.start_blocking(stdin, stdout.lock(), stderr.lock()) {
        Ok(Ok(())) => ExitCode::SUCCESS,
        Ok(Err(err)) => {
            eprintln!("I/O error: {}", err);
            ExitCode::FAILURE
        }
        Err(already_started) => {
            eprintln!("{}", already_started);
            ExitCode::FAILURE
        }
    }
}
