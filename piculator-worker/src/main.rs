//! Piculator worker
//!
//! Line-delimited JSON protocol over stdio:
//! - `{"type":"init","algorithm":"chudnovsky","precision":100}` -> `{"ok":true}`
//! - `{"type":"advance"}` -> `{"digits":"3.1415...","deltas":[...]}`
//!
//! Errors are reported inline as `{"error":"..."}` and never terminate the
//! loop. Logs go to stderr so stdout stays a clean response stream.
//!
//! Alternatively `piculator-worker <algorithm> <digits> <steps>` runs a
//! one-shot computation and prints the final frame.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use piculator::{AlgorithmKind, DisplayFrame, Stepper};

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Request {
    Init { algorithm: String, precision: usize },
    Advance,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Response {
    Ok { ok: bool },
    Frame(DisplayFrame),
    Error { error: String },
}

fn handle_request(stepper: &mut Stepper, request: Request) -> Response {
    match request {
        Request::Init { algorithm, precision } => {
            match stepper.initialize(&algorithm, precision) {
                Ok(()) => {
                    info!(algorithm = %algorithm, precision, "run initialized");
                    Response::Ok { ok: true }
                }
                Err(e) => {
                    error!(algorithm = %algorithm, precision, "init failed: {}", e);
                    Response::Error { error: e.to_string() }
                }
            }
        }
        Request::Advance => match stepper.advance() {
            Ok(frame) => {
                debug!(width = frame.digits.len(), "frame produced");
                Response::Frame(frame)
            }
            Err(e) => {
                error!("advance failed: {}", e);
                Response::Error { error: e.to_string() }
            }
        },
    }
}

fn serve() -> ExitCode {
    let mut stepper = Stepper::new();

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    info!("worker ready, waiting for requests");

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let response = match serde_json::from_str::<Request>(line) {
                    Ok(request) => handle_request(&mut stepper, request),
                    Err(e) => {
                        error!("unparseable request: {}", e);
                        Response::Error {
                            error: format!("parse error: {}", e),
                        }
                    }
                };

                let json = match serde_json::to_string(&response) {
                    Ok(json) => json,
                    Err(e) => {
                        error!("failed to encode response: {}", e);
                        return ExitCode::FAILURE;
                    }
                };

                let mut stdout = io::stdout().lock();
                if let Err(e) = writeln!(stdout, "{}", json) {
                    error!("error writing response: {}", e);
                    break;
                }
                if let Err(e) = stdout.flush() {
                    error!("error flushing stdout: {}", e);
                    break;
                }
            }
            Err(e) => {
                error!("error reading input: {}", e);
                break;
            }
        }
    }

    info!("worker shutting down");
    ExitCode::SUCCESS
}

/// `piculator-worker <algorithm> <digits> <steps>`
fn one_shot(algorithm: &str, digits_arg: &str, steps_arg: &str) -> ExitCode {
    let digits: usize = match digits_arg.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("invalid digit count: {}", digits_arg);
            return ExitCode::FAILURE;
        }
    };
    let steps: u64 = match steps_arg.parse() {
        Ok(n) if n > 0 => n,
        _ => {
            eprintln!("invalid step count: {}", steps_arg);
            return ExitCode::FAILURE;
        }
    };

    let mut stepper = Stepper::new();
    if let Err(e) = stepper.initialize(algorithm, digits) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let mut last = None;
    for _ in 0..steps {
        match stepper.advance() {
            Ok(frame) => last = Some(frame),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if let Some(frame) = last {
        println!("{}", frame.digits);
    }
    ExitCode::SUCCESS
}

fn usage() -> ExitCode {
    eprintln!("usage: piculator-worker                       serve JSON requests on stdio");
    eprintln!("       piculator-worker <algorithm> <digits> <steps>");
    eprint!("algorithms:");
    for kind in AlgorithmKind::ALL {
        eprint!(" {}", kind);
    }
    eprintln!();
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => serve(),
        [algorithm, digits, steps] => one_shot(algorithm, digits, steps),
        _ => usage(),
    }
}
