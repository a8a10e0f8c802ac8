//! # Bazaar Console Library
//!
//! A line-oriented stand-in for the three role views. Each input line is
//! one command; each reply is written to the output as JSON.
//!
//! ## Module Organization
//! ```text
//! bazaar_console/
//! ├── lib.rs          ◄─── You are here (setup & session loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (Store + config)
//! │   └── config.rs   ◄─── Configuration from env
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── dto.rs      ◄─── View-facing DTOs
//! │   ├── customer.rs ◄─── Catalogue, ordering
//! │   ├── vendor.rs   ◄─── Listings, incoming orders
//! │   └── admin.rs    ◄─── Approvals, order overview
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Example Session
//! ```text
//! > catalog
//! > order p1 Dana
//! > add v_a 49.99 Steel Ladder
//! > approve prod_…
//! > set-status o1 shipped
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use commands::{Command, Reply};
use error::ApiError;
use state::{AppState, ConfigState};

/// Runs the console against stdin/stdout.
pub fn run() -> io::Result<()> {
    init_tracing();

    let config = ConfigState::from_env();
    info!(store_name = %config.store_name, "Starting Bazaar console");

    let mut state = AppState::seeded(config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut state, stdin.lock(), stdout.lock())
}

/// Processes commands from `input` until `quit` or end of input.
///
/// Blank lines and lines starting with `#` are skipped. Failures are
/// written as `{"error": {...}}` and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    mut output: W,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;

        let reply = match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(command)) => commands::execute(state, command),
            Err(err) => Err(err),
        };

        match reply {
            Ok(Reply::Quit) => break,
            Ok(Reply::Text(text)) => writeln!(output, "{text}")?,
            Ok(Reply::Json(value)) => write_json(&mut output, &value)?,
            Err(err) => {
                warn!(code = ?err.code, message = %err.message, "Command failed");
                write_json(&mut output, &serde_json::json!({ "error": err }))?;
            }
        }
    }

    output.flush()
}

fn write_json<W: Write>(output: &mut W, value: &serde_json::Value) -> io::Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, ApiError::from(e)))?;
    writeln!(output, "{text}")
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bazaar=trace` - Show trace for bazaar crates only
/// - Default: WARN, INFO for bazaar crates
///
/// Logs go to stderr; stdout carries only command replies.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,bazaar=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
