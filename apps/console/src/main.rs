//! # Bazaar Console Entry Point
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging, to stderr)
//! 2. Load configuration from `BAZAAR_*` environment variables
//! 3. Build the seeded store
//! 4. Read commands from stdin until `quit` or end of input

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match bazaar_console::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bazaar-console: {err}");
            ExitCode::FAILURE
        }
    }
}
