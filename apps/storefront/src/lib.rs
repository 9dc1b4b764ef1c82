//! # Scent Storefront Library
//!
//! Core library for the Scent Store storefront shell.
//! This is the main entry point that configures and runs the read loop.
//!
//! ## Module Organization
//! ```text
//! scent_storefront/
//! ├── lib.rs          ◄─── You are here (logging & run loop)
//! ├── shell.rs        ◄─── Line tokenizer, clap grammar, dispatch
//! ├── render.rs       ◄─── Text / JSON output
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Arc<Mutex<Storefront>> wrapper
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── catalog.rs  ◄─── Product grid and search
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   ├── checkout.rs ◄─── Order placement
//! │   ├── admin.rs    ◄─── Login and catalog management
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod render;
pub mod shell;
pub mod state;

use chrono::{Datelike, Utc};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

use shell::{Shell, ShellError, Step};
use state::{ConfigState, StoreState};

/// Runs the storefront shell on stdin/stdout until `quit` or end of input.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Shell Startup                                     │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, overridden by SCENT_* environment variables             │
/// │                                                                         │
/// │  2. Seed the Store ───────────────────────────────────────────────────► │
/// │     • "Perfume 1".."Perfume N" with placeholder images                  │
/// │                                                                         │
/// │  3. Print Banner ─────────────────────────────────────────────────────► │
/// │     • Store name and "© <year> <store name>" footer                     │
/// │                                                                         │
/// │  4. Read Loop ────────────────────────────────────────────────────────► │
/// │     • One command per line, rendered as text or JSON                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run(json: bool) -> Result<(), ShellError> {
    let config = ConfigState::from_env();
    info!(
        store_name = %config.store_name,
        seed_count = config.seed_count,
        "Starting storefront"
    );

    let store = StoreState::from_config(&config);
    let mut shell = Shell::new(store, config, json);

    let mut stdout = tokio::io::stdout();
    let banner = shell.renderer().banner(Utc::now().year());
    if !banner.is_empty() {
        stdout.write_all(format!("{banner}\n").as_bytes()).await?;
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(shell.prompt().as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match shell.execute(&line) {
            Step::Print(out) => stdout.write_all(format!("{out}\n").as_bytes()).await?,
            Step::Silent => {}
            Step::Quit => break,
        }
    }

    stdout.flush().await?;
    info!("Storefront closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never mix with shell output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command as it runs
/// - `RUST_LOG=scent_storefront=trace` - Trace for this crate only
/// - Default: WARN, with INFO for the storefront itself
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,scent_storefront=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
