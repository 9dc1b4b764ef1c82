//! # Scent Store Entry Point
//!
//! ```bash
//! # Interactive shell
//! scent-store
//!
//! # Machine-readable output, one JSON object per line
//! echo "search perfume 1" | scent-store --json
//!
//! # More logging
//! RUST_LOG=debug scent-store
//! ```
//!
//! The actual setup is in lib.rs so the shell can be tested without a binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::Parser;

#[derive(Parser)]
#[command(name = "scent-store")]
#[command(author, version, about = "Scent Store storefront shell")]
struct Cli {
    /// Print every reply as a JSON object instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    scent_storefront::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = scent_storefront::run(cli.json).await {
        tracing::error!("Storefront failed: {e}");
        std::process::exit(1);
    }
}
