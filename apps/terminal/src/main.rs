//! # Tally Terminal Entry Point
//!
//! The interactive console front-end for Tally POS.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Seed the checkout session with the default catalog
//! 3. Run the menu loop until the user exits or input ends
//!
//! The binary owns all I/O; every price computation, validation rule, and
//! cart mutation happens inside `tally-core` through plain method calls.
//! State lives for exactly one run of the program - there is no persistence.

mod menu;

use anyhow::Result;
use console::style;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_core::CheckoutSystem;

fn main() -> Result<()> {
    init_tracing();

    info!("Starting Tally POS terminal");

    let mut session = CheckoutSystem::with_default_catalog();
    println!("{}", style("Default product details loaded.").dim());

    menu::run(&mut session)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=tally=trace` - Show trace for tally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tally=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
