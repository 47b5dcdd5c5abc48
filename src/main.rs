use clap::Parser;
use taskpad::cli::commands::{Cli, Commands};
use taskpad::cli::handlers;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    // Tracing is opt-in via RUST_LOG and off by default, so the TUI's
    // alternate screen is never written over.
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| {
            let raw = raw.trim();
            if raw.is_empty() {
                return None;
            }
            EnvFilter::try_new(raw).ok()
        })
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = taskpad::tui::run(config_path.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init) => {
            if let Err(e) = handlers::cmd_init(config_path.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
