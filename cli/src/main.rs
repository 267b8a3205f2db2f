//! `stepviz`: print or replay algorithm step traces in the terminal.

mod cli;
mod input;
mod narrate;
mod render;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = cli::run_from_env() {
        eprintln!("error: {error:#}");
        std::process::exit(1);
    }
}
