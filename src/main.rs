use std::io::{self, Write};

use tracing::warn;

use crate::{cli::DisplayOptions, lister::Lister};

mod cli;
mod entry;
mod error;
mod lister;
mod utils;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::get_args();
    let lister = Lister::new(DisplayOptions::from(&args));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Per-path failures are printed inline; only a broken stdout ends up here.
    if let Err(err) = lister.list_all(&args.paths, &mut out).and_then(|_| out.flush()) {
        warn!(error = %err, "output failed, stopping");
    }
}
