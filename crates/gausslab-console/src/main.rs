//! Interactive console for the GaussLab solvers.
//!
//! A menu-driven program: play the built-in story levels (predict the
//! solution type, then watch the elimination verify it) or enter a
//! custom 2x2 system coefficient by coefficient.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod io;
mod levels;

fn main() -> anyhow::Result<()> {
    init_logger();
    tracing::info!("starting gausslab console");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut app = app::App::new(io::ConsoleIo::new(stdin.lock(), stdout.lock()));
    app.run()
}

/// Quiet by default so log lines never interleave with the console UI;
/// raise with RUST_LOG=gausslab=debug.
fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gausslab=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .compact(),
        )
        .init();
}
