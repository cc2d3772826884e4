use std::io;

use tracing_subscriber::EnvFilter;

use passgen::Session;
use passgen::cli::Prompter;
use passgen::exits;
use passgen::terminal::Style;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Keep passwords out of core dumps.
#[cfg(target_os = "linux")]
fn disable_core_dumps() {
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };
}

#[cfg(not(target_os = "linux"))]
fn disable_core_dumps() {}

fn main() {
    exits::install_handlers();
    disable_core_dumps();
    init_logging();

    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), Style::detect());
    let mut session = Session::new(prompter, rand::rng());

    if let Err(e) = session.run() {
        exits::fail(&e);
    }
}
