//! Exit handling: signal handlers, cleanup, and exit statuses.

use tracing::warn;

use crate::cli::SessionError;
use crate::terminal;

/// Status for a session cut short by SIGINT/SIGTERM/SIGHUP.
pub const INTERRUPTED: i32 = 130;

/// Status for a session that could not finish (closed input, broken terminal).
pub const FAILED: i32 = 1;

const RESET: &[u8] = b"\x1b[0m\n";

/// Restore colour attributes if stdout is a TTY. Async-signal-safe.
fn restore_attributes() {
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(1, RESET.as_ptr() as *const libc::c_void, RESET.len());
        }
    }
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP. Prompts block indefinitely, so this is
/// the only way out besides answering "n".
extern "C" fn signal_handler(_: libc::c_int) {
    restore_attributes();
    unsafe { libc::_exit(INTERRUPTED) }
}

/// Install signal handlers. Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::signal(
            libc::SIGINT,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGTERM,
            signal_handler as *const () as libc::sighandler_t,
        );
        libc::signal(
            libc::SIGHUP,
            signal_handler as *const () as libc::sighandler_t,
        );
    }
}

/// Map a session error to its exit status.
pub fn status(err: &SessionError) -> i32 {
    match err {
        SessionError::InputClosed | SessionError::Io(_) => FAILED,
    }
}

/// Report a session error on stderr and exit.
pub fn fail(err: &SessionError) -> ! {
    terminal::reset_terminal();
    warn!(error = %err, "session aborted");
    match err {
        SessionError::InputClosed => eprintln!("\nInput closed."),
        SessionError::Io(e) => eprintln!("\nTerminal error: {e}"),
    }
    std::process::exit(status(err))
}
