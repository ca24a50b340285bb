// UI layer: the spinner shown while the upload blocks, and the status
// line printed once the server has answered.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};

use crate::api::ResponseStatus;

/// Run `f` behind a spinner on stderr. The spinner is drawn once and
/// cleared when `f` returns; nothing is drawn when stderr is not a
/// terminal.
pub fn with_spinner<T, F>(message: &'static str, f: F) -> T
where
    F: FnOnce() -> T,
{
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.tick();
    let result = f();
    spinner.finish_and_clear();
    result
}

/// Write the status line as the server sent it, e.g.
/// `Response status: 200 OK`.
pub fn print_status<W: Write>(out: &mut W, status: &ResponseStatus) -> io::Result<()> {
    writeln!(out, "Response status: {}", status)
}
