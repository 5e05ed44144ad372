use log::{debug, info, warn};
use std::io::{self, Write};
use std::sync::Mutex;

use super::ports::{AnswerView, Notifier};
use super::state::ViewState;

/// Prints results to a writer, stdout by default. Write failures are logged.
pub struct ConsoleView {
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleView {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    fn write_result(&self, answer: &str, disclaimer: &str) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(|e| e.into_inner());
        writeln!(out, "{}", answer)?;
        if !disclaimer.is_empty() {
            writeln!(out, "\n---\n{}", disclaimer)?;
        }
        out.flush()
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::stdout()
    }
}

impl AnswerView for ConsoleView {
    fn render(&self, state: &ViewState) {
        match state {
            ViewState::Idle => {}
            ViewState::Loading => info!("Waiting for answer..."),
            ViewState::ShowingResult { answer, disclaimer } => {
                if let Err(e) = self.write_result(answer, disclaimer) {
                    warn!("Failed to write answer: {}", e);
                }
            }
            ViewState::ShowingError(message) => debug!("Showing error: {}", message),
        }
    }
}

/// Prints notifications to stderr.
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }
}
