//! Line-oriented terminal front end for the calculator.
//!
//! Each input line is a run of keypad keys. After the line is processed the
//! display is printed; calculation errors are printed as notifications first.

use crate::calculator::{
    Calculator, ClipboardError, Event, Key, Response, copy_to_clipboard, group_thousands,
    parse_keys,
};
use crate::config::{Config, DisplayConfig};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

type CopyFn = fn(&str) -> Result<(), ClipboardError>;

/// Render the raw display literal according to the display settings.
pub fn render_display(display: &str, config: &DisplayConfig) -> String {
    if config.group_digits {
        group_thousands(display)
    } else {
        display.to_string()
    }
}

/// An interactive calculator session over any reader and writer.
pub struct Shell<R, W> {
    calculator: Calculator,
    config: Config,
    input: R,
    output: W,
    copy: CopyFn,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a session reading keys from `input` and printing to `output`.
    pub fn new(config: Config, input: R, output: W) -> Self {
        Self {
            calculator: Calculator::new(),
            config,
            input,
            output,
            copy: copy_to_clipboard,
        }
    }

    /// Replace the clipboard backend.
    pub fn with_clipboard(mut self, copy: CopyFn) -> Self {
        self.copy = copy;
        self
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(self.output, "{}", self.config.display.prompt)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!("end of input");
                break;
            }

            let keys = match parse_keys(&line) {
                Ok(keys) => keys,
                Err(err) => {
                    writeln!(self.output, "error: {}", err)?;
                    continue;
                }
            };

            if !self.process(&keys)? {
                info!("session ended");
                break;
            }

            let rendered = render_display(self.calculator.display(), &self.config.display);
            writeln!(self.output, "{}", rendered)?;
        }
        Ok(())
    }

    /// Feed keys to the calculator. Returns `false` once `quit` is seen.
    fn process(&mut self, keys: &[Key]) -> Result<bool> {
        for key in keys {
            match *key {
                Key::Event(event) => {
                    // Only an `=` that resolves an operation produces a new result.
                    let resolves = event == Event::Equals
                        && self.calculator.state().pending_operator().is_some();
                    let response = self.calculator.handle(event);
                    if let Some(err) = response.error {
                        writeln!(self.output, "error: {}", err)?;
                    } else if resolves && self.config.clipboard.copy_on_equals {
                        self.copy_display()?;
                    }
                }
                Key::Copy => self.copy_display()?,
                Key::Quit => return Ok(false),
            }
        }
        Ok(true)
    }

    fn copy_display(&mut self) -> Result<()> {
        let shown = self.calculator.display();
        match (self.copy)(shown) {
            Ok(()) => debug!(value = shown, "copied display to clipboard"),
            Err(err) => {
                warn!(%err, "clipboard copy failed");
                writeln!(self.output, "error: {}", err)?;
            }
        }
        Ok(())
    }
}

/// Evaluate a line of keys on a fresh calculator.
///
/// The response carries the final display and the last error raised along
/// the way, if any. `copy` and `quit` keys are ignored.
pub fn run_keys(line: &str) -> Result<Response> {
    let mut calculator = Calculator::new();
    let mut error = None;

    for key in parse_keys(line)? {
        if let Key::Event(event) = key {
            let response = calculator.handle(event);
            error = response.error.or(error);
        }
    }

    Ok(Response {
        display: calculator.display().to_string(),
        error,
    })
}
