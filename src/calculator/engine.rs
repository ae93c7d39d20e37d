//! The keypad state machine.
//!
//! [`transition`] folds one [`Event`] into an [`EngineState`] and reports what
//! the display should show. [`Calculator`] owns a state and applies
//! transitions in place for callers that do not want to thread it through.
//!
//! Operators chain strictly left to right with no precedence: a new operator
//! resolves the pending one first, so `3 + 4 * 2 =` shows `14`.

use super::error::CalcError;
use super::event::{Event, Operator};
use super::format::format_number;
use tracing::{debug, warn};

/// The left operand and operator of an operation awaiting its right operand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pending {
    pub left: f64,
    pub operator: Operator,
}

/// Complete calculator state.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineState {
    current_input: String,
    pending: Option<Pending>,
    awaiting_fresh_input: bool,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            current_input: "0".to_string(),
            pending: None,
            awaiting_fresh_input: false,
        }
    }
}

impl EngineState {
    /// The literal currently shown on the display.
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    /// Left operand of the pending operation, if any.
    pub fn stored_value(&self) -> Option<f64> {
        self.pending.map(|p| p.left)
    }

    /// Operator awaiting its right operand, if any.
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending.map(|p| p.operator)
    }

    /// Whether the next digit or decimal point starts a new number.
    pub fn awaiting_fresh_input(&self) -> bool {
        self.awaiting_fresh_input
    }

    /// Whether the state equals the one created at startup and by `Clear`.
    pub fn is_initial(&self) -> bool {
        *self == Self::default()
    }

    fn apply(&mut self, event: Event) -> Result<(), CalcError> {
        match event {
            Event::Digit(digit) => {
                self.begin_input();
                if self.current_input == "0" {
                    self.current_input = digit.as_char().to_string();
                } else {
                    self.current_input.push(digit.as_char());
                }
            }
            Event::Decimal => {
                self.begin_input();
                if !self.current_input.contains('.') {
                    self.current_input.push('.');
                }
            }
            Event::Operator(operator) => {
                let left = match self.pending {
                    None => parse_number(&self.current_input)?,
                    Some(pending) => self.resolve(pending)?,
                };
                self.pending = Some(Pending { left, operator });
                self.awaiting_fresh_input = true;
            }
            Event::Equals => {
                if let Some(pending) = self.pending {
                    self.resolve(pending)?;
                    self.pending = None;
                    self.awaiting_fresh_input = true;
                }
            }
            Event::Clear => *self = Self::default(),
            Event::ToggleSign => {
                if self.current_input != "0" {
                    self.current_input = match self.current_input.strip_prefix('-') {
                        Some(unsigned) => unsigned.to_string(),
                        None => format!("-{}", self.current_input),
                    };
                }
            }
            Event::Percent => {
                let value = parse_number(&self.current_input)?;
                self.current_input =
                    format_number(value / 100.0).ok_or(CalcError::InvalidOperation)?;
            }
        }
        Ok(())
    }

    fn begin_input(&mut self) {
        if self.awaiting_fresh_input {
            self.current_input = "0".to_string();
            self.awaiting_fresh_input = false;
        }
    }

    /// Apply `pending` to the current input, display the formatted result and
    /// return it as a number for further chaining.
    fn resolve(&mut self, pending: Pending) -> Result<f64, CalcError> {
        let right = parse_number(&self.current_input)?;
        let value = pending.operator.apply(pending.left, right)?;
        let formatted = format_number(value).ok_or(CalcError::InvalidOperation)?;
        let rounded = parse_number(&formatted)?;
        self.current_input = formatted;
        Ok(rounded)
    }
}

/// Read a literal as a finite number. Literals too long to fit an `f64` fail.
fn parse_number(literal: &str) -> Result<f64, CalcError> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CalcError::InvalidOperation)
}

/// What the presentation shell should render after an event.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub display: String,
    /// Set when the event failed; the state has already been reset.
    pub error: Option<CalcError>,
}

/// Compute the state that follows `state` after `event`.
///
/// Errors reset the whole state to its initial form and are reported in the
/// response rather than returned.
pub fn transition(state: &EngineState, event: Event) -> (EngineState, Response) {
    let mut next = state.clone();
    let error = next.apply(event).err();
    if error.is_some() {
        next = EngineState::default();
    }

    let response = Response {
        display: next.current_input.clone(),
        error,
    };
    (next, response)
}

/// A calculator session holding its own state.
#[derive(Debug, Default)]
pub struct Calculator {
    state: EngineState,
}

impl Calculator {
    /// Create a calculator showing `0` with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle one keypad event.
    pub fn handle(&mut self, event: Event) -> Response {
        let (next, response) = transition(&self.state, event);
        debug!(?event, display = %response.display, "handled event");
        if let Some(err) = response.error {
            warn!(?event, %err, "calculation failed, state reset");
        }
        self.state = next;
        response
    }

    /// The text the display should show right now.
    pub fn display(&self) -> &str {
        self.state.current_input()
    }

    /// The full state, for inspection.
    pub fn state(&self) -> &EngineState {
        &self.state
    }
}
