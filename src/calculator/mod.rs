//! Keypad calculator core.
//!
//! This module provides functionality to:
//! - Classify typed keys into keypad events
//! - Fold events into the two-operand calculator state
//! - Format computed values for the display
//! - Copy the display to the clipboard

mod clipboard;
mod engine;
mod error;
mod event;
mod format;
mod keys;

pub use clipboard::{ClipboardError, copy_to_clipboard};
pub use engine::{Calculator, EngineState, Pending, Response, transition};
pub use error::CalcError;
pub use event::{Digit, Event, Operator};
pub use format::{FRACTION_DIGITS, format_number, group_thousands};
pub use keys::{Key, KeyError, parse_keys};
