//! A keypad-driven, two-operand calculator.
//!
//! The [`calculator`] module holds the state machine; [`shell`] is a thin
//! terminal front end that feeds it typed keys.

pub mod calculator;
pub mod config;
pub mod shell;
