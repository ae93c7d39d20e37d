//! Key classification for typed keypad input.
//!
//! Turns a line such as `3 + 4 × 2 =` into the keys the shell feeds to the
//! calculator, one symbol at a time.

use super::event::{Digit, Event, Operator};
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// Matches one key at the start of the input.
    /// Word commands come before single letters so `clear` is not read as `c`.
    static ref KEY_TOKEN: Regex = Regex::new(
        r"^(?i:clear|neg|copy|quit|q|c|[0-9]|[.+\-*x×/÷=±~%])"
    ).unwrap();
}

/// A key understood by the calculator shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A keypad button handled by the engine.
    Event(Event),
    /// Copy the current display to the clipboard.
    Copy,
    /// End the session.
    Quit,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("unknown key '{symbol}' at column {column}")]
    Unknown { symbol: char, column: usize },
}

/// Split a line of input into keys.
///
/// Whitespace between keys is ignored. The first symbol that is not a key
/// fails the whole line.
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    let mut keys = Vec::new();
    let mut rest = line;

    loop {
        rest = rest.trim_start();
        let offset = line.len() - rest.len();
        let Some(symbol) = rest.chars().next() else {
            break;
        };

        let unknown = || KeyError::Unknown {
            symbol,
            column: line[..offset].chars().count() + 1,
        };
        let token = KEY_TOKEN.find(rest).ok_or_else(unknown)?;
        keys.push(classify(token.as_str()).ok_or_else(unknown)?);
        rest = &rest[token.end()..];
    }

    Ok(keys)
}

fn classify(token: &str) -> Option<Key> {
    let key = match token.to_lowercase().as_str() {
        "clear" | "c" => Key::Event(Event::Clear),
        "neg" | "±" | "~" => Key::Event(Event::ToggleSign),
        "copy" => Key::Copy,
        "quit" | "q" => Key::Quit,
        "." => Key::Event(Event::Decimal),
        "+" => Key::Event(Event::Operator(Operator::Add)),
        "-" => Key::Event(Event::Operator(Operator::Subtract)),
        "*" | "x" | "×" => Key::Event(Event::Operator(Operator::Multiply)),
        "/" | "÷" => Key::Event(Event::Operator(Operator::Divide)),
        "=" => Key::Event(Event::Equals),
        "%" => Key::Event(Event::Percent),
        other => {
            let mut chars = other.chars();
            let digit = chars.next().and_then(Digit::from_char)?;
            if chars.next().is_some() {
                return None;
            }
            Key::Event(Event::Digit(digit))
        }
    };
    Some(key)
}
