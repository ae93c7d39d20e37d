//! Symbolic input events delivered by the keypad.

use super::error::CalcError;

/// A binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Apply the operator to two operands.
    ///
    /// Division by exactly zero is an error rather than an infinity.
    pub fn apply(self, left: f64, right: f64) -> Result<f64, CalcError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Subtract => Ok(left - right),
            Self::Multiply => Ok(left * right),
            Self::Divide if right == 0.0 => Err(CalcError::DivideByZero),
            Self::Divide => Ok(left / right),
        }
    }
}

/// A single decimal digit, 0 through 9.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    /// Create a digit from its numeric value. Values above 9 give `None`.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Self(value))
    }

    /// Read an ASCII digit character.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).map(|d| Self(d as u8))
    }

    /// The digit as the character appended to the input.
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

/// One user action on the keypad.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
    ToggleSign,
    Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_range() {
        assert_eq!(Digit::new(9).map(Digit::as_char), Some('9'));
        assert!(Digit::new(10).is_none());
        assert_eq!(Digit::from_char('7').map(Digit::as_char), Some('7'));
        assert!(Digit::from_char('a').is_none());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(3.0, 4.0), Ok(7.0));
        assert_eq!(Operator::Subtract.apply(3.0, 4.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), Ok(12.0));
        assert_eq!(Operator::Divide.apply(3.0, 4.0), Ok(0.75));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            Operator::Divide.apply(5.0, 0.0),
            Err(CalcError::DivideByZero)
        );
        assert_eq!(
            Operator::Divide.apply(5.0, -0.0),
            Err(CalcError::DivideByZero)
        );
    }
}
