// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The closed error taxonomy shared by every operation.

/// The reason an operation could not produce a result.
///
/// An invocation yields either a result or exactly one of these kinds. All
/// kinds are deterministic functions of the inputs; retrying a failed request
/// with the same operands fails the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// The operation identifier is not one of the known operations.
    BadCommand,
    /// The true result exceeds the representable range.
    Overflow,
    /// The true result of an exponentiation has magnitude below one.
    Underflow,
    /// The exponentiation is undefined (`0^0` or `0^negative`).
    BadExponent,
    /// The logarithm is undefined (non-positive argument or base `<= 1`).
    BadLogarithm,
    /// Division by zero.
    ZeroDivision,
}

impl MathError {
    /// Every error kind, ordered by code.
    pub const ALL: [MathError; 6] = [
        MathError::BadCommand,
        MathError::Overflow,
        MathError::Underflow,
        MathError::BadExponent,
        MathError::BadLogarithm,
        MathError::ZeroDivision,
    ];

    /// Returns the stable numeric code of this kind, in `1..=6`.
    ///
    /// Code `0` is never assigned and means "no computation failure" at the
    /// foreign boundary.
    #[inline]
    pub const fn code(self) -> u32 {
        match self {
            MathError::BadCommand => 1,
            MathError::Overflow => 2,
            MathError::Underflow => 3,
            MathError::BadExponent => 4,
            MathError::BadLogarithm => 5,
            MathError::ZeroDivision => 6,
        }
    }

    /// Looks up an error kind by its numeric code.
    #[inline]
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.code() == code)
    }

    /// Returns the diagnostic name of this kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            MathError::BadCommand => "BAD_COMMAND",
            MathError::Overflow => "OVERFLOW",
            MathError::Underflow => "UNDERFLOW",
            MathError::BadExponent => "BAD_EXPONENT",
            MathError::BadLogarithm => "BAD_LOGARITHM",
            MathError::ZeroDivision => "ZERO_DIVISION",
        }
    }
}

impl std::fmt::Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::BadCommand => write!(f, "unknown operation code"),
            MathError::Overflow => write!(f, "result exceeds the representable range"),
            MathError::Underflow => {
                write!(f, "result magnitude is below one and not an integer")
            }
            MathError::BadExponent => write!(f, "exponentiation is undefined for these operands"),
            MathError::BadLogarithm => write!(f, "logarithm is undefined for these operands"),
            MathError::ZeroDivision => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for MathError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique_and_round_trip() {
        for (i, e) in MathError::ALL.iter().enumerate() {
            assert_eq!(e.code() as usize, i + 1);
            assert_eq!(MathError::from_code(e.code()), Some(*e));
        }
    }

    #[test]
    fn test_unassigned_codes_are_rejected() {
        assert_eq!(MathError::from_code(0), None);
        assert_eq!(MathError::from_code(7), None);
        assert_eq!(MathError::from_code(u32::MAX), None);
    }

    #[test]
    fn test_display_and_name() {
        assert_eq!(MathError::ZeroDivision.to_string(), "division by zero");
        assert_eq!(MathError::BadCommand.name(), "BAD_COMMAND");
        assert_eq!(MathError::BadLogarithm.name(), "BAD_LOGARITHM");
    }
}
