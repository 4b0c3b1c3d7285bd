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

use crate::error::MathError;

/// The largest number of input operands any operation consumes.
pub const MAX_ARITY: usize = 2;

/// The fixed set of operations understood by the dispatcher.
///
/// The discriminants are the wire ids and must stay stable. Id `0` and all
/// ids above `5` are unassigned.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    /// `-a`
    Negate = 1,
    /// `a + b`
    Add = 2,
    /// `a / b`, truncated toward zero.
    Divide = 3,
    /// `a^b`
    Exponentiate = 4,
    /// `floor(log_b(a))`
    Logarithm = 5,
}

impl Operation {
    /// Every operation, ordered by wire id.
    pub const ALL: [Operation; 5] = [
        Operation::Negate,
        Operation::Add,
        Operation::Divide,
        Operation::Exponentiate,
        Operation::Logarithm,
    ];

    /// Resolves a wire id, failing with `BadCommand` for unassigned ids.
    #[inline]
    pub fn from_id(id: u32) -> Result<Self, MathError> {
        match id {
            1 => Ok(Operation::Negate),
            2 => Ok(Operation::Add),
            3 => Ok(Operation::Divide),
            4 => Ok(Operation::Exponentiate),
            5 => Ok(Operation::Logarithm),
            _ => Err(MathError::BadCommand),
        }
    }

    /// Returns the wire id.
    #[inline(always)]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Returns the number of input operands.
    #[inline(always)]
    pub const fn arity(self) -> usize {
        match self {
            Operation::Negate => 1,
            Operation::Add
            | Operation::Divide
            | Operation::Exponentiate
            | Operation::Logarithm => 2,
        }
    }

    /// Returns the diagnostic name used in logs and by the foreign interface.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Negate => "MATH_NEG",
            Operation::Add => "MATH_ADD",
            Operation::Divide => "MATH_DIV",
            Operation::Exponentiate => "MATH_EXP",
            Operation::Logarithm => "MATH_LOG",
        }
    }

    /// Returns the short mnemonic accepted on the command line.
    #[inline]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Negate => "neg",
            Operation::Add => "add",
            Operation::Divide => "div",
            Operation::Exponentiate => "exp",
            Operation::Logarithm => "log",
        }
    }
}

/// Returns the diagnostic name for a raw wire id, or `"UNKNOWN"`.
#[inline]
pub fn command_name(id: u32) -> &'static str {
    Operation::from_id(id).map_or("UNKNOWN", Operation::name)
}

impl TryFrom<u32> for Operation {
    type Error = MathError;

    #[inline]
    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id)
    }
}

impl From<Operation> for u32 {
    #[inline]
    fn from(op: Operation) -> Self {
        op.id()
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Operation {
    type Err = MathError;

    /// Parses a mnemonic (`"neg"`), a diagnostic name (`"MATH_NEG"`), or a
    /// decimal wire id (`"1"`). Mnemonics and names are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = s.parse::<u32>() {
            return Self::from_id(id);
        }
        Self::ALL
            .into_iter()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(s) || op.name().eq_ignore_ascii_case(s))
            .ok_or(MathError::BadCommand)
    }
}
