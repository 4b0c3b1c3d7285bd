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

use num_traits::{PrimInt, Signed};

/// Sign/magnitude class of a base operand.
///
/// The classes partition the integers: every value falls into exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseClass {
    /// `a < -1`
    BelowMinusOne,
    /// `a == -1`
    MinusOne,
    /// `a == 0`
    Zero,
    /// `a == 1`
    One,
    /// `a > 1`
    AboveOne,
}

impl BaseClass {
    /// Classifies `a`.
    #[inline]
    pub fn of<T>(a: T) -> Self
    where
        T: PrimInt + Signed,
    {
        let one = T::one();
        if a < -one {
            BaseClass::BelowMinusOne
        } else if a == -one {
            BaseClass::MinusOne
        } else if a == T::zero() {
            BaseClass::Zero
        } else if a == one {
            BaseClass::One
        } else {
            BaseClass::AboveOne
        }
    }
}

/// Sign/magnitude class of an exponent operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExponentClass {
    /// `b < 0`
    Negative,
    /// `b == 0`
    Zero,
    /// `b == 1`
    One,
    /// `b > 1`
    AboveOne,
}

impl ExponentClass {
    /// Classifies `b`.
    #[inline]
    pub fn of<T>(b: T) -> Self
    where
        T: PrimInt + Signed,
    {
        if b.is_negative() {
            ExponentClass::Negative
        } else if b == T::zero() {
            ExponentClass::Zero
        } else if b == T::one() {
            ExponentClass::One
        } else {
            ExponentClass::AboveOne
        }
    }
}

/// Returns `true` if `b` is odd. Correct for negative values as well.
#[inline(always)]
pub fn is_odd<T>(b: T) -> bool
where
    T: PrimInt + Signed,
{
    b & T::one() == T::one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_class_partition() {
        assert_eq!(BaseClass::of(i32::MIN), BaseClass::BelowMinusOne);
        assert_eq!(BaseClass::of(-2i32), BaseClass::BelowMinusOne);
        assert_eq!(BaseClass::of(-1i32), BaseClass::MinusOne);
        assert_eq!(BaseClass::of(0i32), BaseClass::Zero);
        assert_eq!(BaseClass::of(1i32), BaseClass::One);
        assert_eq!(BaseClass::of(2i32), BaseClass::AboveOne);
        assert_eq!(BaseClass::of(i32::MAX), BaseClass::AboveOne);
    }

    #[test]
    fn test_exponent_class_partition() {
        assert_eq!(ExponentClass::of(i64::MIN), ExponentClass::Negative);
        assert_eq!(ExponentClass::of(-1i64), ExponentClass::Negative);
        assert_eq!(ExponentClass::of(0i64), ExponentClass::Zero);
        assert_eq!(ExponentClass::of(1i64), ExponentClass::One);
        assert_eq!(ExponentClass::of(2i64), ExponentClass::AboveOne);
    }

    #[test]
    fn test_is_odd_handles_negative_values() {
        assert!(is_odd(7i32));
        assert!(is_odd(-7i32));
        assert!(is_odd(i32::MAX));
        assert!(!is_odd(i32::MIN));
        assert!(!is_odd(-2i32));
        assert!(!is_odd(0i32));
    }
}
