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

use crate::{
    error::MathError,
    num::{
        checked::{multiply, negate},
        class::{is_odd, BaseClass, ExponentClass},
    },
};
use num_traits::{PrimInt, Signed};

/// Computes `a^b` over the integers.
///
/// Results that are not integers or not representable are reported instead
/// of approximated:
///
/// | exponent \ base | `< -1` | `-1` | `0` | `1` | `> 1` |
/// |---|---|---|---|---|---|
/// | `< 0` | `Underflow` | `±1` | `BadExponent` | `1` | `Underflow` |
/// | `0` | `1` | `1` | `BadExponent` | `1` | `1` |
/// | `1` | `a` | `a` | `a` | `a` | `a` |
/// | `> 1` | `±(-a)^b` | `±1` | `0` | `1` | `a^b` |
///
/// A base below `-1` is handled through its magnitude, so `MIN` fails with
/// `Overflow` even when `MIN^b` would itself be representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{engine::power, error::MathError};
/// assert_eq!(power(2i32, 10), Ok(1024));
/// assert_eq!(power(-2i32, 3), Ok(-8));
/// assert_eq!(power(2i32, -1), Err(MathError::Underflow));
/// assert_eq!(power(0i32, 0), Err(MathError::BadExponent));
/// ```
pub fn power<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    match (ExponentClass::of(b), BaseClass::of(a)) {
        (ExponentClass::Negative, BaseClass::MinusOne) => Ok(alternating_sign(b)),
        (ExponentClass::Negative, BaseClass::One) => Ok(T::one()),
        (ExponentClass::Negative, BaseClass::Zero) => Err(MathError::BadExponent),
        (ExponentClass::Negative, BaseClass::BelowMinusOne | BaseClass::AboveOne) => {
            Err(MathError::Underflow)
        }

        (ExponentClass::Zero, BaseClass::Zero) => Err(MathError::BadExponent),
        (ExponentClass::Zero, _) => Ok(T::one()),

        (ExponentClass::One, _) => Ok(a),

        (ExponentClass::AboveOne, BaseClass::Zero | BaseClass::One) => Ok(a),
        (ExponentClass::AboveOne, BaseClass::MinusOne) => Ok(alternating_sign(b)),
        (ExponentClass::AboveOne, BaseClass::AboveOne) => positive_power(a, b),
        (ExponentClass::AboveOne, BaseClass::BelowMinusOne) => {
            let magnitude = positive_power(negate(a)?, b)?;
            if is_odd(b) {
                negate(magnitude)
            } else {
                Ok(magnitude)
            }
        }
    }
}

/// `(-1)^b`.
#[inline(always)]
fn alternating_sign<T>(b: T) -> T
where
    T: PrimInt + Signed,
{
    if is_odd(b) {
        -T::one()
    } else {
        T::one()
    }
}

/// `a^b` for `a > 1` and `b > 1`; the only case that iterates.
///
/// The accumulator at least doubles on every step, so the loop stops with
/// `Overflow` after at most `bits(T)` multiplications regardless of `b`.
fn positive_power<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    debug_assert!(
        a > T::one() && b > T::one(),
        "called `positive_power` with a base or exponent that is not greater than one"
    );

    let mut acc = a;
    let mut remaining = b - T::one();
    while remaining > T::zero() {
        acc = multiply(acc, a)?;
        remaining = remaining - T::one();
    }
    Ok(acc)
}
