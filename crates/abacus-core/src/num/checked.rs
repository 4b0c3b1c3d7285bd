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
use num_traits::{PrimInt, Signed};

/// Negates `a`, failing with `Overflow` iff `a` is the minimum value of `T`.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{error::MathError, num::checked::negate};
/// assert_eq!(negate(4i32), Ok(-4));
/// assert_eq!(negate(i32::MIN), Err(MathError::Overflow));
/// ```
#[inline]
pub fn negate<T>(a: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    if a == T::min_value() {
        return Err(MathError::Overflow);
    }
    Ok(-a)
}

/// Adds `a` and `b`, failing with `Overflow` if the sum is not representable.
///
/// The bound is tested against `MAX - b` or `MIN - b` before the sum is
/// formed; both differences are in range for the operand signs checked.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{error::MathError, num::checked::add};
/// assert_eq!(add(2i32, -5), Ok(-3));
/// assert_eq!(add(i32::MAX, 2), Err(MathError::Overflow));
/// ```
#[inline]
pub fn add<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    let zero = T::zero();
    if a > zero && b > zero && a > T::max_value() - b {
        return Err(MathError::Overflow);
    }
    if a < zero && b < zero && a < T::min_value() - b {
        return Err(MathError::Overflow);
    }
    Ok(a + b)
}

/// Divides `a` by `b`, truncating toward zero.
///
/// Fails with `ZeroDivision` if `b` is zero, and with `Overflow` for
/// `MIN / -1`, whose quotient is not representable.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{error::MathError, num::checked::divide};
/// assert_eq!(divide(200i32, -3), Ok(-66));
/// assert_eq!(divide(1i32, 0), Err(MathError::ZeroDivision));
/// ```
#[inline]
pub fn divide<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    if b == T::zero() {
        return Err(MathError::ZeroDivision);
    }
    if a == T::min_value() && b == -T::one() {
        return Err(MathError::Overflow);
    }
    Ok(a / b)
}

/// Multiplies two operands that are both strictly greater than one.
///
/// This is a narrowed helper for the engines rather than a general multiply:
/// with both operands above one the product is positive and the single test
/// `b > MAX / a` decides overflow. Callers must uphold the precondition.
///
/// # Panics
///
/// In debug builds, this function will panic if either operand is `<= 1`.
#[inline]
pub fn multiply<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    debug_assert!(
        a > T::one() && b > T::one(),
        "called `multiply` with an operand that is not greater than one"
    );
    if b > T::max_value() / a {
        return Err(MathError::Overflow);
    }
    Ok(a * b)
}
