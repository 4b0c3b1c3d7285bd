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

use crate::{error::MathError, num::checked::multiply};
use num_traits::{PrimInt, Signed};

/// Computes `floor(log_b(a))`.
///
/// Fails with `BadLogarithm` if `a <= 0` or `b <= 1`.
///
/// For `a > b` the search keeps `p = b^k` and multiplies by `b` until the
/// product exceeds `a` (the answer is `k - 1`) or the multiplication
/// overflows. An overflowing `b^(k+1)` is larger than any representable `a`,
/// so the last in-range power `p <= a` gives the answer `k`. The loop runs at
/// most `log_b(MAX)` times.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::{engine::log, error::MathError};
/// assert_eq!(log(9i32, 2), Ok(3));
/// assert_eq!(log(i32::MAX, 2), Ok(30));
/// assert_eq!(log(4i32, 1), Err(MathError::BadLogarithm));
/// ```
pub fn log<T>(a: T, b: T) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    let one = T::one();
    if a <= T::zero() || b <= one {
        return Err(MathError::BadLogarithm);
    }
    if a == one || a < b {
        return Ok(T::zero());
    }
    if a == b {
        return Ok(one);
    }

    let mut p = b;
    let mut k = one;
    loop {
        // Both factors are above one here.
        let Ok(next) = multiply(p, b) else {
            return Ok(k);
        };
        p = next;
        k = k + one;
        if p > a {
            return Ok(k - one);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i32;

    const MIN: IntegerType = IntegerType::MIN;
    const MAX: IntegerType = IntegerType::MAX;

    #[test]
    fn test_log_of_one_is_zero() {
        for b in [2, 3, 4, 1000, MAX] {
            assert_eq!(log::<IntegerType>(1, b), Ok(0));
        }
    }

    #[test]
    fn test_log_small_table() {
        assert_eq!(log::<IntegerType>(2, 2), Ok(1));
        assert_eq!(log::<IntegerType>(2, 3), Ok(0));
        assert_eq!(log::<IntegerType>(2, 4), Ok(0));
        assert_eq!(log::<IntegerType>(3, 3), Ok(1));
        assert_eq!(log::<IntegerType>(4, 2), Ok(2));
        assert_eq!(log::<IntegerType>(4, 3), Ok(1));
        assert_eq!(log::<IntegerType>(4, 4), Ok(1));
        assert_eq!(log::<IntegerType>(9, 2), Ok(3));
        assert_eq!(log::<IntegerType>(9, 3), Ok(2));
        assert_eq!(log::<IntegerType>(9, 4), Ok(1));
        assert_eq!(log::<IntegerType>(15, 4), Ok(1));
        assert_eq!(log::<IntegerType>(16, 4), Ok(2));
    }

    #[test]
    fn test_log_near_bounds() {
        assert_eq!(log::<IntegerType>(MAX - 1, MAX), Ok(0));
        assert_eq!(log::<IntegerType>(MAX, MAX), Ok(1));
        assert_eq!(log::<IntegerType>(MAX, MAX - 1), Ok(1));
        assert_eq!(log::<IntegerType>(MAX, 2), Ok(30));
        assert_eq!(log::<IntegerType>(1 << 30, 2), Ok(30));
        assert_eq!(log::<IntegerType>((1 << 30) - 1, 2), Ok(29));
        assert_eq!(log::<IntegerType>(MAX, 46_341), Ok(1));
        assert_eq!(log::<IntegerType>(MAX, 46_340), Ok(2));
    }

    #[test]
    fn test_log_undefined_inputs() {
        for a in [MIN, -1, 0, 1, 2, MAX] {
            assert_eq!(log::<IntegerType>(a, 0), Err(MathError::BadLogarithm));
            assert_eq!(log::<IntegerType>(a, 1), Err(MathError::BadLogarithm));
            assert_eq!(log::<IntegerType>(a, -2), Err(MathError::BadLogarithm));
            assert_eq!(log::<IntegerType>(a, MIN), Err(MathError::BadLogarithm));
        }
        for b in [2, 3, MAX] {
            assert_eq!(log::<IntegerType>(0, b), Err(MathError::BadLogarithm));
            assert_eq!(log::<IntegerType>(-1, b), Err(MathError::BadLogarithm));
            assert_eq!(log::<IntegerType>(MIN, b), Err(MathError::BadLogarithm));
        }
        assert_eq!(log::<IntegerType>(0, 0), Err(MathError::BadLogarithm));
    }

    #[test]
    fn test_log_matches_primitive_ilog() {
        for b in 2..=17 {
            for a in (1..5000).chain([MAX - 2, MAX - 1, MAX]) {
                assert_eq!(
                    log::<IntegerType>(a, b),
                    Ok(a.ilog(b) as IntegerType),
                    "log({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_log_is_generic_over_width() {
        assert_eq!(log::<i8>(i8::MAX, 2), Ok(6));
        assert_eq!(log::<i64>(i64::MAX, 2), Ok(62));
        assert_eq!(log::<i64>(1_000_000_000_000, 10), Ok(12));
    }
}
