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

use super::{operands::OperandVector, operation::Operation};
use crate::{
    engine::{log, power},
    error::MathError,
    num::checked::{add, divide, negate},
};
use num_traits::{PrimInt, Signed};

/// Runs `op` on the first `op.arity()` operands.
///
/// On success the result is written to slot `op.arity()` and also returned.
/// On failure no slot is written and the error of the primitive or engine
/// is returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use abacus_core::command::{dispatch, OperandVector, Operation};
/// let mut v = OperandVector::from([9i32, 2, 0]);
/// assert_eq!(dispatch(Operation::Logarithm, &mut v), Ok(3));
/// assert_eq!(v.as_slice(), &[9, 2, 3]);
/// ```
pub fn dispatch<T>(op: Operation, operands: &mut OperandVector<T>) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    let arity = op.arity();
    let x = operands.inputs(arity);
    let result = match op {
        Operation::Negate => negate(x[0]),
        Operation::Add => add(x[0], x[1]),
        Operation::Divide => divide(x[0], x[1]),
        Operation::Exponentiate => power(x[0], x[1]),
        Operation::Logarithm => log(x[0], x[1]),
    }?;
    operands.set_result(arity, result);
    Ok(result)
}

/// Resolves the wire id `id` and dispatches it.
///
/// Fails with `BadCommand` for an unknown id, leaving `operands` untouched.
#[inline]
pub fn evaluate<T>(id: u32, operands: &mut OperandVector<T>) -> Result<T, MathError>
where
    T: PrimInt + Signed,
{
    let op = Operation::from_id(id)?;
    dispatch(op, operands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    type IntegerType = i32;

    const MIN: IntegerType = IntegerType::MIN;
    const MAX: IntegerType = IntegerType::MAX;

    fn run(op: Operation, inputs: &[IntegerType]) -> Result<IntegerType, MathError> {
        let mut v = OperandVector::from_inputs(inputs);
        dispatch(op, &mut v)
    }

    #[test]
    fn test_dispatch_writes_result_at_arity() {
        let mut v = OperandVector::from([4, 99, 99]);
        assert_eq!(dispatch(Operation::Negate, &mut v), Ok(-4));
        assert_eq!(v.as_slice(), &[4, -4, 99]);

        let mut v = OperandVector::from([2, 2, 99]);
        assert_eq!(dispatch(Operation::Add, &mut v), Ok(4));
        assert_eq!(v.as_slice(), &[2, 2, 4]);
    }

    #[test]
    fn test_dispatch_ignores_slots_beyond_arity() {
        let mut a = OperandVector::from([7, 0, 0]);
        let mut b = OperandVector::from([7, 12345, 0]);
        assert_eq!(dispatch(Operation::Negate, &mut a), Ok(-7));
        assert_eq!(dispatch(Operation::Negate, &mut b), Ok(-7));
    }

    #[test]
    fn test_dispatch_failure_leaves_operands_untouched() {
        let cases: [(Operation, [IntegerType; 3], MathError); 6] = [
            (Operation::Negate, [MIN, 42, 42], MathError::Overflow),
            (Operation::Add, [MAX, 2, 42], MathError::Overflow),
            (Operation::Divide, [1, 0, 42], MathError::ZeroDivision),
            (Operation::Exponentiate, [2, -1, 42], MathError::Underflow),
            (Operation::Exponentiate, [0, 0, 42], MathError::BadExponent),
            (Operation::Logarithm, [0, 0, 42], MathError::BadLogarithm),
        ];
        for (op, slots, err) in cases {
            let mut v = OperandVector::from(slots);
            assert_eq!(dispatch(op, &mut v), Err(err), "{op} {slots:?}");
            assert_eq!(v.as_slice(), &slots);
        }
    }

    #[test]
    fn test_dispatch_routes_each_operation() {
        assert_eq!(run(Operation::Negate, &[4]), Ok(-4));
        assert_eq!(run(Operation::Add, &[2, -5]), Ok(-3));
        assert_eq!(run(Operation::Divide, &[200, -3]), Ok(-66));
        assert_eq!(run(Operation::Exponentiate, &[-2, 3]), Ok(-8));
        assert_eq!(run(Operation::Logarithm, &[16, 4]), Ok(2));
    }

    #[test]
    fn test_evaluate_rejects_unknown_id_without_touching_operands() {
        for id in [0, 6, 100, u32::MAX] {
            let mut v = OperandVector::from([1, 2, 3]);
            assert_eq!(evaluate(id, &mut v), Err(MathError::BadCommand));
            assert_eq!(v.as_slice(), &[1, 2, 3]);
        }
    }

    #[test]
    fn test_evaluate_uses_wire_ids() {
        let mut v = OperandVector::from([9, 3, 0]);
        assert_eq!(evaluate(5, &mut v), Ok(2));
        let mut v = OperandVector::from([6, 3, 0]);
        assert_eq!(evaluate(3, &mut v), Ok(2));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..5_000 {
            let id = rng.gen_range(0..=6u32);
            let slots: [IntegerType; 3] = [rng.gen_range(-40..=40), rng.gen_range(-40..=40), 0];
            let mut first = OperandVector::from(slots);
            let mut second = OperandVector::from(slots);
            assert_eq!(evaluate(id, &mut first), evaluate(id, &mut second));
            assert_eq!(first, second);
        }
    }
}
