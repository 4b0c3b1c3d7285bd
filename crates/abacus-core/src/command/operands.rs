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

use super::operation::MAX_ARITY;
use num_traits::{PrimInt, Signed};

/// Number of slots in an operand vector: the widest input set plus one result.
pub const OPERAND_CAPACITY: usize = MAX_ARITY + 1;

/// The operands of a single request.
///
/// Inputs occupy slots `[0, arity)` and the result is written to slot
/// `arity`. A vector is created per request and carries nothing over to the
/// next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandVector<T> {
    slots: [T; OPERAND_CAPACITY],
}

impl<T> OperandVector<T>
where
    T: PrimInt + Signed,
{
    /// Creates a vector with every slot set to zero.
    #[inline]
    pub fn new() -> Self {
        Self {
            slots: [T::zero(); OPERAND_CAPACITY],
        }
    }

    /// Creates a vector whose leading slots are copied from `inputs`.
    ///
    /// At most `OPERAND_CAPACITY` values are taken; remaining slots are zero.
    #[inline]
    pub fn from_inputs(inputs: &[T]) -> Self {
        let mut v = Self::new();
        let n = inputs.len().min(OPERAND_CAPACITY);
        v.slots[..n].copy_from_slice(&inputs[..n]);
        v
    }

    /// Returns the value in slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= OPERAND_CAPACITY`.
    #[inline]
    pub fn input(&self, index: usize) -> T {
        assert!(
            index < OPERAND_CAPACITY,
            "called `OperandVector::input` with index out of bounds: the len is {} but the index is {}",
            OPERAND_CAPACITY,
            index
        );
        self.slots[index]
    }

    /// Returns the input slots of an operation with the given arity.
    ///
    /// # Panics
    ///
    /// Panics if `arity > MAX_ARITY`.
    #[inline]
    pub fn inputs(&self, arity: usize) -> &[T] {
        assert!(
            arity <= MAX_ARITY,
            "called `OperandVector::inputs` with arity {} greater than {}",
            arity,
            MAX_ARITY
        );
        &self.slots[..arity]
    }

    /// Returns the result slot of an operation with the given arity.
    ///
    /// # Panics
    ///
    /// Panics if `arity > MAX_ARITY`.
    #[inline]
    pub fn result(&self, arity: usize) -> T {
        assert!(
            arity <= MAX_ARITY,
            "called `OperandVector::result` with arity {} greater than {}",
            arity,
            MAX_ARITY
        );
        self.slots[arity]
    }

    /// Writes the result slot of an operation with the given arity.
    ///
    /// # Panics
    ///
    /// Panics if `arity > MAX_ARITY`.
    #[inline]
    pub fn set_result(&mut self, arity: usize, value: T) {
        assert!(
            arity <= MAX_ARITY,
            "called `OperandVector::set_result` with arity {} greater than {}",
            arity,
            MAX_ARITY
        );
        self.slots[arity] = value;
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> Default for OperandVector<T>
where
    T: PrimInt + Signed,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<[T; OPERAND_CAPACITY]> for OperandVector<T> {
    #[inline]
    fn from(slots: [T; OPERAND_CAPACITY]) -> Self {
        Self { slots }
    }
}

impl<T> std::fmt::Display for OperandVector<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}, {}]", self.slots[0], self.slots[1], self.slots[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type IntegerType = i32;

    #[test]
    fn test_new_is_zeroed() {
        let v = OperandVector::<IntegerType>::new();
        assert_eq!(v.as_slice(), &[0, 0, 0]);
        assert_eq!(v, OperandVector::default());
    }

    #[test]
    fn test_from_inputs_pads_and_truncates() {
        let v = OperandVector::<IntegerType>::from_inputs(&[7]);
        assert_eq!(v.as_slice(), &[7, 0, 0]);

        let v = OperandVector::<IntegerType>::from_inputs(&[1, 2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_layout_by_arity() {
        let mut v = OperandVector::<IntegerType>::from([5, 6, 0]);
        assert_eq!(v.inputs(1), &[5]);
        assert_eq!(v.inputs(2), &[5, 6]);

        v.set_result(1, -5);
        assert_eq!(v.result(1), -5);
        assert_eq!(v.as_slice(), &[5, -5, 0]);

        v.set_result(2, 11);
        assert_eq!(v.input(2), 11);
    }

    #[test]
    #[should_panic(expected = "greater than 2")]
    fn test_result_out_of_range_panics() {
        let v = OperandVector::<IntegerType>::new();
        let _ = v.result(3);
    }

    #[test]
    fn test_display() {
        let v = OperandVector::<IntegerType>::from([1, -2, 3]);
        assert_eq!(v.to_string(), "[1, -2, 3]");
    }
}
