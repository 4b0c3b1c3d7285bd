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

//! Request protocol adapter.
//!
//! A caller hands over a buffer of `i32` slots laid out like an
//! `OperandVector`: the operation reads slots `[0, arity)` and writes only
//! slot `arity`. Slots past `arity` are neither read nor written, and on any
//! failure the caller's buffer is left exactly as it was.
//!
//! Byte-oriented transports use the `_bytes` variants, which work on the
//! native-endian image of the same slots.

use crate::error::DeviceError;
use abacus_core::command::{dispatch, OperandVector, Operation};

/// The integer type of one protocol slot.
pub type Slot = i32;

/// Size of one slot in a byte image.
pub const SLOT_SIZE: usize = std::mem::size_of::<Slot>();

/// Number of slots a caller must provide for `op`: its inputs and the result.
#[inline(always)]
pub const fn required_slots(op: Operation) -> usize {
    op.arity() + 1
}

/// Copies the input slots of `op` out of `buffer`.
pub fn copy_in(op: Operation, buffer: &[Slot]) -> Result<OperandVector<Slot>, DeviceError> {
    let required = required_slots(op);
    if buffer.len() < required {
        return Err(DeviceError::BufferTooShort {
            required,
            actual: buffer.len(),
        });
    }
    Ok(OperandVector::from_inputs(&buffer[..op.arity()]))
}

/// Copies the result slot of `op` back into `buffer`.
pub fn copy_out(
    op: Operation,
    operands: &OperandVector<Slot>,
    buffer: &mut [Slot],
) -> Result<(), DeviceError> {
    let arity = op.arity();
    let actual = buffer.len();
    let slot = buffer.get_mut(arity).ok_or(DeviceError::BufferTooShort {
        required: required_slots(op),
        actual,
    })?;
    *slot = operands.result(arity);
    Ok(())
}

/// Serves one request against a slot buffer and returns the result.
pub fn handle(cmd: u32, buffer: &mut [Slot]) -> Result<Slot, DeviceError> {
    let op = Operation::from_id(cmd)?;
    let mut operands = copy_in(op, buffer)?;
    let result = dispatch(op, &mut operands)?;
    copy_out(op, &operands, buffer)?;
    Ok(result)
}

/// Decodes the operation and its input slots from a byte image.
pub fn decode_request(
    cmd: u32,
    bytes: &[u8],
) -> Result<(Operation, OperandVector<Slot>), DeviceError> {
    let op = Operation::from_id(cmd)?;
    let required = required_slots(op) * SLOT_SIZE;
    if bytes.len() < required {
        return Err(DeviceError::BufferTooShort {
            required,
            actual: bytes.len(),
        });
    }

    let mut operands = OperandVector::new();
    for (slot, chunk) in operands
        .as_mut_slice()
        .iter_mut()
        .zip(bytes.chunks_exact(SLOT_SIZE))
        .take(op.arity())
    {
        let mut raw = [0u8; SLOT_SIZE];
        raw.copy_from_slice(chunk);
        *slot = Slot::from_ne_bytes(raw);
    }
    Ok((op, operands))
}

/// Writes the result slot of `op` into a byte image, touching only the
/// `SLOT_SIZE` bytes at offset `arity * SLOT_SIZE`.
pub fn encode_response(
    op: Operation,
    operands: &OperandVector<Slot>,
    bytes: &mut [u8],
) -> Result<(), DeviceError> {
    let arity = op.arity();
    let start = arity * SLOT_SIZE;
    let end = start + SLOT_SIZE;
    let actual = bytes.len();
    let out = bytes.get_mut(start..end).ok_or(DeviceError::BufferTooShort {
        required: end,
        actual,
    })?;
    out.copy_from_slice(&operands.result(arity).to_ne_bytes());
    Ok(())
}

/// Serves one request against a byte image and returns the result.
pub fn handle_bytes(cmd: u32, bytes: &mut [u8]) -> Result<Slot, DeviceError> {
    let (op, mut operands) = decode_request(cmd, bytes)?;
    let result = dispatch(op, &mut operands)?;
    encode_response(op, &operands, bytes)?;
    Ok(result)
}
