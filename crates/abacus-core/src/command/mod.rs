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

//! # Command Protocol
//!
//! The request/response contract between a transport and the engines.
//!
//! A request is an operation identifier plus a fixed-capacity operand vector.
//! The dispatcher resolves the identifier to an `Operation`, reads the first
//! `arity` operands, runs the matching primitive or engine, and writes the
//! single result to slot `arity`. Unknown identifiers are rejected with
//! `MathError::BadCommand` before the operand vector is touched.
//!
//! ## Submodules
//!
//! - `operation`: The five operations, their stable wire ids, arities, and
//!   diagnostic names.
//! - `operands`: `OperandVector<T>`, inputs followed by one output slot.
//! - `dispatch`: `dispatch` for a resolved operation and `evaluate` for a raw
//!   wire id.

pub mod dispatch;
pub mod operands;
pub mod operation;

pub use dispatch::{dispatch, evaluate};
pub use operands::{OperandVector, OPERAND_CAPACITY};
pub use operation::{command_name, Operation, MAX_ARITY};
