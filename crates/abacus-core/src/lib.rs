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

//! # Abacus Core
//!
//! Checked integer arithmetic behind a small, fixed command protocol. Every
//! operation either produces a representable result or reports exactly one
//! error kind; nothing wraps, saturates, or traps.
//!
//! ## Modules
//!
//! - `num`: Checked scalar primitives (`negate`, `add`, `divide`, `multiply`)
//!   and the sign/magnitude classes used to case-split the engines.
//! - `engine`: Exponentiation (`power`) and floor integer logarithm (`log`)
//!   built on the checked primitives.
//! - `command`: The `Operation` set with its stable wire ids and arities, the
//!   fixed-capacity `OperandVector`, and the `dispatch`/`evaluate` entry points.
//! - `error`: The closed `MathError` taxonomy.
//!
//! All functions are generic over `num_traits::PrimInt + Signed`; the command
//! protocol uses 32-bit slots. The crate holds no state, so every call is pure
//! and may run concurrently with any other.

pub mod command;
pub mod engine;
pub mod error;
pub mod num;
