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

//! # Abacus Device
//!
//! The transport side of the abacus engine: everything a caller goes through
//! before and after a request reaches `abacus_core::command::evaluate`.
//!
//! ## Modules
//!
//! - `config`: `DeviceConfig`, a consuming builder for the device name and
//!   the concurrent session bound.
//! - `admission`: `SessionLimiter`, an atomic "add unless at limit" counter
//!   handing out RAII `SessionPermit`s.
//! - `adapter`: The request protocol adapter. Copies the `arity` input slots
//!   out of a caller buffer, runs the dispatcher, and copies the single
//!   result slot back, for `i32` slices and for their native-endian byte
//!   images.
//! - `device`: `Device` and `Session`, tying admission control, the adapter,
//!   and logging together.
//! - `error`: `DeviceError` and its `errno` mapping.
//!
//! ## Logging
//!
//! Events are emitted through the `log` facade under the `abacus` target:
//! session open/release at `info`, admission denial at `warn`, request
//! boundaries at `debug`, and rejected or failed requests at `error`. No
//! logger is installed by this crate.

pub mod adapter;
pub mod admission;
pub mod config;
pub mod device;
pub mod error;

/// The `log` target used by this crate.
pub const LOG_TARGET: &str = "abacus";
