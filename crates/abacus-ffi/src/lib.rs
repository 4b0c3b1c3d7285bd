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

//! # Abacus FFI
//!
//! **C-Compatible Bindings for the Abacus Device.**
//!
//! This crate exposes the session-limited abacus device to C and any other
//! environment that can call a C ABI. It follows three rules:
//!
//! 1.  **Opaque Handles**: `Device` and `Session` live behind raw pointers.
//!     The host never touches their fields and only uses the functions below.
//! 2.  **Explicit Lifecycle**: Every `_new`/`_open` has a matching
//!     `_free`/`_close`. A session may be closed before or after its device is
//!     freed.
//! 3.  **Fail-Fast Safety**: Passing a `NULL` handle aborts with a panic
//!     naming the offending function instead of risking undefined behavior.
//!
//! ## Return Codes
//!
//! Calls that can fail return `0` on success and a negated `errno` value on
//! failure, mirroring a character device: `-EBUSY` when the session limit is
//! reached, `-EINVAL` for every rejected or failed request. The precise
//! failure kind is available through an optional out-parameter and can be
//! turned into text with `abacus_error_name`.
//!
//! ## Exported API
//!
//! * `abacus_device_new`, `abacus_device_free`
//! * `abacus_device_active_sessions`, `abacus_device_max_sessions`
//! * `abacus_session_open`, `abacus_session_close`
//! * `abacus_ioctl`
//! * `abacus_command_name`, `abacus_error_name`

pub mod device;
pub mod names;
