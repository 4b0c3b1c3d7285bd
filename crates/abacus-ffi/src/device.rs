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

//! Device and session lifecycle plus the request entry point.

use abacus_core::error::MathError;
use abacus_device::{
    config::DeviceConfig,
    device::{Device, Session},
};
use libc::{c_int, c_long, c_uint};
use std::ptr::null_mut;

/// Creates a device admitting at most `max_sessions` concurrent sessions.
///
/// The returned pointer must be released with `abacus_device_free`.
#[no_mangle]
pub extern "C" fn abacus_device_new(max_sessions: usize) -> *mut Device {
    let config = DeviceConfig::new().max_sessions(max_sessions);
    Box::into_raw(Box::new(Device::new(config)))
}

/// Frees a device allocated by `abacus_device_new`.
///
/// Open sessions stay valid and still count against the limit until closed.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `abacus_device_new`.
#[no_mangle]
pub unsafe extern "C" fn abacus_device_free(ptr: *mut Device) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Returns the number of sessions currently open on the device.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `abacus_device_new`.
#[no_mangle]
pub unsafe extern "C" fn abacus_device_active_sessions(ptr: *const Device) -> usize {
    assert!(
        !ptr.is_null(),
        "called `abacus_device_active_sessions` with null pointer"
    );
    (&*ptr).active_sessions()
}

/// Returns the session limit the device was created with.
///
/// # Panics
///
/// This function will panic if called with a null pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `abacus_device_new`.
#[no_mangle]
pub unsafe extern "C" fn abacus_device_max_sessions(ptr: *const Device) -> usize {
    assert!(
        !ptr.is_null(),
        "called `abacus_device_max_sessions` with null pointer"
    );
    (&*ptr).max_sessions()
}

/// Opens a session on the device.
///
/// Returns `NULL` when the session limit has been reached. If `out_errno` is
/// not `NULL`, it receives `0` on success and `-EBUSY` on denial.
///
/// # Panics
///
/// This function will panic if called with a null device pointer.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `device` is valid and was allocated by
/// `abacus_device_new`, and that `out_errno` is either `NULL` or valid
/// for writes.
#[no_mangle]
pub unsafe extern "C" fn abacus_session_open(
    device: *const Device,
    out_errno: *mut c_int,
) -> *mut Session {
    assert!(
        !device.is_null(),
        "called `abacus_session_open` with null pointer"
    );

    let (session, code) = match (&*device).open() {
        Ok(session) => (Box::into_raw(Box::new(session)), 0),
        Err(e) => (null_mut(), -e.errno()),
    };
    if !out_errno.is_null() {
        *out_errno = code;
    }
    session
}

/// Closes a session opened by `abacus_session_open`, releasing its slot.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that the pointer is valid and was
/// allocated by `abacus_session_open`.
#[no_mangle]
pub unsafe extern "C" fn abacus_session_close(ptr: *mut Session) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Serves one request.
///
/// `arg` points to `len` slots laid out as the operation's inputs followed by
/// its result slot (`2` slots for negation, `3` for the others). On success
/// the result slot is written and `0` is returned. On failure nothing is
/// written and `-EINVAL` is returned.
///
/// If `out_kind` is not `NULL`, it receives `0` on success (or for a buffer
/// that is too short) and the error code of the computation failure
/// otherwise; see `abacus_error_name`.
///
/// # Panics
///
/// This function will panic if called with a null session pointer, or with
/// a null `arg` and a non-zero `len`.
///
/// # Safety
///
/// This function is unsafe because it dereferences raw pointers.
/// The caller must ensure that `session` is valid and was allocated by
/// `abacus_session_open`, that `arg` is valid for reads and writes of `len`
/// slots, and that `out_kind` is either `NULL` or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn abacus_ioctl(
    session: *const Session,
    cmd: c_uint,
    arg: *mut c_int,
    len: usize,
    out_kind: *mut c_uint,
) -> c_long {
    assert!(
        !session.is_null(),
        "called `abacus_ioctl` with null pointer"
    );

    let buffer: &mut [c_int] = if arg.is_null() {
        assert!(
            len == 0,
            "called `abacus_ioctl` with null buffer but length {}",
            len
        );
        &mut []
    } else {
        std::slice::from_raw_parts_mut(arg, len)
    };

    let outcome = (&*session).ioctl(cmd, buffer);
    if !out_kind.is_null() {
        *out_kind = outcome
            .as_ref()
            .err()
            .and_then(|e| e.math_error())
            .map_or(0, MathError::code);
    }
    match outcome {
        Ok(_) => 0,
        Err(e) => -c_long::from(e.errno()),
    }
}
