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

//! Static, NUL-terminated diagnostic names for command ids and error codes.

use abacus_core::{command::Operation, error::MathError};
use libc::{c_char, c_uint};
use std::ffi::CStr;

fn command_cstr(cmd: c_uint) -> &'static CStr {
    match Operation::from_id(cmd) {
        Ok(Operation::Negate) => c"MATH_NEG",
        Ok(Operation::Add) => c"MATH_ADD",
        Ok(Operation::Divide) => c"MATH_DIV",
        Ok(Operation::Exponentiate) => c"MATH_EXP",
        Ok(Operation::Logarithm) => c"MATH_LOG",
        Err(_) => c"UNKNOWN",
    }
}

fn error_cstr(code: c_uint) -> &'static CStr {
    match MathError::from_code(code) {
        Some(MathError::BadCommand) => c"BAD_COMMAND",
        Some(MathError::Overflow) => c"OVERFLOW",
        Some(MathError::Underflow) => c"UNDERFLOW",
        Some(MathError::BadExponent) => c"BAD_EXPONENT",
        Some(MathError::BadLogarithm) => c"BAD_LOGARITHM",
        Some(MathError::ZeroDivision) => c"ZERO_DIVISION",
        None if code == 0 => c"OK",
        None => c"UNKNOWN",
    }
}

/// Returns the name of a command id, or `"UNKNOWN"`.
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn abacus_command_name(cmd: c_uint) -> *const c_char {
    command_cstr(cmd).as_ptr()
}

/// Returns the name of an error code reported through `abacus_ioctl`.
///
/// Code `0` is `"OK"`; unassigned codes are `"UNKNOWN"`. The returned string
/// is static and must not be freed.
#[no_mangle]
pub extern "C" fn abacus_error_name(code: c_uint) -> *const c_char {
    error_cstr(code).as_ptr()
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn read(ptr: *const c_char) -> &'static str {
        CStr::from_ptr(ptr).to_str().unwrap()
    }

    #[test]
    fn test_command_names_match_core() {
        for op in Operation::ALL {
            assert_eq!(unsafe { read(abacus_command_name(op.id())) }, op.name());
        }
        assert_eq!(unsafe { read(abacus_command_name(0)) }, "UNKNOWN");
        assert_eq!(unsafe { read(abacus_command_name(6)) }, "UNKNOWN");
    }

    #[test]
    fn test_error_names_match_core() {
        for e in MathError::ALL {
            assert_eq!(unsafe { read(abacus_error_name(e.code())) }, e.name());
        }
        assert_eq!(unsafe { read(abacus_error_name(0)) }, "OK");
        assert_eq!(unsafe { read(abacus_error_name(1000)) }, "UNKNOWN");
    }
}
