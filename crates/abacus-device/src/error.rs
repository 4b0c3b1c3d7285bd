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

use abacus_core::error::MathError;

/// The error type for device operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceError {
    /// A session could not be opened because `limit` sessions are active.
    Busy {
        /// The configured session bound.
        limit: usize,
    },
    /// The request was rejected or its computation failed.
    InvalidArgument(MathError),
    /// The caller's buffer cannot hold the operation's inputs and result.
    BufferTooShort {
        /// Slots (or bytes, for byte images) the operation needs.
        required: usize,
        /// Slots (or bytes) the caller provided.
        actual: usize,
    },
}

impl DeviceError {
    /// Returns the positive `errno` value a transport reports for this error.
    ///
    /// Admission denial maps to `EBUSY`; every request failure collapses to
    /// `EINVAL`.
    #[inline]
    pub fn errno(&self) -> i32 {
        match self {
            DeviceError::Busy { .. } => libc::EBUSY,
            DeviceError::InvalidArgument(_) | DeviceError::BufferTooShort { .. } => libc::EINVAL,
        }
    }

    /// Returns the computation failure behind this error, if there is one.
    #[inline]
    pub fn math_error(&self) -> Option<MathError> {
        match self {
            DeviceError::InvalidArgument(e) => Some(*e),
            _ => None,
        }
    }
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceError::Busy { limit } => {
                write!(f, "open denied, session limit of {} reached", limit)
            }
            DeviceError::InvalidArgument(e) => write!(f, "invalid argument: {}", e),
            DeviceError::BufferTooShort { required, actual } => write!(
                f,
                "buffer too short: required {} but got {}",
                required, actual
            ),
        }
    }
}

impl std::error::Error for DeviceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DeviceError::InvalidArgument(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MathError> for DeviceError {
    fn from(e: MathError) -> Self {
        Self::InvalidArgument(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_errno_mapping() {
        assert_eq!(DeviceError::Busy { limit: 6 }.errno(), libc::EBUSY);
        assert_eq!(
            DeviceError::from(MathError::Overflow).errno(),
            libc::EINVAL
        );
        assert_eq!(
            DeviceError::BufferTooShort {
                required: 3,
                actual: 1
            }
            .errno(),
            libc::EINVAL
        );
    }

    #[test]
    fn test_math_error_and_source() {
        let e = DeviceError::from(MathError::ZeroDivision);
        assert_eq!(e.math_error(), Some(MathError::ZeroDivision));
        assert!(e.source().is_some());
        assert_eq!(DeviceError::Busy { limit: 1 }.math_error(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            DeviceError::Busy { limit: 6 }.to_string(),
            "open denied, session limit of 6 reached"
        );
        assert_eq!(
            DeviceError::from(MathError::ZeroDivision).to_string(),
            "invalid argument: division by zero"
        );
    }
}
