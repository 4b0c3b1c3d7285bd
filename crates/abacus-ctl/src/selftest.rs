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

//! Conformance run against a live device.
//!
//! Every case goes through a session exactly as an external caller would,
//! then the session bound is probed: `limit` opens must succeed and the next
//! one must be denied.

use abacus_core::command::{Operation, OPERAND_CAPACITY};
use abacus_device::{adapter::Slot, device::Device, error::DeviceError, LOG_TARGET};
use log::{debug, info};

const MIN: Slot = Slot::MIN;
const MAX: Slot = Slot::MAX;

/// One request and its expected outcome; `None` means the request must fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub op: Operation,
    pub inputs: [Slot; 2],
    pub expected: Option<Slot>,
}

const fn ok1(op: Operation, a: Slot, r: Slot) -> Case {
    Case {
        op,
        inputs: [a, 0],
        expected: Some(r),
    }
}

const fn fail1(op: Operation, a: Slot) -> Case {
    Case {
        op,
        inputs: [a, 0],
        expected: None,
    }
}

const fn ok2(op: Operation, a: Slot, b: Slot, r: Slot) -> Case {
    Case {
        op,
        inputs: [a, b],
        expected: Some(r),
    }
}

const fn fail2(op: Operation, a: Slot, b: Slot) -> Case {
    Case {
        op,
        inputs: [a, b],
        expected: None,
    }
}

use Operation::{Add, Divide, Exponentiate, Logarithm, Negate};

/// The conformance table.
pub const CASES: &[Case] = &[
    ok1(Negate, 4, -4),
    fail1(Negate, MIN),
    ok2(Add, 2, 2, 4),
    ok2(Add, 2, -5, -3),
    fail2(Add, MAX, 2),
    ok2(Divide, 6, 3, 2),
    ok2(Divide, 200, -3, -66),
    fail2(Divide, 1, 0),
    ok2(Exponentiate, 2, 2, 4),
    ok2(Exponentiate, -2, 2, 4),
    ok2(Exponentiate, 1, 1_000_000, 1),
    fail2(Exponentiate, 2, 1_000_000),
    ok2(Logarithm, 4, 2, 2),
    ok2(Logarithm, 1, 2, 0),
    ok2(Logarithm, 1, 3, 0),
    ok2(Logarithm, 1, 4, 0),
    ok2(Logarithm, 2, 2, 1),
    ok2(Logarithm, 2, 3, 0),
    ok2(Logarithm, 2, 4, 0),
    ok2(Logarithm, 4, 3, 1),
    ok2(Logarithm, 4, 4, 1),
    ok2(Logarithm, 9, 2, 3),
    ok2(Logarithm, 9, 3, 2),
    ok2(Logarithm, 9, 4, 1),
    ok2(Logarithm, 15, 4, 1),
    ok2(Logarithm, 16, 4, 2),
    ok2(Logarithm, MAX - 1, MAX, 0),
    fail2(Logarithm, MAX, 1),
    ok2(Logarithm, MAX, MAX, 1),
    ok2(Logarithm, MAX, MAX - 1, 1),
    // log2(MAX) is the bit width minus the sign bit minus one.
    ok2(Logarithm, MAX, 2, Slot::BITS as Slot - 2),
    ok2(Logarithm, 3, 3, 1),
    fail2(Logarithm, 0, 0),
];

/// Summary of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Number of requests served.
    pub requests: usize,
    /// Number of sessions opened during the probe.
    pub sessions: usize,
}

/// The error type for a failed self-test.
#[derive(Debug)]
pub enum SelftestError {
    /// A session could not be opened.
    Open(DeviceError),
    /// A request produced an unexpected outcome.
    Mismatch {
        case: Case,
        got: Result<Slot, DeviceError>,
    },
    /// A request failed but wrote its result slot anyway.
    BufferModified { case: Case },
    /// The device admitted a session beyond its limit.
    LimitNotEnforced { limit: usize },
}

impl std::fmt::Display for SelftestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(e) => write!(f, "cannot open device: {}", e),
            Self::Mismatch { case, got } => {
                write!(f, "ioctl {}{:?} ", case.op, &case.inputs[..case.op.arity()])?;
                match (case.expected, got) {
                    (Some(want), Ok(v)) => write!(f, "should return {} but returned {}", want, v),
                    (Some(want), Err(e)) => {
                        write!(f, "should return {} but returned error: {}", want, e)
                    }
                    (None, Ok(v)) => write!(f, "should fail but returned {}", v),
                    (None, Err(e)) => write!(f, "failed unexpectedly: {}", e),
                }
            }
            Self::BufferModified { case } => write!(
                f,
                "ioctl {}{:?} failed but modified the caller buffer",
                case.op,
                &case.inputs[..case.op.arity()]
            ),
            Self::LimitNotEnforced { limit } => {
                write!(f, "open({}) did not fail, but has to fail", limit)
            }
        }
    }
}

impl std::error::Error for SelftestError {}

impl From<DeviceError> for SelftestError {
    fn from(e: DeviceError) -> Self {
        Self::Open(e)
    }
}

/// Runs every case of `cases` through one session of `device`.
pub fn run_cases(device: &Device, cases: &[Case]) -> Result<usize, SelftestError> {
    let session = device.open()?;
    for case in cases {
        let arity = case.op.arity();
        let mut buffer = [0 as Slot; OPERAND_CAPACITY];
        buffer[..arity].copy_from_slice(&case.inputs[..arity]);
        let before = buffer;

        let got = session.ioctl(case.op.id(), &mut buffer);
        debug!(target: LOG_TARGET, "selftest {:?} -> {:?}", case, got);
        match (case.expected, &got) {
            (Some(want), Ok(v)) if *v == want && buffer[arity] == want => {}
            (None, Err(_)) if buffer == before => {}
            (None, Err(_)) => return Err(SelftestError::BufferModified { case: *case }),
            _ => return Err(SelftestError::Mismatch { case: *case, got }),
        }
    }
    Ok(cases.len())
}

/// Opens `device.max_sessions()` sessions and checks that one more is denied.
pub fn probe_session_limit(device: &Device) -> Result<usize, SelftestError> {
    let limit = device.max_sessions();
    let sessions = (0..limit)
        .map(|_| device.open())
        .collect::<Result<Vec<_>, _>>()?;
    match device.open() {
        Err(DeviceError::Busy { .. }) => Ok(sessions.len()),
        Err(e) => Err(SelftestError::Open(e)),
        Ok(_) => Err(SelftestError::LimitNotEnforced { limit }),
    }
}

/// Runs the full self-test: the conformance table, then the session probe.
pub fn run(device: &Device) -> Result<Report, SelftestError> {
    let requests = run_cases(device, CASES)?;
    info!(target: LOG_TARGET, "selftest: {} request(s) passed", requests);
    let sessions = probe_session_limit(device)?;
    info!(target: LOG_TARGET, "selftest: session limit of {} enforced", sessions);
    Ok(Report { requests, sessions })
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_device::config::DeviceConfig;

    #[test]
    fn test_full_run_passes_on_default_device() {
        let device = Device::default();
        let report = run(&device).unwrap();
        assert_eq!(report.requests, CASES.len());
        assert_eq!(report.sessions, 6);
        assert_eq!(device.active_sessions(), 0);
    }

    #[test]
    fn test_probe_respects_configured_limit() {
        let device = Device::new(DeviceConfig::new().max_sessions(2));
        assert_eq!(probe_session_limit(&device).unwrap(), 2);
    }

    #[test]
    fn test_mismatch_is_reported() {
        let device = Device::default();
        let wrong = [ok2(Add, 2, 2, 5)];
        let err = run_cases(&device, &wrong).unwrap_err();
        assert_eq!(err.to_string(), "ioctl MATH_ADD[2, 2] should return 5 but returned 4");
    }

    #[test]
    fn test_unexpected_success_is_reported() {
        let device = Device::default();
        let wrong = [fail1(Negate, 3)];
        let err = run_cases(&device, &wrong).unwrap_err();
        assert_eq!(err.to_string(), "ioctl MATH_NEG[3] should fail but returned -3");
    }

    #[test]
    fn test_closed_device_fails_to_open() {
        let device = Device::new(DeviceConfig::new().max_sessions(0));
        assert!(matches!(
            run(&device),
            Err(SelftestError::Open(DeviceError::Busy { limit: 0 }))
        ));
    }
}
