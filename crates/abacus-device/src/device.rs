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

use crate::{
    adapter::{self, Slot},
    admission::{SessionLimiter, SessionPermit},
    config::DeviceConfig,
    error::DeviceError,
    LOG_TARGET,
};
use abacus_core::{command::command_name, error::MathError};
use log::{debug, error, info, warn};
use std::sync::Arc;

/// A request endpoint that admits a bounded number of sessions.
///
/// Dropping the device does not close its sessions; each session keeps the
/// shared limiter alive until it is released.
#[derive(Debug)]
pub struct Device {
    name: Arc<str>,
    limiter: Arc<SessionLimiter>,
}

impl Device {
    pub fn new(config: DeviceConfig) -> Self {
        let device = Self {
            name: Arc::from(config.get_name()),
            limiter: Arc::new(SessionLimiter::new(config.get_max_sessions())),
        };
        info!(
            target: LOG_TARGET,
            "{}: device ready, at most {} session(s)",
            device.name,
            device.limiter.limit()
        );
        device
    }

    /// Opens a session, or fails with `DeviceError::Busy` if the session
    /// limit has been reached.
    pub fn open(&self) -> Result<Session, DeviceError> {
        let Some(permit) = self.limiter.try_acquire() else {
            warn!(
                target: LOG_TARGET,
                "{}: open command denied, max. sessions limit of {} has been reached",
                self.name,
                self.limiter.limit()
            );
            return Err(DeviceError::Busy {
                limit: self.limiter.limit(),
            });
        };

        info!(target: LOG_TARGET, "{}: opened device", self.name);
        info!(
            target: LOG_TARGET,
            "{}: {} session(s) total",
            self.name,
            self.limiter.active()
        );
        Ok(Session {
            name: Arc::clone(&self.name),
            permit: Some(permit),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of currently open sessions.
    #[inline]
    pub fn active_sessions(&self) -> usize {
        self.limiter.active()
    }

    #[inline]
    pub fn max_sessions(&self) -> usize {
        self.limiter.limit()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new(DeviceConfig::default())
    }
}

/// An admitted caller. Dropping the session releases its slot.
///
/// Requests on a session are independent; a session may serve any number of
/// them, from any thread.
#[derive(Debug)]
pub struct Session {
    name: Arc<str>,
    permit: Option<SessionPermit>,
}

impl Session {
    /// Serves one request in place.
    ///
    /// `buffer` holds the input slots followed by the result slot. Only
    /// `buffer[arity]` is written, and only on success.
    pub fn ioctl(&self, cmd: u32, buffer: &mut [Slot]) -> Result<Slot, DeviceError> {
        debug!(target: LOG_TARGET, "{}: ioctl begin {}", self.name, command_name(cmd));
        let outcome = adapter::handle(cmd, buffer);
        self.finish(cmd, outcome)
    }

    /// Serves one request against the native-endian byte image of the slots.
    pub fn ioctl_bytes(&self, cmd: u32, bytes: &mut [u8]) -> Result<Slot, DeviceError> {
        debug!(target: LOG_TARGET, "{}: ioctl begin {}", self.name, command_name(cmd));
        let outcome = adapter::handle_bytes(cmd, bytes);
        self.finish(cmd, outcome)
    }

    fn finish(
        &self,
        cmd: u32,
        outcome: Result<Slot, DeviceError>,
    ) -> Result<Slot, DeviceError> {
        match &outcome {
            Ok(_) => debug!(target: LOG_TARGET, "{}: ioctl end", self.name),
            Err(DeviceError::InvalidArgument(MathError::BadCommand)) => {
                error!(
                    target: LOG_TARGET,
                    "{}: unknown operation code {}", self.name, cmd
                )
            }
            Err(e) => error!(
                target: LOG_TARGET,
                "{}: unable to compute requested {}: {}",
                self.name,
                command_name(cmd),
                e
            ),
        }
        outcome
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(permit) = self.permit.take() {
            let remaining = permit.release();
            info!(target: LOG_TARGET, "{}: released device", self.name);
            info!(
                target: LOG_TARGET,
                "{}: {} session(s) total", self.name, remaining
            );
        }
    }
}
