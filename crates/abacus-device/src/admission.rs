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

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

/// Bounds the number of concurrently open sessions.
///
/// The counter only ever moves through `try_acquire` and the drop of a
/// `SessionPermit`, so `active() <= limit()` always holds.
#[derive(Debug)]
pub struct SessionLimiter {
    active: AtomicUsize,
    limit: usize,
}

impl SessionLimiter {
    /// Creates a limiter admitting at most `limit` sessions at a time.
    #[inline]
    pub fn new(limit: usize) -> Self {
        Self {
            active: AtomicUsize::new(0),
            limit,
        }
    }

    /// Admits one more session unless the limit has been reached.
    ///
    /// Returns `None` when the limit is reached; the counter is unchanged in
    /// that case.
    pub fn try_acquire(self: &Arc<Self>) -> Option<SessionPermit> {
        self.active
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| {
                (n < self.limit).then_some(n + 1)
            })
            .ok()
            .map(|_| SessionPermit {
                limiter: Some(Arc::clone(self)),
            })
    }

    /// Returns the number of sessions currently admitted.
    #[inline]
    pub fn active(&self) -> usize {
        self.active.load(Ordering::Acquire)
    }

    /// Returns the configured bound.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    #[inline]
    fn release_one(&self) -> usize {
        let prev = self.active.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(prev > 0, "released a session permit that was never acquired");
        prev - 1
    }
}

/// Proof of admission. Dropping the permit releases its slot.
#[derive(Debug)]
pub struct SessionPermit {
    limiter: Option<Arc<SessionLimiter>>,
}

impl SessionPermit {
    /// Releases the slot now and returns the number of sessions still active.
    #[inline]
    pub fn release(mut self) -> usize {
        self.limiter
            .take()
            .map_or(0, |limiter| limiter.release_one())
    }
}

impl Drop for SessionPermit {
    fn drop(&mut self) {
        if let Some(limiter) = self.limiter.take() {
            limiter.release_one();
        }
    }
}
