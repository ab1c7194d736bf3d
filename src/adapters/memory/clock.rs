//! Clock adapters.

use std::sync::Mutex;

use crate::domain::foundation::Timestamp;
use crate::ports::Clock;

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to. For tests.
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set(&self, now: Timestamp) {
        *self.now.lock().expect("FixedClock: lock poisoned") = now;
    }

    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn advance_secs(&self, secs: i64) {
        let mut now = self.now.lock().expect("FixedClock: lock poisoned");
        *now = now.plus_secs(secs);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().expect("FixedClock: lock poisoned")
    }
}
