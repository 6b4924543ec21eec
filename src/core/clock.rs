//! Wall clock abstraction and the process start timestamp.
//!
//! The start time is the only state that outlives a single request. It is
//! captured once and handed to the aggregator, so tests can substitute a
//! fixed clock and a chosen start instant.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real UTC wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Instant the process (or service) came up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessStart {
    started_at: DateTime<Utc>,
}

impl ProcessStart {
    /// Capture the start time from `clock`
    pub fn capture(clock: &dyn Clock) -> Self {
        Self {
            started_at: clock.now(),
        }
    }

    pub fn at(started_at: DateTime<Utc>) -> Self {
        Self { started_at }
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}
