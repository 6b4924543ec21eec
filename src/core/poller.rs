//! Owned, cancelable repeating poll timers.
//!
//! A timer fires immediately on start and then every `period`. Each tick
//! hands the job to the blocking pool without waiting for it, so a slow
//! poll overlapping the next tick simply runs alongside it.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

pub struct PollTimer {
    name: String,
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl PollTimer {
    pub fn new<S: Into<String>>(name: S, period: Duration) -> Self {
        Self {
            name: name.into(),
            period,
            handle: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Start ticking on `runtime`. Returns `false` without spawning
    /// anything if the timer is already running.
    pub fn start<F>(&mut self, runtime: &Handle, job: F) -> bool
    where
        F: Fn() + Send + Sync + 'static,
    {
        if self.is_running() {
            log::debug!("Poll timer {} already running", self.name);
            return false;
        }

        let job = Arc::new(job);
        let period = self.period;
        let name = self.name.clone();

        self.handle = Some(runtime.spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                let job = Arc::clone(&job);
                log::trace!("Poll timer {} tick", name);
                tokio::task::spawn_blocking(move || job());
            }
        }));

        log::debug!("Poll timer {} started ({:?})", self.name, self.period);
        true
    }

    /// Cancel future ticks. Jobs already handed off run to completion.
    /// Returns whether a running timer was stopped.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                log::debug!("Poll timer {} stopped", self.name);
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for PollTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
