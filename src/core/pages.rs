//! Pages and the router that owns their poll timers.
//!
//! Only the visible page polls. Navigating away stops every timer of the
//! previous page before the next page's timers start.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::core::bridge::{Bridge, Call};
use crate::core::clock::Clock;
use crate::core::config::Config;
use crate::core::poller::PollTimer;
use crate::core::store::StateStore;
use crate::core::system_info::MetricsSource;
use crate::error::ProbeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    SystemInfo,
    Settings,
}

/// One bridge call polled at a fixed period
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feed {
    pub call: Call,
    pub period: Duration,
}

/// Poll periods per call kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIntervals {
    pub health: Duration,
    pub quick: Duration,
    pub system_info: Duration,
}

impl From<&Config> for PollIntervals {
    fn from(config: &Config) -> Self {
        Self {
            health: Duration::from_secs(config.health_poll_secs),
            quick: Duration::from_secs(config.quick_poll_secs),
            system_info: Duration::from_secs(config.system_info_poll_secs),
        }
    }
}

impl Default for PollIntervals {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Dashboard, Page::SystemInfo, Page::Settings];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::SystemInfo => "system-info",
            Page::Settings => "settings",
        }
    }

    /// Calls this page keeps fresh while visible
    pub fn feeds(&self, intervals: &PollIntervals) -> Vec<Feed> {
        match self {
            Page::Dashboard => vec![
                Feed {
                    call: Call::GetHealthStatus,
                    period: intervals.health,
                },
                Feed {
                    call: Call::GetQuickHealth,
                    period: intervals.quick,
                },
            ],
            Page::SystemInfo => vec![Feed {
                call: Call::GetSystemInfo,
                period: intervals.system_info,
            }],
            Page::Settings => Vec::new(),
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Page::ALL
            .into_iter()
            .find(|page| page.as_str() == normalized)
            .ok_or_else(|| ProbeError::other(format!("Unknown page '{}'", s)))
    }
}

pub struct PageRouter<S, C> {
    bridge: Arc<Bridge<S, C>>,
    store: StateStore,
    runtime: Handle,
    intervals: PollIntervals,
    current: Option<Page>,
    timers: Vec<PollTimer>,
}

impl<S, C> PageRouter<S, C>
where
    S: MetricsSource + 'static,
    C: Clock + 'static,
{
    pub fn new(
        bridge: Arc<Bridge<S, C>>,
        store: StateStore,
        runtime: Handle,
        intervals: PollIntervals,
    ) -> Self {
        Self {
            bridge,
            store,
            runtime,
            intervals,
            current: None,
            timers: Vec::new(),
        }
    }

    pub fn current(&self) -> Option<Page> {
        self.current
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Number of timers currently ticking
    pub fn active_timers(&self) -> usize {
        self.timers.iter().filter(|timer| timer.is_running()).count()
    }

    /// Show `page`. Navigating to the page already shown changes nothing.
    pub fn navigate(&mut self, page: Page) {
        if self.current == Some(page) {
            return;
        }

        self.leave();
        log::info!("Navigating to {}", page);

        for feed in page.feeds(&self.intervals) {
            let mut timer = PollTimer::new(format!("{}:{}", page, feed.call), feed.period);
            let bridge = Arc::clone(&self.bridge);
            let store = self.store.clone();
            let call = feed.call;

            timer.start(&self.runtime, move || {
                store.publish(call, bridge.call(call));
            });
            self.timers.push(timer);
        }

        self.current = Some(page);
    }

    /// Stop every timer of the current page
    pub fn leave(&mut self) {
        for mut timer in self.timers.drain(..) {
            timer.stop();
        }
        if let Some(page) = self.current.take() {
            log::debug!("Left {}", page);
        }
    }
}
