//! Request/response bridge between the UI and the health aggregator.
//!
//! Every call returns an [`Envelope`]. The bridge refuses calls until it is
//! started, and callers can wait for readiness with a bounded poll.

mod call;
mod envelope;
mod transport;

pub use call::Call;
pub use envelope::{Envelope, ErrorCode};
pub use transport::{BridgeRequest, BridgeResponse};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info};
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::core::clock::{Clock, SystemClock};
use crate::core::health::HealthAggregator;
use crate::core::system_info::{MetricsSource, SysinfoSource};

/// Readiness is re-checked at this period while waiting
pub const READY_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct Bridge<S = SysinfoSource, C = SystemClock> {
    health: HealthAggregator<S, C>,
    ready: AtomicBool,
}

impl<S: MetricsSource, C: Clock> Bridge<S, C> {
    /// A bridge over `health`, not yet accepting calls
    pub fn new(health: HealthAggregator<S, C>) -> Self {
        Self {
            health,
            ready: AtomicBool::new(false),
        }
    }

    pub fn start(&self) {
        self.ready.store(true, Ordering::SeqCst);
        info!("Bridge ready: {} functions exposed", Call::ALL.len());
    }

    pub fn shutdown(&self) {
        self.ready.store(false, Ordering::SeqCst);
        info!("Bridge shut down");
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    pub fn health(&self) -> &HealthAggregator<S, C> {
        &self.health
    }

    /// Dispatch one call. Blocks for the duration of any CPU sample.
    pub fn call(&self, call: Call) -> Envelope {
        if !self.is_ready() {
            return Envelope::service_not_initialized("health");
        }

        debug!("Bridge call {}", call);

        match call {
            Call::GetHealthStatus => Envelope::success(&self.health.get_health_status()),
            Call::GetQuickHealth => Envelope::success(&self.health.get_quick_health()),
            Call::GetSystemInfo => match self.health.get_system_info() {
                Ok(info) => Envelope::success(&info),
                Err(e) => {
                    let message = format!("Error getting system info: {}", e);
                    error!("{}", message);
                    Envelope::error(message, ErrorCode::UnexpectedError)
                }
            },
            Call::Ping => Envelope::success(&self.health.ping()),
        }
    }

    /// Dispatch by function name
    pub fn call_named(&self, name: &str) -> Envelope {
        match name.parse::<Call>() {
            Ok(call) => self.call(call),
            Err(_) => {
                debug!("Bridge call to unknown function {}", name);
                Envelope::service_not_found(name)
            }
        }
    }

    /// Poll readiness every [`READY_POLL_INTERVAL`] until ready or `timeout`
    /// elapses. Returns whether the bridge became ready.
    pub async fn wait_ready(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let mut ticker = interval(READY_POLL_INTERVAL);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if self.is_ready() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
        }
    }
}

impl<S, C> Bridge<S, C>
where
    S: MetricsSource + 'static,
    C: Clock + 'static,
{
    /// Wait for readiness, then run the call on the blocking pool.
    /// A bridge that never becomes ready fails this call permanently.
    pub async fn call_when_ready(self: Arc<Self>, call: Call, timeout: Duration) -> Envelope {
        if !self.wait_ready(timeout).await {
            return Envelope::error(
                format!(
                    "Bridge not ready after {} ms; {} was not dispatched",
                    timeout.as_millis(),
                    call
                ),
                ErrorCode::ServiceNotInitialized,
            );
        }

        match tokio::task::spawn_blocking(move || self.call(call)).await {
            Ok(envelope) => envelope,
            Err(e) => Envelope::error(
                format!("Bridge call {} did not complete: {}", call, e),
                ErrorCode::UnexpectedError,
            ),
        }
    }
}
