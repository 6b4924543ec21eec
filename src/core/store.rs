//! Latest-value state store shared between poll jobs and views.
//!
//! Publishers overwrite the slot for their call; subscribers observe the
//! newest snapshot through a `watch` channel, so the last write wins.

use std::sync::Arc;

use tokio::sync::watch;

use crate::core::bridge::{Call, Envelope};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub health: Option<Envelope>,
    pub quick: Option<Envelope>,
    pub system_info: Option<Envelope>,
    pub ping: Option<Envelope>,
    /// Incremented on every publish
    pub revision: u64,
}

impl Snapshot {
    pub fn get(&self, call: Call) -> Option<&Envelope> {
        match call {
            Call::GetHealthStatus => self.health.as_ref(),
            Call::GetQuickHealth => self.quick.as_ref(),
            Call::GetSystemInfo => self.system_info.as_ref(),
            Call::Ping => self.ping.as_ref(),
        }
    }

    fn slot_mut(&mut self, call: Call) -> &mut Option<Envelope> {
        match call {
            Call::GetHealthStatus => &mut self.health,
            Call::GetQuickHealth => &mut self.quick,
            Call::GetSystemInfo => &mut self.system_info,
            Call::Ping => &mut self.ping,
        }
    }
}

#[derive(Debug, Clone)]
pub struct StateStore {
    tx: Arc<watch::Sender<Snapshot>>,
}

impl StateStore {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn publish(&self, call: Call, envelope: Envelope) {
        self.tx.send_modify(|snapshot| {
            *snapshot.slot_mut(call) = Some(envelope);
            snapshot.revision += 1;
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
