// Core business logic module

pub mod bridge;
pub mod clock;
pub mod config;
pub mod health;
pub mod pages;
pub mod poller;
pub mod store;
pub mod system_info;

// Re-export commonly used items
pub use bridge::{Bridge, Call, Envelope};
pub use clock::{Clock, ProcessStart, SystemClock};
pub use config::Config;
pub use pages::{Page, PageRouter, PollIntervals};
pub use poller::PollTimer;
pub use store::{Snapshot, StateStore};
