use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Relay counters. Routing failures are invisible to senders, so these are
/// the only place they can be observed.
#[derive(Default)]
pub struct RelayStats {
    signals_routed: AtomicU64,
    signals_target_gone: AtomicU64,
    broadcasts: AtomicU64,
    events_delivered: AtomicU64,
    events_dropped: AtomicU64,
    transport_errors: AtomicU64,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub signals_routed: u64,
    pub signals_target_gone: u64,
    pub broadcasts: u64,
    pub events_delivered: u64,
    pub events_dropped: u64,
    pub transport_errors: u64,
}

impl RelayStats {
    pub fn record_routed(&self) {
        self.signals_routed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_target_gone(&self) {
        self.signals_target_gone.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_broadcast(&self) {
        self.broadcasts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_delivered(&self, count: u64) {
        self.events_delivered.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_dropped(&self) {
        self.events_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            signals_routed: self.signals_routed.load(Ordering::Relaxed),
            signals_target_gone: self.signals_target_gone.load(Ordering::Relaxed),
            broadcasts: self.broadcasts.load(Ordering::Relaxed),
            events_delivered: self.events_delivered.load(Ordering::Relaxed),
            events_dropped: self.events_dropped.load(Ordering::Relaxed),
            transport_errors: self.transport_errors.load(Ordering::Relaxed),
        }
    }
}
