//! Scan and sweep engines plus the event types they emit.
//!
//! Each running session is one background tokio task. Engines never touch
//! presentation state: every observable change is a [`SessionEvent`] pushed
//! into the session's channel, in probe-issue order, with [`SessionEvent::Done`]
//! guaranteed to be the final event.

pub mod scan;
pub mod sweep;

use crate::probe::ProbeStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

pub use scan::run_scan;
pub use sweep::run_sweep;

/// Lifecycle status of a single port within a scan session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PortStatus {
    /// Not yet reached by the scan loop.
    Pending,
    /// Probe in flight.
    Scanning,
    /// Connect succeeded.
    Open,
    /// Connect rejected.
    Closed,
    /// No response within the timeout.
    Filtered,
}

impl From<ProbeStatus> for PortStatus {
    fn from(status: ProbeStatus) -> Self {
        match status {
            ProbeStatus::Open => Self::Open,
            ProbeStatus::Closed => Self::Closed,
            ProbeStatus::Filtered => Self::Filtered,
        }
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Scanning => write!(f, "scanning..."),
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered (timeout)"),
        }
    }
}

/// Result of scanning a single catalog port.
#[derive(Debug, Clone, Serialize)]
pub struct PortResult {
    pub port: u16,
    pub service: String,
    pub status: PortStatus,
}

impl PortResult {
    pub fn new(port: u16, service: impl Into<String>, status: PortStatus) -> Self {
        Self {
            port,
            service: service.into(),
            status,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}

/// A responsive host discovered by a sweep.
///
/// Immutable once created; appended to the session in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct HostResult {
    pub ip: Ipv4Addr,
    pub pseudo_mac: String,
    pub vendor: String,
    pub os_guess: String,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Ran to the end of its catalog/subnet.
    Completed,
    /// Ended early via a stop request.
    Stopped,
}

/// Structured counts carried by the terminal summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SummaryCounts {
    /// Scan session: per-status tallies over the ports actually probed.
    Ports {
        probed: usize,
        open: usize,
        closed: usize,
        filtered: usize,
    },
    /// Sweep session: responsive hosts found.
    Hosts { discovered: usize },
}

/// Terminal event payload: always the last event of a session.
#[derive(Debug, Clone, Serialize)]
pub struct ScanSummary {
    pub target: String,
    pub outcome: Outcome,
    pub counts: SummaryCounts,
    pub message: String,
    pub finished_at: DateTime<Utc>,
}

/// A single message on the session's event stream.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "lowercase")]
pub enum SessionEvent {
    /// Progress: one updated port result.
    Port(PortResult),
    /// Progress: one newly discovered host.
    Host(HostResult),
    /// Terminal summary.
    Done(ScanSummary),
}

impl SessionEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}
