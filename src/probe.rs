//! Single-probe TCP connect checks.
//!
//! A probe is one bounded-timeout `connect()` against an address. The
//! outcome is always classified data, never an error: a refused or timed-out
//! connection is a definitive result for that port within the session.

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Per-port timeout for a full catalog scan.
pub const SCAN_TIMEOUT: Duration = Duration::from_millis(500);

/// Per-port timeout for sweep liveness checks. Shorter by design: the sweep
/// favors throughput across many hosts over single-target accuracy.
pub const LIVENESS_TIMEOUT: Duration = Duration::from_millis(150);

/// Ports checked to decide whether a swept host is up at all.
pub const LIVENESS_PORTS: [u16; 4] = [22, 80, 443, 3389];

/// Outcome of a single connect attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeStatus {
    /// Connect succeeded; a service is listening.
    Open,
    /// Connect was rejected (RST/refused or another immediate error).
    Closed,
    /// No response within the timeout, possibly dropped by a firewall.
    Filtered,
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered (timeout)"),
        }
    }
}

/// The probing seam.
///
/// Engines take a `Prober` rather than opening sockets themselves so that
/// tests can substitute a scripted implementation.
#[async_trait]
pub trait Prober: Send + Sync {
    /// Attempt a TCP connect to `addr`, bounded by `timeout`.
    async fn probe(&self, addr: SocketAddr, timeout: Duration) -> ProbeStatus;

    /// Convenience: true when the port accepted a connection.
    async fn is_open(&self, addr: SocketAddr, timeout: Duration) -> bool {
        self.probe(addr, timeout).await == ProbeStatus::Open
    }
}

/// Real TCP connect prober.
///
/// Completes the full handshake via the OS socket API, then drops the
/// stream immediately. No data is exchanged and no retries are made.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpProber;

#[async_trait]
impl Prober for TcpProber {
    async fn probe(&self, addr: SocketAddr, limit: Duration) -> ProbeStatus {
        match timeout(limit, TcpStream::connect(addr)).await {
            Ok(Ok(stream)) => {
                drop(stream);
                ProbeStatus::Open
            }
            Ok(Err(_)) => ProbeStatus::Closed,
            Err(_) => ProbeStatus::Filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn test_probe_open_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let status = TcpProber.probe(addr, SCAN_TIMEOUT).await;
        assert_eq!(status, ProbeStatus::Open);
    }

    #[tokio::test]
    async fn test_probe_closed_port() {
        // Bind then drop to obtain a port that is almost certainly closed.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let status = TcpProber.probe(addr, SCAN_TIMEOUT).await;
        assert_eq!(status, ProbeStatus::Closed);
    }

    #[tokio::test]
    async fn test_probe_deadline_elapse_classified_as_filtered() {
        // A zero deadline always elapses before the connect can finish,
        // even against a local listener, so no external network state can
        // influence the outcome.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let status = TcpProber.probe(addr, Duration::ZERO).await;
        assert_eq!(status, ProbeStatus::Filtered);
    }
}
