//! Subnet-wide host discovery sweep.
//!
//! Candidates are probed one host at a time, in ascending address order.
//! Sequential probing is a deliberate politeness bound, not an optimization
//! target: it keeps resource usage flat and makes discovery order
//! deterministic.

use crate::engine::{HostResult, Outcome, ScanSummary, SessionEvent, SummaryCounts};
use crate::fingerprint::{guess_os, guess_vendor, pseudo_mac};
use crate::hosts::hosts;
use crate::probe::{Prober, LIVENESS_PORTS, LIVENESS_TIMEOUT};
use chrono::Utc;
use ipnetwork::Ipv4Network;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Upper bound on hosts a single sweep may report.
///
/// Bounds discovered hosts, not addresses tried: a sparse subnet can have
/// many more candidates probed than hosts found.
pub const HOST_CAP: usize = 256;

/// Run a sweep session to its terminal event.
///
/// The subnet must already be validated and normalized; invalid input never
/// reaches the engine. Emits a `Host` event per responsive candidate and a
/// `Done` summary with the discovered count (zero is a valid outcome).
pub async fn run_sweep(
    prober: &dyn Prober,
    net: Ipv4Network,
    cancel: Arc<AtomicBool>,
    events: UnboundedSender<SessionEvent>,
) {
    let mut discovered = 0usize;
    let mut canceled = false;

    for ip in hosts(net) {
        if cancel.load(Ordering::Relaxed) {
            canceled = true;
            break;
        }

        if !is_responsive(prober, ip).await {
            continue;
        }

        let host = HostResult {
            ip,
            pseudo_mac: pseudo_mac(ip),
            vendor: guess_vendor(ip).to_string(),
            os_guess: guess_os(prober, ip).await.to_string(),
        };
        debug!(%ip, os = %host.os_guess, "host responded");

        discovered += 1;
        let _ = events.send(SessionEvent::Host(host));

        if discovered >= HOST_CAP {
            break;
        }
    }

    let (outcome, message) = if canceled {
        (Outcome::Stopped, "Network mapper stopped.".to_string())
    } else if discovered == 0 {
        (
            Outcome::Completed,
            "Mapping finished. No responsive hosts detected.".to_string(),
        )
    } else {
        (
            Outcome::Completed,
            format!("Mapping finished. {} host(s) responded.", discovered),
        )
    };
    info!(subnet = %net, ?outcome, discovered, "sweep finished");

    let _ = events.send(SessionEvent::Done(ScanSummary {
        target: net.to_string(),
        outcome,
        counts: SummaryCounts::Hosts { discovered },
        message,
        finished_at: Utc::now(),
    }));
}

/// A host is "up" if any liveness port accepts a connection.
async fn is_responsive(prober: &dyn Prober, ip: Ipv4Addr) -> bool {
    for port in LIVENESS_PORTS {
        let addr = SocketAddr::new(IpAddr::V4(ip), port);
        if prober.is_open(addr, LIVENESS_TIMEOUT).await {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::ScriptedProber;
    use crate::probe::{ProbeStatus, Prober};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::time::Duration;
    use tokio::sync::mpsc;

    async fn collect_events(
        prober: &dyn Prober,
        net: &str,
        cancel: Arc<AtomicBool>,
    ) -> Vec<SessionEvent> {
        let (tx, mut rx) = mpsc::unbounded_channel();
        run_sweep(prober, net.parse().unwrap(), cancel, tx).await;

        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn test_slash_30_probes_only_usable_hosts() {
        let prober = ScriptedProber::new().set("10.0.0.1:22", ProbeStatus::Open);
        let events =
            collect_events(&prober, "10.0.0.0/30", Arc::new(AtomicBool::new(false))).await;

        let probed_ips: HashSet<IpAddr> = prober.probed().iter().map(|a| a.ip()).collect();
        assert!(probed_ips.contains(&"10.0.0.1".parse::<IpAddr>().unwrap()));
        assert!(probed_ips.contains(&"10.0.0.2".parse::<IpAddr>().unwrap()));
        assert!(!probed_ips.contains(&"10.0.0.0".parse::<IpAddr>().unwrap()));
        assert!(!probed_ips.contains(&"10.0.0.3".parse::<IpAddr>().unwrap()));

        let found: Vec<&HostResult> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Host(h) => Some(h),
                _ => None,
            })
            .collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].ip, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(found[0].vendor, "Private (10.x)");
        // SSH was the only open port; the OS re-probe lands on it.
        assert_eq!(found[0].os_guess, "Likely Linux/Unix (SSH)");
        assert!(found[0].pseudo_mac.starts_with("02:"));
    }

    #[tokio::test]
    async fn test_quiet_subnet_reports_zero_hosts() {
        let prober = ScriptedProber::new();
        let events =
            collect_events(&prober, "10.0.0.0/29", Arc::new(AtomicBool::new(false))).await;

        assert_eq!(events.len(), 1);
        match &events[0] {
            SessionEvent::Done(summary) => {
                assert_eq!(summary.outcome, Outcome::Completed);
                assert_eq!(summary.counts, SummaryCounts::Hosts { discovered: 0 });
                assert!(summary.message.contains("No responsive hosts"));
            }
            other => panic!("expected terminal summary, got {:?}", other),
        }
    }

    struct EverythingOpen;

    #[async_trait]
    impl Prober for EverythingOpen {
        async fn probe(&self, _addr: SocketAddr, _timeout: Duration) -> ProbeStatus {
            ProbeStatus::Open
        }
    }

    #[tokio::test]
    async fn test_discovered_host_cap() {
        // A /23 has 510 usable hosts; with every one responsive the sweep
        // must stop at the cap.
        let events = collect_events(
            &EverythingOpen,
            "10.0.0.0/23",
            Arc::new(AtomicBool::new(false)),
        )
        .await;

        let found = events
            .iter()
            .filter(|e| matches!(e, SessionEvent::Host(_)))
            .count();
        assert_eq!(found, HOST_CAP);

        match events.last() {
            Some(SessionEvent::Done(summary)) => {
                assert_eq!(summary.outcome, Outcome::Completed);
                assert_eq!(
                    summary.counts,
                    SummaryCounts::Hosts {
                        discovered: HOST_CAP
                    }
                );
            }
            other => panic!("expected terminal summary, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancellation_before_first_host() {
        let prober = ScriptedProber::new();
        let events =
            collect_events(&prober, "192.168.1.0/24", Arc::new(AtomicBool::new(true))).await;

        assert!(prober.probed().is_empty());
        assert_eq!(events.len(), 1);
        match &events[0] {
            SessionEvent::Done(summary) => {
                assert_eq!(summary.outcome, Outcome::Stopped);
                assert_eq!(summary.counts, SummaryCounts::Hosts { discovered: 0 });
            }
            other => panic!("expected terminal summary, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_discovery_order_is_ascending() {
        let prober = ScriptedProber::new()
            .set("10.0.0.3:80", ProbeStatus::Open)
            .set("10.0.0.5:80", ProbeStatus::Open);
        let events =
            collect_events(&prober, "10.0.0.0/29", Arc::new(AtomicBool::new(false))).await;

        let found: Vec<Ipv4Addr> = events
            .iter()
            .filter_map(|e| match e {
                SessionEvent::Host(h) => Some(h.ip),
                _ => None,
            })
            .collect();
        assert_eq!(
            found,
            vec![Ipv4Addr::new(10, 0, 0, 3), Ipv4Addr::new(10, 0, 0, 5)]
        );
    }
}
