//! Single-target, full-catalog port scan.
//!
//! Ports are probed strictly sequentially in catalog order, so progress
//! events arrive in catalog order too. Cancellation is cooperative and
//! checked at the top of each iteration; an in-flight probe is never
//! interrupted, which bounds stop latency at one probe timeout.

use crate::catalog::catalog;
use crate::engine::{
    Outcome, PortResult, PortStatus, ScanSummary, SessionEvent, SummaryCounts,
};
use crate::probe::{Prober, SCAN_TIMEOUT};
use crate::types::ScanTarget;
use chrono::Utc;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};

/// Run a scan session to its terminal event.
///
/// Emits a `Port` event when a port transitions to `Scanning` and another
/// when its final status is known, then a `Done` summary. Ports not reached
/// before a stop request stay `Pending` and are excluded from the probed
/// count.
pub async fn run_scan(
    prober: &dyn Prober,
    target: ScanTarget,
    cancel: Arc<AtomicBool>,
    events: UnboundedSender<SessionEvent>,
) {
    let defs = catalog();
    let mut results: Vec<PortResult> = defs
        .iter()
        .map(|def| PortResult::new(def.port, def.service, PortStatus::Pending))
        .collect();
    // Port -> index into `results`, for O(1) status updates.
    let index: HashMap<u16, usize> = defs
        .iter()
        .enumerate()
        .map(|(i, def)| (def.port, i))
        .collect();

    let mut canceled = false;

    for def in defs {
        if cancel.load(Ordering::Relaxed) {
            canceled = true;
            break;
        }

        let slot = index[&def.port];
        results[slot].status = PortStatus::Scanning;
        let _ = events.send(SessionEvent::Port(results[slot].clone()));

        let addr = SocketAddr::new(target.ip, def.port);
        let status = prober.probe(addr, SCAN_TIMEOUT).await;
        debug!(host = %target, port = def.port, %status, "probe finished");

        results[slot].status = status.into();
        let _ = events.send(SessionEvent::Port(results[slot].clone()));
    }

    let open = results.iter().filter(|r| r.is_open()).count();
    let closed = count(&results, PortStatus::Closed);
    let filtered = count(&results, PortStatus::Filtered);
    let probed = open + closed + filtered;

    let (outcome, message) = if canceled {
        (Outcome::Stopped, "Scan stopped.".to_string())
    } else {
        (
            Outcome::Completed,
            format!("Scan complete for {} ({} ports).", target, defs.len()),
        )
    };
    info!(host = %target, ?outcome, probed, open, closed, filtered, "scan finished");

    let _ = events.send(SessionEvent::Done(ScanSummary {
        target: target.to_string(),
        outcome,
        counts: SummaryCounts::Ports {
            probed,
            open,
            closed,
            filtered,
        },
        message,
        finished_at: Utc::now(),
    }));
}

fn count(results: &[PortResult], status: PortStatus) -> usize {
    results.iter().filter(|r| r.status == status).count()
}
