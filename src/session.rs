//! Session lifecycle: at most one scan or sweep in flight per controller.
//!
//! The controller owns the cancellation flag and the background task; the
//! event channel it hands back is the marshaling seam. Engines send from
//! their own task, the caller drains the receiver wherever it likes, so
//! every event is observed sequentially without any caller-side locking.

use crate::engine::{run_scan, run_sweep, SessionEvent};
use crate::probe::{Prober, TcpProber};
use crate::types::{normalize_subnet, HostTarget, TargetError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::info;

/// Which engine this controller drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Full-catalog port scan of a single host.
    Scan,
    /// Liveness sweep of an IPv4 subnet.
    Sweep,
}

/// Observable controller state, derived on demand; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Running,
    Stopping,
}

/// What a `start` call actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session was validated and launched.
    Launched,
    /// A session was already running; it was asked to stop instead.
    StopRequested,
}

struct ActiveSession {
    cancel: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Owns the lifecycle of at most one in-flight session.
pub struct SessionController {
    workflow: Workflow,
    prober: Arc<dyn Prober>,
    events: UnboundedSender<SessionEvent>,
    active: Option<ActiveSession>,
}

impl SessionController {
    /// Create a controller and the event stream it feeds.
    pub fn new(workflow: Workflow) -> (Self, UnboundedReceiver<SessionEvent>) {
        Self::with_prober(workflow, Arc::new(TcpProber))
    }

    /// Create a controller with a custom prober (test seam).
    pub fn with_prober(
        workflow: Workflow,
        prober: Arc<dyn Prober>,
    ) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        (
            Self {
                workflow,
                prober,
                events,
                active: None,
            },
            rx,
        )
    }

    /// Current state, derived from the task handle and cancel flag.
    pub fn status(&self) -> SessionStatus {
        match &self.active {
            Some(session) if !session.handle.is_finished() => {
                if session.cancel.load(Ordering::Relaxed) {
                    SessionStatus::Stopping
                } else {
                    SessionStatus::Running
                }
            }
            _ => SessionStatus::Idle,
        }
    }

    /// Start a session, or stop the current one.
    ///
    /// Toggle semantics: if a session is in flight this signals it to stop
    /// and returns immediately. Otherwise the raw target is validated (and
    /// a hostname resolved) before any background work begins; validation
    /// errors are returned here, never via the event stream.
    pub async fn start(&mut self, raw: &str) -> Result<StartOutcome, TargetError> {
        if self.status() != SessionStatus::Idle {
            self.stop();
            return Ok(StartOutcome::StopRequested);
        }

        let cancel = Arc::new(AtomicBool::new(false));
        let events = self.events.clone();
        let prober = Arc::clone(&self.prober);

        let handle = match self.workflow {
            Workflow::Scan => {
                let target = HostTarget::parse(raw)?.resolve().await?;
                info!(host = %target, "starting scan");
                let cancel = Arc::clone(&cancel);
                tokio::spawn(async move {
                    run_scan(prober.as_ref(), target, cancel, events).await;
                })
            }
            Workflow::Sweep => {
                let net = normalize_subnet(raw)?;
                info!(subnet = %net, "starting sweep");
                let cancel = Arc::clone(&cancel);
                tokio::spawn(async move {
                    run_sweep(prober.as_ref(), net, cancel, events).await;
                })
            }
        };

        self.active = Some(ActiveSession { cancel, handle });
        Ok(StartOutcome::Launched)
    }

    /// Signal the active session to stop.
    ///
    /// Cooperative and non-blocking: the engine notices at its next loop
    /// check and emits its terminal event asynchronously. A no-op when
    /// nothing is running; emits no events of its own.
    pub fn stop(&mut self) {
        if let Some(session) = &self.active {
            if !session.handle.is_finished() {
                session.cancel.store(true, Ordering::Relaxed);
            }
        }
    }
}
