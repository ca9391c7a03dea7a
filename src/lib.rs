//! # Ferret - a TCP reachability prober and subnet mapper
//!
//! Ferret answers two questions about a network: which hosts on a subnet
//! are up, and which well-known TCP ports a given host answers on. Both
//! run as cancellable background sessions that stream incremental results
//! to the caller.
//!
//! ## Features
//!
//! - **Port scanning**: probes a fixed catalog of well-known TCP ports,
//!   sequentially and in catalog order, classifying each as open, closed,
//!   or filtered
//! - **Subnet sweeps**: walks an IPv4 subnet's usable addresses, checks a
//!   small liveness port set per host, and fingerprints responders with a
//!   synthetic MAC, an address-range vendor label, and a port-derived OS
//!   guess
//! - **Incremental results**: every state change streams out as an event
//!   while the session is in flight; the terminal summary is always last
//! - **Cooperative cancellation**: stop requests take effect between
//!   probes, never mid-connect
//!
//! ## Example
//!
//! ```rust,ignore
//! use ferret::session::{SessionController, Workflow};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (mut controller, mut events) = SessionController::new(Workflow::Scan);
//!     controller.start("192.168.1.10").await.unwrap();
//!
//!     while let Some(event) = events.recv().await {
//!         println!("{:?}", event);
//!         if event.is_terminal() {
//!             break;
//!         }
//!     }
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - target parsing, validation, and subnet normalization
//! - [`catalog`] - the fixed, ordered well-known port catalog
//! - [`probe`] - single bounded-timeout TCP connect checks
//! - [`hosts`] - candidate address enumeration for sweeps
//! - [`fingerprint`] - pseudo-MAC, vendor, and OS heuristics
//! - [`engine`] - the scan and sweep engines and their event types
//! - [`session`] - one-session-at-a-time lifecycle control
//! - [`cli`] - the command-line renderer
//! - [`error`] - binary-facing error types

pub mod catalog;
pub mod cli;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod hosts;
pub mod probe;
pub mod session;
pub mod types;

// Re-export commonly used types
pub use engine::{HostResult, PortResult, PortStatus, ScanSummary, SessionEvent};
pub use error::{CliError, CliResult};
pub use probe::{ProbeStatus, Prober, TcpProber};
pub use session::{SessionController, SessionStatus, StartOutcome, Workflow};
pub use types::{HostTarget, ScanTarget, TargetError};
