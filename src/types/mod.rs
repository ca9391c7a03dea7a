//! Core type definitions.

mod target;

pub use target::{normalize_subnet, HostTarget, ScanTarget, TargetError};
