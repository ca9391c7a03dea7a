//! Target parsing and validation.
//!
//! Two workflows, two input shapes:
//! - a scan takes a single host: an IP literal or a hostname (resolved once,
//!   up front, before any probing starts);
//! - a sweep takes an IPv4 subnet in CIDR notation; a bare IPv4 address is
//!   normalized to the /24 containing it.
//!
//! All validation failures surface synchronously, before a session spawns.

use ipnetwork::Ipv4Network;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Error type for target parsing and resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TargetError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),
    #[error("invalid subnet '{0}': use CIDR notation (e.g. 192.168.1.0/24)")]
    InvalidSubnet(String),
    #[error("failed to resolve hostname '{0}': {1}")]
    DnsResolutionFailed(String, String),
    #[error("no IP addresses found for hostname '{0}'")]
    NoAddressesFound(String),
}

/// A scan target after resolution: the original input plus the address
/// probes are actually issued against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    /// The original input (hostname or IP string).
    pub original: String,
    /// The resolved IP address.
    pub ip: IpAddr,
}

impl ScanTarget {
    pub fn new(original: impl Into<String>, ip: IpAddr) -> Self {
        Self {
            original: original.into(),
            ip,
        }
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.original == self.ip.to_string() {
            write!(f, "{}", self.ip)
        } else {
            write!(f, "{} ({})", self.original, self.ip)
        }
    }
}

/// A parsed-but-unresolved scan target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostTarget {
    /// An IP literal; no resolution needed.
    Ip(IpAddr),
    /// A hostname pending DNS resolution.
    Name(String),
}

impl HostTarget {
    /// Parse a raw host string: IP literal or syntactically valid hostname.
    pub fn parse(s: &str) -> Result<Self, TargetError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(TargetError::InvalidTarget("empty target".to_string()));
        }

        if let Ok(ip) = s.parse::<IpAddr>() {
            return Ok(Self::Ip(ip));
        }

        if is_valid_hostname(s) {
            return Ok(Self::Name(s.to_string()));
        }

        Err(TargetError::InvalidTarget(s.to_string()))
    }

    /// Resolve to a concrete address.
    ///
    /// Hostnames are looked up via the default resolver configuration; only
    /// the first returned address is used.
    pub async fn resolve(self) -> Result<ScanTarget, TargetError> {
        match self {
            Self::Ip(ip) => Ok(ScanTarget::new(ip.to_string(), ip)),
            Self::Name(hostname) => {
                let resolver = TokioAsyncResolver::tokio(
                    ResolverConfig::default(),
                    ResolverOpts::default(),
                );

                let response = resolver.lookup_ip(hostname.as_str()).await.map_err(|e| {
                    TargetError::DnsResolutionFailed(hostname.clone(), e.to_string())
                })?;

                let ip = response
                    .iter()
                    .next()
                    .ok_or_else(|| TargetError::NoAddressesFound(hostname.clone()))?;

                Ok(ScanTarget::new(hostname, ip))
            }
        }
    }
}

/// Parse and normalize a sweep subnet.
///
/// Accepts CIDR notation directly; a bare IPv4 address becomes the /24
/// containing it with host bits zeroed. IPv6 input is rejected: sweeps are
/// IPv4 only.
pub fn normalize_subnet(s: &str) -> Result<Ipv4Network, TargetError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TargetError::InvalidSubnet("empty subnet".to_string()));
    }

    if s.contains('/') {
        return s
            .parse::<Ipv4Network>()
            .map_err(|_| TargetError::InvalidSubnet(s.to_string()));
    }

    let ip: Ipv4Addr = s
        .parse()
        .map_err(|_| TargetError::InvalidSubnet(s.to_string()))?;
    let [a, b, c, _] = ip.octets();
    Ipv4Network::new(Ipv4Addr::new(a, b, c, 0), 24)
        .map_err(|_| TargetError::InvalidSubnet(s.to_string()))
}

/// Check if a string is a syntactically valid hostname.
fn is_valid_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }

    // Each dot-separated label must be 1-63 chars, alphanumeric plus
    // hyphens, starting and ending with an alphanumeric.
    for label in s.split('.') {
        if label.is_empty() || label.len() > 63 {
            return false;
        }
        if !label.chars().next().is_some_and(|c| c.is_alphanumeric()) {
            return false;
        }
        if !label.chars().last().is_some_and(|c| c.is_alphanumeric()) {
            return false;
        }
        if !label.chars().all(|c| c.is_alphanumeric() || c == '-') {
            return false;
        }
    }

    true
}
