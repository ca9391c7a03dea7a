//! Heuristic host fingerprinting for sweep results.
//!
//! None of this inspects packets or banners. The pseudo-MAC is a synthetic
//! identifier hashed from the address, the vendor label comes from the
//! private-range the address sits in, and the OS guess is inferred from
//! which well-known ports accept a connection.

use crate::probe::{Prober, LIVENESS_TIMEOUT};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Derive a stable, visibly synthetic MAC-style identifier from an address.
///
/// The first octet is fixed to `0x02` (locally administered bit set), so
/// the value can never be mistaken for a real hardware address.
pub fn pseudo_mac(ip: Ipv4Addr) -> String {
    let mut hasher = DefaultHasher::new();
    ip.hash(&mut hasher);
    let digest = hasher.finish().to_be_bytes();

    format!(
        "02:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
        digest[0], digest[1], digest[2], digest[3], digest[4]
    )
}

/// Label the address range the host lives in.
pub fn guess_vendor(ip: Ipv4Addr) -> &'static str {
    if ip.is_loopback() {
        return "Loopback";
    }
    let octets = ip.octets();
    match octets {
        [10, ..] => "Private (10.x)",
        [172, b, ..] if (16..=31).contains(&b) => "Private (172.16/12)",
        [192, 168, ..] => "Private (192.168.x.x)",
        _ => "Public/Unknown",
    }
}

/// Guess the operating system from which management ports answer.
///
/// Re-probes RDP, SSH, then HTTP in priority order at the liveness timeout.
/// These probes are issued fresh, on top of whatever the liveness pass
/// already checked; results are not cached between the two passes.
pub async fn guess_os(prober: &dyn Prober, ip: Ipv4Addr) -> &'static str {
    let addr = |port| SocketAddr::new(IpAddr::V4(ip), port);

    if prober.is_open(addr(3389), LIVENESS_TIMEOUT).await {
        "Likely Windows (RDP)"
    } else if prober.is_open(addr(22), LIVENESS_TIMEOUT).await {
        "Likely Linux/Unix (SSH)"
    } else if prober.is_open(addr(80), LIVENESS_TIMEOUT).await {
        "Likely Web Appliance"
    } else {
        "Unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeStatus;
    use async_trait::async_trait;
    use std::time::Duration;

    struct OnlyPortOpen(u16);

    #[async_trait]
    impl Prober for OnlyPortOpen {
        async fn probe(&self, addr: SocketAddr, _timeout: Duration) -> ProbeStatus {
            if addr.port() == self.0 {
                ProbeStatus::Open
            } else {
                ProbeStatus::Closed
            }
        }
    }

    #[test]
    fn test_pseudo_mac_is_deterministic_and_tagged() {
        let ip = Ipv4Addr::new(192, 168, 1, 10);
        let mac = pseudo_mac(ip);
        assert_eq!(mac, pseudo_mac(ip));
        assert!(mac.starts_with("02:"));
        assert_eq!(mac.len(), 17);
        assert_ne!(mac, pseudo_mac(Ipv4Addr::new(192, 168, 1, 11)));
    }

    #[test]
    fn test_vendor_ranges() {
        assert_eq!(guess_vendor(Ipv4Addr::new(127, 0, 0, 1)), "Loopback");
        assert_eq!(guess_vendor(Ipv4Addr::new(10, 1, 2, 3)), "Private (10.x)");
        assert_eq!(
            guess_vendor(Ipv4Addr::new(172, 20, 0, 1)),
            "Private (172.16/12)"
        );
        assert_eq!(
            guess_vendor(Ipv4Addr::new(172, 32, 0, 1)),
            "Public/Unknown"
        );
        assert_eq!(
            guess_vendor(Ipv4Addr::new(192, 168, 0, 5)),
            "Private (192.168.x.x)"
        );
        assert_eq!(guess_vendor(Ipv4Addr::new(8, 8, 8, 8)), "Public/Unknown");
    }

    #[tokio::test]
    async fn test_os_guess_priority_order() {
        let ip = Ipv4Addr::new(10, 0, 0, 1);
        assert_eq!(
            guess_os(&OnlyPortOpen(3389), ip).await,
            "Likely Windows (RDP)"
        );
        assert_eq!(
            guess_os(&OnlyPortOpen(22), ip).await,
            "Likely Linux/Unix (SSH)"
        );
        assert_eq!(guess_os(&OnlyPortOpen(80), ip).await, "Likely Web Appliance");
        assert_eq!(guess_os(&OnlyPortOpen(9999), ip).await, "Unknown");
    }
}
