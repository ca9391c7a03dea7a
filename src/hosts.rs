//! Candidate host enumeration for subnet sweeps.
//!
//! Produces the usable addresses of an IPv4 network in ascending order,
//! excluding the network and broadcast addresses. The sequence is lazy and
//! finite; every sweep builds a fresh iterator, so there is no shared
//! cursor between sessions.

use ipnetwork::Ipv4Network;
use std::net::Ipv4Addr;

/// Iterate the candidate host addresses of `net`.
///
/// Both endpoints are excluded, so /31 and /32 networks yield nothing.
pub fn hosts(net: Ipv4Network) -> impl Iterator<Item = Ipv4Addr> {
    let network = net.network();
    let broadcast = net.broadcast();
    net.iter().filter(move |addr| *addr != network && *addr != broadcast)
}
