//! The well-known port catalog.
//!
//! A fixed, ordered list of TCP ports and their service labels. Catalog
//! order is scan order: a scan session probes these entries top to bottom
//! and seeds its initial "pending" result set from the same list.

use serde::Serialize;

/// A single catalog entry: a TCP port and its conventional service name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PortDefinition {
    pub port: u16,
    pub service: &'static str,
}

/// The fixed scan catalog.
///
/// Order is authoritative: entries are mostly ascending by port number, but
/// scan order follows this list, not numeric sort (note 27017 before 3306).
static PORT_CATALOG: &[PortDefinition] = &[
    PortDefinition { port: 20, service: "FTP Data" },
    PortDefinition { port: 21, service: "FTP Control" },
    PortDefinition { port: 22, service: "SSH" },
    PortDefinition { port: 23, service: "Telnet" },
    PortDefinition { port: 25, service: "SMTP" },
    PortDefinition { port: 53, service: "DNS" },
    PortDefinition { port: 80, service: "HTTP" },
    PortDefinition { port: 110, service: "POP3" },
    PortDefinition { port: 143, service: "IMAP" },
    PortDefinition { port: 194, service: "IRC" },
    PortDefinition { port: 443, service: "HTTPS" },
    PortDefinition { port: 465, service: "SMTPS" },
    PortDefinition { port: 587, service: "Mail Submission" },
    PortDefinition { port: 993, service: "IMAPS" },
    PortDefinition { port: 995, service: "POP3S" },
    PortDefinition { port: 1433, service: "MS SQL" },
    PortDefinition { port: 1521, service: "Oracle DB" },
    PortDefinition { port: 2049, service: "NFS" },
    PortDefinition { port: 2375, service: "Docker API" },
    PortDefinition { port: 27017, service: "MongoDB" },
    PortDefinition { port: 3306, service: "MySQL" },
    PortDefinition { port: 3389, service: "RDP" },
    PortDefinition { port: 5432, service: "PostgreSQL" },
    PortDefinition { port: 5900, service: "VNC" },
    PortDefinition { port: 6379, service: "Redis" },
    PortDefinition { port: 8080, service: "HTTP Alt" },
    PortDefinition { port: 8443, service: "HTTPS Alt" },
    PortDefinition { port: 9000, service: "Custom" },
];

/// Get the scan catalog.
pub fn catalog() -> &'static [PortDefinition] {
    PORT_CATALOG
}
