//! Reserved network blocks.

use std::net::IpAddr;
use std::str::FromStr;

use ipnet::{AddrParseError, IpNet};
use once_cell::sync::Lazy;

/// IPv4 blocks that are never looked up.
pub const RESERVED_IPV4_CIDRS: &[&str] = &[
    "127.0.0.0/8",        // Loopback
    "10.0.0.0/8",         // Private
    "172.16.0.0/12",      // Private
    "192.168.0.0/16",     // Private
    "169.254.0.0/16",     // Link-local
    "100.64.0.0/10",      // Carrier-grade NAT
    "192.0.2.0/24",       // TEST-NET-1
    "198.51.100.0/24",    // TEST-NET-2
    "203.0.113.0/24",     // TEST-NET-3
    "0.0.0.0/8",          // "This" network
    "224.0.0.0/4",        // Multicast
    "240.0.0.0/4",        // Reserved
    "192.88.99.0/24",     // 6to4 relay anycast (deprecated)
    "255.255.255.255/32", // Broadcast
];

/// IPv6 blocks that are never looked up.
pub const RESERVED_IPV6_CIDRS: &[&str] = &[
    "::1/128",       // Loopback
    "fe80::/10",     // Link-local
    "fc00::/7",      // Unique local
    "ff00::/8",      // Multicast
    "2001:db8::/32", // Documentation
    "::/128",        // Unspecified
];

static DEFAULT_BLOCKS: Lazy<ReservedBlocks> = Lazy::new(|| {
    let cidrs = RESERVED_IPV4_CIDRS.iter().chain(RESERVED_IPV6_CIDRS);
    ReservedBlocks::from_cidrs(cidrs).expect("built-in reserved CIDR list must parse")
});

/// An immutable set of network prefixes treated as non-routable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedBlocks {
    nets: Vec<IpNet>,
}

impl ReservedBlocks {
    /// The built-in list (14 IPv4 + 6 IPv6 prefixes), parsed once per process.
    pub fn standard() -> &'static ReservedBlocks {
        &DEFAULT_BLOCKS
    }

    pub fn new(nets: Vec<IpNet>) -> Self {
        Self { nets }
    }

    /// Parses a list of CIDR strings such as `"10.0.0.0/8"` or `"fc00::/7"`.
    ///
    /// # Errors
    ///
    /// Returns the first `AddrParseError` encountered.
    pub fn from_cidrs<I, S>(cidrs: I) -> Result<Self, AddrParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nets = cidrs
            .into_iter()
            .map(|c| IpNet::from_str(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { nets })
    }

    pub fn nets(&self) -> &[IpNet] {
        &self.nets
    }

    pub fn len(&self) -> usize {
        self.nets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nets.is_empty()
    }

    /// Returns true if any block contains `addr`.
    ///
    /// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are matched as IPv4.
    pub fn contains(&self, addr: IpAddr) -> bool {
        let addr = addr.to_canonical();
        self.nets.iter().any(|net| net.contains(&addr))
    }
}
