//! # Topology Model
//!
//! What a single run learns about the local network. Built once, never persisted.

use std::fmt;
use std::net::Ipv4Addr;

use crate::network::address;
use crate::network::interface::PrimaryInterface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkTopology {
    pub host_address: Ipv4Addr,
    pub prefix_len: u8,
    pub interface_name: String,
    pub network_address: Ipv4Addr,
    /// `None` when the routing table could not be queried.
    pub gateway_address: Option<Ipv4Addr>,
}

impl NetworkTopology {
    pub fn new(
        primary: PrimaryInterface,
        network_address: Ipv4Addr,
        gateway_address: Option<Ipv4Addr>,
    ) -> Self {
        Self {
            host_address: primary.host_address,
            prefix_len: primary.prefix_len,
            interface_name: primary.interface_name,
            network_address,
            gateway_address,
        }
    }

    /// The subnet in `network/prefix` form.
    pub fn cidr(&self) -> String {
        address::cidr_notation(self.network_address, self.prefix_len)
    }
}

/// Where the router address written into the config came from.
///
/// The value is never checked for reachability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewaySource {
    /// First default route bound to the selected interface.
    DefaultRoute,
    /// The routing query failed and the router field is left empty.
    Unknown,
}

/// Where the DNS server address written into the config came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DnsSource {
    /// The address of this host on the selected interface.
    LocalHost,
}

/// The guesses a run makes about the network, kept next to the config so
/// they are visible instead of implied by argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopologyAssumptions {
    pub router: GatewaySource,
    pub dns: DnsSource,
}

impl TopologyAssumptions {
    pub fn for_topology(topology: &NetworkTopology) -> Self {
        let router = match topology.gateway_address {
            Some(_) => GatewaySource::DefaultRoute,
            None => GatewaySource::Unknown,
        };
        Self {
            router,
            dns: DnsSource::LocalHost,
        }
    }
}

impl fmt::Display for GatewaySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewaySource::DefaultRoute => write!(f, "assumed: default route of interface"),
            GatewaySource::Unknown => write!(f, "unknown: routing query failed"),
        }
    }
}

impl fmt::Display for DnsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DnsSource::LocalHost => write!(f, "assumed: this host"),
        }
    }
}
