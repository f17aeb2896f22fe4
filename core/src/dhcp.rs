//! # DHCP Server Configuration
//!
//! Builds the values substituted into the dhcpd template from a discovered
//! [`NetworkTopology`].
//!
//! No address pool is allocated yet, so [`DhcpConfig::range_start`] and
//! [`DhcpConfig::range_end`] are always empty.

use std::net::Ipv4Addr;

use dhcpmap_common::Result;
use dhcpmap_common::config::LeasePolicy;
use dhcpmap_common::network::mask;
use dhcpmap_common::network::topology::{NetworkTopology, TopologyAssumptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DhcpConfig {
    pub subnet: String,
    /// Dotted-decimal.
    pub netmask: String,
    pub range_start: String,
    pub range_end: String,
    /// Empty when the default gateway could not be determined.
    pub router: String,
    pub dns_server: String,
    pub default_lease_secs: u32,
    pub max_lease_secs: u32,
}

/// Template placeholder names, in the order they appear in [`DhcpConfig`].
pub const FIELD_NAMES: [&str; 8] = [
    "Subnet",
    "Netmask",
    "RangeStart",
    "RangeEnd",
    "Router",
    "DNSServer",
    "DefaultLease",
    "MaxLease",
];

impl DhcpConfig {
    /// Looks a field up by its template placeholder name.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = match name {
            "Subnet" => self.subnet.clone(),
            "Netmask" => self.netmask.clone(),
            "RangeStart" => self.range_start.clone(),
            "RangeEnd" => self.range_end.clone(),
            "Router" => self.router.clone(),
            "DNSServer" => self.dns_server.clone(),
            "DefaultLease" => self.default_lease_secs.to_string(),
            "MaxLease" => self.max_lease_secs.to_string(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn build_config(
    network_address: Ipv4Addr,
    prefix_len: u8,
    gateway_address: Option<Ipv4Addr>,
    dns_address: Ipv4Addr,
    lease: &LeasePolicy,
) -> Result<DhcpConfig> {
    Ok(DhcpConfig {
        subnet: network_address.to_string(),
        netmask: mask::cidr_to_dotted_decimal(prefix_len)?,
        range_start: String::new(),
        range_end: String::new(),
        router: gateway_address.map(|gw| gw.to_string()).unwrap_or_default(),
        dns_server: dns_address.to_string(),
        default_lease_secs: lease.default_lease_secs,
        max_lease_secs: lease.max_lease_secs,
    })
}

/// Builds the config for a topology, using the default route as router and
/// this host as DNS server. Neither is verified; the returned
/// [`TopologyAssumptions`] records both guesses.
pub fn config_for_topology(
    topology: &NetworkTopology,
    lease: &LeasePolicy,
) -> Result<(DhcpConfig, TopologyAssumptions)> {
    let config = build_config(
        topology.network_address,
        topology.prefix_len,
        topology.gateway_address,
        topology.host_address,
        lease,
    )?;
    Ok((config, TopologyAssumptions::for_topology(topology)))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
