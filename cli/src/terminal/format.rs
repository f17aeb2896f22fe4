use std::net::Ipv4Addr;

use crate::terminal::{colors, print};
use colored::*;
use dhcpmap_common::network::topology::{NetworkTopology, TopologyAssumptions};
use dhcpmap_core::dhcp::DhcpConfig;

type Detail = (String, ColoredString);

pub fn ipv4(addr: Ipv4Addr) -> ColoredString {
    addr.to_string().color(colors::IPV4_ADDR)
}

pub fn ipv4_with_prefix(addr: Ipv4Addr, prefix_len: u8) -> ColoredString {
    let address: ColoredString = ipv4(addr);
    let prefix: ColoredString = prefix_len.to_string().color(colors::IPV4_PREFIX);
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

fn text_or_empty(value: &str) -> ColoredString {
    if value.is_empty() {
        print::empty_value()
    } else {
        value.color(colors::TEXT_DEFAULT)
    }
}

pub fn topology_to_details(topology: &NetworkTopology) -> Vec<Detail> {
    let gateway: ColoredString = match topology.gateway_address {
        Some(gw) => ipv4(gw),
        None => print::empty_value(),
    };
    vec![
        ("Interface".to_string(), topology.interface_name.as_str().color(colors::PRIMARY)),
        ("Host".to_string(), ipv4_with_prefix(topology.host_address, topology.prefix_len)),
        ("Network".to_string(), ipv4_with_prefix(topology.network_address, topology.prefix_len)),
        ("Gateway".to_string(), gateway),
    ]
}

pub fn config_to_details(config: &DhcpConfig, assumptions: &TopologyAssumptions) -> Vec<Detail> {
    vec![
        ("Subnet".to_string(), text_or_empty(&config.subnet)),
        ("Netmask".to_string(), text_or_empty(&config.netmask)),
        ("Range".to_string(), text_or_empty(&range_text(config))),
        (
            "Router".to_string(),
            format!("{} ({})", text_or_empty(&config.router), assumptions.router).normal(),
        ),
        (
            "DNS".to_string(),
            format!("{} ({})", text_or_empty(&config.dns_server), assumptions.dns).normal(),
        ),
        (
            "Leases".to_string(),
            format!("{}s default, {}s max", config.default_lease_secs, config.max_lease_secs).normal(),
        ),
    ]
}

fn range_text(config: &DhcpConfig) -> String {
    if config.range_start.is_empty() && config.range_end.is_empty() {
        String::new()
    } else {
        format!("{} - {}", config.range_start, config.range_end)
    }
}
