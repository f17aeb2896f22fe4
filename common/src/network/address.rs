use std::net::Ipv4Addr;

use crate::error::{Result, TopologyError};
use crate::network::mask;

fn parse_ipv4(s: &str) -> Result<Ipv4Addr> {
    s.parse::<Ipv4Addr>()
        .map_err(|_| TopologyError::InvalidAddress(s.to_string()))
}

/// Computes the network address of `host_address` under a `/prefix_len` mask.
///
/// The mask is materialized in dotted-decimal form first and then ANDed with
/// the host octet by octet.
pub fn network_address(host_address: &str, prefix_len: u8) -> Result<Ipv4Addr> {
    let host: Ipv4Addr = parse_ipv4(host_address)?;
    let mask: Ipv4Addr = parse_ipv4(&mask::cidr_to_dotted_decimal(prefix_len)?)?;
    Ok(apply_mask(host, mask))
}

pub fn apply_mask(host: Ipv4Addr, mask: Ipv4Addr) -> Ipv4Addr {
    let host: [u8; 4] = host.octets();
    let mask: [u8; 4] = mask.octets();
    let mut network: [u8; 4] = [0; 4];
    for i in 0..4 {
        network[i] = host[i] & mask[i];
    }
    Ipv4Addr::from(network)
}

/// Renders `network/prefix`, the form handed to the scanner.
pub fn cidr_notation(network: Ipv4Addr, prefix_len: u8) -> String {
    format!("{network}/{prefix_len}")
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
