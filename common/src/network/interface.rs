use std::net::Ipv4Addr;

use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::Ipv4Network;
use tracing::{debug, warn};

use crate::config::MaskPolicy;
use crate::error::{Result, TopologyError};
use crate::network::mask;
use crate::utils::interface::NetworkInterfaceExtension;

/// The address this host uses on its primary LAN interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryInterface {
    pub host_address: Ipv4Addr,
    pub prefix_len: u8,
    pub interface_name: String,
}

/// Queries the system for its interfaces and picks the primary one.
///
/// Fails with [`TopologyError::NoInterface`] instead of handing back an empty
/// address, so callers cannot go on to compute with nothing.
pub fn discover_primary_interface(policy: MaskPolicy) -> Result<PrimaryInterface> {
    let interfaces: Vec<NetworkInterface> = pnet::datalink::interfaces();
    if interfaces.is_empty() {
        let err = TopologyError::SystemQuery("the system reported no network interfaces".to_string());
        warn!("{err}");
    }
    debug!("Enumerated {} network interface(s)", interfaces.len());

    select_primary(&interfaces, policy)?.ok_or(TopologyError::NoInterface)
}

/// Returns the first IPv4 address that is not loopback, walking interfaces
/// and then their addresses in the order the system listed them.
///
/// This is first match, not best match: with several qualifying interfaces
/// the answer depends on enumeration order.
pub fn select_primary(
    interfaces: &[NetworkInterface],
    policy: MaskPolicy,
) -> Result<Option<PrimaryInterface>> {
    for interface in interfaces {
        let Some(net) = interface.first_non_loopback_ipv4() else {
            debug!("Skipping {}: no non-loopback IPv4 address", interface.name);
            continue;
        };

        let prefix_len: u8 = mask::hex_mask_to_prefix_length_with(&mask_hex(&net), policy)?;
        debug!("Selected {} on {}", net.ip(), interface.name);

        return Ok(Some(PrimaryInterface {
            host_address: net.ip(),
            prefix_len,
            interface_name: interface.name.clone(),
        }));
    }

    Ok(None)
}

/// The interface mask as eight hex digits, e.g. `ffffff00`.
fn mask_hex(net: &Ipv4Network) -> String {
    format!("{:08x}", u32::from(net.mask()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
