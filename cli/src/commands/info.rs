use dhcpmap_common::network::topology::NetworkTopology;
use dhcpmap_core::discovery::DiscoveryService;

use crate::terminal::{format, print};

pub async fn info(service: &DiscoveryService) -> anyhow::Result<()> {
    let topology: NetworkTopology = service.inspect().await?;

    print::header("local network");
    print::as_tree_one_level(format::topology_to_details(&topology));
    Ok(())
}
