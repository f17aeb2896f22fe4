use dhcpmap_common::Result;
use dhcpmap_common::config::MaskPolicy;
use dhcpmap_common::network::interface::{self, PrimaryInterface};

/// Source of the local interface the run is built around.
pub trait InterfaceSource: Send + Sync {
    fn primary_interface(&self, policy: MaskPolicy) -> Result<PrimaryInterface>;
}

/// Reads the interfaces of the machine we are running on.
pub struct SystemRepo;

impl InterfaceSource for SystemRepo {
    fn primary_interface(&self, policy: MaskPolicy) -> Result<PrimaryInterface> {
        interface::discover_primary_interface(policy)
    }
}
