//! The **abstraction** over the external host-discovery tool.
//!
//! The orchestrator only knows [`HostScanner`]: hand it a subnet in CIDR form,
//! get back the tool's raw report. Turning that report into addresses is the
//! job of [`parse`], which is tied to the report format of the tool behind
//! the default implementation, [`nmap::NmapScanner`].

use async_trait::async_trait;
use dhcpmap_common::TopologyError;

pub mod nmap;
pub mod parse;

pub use nmap::NmapScanner;
pub use parse::parse_hosts;

/// Runs a host-discovery sweep (no port probing) over a subnet.
#[async_trait]
pub trait HostScanner: Send + Sync {
    /// Sweeps `cidr` (e.g. `192.168.1.0/24`) and returns the combined
    /// stdout and stderr text of the scan.
    async fn sweep(&self, cidr: &str) -> Result<String, TopologyError>;
}
