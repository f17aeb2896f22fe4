//! # Network Discovery Service
//!
//! Runs the one-shot pipeline: find the primary interface, derive its network,
//! sweep the subnet while looking up the default gateway, then build and
//! render the DHCP configuration.
//!
//! The sweep and the gateway lookup are independent and run concurrently;
//! both are joined before the configuration is assembled.

use std::net::Ipv4Addr;

use anyhow::Context;
use dhcpmap_common::config::Config;
use dhcpmap_common::network::address;
use dhcpmap_common::network::interface::PrimaryInterface;
use dhcpmap_common::network::topology::{NetworkTopology, TopologyAssumptions};
use dhcpmap_common::success;
use tracing::{error, info};

use crate::dhcp::{self, DhcpConfig};
use crate::gateway::{self, GatewayResolver, IpRouteResolver};
use crate::scanner::{self, HostScanner, NmapScanner};
use crate::system::{InterfaceSource, SystemRepo};
use crate::template::TemplateRenderer;

/// Everything a completed sweep learned.
#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    pub topology: NetworkTopology,
    /// Addresses as reported by the scanner, in report order.
    pub hosts: Vec<String>,
}

/// Result of the full pipeline.
#[derive(Debug, Clone)]
pub struct Generated {
    pub report: DiscoveryReport,
    pub config: DhcpConfig,
    pub assumptions: TopologyAssumptions,
    /// Set on dry runs, where nothing is written.
    pub rendered: Option<String>,
}

/// Orchestrates discovery by:
/// 1. asking the [`InterfaceSource`] for the primary interface,
/// 2. delegating the sweep to a [`HostScanner`] and the route lookup to a
///    [`GatewayResolver`],
/// 3. rendering the result through the [`TemplateRenderer`].
pub struct DiscoveryService {
    system: Box<dyn InterfaceSource>,
    scanner: Box<dyn HostScanner>,
    gateway: Box<dyn GatewayResolver>,
    config: Config,
}

impl DiscoveryService {
    pub fn new(
        system: Box<dyn InterfaceSource>,
        scanner: Box<dyn HostScanner>,
        gateway: Box<dyn GatewayResolver>,
        config: Config,
    ) -> Self {
        Self {
            system,
            scanner,
            gateway,
            config,
        }
    }

    /// Wires the real system, `nmap`, and `ip route` collaborators.
    pub fn from_config(config: Config) -> Self {
        Self::new(
            Box::new(SystemRepo),
            Box::new(NmapScanner::new(&config.scanner)),
            Box::new(IpRouteResolver::new(&config.route_tool)),
            config,
        )
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn locate(&self) -> anyhow::Result<(PrimaryInterface, Ipv4Addr)> {
        let primary: PrimaryInterface = self
            .system
            .primary_interface(self.config.mask_policy)
            .context("Failed to find a usable network interface")?;

        let network: Ipv4Addr =
            address::network_address(&primary.host_address.to_string(), primary.prefix_len)
                .context("Failed to derive the network address")?;

        info!(
            "Using {} on {}/{}",
            primary.host_address, primary.interface_name, primary.prefix_len
        );
        Ok((primary, network))
    }

    /// Resolves the topology without sweeping the subnet.
    pub async fn inspect(&self) -> anyhow::Result<NetworkTopology> {
        let (primary, network) = self.locate()?;
        let gateway = gateway::lookup_gateway(self.gateway.as_ref(), &primary.interface_name).await;
        Ok(NetworkTopology::new(primary, network, gateway))
    }

    /// Sweeps the local subnet.
    ///
    /// Returns `Ok(None)` when the sweep itself fails: the failure is logged
    /// and the run stops there without writing anything.
    pub async fn perform_discovery(&self) -> anyhow::Result<Option<DiscoveryReport>> {
        let (primary, network) = self.locate()?;
        let cidr: String = address::cidr_notation(network, primary.prefix_len);

        let (sweep, gateway) = tokio::join!(
            self.scanner.sweep(&cidr),
            gateway::lookup_gateway(self.gateway.as_ref(), &primary.interface_name),
        );

        let output: String = match sweep {
            Ok(output) => output,
            Err(e) => {
                error!("Error running host scan on {cidr}: {e}");
                return Ok(None);
            }
        };

        let hosts: Vec<String> = scanner::parse_hosts(&output);
        success!("{} host(s) answered on {cidr}", hosts.len());

        Ok(Some(DiscoveryReport {
            topology: NetworkTopology::new(primary, network, gateway),
            hosts,
        }))
    }

    /// Full pipeline. Returns `Ok(None)` when the sweep failed.
    ///
    /// Template and output errors are fatal and propagate.
    pub async fn generate(&self) -> anyhow::Result<Option<Generated>> {
        let Some(report) = self.perform_discovery().await? else {
            return Ok(None);
        };

        let (config, assumptions) = dhcp::config_for_topology(&report.topology, &self.config.lease)
            .context("Failed to build the DHCP configuration")?;

        let renderer = TemplateRenderer::new(&self.config.template_path);
        let rendered: Option<String> = if self.config.dry_run {
            Some(renderer.render(&config).await?)
        } else {
            renderer
                .render_to(&self.config.output_path, &config)
                .await
                .context("Failed to write the DHCP configuration")?;
            success!("Configuration written to {}", self.config.output_path.display());
            None
        };

        Ok(Some(Generated {
            report,
            config,
            assumptions,
            rendered,
        }))
    }
}
