//! Default gateway lookup through the routing table.

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use dhcpmap_common::TopologyError;
use dhcpmap_common::config::ToolConfig;
use tracing::warn;

use crate::process;

#[async_trait]
pub trait GatewayResolver: Send + Sync {
    /// Returns the raw gateway column of the default route for `interface`.
    async fn default_gateway(&self, interface: &str) -> Result<String, TopologyError>;
}

/// Reads the default route with `ip route show default`.
pub struct IpRouteResolver {
    program: String,
    timeout: Duration,
}

impl IpRouteResolver {
    pub fn new(tool: &ToolConfig) -> Self {
        Self {
            program: tool.program.clone(),
            timeout: tool.timeout,
        }
    }
}

#[async_trait]
impl GatewayResolver for IpRouteResolver {
    async fn default_gateway(&self, interface: &str) -> Result<String, TopologyError> {
        let output = process::run_with_timeout(
            &self.program,
            &["route", "show", "default"],
            self.timeout,
        )
        .await?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(gateway_column(&stdout, interface).unwrap_or_default())
    }
}

/// Third column of the first line that mentions `interface` and has at least
/// three columns. For `default via 192.168.1.1 dev eth0` that is the router.
pub fn gateway_column(routes: &str, interface: &str) -> Option<String> {
    routes
        .lines()
        .filter(|line| line.contains(interface))
        .find_map(|line| line.split_whitespace().nth(2))
        .map(str::to_string)
}

/// Resolves the gateway and never fails: any problem is logged and yields `None`.
pub async fn lookup_gateway(resolver: &dyn GatewayResolver, interface: &str) -> Option<Ipv4Addr> {
    let raw: String = match resolver.default_gateway(interface).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error getting default gateway: {e}");
            return None;
        }
    };

    let raw = raw.trim();
    if raw.is_empty() {
        warn!("No default route found for {interface}");
        return None;
    }

    match raw.parse::<Ipv4Addr>() {
        Ok(gateway) => Some(gateway),
        Err(_) => {
            warn!("Default route for {interface} has a non-IPv4 gateway '{raw}'");
            None
        }
    }
}
