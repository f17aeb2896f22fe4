use std::time::Duration;

use async_trait::async_trait;
use dhcpmap_common::TopologyError;
use dhcpmap_common::config::ToolConfig;
use tracing::info;

use super::HostScanner;
use crate::process;

/// Ping sweep through the `nmap` binary.
pub struct NmapScanner {
    program: String,
    timeout: Duration,
}

impl NmapScanner {
    pub fn new(tool: &ToolConfig) -> Self {
        Self {
            program: tool.program.clone(),
            timeout: tool.timeout,
        }
    }
}

#[async_trait]
impl HostScanner for NmapScanner {
    async fn sweep(&self, cidr: &str) -> Result<String, TopologyError> {
        info!("Sweeping {cidr} for live hosts");
        let output = process::run_with_timeout(&self.program, &["-sn", cidr], self.timeout).await?;
        Ok(process::combined_output(&output))
    }
}
