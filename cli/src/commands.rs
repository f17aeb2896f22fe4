pub mod discover;
pub mod generate;
pub mod info;
pub mod mask;

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dhcpmap_common::config::{
    self, Config, DEFAULT_OUTPUT_PATH, DEFAULT_ROUTE_TOOL, DEFAULT_SCANNER, DEFAULT_TEMPLATE_PATH,
    LeasePolicy, MaskPolicy, ToolConfig,
};
use dhcpmap_common::network::mask::Mask;

#[derive(Parser)]
#[command(name = "dhcpmap")]
#[command(about = "Discovers the local subnet and writes a matching dhcpd configuration.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// dhcpd template with {{.Field}} placeholders
    #[arg(long, global = true, default_value = DEFAULT_TEMPLATE_PATH)]
    pub template: PathBuf,

    /// Where the rendered configuration is written
    #[arg(long, short, global = true, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Host discovery program, called as `<scanner> -sn <cidr>`
    #[arg(long, global = true, default_value = DEFAULT_SCANNER)]
    pub scanner: String,

    /// Seconds before the host sweep is abandoned
    #[arg(long, global = true, default_value_t = config::DEFAULT_SCAN_TIMEOUT.as_secs())]
    pub scan_timeout: u64,

    /// Routing table program, called as `<route-tool> route show default`
    #[arg(long, global = true, default_value = DEFAULT_ROUTE_TOOL)]
    pub route_tool: String,

    /// Seconds before the default route lookup is abandoned
    #[arg(long, global = true, default_value_t = config::DEFAULT_ROUTE_TIMEOUT.as_secs())]
    pub route_timeout: u64,

    /// default-lease-time written to the configuration, in seconds
    #[arg(long, global = true, default_value_t = config::DEFAULT_LEASE_SECS)]
    pub default_lease: u32,

    /// max-lease-time written to the configuration, in seconds
    #[arg(long, global = true, default_value_t = config::MAX_LEASE_SECS)]
    pub max_lease: u32,

    /// Reject interface masks that are not one run of leading ones
    #[arg(long, global = true)]
    pub strict_mask: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Discover the network and write the DHCP configuration
    #[command(alias = "g")]
    Generate {
        /// Print the rendered configuration instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Sweep the local subnet and list the hosts that answered
    #[command(alias = "d")]
    Discover,
    /// Show the selected interface, network, and gateway without scanning
    #[command(alias = "i")]
    Info,
    /// Convert a mask between prefix, dotted-decimal, and hex forms
    #[command(alias = "m")]
    Mask { mask: Mask },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> anyhow::Result<Config> {
        if self.default_lease > self.max_lease {
            anyhow::bail!(
                "--default-lease ({}) must not exceed --max-lease ({})",
                self.default_lease,
                self.max_lease
            );
        }

        let dry_run: bool = matches!(self.command, Commands::Generate { dry_run: true });
        let mask_policy: MaskPolicy = if self.strict_mask {
            MaskPolicy::Strict
        } else {
            MaskPolicy::Permissive
        };

        Ok(Config {
            lease: LeasePolicy {
                default_lease_secs: self.default_lease,
                max_lease_secs: self.max_lease,
            },
            template_path: self.template.clone(),
            output_path: self.output.clone(),
            scanner: ToolConfig {
                program: self.scanner.clone(),
                timeout: Duration::from_secs(self.scan_timeout),
            },
            route_tool: ToolConfig {
                program: self.route_tool.clone(),
                timeout: Duration::from_secs(self.route_timeout),
            },
            mask_policy,
            dry_run,
        })
    }
}
