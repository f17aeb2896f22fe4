use std::path::PathBuf;
use std::time::Duration;

/// Lease length handed out when the client does not ask for one, in seconds.
pub const DEFAULT_LEASE_SECS: u32 = 600;
/// Upper bound on any lease the server grants, in seconds.
pub const MAX_LEASE_SECS: u32 = 7200;

pub const DEFAULT_TEMPLATE_PATH: &str = "evil-dhcp/dhcpd.conf.tmpl";
pub const DEFAULT_OUTPUT_PATH: &str = "evil-dhcp/dhcpd.conf";

pub const DEFAULT_SCANNER: &str = "nmap";
pub const DEFAULT_ROUTE_TOOL: &str = "ip";
pub const DEFAULT_SCAN_TIMEOUT: Duration = Duration::from_secs(120);
pub const DEFAULT_ROUTE_TIMEOUT: Duration = Duration::from_secs(5);

/// How masks whose set bits are not one leading run are treated.
///
/// Masks read from interfaces through `pnet` are derived from a prefix length
/// and are always contiguous, so `Strict` only changes the outcome for hex
/// masks that come from elsewhere.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MaskPolicy {
    /// Count every set bit as part of the prefix and warn about it.
    #[default]
    Permissive,
    /// Reject the mask outright.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeasePolicy {
    pub default_lease_secs: u32,
    pub max_lease_secs: u32,
}

impl Default for LeasePolicy {
    fn default() -> Self {
        Self {
            default_lease_secs: DEFAULT_LEASE_SECS,
            max_lease_secs: MAX_LEASE_SECS,
        }
    }
}

/// External program invocation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub program: String,
    pub timeout: Duration,
}

/// Run-wide settings, built once at startup and handed to every stage.
#[derive(Debug, Clone)]
pub struct Config {
    pub lease: LeasePolicy,
    pub template_path: PathBuf,
    pub output_path: PathBuf,
    pub scanner: ToolConfig,
    pub route_tool: ToolConfig,
    pub mask_policy: MaskPolicy,
    /// Render the configuration to stdout instead of writing `output_path`.
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lease: LeasePolicy::default(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            scanner: ToolConfig {
                program: DEFAULT_SCANNER.to_string(),
                timeout: DEFAULT_SCAN_TIMEOUT,
            },
            route_tool: ToolConfig {
                program: DEFAULT_ROUTE_TOOL.to_string(),
                timeout: DEFAULT_ROUTE_TIMEOUT,
            },
            mask_policy: MaskPolicy::default(),
            dry_run: false,
        }
    }
}
