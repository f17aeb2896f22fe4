use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Failures raised while inferring the local topology or rendering its config.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Enumerating interfaces or their addresses failed.
    #[error("system query failed: {0}")]
    SystemQuery(String),

    /// No interface carries a non-loopback IPv4 address.
    #[error("no interface with a non-loopback IPv4 address was found")]
    NoInterface,

    #[error("'{program}' failed: {reason}")]
    Subprocess { program: String, reason: String },

    #[error("'{program}' did not finish within {after:?}")]
    Timeout { program: String, after: Duration },

    #[error("invalid hex mask '{input}': {reason}")]
    MaskParse { input: String, reason: String },

    /// The mask has set bits after its first zero bit.
    #[error("mask {mask:#010x} is not a contiguous run of leading ones")]
    NonContiguousMask { mask: u32 },

    #[error("prefix length {0} is outside 0..=32")]
    PrefixOutOfRange(u8),

    #[error("'{0}' is not a valid IPv4 address")]
    InvalidAddress(String),

    #[error("template {}: {reason}", path.display())]
    Template { path: PathBuf, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TopologyError>;
