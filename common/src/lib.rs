//! Shared building blocks for `dhcpmap`: configuration, errors, and the
//! topology math (mask conversion, network address, primary interface).

pub mod config;
pub mod error;
pub mod network;
pub mod utils;

pub use error::{Result, TopologyError};

/// `tracing` target of events emitted by [`success!`].
pub const SUCCESS_TARGET: &str = "dhcpmap::success";

/// Logs a completed step. Rendered with the success marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: $crate::SUCCESS_TARGET, $($arg)*)
    };
}
