//! # Subnet Mask Conversions
//!
//! A mask can be written three ways and this module moves between them:
//! * a CIDR prefix length (`24`),
//! * dotted-decimal (`255.255.255.0`),
//! * eight hex digits (`ffffff00`), which is how interface masks print.
//!
//! Prefix lengths outside `0..=32` are always rejected.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use tracing::warn;

use crate::config::MaskPolicy;
use crate::error::{Result, TopologyError};

pub const MAX_PREFIX_LEN: u8 = 32;

fn check_prefix(prefix_len: u8) -> Result<()> {
    if prefix_len > MAX_PREFIX_LEN {
        return Err(TopologyError::PrefixOutOfRange(prefix_len));
    }
    Ok(())
}

/// Returns the mask as a 32-bit value with `prefix_len` leading ones.
pub fn prefix_to_bits(prefix_len: u8) -> Result<u32> {
    check_prefix(prefix_len)?;
    Ok(match prefix_len {
        0 => 0,
        len => u32::MAX << (32 - u32::from(len)),
    })
}

/// Builds the dotted-decimal mask one octet at a time, left to right.
///
/// Full octets are `255`. The first octet with fewer than eight bits left is
/// `256 - 2^(8 - remaining)` and everything after it is `0`.
pub fn cidr_to_dotted_decimal(prefix_len: u8) -> Result<String> {
    check_prefix(prefix_len)?;

    let mut remaining: u8 = prefix_len;
    let mut octets: [u16; 4] = [0; 4];
    for octet in octets.iter_mut() {
        if remaining >= 8 {
            *octet = 255;
            remaining -= 8;
        } else {
            *octet = 256 - (1u16 << (8 - remaining));
            remaining = 0;
        }
    }

    Ok(octets
        .iter()
        .map(|octet| octet.to_string())
        .collect::<Vec<String>>()
        .join("."))
}

pub fn cidr_to_hex_mask(prefix_len: u8) -> Result<String> {
    prefix_to_bits(prefix_len).map(|bits| format!("{bits:08x}"))
}

/// Parses a hex mask and returns how many bits are set.
///
/// This counts every set bit, not the leading run, so `ff00ff00` yields 16.
/// Use [`hex_mask_to_prefix_length_with`] to apply a [`MaskPolicy`].
pub fn hex_mask_to_prefix_length(hex: &str) -> Result<u8> {
    let bits: u32 = parse_hex_mask(hex)?;
    Ok(bits.count_ones() as u8)
}

pub fn hex_mask_to_prefix_length_with(hex: &str, policy: MaskPolicy) -> Result<u8> {
    let bits: u32 = parse_hex_mask(hex)?;
    if !is_contiguous(bits) {
        match policy {
            MaskPolicy::Strict => return Err(TopologyError::NonContiguousMask { mask: bits }),
            MaskPolicy::Permissive => {
                warn!("Mask {hex} is not contiguous, counting its {} set bits", bits.count_ones());
            }
        }
    }
    Ok(bits.count_ones() as u8)
}

fn parse_hex_mask(hex: &str) -> Result<u32> {
    // from_str_radix tolerates a leading '+', a mask string never has one
    if hex.starts_with('+') {
        return Err(TopologyError::MaskParse {
            input: hex.to_string(),
            reason: "unexpected sign".to_string(),
        });
    }
    u32::from_str_radix(hex, 16).map_err(|e| TopologyError::MaskParse {
        input: hex.to_string(),
        reason: e.to_string(),
    })
}

/// True when the set bits form a single run starting at the most significant bit.
pub fn is_contiguous(bits: u32) -> bool {
    bits.leading_ones() + bits.trailing_zeros() == 32
}

pub fn dotted_decimal_to_prefix_length(mask: &str) -> Result<u8> {
    let addr: Ipv4Addr = mask
        .parse()
        .map_err(|_| TopologyError::InvalidAddress(mask.to_string()))?;
    let bits: u32 = u32::from(addr);
    if !is_contiguous(bits) {
        return Err(TopologyError::NonContiguousMask { mask: bits });
    }
    Ok(bits.leading_ones() as u8)
}

/// A validated subnet mask that renders in any of its three forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mask {
    prefix_len: u8,
}

impl Mask {
    pub fn from_prefix(prefix_len: u8) -> Result<Self> {
        check_prefix(prefix_len)?;
        Ok(Self { prefix_len })
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }

    pub fn to_dotted_decimal(&self) -> String {
        // prefix was range checked on construction
        cidr_to_dotted_decimal(self.prefix_len).unwrap_or_default()
    }

    pub fn to_hex(&self) -> String {
        cidr_to_hex_mask(self.prefix_len).unwrap_or_default()
    }

    pub fn host_bits(&self) -> u8 {
        MAX_PREFIX_LEN - self.prefix_len
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.prefix_len)
    }
}

impl FromStr for Mask {
    type Err = TopologyError;

    /// Accepts a prefix length (`"24"`, `"/24"`), a dotted mask
    /// (`"255.255.255.0"`), or a hex mask (`"0xffffff00"`, `"ffffff00"`).
    ///
    /// Hex input is only recognised with a `0x` prefix or as exactly eight
    /// digits so that `"24"` stays a prefix length.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if s.contains('.') {
            return Self::from_prefix(dotted_decimal_to_prefix_length(s)?);
        }

        let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X"));
        if let Some(hex) = hex.or_else(|| (s.len() == 8).then_some(s)) {
            let bits: u32 = parse_hex_mask(hex)?;
            if !is_contiguous(bits) {
                return Err(TopologyError::NonContiguousMask { mask: bits });
            }
            return Self::from_prefix(bits.leading_ones() as u8);
        }

        let digits = s.strip_prefix('/').unwrap_or(s);
        let prefix_len: u8 = digits.parse().map_err(|_| TopologyError::MaskParse {
            input: s.to_string(),
            reason: "expected a prefix length, dotted mask, or hex mask".to_string(),
        })?;
        Self::from_prefix(prefix_len)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
