use colored::*;
use dhcpmap_common::network::mask::Mask;

use crate::terminal::{colors, print};

pub fn mask(mask: Mask) {
    print::header("subnet mask");
    print::aligned_line("Prefix", mask.to_string().color(colors::IPV4_PREFIX));
    print::aligned_line("Dotted", mask.to_dotted_decimal().color(colors::IPV4_ADDR));
    print::aligned_line("Hex", mask.to_hex());
    print::aligned_line("Host bits", mask.host_bits().to_string());
}
