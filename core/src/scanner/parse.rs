/// Marker that starts every host entry in an nmap report.
pub const REPORT_MARKER: &str = "Nmap scan report for";

/// Pulls host addresses out of a human-readable nmap report.
///
/// Every line carrying [`REPORT_MARKER`] contributes its last whitespace
/// separated token with surrounding parentheses removed, which covers both
/// `... for 192.168.1.1` and `... for router.lan (192.168.1.1)`. Order and
/// duplicates are kept. Tokens are not validated as addresses.
pub fn parse_hosts(scan_output: &str) -> Vec<String> {
    scan_output
        .lines()
        .filter(|line| line.contains(REPORT_MARKER))
        .filter_map(|line| line.split_whitespace().last())
        .map(|token| token.trim_matches(|c| c == '(' || c == ')').to_string())
        .collect()
}
