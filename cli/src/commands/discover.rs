use std::time::{Duration, Instant};

use colored::*;
use dhcpmap_core::discovery::{DiscoveryReport, DiscoveryService};

use crate::mprint;
use crate::terminal::{colors, format, print, spinner};

pub async fn discover(service: &DiscoveryService) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let report: Option<DiscoveryReport> = {
        let _spinner = spinner::start("Sweeping the local subnet...".to_string());
        service.perform_discovery().await?
    };

    // the sweep failure was already reported
    let Some(report) = report else {
        return Ok(());
    };

    discovery_ends(&report, start_time.elapsed());
    Ok(())
}

pub fn discovery_ends(report: &DiscoveryReport, total_time: Duration) {
    print::header("local network");
    print::as_tree_one_level(format::topology_to_details(&report.topology));
    mprint!();

    if report.hosts.is_empty() {
        print::header("zero hosts detected");
        print::no_results();
        return;
    }

    print::header("network discovery");
    print_hosts(&report.hosts);
    print_summary(report.hosts.len(), total_time);
}

fn print_hosts(hosts: &[String]) {
    for (idx, host) in hosts.iter().enumerate() {
        print::tree_head(idx, host);
    }
}

fn print_summary(hosts_len: usize, total_time: Duration) {
    let active_hosts: ColoredString = format!("{hosts_len} active hosts").bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString = format!("Discovery Complete: {active_hosts} identified in {total_time}")
        .color(colors::TEXT_DEFAULT);

    print::fat_separator();
    print::centerln(&output.to_string());
}
