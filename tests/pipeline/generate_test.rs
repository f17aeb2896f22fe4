use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use dhcpmap_common::TopologyError;
use dhcpmap_common::config::Config;
use dhcpmap_common::network::interface::PrimaryInterface;
use dhcpmap_core::discovery::DiscoveryService;
use dhcpmap_integration_tests::{CannedGateway, CannedScanner, FixedInterface};
use tempfile::TempDir;
use tokio::sync::Barrier;

const TEMPLATE: &str = "subnet {{.Subnet}} netmask {{.Netmask}} {
  range {{.RangeStart}} {{.RangeEnd}};
  option routers {{.Router}};
  option domain-name-servers {{.DNSServer}};
  default-lease-time {{.DefaultLease}};
  max-lease-time {{.MaxLease}};
}
";

const NMAP_REPORT: &str = "\
Starting Nmap 7.94 ( https://nmap.org )
Nmap scan report for router.lan (192.168.1.1)
Host is up (0.0021s latency).
Nmap scan report for 192.168.1.57
Host is up.
Nmap done: 256 IP addresses (2 hosts up) scanned in 2.31 seconds
";

fn home_lan() -> PrimaryInterface {
    PrimaryInterface {
        host_address: Ipv4Addr::new(192, 168, 1, 57),
        prefix_len: 24,
        interface_name: "eth0".to_string(),
    }
}

fn workspace(template: &str) -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    let template_path: PathBuf = dir.path().join("dhcpd.conf.tmpl");
    std::fs::write(&template_path, template).unwrap();
    let cfg = Config {
        template_path,
        output_path: dir.path().join("dhcpd.conf"),
        ..Config::default()
    };
    (dir, cfg)
}

fn service(
    primary: Option<PrimaryInterface>,
    scanner: CannedScanner,
    gateway: CannedGateway,
    cfg: Config,
) -> DiscoveryService {
    DiscoveryService::new(
        Box::new(FixedInterface(primary)),
        Box::new(scanner),
        Box::new(gateway),
        cfg,
    )
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[tokio::test]
async fn generate_writes_the_rendered_config() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    let generated = svc.generate().await.unwrap().unwrap();

    assert_eq!(generated.report.hosts, vec!["192.168.1.1", "192.168.1.57"]);
    assert!(generated.rendered.is_none());
    assert_eq!(
        read(&output_path),
        "subnet 192.168.1.0 netmask 255.255.255.0 {
  range  ;
  option routers 192.168.1.1;
  option domain-name-servers 192.168.1.57;
  default-lease-time 600;
  max-lease-time 7200;
}
"
    );
}

#[tokio::test]
async fn scanner_receives_the_network_cidr() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let scanner = CannedScanner::ok(NMAP_REPORT);
    let swept = scanner.swept.clone();
    let primary = PrimaryInterface {
        host_address: Ipv4Addr::new(10, 0, 5, 200),
        prefix_len: 22,
        interface_name: "enp3s0".to_string(),
    };
    let svc = service(Some(primary), scanner, CannedGateway::ok("10.0.4.1"), cfg);

    let generated = svc.generate().await.unwrap().unwrap();

    assert_eq!(*swept.lock().unwrap(), vec!["10.0.4.0/22".to_string()]);
    assert_eq!(generated.config.subnet, "10.0.4.0");
    assert_eq!(generated.config.netmask, "255.255.252.0");
}

#[tokio::test]
async fn failed_sweep_stops_without_writing() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::failing("nmap: command not found"),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    let generated = svc.generate().await.unwrap();

    assert!(generated.is_none());
    assert!(!output_path.exists());
}

#[tokio::test]
async fn missing_gateway_leaves_router_empty() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::failing(),
        cfg,
    );

    let generated = svc.generate().await.unwrap().unwrap();

    assert_eq!(generated.config.router, "");
    assert!(generated.report.topology.gateway_address.is_none());
    assert!(read(&output_path).contains("option routers ;"));
}

#[tokio::test]
async fn dry_run_returns_text_and_writes_nothing() {
    let (_dir, mut cfg) = workspace(TEMPLATE);
    cfg.dry_run = true;
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    let generated = svc.generate().await.unwrap().unwrap();

    let rendered = generated.rendered.unwrap();
    assert!(rendered.starts_with("subnet 192.168.1.0 netmask 255.255.255.0 {"));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn no_interface_is_fatal() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let scanner = CannedScanner::ok(NMAP_REPORT);
    let swept = scanner.swept.clone();
    let svc = service(None, scanner, CannedGateway::ok("192.168.1.1"), cfg);

    let err = svc.generate().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TopologyError>(),
        Some(TopologyError::NoInterface)
    ));
    assert!(swept.lock().unwrap().is_empty());
}

#[tokio::test]
async fn missing_template_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        template_path: dir.path().join("nope.tmpl"),
        output_path: dir.path().join("dhcpd.conf"),
        ..Config::default()
    };
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    let err = svc.generate().await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<TopologyError>(),
        Some(TopologyError::Template { .. })
    ));
    assert!(!output_path.exists());
}

#[tokio::test]
async fn unknown_placeholder_is_fatal() {
    let (_dir, cfg) = workspace("option ntp-servers {{.NtpServer}};\n");
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    assert!(svc.generate().await.is_err());
    assert!(!output_path.exists());
}

#[tokio::test]
async fn sweep_and_gateway_lookup_overlap() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let barrier = Arc::new(Barrier::new(2));
    let mut scanner = CannedScanner::ok(NMAP_REPORT);
    scanner.barrier = Some(barrier.clone());
    let mut gateway = CannedGateway::ok("192.168.1.1");
    gateway.barrier = Some(barrier);
    let svc = service(Some(home_lan()), scanner, gateway, cfg);

    // Each fake waits for the other, so this only finishes if both run at once.
    let generated = tokio::time::timeout(Duration::from_secs(5), svc.generate())
        .await
        .expect("sweep and gateway lookup ran sequentially")
        .unwrap()
        .unwrap();

    assert_eq!(generated.config.router, "192.168.1.1");
}

#[tokio::test]
async fn inspect_skips_the_sweep() {
    let (_dir, cfg) = workspace(TEMPLATE);
    let scanner = CannedScanner::ok(NMAP_REPORT);
    let swept = scanner.swept.clone();
    let svc = service(Some(home_lan()), scanner, CannedGateway::ok("192.168.1.1"), cfg);

    let topology = svc.inspect().await.unwrap();

    assert_eq!(topology.cidr(), "192.168.1.0/24");
    assert_eq!(topology.gateway_address, Some(Ipv4Addr::new(192, 168, 1, 1)));
    assert!(swept.lock().unwrap().is_empty());
}

#[tokio::test]
async fn shipped_template_renders() {
    let template_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../evil-dhcp/dhcpd.conf.tmpl");
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config {
        template_path,
        output_path: dir.path().join("dhcpd.conf"),
        ..Config::default()
    };
    let output_path = cfg.output_path.clone();
    let svc = service(
        Some(home_lan()),
        CannedScanner::ok(NMAP_REPORT),
        CannedGateway::ok("192.168.1.1"),
        cfg,
    );

    svc.generate().await.unwrap().unwrap();

    let written = read(&output_path);
    assert!(written.contains("subnet 192.168.1.0 netmask 255.255.255.0 {"));
    assert!(written.contains("default-lease-time 600;"));
    assert!(!written.contains("{{"));
}
