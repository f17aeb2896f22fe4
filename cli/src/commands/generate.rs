use std::io::Write;
use std::time::Instant;

use dhcpmap_core::discovery::{DiscoveryService, Generated};

use crate::commands::discover;
use crate::mprint;
use crate::terminal::{format, print, spinner};

pub async fn generate(service: &DiscoveryService) -> anyhow::Result<()> {
    let start_time: Instant = Instant::now();

    let generated: Option<Generated> = {
        let _spinner = spinner::start("Discovering the local network...".to_string());
        service.generate().await?
    };

    let Some(generated) = generated else {
        return Ok(());
    };

    discover::discovery_ends(&generated.report, start_time.elapsed());
    mprint!();

    print::header("dhcp configuration");
    print::as_tree_one_level(format::config_to_details(
        &generated.config,
        &generated.assumptions,
    ));

    match generated.rendered {
        Some(rendered) => {
            print::header("rendered (dry run)");
            // stdout so it can be piped to a file
            write_rendered(&mut std::io::stdout().lock(), &rendered)?;
        }
        None => {
            print::aligned_line("Written to", service.config().output_path.display().to_string());
        }
    }
    Ok(())
}

/// Writes the rendered configuration byte for byte, adding no trailing newline.
fn write_rendered(out: &mut impl Write, rendered: &str) -> std::io::Result<()> {
    out.write_all(rendered.as_bytes())?;
    out.flush()
}
