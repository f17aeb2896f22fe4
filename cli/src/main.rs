mod commands;
mod terminal;

use commands::{CommandLine, Commands, discover, generate, info, mask};
use dhcpmap_common::config::Config;
use dhcpmap_core::discovery::DiscoveryService;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);
    print::banner();

    let cfg: Config = commands.to_config()?;
    let service = DiscoveryService::from_config(cfg);

    match commands.command {
        Commands::Generate { .. } => {
            print::header("getting ready for discovery");
            generate::generate(&service).await
        }
        Commands::Discover => {
            print::header("getting ready for discovery");
            discover::discover(&service).await
        }
        Commands::Info => info::info(&service).await,
        Commands::Mask { mask: value } => {
            mask::mask(value);
            Ok(())
        }
    }
}
