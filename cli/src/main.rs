use anyhow::Result;
use clap::Parser;
use ledger_probe_config::ProbeConfig;
use ledger_probe_core::{NodeRestClient, run_probe};
use log::info;

/// Takes no arguments: the node and the block are fixed.
#[derive(Parser)]
#[command(name = "ledger-probe")]
#[command(version, about = "Print an Aptos fullnode's ledger info and one block", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cfg = ProbeConfig::default();
    info!("Probing {}", cfg.node_url);

    let client = NodeRestClient::from_config(&cfg)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_probe(&client, &cfg, &mut out)?;

    Ok(())
}
