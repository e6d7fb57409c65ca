use crate::client::NodeRestClient;
use crate::error::ProbeError;
use crate::ledger::{BlockQuery, LedgerInfo, block_height_line};
use ledger_probe_config::ProbeConfig;
use log::{debug, info};
use std::io::Write;

/// Query the ledger info, then the configured block, writing both to `out`.
///
/// Output is three items in order: the ledger info as compact JSON, the
/// `Current block height: N` line, and the raw block body. Any failure stops
/// the probe where it happened; whatever was written before stays written.
pub fn run_probe<W: Write>(
    client: &NodeRestClient,
    cfg: &ProbeConfig,
    out: &mut W,
) -> Result<(), ProbeError> {
    debug!("probe config: {}", cfg.to_json());

    let ledger = client.fetch_ledger_info()?;
    writeln!(out, "{}", ledger)?;
    out.flush()?;

    match LedgerInfo::from_value(&ledger) {
        Some(summary) => info!("{}", summary),
        None => debug!("ledger info is not a JSON object"),
    }

    writeln!(out, "{}", block_height_line(&ledger)?)?;
    out.flush()?;

    let query = BlockQuery::from_config(cfg);
    let block = client.fetch_block_by_height(&query)?;
    writeln!(out, "{}", block)?;
    out.flush()?;

    Ok(())
}
