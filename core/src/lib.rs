pub mod client;
pub mod error;
pub mod ledger;
pub mod probe;

pub use client::NodeRestClient;
pub use error::ProbeError;
pub use ledger::{BlockQuery, LEDGER_INFO_PATH, LedgerInfo, block_height_line};
pub use probe::run_probe;
