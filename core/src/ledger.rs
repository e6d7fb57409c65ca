use crate::error::ProbeError;
use ledger_probe_config::ProbeConfig;
use serde_json::Value;
use std::fmt;

/// Path of the ledger info (index) endpoint.
pub const LEDGER_INFO_PATH: &str = "/v1/";

/// Parse u64 from a decimal string or a JSON number.
/// Aptos encodes u64 values as strings; plain numbers are accepted too.
fn parse_u64_from_json(value: &Value) -> Option<u64> {
    if let Some(s) = value.as_str() {
        return s.parse::<u64>().ok();
    }
    value.as_u64()
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Typed view over the `/v1/` response. Every field is optional because the
/// shape is owned by the node, not by us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LedgerInfo {
    pub chain_id: Option<u8>,
    pub epoch: Option<u64>,
    pub ledger_version: Option<u64>,
    pub oldest_ledger_version: Option<u64>,
    pub ledger_timestamp: Option<u64>,
    pub node_role: Option<String>,
    pub oldest_block_height: Option<u64>,
    pub block_height: Option<u64>,
    pub git_hash: Option<String>,
}

impl LedgerInfo {
    /// Returns `None` when the response is not a JSON object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let u64_field = |key: &str| obj.get(key).and_then(parse_u64_from_json);

        Some(Self {
            chain_id: u64_field("chain_id").and_then(|id| u8::try_from(id).ok()),
            epoch: u64_field("epoch"),
            ledger_version: u64_field("ledger_version"),
            oldest_ledger_version: u64_field("oldest_ledger_version"),
            ledger_timestamp: u64_field("ledger_timestamp"),
            node_role: string_field(obj, "node_role"),
            oldest_block_height: u64_field("oldest_block_height"),
            block_height: u64_field("block_height"),
            git_hash: string_field(obj, "git_hash"),
        })
    }
}

impl fmt::Display for LedgerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn show<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "?".to_string())
        }

        write!(
            f,
            "chain {} ({} node), epoch {}, ledger version {}, blocks {}..{}",
            show(&self.chain_id),
            show(&self.node_role),
            show(&self.epoch),
            show(&self.ledger_version),
            show(&self.oldest_block_height),
            show(&self.block_height),
        )
    }
}

/// Renders `Current block height: N` from the raw ledger info.
///
/// String heights are printed unquoted so `"906107"` and `906107` render the same.
pub fn block_height_line(ledger: &Value) -> Result<String, ProbeError> {
    let height = ledger
        .get("block_height")
        .ok_or(ProbeError::MissingField("block_height"))?;

    let rendered = match height {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    Ok(format!("Current block height: {}", rendered))
}

/// Request for `/v1/blocks/by_height/{height}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockQuery {
    pub height: u64,
    pub with_transactions: bool,
}

impl BlockQuery {
    pub fn new(height: u64, with_transactions: bool) -> Self {
        Self {
            height,
            with_transactions,
        }
    }

    pub fn from_config(cfg: &ProbeConfig) -> Self {
        Self::new(cfg.block_height, cfg.with_transactions)
    }

    pub fn path(&self) -> String {
        format!(
            "/v1/blocks/by_height/{}?with_transactions={}",
            self.height, self.with_transactions
        )
    }
}
