use serde::{Deserialize, Serialize};

/// Public Aptos devnet fullnode queried by the probe.
pub const DEFAULT_NODE_URL: &str = "https://fullnode.devnet.aptoslabs.com";

/// Block fetched by the second request.
pub const DEFAULT_BLOCK_HEIGHT: u64 = 906_107;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    pub node_url: String,
    pub block_height: u64,
    pub with_transactions: bool,
}

impl ProbeConfig {
    /// Config pointed at another node, keeping the default block query.
    pub fn with_node_url(node_url: &str) -> Self {
        Self {
            node_url: node_url.to_string(),
            ..Self::default()
        }
    }

    /// Base URL without a trailing slash, so paths can be appended verbatim.
    pub fn node_url_trimmed(&self) -> &str {
        self.node_url.trim_end_matches('/')
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            node_url: DEFAULT_NODE_URL.to_string(),
            block_height: DEFAULT_BLOCK_HEIGHT,
            with_transactions: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_targets_devnet() {
        let cfg = ProbeConfig::default();
        assert_eq!(cfg.node_url, "https://fullnode.devnet.aptoslabs.com");
        assert_eq!(cfg.block_height, 906107);
        assert!(cfg.with_transactions);
    }

    #[test]
    fn test_node_url_trimmed() {
        let cfg = ProbeConfig::with_node_url("http://127.0.0.1:8080/");
        assert_eq!(cfg.node_url_trimmed(), "http://127.0.0.1:8080");
        assert_eq!(cfg.block_height, DEFAULT_BLOCK_HEIGHT);
    }

    #[test]
    fn test_to_json_lists_every_field() {
        let json = ProbeConfig::default().to_json();
        let back: ProbeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProbeConfig::default());
        assert!(json.contains("\"with_transactions\":true"));
    }
}
