use crate::error::ProbeError;
use crate::ledger::{BlockQuery, LEDGER_INFO_PATH};
use ledger_probe_config::ProbeConfig;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::cell::Cell;

/// Blocking client for a fullnode's REST API, bound to a single base URL.
pub struct NodeRestClient {
    node_url: String,
    http: Client,
    requests_sent: Cell<usize>,
}

impl NodeRestClient {
    pub fn new(node_url: &str) -> Result<Self, ProbeError> {
        let node_url = node_url.trim_end_matches('/').to_string();
        // 3xx bodies are printed like any other answer, and proxies from the
        // environment never reroute the two requests.
        let http = Client::builder()
            .redirect(Policy::none())
            .no_proxy()
            .build()
            .map_err(|source| ProbeError::Transport {
                url: node_url.clone(),
                source,
            })?;

        Ok(NodeRestClient {
            node_url,
            http,
            requests_sent: Cell::new(0),
        })
    }

    pub fn from_config(cfg: &ProbeConfig) -> Result<Self, ProbeError> {
        Self::new(cfg.node_url_trimmed())
    }

    pub fn node_url(&self) -> &str {
        &self.node_url
    }

    pub fn requests_sent(&self) -> usize {
        self.requests_sent.get()
    }

    /// Fetch the ledger info served at `/v1/` and parse it as JSON.
    pub fn fetch_ledger_info(&self) -> Result<Value, ProbeError> {
        let (url, body) = self.get_text(LEDGER_INFO_PATH)?;
        serde_json::from_str(&body).map_err(|source| ProbeError::InvalidJson { url, source })
    }

    /// Fetch a block by height. The body is returned as-is, never parsed.
    pub fn fetch_block_by_height(&self, query: &BlockQuery) -> Result<String, ProbeError> {
        let (_, body) = self.get_text(&query.path())?;
        Ok(body)
    }

    /// GET `path` and decode the body as strict UTF-8. The HTTP status is not
    /// checked: error bodies are handed back like any other.
    fn get_text(&self, path: &str) -> Result<(String, String), ProbeError> {
        let url = format!("{}{}", self.node_url, path);
        info!("GET {}", url);

        self.requests_sent.set(self.requests_sent.get() + 1);
        let response = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|source| ProbeError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered {}, reading the body anyway", url, status);
        }

        let bytes = response.bytes().map_err(|source| ProbeError::Transport {
            url: url.clone(),
            source,
        })?;
        debug!("{} -> {} ({} bytes)", url, status, bytes.len());

        let body = String::from_utf8(bytes.to_vec()).map_err(|source| ProbeError::InvalidUtf8 {
            url: url.clone(),
            source,
        })?;

        Ok((url, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_dropped() {
        let client = NodeRestClient::new("http://127.0.0.1:9/").unwrap();
        assert_eq!(client.node_url(), "http://127.0.0.1:9");
        assert_eq!(client.requests_sent(), 0);
    }

    #[test]
    fn test_from_default_config() {
        let client = NodeRestClient::from_config(&ProbeConfig::default()).unwrap();
        assert_eq!(client.node_url(), "https://fullnode.devnet.aptoslabs.com");
    }

    #[test]
    fn test_connection_failure_is_transport_error() {
        // port 9 (discard) is not listening on test hosts
        let client = NodeRestClient::new("http://127.0.0.1:9").unwrap();
        let err = client.fetch_ledger_info().unwrap_err();
        match err {
            ProbeError::Transport { url, .. } => assert_eq!(url, "http://127.0.0.1:9/v1/"),
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(client.requests_sent(), 1);
    }
}
