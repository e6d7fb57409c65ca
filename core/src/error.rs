use std::string::FromUtf8Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        source: reqwest::Error,
    },

    #[error("response from {url} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        url: String,
        source: FromUtf8Error,
    },

    #[error("response from {url} is not valid JSON: {source}")]
    InvalidJson {
        url: String,
        source: serde_json::Error,
    },

    #[error("ledger info has no `{0}` field")]
    MissingField(&'static str),

    #[error("failed to write probe output: {0}")]
    Output(#[from] std::io::Error),
}
