pub mod config;

pub use config::{DEFAULT_BLOCK_HEIGHT, DEFAULT_NODE_URL, ProbeConfig};
