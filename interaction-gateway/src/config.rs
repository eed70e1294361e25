use std::time::Duration;

use ed25519_dalek::PublicKey;
use serde::Deserialize;

use crate::{Error, Result};

/// Environment-sourced configuration, read and validated once at startup.
/// A missing or malformed value refuses startup; nothing in here can fail
/// per-request.
pub struct Config {
    pub server_addr: Box<str>,
    pub public_key: PublicKey,
    pub brokers: Vec<String>,
    pub topic: String,
    pub publish_timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    server_addr: String,
    public_sig_key: String,
    pubsub_brokers: Vec<String>,
    pubsub_topic_name: String,
    #[serde(default = "default_publish_timeout_secs")]
    publish_timeout_secs: u64,
}

fn default_publish_timeout_secs() -> u64 {
    5
}

impl Config {
    pub fn from_env() -> Result<Config> {
        let raw: RawConfig = envy::from_env()?;

        Ok(Config {
            server_addr: raw.server_addr.into_boxed_str(),
            public_key: parse_public_key(&raw.public_sig_key)?,
            brokers: raw.pubsub_brokers,
            topic: raw.pubsub_topic_name,
            publish_timeout: Duration::from_secs(raw.publish_timeout_secs),
        })
    }
}

fn parse_public_key(key: &str) -> Result<PublicKey> {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(key, &mut bytes).map_err(Error::InvalidPublicKeyFormat)?;

    PublicKey::from_bytes(&bytes).map_err(Error::InvalidPublicKey)
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "188e162d74e3f38533d4a26438a21f7850d349f81fef5fdc3c2dbab4c8702500";

    #[test]
    fn test_parse_public_key() {
        assert!(parse_public_key(KEY).is_ok());
    }

    #[test]
    fn test_parse_public_key_bad_hex() {
        assert!(
            parse_public_key("zz8e162d74e3f38533d4a26438a21f7850d349f81fef5fdc3c2dbab4c8702500")
                .is_err()
        );
    }

    #[test]
    fn test_parse_public_key_wrong_length() {
        assert!(parse_public_key("188e162d").is_err());
    }
}
