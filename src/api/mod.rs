use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, DecodePolicy};
use crate::network::{Transport, HttpTransport};
use crate::{Error, Result};

pub mod schema;
pub mod catalog;
pub mod addons;

/// Add-ons API client
/// 
/// Every call is blocking and performs its requests right away.
/// Nothing is cached between calls unless `ClientConfig::cache_game_id` is set
#[derive(Debug)]
pub struct Client<T: Transport = HttpTransport> {
    config: ClientConfig,
    transport: T,
    game_id: Mutex<Option<i64>>
}

impl Client<HttpTransport> {
    /// Create client with default config
    pub fn new() -> Self {
        let config = ClientConfig::default();

        let transport = HttpTransport::new()
            .with_timeout(config.timeout);

        Self::with_transport(config, transport)
    }

    /// Create client with `minreq` transport configured from the given config.
    /// 
    /// Return `Err` if proxy address can't be parsed
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut transport = HttpTransport::new()
            .with_timeout(config.timeout);

        if let Some(proxy) = &config.proxy {
            transport = transport.with_proxy(proxy.as_str())
                .map_err(|err| Error::Config(format!("invalid proxy {proxy:?}: {err}")))?;
        }

        Ok(Self::with_transport(config, transport))
    }
}

impl Default for Client<HttpTransport> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> Client<T> {
    #[inline]
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self {
            config,
            transport,
            game_id: Mutex::new(None)
        }
    }

    #[inline]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    #[inline]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Decode response of a list endpoint respecting the decode policy
    pub(crate) fn decode_list<V: DeserializeOwned>(&self, endpoint: &'static str, body: &[u8]) -> Result<Vec<V>> {
        // `null` body is an empty list
        match serde_json::from_slice::<Option<Vec<V>>>(body) {
            Ok(list) => Ok(list.unwrap_or_default()),

            Err(err) => match self.config.decode_policy {
                DecodePolicy::Lenient => {
                    tracing::warn!("Malformed {endpoint} response, using empty list: {err}");

                    Ok(Vec::new())
                }

                DecodePolicy::Strict => Err(Error::Decode {
                    endpoint,
                    source: err
                })
            }
        }
    }
}
