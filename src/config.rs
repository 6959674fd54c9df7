use std::time::Duration;

use crate::consts::*;

/// What to do when a list endpoint returns malformed JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecodePolicy {
    /// Catalog and search responses degrade to an empty list,
    /// featured listing still fails with `Error::Decode`
    #[default]
    Lenient,

    /// Every malformed response fails with `Error::Decode`
    Strict
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_uri: String,
    pub game_name: String,
    pub default_download_folder: String,

    pub featured_count: u32,
    pub popular_count: u32,
    pub updated_count: u32,

    /// `None` means requests can hang forever
    pub timeout: Option<Duration>,
    pub proxy: Option<String>,

    pub decode_policy: DecodePolicy,

    /// Remember resolved game id for the client's lifetime.
    /// Cached id goes stale if the catalog changes, see `Client::invalidate_game_id`
    pub cache_game_id: bool
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: BASE_URI.to_string(),
            game_name: DEFAULT_GAME_NAME.to_string(),
            default_download_folder: DEFAULT_DOWNLOAD_FOLDER.to_string(),

            featured_count: DEFAULT_FEATURED_COUNT,
            popular_count: DEFAULT_POPULAR_COUNT,
            updated_count: DEFAULT_UPDATED_COUNT,

            timeout: Some(DEFAULT_REQUESTS_TIMEOUT),
            proxy: None,

            decode_policy: DecodePolicy::default(),
            cache_game_id: false
        }
    }
}

impl ClientConfig {
    #[inline]
    pub fn with_base_uri(self, base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            ..self
        }
    }

    #[inline]
    pub fn with_game_name(self, game_name: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            ..self
        }
    }

    #[inline]
    pub fn with_default_download_folder(self, folder: impl Into<String>) -> Self {
        Self {
            default_download_folder: folder.into(),
            ..self
        }
    }

    /// Set amounts of featured, popular and recently updated add-ons to request
    #[inline]
    pub fn with_listing_counts(self, featured: u32, popular: u32, updated: u32) -> Self {
        Self {
            featured_count: featured,
            popular_count: popular,
            updated_count: updated,
            ..self
        }
    }

    #[inline]
    pub fn with_timeout(self, timeout: Option<Duration>) -> Self {
        Self {
            timeout,
            ..self
        }
    }

    #[inline]
    pub fn with_proxy(self, proxy: impl Into<String>) -> Self {
        Self {
            proxy: Some(proxy.into()),
            ..self
        }
    }

    #[inline]
    pub fn with_decode_policy(self, decode_policy: DecodePolicy) -> Self {
        Self {
            decode_policy,
            ..self
        }
    }

    #[inline]
    pub fn with_game_id_cache(self, cache_game_id: bool) -> Self {
        Self {
            cache_game_id,
            ..self
        }
    }

    /// Build full URI of the API endpoint
    /// 
    /// ```
    /// use curse_addons_core::prelude::*;
    /// 
    /// let config = ClientConfig::default().with_base_uri("http://localhost:8080/api");
    /// 
    /// assert_eq!(config.endpoint("game"), "http://localhost:8080/api/game");
    /// ```
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_uri.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}
