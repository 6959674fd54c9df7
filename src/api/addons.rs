use crate::consts::{FEATURED_ENDPOINT, SEARCH_ENDPOINT};
use crate::network::Transport;
use crate::{Error, Result};

use super::Client;
use super::schema::{AddonInfo, FeaturedListing, FeaturedRequest};

impl<T: Transport> Client<T> {
    /// Build featured listing request for the given game
    pub fn featured_request(&self, game_id: i64) -> FeaturedRequest {
        FeaturedRequest {
            game_id,
            addon_ids: Vec::new(),
            featured_count: self.config.featured_count,
            popular_count: self.config.popular_count,
            updated_count: self.config.updated_count
        }
    }

    /// Get featured, popular and recently updated add-ons of the configured game
    /// 
    /// Unlike other list endpoints, malformed response always fails with `Error::Decode`
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn featured_addons(&self) -> Result<FeaturedListing> {
        let game_id = self.resolve_game_id()?;

        tracing::trace!("Fetching featured addons");

        let request = self.featured_request(game_id)
            .to_json()
            .to_string();

        let body = self.transport.post_json(&self.config.endpoint(FEATURED_ENDPOINT), request.as_bytes())?;

        // `null` body means an empty listing
        serde_json::from_slice::<Option<FeaturedListing>>(&body)
            .map(Option::unwrap_or_default)
            .map_err(|err| Error::Decode {
                endpoint: FEATURED_ENDPOINT,
                source: err
            })
    }

    /// Search add-ons of the configured game
    /// 
    /// `game_version` filter is sent only when it's not empty
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn search_addons(&self, search_term: &str, game_version: &str) -> Result<Vec<AddonInfo>> {
        let game_id = self.resolve_game_id()?.to_string();

        let mut query = vec![
            ("gameId", game_id.as_str()),
            ("searchFilter", search_term)
        ];

        if !game_version.is_empty() {
            query.push(("gameVersion", game_version));
        }

        let body = self.transport.get(&self.config.endpoint(SEARCH_ENDPOINT), &query)?;

        let addons = self.decode_list::<AddonInfo>(SEARCH_ENDPOINT, &body)?;

        tracing::debug!("Found {} addons for {search_term:?}", addons.len());

        Ok(addons)
    }
}
