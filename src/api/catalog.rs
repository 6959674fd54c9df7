use crate::consts::GAMES_ENDPOINT;
use crate::network::Transport;
use crate::{Error, Result};

use super::Client;
use super::schema::GameInfo;

impl<T: Transport> Client<T> {
    /// Fetch list of all the games known by the API
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn fetch_catalog(&self) -> Result<Vec<GameInfo>> {
        tracing::trace!("Fetching games catalog");

        let body = self.transport.get(&self.config.endpoint(GAMES_ENDPOINT), &[])?;

        self.decode_list(GAMES_ENDPOINT, &body)
    }

    /// Resolve id of the game with given name.
    /// 
    /// Name must match exactly, the catalog is fetched on every call
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn resolve_game_id_for(&self, name: &str) -> Result<i64> {
        let game = self.fetch_catalog()?
            .into_iter()
            .find(|game| game.name == name)
            .ok_or_else(|| Error::NotFound {
                game: name.to_string()
            })?;

        tracing::debug!("Resolved game {name:?} id: {}", game.id);

        Ok(game.id)
    }

    /// Resolve id of the configured game
    pub fn resolve_game_id(&self) -> Result<i64> {
        if !self.config.cache_game_id {
            return self.resolve_game_id_for(&self.config.game_name);
        }

        let mut cache = self.game_id.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(id) = *cache {
            return Ok(id);
        }

        let id = self.resolve_game_id_for(&self.config.game_name)?;

        *cache = Some(id);

        Ok(id)
    }

    /// Forget cached game id so the next call fetches the catalog again
    pub fn invalidate_game_id(&self) {
        let mut cache = self.game_id.lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        *cache = None;
    }
}
