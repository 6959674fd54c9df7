use std::time::Duration;

/// Root of the add-ons API, every endpoint is relative to it
pub const BASE_URI: &str = "https://addons-ecs.forgesvc.net/api/v2/";

pub const GAMES_ENDPOINT: &str = "game";
pub const FEATURED_ENDPOINT: &str = "addon/featured";
pub const SEARCH_ENDPOINT: &str = "addon/search";

/// Catalog name of the game whose add-ons are queried by default
pub const DEFAULT_GAME_NAME: &str = "World of Warcraft";

/// Folder used by `Client::download_addon` when no target folder is given
pub const DEFAULT_DOWNLOAD_FOLDER: &str = "tmp";

pub const DEFAULT_FEATURED_COUNT: u32 = 6;
pub const DEFAULT_POPULAR_COUNT: u32 = 14;
pub const DEFAULT_UPDATED_COUNT: u32 = 14;

pub const DEFAULT_REQUESTS_TIMEOUT: Duration = Duration::from_secs(30);

/// Amount of bytes read from the response before they're pushed to the output
pub const DOWNLOAD_CHUNK_SIZE: usize = 16 * 1024;
