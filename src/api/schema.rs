use serde::{Serialize, Deserialize, Deserializer};

use crate::selector::select_file;

// Missing or null fields are decoded as zero values, same as the upstream
// service clients do. Only malformed JSON fails the decoding

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct GameInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct AddonInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "websiteUrl", deserialize_with = "null_as_default")]
    pub website_url: String,

    /// Order is kept as sent by the server. It defines which file
    /// wins when several of them support the same game version
    #[serde(rename = "latestFiles", deserialize_with = "null_as_default")]
    pub files: Vec<AddonFile>
}

impl AddonInfo {
    /// Get first file compatible with given game version
    #[inline]
    pub fn file_for_version(&self, version: &str) -> Option<&AddonFile> {
        select_file(&self.files, version)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct AddonFile {
    #[serde(rename = "fileName", deserialize_with = "null_as_default")]
    pub file_name: String,

    #[serde(rename = "downloadUrl", deserialize_with = "null_as_default")]
    pub download_url: String,

    /// Can be empty, then no version is supported
    #[serde(rename = "gameVersion", deserialize_with = "null_as_default")]
    pub game_versions: Vec<String>
}

impl AddonFile {
    #[inline]
    pub fn supports_version(&self, version: &str) -> bool {
        self.game_versions.iter().any(|supported| supported == version)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct FeaturedListing {
    #[serde(rename = "Featured", deserialize_with = "null_as_default")]
    pub featured: Vec<AddonInfo>,

    #[serde(rename = "Popular", deserialize_with = "null_as_default")]
    pub popular: Vec<AddonInfo>,

    #[serde(rename = "RecentlyUpdated", deserialize_with = "null_as_default")]
    pub recently_updated: Vec<AddonInfo>
}

impl FeaturedListing {
    /// Iterate over featured, popular and recently updated add-ons, in this order
    pub fn all(&self) -> impl Iterator<Item = &AddonInfo> {
        self.featured.iter()
            .chain(self.popular.iter())
            .chain(self.recently_updated.iter())
    }
}

/// Featured add-ons request
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FeaturedRequest {
    pub game_id: i64,
    pub addon_ids: Vec<i64>,
    pub featured_count: u32,
    pub popular_count: u32,
    pub updated_count: u32
}

impl FeaturedRequest {
    /// JSON body expected by the featured endpoint
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "GameId": self.game_id,
            "addonIds": self.addon_ids,
            "featuredCount": self.featured_count,
            "popularCount": self.popular_count,
            "updatedCount": self.updated_count
        })
    }
}
