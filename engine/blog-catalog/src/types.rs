use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One player's pre-written blog entry as produced by the export pipeline
///
/// Only the fields the service reasons about are typed; everything else the
/// export carries (title, body, timestamps, ...) passes through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogRecord {
    /// Player name (e.g., "Lamar Jackson"), the case-insensitive lookup key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_name: Option<String>,

    /// Position (QB, RB, WR, TE, K, DEF); exports without one read as "Unknown"
    #[serde(default = "default_position")]
    pub position: String,

    /// Length of the write-up in words
    #[serde(default)]
    pub word_count: u64,

    /// Remaining export fields, carried through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_position() -> String {
    "Unknown".to_string()
}

impl BlogRecord {
    /// Create a record with just the typed fields (used by tests and tools)
    pub fn new(player_name: impl Into<String>, position: impl Into<String>, word_count: u64) -> Self {
        Self {
            player_name: Some(player_name.into()),
            position: position.into(),
            word_count,
            extra: Map::new(),
        }
    }

    /// Lowercase-normalized lookup key, if the record is named
    pub fn key(&self) -> Option<String> {
        self.player_name.as_deref().map(str::to_lowercase)
    }
}
