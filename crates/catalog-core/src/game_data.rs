use serde::{Deserialize, Serialize};

/// One entry of an owner's collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub id: Option<String>,
    pub title: String,
    pub lst_published_year: String,
    pub players: String,  // "3-4", "?-?"
    pub playtime: String, // "60 min", "30-60 min"
    pub thumbnail: String,
}

/// Full record for a single game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetail {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub image: String,
    pub players: String,
    pub playtime: String,
    pub categories: String, // ", "-joined
    pub expansions: Vec<String>,
}
