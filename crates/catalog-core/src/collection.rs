//! Collection listing: `<items><item objectid=".."> .. </item></items>`.

use roxmltree::Node;

use crate::error::ParseError;
use crate::format::{self, UNKNOWN_BOUND};
use crate::game_data::GameSummary;
use crate::xml;

/// Parse a collection document into one summary per top-level `item`, in document order.
pub fn parse_collection(text: &str) -> Result<Vec<GameSummary>, ParseError> {
    let doc = xml::parse_document(text)?;
    Ok(xml::children(doc.root_element(), "item")
        .map(summary_from_item)
        .collect())
}

fn summary_from_item(item: Node<'_, '_>) -> GameSummary {
    let stats = xml::child(item, "stats");
    let stat = |name: &str| {
        stats
            .and_then(|s| s.attribute(name))
            .unwrap_or(UNKNOWN_BOUND)
    };

    GameSummary {
        id: item.attribute("objectid").map(str::to_string),
        title: xml::child_text_or(item, "name", "Unknown"),
        lst_published_year: xml::child_text_or(item, "yearpublished", "Unknown"),
        players: format::player_range(stat("minplayers"), stat("maxplayers")),
        playtime: format::playtime(stat("minplaytime"), stat("maxplaytime")),
        thumbnail: xml::child_text_or(item, "thumbnail", "No thumbnail"),
    }
}
