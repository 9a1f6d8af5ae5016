//! Single game document: `<boardgames><boardgame objectid=".."> .. </boardgame></boardgames>`.

use roxmltree::Node;

use crate::error::ParseError;
use crate::format::{self, UNKNOWN_BOUND};
use crate::game_data::GameDetail;
use crate::xml;

/// Parse a boardgame document. `Ok(None)` when the root has no `boardgame` child.
pub fn parse_detail(text: &str) -> Result<Option<GameDetail>, ParseError> {
    let doc = xml::parse_document(text)?;
    Ok(xml::child(doc.root_element(), "boardgame").map(detail_from_boardgame))
}

fn detail_from_boardgame(game: Node<'_, '_>) -> GameDetail {
    // First name flagged primary wins, whatever its position.
    let title = xml::children(game, "name")
        .find(|n| n.attribute("primary") == Some("true"))
        .map(xml::text_of)
        .unwrap_or_else(|| "Unknown".to_string());

    let players = match (xml::child(game, "minplayers"), xml::child(game, "maxplayers")) {
        (Some(min), Some(max)) => format::player_range(&xml::text_of(min), &xml::text_of(max)),
        _ => "N/A".to_string(),
    };

    let playtime = format::playtime(
        &xml::child_text_or(game, "minplaytime", UNKNOWN_BOUND),
        &xml::child_text_or(game, "maxplaytime", UNKNOWN_BOUND),
    );

    let categories = xml::children(game, "boardgamecategory")
        .map(xml::text_of)
        .collect::<Vec<_>>()
        .join(", ");

    let expansions = xml::children(game, "boardgameexpansion")
        .map(xml::text_of)
        .collect();

    GameDetail {
        id: game.attribute("objectid").map(str::to_string),
        title,
        description: xml::child_text_or(game, "description", "No description"),
        image: xml::child_text_or(game, "image", "No image"),
        players,
        playtime,
        categories,
        expansions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATAN: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<boardgames termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
  <boardgame objectid="13">
    <yearpublished>1995</yearpublished>
    <minplayers>3</minplayers>
    <maxplayers>4</maxplayers>
    <playingtime>120</playingtime>
    <minplaytime>60</minplaytime>
    <maxplaytime>120</maxplaytime>
    <age>10</age>
    <name sortindex="1">Die Siedler von Catan</name>
    <name primary="true" sortindex="1">CATAN</name>
    <name sortindex="1">Les Colons de Catane</name>
    <description>Trade, build, settle.&lt;br/&gt;</description>
    <thumbnail>http://x/thumb.jpg</thumbnail>
    <image>http://x/pic.jpg</image>
    <boardgamecategory objectid="1021">Economic</boardgamecategory>
    <boardgamecategory objectid="1026">Negotiation</boardgamecategory>
    <boardgameexpansion objectid="926">CATAN: Cities &amp; Knights</boardgameexpansion>
    <boardgameexpansion objectid="325">CATAN: Seafarers</boardgameexpansion>
  </boardgame>
</boardgames>"#;

    #[test]
    fn test_parse_detail_full() {
        let game = parse_detail(CATAN).unwrap().unwrap();
        assert_eq!(game.id.as_deref(), Some("13"));
        assert_eq!(game.title, "CATAN");
        assert_eq!(game.description, "Trade, build, settle.<br/>");
        assert_eq!(game.image, "http://x/pic.jpg");
        assert_eq!(game.players, "3-4");
        assert_eq!(game.playtime, "60-120 min");
        assert_eq!(game.categories, "Economic, Negotiation");
        assert_eq!(
            game.expansions,
            vec!["CATAN: Cities & Knights".to_string(), "CATAN: Seafarers".to_string()]
        );
    }

    #[test]
    fn test_primary_title_first_match_in_document_order() {
        let xml = r#"<boardgames><boardgame objectid="7">
            <name primary="false">Secondary</name>
            <name primary="true">Primary</name>
            <name primary="true">Later primary</name>
        </boardgame></boardgames>"#;

        let game = parse_detail(xml).unwrap().unwrap();
        assert_eq!(game.title, "Primary");
    }

    #[test]
    fn test_primary_attribute_must_be_literal_true() {
        let xml = r#"<boardgames><boardgame>
            <name primary="TRUE">Shouting</name>
            <name>Plain</name>
        </boardgame></boardgames>"#;

        let game = parse_detail(xml).unwrap().unwrap();
        assert_eq!(game.title, "Unknown");
    }

    #[test]
    fn test_missing_boardgame_is_none() {
        assert_eq!(parse_detail("<boardgames/>").unwrap(), None);
        let xml = r#"<boardgames><error message="Item not found"/></boardgames>"#;
        assert_eq!(parse_detail(xml).unwrap(), None);
    }

    #[test]
    fn test_bare_boardgame_uses_defaults() {
        let game = parse_detail("<boardgames><boardgame/></boardgames>")
            .unwrap()
            .unwrap();
        assert_eq!(game.id, None);
        assert_eq!(game.title, "Unknown");
        assert_eq!(game.description, "No description");
        assert_eq!(game.image, "No image");
        assert_eq!(game.players, "N/A");
        assert_eq!(game.playtime, "? min");
        assert_eq!(game.categories, "");
        assert!(game.expansions.is_empty());
    }

    #[test]
    fn test_players_needs_both_bounds() {
        let xml = "<boardgames><boardgame><minplayers>2</minplayers></boardgame></boardgames>";
        let game = parse_detail(xml).unwrap().unwrap();
        assert_eq!(game.players, "N/A");
    }

    #[test]
    fn test_equal_playtime_collapses() {
        let xml = r#"<boardgames><boardgame>
            <minplaytime>60</minplaytime><maxplaytime>60</maxplaytime>
        </boardgame></boardgames>"#;
        let game = parse_detail(xml).unwrap().unwrap();
        assert_eq!(game.playtime, "60 min");
    }

    #[test]
    fn test_no_expansions_serializes_as_empty_array() {
        let game = parse_detail("<boardgames><boardgame objectid=\"1\"/></boardgames>")
            .unwrap()
            .unwrap();
        let json = serde_json::to_value(&game).unwrap();
        assert_eq!(json["expansions"], serde_json::json!([]));
        assert_eq!(json["id"], "1");
    }

    #[test]
    fn test_malformed_detail_is_error() {
        assert!(parse_detail("<boardgames><boardgame>").is_err());
    }
}
