use crate::catalog::Catalog;
use crate::item::{GameFeatures, GameId, Item};
use tracing::info;

/// Build the text fed to the vectorizer.
///
/// Genre and game details are joined without a separator; tokens at that
/// seam merge, and similarity scores depend on it.
pub fn combined_text(features: &GameFeatures) -> String {
    format!(
        "{} {} {} {}{}",
        features.name,
        features.developer,
        features.popular_tags,
        features.genre,
        features.game_details
    )
}

/// Assign dense ids in row order and build the catalog.
pub fn compose(features: Vec<GameFeatures>) -> Catalog {
    let items: Vec<Item> = features
        .into_iter()
        .enumerate()
        .map(|(i, f)| {
            let text = combined_text(&f);
            Item::new(GameId(i), f, text)
        })
        .collect();

    info!(items = items.len(), "catalog composed");
    Catalog::from_ordered(items)
}
