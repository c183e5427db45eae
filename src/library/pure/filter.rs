// Library filtering (pure functions)

use crate::library::types::{Game, LibraryFilter};

/// Games passing the filter, in original order
pub fn apply_filter(games: &[Game], filter: &LibraryFilter) -> Vec<Game> {
    match filter {
        LibraryFilter::All => games.to_vec(),
        LibraryFilter::Category(category) => games
            .iter()
            .filter(|g| g.category.eq_ignore_ascii_case(category))
            .cloned()
            .collect(),
        LibraryFilter::Title(needle) => {
            let needle = needle.to_lowercase();
            games
                .iter()
                .filter(|g| g.title.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        }
    }
}
