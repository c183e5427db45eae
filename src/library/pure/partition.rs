// Partitioning the flat game list into carousel rows (pure functions)

use crate::library::types::{CarouselPartition, CarouselRule, Game};

/// Group games by a caller-supplied classification
///
/// Relative order inside each group is preserved and groups appear in the
/// order their first game appears in `games`.
pub fn partition<F>(games: &[Game], rule: F) -> CarouselPartition
where
    F: Fn(&Game) -> String,
{
    let mut groups: Vec<(String, Vec<Game>)> = Vec::new();
    for game in games {
        let key = rule(game);
        match groups.iter_mut().find(|(label, _)| *label == key) {
            Some((_, members)) => members.push(game.clone()),
            None => groups.push((key, vec![game.clone()])),
        }
    }
    CarouselPartition::from_groups(groups)
}

/// Split into consecutive rows of `row_len` games (the last row may be shorter)
pub fn partition_chunked(games: &[Game], row_len: usize) -> CarouselPartition {
    let row_len = row_len.max(1);
    let groups = games
        .chunks(row_len)
        .enumerate()
        .map(|(i, chunk)| (format!("Row {}", i + 1), chunk.to_vec()))
        .collect();
    CarouselPartition::from_groups(groups)
}

impl CarouselRule {
    pub fn apply(self, games: &[Game]) -> CarouselPartition {
        match self {
            CarouselRule::ByCategory => partition(games, |g| g.category.clone()),
            CarouselRule::Chunked(n) => partition_chunked(games, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games(cats: &[&str]) -> Vec<Game> {
        cats.iter()
            .enumerate()
            .map(|(i, c)| Game::new(format!("g{}", i), format!("Game {}", i), *c))
            .collect()
    }

    #[test]
    fn groups_in_order_of_first_appearance() {
        let list = games(&["steam", "epic", "steam", "gog", "epic"]);
        let p = partition(&list, |g| g.category.clone());

        let labels: Vec<&str> = p.rows().iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["steam", "epic", "gog"]);

        let steam_ids: Vec<&str> = p.rows()[0].games.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(steam_ids, vec!["g0", "g2"]);
    }

    #[test]
    fn offsets_are_cumulative() {
        let list = games(&["a", "a", "b", "c", "c", "c"]);
        let p = partition(&list, |g| g.category.clone());

        let offsets: Vec<usize> = p.rows().iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 2, 3]);
        assert_eq!(p.len(), 6);
    }

    #[test]
    fn chunked_split_four_three() {
        let list = games(&["x"; 7]);
        let p = partition_chunked(&list, 4);
        assert_eq!(p.row_count(), 2);
        assert_eq!(p.rows()[0].len(), 4);
        assert_eq!(p.rows()[1].len(), 3);
        assert_eq!(p.rows()[1].offset, 4);
    }

    #[test]
    fn empty_list_has_no_rows() {
        let p = partition(&[], |g| g.category.clone());
        assert!(p.is_empty());
        assert_eq!(p.row_count(), 0);
        assert_eq!(partition_chunked(&[], 0).row_count(), 0);
    }

    #[test]
    fn rule_dispatch() {
        let list = games(&["a", "b", "a"]);
        assert_eq!(CarouselRule::ByCategory.apply(&list).row_count(), 2);
        assert_eq!(CarouselRule::Chunked(1).apply(&list).row_count(), 3);
    }
}
