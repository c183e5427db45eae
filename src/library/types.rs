// Library and carousel types

use serde::{Deserialize, Serialize};

/// One entry from the game list provider
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Game {
    pub id: String,
    pub title: String,
    /// Source or category; rows group on this by default
    #[serde(default)]
    pub category: String,
}

impl Game {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
        }
    }
}

/// One horizontally navigable row
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselRow {
    pub label: String,
    /// Flat index of the first game in this row
    pub offset: usize,
    pub games: Vec<Game>,
}

impl CarouselRow {
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn last_col(&self) -> usize {
        self.games.len().saturating_sub(1)
    }
}

/// The library as a vertical stack of carousels
///
/// Rebuilt whenever the game list or filter changes, never edited in place.
/// Rows are never empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselPartition {
    rows: Vec<CarouselRow>,
    total: usize,
}

impl CarouselPartition {
    /// Build from ordered groups, computing offsets; empty groups are dropped
    pub fn from_groups(groups: Vec<(String, Vec<Game>)>) -> Self {
        let mut rows = Vec::with_capacity(groups.len());
        let mut offset = 0;
        for (label, games) in groups.into_iter().filter(|(_, g)| !g.is_empty()) {
            let len = games.len();
            rows.push(CarouselRow { label, offset, games });
            offset += len;
        }
        Self { rows, total: offset }
    }

    pub fn rows(&self) -> &[CarouselRow] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&CarouselRow> {
        self.rows.get(row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn last_row(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Total flat game count
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn game(&self, index: usize) -> Option<&Game> {
        let (row, col) = crate::library::pure::mapper::flat_to_row_col(self, index);
        self.rows.get(row)?.games.get(col)
    }
}

/// How the flat list is split into rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CarouselRule {
    /// One row per category, in order of first appearance
    #[default]
    ByCategory,
    /// Consecutive rows of at most N games
    Chunked(usize),
}

/// Active filter applied before partitioning
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum LibraryFilter {
    #[default]
    All,
    Category(String),
    /// Case-insensitive title substring
    Title(String),
}
