//! Filter engine
//!
//! [`apply`] narrows a game collection by every active criterion at once. It
//! never mutates its input and keeps the catalog order of the survivors.

use tracing::debug;

use crate::more_filter::{MoreFilter, MoreFilterField};
use crate::options::ALL;
use crate::record::GameRecord;

/// Active constraints from all filter controls. `None` / empty means the
/// control is at its neutral value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title
    pub search: String,
    /// Genre label
    pub category: Option<String>,
    /// Playtime in minutes, as text
    pub playtime: Option<String>,
    /// Player count that must fall inside the game's range
    pub players: Option<u32>,
    pub difficulty: Option<String>,
    pub more: Option<MoreFilter>,
}

impl FilterCriteria {
    pub fn is_neutral(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_playtime(mut self, playtime: impl Into<String>) -> Self {
        self.playtime = Some(playtime.into());
        self
    }

    pub fn with_players(mut self, players: u32) -> Self {
        self.players = Some(players);
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    pub fn with_more(mut self, more: MoreFilter) -> Self {
        self.more = Some(more);
        self
    }
}

/// Constraint carried by a select control value; the neutral value and the
/// empty string carry none
pub fn control_value(value: &str) -> Option<String> {
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

/// Player count carried by the player select. Non-numeric values carry none.
pub fn player_target(value: &str) -> Option<u32> {
    control_value(value).and_then(|v| v.trim().parse().ok())
}

/// Criteria with the search text lowercased once per run
struct Prepared<'a> {
    needle: String,
    criteria: &'a FilterCriteria,
}

impl<'a> Prepared<'a> {
    fn new(criteria: &'a FilterCriteria) -> Self {
        Self {
            needle: criteria.search.to_lowercase(),
            criteria,
        }
    }

    fn matches(&self, game: &GameRecord) -> bool {
        let c = self.criteria;

        if !self.needle.is_empty() && !game.title.to_lowercase().contains(&self.needle) {
            return false;
        }

        if let Some(category) = &c.category {
            if game.genre_label().as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(playtime) = &c.playtime {
            if game.playtime_text().as_deref() != Some(playtime.as_str()) {
                return false;
            }
        }

        if let Some(target) = c.players {
            if !game.players.is_some_and(|range| range.contains(target)) {
                return false;
            }
        }

        if let Some(difficulty) = &c.difficulty {
            if game.difficulty.as_ref() != Some(difficulty) {
                return false;
            }
        }

        match &c.more {
            Some(more) => matches_more(game, more),
            None => true,
        }
    }
}

fn matches_more(game: &GameRecord, more: &MoreFilter) -> bool {
    match more.field {
        // Suitable up to the chosen age
        MoreFilterField::Age => match (game.age, more.value.trim().parse::<u32>()) {
            (Some(age), Ok(threshold)) => age <= threshold,
            _ => false,
        },
        MoreFilterField::Language => game.language.as_deref() == Some(more.value.as_str()),
        MoreFilterField::Location => game.location.as_deref() == Some(more.value.as_str()),
        MoreFilterField::Rating => game.rating_text().as_deref() == Some(more.value.as_str()),
    }
}

/// Whether a single game passes every active criterion
pub fn matches(game: &GameRecord, criteria: &FilterCriteria) -> bool {
    Prepared::new(criteria).matches(game)
}

/// Games passing every active criterion, in their original order
pub fn apply(games: &[GameRecord], criteria: &FilterCriteria) -> Vec<GameRecord> {
    let prepared = Prepared::new(criteria);
    let result: Vec<GameRecord> = games.iter().filter(|g| prepared.matches(g)).cloned().collect();
    debug!(total = games.len(), visible = result.len(), "filters applied");
    result
}
