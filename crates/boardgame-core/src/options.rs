//! Option lists for the filter controls
//!
//! Every list is derived from the loaded catalog: the distinct values of one
//! field, sorted, behind a leading neutral option.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use serde::Serialize;
use tracing::warn;

use crate::more_filter::MoreFilterField;
use crate::record::GameRecord;

/// Control value meaning "no constraint"
pub const ALL: &str = "all";

pub const CATEGORY_LABEL: &str = "Kategori";
pub const PLAYTIME_LABEL: &str = "Spilletid";
pub const PLAYERS_LABEL: &str = "Antal spillere";
pub const DIFFICULTY_LABEL: &str = "Sværhedsgrad";

/// Highest player count the player select offers
pub const MAX_PLAYER_COUNT: u32 = 100;

/// One entry of a select control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self { label: value.clone(), value }
    }

    pub fn neutral(label: &str) -> Self {
        Self::new(ALL, label)
    }
}

/// Populated options for the four fixed select controls
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub playtimes: Vec<FilterOption>,
    pub players: Vec<FilterOption>,
    pub difficulties: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let categories = std::iter::once(FilterOption::neutral(CATEGORY_LABEL))
            .chain(category_values(games).into_iter().map(FilterOption::plain))
            .collect();

        let playtimes = std::iter::once(FilterOption::neutral(PLAYTIME_LABEL))
            .chain(playtime_values(games).into_iter().map(|time| {
                let label = format!("{} min.", time);
                FilterOption::new(time, label)
            }))
            .collect();

        let players = std::iter::once(FilterOption::neutral(PLAYERS_LABEL))
            .chain(
                player_counts(games)
                    .into_iter()
                    .map(|n| FilterOption::new(n.to_string(), format!("{} spillere", n))),
            )
            .collect();

        let difficulties = std::iter::once(FilterOption::neutral(DIFFICULTY_LABEL))
            .chain(difficulty_values(games).into_iter().map(FilterOption::plain))
            .collect();

        Self { categories, playtimes, players, difficulties }
    }
}

/// Distinct non-empty text values, in byte order
fn distinct_text<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct genre labels, sorted
pub fn category_values(games: &[GameRecord]) -> Vec<String> {
    games
        .iter()
        .filter_map(|g| g.genre_label())
        .filter(|label| !label.is_empty())
        .map(|label| label.into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct playtimes sorted as text, so "100" comes before "20"
pub fn playtime_values(games: &[GameRecord]) -> Vec<String> {
    games
        .iter()
        .filter_map(|g| g.playtime)
        .filter(|&p| p > 0)
        .map(|p| p.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Every player count covered by at least one game, ascending.
///
/// Ranges are cut off at [`MAX_PLAYER_COUNT`].
pub fn player_counts(games: &[GameRecord]) -> Vec<u32> {
    games
        .iter()
        .filter_map(|g| g.players.map(|range| (g, range)))
        .flat_map(|(game, range)| {
            if range.max > MAX_PLAYER_COUNT {
                warn!(title = %game.title, max = range.max, "player range capped");
            }
            range.counts_up_to(MAX_PLAYER_COUNT)
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn difficulty_values(games: &[GameRecord]) -> Vec<String> {
    distinct_text(games.iter().map(|g| g.difficulty.as_deref()))
}

pub fn age_values(games: &[GameRecord]) -> Vec<u32> {
    games
        .iter()
        .filter_map(|g| g.age)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn language_values(games: &[GameRecord]) -> Vec<String> {
    distinct_text(games.iter().map(|g| g.language.as_deref()))
}

pub fn location_values(games: &[GameRecord]) -> Vec<String> {
    distinct_text(games.iter().map(|g| g.location.as_deref()))
}

/// Distinct ratings by text form, numerically ascending. Ratings that are not
/// numbers follow the numeric ones in text order.
pub fn rating_values(games: &[GameRecord]) -> Vec<String> {
    let mut ratings: Vec<(Option<f64>, String)> = Vec::new();
    for rating in games.iter().filter_map(|g| g.rating.as_ref()) {
        let text = rating.to_string();
        if text.is_empty() || ratings.iter().any(|(_, t)| *t == text) {
            continue;
        }
        ratings.push((rating.as_number(), text));
    }

    ratings.sort_by(|(a_num, a_text), (b_num, b_text)| match (a_num, b_num) {
        (Some(a), Some(b)) => a.total_cmp(b).then_with(|| a_text.cmp(b_text)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a_text.cmp(b_text),
    });
    ratings.into_iter().map(|(_, text)| text).collect()
}

/// Values offered by the more-filter control for `field`
pub fn field_values(field: MoreFilterField, games: &[GameRecord]) -> Vec<String> {
    match field {
        MoreFilterField::Age => age_values(games).into_iter().map(|a| a.to_string()).collect(),
        MoreFilterField::Language => language_values(games),
        MoreFilterField::Location => location_values(games),
        MoreFilterField::Rating => rating_values(games),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Genre, PlayerRange, Rating};

    fn game(title: &str) -> GameRecord {
        GameRecord::titled(title)
    }

    fn sample() -> Vec<GameRecord> {
        let mut catan = game("Catan");
        catan.genre = Some(Genre::Single("Strategi".into()));
        catan.playtime = Some(90);
        catan.players = Some(PlayerRange { min: 3, max: 4 });
        catan.difficulty = Some("Mellem".into());
        catan.age = Some(10);
        catan.language = Some("Dansk".into());
        catan.rating = Some(Rating::Number(4.5));

        let mut codenames = game("Codenames");
        codenames.genre = Some(Genre::Single("Party".into()));
        codenames.playtime = Some(15);
        codenames.players = Some(PlayerRange { min: 2, max: 8 });
        codenames.difficulty = Some("Let".into());
        codenames.age = Some(14);
        codenames.language = Some("Engelsk".into());
        codenames.location = Some("Reol 2".into());
        codenames.rating = Some(Rating::Number(10.0));

        let mut twilight = game("Twilight Imperium");
        twilight.genre = Some(Genre::Single("Strategi".into()));
        twilight.playtime = Some(240);
        twilight.players = Some(PlayerRange { min: 3, max: 6 });
        twilight.difficulty = Some("Svær".into());
        twilight.age = Some(14);
        twilight.location = Some("Reol 1".into());
        twilight.rating = Some(Rating::Text("9".into()));

        vec![catan, codenames, twilight]
    }

    #[test]
    fn test_categories_sorted_and_distinct() {
        assert_eq!(category_values(&sample()), vec!["Party", "Strategi"]);
    }

    #[test]
    fn test_playtimes_sort_as_text() {
        assert_eq!(playtime_values(&sample()), vec!["15", "240", "90"]);

        let mut long = game("Long");
        long.playtime = Some(100);
        let mut short = game("Short");
        short.playtime = Some(20);
        assert_eq!(playtime_values(&[short, long]), vec!["100", "20"]);
    }

    #[test]
    fn test_player_counts_cover_ranges() {
        assert_eq!(player_counts(&sample()), vec![2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_player_counts_capped() {
        let mut huge = GameRecord::titled("Bingo");
        huge.players = Some(PlayerRange { min: 0, max: 4_000_000_000 });
        let mut odd = GameRecord::titled("Stadion");
        odd.players = Some(PlayerRange { min: 500, max: 600 });

        let counts = player_counts(&[huge, odd]);
        assert_eq!(counts.len(), MAX_PLAYER_COUNT as usize + 1);
        assert_eq!(counts.first(), Some(&0));
        assert_eq!(counts.last(), Some(&MAX_PLAYER_COUNT));
    }

    #[test]
    fn test_more_filter_field_values() {
        let games = sample();
        assert_eq!(field_values(MoreFilterField::Age, &games), vec!["10", "14"]);
        assert_eq!(field_values(MoreFilterField::Language, &games), vec!["Dansk", "Engelsk"]);
        assert_eq!(field_values(MoreFilterField::Location, &games), vec!["Reol 1", "Reol 2"]);
        assert_eq!(field_values(MoreFilterField::Rating, &games), vec!["4.5", "9", "10"]);
    }

    #[test]
    fn test_rating_values_text_after_numbers() {
        let mut a = game("A");
        a.rating = Some(Rating::Text("god".into()));
        let mut b = game("B");
        b.rating = Some(Rating::Number(3.0));
        let mut c = game("C");
        c.rating = Some(Rating::Text("3".into()));
        assert_eq!(rating_values(&[a, b, c]), vec!["3", "god"]);
    }

    #[test]
    fn test_empty_values_skipped() {
        let mut blank = game("Blank");
        blank.difficulty = Some(String::new());
        blank.playtime = Some(0);
        assert!(difficulty_values(&[blank.clone()]).is_empty());
        assert!(playtime_values(&[blank]).is_empty());
    }

    #[test]
    fn test_filter_options_have_neutral_first() {
        let options = FilterOptions::from_games(&sample());
        assert_eq!(options.categories[0], FilterOption::new(ALL, CATEGORY_LABEL));
        assert_eq!(options.playtimes[0], FilterOption::new(ALL, PLAYTIME_LABEL));
        assert_eq!(options.players[0], FilterOption::new(ALL, PLAYERS_LABEL));
        assert_eq!(options.difficulties[0], FilterOption::new(ALL, DIFFICULTY_LABEL));

        assert_eq!(options.players[1], FilterOption::new("2", "2 spillere"));
        assert_eq!(options.playtimes[3], FilterOption::new("90", "90 min."));
        assert_eq!(options.difficulties.len(), 4);
    }

    #[test]
    fn test_empty_catalog_gives_only_neutral_options() {
        let options = FilterOptions::from_games(&[]);
        assert_eq!(options.categories.len(), 1);
        assert_eq!(options.playtimes.len(), 1);
        assert_eq!(options.players.len(), 1);
        assert_eq!(options.difficulties.len(), 1);
    }
}
