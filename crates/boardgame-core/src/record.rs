//! Game records as served by the catalog endpoint

use std::borrow::Cow;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// Only `title` is required. Every other field may be absent in the payload;
/// a record without a field simply never matches a filter over that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub title: String,
    #[serde(default)]
    pub image: String,
    /// Playing time in minutes
    #[serde(default)]
    pub playtime: Option<u32>,
    #[serde(default)]
    pub players: Option<PlayerRange>,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub difficulty: Option<String>,
    /// Minimum recommended age
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub rating: Option<Rating>,
    #[serde(default)]
    pub description: String,
}

impl GameRecord {
    /// Record with just a title, used as a starting point by tests and tools.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: String::new(),
            playtime: None,
            players: None,
            genre: None,
            difficulty: None,
            age: None,
            language: None,
            location: None,
            rating: None,
            description: String::new(),
        }
    }

    /// Genre as the single label used for filtering and the category options
    pub fn genre_label(&self) -> Option<Cow<'_, str>> {
        self.genre.as_ref().map(Genre::label)
    }

    pub fn playtime_text(&self) -> Option<String> {
        self.playtime.map(|p| p.to_string())
    }

    pub fn rating_text(&self) -> Option<String> {
        self.rating.as_ref().map(Rating::to_string)
    }
}

/// Inclusive range of supported player counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRange {
    pub min: u32,
    pub max: u32,
}

impl PlayerRange {
    pub fn contains(&self, count: u32) -> bool {
        self.min <= count && count <= self.max
    }

    /// Supported player counts no higher than `limit`. Empty when `min > max`.
    pub fn counts_up_to(&self, limit: u32) -> RangeInclusive<u32> {
        self.min..=self.max.min(limit)
    }
}

impl fmt::Display for PlayerRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// Genre field: the feed uses a plain string for most games and a list for a few.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Genre {
    Single(String),
    Multiple(Vec<String>),
}

impl Genre {
    /// Lists collapse to their entries joined by ", "
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            Genre::Single(name) => Cow::Borrowed(name.as_str()),
            Genre::Multiple(names) => Cow::Owned(names.join(", ")),
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Rating as it appears in the feed, either numeric or free text.
///
/// Filtering compares ratings by their text form, so `8` and `8.0` are the same
/// rating and both display as `8`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rating {
    Number(f64),
    Text(String),
}

impl Rating {
    /// Numeric value, parsing text ratings where possible
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Rating::Number(n) => Some(*n),
            Rating::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Number(n) => write!(f, "{}", n),
            Rating::Text(text) => f.write_str(text),
        }
    }
}
