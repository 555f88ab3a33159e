//! Plain-text rendering of listings, option sets and game details

use boardgame_core::{FilterOption, FilterOptions, GameRecord};

pub const NO_RESULTS_MESSAGE: &str = "Øv! Vi fandt desværre ingen resultater.";

/// One line per game: title, playtime, players, genre
pub fn format_row(game: &GameRecord) -> String {
    let playtime = game
        .playtime
        .map(|p| format!("{} min.", p))
        .unwrap_or_else(|| "-".to_string());
    let players = game
        .players
        .map(|range| format!("{} spillere", range))
        .unwrap_or_else(|| "-".to_string());
    let genre = game.genre_label().map(|g| g.into_owned()).unwrap_or_default();

    format!("{:<32} {:>9}  {:>14}  {}", game.title, playtime, players, genre)
        .trim_end()
        .to_string()
}

pub fn format_listing(games: &[GameRecord], total: usize) -> String {
    if games.is_empty() {
        return NO_RESULTS_MESSAGE.to_string();
    }
    let mut out: Vec<String> = games.iter().map(format_row).collect();
    out.push(String::new());
    out.push(format!("{} of {} games", games.len(), total));
    out.join("\n")
}

fn format_section(title: &str, options: &[FilterOption]) -> String {
    // The leading neutral entry is the control's own label, not a value
    let values: Vec<&str> = options.iter().skip(1).map(|o| o.value.as_str()).collect();
    format!("{}: {}", title, values.join(", "))
}

pub fn format_options(options: &FilterOptions) -> String {
    [
        format_section("Kategori", &options.categories),
        format_section("Spilletid", &options.playtimes),
        format_section("Antal spillere", &options.players),
        format_section("Sværhedsgrad", &options.difficulties),
    ]
    .join("\n")
}

pub fn format_detail(game: &GameRecord) -> String {
    let mut lines = vec![game.title.clone()];
    if let Some(genre) = game.genre_label() {
        lines.push(genre.into_owned());
    }
    if let Some(rating) = game.rating_text() {
        lines.push(format!("⭐ {}", rating));
    }

    let mut facts: Vec<(&str, String)> = Vec::new();
    if let Some(p) = game.playtime {
        facts.push(("Spilletid", format!("{} min.", p)));
    }
    if let Some(range) = game.players {
        facts.push(("Spillere", range.to_string()));
    }
    if let Some(d) = &game.difficulty {
        facts.push(("Sværhedsgrad", d.clone()));
    }
    if let Some(age) = game.age {
        facts.push(("Alder", format!("{}+", age)));
    }
    if let Some(lang) = &game.language {
        facts.push(("Sprog", lang.clone()));
    }
    if let Some(loc) = &game.location {
        facts.push(("Lokation", loc.clone()));
    }
    if !game.image.is_empty() {
        facts.push(("Billede", game.image.clone()));
    }
    for (label, value) in facts {
        lines.push(format!("  {:<13} {}", format!("{}:", label), value));
    }

    if !game.description.is_empty() {
        lines.push(String::new());
        lines.push(game.description.clone());
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boardgame_core::{Genre, PlayerRange, Rating};

    fn catan() -> GameRecord {
        let mut game = GameRecord::titled("Catan");
        game.genre = Some(Genre::Single("Strategi".into()));
        game.playtime = Some(90);
        game.players = Some(PlayerRange { min: 3, max: 4 });
        game.age = Some(10);
        game.rating = Some(Rating::Number(4.5));
        game.description = "Byg og handl.".into();
        game
    }

    #[test]
    fn test_format_row() {
        let row = format_row(&catan());
        assert!(row.starts_with("Catan "));
        assert!(row.contains("90 min."));
        assert!(row.contains("3 - 4 spillere"));
        assert!(row.ends_with("Strategi"));

        let bare = format_row(&GameRecord::titled("Hive"));
        assert!(bare.starts_with("Hive"));
        assert!(bare.contains('-'));
    }

    #[test]
    fn test_empty_listing_shows_message() {
        assert_eq!(format_listing(&[], 12), NO_RESULTS_MESSAGE);
        assert!(format_listing(&[catan()], 12).ends_with("1 of 12 games"));
    }

    #[test]
    fn test_format_options_skips_neutral_entry() {
        let options = FilterOptions::from_games(&[catan()]);
        let text = format_options(&options);
        assert!(text.contains("Kategori: Strategi"));
        assert!(text.contains("Antal spillere: 3, 4"));
        assert!(!text.contains("all"));
    }

    #[test]
    fn test_format_detail() {
        let text = format_detail(&catan());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Catan");
        assert_eq!(lines[1], "Strategi");
        assert_eq!(lines[2], "⭐ 4.5");
        assert!(text.contains("Alder:"));
        assert!(text.ends_with("Byg og handl."));
        assert!(!text.contains("Sprog"));
    }
}
