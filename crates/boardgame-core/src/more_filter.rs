//! State machine behind the "more filters" control
//!
//! The control starts out as a category chooser (age, language, location,
//! rating). Picking a category turns it into a value chooser for that field,
//! with a trailing "back" entry that returns it to the category chooser.
//!
//! Field values travel through the control as [`value_token`]s, so a record
//! value can never be mistaken for the back or placeholder entry.

use std::fmt;

use tracing::{debug, warn};

use crate::error::MoreFilterError;
use crate::options::{self, FilterOption, ALL};
use crate::record::GameRecord;

/// Value of the trailing entry that returns to the category chooser
pub const BACK: &str = "back";
/// Value of the leading "choose a value" entry in a field's value list
pub const PLACEHOLDER: &str = "";
/// Prefix of every field-value option value
pub const VALUE_PREFIX: &str = "value:";

pub const DEFAULT_LABEL: &str = "Flere filtre";
pub const PLACEHOLDER_LABEL: &str = "Vælg værdi";
pub const BACK_LABEL: &str = "← Tilbage";

/// Field a more-filter can constrain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoreFilterField {
    Age,
    Language,
    Location,
    Rating,
}

impl MoreFilterField {
    pub const ALL: [MoreFilterField; 4] = [
        MoreFilterField::Age,
        MoreFilterField::Language,
        MoreFilterField::Location,
        MoreFilterField::Rating,
    ];

    /// Control value selecting this field
    pub fn token(self) -> &'static str {
        match self {
            MoreFilterField::Age => "age",
            MoreFilterField::Language => "language",
            MoreFilterField::Location => "location",
            MoreFilterField::Rating => "rating",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.token() == token)
    }

    pub fn label(self) -> &'static str {
        match self {
            MoreFilterField::Age => "Alder",
            MoreFilterField::Language => "Sprog",
            MoreFilterField::Location => "Lokation",
            MoreFilterField::Rating => "Bedømmelse",
        }
    }
}

impl fmt::Display for MoreFilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Active constraint produced by the control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreFilter {
    pub field: MoreFilterField,
    pub value: String,
}

impl MoreFilter {
    pub fn new(field: MoreFilterField, value: impl Into<String>) -> Self {
        Self { field, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MoreFilterMode {
    /// Category chooser, no constraint
    #[default]
    Default,
    /// Value chooser for one field; `value` stays `None` until one is picked
    Field {
        field: MoreFilterField,
        value: Option<String>,
    },
}

/// Control value standing for one field value
pub fn value_token(value: &str) -> String {
    format!("{}{}", VALUE_PREFIX, value)
}

/// Options the control shows before any category is picked
pub fn default_options() -> Vec<FilterOption> {
    std::iter::once(FilterOption::new(ALL, DEFAULT_LABEL))
        .chain(
            MoreFilterField::ALL
                .into_iter()
                .map(|f| FilterOption::new(f.token(), f.label())),
        )
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoreFilterController {
    mode: MoreFilterMode,
    options: Vec<FilterOption>,
    defaults: Vec<FilterOption>,
}

impl Default for MoreFilterController {
    fn default() -> Self {
        Self::new(default_options())
    }
}

impl MoreFilterController {
    /// Start in the default mode; `defaults` is kept for every later restore
    pub fn new(defaults: Vec<FilterOption>) -> Self {
        Self {
            mode: MoreFilterMode::Default,
            options: defaults.clone(),
            defaults,
        }
    }

    pub fn mode(&self) -> &MoreFilterMode {
        &self.mode
    }

    /// Options the control currently displays
    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn default_options(&self) -> &[FilterOption] {
        &self.defaults
    }

    /// Value the control should show as selected
    pub fn selected_value(&self) -> String {
        match &self.mode {
            MoreFilterMode::Default => ALL.to_string(),
            MoreFilterMode::Field { value: Some(value), .. } => value_token(value),
            MoreFilterMode::Field { value: None, .. } => PLACEHOLDER.to_string(),
        }
    }

    /// Constraint for the filter engine, if a value has been picked
    pub fn criterion(&self) -> Option<MoreFilter> {
        match &self.mode {
            MoreFilterMode::Field { field, value: Some(value) } => {
                Some(MoreFilter::new(*field, value.clone()))
            }
            _ => None,
        }
    }

    /// Handle a selection on the control.
    ///
    /// Field values are derived from `games` when a category is entered.
    /// Rejected selections leave the state untouched.
    pub fn select(&mut self, token: &str, games: &[GameRecord]) -> Result<(), MoreFilterError> {
        let active = match &self.mode {
            MoreFilterMode::Default => None,
            MoreFilterMode::Field { field, .. } => Some(*field),
        };

        match active {
            None => {
                if token == ALL || token == PLACEHOLDER {
                    return Ok(());
                }
                let offered = self.defaults.iter().any(|o| o.value == token);
                let field = MoreFilterField::from_token(token)
                    .filter(|_| offered)
                    .ok_or_else(|| {
                        warn!(token, "rejected more-filter category");
                        MoreFilterError::UnknownMode(token.to_string())
                    })?;
                self.enter(field, games);
                Ok(())
            }
            Some(field) => {
                if token == BACK {
                    self.reset();
                } else if token == PLACEHOLDER {
                    self.mode = MoreFilterMode::Field { field, value: None };
                } else if let Some(value) = self.offered_value(token) {
                    debug!(%field, value, "more-filter value selected");
                    self.mode = MoreFilterMode::Field {
                        field,
                        value: Some(value.to_string()),
                    };
                } else {
                    warn!(%field, value = token, "rejected more-filter value");
                    return Err(MoreFilterError::UnknownValue {
                        field,
                        value: token.to_string(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Back to the category chooser with the original options
    pub fn reset(&mut self) {
        self.mode = MoreFilterMode::Default;
        self.options = self.defaults.clone();
    }

    fn enter(&mut self, field: MoreFilterField, games: &[GameRecord]) {
        let values = options::field_values(field, games);
        debug!(%field, values = values.len(), "more-filter category entered");

        let mut list = Vec::with_capacity(values.len() + 2);
        list.push(FilterOption::new(PLACEHOLDER, PLACEHOLDER_LABEL));
        list.extend(values.into_iter().map(|v| FilterOption::new(value_token(&v), v)));
        list.push(FilterOption::new(BACK, BACK_LABEL));

        self.options = list;
        self.mode = MoreFilterMode::Field { field, value: None };
    }

    /// Field value behind `token`, if the current options offer it
    fn offered_value<'t>(&self, token: &'t str) -> Option<&'t str> {
        let value = token.strip_prefix(VALUE_PREFIX)?;
        self.options.iter().any(|o| o.value == token).then_some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn games() -> Vec<GameRecord> {
        let mut catan = GameRecord::titled("Catan");
        catan.age = Some(10);
        catan.language = Some("Dansk".into());
        let mut codenames = GameRecord::titled("Codenames");
        codenames.age = Some(14);
        codenames.language = Some("Engelsk".into());
        vec![catan, codenames]
    }

    fn values(controller: &MoreFilterController) -> Vec<&str> {
        controller.options().iter().map(|o| o.value.as_str()).collect()
    }

    #[test]
    fn test_starts_in_default_mode() {
        let controller = MoreFilterController::default();
        assert_eq!(controller.mode(), &MoreFilterMode::Default);
        assert_eq!(values(&controller), vec!["all", "age", "language", "location", "rating"]);
        assert_eq!(controller.selected_value(), ALL);
        assert!(controller.criterion().is_none());
    }

    #[test]
    fn test_entering_a_category_swaps_options() {
        let mut controller = MoreFilterController::default();
        controller.select("age", &games()).unwrap();
        assert_eq!(
            controller.mode(),
            &MoreFilterMode::Field { field: MoreFilterField::Age, value: None }
        );
        assert_eq!(values(&controller), vec!["", "value:10", "value:14", "back"]);
        assert_eq!(controller.options()[1].label, "10");
        assert_eq!(controller.options()[0].label, PLACEHOLDER_LABEL);
        assert_eq!(controller.selected_value(), PLACEHOLDER);
        assert!(controller.criterion().is_none());
    }

    #[test]
    fn test_value_selection_stays_in_mode() {
        let mut controller = MoreFilterController::default();
        controller.select("language", &games()).unwrap();
        controller.select(&value_token("Dansk"), &games()).unwrap();
        assert_eq!(
            controller.criterion(),
            Some(MoreFilter::new(MoreFilterField::Language, "Dansk"))
        );
        assert_eq!(controller.selected_value(), "value:Dansk");

        controller.select(&value_token("Engelsk"), &games()).unwrap();
        assert_eq!(
            controller.criterion(),
            Some(MoreFilter::new(MoreFilterField::Language, "Engelsk"))
        );

        controller.select(PLACEHOLDER, &games()).unwrap();
        assert!(controller.criterion().is_none());
        assert_eq!(values(&controller), vec!["", "value:Dansk", "value:Engelsk", "back"]);
    }

    #[test]
    fn test_back_restores_defaults() {
        let mut controller = MoreFilterController::default();
        controller.select("age", &games()).unwrap();
        controller.select(&value_token("14"), &games()).unwrap();
        controller.select(BACK, &games()).unwrap();
        assert_eq!(controller.mode(), &MoreFilterMode::Default);
        assert_eq!(controller.options(), controller.default_options());
        assert!(controller.criterion().is_none());
    }

    #[test]
    fn test_switching_fields_drops_previous_value() {
        let mut controller = MoreFilterController::default();
        controller.select("age", &games()).unwrap();
        controller.select(&value_token("10"), &games()).unwrap();
        controller.select(BACK, &games()).unwrap();
        controller.select("language", &games()).unwrap();
        assert!(controller.criterion().is_none());
        controller.select(&value_token("Dansk"), &games()).unwrap();
        assert_eq!(controller.criterion().map(|c| c.field), Some(MoreFilterField::Language));
    }

    #[test]
    fn test_rejected_selections_keep_state() {
        let mut controller = MoreFilterController::default();
        assert_eq!(
            controller.select("colour", &games()),
            Err(MoreFilterError::UnknownMode("colour".into()))
        );
        assert_eq!(controller.mode(), &MoreFilterMode::Default);

        controller.select("age", &games()).unwrap();
        controller.select(&value_token("10"), &games()).unwrap();
        let before = controller.clone();
        assert_eq!(
            controller.select("language", &games()),
            Err(MoreFilterError::UnknownValue {
                field: MoreFilterField::Age,
                value: "language".into()
            })
        );
        assert_eq!(controller, before);

        // A bare value without its prefix is not an offered option
        assert!(controller.select("14", &games()).is_err());
        assert_eq!(controller, before);
    }

    #[test]
    fn test_values_named_like_control_entries() {
        let mut shelf = GameRecord::titled("Azul");
        shelf.location = Some("back".into());
        let mut cupboard = GameRecord::titled("Hive");
        cupboard.location = Some("Reol 1".into());
        let games = vec![shelf, cupboard];

        let mut controller = MoreFilterController::default();
        controller.select("location", &games).unwrap();
        assert_eq!(values(&controller), vec!["", "value:Reol 1", "value:back", "back"]);
        let distinct: std::collections::HashSet<_> = values(&controller).into_iter().collect();
        assert_eq!(distinct.len(), controller.options().len());

        controller.select(&value_token("back"), &games).unwrap();
        assert_eq!(
            controller.mode(),
            &MoreFilterMode::Field {
                field: MoreFilterField::Location,
                value: Some("back".into())
            }
        );
        assert_eq!(
            controller.criterion(),
            Some(MoreFilter::new(MoreFilterField::Location, "back"))
        );

        controller.select(BACK, &games).unwrap();
        assert_eq!(controller.mode(), &MoreFilterMode::Default);
    }

    #[test]
    fn test_neutral_selection_in_default_mode() {
        let mut controller = MoreFilterController::default();
        controller.select(ALL, &games()).unwrap();
        assert_eq!(controller.mode(), &MoreFilterMode::Default);
    }

    #[test]
    fn test_category_missing_from_defaults_is_rejected() {
        let defaults = vec![FilterOption::new(ALL, DEFAULT_LABEL), FilterOption::new("age", "Alder")];
        let mut controller = MoreFilterController::new(defaults);
        assert!(controller.select("rating", &games()).is_err());
        assert!(controller.select("age", &games()).is_ok());
    }

    #[test]
    fn test_reset_from_value_mode() {
        let mut controller = MoreFilterController::default();
        controller.select("language", &games()).unwrap();
        controller.select(&value_token("Engelsk"), &games()).unwrap();
        controller.reset();
        assert_eq!(controller, MoreFilterController::default());
    }
}
