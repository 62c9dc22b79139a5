//! Game configuration options.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use log::warn;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::word::Category;

/// Configuration snapshot taken when a game starts.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use charades::{Category, GameOptions};
///
/// let options = GameOptions::default()
///     .with_words_count(30)
///     .with_turn_duration(Duration::from_secs(45))
///     .with_category(Category::Celebrities, false)
///     .with_language("fr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Selected categories (`category` -> enabled).
    ///
    /// Categories missing from the map count as disabled.
    pub categories: HashMap<Category, bool>,
    /// Number of words to draw for the whole game.
    pub words_count: usize,
    /// Length of a single turn.
    pub turn_duration: Duration,
    /// Language code of the words to draw.
    pub language: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            categories: Category::ALL.into_iter().map(|c| (c, true)).collect(),
            words_count: 40,
            turn_duration: Duration::from_secs(60),
            language: String::from("en"),
        }
    }
}

impl GameOptions {
    /// Returns the enabled categories in [`Category::ALL`] order.
    ///
    /// # Example
    ///
    /// ```
    /// use charades::{Category, GameOptions};
    ///
    /// let options = GameOptions::default()
    ///     .with_categories([])
    ///     .with_category(Category::Food, true)
    ///     .with_category(Category::Animals, true);
    /// assert_eq!(options.enabled_categories(), vec![Category::Animals, Category::Food]);
    /// ```
    #[must_use]
    pub fn enabled_categories(&self) -> Vec<Category> {
        Category::ALL
            .into_iter()
            .filter(|c| self.categories.get(c).copied().unwrap_or(false))
            .collect()
    }

    /// Enables or disables a single category.
    #[must_use]
    pub fn with_category(mut self, category: Category, enabled: bool) -> Self {
        self.categories.insert(category, enabled);
        self
    }

    /// Replaces the selection so that exactly the given categories are enabled.
    #[must_use]
    pub fn with_categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Category::ALL.into_iter().map(|c| (c, false)).collect();
        for category in categories {
            self.categories.insert(category, true);
        }
        self
    }

    /// Applies a string-keyed settings map (`"Animals"` -> enabled).
    ///
    /// Unknown category names are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use charades::{Category, GameOptions};
    ///
    /// let options = GameOptions::default()
    ///     .with_categories([])
    ///     .with_settings([("Animals", true), ("Food", false), ("Spaceships", true)]);
    /// assert_eq!(options.enabled_categories(), vec![Category::Animals]);
    /// ```
    #[must_use]
    pub fn with_settings<'a>(mut self, settings: impl IntoIterator<Item = (&'a str, bool)>) -> Self {
        for (name, enabled) in settings {
            match name.parse::<Category>() {
                Ok(category) => {
                    self.categories.insert(category, enabled);
                }
                Err(_) => warn!("ignoring unknown category setting {name:?}"),
            }
        }
        self
    }

    /// Sets the number of words drawn for the game.
    ///
    /// # Example
    ///
    /// ```
    /// use charades::GameOptions;
    ///
    /// let options = GameOptions::default().with_words_count(25);
    /// assert_eq!(options.words_count, 25);
    /// ```
    #[must_use]
    pub const fn with_words_count(mut self, count: usize) -> Self {
        self.words_count = count;
        self
    }

    /// Sets the turn duration.
    #[must_use]
    pub const fn with_turn_duration(mut self, duration: Duration) -> Self {
        self.turn_duration = duration;
        self
    }

    /// Sets the turn duration in milliseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use charades::GameOptions;
    ///
    /// let options = GameOptions::default().with_turn_duration_millis(30_000);
    /// assert_eq!(options.turn_duration, Duration::from_secs(30));
    /// ```
    #[must_use]
    pub const fn with_turn_duration_millis(self, millis: u64) -> Self {
        self.with_turn_duration(Duration::from_millis(millis))
    }

    /// Sets the language of the words.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_every_category() {
        let options = GameOptions::default();
        assert_eq!(options.enabled_categories(), Category::ALL.to_vec());
        assert_eq!(options.words_count, 40);
        assert_eq!(options.turn_duration, Duration::from_secs(60));
        assert_eq!(options.language, "en");
    }

    #[test]
    fn disabling_a_category_removes_it() {
        let options = GameOptions::default().with_category(Category::Anatomy, false);
        assert!(!options.enabled_categories().contains(&Category::Anatomy));
        assert_eq!(options.enabled_categories().len(), Category::ALL.len() - 1);
    }

    #[test]
    fn empty_selection_stays_empty() {
        let options = GameOptions::default().with_categories([]);
        assert!(options.enabled_categories().is_empty());
    }
}
