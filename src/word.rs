//! Word and category types.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCategoryError;

/// Word category.
///
/// Categories only filter the catalog; scores are bucketed by round, never by
/// category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Verbs and things people do.
    Actions,
    /// Animals.
    Animals,
    /// Holidays, ceremonies and happenings.
    Events,
    /// Places.
    Locations,
    /// Professions.
    Jobs,
    /// Natural phenomena and landscapes.
    Nature,
    /// Food and drinks.
    Food,
    /// Everyday objects.
    Objects,
    /// Body parts.
    Anatomy,
    /// Famous people.
    Celebrities,
    /// Hobbies and sports.
    Activities,
    /// Vehicles.
    Vehicles,
    /// Clothes and accessories.
    Clothes,
    /// Fictional characters.
    Fictional,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 14] = [
        Self::Actions,
        Self::Animals,
        Self::Events,
        Self::Locations,
        Self::Jobs,
        Self::Nature,
        Self::Food,
        Self::Objects,
        Self::Anatomy,
        Self::Celebrities,
        Self::Activities,
        Self::Vehicles,
        Self::Clothes,
        Self::Fictional,
    ];

    /// Returns the settings key of the category.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Actions => "Actions",
            Self::Animals => "Animals",
            Self::Events => "Events",
            Self::Locations => "Locations",
            Self::Jobs => "Jobs",
            Self::Nature => "Nature",
            Self::Food => "Food",
            Self::Objects => "Objects",
            Self::Anatomy => "Anatomy",
            Self::Celebrities => "Celebrities",
            Self::Activities => "Activities",
            Self::Vehicles => "Vehicles",
            Self::Clothes => "Clothes",
            Self::Fictional => "Fictional",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Parses a category name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCategoryError)
    }
}

/// A word to guess.
///
/// Words are immutable values. Two words are the same word when text,
/// category and language all match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    /// The text shown to the player.
    pub text: String,
    /// The category the word was drawn from.
    pub category: Category,
    /// Language code, e.g. `"en"`.
    pub language: String,
}

impl Word {
    /// Creates a new word.
    #[must_use]
    pub fn new(text: impl Into<String>, category: Category, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category,
            language: language.into(),
        }
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names_round_trip_through_from_str() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parse_ignores_case_and_whitespace() {
        assert_eq!(" animals ".parse::<Category>(), Ok(Category::Animals));
        assert_eq!("FOOD".parse::<Category>(), Ok(Category::Food));
        assert_eq!("Dinosaurs".parse::<Category>(), Err(ParseCategoryError));
    }

    #[test]
    fn word_identity_includes_language() {
        let en = Word::new("Cat", Category::Animals, "en");
        let fr = Word::new("Cat", Category::Animals, "fr");
        assert_ne!(en, fr);
        assert_eq!(en, Word::new("Cat", Category::Animals, "en"));
    }
}
