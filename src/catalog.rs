//! Word catalog access and random word selection.

use alloc::vec::Vec;

use log::warn;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::CatalogError;
use crate::word::{Category, Word};

/// Draws `count` words at random, without replacement, from `pool`.
///
/// Only words whose category is in `categories` and whose language equals
/// `language` are eligible. When fewer than `count` words match, all of them
/// are returned in shuffled order. An empty `categories` slice yields an empty
/// selection.
pub fn select_words<R: Rng + ?Sized>(
    pool: &[Word],
    categories: &[Category],
    language: &str,
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    let mut matching: Vec<Word> = pool
        .iter()
        .filter(|word| word.language == language && categories.contains(&word.category))
        .cloned()
        .collect();

    if matching.len() < count {
        warn!(
            "catalog has {} matching words for language {language:?}, {count} requested",
            matching.len()
        );
    }

    matching.shuffle(rng);
    matching.truncate(count);
    matching
}

/// Source of words for a game.
///
/// Implementations must fail soft: a shortage of matching words returns a
/// shorter selection rather than an error.
pub trait WordCatalog {
    /// Returns up to `count` random words matching the categories and language.
    fn random_words<R: Rng + ?Sized>(
        &self,
        categories: &[Category],
        language: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<Word>;
}

impl<T: WordCatalog + ?Sized> WordCatalog for &T {
    fn random_words<R: Rng + ?Sized>(
        &self,
        categories: &[Category],
        language: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<Word> {
        (**self).random_words(categories, language, count, rng)
    }
}

/// An in-memory word catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCatalog {
    words: Vec<Word>,
}

impl MemoryCatalog {
    /// Creates a catalog holding the given words.
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parses a catalog from `language|Category|text` lines.
    ///
    /// Blank lines and lines starting with `#` are skipped.
    ///
    /// ```
    /// use charades::{Category, MemoryCatalog};
    ///
    /// let catalog = MemoryCatalog::parse("en|Animals|Giraffe\n# comment\nfr|Food|Baguette").unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert_eq!(catalog.words()[0].category, Category::Animals);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error naming the first line that is malformed or uses an
    /// unknown category.
    pub fn parse(data: &str) -> Result<Self, CatalogError> {
        let mut words = Vec::new();

        for (index, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let number = index + 1;
            let mut fields = line.splitn(3, '|').map(str::trim);
            let (Some(language), Some(category), Some(text)) =
                (fields.next(), fields.next(), fields.next())
            else {
                return Err(CatalogError::MalformedLine { line: number });
            };
            if language.is_empty() || text.is_empty() {
                return Err(CatalogError::MalformedLine { line: number });
            }

            let category = category
                .parse::<Category>()
                .map_err(|_| CatalogError::UnknownCategory { line: number })?;
            words.push(Word::new(text, category, language));
        }

        Ok(Self { words })
    }

    /// Returns every word in the catalog.
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Returns the number of words in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordCatalog for MemoryCatalog {
    fn random_words<R: Rng + ?Sized>(
        &self,
        categories: &[Category],
        language: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<Word> {
        select_words(&self.words, categories, language, count, rng)
    }
}

impl FromIterator<Word> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pool() -> Vec<Word> {
        vec![
            Word::new("Cat", Category::Animals, "en"),
            Word::new("Dog", Category::Animals, "en"),
            Word::new("Owl", Category::Animals, "en"),
            Word::new("Chat", Category::Animals, "fr"),
            Word::new("Pizza", Category::Food, "en"),
            Word::new("Pilot", Category::Jobs, "en"),
        ]
    }

    #[test]
    fn selects_only_matching_category_and_language() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let words = select_words(&pool(), &[Category::Animals], "en", 10, &mut rng);

        assert_eq!(words.len(), 3);
        assert!(
            words
                .iter()
                .all(|w| w.category == Category::Animals && w.language == "en")
        );
    }

    #[test]
    fn selection_is_without_replacement() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let words = select_words(
            &pool(),
            &[Category::Animals, Category::Food, Category::Jobs],
            "en",
            4,
            &mut rng,
        );

        assert_eq!(words.len(), 4);
        for (i, word) in words.iter().enumerate() {
            assert!(!words[i + 1..].contains(word));
        }
    }

    #[test]
    fn empty_categories_select_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(select_words(&pool(), &[], "en", 5, &mut rng).is_empty());
    }

    #[test]
    fn zero_count_selects_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(select_words(&pool(), &Category::ALL, "en", 0, &mut rng).is_empty());
    }

    #[test]
    fn parse_reports_bad_lines() {
        assert_eq!(
            MemoryCatalog::parse("en|Animals|Cat\nen|Animals"),
            Err(CatalogError::MalformedLine { line: 2 })
        );
        assert_eq!(
            MemoryCatalog::parse("\n\nen|Dinosaurs|T-Rex"),
            Err(CatalogError::UnknownCategory { line: 3 })
        );
        assert_eq!(
            MemoryCatalog::parse("|Animals|Cat"),
            Err(CatalogError::MalformedLine { line: 1 })
        );
    }

    #[test]
    fn parse_keeps_pipes_inside_text() {
        let catalog = MemoryCatalog::parse("en | Objects | Pipe | Wrench").unwrap();
        assert_eq!(catalog.words()[0].text, "Pipe | Wrench");
    }
}
