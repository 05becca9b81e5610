//! The playable word catalog
//!
//! Holds one sorted, deduplicated word group per board size. Built once at
//! startup and read-only afterwards; membership lookup is a binary search by
//! lexicographic ordering (the catalog is lowercase, so no case folding is
//! involved).

use super::loader::{self, words_from_slice};
use super::{FIVE_LETTER, THREE_LETTER};
use crate::core::{BoardSize, Word};
use std::io;
use std::path::Path;

/// Sorted word groups for both board sizes
#[derive(Debug, Clone)]
pub struct WordCatalog {
    three_letter: Vec<Word>,
    five_letter: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog from unsorted word groups
    ///
    /// Both groups are sorted ascending and deduplicated so lookups can
    /// binary-search them regardless of source ordering.
    #[must_use]
    pub fn new(mut three_letter: Vec<Word>, mut five_letter: Vec<Word>) -> Self {
        three_letter.sort_unstable();
        three_letter.dedup();
        five_letter.sort_unstable();
        five_letter.dedup();

        Self {
            three_letter,
            five_letter,
        }
    }

    /// Catalog built from the embedded default lists
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(words_from_slice(THREE_LETTER), words_from_slice(FIVE_LETTER))
    }

    /// Catalog loaded from a word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let (three_letter, five_letter) = loader::load_from_file(path)?;
        Ok(Self::new(three_letter, five_letter))
    }

    /// The sorted word group for a board size
    #[inline]
    #[must_use]
    pub fn group(&self, size: BoardSize) -> &[Word] {
        match size {
            BoardSize::Three => &self.three_letter,
            BoardSize::Five => &self.five_letter,
        }
    }

    /// Find a word in the group for a board size
    ///
    /// `candidate` must already be lowercase; matching is exact.
    #[must_use]
    pub fn lookup(&self, size: BoardSize, candidate: &str) -> Option<&Word> {
        let group = self.group(size);
        let index = group
            .binary_search_by(|word| word.text().cmp(candidate))
            .ok()?;
        Some(&group[index])
    }

    /// Whether a word is playable on a board size
    #[inline]
    #[must_use]
    pub fn contains(&self, size: BoardSize, candidate: &str) -> bool {
        self.lookup(size, candidate).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_catalog() -> WordCatalog {
        // Deliberately unsorted, with a duplicate
        WordCatalog::new(
            words_from_slice(&["dog", "cat", "bat", "cat"]),
            words_from_slice(&["slate", "crane"]),
        )
    }

    #[test]
    fn groups_are_sorted_and_deduplicated() {
        let catalog = small_catalog();

        let three: Vec<&str> = catalog.group(BoardSize::Three).iter().map(Word::text).collect();
        assert_eq!(three, vec!["bat", "cat", "dog"]);

        let five: Vec<&str> = catalog.group(BoardSize::Five).iter().map(Word::text).collect();
        assert_eq!(five, vec!["crane", "slate"]);
    }

    #[test]
    fn lookup_finds_present_words() {
        let catalog = small_catalog();

        for word in ["bat", "cat", "dog"] {
            let found = catalog.lookup(BoardSize::Three, word).unwrap();
            assert_eq!(found.text(), word);
        }
        assert!(catalog.contains(BoardSize::Five, "crane"));
    }

    #[test]
    fn lookup_rejects_absent_words() {
        let catalog = small_catalog();

        assert!(catalog.lookup(BoardSize::Three, "fox").is_none());
        assert!(!catalog.contains(BoardSize::Three, "aaa"));
        assert!(!catalog.contains(BoardSize::Three, "zzz"));
        assert!(!catalog.contains(BoardSize::Five, "zebra"));
    }

    #[test]
    fn lookup_does_not_cross_board_sizes() {
        let catalog = small_catalog();

        assert!(!catalog.contains(BoardSize::Five, "cat"));
        assert!(!catalog.contains(BoardSize::Three, "crane"));
    }

    #[test]
    fn lookup_is_case_exact() {
        let catalog = small_catalog();

        // Input normalization happens before lookup; the catalog itself
        // only matches lowercase
        assert!(!catalog.contains(BoardSize::Three, "CAT"));
        assert!(catalog.contains(BoardSize::Three, "cat"));
    }

    #[test]
    fn builtin_catalog_is_populated() {
        let catalog = WordCatalog::builtin();

        assert!(!catalog.group(BoardSize::Three).is_empty());
        assert!(!catalog.group(BoardSize::Five).is_empty());
        assert!(catalog.contains(BoardSize::Three, "cat"));
        assert!(catalog.contains(BoardSize::Five, "crane"));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(WordCatalog::from_file("no/such/wordlist.txt").is_err());
    }
}
