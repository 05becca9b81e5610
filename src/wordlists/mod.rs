//! Word lists for the game
//!
//! Provides the embedded default lists, a file loader, and the sorted
//! catalog the game plays from.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::WordCatalog;
pub use embedded::{FIVE_LETTER, FIVE_LETTER_COUNT, THREE_LETTER, THREE_LETTER_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_letter_count_matches_const() {
        assert_eq!(THREE_LETTER.len(), THREE_LETTER_COUNT);
    }

    #[test]
    fn five_letter_count_matches_const() {
        assert_eq!(FIVE_LETTER.len(), FIVE_LETTER_COUNT);
    }

    #[test]
    fn three_letter_words_are_valid() {
        for &word in THREE_LETTER {
            assert_eq!(word.len(), 3, "Word '{word}' is not 3 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn five_letter_words_are_valid() {
        for &word in FIVE_LETTER {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_lists_are_sorted_ascending() {
        assert!(THREE_LETTER.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(FIVE_LETTER.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
