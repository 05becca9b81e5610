//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! A word list is plain text with whitespace-delimited tokens; only tokens of
//! a playable length (3 or 5 letters) are retained.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load and partition a word list file
///
/// Returns `(three_letter_words, five_letter_words)`. Tokens of any other
/// length, and tokens that are not plain ASCII letters, are silently dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_reload::wordlists::loader::load_from_file;
///
/// let (three, five) = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} + {} words", three.len(), five.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<(Vec<Word>, Vec<Word>)> {
    let content = fs::read_to_string(path)?;
    Ok(partition_tokens(content.split_whitespace()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_reload::wordlists::loader::words_from_slice;
/// use wordle_reload::wordlists::THREE_LETTER;
///
/// let words = words_from_slice(THREE_LETTER);
/// assert_eq!(words.len(), THREE_LETTER.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Partition tokens into three- and five-letter word groups
fn partition_tokens<'a>(tokens: impl Iterator<Item = &'a str>) -> (Vec<Word>, Vec<Word>) {
    let mut three_letter = Vec::new();
    let mut five_letter = Vec::new();

    for word in tokens.filter_map(|token| Word::new(token).ok()) {
        match word.len() {
            3 => three_letter.push(word),
            _ => five_letter.push(word),
        }
    }

    (three_letter, five_letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "cat"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "cat");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "ab", "cr4ne", "slate"];
        let words = words_from_slice(input);

        // Only "crane" and "slate" survive
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn partition_splits_by_length() {
        let tokens = "cat crane dog slate bat".split_whitespace();
        let (three, five) = partition_tokens(tokens);

        let three_texts: Vec<&str> = three.iter().map(Word::text).collect();
        let five_texts: Vec<&str> = five.iter().map(Word::text).collect();
        assert_eq!(three_texts, vec!["cat", "dog", "bat"]);
        assert_eq!(five_texts, vec!["crane", "slate"]);
    }

    #[test]
    fn partition_drops_other_lengths() {
        let tokens = "a word of unusual length is dropped cat".split_whitespace();
        let (three, five) = partition_tokens(tokens);

        let three_texts: Vec<&str> = three.iter().map(Word::text).collect();
        assert_eq!(three_texts, vec!["cat"]);
        assert!(five.is_empty());
    }

    #[test]
    fn load_from_embedded_lists() {
        use crate::wordlists::{FIVE_LETTER, THREE_LETTER};

        assert_eq!(words_from_slice(THREE_LETTER).len(), THREE_LETTER.len());
        assert_eq!(words_from_slice(FIVE_LETTER).len(), FIVE_LETTER.len());
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("no/such/wordlist.txt").is_err());
    }
}
