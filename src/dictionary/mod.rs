//! Word legality.
//!
//! The rules engine only needs one question answered: is this token a
//! playable word. `Dictionary` is that seam; `WordList` is the in-memory
//! implementation used by the server.

mod embedded;
pub mod word_list;

pub use embedded::{COMMON_WORDS, THREE_LETTER_WORDS, TWO_LETTER_WORDS};
pub use word_list::WordList;

pub trait Dictionary: Send + Sync {
    /// Case-insensitive, letters only. Empty or non-alphabetic input is never valid.
    fn validate(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for std::sync::Arc<D> {
    fn validate(&self, word: &str) -> bool {
        (**self).validate(word)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn validate(&self, word: &str) -> bool {
        (**self).validate(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lists_are_uppercase_letters() {
        for &word in COMMON_WORDS
            .iter()
            .chain(TWO_LETTER_WORDS)
            .chain(THREE_LETTER_WORDS)
        {
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn two_letter_list_only_has_two_letters() {
        assert!(TWO_LETTER_WORDS.iter().all(|w| w.len() == 2));
        assert!(THREE_LETTER_WORDS.iter().all(|w| w.len() == 3));
    }
}
