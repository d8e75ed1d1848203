use crate::dictionary::embedded::{COMMON_WORDS, THREE_LETTER_WORDS, TWO_LETTER_WORDS};
use crate::dictionary::Dictionary;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Shortest word the list accepts.
pub const MIN_WORD_LEN: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> WordList {
        WordList::default()
    }

    /// The starter list shipped with the crate.
    pub fn embedded() -> WordList {
        let mut list = WordList::new();
        for &word in COMMON_WORDS
            .iter()
            .chain(TWO_LETTER_WORDS)
            .chain(THREE_LETTER_WORDS)
        {
            list.add_word(word);
        }
        log::info!("Loaded {} words into dictionary", list.word_count());
        list
    }

    /// One word per line; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<WordList> {
        let content = fs::read_to_string(path.as_ref())?;
        let mut list = WordList::new();
        for line in content.lines() {
            list.add_word(line);
        }
        log::info!(
            "Loaded {} words from {}",
            list.word_count(),
            path.as_ref().display()
        );
        Ok(list)
    }

    /// Adds a word, normalized to uppercase. Returns false for blank input.
    pub fn add_word(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if normalized.is_empty() {
            return false;
        }
        self.words.insert(normalized);
        true
    }

    /// Raw membership test, without the length and alphabet checks.
    pub fn has_word(&self, word: &str) -> bool {
        self.words.contains(&normalize(word))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Up to `count` words drawn at random (with replacement), e.g. for hints.
    pub fn random_words(&self, count: usize) -> Vec<String> {
        let all: Vec<&String> = self.words.iter().collect();
        let mut rng = rand::rng();
        (0..count.min(all.len()))
            .filter_map(|_| all.choose(&mut rng).map(|w| (*w).clone()))
            .collect()
    }
}

impl Dictionary for WordList {
    fn validate(&self, word: &str) -> bool {
        let normalized = normalize(word);
        normalized.len() >= MIN_WORD_LEN
            && normalized.chars().all(|c| c.is_ascii_uppercase())
            && self.words.contains(&normalized)
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_uppercase()
}
