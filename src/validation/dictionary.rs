use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{DictionaryError, Result};

/// Immutable set of lowercase words accepted in the game
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a newline-delimited UTF-8 word list. Fails if the file is missing
    /// or contains no words.
    pub fn load(dictionary_path: impl AsRef<Path>) -> Result<Self> {
        let dictionary_path = dictionary_path.as_ref();
        info!("Loading dictionary from {}", dictionary_path.display());

        let file = File::open(dictionary_path).map_err(DictionaryError::LoadError)?;
        let reader = io::BufReader::new(file);

        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(DictionaryError::LoadError)?;
            let word = line.trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        if words.is_empty() {
            return Err(DictionaryError::EmptyDictionary.into());
        }

        info!("Loaded {} words from dictionary", words.len());

        Ok(Self { words })
    }

    /// Like [`Dictionary::load`], but a missing or unreadable word list leaves
    /// the dictionary empty instead of failing.
    pub fn load_or_empty(dictionary_path: impl AsRef<Path>) -> Self {
        match Self::load(&dictionary_path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                warn!(
                    "Dictionary unavailable ({}), every word will be rejected: {}",
                    dictionary_path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();

        Self { words }
    }

    /// Case-insensitive lookup, surrounding whitespace ignored
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_dictionary_lookup() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "nhà")?;
        writeln!(file, "  Nam  ")?;
        writeln!(file)?;
        writeln!(file, "ÀN")?;

        let dictionary = Dictionary::load(file.path()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("nhà"));
        assert!(dictionary.contains("NHÀ")); // Case insensitive
        assert!(dictionary.contains(" nam\n"));
        assert!(dictionary.contains("àn"));
        assert!(!dictionary.contains("bàn"));
        assert!(!dictionary.contains(""));

        Ok(())
    }

    #[test]
    fn test_empty_dictionary_file() -> std::io::Result<()> {
        let file = NamedTempFile::new()?;

        let result = Dictionary::load(file.path());
        match result {
            Err(crate::error::Error::Dictionary(DictionaryError::EmptyDictionary)) => {}
            _ => panic!("Expected EmptyDictionary error"),
        }

        Ok(())
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vietlex_words.txt");

        assert!(matches!(
            Dictionary::load(&path),
            Err(crate::error::Error::Dictionary(DictionaryError::LoadError(_)))
        ));

        let dictionary = Dictionary::load_or_empty(&path);
        assert!(dictionary.is_empty());
        assert!(!dictionary.contains("nhà"));
    }

    #[test]
    fn test_from_words_normalizes() {
        let dictionary = Dictionary::from_words(["Nhà", " nam ", ""]);

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("nhà"));
        assert!(dictionary.contains("NAM"));
    }
}
