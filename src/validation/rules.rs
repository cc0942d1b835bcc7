use miette::SourceSpan;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation::dictionary::Dictionary;

/// Which character of the current word the next word has to start with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainRule {
    /// The last character of the word, whatever it is
    #[default]
    LastCharacter,
    /// The last alphabetic character, skipping trailing punctuation or digits
    LastAlphabetic,
}

impl ChainRule {
    /// Chain letter of an already normalized word. `None` for an empty word.
    pub fn chain_letter(self, word: &str) -> Option<char> {
        match self {
            ChainRule::LastCharacter => word.chars().next_back(),
            ChainRule::LastAlphabetic => word
                .chars()
                .rev()
                .find(|c| c.is_alphabetic())
                .or_else(|| word.chars().next_back()),
        }
    }
}

impl FromStr for ChainRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-char" | "last-character" => Ok(ChainRule::LastCharacter),
            "last-alphabetic" | "last-letter" => Ok(ChainRule::LastAlphabetic),
            other => Err(format!(
                "unknown chain rule '{other}', expected 'last-char' or 'last-alphabetic'"
            )),
        }
    }
}

impl fmt::Display for ChainRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChainRule::LastCharacter => f.write_str("last-char"),
            ChainRule::LastAlphabetic => f.write_str("last-alphabetic"),
        }
    }
}

/// Outcome of checking a candidate word against the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    NotInDictionary,
    WrongStartLetter { expected: char },
}

pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Check `candidate` against the dictionary and the current chain word.
///
/// Returns the normalized word when it may be played. An empty current word
/// counts as no word at all, so any dictionary word opens the chain.
pub fn validate_move(
    dictionary: &Dictionary,
    rule: ChainRule,
    current_word: Option<&str>,
    candidate: &str,
) -> Result<String, ValidationError> {
    let word = normalize(candidate);

    if !dictionary.contains(&word) {
        return Err(ValidationError::NotInDictionary(word));
    }

    let Some(expected) = current_word.and_then(|current| rule.chain_letter(&normalize(current)))
    else {
        return Ok(word);
    };

    match word.chars().next() {
        Some(first) if first == expected => Ok(word),
        first => {
            let len = first.map_or(0, char::len_utf8);
            Err(ValidationError::WrongStartLetter {
                word,
                span: SourceSpan::from((0, len)),
                expected,
            })
        }
    }
}

pub fn verdict(
    dictionary: &Dictionary,
    rule: ChainRule,
    current_word: Option<&str>,
    candidate: &str,
) -> Verdict {
    match validate_move(dictionary, rule, current_word, candidate) {
        Ok(_) => Verdict::Accepted,
        Err(ValidationError::NotInDictionary(_)) => Verdict::NotInDictionary,
        Err(ValidationError::WrongStartLetter { expected, .. }) => {
            Verdict::WrongStartLetter { expected }
        }
    }
}
