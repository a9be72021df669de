use crate::dictionary::Dictionary;
use crate::engine::GameConfig;
use crate::results::Rejection;
use std::result::Result;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Lowercases the candidate and trims surrounding whitespace.
pub fn normalize(candidate: &str) -> String {
    candidate.trim().to_lowercase()
}

/// Counts the letters in a word as user-perceived characters, so "e" followed by a combining
/// accent is one letter.
pub fn letter_count(word: &str) -> usize {
    word.graphemes(true).count()
}

/// Returns true iff `word` has not been accepted yet.
pub fn is_original<S: AsRef<str>>(word: &str, accepted_words: &[S]) -> bool {
    !accepted_words
        .iter()
        .any(|accepted| accepted.as_ref() == word)
}

/// Returns true iff `word` can be spelled using the letters of `root_word`, using each letter of
/// the root word at most once.
///
/// ```
/// use word_scramble::is_possible;
///
/// assert!(is_possible("cat", "act"));
/// assert!(!is_possible("catt", "act"));
/// ```
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<&str> = root_word.graphemes(true).collect();
    for letter in word.graphemes(true) {
        match remaining.iter().position(|available| *available == letter) {
            Some(index) => {
                remaining.remove(index);
            }
            None => return false,
        }
    }
    true
}

/// Returns true iff the dictionary recognizes `word` in the given language.
pub fn is_real<D: Dictionary + ?Sized>(word: &str, dictionary: &D, language: &str) -> bool {
    dictionary.is_valid_word(word, language)
}

/// Applies the length and root-word rules to a normalized word.
pub(crate) fn check_letters(
    word: &str,
    root_word: &Arc<str>,
    config: &GameConfig,
) -> Result<(), Rejection> {
    if letter_count(word) < config.min_length {
        return Err(Rejection::TooShort {
            longer_than: config.min_length.saturating_sub(1),
        });
    }
    if word == &**root_word {
        return Err(Rejection::SameAsRoot);
    }
    Ok(())
}

/// Validates a raw candidate against the round, returning the normalized word if it may be
/// accepted.
///
/// Rules are checked in a fixed order, and the first failure is returned:
///
/// 1. [`Rejection::TooShort`]
/// 2. [`Rejection::SameAsRoot`]
/// 3. [`Rejection::AlreadyUsed`]
/// 4. [`Rejection::NotPossible`]
/// 5. [`Rejection::NotReal`]
pub fn validate<S, D>(
    candidate: &str,
    root_word: &Arc<str>,
    accepted_words: &[S],
    dictionary: &D,
    config: &GameConfig,
) -> Result<String, Rejection>
where
    S: AsRef<str>,
    D: Dictionary + ?Sized,
{
    let word = normalize(candidate);
    check_letters(&word, root_word, config)?;
    if !is_original(&word, accepted_words) {
        return Err(Rejection::AlreadyUsed);
    }
    if !is_possible(&word, root_word) {
        return Err(Rejection::NotPossible {
            root_word: Arc::clone(root_word),
        });
    }
    if !is_real(&word, dictionary, &config.language) {
        return Err(Rejection::NotReal);
    }
    Ok(word)
}
