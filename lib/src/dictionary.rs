use crate::results::WordScrambleError;
use log::debug;
use std::collections::HashSet;
use std::io::BufRead;
use std::result::Result;
use std::sync::Arc;

/// The language tag used by the standard game.
pub const ENGLISH: &str = "en";

/// Decides whether a string is a recognized word in a given language.
///
/// Any `Fn(&str, &str) -> bool` closure taking `(word, language)` is a `Dictionary`, as are
/// `&WordListDictionary` and `&dyn Dictionary`:
///
/// ```
/// use word_scramble::Dictionary;
///
/// let only_cats = |word: &str, _language: &str| word == "cat";
///
/// assert!(only_cats.is_valid_word("cat", "en"));
/// assert!(!only_cats.is_valid_word("dog", "en"));
/// ```
pub trait Dictionary {
    /// Returns true iff `word` is a valid word in `language`.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// A dictionary for a single language, backed by a fixed list of words.
///
/// Words are stored in lower case, and lookups are case-sensitive, so callers should normalize
/// words before checking them.
#[derive(Clone, Debug)]
pub struct WordListDictionary {
    language: Box<str>,
    words: HashSet<Arc<str>>,
}

impl WordListDictionary {
    /// Reads a dictionary with one word per line. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(
        language: &str,
        word_reader: R,
    ) -> Result<Self, WordScrambleError> {
        let mut words = HashSet::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(Arc::from(word.to_lowercase().as_str()));
            }
        }
        debug!("Loaded {} dictionary words for '{}'", words.len(), language);
        Ok(WordListDictionary {
            language: Box::from(language),
            words,
        })
    }

    /// Builds a dictionary from the given words.
    pub fn from_iterator<S>(language: &str, words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        WordListDictionary {
            language: Box::from(language),
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .map(|word| Arc::from(word.as_str()))
                .collect(),
        }
    }

    /// The language this dictionary answers for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Returns the number of distinct words in the dictionary.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true iff the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns every word in the dictionary, in no particular order.
    pub fn words(&self) -> Vec<Arc<str>> {
        self.words.iter().map(Arc::clone).collect()
    }
}

impl Dictionary for WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        *self.language == *language && self.words.contains(word)
    }
}

impl Dictionary for &WordListDictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}

impl Dictionary for &dyn Dictionary {
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        (**self).is_valid_word(word, language)
    }
}
