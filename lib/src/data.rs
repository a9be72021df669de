use crate::results::WordScrambleError;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;
use std::ops::Deref;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The root word used when there are no words to choose from.
pub const FALLBACK_ROOT_WORD: &str = "silkworm";

/// Contains the candidate root words for a game.
///
/// Entries are trimmed and converted to lower case. Blank entries are skipped, but duplicates are
/// kept, so a word listed twice is twice as likely to be chosen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordList {
    words: Vec<Arc<str>>,
}

impl WordList {
    /// Constructs a new `WordList` by reading words from the given reader.
    ///
    /// The reader should provide one word per line.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordScrambleError> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            if let Some(word) = clean_word(&maybe_line?) {
                words.push(word);
            }
        }
        debug!("Read {} words", words.len());
        Ok(WordList { words })
    }

    /// Constructs a new `WordList` using the words from the given iterator.
    ///
    /// ```
    /// use word_scramble::WordList;
    ///
    /// let list = WordList::from_iterator(["Silkworm", "", " Raincoat "]);
    ///
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(&*list[1], "raincoat");
    /// ```
    pub fn from_iterator<S>(words: impl IntoIterator<Item = S>) -> Self
    where
        S: AsRef<str>,
    {
        WordList {
            words: words
                .into_iter()
                .filter_map(|word| clean_word(word.as_ref()))
                .collect(),
        }
    }

    /// Chooses a word uniformly at random, or the [`FALLBACK_ROOT_WORD`] if the list is empty.
    pub fn choose_root_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Arc<str> {
        self.words
            .choose(rng)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::from(FALLBACK_ROOT_WORD))
    }

    /// Returns the number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true iff the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for WordList {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}

fn clean_word(word: &str) -> Option<Arc<str>> {
    let word = word.trim();
    if word.is_empty() {
        return None;
    }
    Some(Arc::from(word.to_lowercase().as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::io::Cursor;

    #[test]
    fn from_reader_skips_blank_lines() -> Result<(), WordScrambleError> {
        let list = WordList::from_reader(Cursor::new("\nsilkworm\r\n  \nRaincoat\n"))?;

        assert_eq!(list.len(), 2);
        assert_eq!(&*list[0], "silkworm");
        assert_eq!(&*list[1], "raincoat");
        Ok(())
    }

    #[test]
    fn from_iterator_keeps_duplicates() {
        let list = WordList::from_iterator(vec!["magnets".to_string(), "magnets".to_string()]);

        assert_eq!(list.len(), 2);
    }

    #[test]
    fn choose_root_word_from_empty_list() {
        let list = WordList::default();
        let mut rng = StdRng::seed_from_u64(7);

        assert!(list.is_empty());
        assert_eq!(&*list.choose_root_word(&mut rng), FALLBACK_ROOT_WORD);
    }

    #[test]
    fn choose_root_word_covers_list() {
        let list = WordList::from_iterator(["alpha", "bravo", "charlie"]);
        let mut rng = StdRng::seed_from_u64(42);

        let chosen: HashSet<Arc<str>> = (0..200)
            .map(|_| list.choose_root_word(&mut rng))
            .collect();

        assert_eq!(chosen.len(), 3);
        assert!(chosen.iter().all(|word| list.contains(word)));
    }
}
