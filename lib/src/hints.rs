use crate::engine::GameConfig;
use crate::validation::check_letters;
use crate::validation::is_possible;
use crate::validation::letter_count;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Finds every candidate that could be accepted for the given root word, ignoring the dictionary.
///
/// Candidates are expected to be normalized already, e.g. the words of a
/// [`WordListDictionary`](crate::WordListDictionary). The result has no duplicates, and is sorted
/// with the longest words first, then alphabetically.
///
/// ```
/// use std::sync::Arc;
/// use word_scramble::{derivable_words, GameConfig};
///
/// let candidates: Vec<Arc<str>> = ["silk", "worm", "milk", "zebra", "ok"]
///     .iter()
///     .map(|word| Arc::from(*word))
///     .collect();
///
/// let words = derivable_words("silkworm", &candidates, &GameConfig::default());
///
/// assert_eq!(words.len(), 3);
/// assert_eq!(&*words[0], "milk");
/// assert_eq!(&*words[2], "worm");
/// ```
pub fn derivable_words(
    root_word: &str,
    candidates: &[Arc<str>],
    config: &GameConfig,
) -> Vec<Arc<str>> {
    let root_word: Arc<str> = Arc::from(root_word);
    let mut words: Vec<Arc<str>> = candidates
        .par_iter()
        .filter(|word| {
            check_letters(word, &root_word, config).is_ok() && is_possible(word, &root_word)
        })
        .map(Arc::clone)
        .collect();
    words.par_sort_unstable_by(|a, b| compare_longest_first(a, b));
    words.dedup();
    words
}

/// The total points for accepting every one of the given words.
pub fn max_score<S: AsRef<str>>(words: &[S], config: &GameConfig) -> u32 {
    words
        .iter()
        .map(|word| config.points_for(word.as_ref()))
        .sum()
}

fn compare_longest_first(a: &str, b: &str) -> Ordering {
    letter_count(b)
        .cmp(&letter_count(a))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_arc_vec(words: &[&str]) -> Vec<Arc<str>> {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    #[test]
    fn derivable_words_filters_and_sorts() {
        let candidates = to_arc_vec(&[
            "worm", "silkworm", "milk", "worms", "or", "mill", "slim", "worm", "silky",
        ]);

        let words = derivable_words("silkworm", &candidates, &GameConfig::default());

        assert_eq!(words, to_arc_vec(&["worms", "milk", "slim", "worm"]));
    }

    #[test]
    fn derivable_words_no_candidates() {
        let words = derivable_words("silkworm", &[], &GameConfig::default());

        assert!(words.is_empty());
    }

    #[test]
    fn max_score_sums_points() {
        let config = GameConfig::default();

        assert_eq!(max_score(&["cat", "dog", "bird"], &config), 100);
        assert_eq!(max_score(&[] as &[&str], &config), 0);
    }
}
