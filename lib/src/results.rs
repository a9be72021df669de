use std::io;
use std::sync::Arc;

use thiserror::Error;

/// Indicates that a fault occurred outside of normal play, such as an unreadable word list.
#[derive(Debug, Error)]
pub enum WordScrambleError {
    /// Wraps an error from reading a word list or dictionary.
    #[error("could not read word data: {0}")]
    Io(#[from] io::Error),
}

/// The reason a submitted word was not accepted.
///
/// Rejections are returned in a fixed order: a word that is both too short and not a real word is
/// always reported as [`Rejection::TooShort`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The word has too few letters.
    #[error("words must be longer than {longer_than} letters")]
    TooShort { longer_than: usize },
    /// The word is the root word itself.
    #[error("You can't use the root word.")]
    SameAsRoot,
    /// The word has already been accepted this round.
    #[error("be more original")]
    AlreadyUsed,
    /// The word needs letters that the root word does not have.
    #[error("you cant spell that word from {root_word}")]
    NotPossible { root_word: Arc<str> },
    /// The dictionary does not recognize the word.
    #[error("that word isnt in the english language")]
    NotReal,
}

impl Rejection {
    /// A short heading for this rejection, suitable for an alert title.
    pub fn title(&self) -> &'static str {
        match self {
            Rejection::TooShort { .. } => "too short",
            Rejection::SameAsRoot => "Same as root",
            Rejection::AlreadyUsed => "word used already",
            Rejection::NotPossible { .. } => "word not possible",
            Rejection::NotReal => "word not real",
        }
    }

    /// The full explanation of this rejection.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// A word that was accepted into the round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accepted {
    /// The normalized word, as stored in the accepted words list.
    pub word: Arc<str>,
    /// The points awarded for this word.
    pub points: u32,
    /// The round's score after adding this word.
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_texts() {
        let too_short = Rejection::TooShort { longer_than: 2 };
        assert_eq!(too_short.title(), "too short");
        assert_eq!(too_short.message(), "words must be longer than 2 letters");

        let not_possible = Rejection::NotPossible {
            root_word: Arc::from("silkworm"),
        };
        assert_eq!(not_possible.title(), "word not possible");
        assert_eq!(
            not_possible.message(),
            "you cant spell that word from silkworm"
        );

        assert_eq!(Rejection::SameAsRoot.message(), "You can't use the root word.");
        assert_eq!(Rejection::AlreadyUsed.title(), "word used already");
        assert_eq!(Rejection::NotReal.title(), "word not real");
    }

    #[test]
    fn io_error_converts() {
        let error: WordScrambleError =
            io::Error::new(io::ErrorKind::NotFound, "start.txt").into();

        assert!(error.to_string().starts_with("could not read word data"));
    }
}
