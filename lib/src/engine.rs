use crate::data::WordList;
use crate::data::FALLBACK_ROOT_WORD;
use crate::dictionary::Dictionary;
use crate::dictionary::ENGLISH;
use crate::results::*;
use crate::validation::letter_count;
use crate::validation::validate;
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;
use std::result::Result;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The rules of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameConfig {
    /// The minimum number of letters in an accepted word.
    pub min_length: usize,
    /// Points awarded for each letter of an accepted word.
    pub points_per_letter: u32,
    /// The language tag passed to the dictionary.
    pub language: Box<str>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            min_length: 3,
            points_per_letter: 10,
            language: Box::from(ENGLISH),
        }
    }
}

impl GameConfig {
    /// The points awarded for accepting the given word.
    pub fn points_for(&self, word: &str) -> u32 {
        letter_count(word) as u32 * self.points_per_letter
    }
}

/// The most recent rejection, waiting to be shown to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PendingError {
    pub title: Box<str>,
    pub message: Box<str>,
    /// Whether the error is still being shown. Cleared by [`RoundState::dismiss_error`].
    pub visible: bool,
}

impl From<&Rejection> for PendingError {
    fn from(rejection: &Rejection) -> Self {
        PendingError {
            title: Box::from(rejection.title()),
            message: rejection.message().into_boxed_str(),
            visible: true,
        }
    }
}

/// Everything a front end needs to render a round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoundState {
    root_word: Arc<str>,
    /// Most recent first.
    accepted_words: Vec<Arc<str>>,
    score: u32,
    input: String,
    pending_error: Option<PendingError>,
}

impl RoundState {
    /// Creates an empty round for the given root word.
    pub fn new(root_word: Arc<str>) -> RoundState {
        RoundState {
            root_word,
            accepted_words: Vec::new(),
            score: 0,
            input: String::new(),
            pending_error: None,
        }
    }

    /// The word that all submissions must be spelled from.
    pub fn root_word(&self) -> &Arc<str> {
        &self.root_word
    }

    /// The accepted words, most recent first.
    pub fn accepted_words(&self) -> &[Arc<str>] {
        &self.accepted_words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// The text currently entered by the player.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// The latest rejection, if it has not been dismissed.
    pub fn pending_error(&self) -> Option<&PendingError> {
        self.pending_error.as_ref().filter(|error| error.visible)
    }

    pub fn dismiss_error(&mut self) {
        if let Some(error) = self.pending_error.as_mut() {
            error.visible = false;
        }
    }

    fn accept(&mut self, word: Arc<str>, points: u32) {
        self.accepted_words.insert(0, word);
        self.score += points;
        self.input.clear();
    }

    fn reject(&mut self, rejection: &Rejection) {
        self.pending_error = Some(rejection.into());
    }

    fn clear(&mut self, root_word: Arc<str>) {
        *self = RoundState::new(root_word);
    }
}

/// Runs rounds of the game: picks root words, validates submissions, and tracks the score.
///
/// ```
/// use word_scramble::{Game, WordList};
///
/// let words = WordList::from_iterator(["silkworm"]);
/// let dictionary = |word: &str, _language: &str| word == "silk" || word == "worm";
/// let mut game = Game::new(words, dictionary);
///
/// assert_eq!(&**game.state().root_word(), "silkworm");
/// assert!(game.submit("silk").is_ok());
/// assert!(game.submit("silk").is_err());
/// assert_eq!(game.state().score(), 40);
/// ```
pub struct Game<D, R = ThreadRng> {
    word_list: WordList,
    dictionary: D,
    config: GameConfig,
    rng: R,
    state: RoundState,
}

impl<D: Dictionary> Game<D, ThreadRng> {
    /// Starts a standard game, choosing root words with the thread-local random number generator.
    pub fn new(word_list: WordList, dictionary: D) -> Self {
        Game::with_rng(word_list, dictionary, GameConfig::default(), rand::thread_rng())
    }
}

impl<D: Dictionary, R: Rng> Game<D, R> {
    /// Starts a game with the given rules and source of randomness.
    pub fn with_rng(word_list: WordList, dictionary: D, config: GameConfig, mut rng: R) -> Self {
        let root_word = word_list.choose_root_word(&mut rng);
        info!("Starting round with root word '{}'", root_word);
        Game {
            word_list,
            dictionary,
            config,
            rng,
            state: RoundState::new(root_word),
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn word_list(&self) -> &WordList {
        &self.word_list
    }

    pub fn dictionary(&self) -> &D {
        &self.dictionary
    }

    /// Chooses a new root word for the current round.
    ///
    /// This does not clear the accepted words or the score; use [`Game::reset`] for that.
    pub fn start_round(&mut self) -> Arc<str> {
        let root_word = self.word_list.choose_root_word(&mut self.rng);
        if self.word_list.is_empty() {
            info!("Word list is empty, using '{}'", FALLBACK_ROOT_WORD);
        }
        info!("Starting round with root word '{}'", root_word);
        self.state.root_word = Arc::clone(&root_word);
        root_word
    }

    /// Clears the accepted words, score, input and errors, then starts a new round.
    pub fn reset(&mut self) -> Arc<str> {
        let root_word = self.word_list.choose_root_word(&mut self.rng);
        info!("Resetting game with root word '{}'", root_word);
        self.state.clear(Arc::clone(&root_word));
        root_word
    }

    /// Submits a word. On success the word is added to the front of the accepted words and the
    /// score increases. On failure the rejection is also recorded as the pending error.
    pub fn submit(&mut self, candidate: &str) -> Result<Accepted, Rejection> {
        let validated = validate(
            candidate,
            &self.state.root_word,
            &self.state.accepted_words,
            &self.dictionary,
            &self.config,
        );
        match validated {
            Ok(word) => {
                let points = self.config.points_for(&word);
                let word: Arc<str> = Arc::from(word.as_str());
                self.state.accept(Arc::clone(&word), points);
                debug!("Accepted '{}' for {} points", word, points);
                Ok(Accepted {
                    word,
                    points,
                    score: self.state.score,
                })
            }
            Err(rejection) => {
                debug!("Rejected '{}': {}", candidate, rejection.title());
                self.state.reject(&rejection);
                Err(rejection)
            }
        }
    }

    /// Sets the text in the input field.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.set_input(input);
    }

    /// Submits the text in the input field. The input is cleared if the word is accepted, and
    /// kept otherwise.
    pub fn submit_input(&mut self) -> Result<Accepted, Rejection> {
        let candidate = std::mem::take(&mut self.state.input);
        let result = self.submit(&candidate);
        if result.is_err() {
            self.state.input = candidate;
        }
        result
    }

    pub fn dismiss_error(&mut self) {
        self.state.dismiss_error();
    }
}
