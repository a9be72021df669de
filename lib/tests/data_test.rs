#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use std::io::Cursor;
use std::result::Result;
use word_scramble::*;

fn load_bundled() -> Result<(WordList, WordListDictionary), WordScrambleError> {
    let words = WordList::from_reader(io::BufReader::new(File::open("../data/start.txt")?))?;
    let dictionary = WordListDictionary::from_reader(
        ENGLISH,
        io::BufReader::new(File::open("../data/dictionary.txt")?),
    )?;
    Ok((words, dictionary))
}

#[test]
fn word_list_from_reader_succeeds() -> Result<(), WordScrambleError> {
    let words = WordList::from_reader(Cursor::new("\n\nSilkworm\n raincoat \n\n"))?;

    assert_eq!(words.len(), 2);
    assert_eq!(&*words[0], "silkworm");
    assert_eq!(&*words[1], "raincoat");
    Ok(())
}

#[test]
fn word_list_from_missing_file_fails() {
    assert_matches!(
        File::open("../data/does-not-exist.txt")
            .map_err(WordScrambleError::from)
            .and_then(|file| WordList::from_reader(io::BufReader::new(file))),
        Err(WordScrambleError::Io(_))
    );
}

#[test]
fn word_list_from_invalid_utf8_fails() {
    let mut reader = Cursor::new(vec![b's', b'i', 0xff, b'\n']);

    assert_matches!(
        WordList::from_reader(&mut reader),
        Err(WordScrambleError::Io(_))
    );
}

#[test]
fn bundled_words_are_lowercase_and_non_empty() -> Result<(), WordScrambleError> {
    let (words, dictionary) = load_bundled()?;

    assert!(!words.is_empty());
    assert!(!dictionary.is_empty());
    for word in words.iter() {
        assert!(!word.is_empty());
        assert_eq!(word.to_lowercase(), **word);
    }
    Ok(())
}

#[test]
fn every_bundled_root_word_has_answers() -> Result<(), WordScrambleError> {
    let (words, dictionary) = load_bundled()?;
    let config = GameConfig::default();
    let candidates = dictionary.words();

    for root_word in words.iter() {
        let answers = derivable_words(root_word, &candidates, &config);
        assert!(
            answers.len() >= 10,
            "{} has only {} answers",
            root_word,
            answers.len()
        );
    }
    Ok(())
}

#[test]
fn bundled_game_accepts_derivable_words() -> Result<(), WordScrambleError> {
    let (words, dictionary) = load_bundled()?;
    let candidates = dictionary.words();
    let mut game = Game::with_rng(
        words,
        dictionary,
        GameConfig::default(),
        StdRng::seed_from_u64(2024),
    );
    let answers = derivable_words(
        game.state().root_word(),
        &candidates,
        game.config(),
    );

    for answer in answers.iter() {
        assert_matches!(game.submit(answer), Ok(_));
    }

    assert_eq!(game.state().accepted_words().len(), answers.len());
    assert_eq!(game.state().score(), max_score(&answers, game.config()));
    Ok(())
}
