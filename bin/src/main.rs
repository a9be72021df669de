use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::Write;
use std::str::FromStr;
use word_scramble::*;

const BUNDLED_START_WORDS: &str = include_str!("../../data/start.txt");
const BUNDLED_DICTIONARY: &str = include_str!("../../data/dictionary.txt");

/// Build as many words as you can from the letters of a random root word.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to a file of root words, with one word on each line. Uses the bundled list if not set.
    #[arg(short = 'w', long)]
    words_file: Option<String>,

    /// Path to a file of valid English words, with one word on each line. Uses the bundled
    /// dictionary if not set.
    #[arg(short = 'd', long)]
    dictionary_file: Option<String>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game.
    Play,
    /// List every word that can be made from the given root word.
    Solve { word: String },
}

fn main() -> Result<(), WordScrambleError> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(LevelFilter::from_str(&args.log_level).unwrap_or(LevelFilter::Warn))
        .init();

    let word_list = match &args.words_file {
        Some(path) => WordList::from_reader(io::BufReader::new(File::open(path)?))?,
        None => WordList::from_reader(BUNDLED_START_WORDS.as_bytes())?,
    };
    let dictionary = match &args.dictionary_file {
        Some(path) => {
            WordListDictionary::from_reader(ENGLISH, io::BufReader::new(File::open(path)?))?
        }
        None => WordListDictionary::from_reader(ENGLISH, BUNDLED_DICTIONARY.as_bytes())?,
    };
    log::info!(
        "Loaded {} root words and {} dictionary words",
        word_list.len(),
        dictionary.len()
    );

    match args.command {
        Command::Play => play_interactive_game(word_list, dictionary)?,
        Command::Solve { word } => solve(&word, &dictionary),
    }

    Ok(())
}

fn solve(word: &str, dictionary: &WordListDictionary) {
    let config = GameConfig::default();
    let root_word = normalize(word);
    let answers = derivable_words(&root_word, &dictionary.words(), &config);

    println!(
        "There are {} words in \"{}\", worth {} points:",
        answers.len(),
        root_word,
        max_score(&answers, &config)
    );
    for answer in answers.iter() {
        println!("\t{} ({})", answer, letter_count(answer));
    }
}

fn play_interactive_game(
    word_list: WordList,
    dictionary: WordListDictionary,
) -> Result<(), WordScrambleError> {
    let mut game = Game::new(word_list, dictionary);
    let candidates = game.dictionary().words();
    log::debug!("Choosing root words from {} entries", game.word_list().len());

    println!(
        "Make words from the letters of the root word. Each letter can be used once.\n\n\
         Commands:\n\n\
           * ':words' = list the words you have found\n\
           * ':score' = show your score\n\
           * ':hint'  = count the words left to find\n\
           * ':reset' = start again with a new root word\n\
           * ':quit'  = stop playing\n"
    );
    print_root_word(&game);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };

        let command = line.trim().to_string();
        match command.as_str() {
            ":quit" => break,
            ":reset" => {
                game.reset();
                print_root_word(&game);
            }
            ":score" => println!("Your score is {} points.", game.state().score()),
            ":words" => {
                for word in game.state().accepted_words() {
                    println!("\t({}) {}", letter_count(word), word);
                }
            }
            ":hint" => {
                let state = game.state();
                let remaining = derivable_words(state.root_word(), &candidates, game.config())
                    .into_iter()
                    .filter(|word| is_original(word, state.accepted_words()))
                    .count();
                println!("There are {} words left to find.", remaining);
            }
            _ => {
                game.set_input(line);
                match game.submit_input() {
                    Ok(accepted) => println!(
                        "+{} points! Your score is {} points.",
                        accepted.points, accepted.score
                    ),
                    Err(_) => {
                        if let Some(error) = game.state().pending_error() {
                            println!("{}: {}", error.title, error.message);
                        }
                        game.dismiss_error();
                    }
                }
            }
        }
    }

    println!("Final score: {} points.", game.state().score());
    Ok(())
}

fn print_root_word(game: &Game<WordListDictionary>) {
    println!("Your root word is: {}", game.state().root_word());
}
