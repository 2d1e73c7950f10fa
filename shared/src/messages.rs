//! Server-to-client message texts
//!
//! Fixed texts are constants with their terminator already attached; the
//! rest are built by the functions below.

pub const WELCOME: &str = "Welcome to our word game. What is your name? ";
pub const INVALID_NAME: &str = "Please, enter a valid name.\r\n";
pub const YOUR_GUESS: &str = "Your guess?\r\n";
pub const NOT_YOUR_TURN: &str = "It's not your turn to guess.\r\n";
pub const INCORRECT_GUESS: &str = "That was an incorrect guess.\r\n";
pub const GUESSES_EXHAUSTED: &str = "Game over. You've exhausted all the guesses.\r\n";
pub const NEW_ROUND: &str = "Let's start a new game.\r\n";

const BANNER: &str = "***************";

/// Terminates `text` with the network newline.
pub fn line(text: &str) -> String {
    format!("{text}\r\n")
}

pub fn joined(name: &str) -> String {
    format!("{name} has just joined.\r\n")
}

pub fn left(name: &str) -> String {
    format!("{name} left the game.\r\n")
}

pub fn turn(name: &str) -> String {
    format!("It's {name}'s turn.\r\n")
}

pub fn guessed(name: &str, letter: char) -> String {
    format!("{name} guesses: {letter}\r\n")
}

pub fn word_was(word: &str) -> String {
    format!("The word was {word}.\r\n")
}

pub fn won(name: &str) -> String {
    format!("Game over. {name} won!\r\n")
}

/// Renders the game board
///
/// Each guessed letter is followed by a single space, in alphabetical order.
pub fn board(mask: &str, guesses_left: u32, letters: impl IntoIterator<Item = char>) -> String {
    let mut guessed = String::new();
    for letter in letters {
        guessed.push(letter);
        guessed.push(' ');
    }

    format!(
        "{BANNER}\r\nWord to guess: {mask}\r\nGuesses remaining: {guesses_left}\r\n\
         Letters guessed: \r\n{guessed}\r\n{BANNER}\r\n"
    )
}
