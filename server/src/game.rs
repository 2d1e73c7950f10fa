use crate::client_manager::{ClientId, ClientList};
use log::{debug, info};
use shared::{messages, DEFAULT_MAX_GUESSES, MASK_PLACEHOLDER, NUM_LETTERS};
use thiserror::Error;

/// Reasons a submitted guess is refused. The display text is the reply sent
/// to the guesser.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Please, enter a non-empty guess.")]
    Empty,
    #[error("Please, enter a single guess.")]
    NotSingle,
    #[error("The letter should be in lower-case.")]
    NotLowercase,
    #[error("The letter has already been guessed. Try again.")]
    AlreadyGuessed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    Hit,
    Miss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    pub max_guesses: u32,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

/// State of the round being played plus the turn pointer
///
/// The turn pointer is a [`ClientId`] rather than a reference into the Active
/// list. Whoever removes a client from Active must repair it first.
#[derive(Debug, Clone)]
pub struct Game {
    word: String,
    mask: String,
    guessed: [bool; NUM_LETTERS],
    guesses_left: u32,
    rules: GameRules,
    turn: Option<ClientId>,
}

impl Game {
    pub fn new(word: &str, rules: GameRules) -> Self {
        let mut game = Self {
            word: String::new(),
            mask: String::new(),
            guessed: [false; NUM_LETTERS],
            guesses_left: rules.max_guesses,
            rules,
            turn: None,
        };
        game.start_round(word);
        game
    }

    /// Resets everything but the turn pointer for a new word.
    pub fn start_round(&mut self, word: &str) {
        self.word = word.to_string();
        self.mask = word.chars().map(|_| MASK_PLACEHOLDER).collect();
        self.guessed = [false; NUM_LETTERS];
        self.guesses_left = self.rules.max_guesses;
        info!("New round started, {} letters to guess", self.mask.chars().count());
    }

    /// Checks a sanitized line against the guess rules without touching state.
    pub fn validate_guess(&self, line: &str) -> Result<char, GuessError> {
        let mut chars = line.chars();
        let letter = match (chars.next(), chars.next()) {
            (None, _) => return Err(GuessError::Empty),
            (Some(_), Some(_)) => return Err(GuessError::NotSingle),
            (Some(letter), None) => letter,
        };

        if !letter.is_ascii_lowercase() {
            return Err(GuessError::NotLowercase);
        }
        if self.is_guessed(letter) {
            return Err(GuessError::AlreadyGuessed);
        }
        Ok(letter)
    }

    /// Records a validated guess
    ///
    /// Every accepted guess costs one from the counter, hit or miss.
    pub fn apply_guess(&mut self, letter: char) -> GuessOutcome {
        if let Some(slot) = letter_index(letter) {
            self.guessed[slot] = true;
        }
        self.guesses_left = self.guesses_left.saturating_sub(1);

        let mut hit = false;
        self.mask = self
            .word
            .chars()
            .zip(self.mask.chars())
            .map(|(actual, shown)| {
                if actual == letter {
                    hit = true;
                    actual
                } else {
                    shown
                }
            })
            .collect();

        debug!(
            "Guess '{}' leaves {} guesses, mask {}",
            letter, self.guesses_left, self.mask
        );

        if hit {
            GuessOutcome::Hit
        } else {
            GuessOutcome::Miss
        }
    }

    pub fn is_solved(&self) -> bool {
        self.mask == self.word
    }

    /// True while guesses remain and the word is not yet revealed.
    pub fn in_progress(&self) -> bool {
        self.guesses_left > 0 && !self.is_solved()
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        letter_index(letter).is_some_and(|slot| self.guessed[slot])
    }

    /// Guessed letters in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        ('a'..='z').filter(|&letter| self.is_guessed(letter))
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn mask(&self) -> &str {
        &self.mask
    }

    pub fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    pub fn board(&self) -> String {
        messages::board(&self.mask, self.guesses_left, self.guessed_letters())
    }

    pub fn turn(&self) -> Option<ClientId> {
        self.turn
    }

    pub fn set_turn(&mut self, id: ClientId) {
        self.turn = Some(id);
    }

    pub fn clear_turn(&mut self) {
        self.turn = None;
    }

    /// Passes the turn to the member inserted just before the current holder,
    /// wrapping from the oldest member to the newest
    ///
    /// Does nothing with fewer than two members. A holder that is no longer in
    /// `active` hands the turn to the newest member.
    pub fn rotate_turn(&mut self, active: &ClientList) {
        if active.len() < 2 {
            return;
        }

        let next = match self.turn.and_then(|id| active.position(id)) {
            Some(0) | None => active.len() - 1,
            Some(index) => index - 1,
        };
        self.turn = active.get(next).map(|client| client.id);
    }
}

fn letter_index(letter: char) -> Option<usize> {
    letter
        .is_ascii_lowercase()
        .then(|| (letter as u8 - b'a') as usize)
}
