//! The live game shared by every connected client
//!
//! [`GameSession`] owns the client registries, the game state and the word
//! list. The multiplexer feeds it connection events one at a time; each event
//! runs to completion before the next one is looked at, so nothing here needs
//! a lock.
//!
//! Writes never remove a client on the spot. A failed send marks the
//! recipient as broken and the removal happens once the event that triggered
//! the send has been handled, so a broadcast never has its list changed under
//! it.

use crate::client_manager::{Client, ClientId, ClientManager, Connection, Membership};
use crate::dictionary::{Dictionary, DictionaryError};
use crate::game::{Game, GameRules, GuessOutcome};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::{messages, MAX_NAME_LEN};
use std::net::SocketAddr;

/// How a client went away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Departure {
    /// The peer closed the connection; Active players get a farewell broadcast
    Left,
    /// A read or write failed; the client is dropped without a broadcast
    Failed,
}

pub struct GameSession {
    clients: ClientManager,
    game: Game,
    dictionary: Dictionary,
    rng: StdRng,
    /// Clients whose outbound channel is gone, removed after the current event
    broken: Vec<ClientId>,
    /// Clients removed since the multiplexer last asked
    released: Vec<ClientId>,
}

impl GameSession {
    pub fn new(dictionary: Dictionary, rules: GameRules) -> Result<Self, DictionaryError> {
        Self::with_rng(dictionary, rules, StdRng::from_entropy())
    }

    /// Creates a session whose word choices come from `rng`.
    pub fn with_rng(
        dictionary: Dictionary,
        rules: GameRules,
        mut rng: StdRng,
    ) -> Result<Self, DictionaryError> {
        let word = dictionary
            .choose(&mut rng)
            .ok_or(DictionaryError::Empty)?
            .to_string();

        Ok(Self {
            clients: ClientManager::new(),
            game: Game::new(&word, rules),
            dictionary,
            rng,
            broken: Vec::new(),
            released: Vec::new(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn clients(&self) -> &ClientManager {
        &self.clients
    }

    /// Registers a new connection as Pending and greets it.
    pub fn connect(&mut self, id: ClientId, addr: SocketAddr, connection: Connection) {
        self.clients
            .add_pending(Client::new(id, addr, connection));
        self.send_to(id, messages::WELCOME);
        self.reap();
    }

    /// Handles the bytes of one read from a client
    ///
    /// Nothing happens until the bytes complete a line. A completed line goes
    /// to the name handler for Pending clients and to the guess handler for
    /// Active ones. Data from a client that is no longer registered is
    /// ignored.
    pub fn receive(&mut self, id: ClientId, bytes: &[u8]) {
        let Some(membership) = self.clients.membership(id) else {
            debug!("Ignoring {} bytes from unknown client {}", bytes.len(), id);
            return;
        };

        let line = match self.clients.find_mut(id).map(|client| client.receive(bytes)) {
            Some(Ok(Some(line))) => line,
            Some(Ok(None)) | None => return,
            Some(Err(e)) => {
                warn!("Client {}: {}", id, e);
                String::new()
            }
        };
        debug!("[{}] Found newline {:?}", id, line);

        match membership {
            Membership::Pending => self.handle_name(id, &line),
            Membership::Active => self.handle_guess(id, &line),
        }
        self.reap();
    }

    /// Removes a client from whichever registry holds it.
    pub fn disconnect(&mut self, id: ClientId, departure: Departure) {
        self.remove(id, departure);
        self.reap();
    }

    /// Hands over the clients removed since the last call, so their
    /// connections can be dropped from the readiness set.
    pub fn take_released(&mut self) -> Vec<ClientId> {
        std::mem::take(&mut self.released)
    }

    fn handle_name(&mut self, id: ClientId, name: &str) {
        if name.is_empty() || name.len() > MAX_NAME_LEN || self.clients.name_in_use(name) {
            debug!("Client {} offered an unusable name {:?}", id, name);
            self.send_to(id, messages::INVALID_NAME);
            return;
        }

        if !self.clients.promote(id, name) {
            return;
        }

        self.broadcast(&messages::joined(name));
        if self.clients.active_count() == 1 {
            self.game.set_turn(id);
        }
        let board = self.game.board();
        self.send_to(id, &board);
        self.announce_turn();
    }

    fn handle_guess(&mut self, id: ClientId, line: &str) {
        if self.game.turn() != Some(id) {
            self.send_to(id, messages::NOT_YOUR_TURN);
            return;
        }

        let letter = match self.game.validate_guess(line) {
            Ok(letter) => letter,
            Err(e) => {
                self.send_to(id, &messages::line(&e.to_string()));
                return;
            }
        };

        let Some(name) = self.clients.active().find(id).map(|c| c.name.clone()) else {
            return;
        };

        let outcome = self.game.apply_guess(letter);
        match outcome {
            GuessOutcome::Hit => info!("That was a correct guess by {}", name),
            GuessOutcome::Miss => {
                info!("That was an incorrect guess by {}", name);
                self.send_to(id, messages::INCORRECT_GUESS);
            }
        }

        self.broadcast(&messages::guessed(&name, letter));
        let board = self.game.board();
        self.send_to(id, &board);

        if outcome == GuessOutcome::Miss && self.game.in_progress() {
            self.game.rotate_turn(self.clients.active());
        }
        self.announce_turn();
    }

    /// Round-resolution check
    ///
    /// While the round is in progress this prompts the turn holder and tells
    /// everyone else whose turn it is. A resolved round is announced, replaced
    /// by a fresh one, and then the prompts go out for the new round.
    fn announce_turn(&mut self) {
        let Some((holder, name)) = self.turn_holder() else {
            debug!("No turn holder, the game is idle");
            return;
        };

        if !self.game.in_progress() {
            self.finish_round(&name);
            if !self.game.in_progress() {
                warn!("Fresh round is already over, not prompting anyone");
                return;
            }
        }

        let turn = messages::turn(&name);
        for client in self.clients.active().iter() {
            let text = if client.id == holder {
                messages::YOUR_GUESS
            } else {
                turn.as_str()
            };
            if client.send(text).is_err() {
                self.broken.push(client.id);
            }
        }
    }

    fn finish_round(&mut self, holder_name: &str) {
        let reveal = messages::word_was(self.game.word());
        self.broadcast(&reveal);

        if self.game.is_solved() {
            info!("Round won by {}", holder_name);
            self.broadcast(&messages::won(holder_name));
        } else {
            info!("Round lost, the word was {}", self.game.word());
            self.broadcast(messages::GUESSES_EXHAUSTED);
        }

        self.broadcast(messages::NEW_ROUND);
        self.start_round();
        let board = self.game.board();
        self.broadcast(&board);
    }

    fn start_round(&mut self) {
        let word = self
            .dictionary
            .choose(&mut self.rng)
            .map(str::to_string)
            .unwrap_or_else(|| self.game.word().to_string());
        self.game.start_round(&word);
    }

    fn turn_holder(&self) -> Option<(ClientId, String)> {
        let id = self.game.turn()?;
        self.clients
            .active()
            .find(id)
            .map(|client| (client.id, client.name.clone()))
    }

    fn remove(&mut self, id: ClientId, departure: Departure) {
        match self.clients.membership(id) {
            Some(Membership::Active) => self.remove_active(id, departure),
            Some(Membership::Pending) => {
                if let Some((_, client)) = self.clients.remove(id) {
                    info!("Removing client {} {}", id, client.addr);
                    self.release(client);
                }
            }
            None => debug!("Client {} already removed", id),
        }
    }

    /// Unlinks an Active player, repairing the turn pointer first so rotation
    /// still sees the player in the list.
    fn remove_active(&mut self, id: ClientId, departure: Departure) {
        let held_turn = self.game.turn() == Some(id);
        if self.clients.active_count() == 1 {
            self.game.clear_turn();
        } else if held_turn {
            self.game.rotate_turn(self.clients.active());
        }

        let Some((_, client)) = self.clients.remove(id) else {
            return;
        };
        info!("Removing client {} {} ({})", id, client.addr, client.name);
        let name = client.name.clone();
        self.release(client);

        if self.clients.active_count() == 0 {
            self.game.clear_turn();
            info!("No players left, waiting for someone to join");
            return;
        }

        match departure {
            Departure::Left => {
                self.broadcast(&messages::left(&name));
                self.announce_turn();
            }
            Departure::Failed if held_turn => self.announce_turn(),
            Departure::Failed => {}
        }
    }

    fn release(&mut self, client: Client) {
        self.released.push(client.id);
    }

    fn reap(&mut self) {
        while let Some(id) = self.broken.pop() {
            warn!("Write to client {} failed", id);
            self.remove(id, Departure::Failed);
        }
    }

    fn send_to(&mut self, id: ClientId, text: &str) {
        if let Some(client) = self.clients.find(id) {
            if client.send(text).is_err() {
                self.broken.push(id);
            }
        }
    }

    /// Sends `text` to every Active player. A failed recipient is marked
    /// broken; the others still get the message.
    fn broadcast(&mut self, text: &str) {
        for client in self.clients.active().iter() {
            if client.send(text).is_err() {
                self.broken.push(client.id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::messages::*;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    fn session(words: &[&str], max_guesses: u32) -> GameSession {
        GameSession::with_rng(
            Dictionary::from_words(words.iter().copied()),
            GameRules { max_guesses },
            StdRng::seed_from_u64(42),
        )
        .unwrap()
    }

    fn connect(session: &mut GameSession, id: ClientId) -> UnboundedReceiver<String> {
        let (tx, rx) = mpsc::unbounded_channel();
        let addr = format!("127.0.0.1:{}", 9000 + id).parse().unwrap();
        session.connect(id, addr, Connection::new(tx));
        rx
    }

    fn drain(rx: &mut UnboundedReceiver<String>) -> Vec<String> {
        let mut out = Vec::new();
        while let Ok(text) = rx.try_recv() {
            out.push(text);
        }
        out
    }

    fn join(session: &mut GameSession, id: ClientId, name: &str) -> UnboundedReceiver<String> {
        let mut rx = connect(session, id);
        session.receive(id, format!("{name}\r\n").as_bytes());
        drain(&mut rx);
        rx
    }

    fn say(session: &mut GameSession, id: ClientId, line: &str) {
        session.receive(id, format!("{line}\r\n").as_bytes());
    }

    #[test]
    fn test_connect_sends_welcome() {
        let mut session = session(&["cat"], 4);
        let mut rx = connect(&mut session, 1);

        assert_eq!(drain(&mut rx), vec![WELCOME.to_string()]);
        assert_eq!(session.clients().membership(1), Some(Membership::Pending));
    }

    #[test]
    fn test_welcome_failure_removes_pending_client() {
        let mut session = session(&["cat"], 4);

        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);
        session.connect(2, "127.0.0.1:9002".parse().unwrap(), Connection::new(tx));

        assert_eq!(session.clients().membership(2), None);
        assert_eq!(session.take_released(), vec![2]);
    }

    #[test]
    fn test_empty_and_duplicate_names_are_refused() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");
        let mut rx = connect(&mut session, 2);
        drain(&mut rx);

        say(&mut session, 2, "42");
        assert_eq!(drain(&mut rx), vec![INVALID_NAME.to_string()]);

        say(&mut session, 2, "alice");
        assert_eq!(drain(&mut rx), vec![INVALID_NAME.to_string()]);
        assert_eq!(session.clients().membership(2), Some(Membership::Pending));

        // Names are case-sensitive
        say(&mut session, 2, "Alice");
        assert_eq!(session.clients().membership(2), Some(Membership::Active));
    }

    #[test]
    fn test_first_player_gets_turn_and_board() {
        let mut session = session(&["cat"], 4);
        let mut rx = connect(&mut session, 1);
        drain(&mut rx);

        say(&mut session, 1, "alice");

        let board = messages::board("---", 4, Vec::new());
        assert_eq!(
            drain(&mut rx),
            vec![joined("alice"), board, YOUR_GUESS.to_string()]
        );
        assert_eq!(session.game().turn(), Some(1));
    }

    #[test]
    fn test_pending_clients_get_no_broadcasts() {
        let mut session = session(&["cat"], 4);
        let mut pending = connect(&mut session, 1);
        drain(&mut pending);

        let _alice = join(&mut session, 2, "alice");
        say(&mut session, 2, "c");

        assert!(drain(&mut pending).is_empty());
    }

    #[test]
    fn test_single_player_cat_scenario() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");

        say(&mut session, 1, "c");
        assert_eq!(session.game().mask(), "c--");
        assert_eq!(session.game().guesses_left(), 3);
        assert_eq!(session.game().turn(), Some(1));
        assert_eq!(
            drain(&mut alice),
            vec![
                guessed("alice", 'c'),
                messages::board("c--", 3, ['c']),
                YOUR_GUESS.to_string(),
            ]
        );

        say(&mut session, 1, "z");
        assert_eq!(session.game().guesses_left(), 2);
        assert_eq!(session.game().turn(), Some(1));
        assert_eq!(
            drain(&mut alice),
            vec![
                INCORRECT_GUESS.to_string(),
                guessed("alice", 'z'),
                messages::board("c--", 2, ['c', 'z']),
                YOUR_GUESS.to_string(),
            ]
        );
    }

    #[test]
    fn test_invalid_guesses_change_nothing() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");
        say(&mut session, 1, "a");
        drain(&mut alice);

        let cases = [
            ("", "Please, enter a non-empty guess."),
            ("7", "Please, enter a non-empty guess."),
            ("ab", "Please, enter a single guess."),
            ("Q", "The letter should be in lower-case."),
            ("a", "The letter has already been guessed. Try again."),
        ];
        for (input, reply) in cases {
            say(&mut session, 1, input);
            assert_eq!(drain(&mut alice), vec![messages::line(reply)], "{input:?}");
            assert_eq!(session.game().guesses_left(), 3);
            assert_eq!(session.game().mask(), "-a-");
            assert_eq!(session.game().guessed_letters().collect::<String>(), "a");
            assert_eq!(session.game().turn(), Some(1));
        }
    }

    #[test]
    fn test_guess_out_of_turn() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");
        let mut bob = join(&mut session, 2, "bob");

        say(&mut session, 2, "c");
        assert_eq!(drain(&mut bob), vec![NOT_YOUR_TURN.to_string()]);
        assert_eq!(session.game().guesses_left(), 4);
    }

    #[test]
    fn test_two_player_dog_scenario() {
        let mut session = session(&["dog"], 4);
        let mut alice = join(&mut session, 1, "alice");
        let mut bob = join(&mut session, 2, "bob");
        drain(&mut alice);

        say(&mut session, 1, "d");
        assert_eq!(session.game().turn(), Some(1));

        say(&mut session, 1, "x");
        assert_eq!(session.game().turn(), Some(2));
        assert!(drain(&mut bob).contains(&YOUR_GUESS.to_string()));
        assert!(drain(&mut alice).contains(&turn("bob")));

        say(&mut session, 2, "o");
        assert_eq!(session.game().turn(), Some(2));
        drain(&mut alice);
        drain(&mut bob);

        say(&mut session, 2, "g");
        let alice_saw = drain(&mut alice);
        let bob_saw = drain(&mut bob);

        for seen in [&alice_saw, &bob_saw] {
            assert!(seen.contains(&word_was("dog")));
            assert!(seen.contains(&won("bob")));
            assert!(seen.contains(&NEW_ROUND.to_string()));
        }
        assert_eq!(bob_saw.last(), Some(&YOUR_GUESS.to_string()));
        assert_eq!(alice_saw.last(), Some(&turn("bob")));

        // Fresh round, same holder
        assert_eq!(session.game().turn(), Some(2));
        assert_eq!(session.game().mask(), "---");
        assert_eq!(session.game().guesses_left(), 4);
    }

    #[test]
    fn test_exhausted_guesses_start_new_round() {
        let mut session = session(&["cat"], 2);
        let mut alice = join(&mut session, 1, "alice");

        say(&mut session, 1, "x");
        drain(&mut alice);
        say(&mut session, 1, "y");

        let seen = drain(&mut alice);
        let reveal = seen.iter().position(|m| *m == word_was("cat")).unwrap();
        assert_eq!(seen[reveal + 1], GUESSES_EXHAUSTED);
        assert_eq!(seen[reveal + 2], NEW_ROUND);
        assert_eq!(seen[reveal + 3], messages::board("---", 2, Vec::new()));
        assert_eq!(seen.last(), Some(&YOUR_GUESS.to_string()));
        assert!(session.game().in_progress());
    }

    #[test]
    fn test_last_guess_miss_keeps_turn() {
        let mut session = session(&["cat"], 1);
        let mut alice = join(&mut session, 1, "alice");
        let mut bob = join(&mut session, 2, "bob");
        drain(&mut alice);

        say(&mut session, 1, "x");

        assert_eq!(session.game().turn(), Some(1));
        assert_eq!(session.game().guesses_left(), 1);

        let seen = drain(&mut alice);
        assert!(seen.contains(&GUESSES_EXHAUSTED.to_string()));
        assert_eq!(seen.last(), Some(&YOUR_GUESS.to_string()));

        let seen = drain(&mut bob);
        assert!(seen.contains(&NEW_ROUND.to_string()));
        assert_eq!(seen.last(), Some(&turn("alice")));
    }

    #[test]
    fn test_miss_rotation_cycles_back() {
        let mut session = session(&["cat"], 10);
        let _rxs: Vec<_> = [(1, "ann"), (2, "ben"), (3, "cal")]
            .into_iter()
            .map(|(id, name)| join(&mut session, id, name))
            .collect();

        let start = session.game().turn().unwrap();
        for letter in ["x", "y", "z"] {
            let holder = session.game().turn().unwrap();
            say(&mut session, holder, letter);
        }

        assert_eq!(session.game().turn(), Some(start));
        assert_eq!(session.game().guesses_left(), 7);
    }

    #[test]
    fn test_rotation_order_is_previous_joiner() {
        let mut session = session(&["cat"], 10);
        let _a = join(&mut session, 1, "ann");
        let _b = join(&mut session, 2, "ben");
        let _c = join(&mut session, 3, "cal");

        say(&mut session, 1, "x");
        assert_eq!(session.game().turn(), Some(3));
        say(&mut session, 3, "y");
        assert_eq!(session.game().turn(), Some(2));
    }

    #[test]
    fn test_holder_leaves_mid_turn() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");
        let mut bob = join(&mut session, 2, "bob");
        assert_eq!(session.game().turn(), Some(1));

        session.disconnect(1, Departure::Left);

        assert_eq!(session.game().turn(), Some(2));
        assert_eq!(
            drain(&mut bob),
            vec![left("alice"), YOUR_GUESS.to_string()]
        );
        assert_eq!(session.take_released(), vec![1]);
    }

    #[test]
    fn test_failed_connection_leaves_silently() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");
        let _bob = join(&mut session, 2, "bob");
        drain(&mut alice);

        session.disconnect(2, Departure::Failed);

        assert!(drain(&mut alice).is_empty());
        assert_eq!(session.game().turn(), Some(1));
        assert_eq!(session.clients().active_count(), 1);
    }

    #[test]
    fn test_failed_holder_hands_over_turn() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");
        let mut bob = join(&mut session, 2, "bob");

        session.disconnect(1, Departure::Failed);

        assert_eq!(drain(&mut bob), vec![YOUR_GUESS.to_string()]);
        assert_eq!(session.game().turn(), Some(2));
    }

    #[test]
    fn test_sole_player_leaves_then_rejoin() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");

        session.disconnect(1, Departure::Left);
        assert_eq!(session.game().turn(), None);
        assert_eq!(session.clients().active_count(), 0);

        let mut bob = connect(&mut session, 2);
        drain(&mut bob);
        say(&mut session, 2, "bob");

        assert_eq!(session.game().turn(), Some(2));
        assert_eq!(drain(&mut bob).last(), Some(&YOUR_GUESS.to_string()));
    }

    #[test]
    fn test_pending_disconnect_is_quiet() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");
        let _pending = connect(&mut session, 2);

        session.disconnect(2, Departure::Left);

        assert!(drain(&mut alice).is_empty());
        assert_eq!(session.clients().membership(2), None);
        assert_eq!(session.take_released(), vec![2]);
    }

    #[test]
    fn test_broken_recipient_does_not_stop_broadcast() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");
        let bob = join(&mut session, 2, "bob");
        let mut cal = join(&mut session, 3, "cal");
        drain(&mut alice);
        drain(&mut cal);
        session.take_released();
        drop(bob);

        say(&mut session, 1, "c");

        assert!(drain(&mut cal).contains(&guessed("alice", 'c')));
        assert_eq!(session.clients().membership(2), None);
        assert_eq!(session.take_released(), vec![2]);
        // Silent removal: nobody hears that bob left
        assert!(!drain(&mut alice).contains(&left("bob")));
    }

    #[test]
    fn test_fragmented_guess() {
        let mut session = session(&["cat"], 4);
        let _alice = join(&mut session, 1, "alice");

        session.receive(1, b"c");
        assert_eq!(session.game().guesses_left(), 4);
        session.receive(1, b"\r");
        session.receive(1, b"\n");
        assert_eq!(session.game().mask(), "c--");
    }

    #[test]
    fn test_overlong_name_is_refused() {
        let mut session = session(&["cat"], 4);
        let mut rx = connect(&mut session, 1);
        drain(&mut rx);

        session.receive(1, &[b'a'; shared::MAX_BUF]);
        assert_eq!(drain(&mut rx), vec![INVALID_NAME.to_string()]);
        assert_eq!(session.clients().membership(1), Some(Membership::Pending));
    }

    #[test]
    fn test_overlong_name_tail_is_not_a_name() {
        let mut session = session(&["cat"], 4);
        let mut rx = connect(&mut session, 1);
        drain(&mut rx);

        // Arrives split the way the reader task splits it
        session.receive(1, &[b'a'; shared::MAX_BUF]);
        session.receive(1, b"bob\r\n");

        assert_eq!(drain(&mut rx), vec![INVALID_NAME.to_string()]);
        assert_eq!(session.clients().membership(1), Some(Membership::Pending));

        say(&mut session, 1, "bob");
        assert_eq!(session.clients().membership(1), Some(Membership::Active));
    }

    #[test]
    fn test_overlong_guess_tail_is_not_a_guess() {
        let mut session = session(&["cat"], 4);
        let mut alice = join(&mut session, 1, "alice");

        session.receive(1, &[b'x'; shared::MAX_BUF]);
        session.receive(1, b"c\r\n");

        assert_eq!(drain(&mut alice).len(), 1);
        assert_eq!(session.game().mask(), "---");
        assert_eq!(session.game().guesses_left(), 4);

        say(&mut session, 1, "c");
        assert_eq!(session.game().mask(), "c--");
    }

    #[test]
    fn test_name_length_limit() {
        let mut session = session(&["cat"], 4);
        let mut rx = connect(&mut session, 1);
        drain(&mut rx);

        say(&mut session, 1, &"a".repeat(shared::MAX_NAME_LEN + 1));
        assert_eq!(drain(&mut rx), vec![INVALID_NAME.to_string()]);
        assert_eq!(session.clients().membership(1), Some(Membership::Pending));

        say(&mut session, 1, &"a".repeat(shared::MAX_NAME_LEN));
        assert_eq!(session.clients().membership(1), Some(Membership::Active));
    }

    #[test]
    fn test_unknown_client_is_ignored() {
        let mut session = session(&["cat"], 4);
        session.receive(99, b"hello\r\n");
        session.disconnect(99, Departure::Left);
        assert!(session.take_released().is_empty());
    }

    #[test]
    fn test_empty_dictionary_is_rejected() {
        let result = GameSession::new(Dictionary::from_words(Vec::<String>::new()), GameRules::default());
        assert!(matches!(result, Err(DictionaryError::Empty)));
    }
}
