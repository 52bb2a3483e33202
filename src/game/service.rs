use rand::{rngs::StdRng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::{
    errors::GameError,
    state::GameState,
    turn::{evaluate_turn, reject_turn, TurnOutcome},
    words::WordBank,
};
use crate::player::{CreatePlayerRequest, Player, PlayerStore};

/// Everything a request may mutate, kept behind one lock
struct GameSession {
    state: GameState,
    players: PlayerStore,
}

impl GameSession {
    fn reset(&mut self) -> String {
        let word = self.state.reset().to_string();
        self.players.reset_round_counters();
        word
    }
}

/// Owns the live game and the player roster for the whole process
pub struct GameService {
    session: Mutex<GameSession>,
}

impl GameService {
    /// Default service: built-in words, time-seeded randomness, one seeded player
    pub fn new() -> Self {
        Self::from_parts(
            GameState::new(WordBank::default(), GameState::time_seeded_rng()),
            PlayerStore::seeded(),
        )
    }

    pub fn builder() -> GameServiceBuilder {
        GameServiceBuilder::new()
    }

    fn from_parts(state: GameState, players: PlayerStore) -> Self {
        Self {
            session: Mutex::new(GameSession { state, players }),
        }
    }

    /// All players ordered by ID
    #[instrument(skip(self))]
    pub async fn list_players(&self) -> Vec<Player> {
        let session = self.session.lock().await;
        session.players.list()
    }

    #[instrument(skip(self))]
    pub async fn create_player(&self, request: CreatePlayerRequest) -> Player {
        let mut session = self.session.lock().await;
        let player = session.players.insert(request);
        info!(player_id = player.id, name = %player.name, "Player created");
        player
    }

    #[instrument(skip(self))]
    pub async fn current_word(&self) -> String {
        let session = self.session.lock().await;
        session.state.current_word().to_string()
    }

    /// Starts a new game: new word, empty ledger, every player's round counters cleared.
    /// Returns the new secret word.
    #[instrument(skip(self))]
    pub async fn new_game(&self) -> String {
        let mut session = self.session.lock().await;
        let word = session.reset();
        info!(player_count = session.players.len(), "New game started");
        word
    }

    /// Plays one guess for `player_id`, resetting the game if it wins
    #[instrument(skip(self))]
    pub async fn guess(&self, player_id: u32, guess: &str) -> Result<TurnOutcome, GameError> {
        let mut session = self.session.lock().await;
        let GameSession { state, players } = &mut *session;

        let player = players.get_mut(player_id).ok_or_else(|| {
            warn!(player_id, "Guess from unknown player");
            GameError::PlayerNotFound(player_id)
        })?;

        let outcome = evaluate_turn(player, guess, state);

        if outcome.is_winner() {
            session.reset();
            info!(player_id, "Game won, new game started");
        }

        debug!(player_id, result = ?outcome.result, "Guess handled");
        Ok(outcome)
    }

    /// Counts a guess whose token could not be read at all against `player_id`
    #[instrument(skip(self))]
    pub async fn reject_guess(&self, player_id: u32) -> Result<TurnOutcome, GameError> {
        let mut session = self.session.lock().await;
        let GameSession { state, players } = &mut *session;

        let player = players.get_mut(player_id).ok_or_else(|| {
            warn!(player_id, "Rejected guess from unknown player");
            GameError::PlayerNotFound(player_id)
        })?;

        Ok(reject_turn(player, state))
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for configuring a GameService, mainly for tests and alternate word lists
pub struct GameServiceBuilder {
    word_bank: WordBank,
    seed: Option<u64>,
    initial_word: Option<String>,
    players: Vec<CreatePlayerRequest>,
    seed_default_player: bool,
}

impl GameServiceBuilder {
    pub fn new() -> Self {
        Self {
            word_bank: WordBank::default(),
            seed: None,
            initial_word: None,
            players: Vec::new(),
            seed_default_player: true,
        }
    }

    pub fn with_word_bank(mut self, word_bank: WordBank) -> Self {
        self.word_bank = word_bank;
        self
    }

    /// Fixed random seed instead of the wall clock
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Start on a known word; it must be in the word bank
    pub fn with_initial_word(mut self, word: impl Into<String>) -> Self {
        self.initial_word = Some(word.into());
        self
    }

    /// Register an extra player after the seeded one
    pub fn with_player(mut self, request: CreatePlayerRequest) -> Self {
        self.players.push(request);
        self
    }

    /// Start with an empty roster instead of the seeded player
    pub fn without_seeded_player(mut self) -> Self {
        self.seed_default_player = false;
        self
    }

    pub fn build(self) -> Result<GameService, GameError> {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => GameState::time_seeded_rng(),
        };

        let state = match self.initial_word {
            Some(word) => GameState::with_word(self.word_bank, &word, rng)?,
            None => GameState::new(self.word_bank, rng),
        };

        let mut players = if self.seed_default_player {
            PlayerStore::seeded()
        } else {
            PlayerStore::new()
        };
        for request in self.players {
            players.insert(request);
        }

        Ok(GameService::from_parts(state, players))
    }
}

impl Default for GameServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
