use std::collections::BTreeMap;
use tracing::debug;

use super::{models::Player, types::CreatePlayerRequest};

/// Name of the player every fresh roster starts with
pub const SEEDED_PLAYER_NAME: &str = "John Doe";

/// Roster of players keyed by ID
///
/// Players are never removed, so IDs run 1..=len without gaps.
#[derive(Debug, Clone, Default)]
pub struct PlayerStore {
    players: BTreeMap<u32, Player>,
}

impl PlayerStore {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster holding the default seeded player with ID 1
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.insert(CreatePlayerRequest::named(SEEDED_PLAYER_NAME));
        store
    }

    /// Adds a player, assigning the next sequential ID
    pub fn insert(&mut self, request: CreatePlayerRequest) -> Player {
        let id = self.players.len() as u32 + 1;
        let player = Player {
            id,
            name: request.name,
            correct_guesses: request.correct_guesses,
            incorrect_guesses: request.incorrect_guesses,
            wins: request.wins,
            losses: request.losses,
        };

        debug!(player_id = id, name = %player.name, "Player added to roster");
        self.players.insert(id, player.clone());
        player
    }

    #[cfg(test)]
    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Player> {
        self.players.get_mut(&id)
    }

    /// All players ordered by ID
    pub fn list(&self) -> Vec<Player> {
        self.players.values().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.players.len()
    }

    /// Zero every player's per-game counters
    pub fn reset_round_counters(&mut self) {
        for player in self.players.values_mut() {
            player.reset_round_counters();
        }
    }
}
