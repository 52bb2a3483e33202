use serde::Deserialize;

/// Request payload for creating a player
///
/// Counters are optional and default to zero. Any `id` sent by the client
/// is ignored; the store assigns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayerRequest {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default)]
    pub correct_guesses: u32,
    #[serde(default)]
    pub incorrect_guesses: u32,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl CreatePlayerRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            correct_guesses: 0,
            incorrect_guesses: 0,
            wins: 0,
            losses: 0,
        }
    }
}
