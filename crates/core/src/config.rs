use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Bankroll a fresh session starts with.
    pub starting_wallet: i64,
    /// Reshuffle the discard pile back into the shoe when fewer than this
    /// many cards remain at round start. A round consumes at most six cards.
    pub reshuffle_below: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_wallet: 100,
            reshuffle_below: 6,
        }
    }
}
