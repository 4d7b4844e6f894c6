use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitBet,
    InitialDeal,
    ThirdCard,
    Settlement,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    pub phase: Phase,
    pub wallet: i64,
    pub rounds_played: u32,
}

impl SessionState {
    pub fn new(starting_wallet: i64) -> Self {
        Self {
            phase: Phase::AwaitBet,
            wallet: starting_wallet,
            rounds_played: 0,
        }
    }
}
