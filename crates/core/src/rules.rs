use serde::{Deserialize, Serialize};

/// Which seat a hand belongs to for the duration of a round.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Player,
    Banker,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BetSelection {
    Player,
    Banker,
    Tie,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Bet {
    pub selection: BetSelection,
    pub amount: i64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    PlayerWin,
    BankerWin,
    Tie,
}

pub const THIRD_CARD_THRESHOLD: u8 = 5;

/// Simplified tableau: each side draws on its own two-card total alone,
/// never on what the other side drew.
pub fn draws_third(score: u8) -> bool {
    score <= THIRD_CARD_THRESHOLD
}

pub fn round_outcome(player_score: u8, banker_score: u8) -> Outcome {
    if player_score > banker_score {
        Outcome::PlayerWin
    } else if banker_score > player_score {
        Outcome::BankerWin
    } else {
        Outcome::Tie
    }
}

/// Signed wallet delta for a settled round. Tie bets pay 8:1, player bets
/// pay 2:1, banker bets pay even money; an unmatched tie is a push.
pub fn settlement(bet: Bet, outcome: Outcome) -> i64 {
    match (outcome, bet.selection) {
        (Outcome::Tie, BetSelection::Tie) => bet.amount * 7,
        (Outcome::Tie, _) => 0,
        (Outcome::PlayerWin, BetSelection::Player) => bet.amount * 2,
        (Outcome::BankerWin, BetSelection::Banker) => bet.amount,
        _ => -bet.amount,
    }
}
