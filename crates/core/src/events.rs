use crate::{Card, Outcome, Side};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    DeckReshuffled { cards: usize },
    CardDealt { side: Side, card: Card },
    ThirdCardDrawn { side: Side, card: Card, score: u8 },
    RoundSettled {
        outcome: Outcome,
        player_score: u8,
        banker_score: u8,
        delta: i64,
        wallet: i64,
    },
    SessionEnded { rounds: u32, wallet: i64 },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
