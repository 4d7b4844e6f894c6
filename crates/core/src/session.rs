use crate::{
    draws_third, hand_score, round_outcome, settlement, Bet, Card, Deck, DeckError, Event,
    EventBus, GameConfig, Outcome, Phase, RngState, SessionState, Side,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("bet of {bet} exceeds wallet of {wallet}")]
    InsufficientFunds { bet: i64, wallet: i64 },
    #[error("bet amount must be positive")]
    InvalidBet,
    #[error("wallet is empty")]
    SessionOver,
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("deck error: {0}")]
    Deck(#[from] DeckError),
}

/// One seat at the table: a single shoe, a single wallet, one round at a time.
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub rng: RngState,
    pub deck: Deck,
    pub state: SessionState,
}

/// Everything a front-end needs to render a finished round.
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub outcome: Outcome,
    pub player_hand: Vec<Card>,
    pub banker_hand: Vec<Card>,
    pub player_score: u8,
    pub banker_score: u8,
    pub delta: i64,
    pub wallet: i64,
}

impl Session {
    pub fn new(config: GameConfig, mut rng: RngState) -> Self {
        let mut deck = Deck::standard52();
        deck.shuffle(&mut rng);
        let state = SessionState::new(config.starting_wallet);
        Self {
            config,
            rng,
            deck,
            state,
        }
    }

    pub fn is_over(&self) -> bool {
        self.state.phase == Phase::Complete || self.state.wallet <= 0
    }

    /// Run one full round: validate the bet, deal, apply the third-card
    /// rule, settle against the wallet.
    pub fn play_round(
        &mut self,
        bet: Bet,
        events: &mut EventBus,
    ) -> Result<RoundSummary, SessionError> {
        match self.state.phase {
            Phase::AwaitBet => {}
            Phase::Complete => return Err(SessionError::SessionOver),
            other => return Err(SessionError::InvalidPhase(other)),
        }
        if self.state.wallet <= 0 {
            self.state.phase = Phase::Complete;
            events.push(Event::SessionEnded {
                rounds: self.state.rounds_played,
                wallet: self.state.wallet,
            });
            return Err(SessionError::SessionOver);
        }
        if bet.amount <= 0 {
            return Err(SessionError::InvalidBet);
        }
        if bet.amount > self.state.wallet {
            return Err(SessionError::InsufficientFunds {
                bet: bet.amount,
                wallet: self.state.wallet,
            });
        }

        if self.deck.len() < self.config.reshuffle_below {
            self.deck.reshuffle_discard(&mut self.rng);
            events.push(Event::DeckReshuffled {
                cards: self.deck.len(),
            });
        }

        self.state.phase = Phase::InitialDeal;
        let mut player_hand = Vec::with_capacity(3);
        let mut banker_hand = Vec::with_capacity(3);
        if let Err(err) = self.deal_phases(&mut player_hand, &mut banker_hand, events) {
            // Abandon the round: the cards go to the discard pile and the
            // wallet is untouched.
            self.deck.discard(player_hand);
            self.deck.discard(banker_hand);
            self.state.phase = Phase::AwaitBet;
            return Err(err);
        }

        self.state.phase = Phase::Settlement;
        let player_score = hand_score(&player_hand);
        let banker_score = hand_score(&banker_hand);
        let outcome = round_outcome(player_score, banker_score);
        let delta = settlement(bet, outcome);
        self.state.wallet += delta;
        self.state.rounds_played += 1;
        self.deck.discard(player_hand.clone());
        self.deck.discard(banker_hand.clone());

        events.push(Event::RoundSettled {
            outcome,
            player_score,
            banker_score,
            delta,
            wallet: self.state.wallet,
        });

        if self.state.wallet <= 0 {
            self.state.phase = Phase::Complete;
            events.push(Event::SessionEnded {
                rounds: self.state.rounds_played,
                wallet: self.state.wallet,
            });
        } else {
            self.state.phase = Phase::AwaitBet;
        }

        Ok(RoundSummary {
            outcome,
            player_hand,
            banker_hand,
            player_score,
            banker_score,
            delta,
            wallet: self.state.wallet,
        })
    }

    fn deal_phases(
        &mut self,
        player_hand: &mut Vec<Card>,
        banker_hand: &mut Vec<Card>,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        for side in [Side::Player, Side::Banker, Side::Player, Side::Banker] {
            let card = self.deck.deal()?;
            events.push(Event::CardDealt { side, card });
            match side {
                Side::Player => player_hand.push(card),
                Side::Banker => banker_hand.push(card),
            }
        }

        self.state.phase = Phase::ThirdCard;
        for (side, hand) in [(Side::Player, player_hand), (Side::Banker, banker_hand)] {
            let score = hand_score(hand);
            if draws_third(score) {
                let card = self.deck.deal()?;
                events.push(Event::ThirdCardDrawn { side, card, score });
                hand.push(card);
            }
        }
        Ok(())
    }
}
