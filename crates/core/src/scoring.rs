use crate::Card;

/// Hand total under modulo-10 scoring. The formula is the same for two- and
/// three-card hands, and the result is always in 0..=9.
pub fn hand_score(cards: &[Card]) -> u8 {
    let total: u32 = cards.iter().map(|card| u32::from(card.point_value())).sum();
    (total % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn two_card_totals_wrap_at_ten() {
        assert_eq!(hand_score(&[card(Rank::Seven), card(Rank::Eight)]), 5);
        assert_eq!(hand_score(&[card(Rank::Ace), card(Rank::Seven)]), 8);
        assert_eq!(hand_score(&[card(Rank::Ten), card(Rank::King)]), 0);
    }

    #[test]
    fn three_card_totals_use_the_same_formula() {
        assert_eq!(
            hand_score(&[card(Rank::Nine), card(Rank::Nine), card(Rank::Nine)]),
            7
        );
        assert_eq!(
            hand_score(&[card(Rank::Two), card(Rank::Two), card(Rank::Queen)]),
            4
        );
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(hand_score(&[]), 0);
    }
}
