use crate::{Card, Hand, STAND_THRESHOLD};
use serde_enum_str::{Deserialize_enum_str, Serialize_enum_str};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_enum_str, Deserialize_enum_str)]
pub enum Suggestion {
    Hit,
    Stand,
}

/// Hit/Stand basic strategy that looks only at the player's evaluated total
/// and the dealer's up card value.
pub struct BasicStrategy {
    stiff_charts: [[Suggestion; 10]; 5],
}

impl BasicStrategy {
    pub fn new() -> BasicStrategy {
        const H: Suggestion = Suggestion::Hit;
        const S: Suggestion = Suggestion::Stand;

        BasicStrategy {
            // Columns are dealer up card values 2 through 11 (Ace).
            stiff_charts: [
                [H, H, S, S, S, H, H, H, H, H], // 12
                [S, S, S, S, S, H, H, H, H, H], // 13
                [S, S, S, S, S, H, H, H, H, H],
                [S, S, S, S, S, H, H, H, H, H],
                [S, S, S, S, S, H, H, H, H, H], // 16
            ],
        }
    }

    pub fn make_decision(&self, player_total: u8, dealer_up_card_value: u8) -> Suggestion {
        if player_total >= STAND_THRESHOLD {
            return Suggestion::Stand;
        }
        if player_total <= 11 {
            return Suggestion::Hit;
        }
        let row = (player_total - 12) as usize;
        match dealer_up_card_value.checked_sub(2) {
            Some(col) if (col as usize) < 10 => self.stiff_charts[row][col as usize],
            _ => Suggestion::Stand,
        }
    }
}

impl Default for BasicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

/// Suggests hitting or standing for the given hand against the dealer's up
/// card. Pure: the same input always gives the same answer.
pub fn suggest(player_hand: &Hand, dealer_up_card: Card) -> Suggestion {
    BasicStrategy::new().make_decision(player_hand.total(), dealer_up_card.numeric_value())
}
