pub mod calculation;
pub mod card;
mod error;
pub mod hand;
pub mod shoe;
pub mod simulation;
pub mod strategy;

pub use calculation::{calculate, simulate, OutcomeCount, Probabilities, Report, SimulationOptions};
pub use card::{Card, Rank, Suit};
pub use error::OddsError;
pub use hand::{evaluate, Hand};
pub use shoe::Shoe;
pub use simulation::{play_round, Outcome};
pub use strategy::{suggest, BasicStrategy, Suggestion};

/// Both the player and the dealer stop drawing once they reach this total.
pub const STAND_THRESHOLD: u8 = 17;
pub const BLACKJACK: u8 = 21;
pub const DEFAULT_TRIALS: u64 = 50_000;
/// Fewest cards a shoe may hold before a calculation is refused.
pub const MIN_SHOE_CARDS: usize = 6;

/// The player's known cards and the dealer's up card. This is the only input a
/// calculation needs besides its options; nothing about the selection is kept
/// between calls.
#[derive(Clone, Debug, PartialEq)]
pub struct Situation {
    player_hand: Hand,
    dealer_up_card: Card,
}

impl Situation {
    pub fn new(player_cards: Vec<Card>, dealer_up_card: Card) -> Result<Self, OddsError> {
        if player_cards.is_empty() {
            return Err(OddsError::InvalidInput(String::from(
                "select at least 1 player card",
            )));
        }
        let player_hand = Hand::new(player_cards)?;
        if player_hand.cards().contains(&dealer_up_card) {
            return Err(OddsError::InvalidInput(format!(
                "dealer up card {} is already in the player's hand",
                dealer_up_card
            )));
        }

        let remaining = 52 - player_hand.len() - 1;
        if remaining < MIN_SHOE_CARDS {
            return Err(OddsError::InvalidInput(format!(
                "only {} cards would be left in the shoe, at least {} are required",
                remaining, MIN_SHOE_CARDS
            )));
        }

        Ok(Situation {
            player_hand,
            dealer_up_card,
        })
    }

    /// Builds a situation from card codes such as `"TH"` or `"6s"`.
    pub fn parse<S: AsRef<str>>(player_codes: &[S], dealer_code: &str) -> Result<Self, OddsError> {
        let player_cards = player_codes
            .iter()
            .map(|code| code.as_ref().parse::<Card>())
            .collect::<Result<Vec<Card>, OddsError>>()?;
        let dealer_up_card = dealer_code.parse::<Card>()?;
        Self::new(player_cards, dealer_up_card)
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_up_card(&self) -> Card {
        self.dealer_up_card
    }

    /// The full deck minus every card this situation already accounts for.
    pub fn base_shoe(&self) -> Shoe {
        let mut known = self.player_hand.cards().to_vec();
        known.push(self.dealer_up_card);
        Shoe::without(&known)
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Selected Player Cards: {}, Dealer Card: {}",
            self.player_hand, self.dealer_up_card
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_situation_from_codes() {
        let situation = Situation::parse(&["TH", "7d"], "6S").unwrap();
        assert_eq!(situation.player_hand().total(), 17);
        assert_eq!(situation.dealer_up_card().numeric_value(), 6);
        assert_eq!(situation.base_shoe().len(), 49);
        assert_eq!(
            situation.to_string(),
            "Selected Player Cards: TH 7D, Dealer Card: 6S"
        );
    }

    #[test]
    fn should_reject_empty_player_hand() {
        let codes: [&str; 0] = [];
        assert!(matches!(
            Situation::parse(&codes, "6S"),
            Err(OddsError::InvalidInput(_))
        ));
    }

    #[test]
    fn should_reject_dealer_card_in_player_hand() {
        assert!(matches!(
            Situation::parse(&["TH", "6S"], "6s"),
            Err(OddsError::InvalidInput(_))
        ));
    }

    #[test]
    fn should_reject_duplicate_player_cards() {
        assert!(matches!(
            Situation::parse(&["TH", "th"], "6S"),
            Err(OddsError::InvalidInput(_))
        ));
    }

    #[test]
    fn should_reject_nearly_empty_shoe() {
        let cards: Vec<Card> = (0..46u8).map(|i| Card::try_from(i).unwrap()).collect();
        let dealer = Card::try_from(51).unwrap();
        assert!(matches!(
            Situation::new(cards.clone(), dealer),
            Err(OddsError::InvalidInput(_))
        ));
        assert!(Situation::new(cards[..45].to_vec(), dealer).is_ok());
    }
}
