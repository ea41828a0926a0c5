use crate::{Card, OddsError, BLACKJACK};

/// Returns the best total of the given cards: every ace starts at 11 and is
/// recounted as 1, one at a time, while the total is over 21.
///
/// The result can still be over 21, which means the hand is bust.
pub fn evaluate(cards: &[Card]) -> u8 {
    let (total, _) = evaluate_with_soft_aces(cards);
    total
}

fn evaluate_with_soft_aces(cards: &[Card]) -> (u8, u8) {
    let mut total: u16 = 0;
    let mut soft_aces: u8 = 0;
    for card in cards {
        let value = card.numeric_value();
        total += value as u16;
        if value == 11 {
            soft_aces += 1;
        }
    }

    while total > BLACKJACK as u16 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    (total.min(u8::MAX as u16) as u8, soft_aces)
}

/// A set of known cards held by one side of the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Fails if the same card appears twice.
    pub fn new(cards: Vec<Card>) -> Result<Hand, OddsError> {
        let mut seen = [false; 52];
        for card in &cards {
            let index: u8 = (*card).into();
            if seen[index as usize] {
                return Err(OddsError::InvalidInput(format!(
                    "card {} is selected more than once",
                    card
                )));
            }
            seen[index as usize] = true;
        }
        Ok(Hand { cards })
    }

    pub fn receive_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn total(&self) -> u8 {
        evaluate(&self.cards)
    }

    pub fn is_bust(&self) -> bool {
        self.total() > BLACKJACK
    }

    /// True when an ace is still being counted as 11.
    pub fn is_soft(&self) -> bool {
        let (_, soft_aces) = evaluate_with_soft_aces(&self.cards);
        soft_aces > 0
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<String> = self.cards.iter().map(|card| card.to_string()).collect();
        write!(f, "{}", codes.join(" "))
    }
}
