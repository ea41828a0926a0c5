use crate::Card;

use rand::seq::SliceRandom;
use rand::Rng;

/// The undealt cards available to a round.
#[derive(Debug, Clone, PartialEq)]
pub struct Shoe {
    cards: Vec<Card>,
    current_index: usize,
}

impl Shoe {
    /// Creates an ordered single deck with the given known cards taken out.
    pub fn without(known: &[Card]) -> Shoe {
        let mut excluded = [false; 52];
        for card in known {
            let index: u8 = (*card).into();
            excluded[index as usize] = true;
        }
        let cards = Card::full_deck()
            .filter(|card| {
                let index: u8 = (*card).into();
                !excluded[index as usize]
            })
            .collect();
        Shoe::from_cards(cards)
    }

    /// Creates a shoe that deals the given cards in order.
    pub fn from_cards(cards: Vec<Card>) -> Shoe {
        Shoe {
            cards,
            current_index: 0,
        }
    }

    /// Returns an independently shuffled copy holding the cards not yet dealt.
    /// The original shoe is left untouched.
    pub fn shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Shoe {
        let mut cards = self.cards[self.current_index..].to_vec();
        cards.shuffle(rng);
        Shoe::from_cards(cards)
    }

    /// Deals a card if the shoe is not empty. Returns None if empty.
    pub fn deal_card(&mut self) -> Option<Card> {
        let card = self.cards.get(self.current_index).copied();
        if card.is_some() {
            self.current_index += 1;
        }
        card
    }

    pub fn len(&self) -> usize {
        self.cards.len() - self.current_index
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards[self.current_index..].contains(card)
    }
}
