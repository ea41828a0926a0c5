use crate::OddsError;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Suit {
    Spade = 0,
    Heart,
    Diamond,
    Club,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter)]
pub enum Rank {
    Two = 0,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

static RANK_TO_NUMERIC_VALUE: [u8; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10, 11];

impl Rank {
    /// Ace counts 11 here. Reducing it to 1 is the hand evaluator's job.
    pub fn numeric_value(&self) -> u8 {
        RANK_TO_NUMERIC_VALUE[*self as usize]
    }

    fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Two,
            '3' => Rank::Three,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }

    fn to_char(self) -> char {
        match self {
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }
}

impl Suit {
    fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'd' => Some(Suit::Diamond),
            'c' => Some(Suit::Club),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Suit::Spade => 'S',
            Suit::Heart => 'H',
            Suit::Diamond => 'D',
            Suit::Club => 'C',
        }
    }
}

/// A single physical card. Two cards of the same rank but different suits are
/// different cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    pub fn numeric_value(&self) -> u8 {
        self.rank.numeric_value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }

    /// All 52 cards of a standard deck, suit by suit.
    pub fn full_deck() -> impl Iterator<Item = Card> {
        Suit::iter().flat_map(|suit| Rank::iter().map(move |rank| Card { rank, suit }))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.to_char(), self.suit.to_char())
    }
}

impl std::str::FromStr for Card {
    type Err = OddsError;

    /// Parses a rank-then-suit code such as `"TH"`, `"as"` or `"10d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OddsError::InvalidInput(format!("invalid card code {:?}", s));
        let code = s.trim();
        let (rank_part, suit_part) = match code.char_indices().last() {
            Some((idx, _)) if idx > 0 => code.split_at(idx),
            _ => return Err(invalid()),
        };

        let rank = match rank_part {
            "10" => Rank::Ten,
            _ => {
                let mut chars = rank_part.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Rank::from_char(c).ok_or_else(invalid)?,
                    _ => return Err(invalid()),
                }
            }
        };
        let suit = suit_part
            .chars()
            .next()
            .and_then(Suit::from_char)
            .ok_or_else(invalid)?;

        Ok(Card { rank, suit })
    }
}

impl From<Card> for u8 {
    fn from(card: Card) -> u8 {
        card.suit as u8 * 13 + card.rank as u8
    }
}

impl TryFrom<u8> for Card {
    type Error = OddsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= 52 {
            return Err(OddsError::InvalidInput(format!(
                "card index {} is out of range",
                value
            )));
        }
        let suit = Suit::iter().nth((value / 13) as usize);
        let rank = Rank::iter().nth((value % 13) as usize);
        match (rank, suit) {
            (Some(rank), Some(suit)) => Ok(Card { rank, suit }),
            _ => Err(OddsError::InvalidInput(format!(
                "card index {} is out of range",
                value
            ))),
        }
    }
}
