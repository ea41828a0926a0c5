use crate::{evaluate, Card, Hand, OddsError, Shoe, BLACKJACK, STAND_THRESHOLD};
use serde::Serialize;

/// The result of one simulated round, seen from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Outcome {
    Win,
    Draw,
    Lose,
}

/// Plays one round to its end with the cards dealt from `shoe`.
///
/// The dealer first takes a hole card. A dealer natural ends the round at
/// once. Otherwise the player draws until reaching 17, then the dealer does
/// the same; whoever goes over 21 first loses. Both sides stand on any 17,
/// soft or hard.
///
/// `shoe` is consumed by the draws, so callers should hand in a disposable
/// copy. Returns `OddsError::ExhaustedShoe` if a required draw finds it
/// empty.
pub fn play_round(
    player_hand: &Hand,
    dealer_up_card: Card,
    shoe: &mut Shoe,
) -> Result<Outcome, OddsError> {
    let hole_card = shoe.deal_card().ok_or(OddsError::ExhaustedShoe)?;
    let mut dealer = vec![dealer_up_card, hole_card];

    if evaluate(&dealer) == BLACKJACK {
        if player_hand.total() == BLACKJACK {
            return Ok(Outcome::Draw);
        }
        return Ok(Outcome::Lose);
    }

    let mut player = player_hand.cards().to_vec();
    let player_total = draw_to_threshold(&mut player, shoe)?;
    if player_total > BLACKJACK {
        return Ok(Outcome::Lose);
    }

    let dealer_total = draw_to_threshold(&mut dealer, shoe)?;
    if dealer_total > BLACKJACK {
        return Ok(Outcome::Win);
    }

    let outcome = match player_total.cmp(&dealer_total) {
        std::cmp::Ordering::Greater => Outcome::Win,
        std::cmp::Ordering::Equal => Outcome::Draw,
        std::cmp::Ordering::Less => Outcome::Lose,
    };
    Ok(outcome)
}

/// Draws until the evaluated total reaches the stand threshold and returns
/// that total. Aces are re-evaluated after every card, so only an ace-aware
/// total over 21 counts as bust.
fn draw_to_threshold(cards: &mut Vec<Card>, shoe: &mut Shoe) -> Result<u8, OddsError> {
    let mut total = evaluate(cards);
    while total < STAND_THRESHOLD {
        let card = shoe.deal_card().ok_or(OddsError::ExhaustedShoe)?;
        cards.push(card);
        total = evaluate(cards);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &[&str]) -> Vec<Card> {
        codes.iter().map(|code| code.parse().unwrap()).collect()
    }

    fn hand(codes: &[&str]) -> Hand {
        Hand::new(cards(codes)).unwrap()
    }

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn stacked(codes: &[&str]) -> Shoe {
        Shoe::from_cards(cards(codes))
    }

    #[test]
    fn dealer_natural_beats_seventeen() {
        let mut shoe = stacked(&["KH", "2C", "3C"]);
        let outcome = play_round(&hand(&["9H", "8D"]), card("AS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Lose);
        // Nobody draws after the hole card.
        assert_eq!(shoe.len(), 2);
    }

    #[test]
    fn dealer_natural_pushes_with_player_twenty_one() {
        let mut shoe = stacked(&["KH", "2C"]);
        let outcome = play_round(&hand(&["AH", "KD"]), card("AS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Draw);
    }

    #[test]
    fn player_busts_before_dealer_draws() {
        // Hole 6 gives the dealer 16, but the player busts first.
        let mut shoe = stacked(&["6H", "KC", "5D"]);
        let outcome = play_round(&hand(&["TH", "6D"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Lose);
        assert_eq!(shoe.len(), 1);
    }

    #[test]
    fn dealer_busts() {
        let mut shoe = stacked(&["TH", "9C"]);
        let outcome = play_round(&hand(&["TD", "7D"]), card("6S"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Win);
    }

    #[test]
    fn compares_totals_when_both_stand() {
        let mut shoe = stacked(&["7H"]);
        let outcome = play_round(&hand(&["TD", "8D"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Win);

        let mut shoe = stacked(&["8H"]);
        let outcome = play_round(&hand(&["TD", "8D"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Draw);

        let mut shoe = stacked(&["9H"]);
        let outcome = play_round(&hand(&["TD", "8D"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Lose);
    }

    #[test]
    fn soft_ace_is_reduced_instead_of_busting() {
        // Player A+5 draws a 9: a raw sum of 25, but a legitimate 15 with
        // the ace as 1. Then draws 4 to reach 19. Dealer stands on 18.
        let mut shoe = stacked(&["8H", "9C", "4D"]);
        let outcome = play_round(&hand(&["AH", "5D"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Win);
        assert!(shoe.is_empty());
    }

    #[test]
    fn both_sides_stand_on_soft_seventeen() {
        // Player A+6 stands. Dealer 6 + A is soft 17 and stands as well.
        let mut shoe = stacked(&["AC", "2C"]);
        let outcome = play_round(&hand(&["AH", "6D"]), card("6S"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(shoe.len(), 1);
    }

    #[test]
    fn player_hand_over_twenty_one_loses() {
        let mut shoe = stacked(&["7H"]);
        let outcome = play_round(&hand(&["TD", "8D", "5C"]), card("TS"), &mut shoe).unwrap();
        assert_eq!(outcome, Outcome::Lose);
    }

    #[test]
    fn should_report_exhausted_shoe() {
        let mut shoe = stacked(&[]);
        assert_eq!(
            play_round(&hand(&["TD", "7D"]), card("6S"), &mut shoe),
            Err(OddsError::ExhaustedShoe)
        );

        let mut shoe = stacked(&["5H"]);
        assert_eq!(
            play_round(&hand(&["2D", "3D"]), card("6S"), &mut shoe),
            Err(OddsError::ExhaustedShoe)
        );
    }
}
