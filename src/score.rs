//! Hand scoring: the best attainable blackjack value of a set of cards.
//!
//! Non-ace cards count at fixed face value (J/Q/K = 10). Every ace starts at
//! 1; each one is then upgraded by +10 while doing so keeps the total at or
//! below 21. Upgrades are independent and identical, so this greedy pass
//! yields the maximum value not exceeding 21 whenever one exists, and the
//! all-aces-low sum (still a bust) otherwise.

use crate::cards::Card;

/// The bust threshold.
pub const BLACKJACK: u32 = 21;

/// Best attainable value of `cards` under ace-flexibility rules.
///
/// ```
/// use blackjack_rs::cards::parse_cards;
/// use blackjack_rs::score::hand_value;
///
/// let hand = parse_cards("10s Ah").unwrap();
/// assert_eq!(hand_value(&hand), 21);
/// ```
pub fn hand_value(cards: &[Card]) -> u32 {
    let mut value = 0u32;
    let mut aces = 0u32;
    for card in cards {
        if card.rank().is_ace() {
            aces += 1;
        } else {
            value += card.rank().point_value();
        }
    }

    value += aces;
    for _ in 0..aces {
        if value + 10 <= BLACKJACK {
            value += 10;
        }
    }
    value
}

/// Whether the hand's value exceeds 21.
pub fn is_bust(cards: &[Card]) -> bool {
    hand_value(cards) > BLACKJACK
}

/// Whether the hand counts an ace at 11 (a "soft" total). Display-only.
pub fn is_soft(cards: &[Card]) -> bool {
    let low: u32 = cards.iter().map(|c| c.rank().point_value()).sum();
    cards.iter().any(|c| c.rank().is_ace()) && hand_value(cards) == low + 10
}
