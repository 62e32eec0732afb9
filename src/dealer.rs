//! The house's fixed drawing rule.

use crate::cards::Card;
use crate::score::hand_value;

/// The dealer stands at this value or above.
pub const DEALER_STANDS_AT: u32 = 16;

/// Whether the dealer draws another card. Deterministic: hit strictly below
/// 16, stand otherwise. A busted hand is never below 16, so the same test
/// also terminates the dealer's drawing loop.
pub fn dealer_should_hit(hand: &[Card]) -> bool {
    hand_value(hand) < DEALER_STANDS_AT
}
