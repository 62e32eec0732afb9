use blackjack_rs::cards::{parse_cards, Card, Rank, Suit};
use blackjack_rs::score::{hand_value, is_bust, is_soft, BLACKJACK};
use proptest::prelude::*;

prop_compose! {
    fn any_rank()(v in 0usize..13) -> Rank {
        Rank::ALL[v]
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop_oneof![Just(Suit::Clubs), Just(Suit::Diamonds), Just(Suit::Hearts), Just(Suit::Spades),]
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

/// Best achievable total by brute force: try every way to count each ace
/// as 1 or 11, and keep the highest total that does not bust (or the
/// lowest total when everything busts).
fn brute_force_value(cards: &[Card]) -> u32 {
    let ace_count = cards.iter().filter(|c| c.rank().is_ace()).count();
    let base: u32 = cards
        .iter()
        .filter(|c| !c.rank().is_ace())
        .map(|c| c.rank().point_value())
        .sum();
    let mut best_ok: Option<u32> = None;
    let mut min_total = u32::MAX;
    for highs in 0..=ace_count as u32 {
        let total = base + highs * 11 + (ace_count as u32 - highs);
        min_total = min_total.min(total);
        if total <= BLACKJACK {
            best_ok = Some(best_ok.map_or(total, |b: u32| b.max(total)));
        }
    }
    best_ok.unwrap_or(min_total)
}

proptest! {
    #[test]
    fn greedy_ace_scoring_matches_brute_force(cards in proptest::collection::vec(any_card(), 0..9)) {
        prop_assert_eq!(hand_value(&cards), brute_force_value(&cards));
    }

    #[test]
    fn value_never_busts_when_an_ace_demotion_could_save_it(
        cards in proptest::collection::vec(any_card(), 1..9)
    ) {
        let value = hand_value(&cards);
        if value > BLACKJACK {
            // Busted means even all-low aces cannot get under 21.
            let floor: u32 = cards
                .iter()
                .map(|c| if c.rank().is_ace() { 1 } else { c.rank().point_value() })
                .sum();
            prop_assert!(floor > BLACKJACK);
            prop_assert_eq!(value, floor);
        }
    }

    #[test]
    fn adding_a_card_never_lowers_the_bustable_floor(
        cards in proptest::collection::vec(any_card(), 1..8),
        extra in any_card()
    ) {
        let before = hand_value(&cards);
        let mut more = cards.clone();
        more.push(extra);
        let after = hand_value(&more);
        // A new card can drop the displayed value (ace demotion) but
        // never below the pre-draw value minus the 10-point demotion.
        prop_assert!(after + 10 >= before);
    }

    #[test]
    fn bust_flag_tracks_the_value(cards in proptest::collection::vec(any_card(), 0..9)) {
        prop_assert_eq!(is_bust(&cards), hand_value(&cards) > BLACKJACK);
    }
}

#[test]
fn scoring_scenarios() {
    let cases = [
        ("10s ah", 21),
        ("as ah", 12),
        ("ks qh 2d", 22),
        ("ks qh 5d ah", 26),
        ("as ah ad ac", 14),
        ("9s ah", 20),
        ("9s ah ad", 21),
        ("5c 6d", 11),
        ("", 0),
    ];
    for (hand, expected) in cases {
        let cards = parse_cards(hand).unwrap();
        assert_eq!(hand_value(&cards), expected, "hand {hand:?}");
    }
}

#[test]
fn soft_hands_hold_a_high_ace() {
    assert!(is_soft(&parse_cards("as 6h").unwrap()));
    assert!(is_soft(&parse_cards("10s ah").unwrap()));
    assert!(!is_soft(&parse_cards("as 6h 10d").unwrap()), "the ace dropped to 1");
    assert!(!is_soft(&parse_cards("10s 7h").unwrap()));
    assert!(!is_soft(&[]));
}
