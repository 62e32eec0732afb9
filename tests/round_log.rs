use blackjack_rs::cards::{parse_cards, Card};
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{RoundLogVerb, Seat, Table};

fn scripted_table(bankroll: u64, draws: &str) -> Table {
    let mut cards = parse_cards(draws).unwrap();
    cards.reverse();
    let mut t = Table::new(bankroll);
    t.set_next_deck(Deck::from_cards(cards));
    t
}

fn card(s: &str) -> Card {
    s.parse().unwrap()
}

#[test]
fn a_full_round_is_narrated_in_order() {
    // Dealer 14 hits a 3 for 17; player 15 hits a 3 for 18 and stands.
    let mut t = scripted_table(100, "10s 4s 10h 5h 3d 3c");
    t.place_bet(20).unwrap();
    t.deal().unwrap();
    t.action_hit().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    t.settle().unwrap();

    let entries = t.history_recent(10);
    assert_eq!(entries.len(), t.history_len());
    let summary: Vec<(Seat, RoundLogVerb)> = entries.iter().map(|e| (e.seat, e.verb)).collect();
    assert_eq!(
        summary,
        vec![
            (Seat::Player, RoundLogVerb::Bet),
            (Seat::Player, RoundLogVerb::Hit),
            (Seat::Player, RoundLogVerb::Stand),
            (Seat::Dealer, RoundLogVerb::Hit),
            (Seat::Player, RoundLogVerb::Win),
        ]
    );
    assert_eq!(entries[0].amount, Some(20));
    assert_eq!(entries[1].card, Some(card("3d")));
    assert_eq!(entries[3].card, Some(card("3c")));
    assert_eq!(entries[4].amount, Some(20));
}

#[test]
fn busts_are_logged() {
    let mut t = scripted_table(100, "10s 9s 10h 8h kd");
    t.place_bet(10).unwrap();
    t.deal().unwrap();
    t.action_hit().unwrap();
    t.settle().unwrap();

    let verbs: Vec<RoundLogVerb> = t.history_recent(10).iter().map(|e| e.verb).collect();
    assert_eq!(
        verbs,
        vec![
            RoundLogVerb::Bet,
            RoundLogVerb::Hit,
            RoundLogVerb::Bust,
            RoundLogVerb::Lose,
        ]
    );
}

#[test]
fn push_is_logged_without_an_amount() {
    let mut t = scripted_table(100, "10s 9s 10h 9h");
    t.place_bet(10).unwrap();
    t.deal().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    t.settle().unwrap();

    let last = *t.history_recent(1).last().unwrap();
    assert_eq!(last.verb, RoundLogVerb::Push);
    assert_eq!(last.amount, None);
}

#[test]
fn recent_window_and_offset_page_backwards() {
    let mut t = scripted_table(100, "10s 4s 10h 5h 3d 3c");
    t.place_bet(20).unwrap();
    t.deal().unwrap();
    t.action_hit().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    t.settle().unwrap();
    assert_eq!(t.history_len(), 5);

    let last_two = t.history_recent(2);
    assert_eq!(last_two.len(), 2);
    assert_eq!(last_two[1].verb, RoundLogVerb::Win);

    let offset_one = t.history_recent_offset(2, 1);
    assert_eq!(offset_one[1].verb, RoundLogVerb::Hit);
    assert_eq!(offset_one[1].seat, Seat::Dealer);

    // Offsets past the start clamp to the oldest entries.
    let clamped = t.history_recent_offset(3, 100);
    assert_eq!(clamped[0].verb, RoundLogVerb::Bet);
}

#[test]
fn new_round_clears_the_log() {
    let mut t = scripted_table(100, "10s 9s 10h 9h");
    t.place_bet(10).unwrap();
    t.deal().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    t.settle().unwrap();
    assert!(t.history_len() > 0);
    t.new_round().unwrap();
    assert_eq!(t.history_len(), 0);
}
