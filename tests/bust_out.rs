use blackjack_rs::cards::parse_cards;
use blackjack_rs::deck::Deck;
use blackjack_rs::game::{ActionError, Outcome, Phase, Table};

fn losing_round(t: &mut Table, bet: u64) {
    // Dealer 20, player stands on 17.
    let mut cards = parse_cards("10s 10h 10d 7d").unwrap();
    cards.reverse();
    t.set_next_deck(Deck::from_cards(cards));
    t.place_bet(bet).unwrap();
    t.deal().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    assert_eq!(t.settle().unwrap(), Outcome::DealerWin);
}

#[test]
fn losing_the_whole_bankroll_ends_the_session() {
    let mut t = Table::new(100);
    losing_round(&mut t, 60);
    assert_eq!(t.balance(), 40);
    t.new_round().unwrap();
    losing_round(&mut t, 40);
    assert_eq!(t.balance(), 0);

    assert_eq!(t.phase(), Phase::Done);
    assert!(!t.can_start_round());
    assert!(matches!(t.new_round(), Err(ActionError::Bankrupt)));
    // The refusal leaves the finished round intact.
    assert_eq!(t.phase(), Phase::Done);
    assert_eq!(t.outcome(), Some(Outcome::DealerWin));
}

#[test]
fn a_broke_table_refuses_bets() {
    let mut t = Table::new(100);
    losing_round(&mut t, 100);
    assert_eq!(t.balance(), 0);
    assert!(matches!(t.place_bet(10), Err(ActionError::WrongPhase { phase: Phase::Done })));
}

#[test]
fn push_keeps_a_one_chip_bankroll_alive() {
    let mut t = Table::new(1);
    let mut cards = parse_cards("10s 9s 10h 9h").unwrap();
    cards.reverse();
    t.set_next_deck(Deck::from_cards(cards));
    t.place_bet(1).unwrap();
    t.deal().unwrap();
    t.action_stand().unwrap();
    t.play_dealer().unwrap();
    assert_eq!(t.settle().unwrap(), Outcome::Push);
    assert_eq!(t.balance(), 1);
    assert!(t.can_start_round());
    t.new_round().unwrap();
}
