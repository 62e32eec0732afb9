use std::hint::black_box;

use blackjack_rs::cards::{Card, Rank, Suit};
use blackjack_rs::game::round_outcome;
use blackjack_rs::score::hand_value;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_hand_value(c: &mut Criterion) {
    let hard = [
        Card::new(Rank::King, Suit::Hearts),
        Card::new(Rank::Seven, Suit::Diamonds),
        Card::new(Rank::Four, Suit::Spades),
    ];
    let soft = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Five, Suit::Hearts),
        Card::new(Rank::Three, Suit::Clubs),
    ];
    let many_aces = [
        Card::new(Rank::Ace, Suit::Spades),
        Card::new(Rank::Ace, Suit::Hearts),
        Card::new(Rank::Ace, Suit::Diamonds),
        Card::new(Rank::Ace, Suit::Clubs),
        Card::new(Rank::Seven, Suit::Spades),
    ];

    let mut g = c.benchmark_group("hand_value");
    g.bench_with_input(BenchmarkId::new("hard", "K,7,4"), &hard[..], |b, input| {
        b.iter(|| hand_value(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("soft", "A,5,3"), &soft[..], |b, input| {
        b.iter(|| hand_value(black_box(input)))
    });
    g.bench_with_input(BenchmarkId::new("aces", "A,A,A,A,7"), &many_aces[..], |b, input| {
        b.iter(|| hand_value(black_box(input)))
    });
    g.finish();
}

fn bench_round_outcome(c: &mut Criterion) {
    c.bench_function("round_outcome_grid", |b| {
        b.iter(|| {
            for player in 2..=26u32 {
                for dealer in 2..=26u32 {
                    black_box(round_outcome(black_box(player), black_box(dealer)));
                }
            }
        })
    });
}

criterion_group!(benches, bench_hand_value, bench_round_outcome);
criterion_main!(benches);
