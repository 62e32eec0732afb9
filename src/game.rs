use crate::bankroll::Bankroll;
use crate::cards::Card;
use crate::dealer::dealer_should_hit;
use crate::deck::{Deck, DeckError};
use crate::score::{hand_value, is_bust, BLACKJACK};
use rand::Rng;

/// Phases of one round. A round walks Betting → Dealing → PlayerTurn →
/// (DealerTurn) → Settlement → Done; a player bust jumps straight from
/// PlayerTurn to Settlement and the dealer's hand is never extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Phase {
    Betting,
    Dealing,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Done,
}

/// How a settled round resolved, from the player's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Outcome {
    DealerBust,
    PlayerWin,
    DealerWin,
    Push,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::DealerBust => "Dealer busts",
            Outcome::PlayerWin => "You win",
            Outcome::DealerWin => "You lose",
            Outcome::Push => "Push",
        }
    }

    /// Signed bankroll change for this outcome at the given bet.
    pub fn delta(self, bet: u64) -> i64 {
        match self {
            Outcome::DealerBust | Outcome::PlayerWin => bet as i64,
            Outcome::DealerWin => -(bet as i64),
            Outcome::Push => 0,
        }
    }
}

/// Resolve final hand values into an outcome. Branch order is load-bearing:
/// dealer bust is checked first, then player bust-or-lower. A busted player
/// cannot reach the dealer-bust arm because the dealer stops drawing the
/// moment the player busts, and no two-card hand exceeds 21.
pub fn round_outcome(player_value: u32, dealer_value: u32) -> Outcome {
    if dealer_value > BLACKJACK {
        Outcome::DealerBust
    } else if player_value > BLACKJACK || player_value < dealer_value {
        Outcome::DealerWin
    } else if player_value > dealer_value {
        Outcome::PlayerWin
    } else {
        Outcome::Push
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("action not legal in the {phase:?} phase")]
    WrongPhase { phase: Phase },
    #[error("amount too small: min {min}, got {got}")]
    AmountTooSmall { min: u64, got: u64 },
    #[error("amount too large: max {max}, got {got}")]
    AmountTooLarge { max: u64, got: u64 },
    #[error("double down requires a two-card hand and bankroll to cover it")]
    DoubleDownUnavailable,
    #[error("bankroll is exhausted")]
    Bankrupt,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Seat {
    Player,
    Dealer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundLogVerb {
    Bet,
    Hit,
    Stand,
    DoubleDown,
    Bust,
    Win,
    Lose,
    Push,
}

impl RoundLogVerb {
    pub fn label(self) -> &'static str {
        match self {
            RoundLogVerb::Bet => "Bet",
            RoundLogVerb::Hit => "Hit",
            RoundLogVerb::Stand => "Stand",
            RoundLogVerb::DoubleDown => "Double down",
            RoundLogVerb::Bust => "Bust",
            RoundLogVerb::Win => "Win",
            RoundLogVerb::Lose => "Lose",
            RoundLogVerb::Push => "Push",
        }
    }
}

/// One notification to the output side: who did what, with which card or
/// amount where that applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundLogEntry {
    pub seat: Seat,
    pub verb: RoundLogVerb,
    pub card: Option<Card>,
    pub amount: Option<u64>,
}

/// A blackjack table: one player seat against the house, with a bankroll
/// that persists across rounds. Per-round state (deck, hands, bet) is
/// rebuilt by `new_round`.
#[derive(Debug)]
#[non_exhaustive]
pub struct Table {
    pub(crate) bankroll: Bankroll,
    pub(crate) deck: Deck,
    pub(crate) dealer_hand: Vec<Card>,
    pub(crate) player_hand: Vec<Card>,
    pub(crate) bet: u64,
    pub(crate) doubled: bool,
    pub(crate) phase: Phase,
    pub(crate) outcome: Option<Outcome>,
    pub(crate) rounds_played: u64,
    next_deck: Option<Deck>,
    round_log: Vec<RoundLogEntry>,
}

impl Table {
    pub fn new(starting_bankroll: u64) -> Self {
        Self {
            bankroll: Bankroll::new(starting_bankroll),
            deck: Deck::standard(),
            dealer_hand: Vec::new(),
            player_hand: Vec::new(),
            bet: 0,
            doubled: false,
            phase: Phase::Betting,
            outcome: None,
            rounds_played: 0,
            next_deck: None,
            round_log: Vec::new(),
        }
    }

    /// Current bankroll balance.
    pub fn balance(&self) -> u64 {
        self.bankroll.balance()
    }

    /// The bet committed to the current round (after any double-down raise).
    pub fn bet(&self) -> u64 {
        self.bet
    }

    /// Whether the current round's bet was raised by a double-down.
    pub fn doubled(&self) -> bool {
        self.doubled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The settled outcome, present once the round reaches Done.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn rounds_played(&self) -> u64 {
        self.rounds_played
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &[Card] {
        &self.dealer_hand
    }

    pub fn player_value(&self) -> u32 {
        hand_value(&self.player_hand)
    }

    pub fn dealer_value(&self) -> u32 {
        hand_value(&self.dealer_hand)
    }

    /// Whether a new round may start: the session ends when the bankroll is
    /// gone. The caller checks this before `new_round`.
    pub fn can_start_round(&self) -> bool {
        !self.bankroll.is_broke()
    }

    /// Upper bound for the double-down raise: min(bet, balance − bet), the
    /// bound the house enforces here. Zero means the move is unavailable.
    pub fn double_down_max(&self) -> u64 {
        self.bet.min(self.bankroll.balance().saturating_sub(self.bet))
    }

    pub fn can_double_down(&self) -> bool {
        matches!(self.phase, Phase::PlayerTurn)
            && self.player_hand.len() == 2
            && self.double_down_max() >= 1
    }

    /// Queue an exact deck for the next deal instead of a fresh shuffle.
    /// Lets tests and demos script rounds card by card.
    pub fn set_next_deck(&mut self, deck: Deck) {
        self.next_deck = Some(deck);
    }

    pub fn history_recent(&self, n: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.round_log.len();
        let start = len.saturating_sub(n);
        self.round_log[start..].to_vec()
    }

    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<RoundLogEntry> {
        if n == 0 {
            return Vec::new();
        }
        let len = self.round_log.len();
        if len == 0 {
            return Vec::new();
        }
        let max_offset = len.saturating_sub(n);
        let offset = offset.min(max_offset);
        let end = len.saturating_sub(offset);
        let start = end.saturating_sub(n);
        self.round_log[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.round_log.len()
    }

    /// Reset per-round state and return to Betting. Refused when the
    /// bankroll is exhausted: that is the session's game-over signal.
    pub fn new_round(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Betting | Phase::Done) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        if self.bankroll.is_broke() {
            return Err(ActionError::Bankrupt);
        }
        self.dealer_hand.clear();
        self.player_hand.clear();
        self.bet = 0;
        self.doubled = false;
        self.outcome = None;
        self.round_log.clear();
        self.phase = Phase::Betting;
        Ok(())
    }

    /// Commit the round's bet. Checked against the bankroll before any card
    /// is dealt; a valid bet moves the round to Dealing.
    pub fn place_bet(&mut self, amount: u64) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Betting) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        if self.bankroll.is_broke() {
            return Err(ActionError::Bankrupt);
        }
        if amount < 1 {
            return Err(ActionError::AmountTooSmall { min: 1, got: amount });
        }
        if !self.bankroll.can_bet(amount) {
            return Err(ActionError::AmountTooLarge { max: self.bankroll.balance(), got: amount });
        }
        self.bet = amount;
        self.log(Seat::Player, RoundLogVerb::Bet, None, Some(amount));
        self.phase = Phase::Dealing;
        Ok(())
    }

    /// Deal the opening hands from a fresh deck: two cards to the dealer,
    /// then two to the player.
    pub fn deal(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::Dealing) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        self.deck = match self.next_deck.take() {
            Some(deck) => deck,
            None => {
                let mut deck = Deck::standard();
                let seed: u64 = rand::rng().random();
                deck.shuffle_seeded(seed);
                deck
            }
        };
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.dealer_hand.push(card);
        }
        for _ in 0..2 {
            let card = self.deck.draw()?;
            self.player_hand.push(card);
        }
        self.phase = Phase::PlayerTurn;
        Ok(())
    }

    /// Draw one card for the player. A bust ends the turn immediately and
    /// the round settles without the dealer drawing.
    pub fn action_hit(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::PlayerTurn) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        self.player_draw()?;
        Ok(())
    }

    /// End the player's turn and hand control to the dealer.
    pub fn action_stand(&mut self) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::PlayerTurn) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        self.log(Seat::Player, RoundLogVerb::Stand, None, None);
        self.phase = Phase::DealerTurn;
        Ok(())
    }

    /// Raise the bet by `additional`, take exactly one forced card, then
    /// stand. Only legal as the first action of the turn (two-card hand)
    /// and within the house bound min(bet, balance − bet).
    pub fn action_double_down(&mut self, additional: u64) -> Result<(), ActionError> {
        if !matches!(self.phase, Phase::PlayerTurn) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        let max = self.double_down_max();
        if self.player_hand.len() != 2 || max == 0 {
            return Err(ActionError::DoubleDownUnavailable);
        }
        if additional < 1 {
            return Err(ActionError::AmountTooSmall { min: 1, got: additional });
        }
        if additional > max {
            return Err(ActionError::AmountTooLarge { max, got: additional });
        }
        self.bet += additional;
        self.doubled = true;
        self.log(Seat::Player, RoundLogVerb::DoubleDown, None, Some(additional));
        self.player_draw()?;
        if matches!(self.phase, Phase::PlayerTurn) {
            // Forced stand: the single extra card ends the turn either way.
            self.phase = Phase::DealerTurn;
        }
        Ok(())
    }

    fn player_draw(&mut self) -> Result<(), ActionError> {
        let card = self.deck.draw()?;
        self.player_hand.push(card);
        self.log(Seat::Player, RoundLogVerb::Hit, Some(card), None);
        if is_bust(&self.player_hand) {
            self.log(Seat::Player, RoundLogVerb::Bust, None, None);
            self.phase = Phase::Settlement;
        }
        Ok(())
    }

    /// Advance the dealer by one policy decision. Returns whether a card was
    /// drawn; once the dealer stands or busts the round moves to Settlement.
    /// Stepped (rather than looped internally) so a frontend can show the
    /// dealer's draws one at a time.
    pub fn dealer_step(&mut self) -> Result<bool, ActionError> {
        if !matches!(self.phase, Phase::DealerTurn) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        if !dealer_should_hit(&self.dealer_hand) {
            self.phase = Phase::Settlement;
            return Ok(false);
        }
        let card = self.deck.draw()?;
        self.dealer_hand.push(card);
        self.log(Seat::Dealer, RoundLogVerb::Hit, Some(card), None);
        if is_bust(&self.dealer_hand) {
            self.log(Seat::Dealer, RoundLogVerb::Bust, None, None);
            self.phase = Phase::Settlement;
        }
        Ok(true)
    }

    /// Run the dealer's whole turn without pacing.
    pub fn play_dealer(&mut self) -> Result<(), ActionError> {
        while matches!(self.phase, Phase::DealerTurn) {
            self.dealer_step()?;
        }
        Ok(())
    }

    /// Resolve the round: compute the outcome from final hand values and
    /// apply the bet to the bankroll. Consumes the Settlement phase.
    pub fn settle(&mut self) -> Result<Outcome, ActionError> {
        if !matches!(self.phase, Phase::Settlement) {
            return Err(ActionError::WrongPhase { phase: self.phase });
        }
        let outcome = round_outcome(self.player_value(), self.dealer_value());
        self.bankroll.apply(outcome.delta(self.bet));
        let (verb, amount) = match outcome {
            Outcome::DealerBust | Outcome::PlayerWin => (RoundLogVerb::Win, Some(self.bet)),
            Outcome::DealerWin => (RoundLogVerb::Lose, Some(self.bet)),
            Outcome::Push => (RoundLogVerb::Push, None),
        };
        self.log(Seat::Player, verb, None, amount);
        self.outcome = Some(outcome);
        self.rounds_played += 1;
        self.phase = Phase::Done;
        Ok(outcome)
    }

    fn log(&mut self, seat: Seat, verb: RoundLogVerb, card: Option<Card>, amount: Option<u64>) {
        self.round_log.push(RoundLogEntry { seat, verb, card, amount });
    }
}
