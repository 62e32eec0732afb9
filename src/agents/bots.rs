use crate::engine::TableEngine;
use crate::game::Phase;
use crate::score::is_soft;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::time::{Duration, Instant};

use super::{AgentKind, PlayerAgent};

/// Play styles for the autoplay bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum BotStyle {
    Cautious,
    Standard,
    Aggressive,
}

/// Configuration for the bot's betting and drawing habits.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct BotProfile {
    pub style: BotStyle,
    /// Stand once the hand value reaches this total.
    pub stand_at: u32,
    /// Whether to double down on a hard 10 or 11.
    pub double_down: bool,
    /// Flat bet per round, clamped to the bankroll.
    pub flat_bet: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub rng_seed: Option<u64>,
}

impl BotProfile {
    /// Create a profile with tuned defaults for a play style.
    pub fn for_style(style: BotStyle) -> Self {
        let (stand_at, double_down, flat_bet) = match style {
            BotStyle::Cautious => (15, false, 5),
            BotStyle::Standard => (17, true, 10),
            BotStyle::Aggressive => (18, true, 25),
        };
        Self {
            style,
            stand_at,
            double_down,
            flat_bet,
            min_delay_ms: 0,
            max_delay_ms: 0,
            rng_seed: None,
        }
    }

    /// Set a deterministic RNG seed for reproducible pacing.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

impl Default for BotProfile {
    fn default() -> Self {
        Self::for_style(BotStyle::Standard)
    }
}

#[derive(Debug)]
struct BotState {
    rng: StdRng,
}

impl BotState {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(v) => StdRng::seed_from_u64(v),
            None => {
                let mut seed = [0u8; 32];
                rand::rng().fill_bytes(&mut seed);
                StdRng::from_seed(seed)
            }
        };
        Self { rng }
    }
}

/// An autoplay agent that bets flat and draws to a fixed threshold,
/// doubling on hard 10/11 when its profile allows.
pub struct BotAgent {
    profile: BotProfile,
    state: BotState,
    next_action_at: Option<Instant>,
}

impl BotAgent {
    pub fn new(profile: BotProfile) -> Self {
        let state = BotState::new(profile.rng_seed);
        Self { profile, state, next_action_at: None }
    }

    fn wants_double(&self, engine: &dyn TableEngine) -> bool {
        if !self.profile.double_down || !engine.can_double_down() {
            return false;
        }
        let value = engine.player_value();
        (10..=11).contains(&value) && !is_soft(engine.player_hand())
    }
}

impl PlayerAgent for BotAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Bot
    }
    fn on_turn(
        &mut self,
        engine: &mut dyn TableEngine,
    ) -> Result<bool, crate::game::ActionError> {
        let now = Instant::now();
        let delay = choose_delay_ms(&self.profile, &mut self.state);
        if delay > 0 {
            match self.next_action_at {
                None => {
                    self.next_action_at = Some(now + Duration::from_millis(delay));
                    return Ok(false);
                }
                Some(next) if now < next => {
                    return Ok(false);
                }
                Some(_) => {}
            }
        }
        self.next_action_at = None;

        match engine.phase() {
            Phase::Betting => {
                let balance = engine.balance();
                if balance == 0 {
                    return Ok(false);
                }
                engine.place_bet(self.profile.flat_bet.clamp(1, balance)).map(|_| true)
            }
            Phase::Dealing => engine.deal().map(|_| true),
            Phase::PlayerTurn => {
                if self.wants_double(engine) {
                    let raise = engine.double_down_max();
                    engine.action_double_down(raise).map(|_| true)
                } else if engine.player_value() < self.profile.stand_at {
                    engine.action_hit().map(|_| true)
                } else {
                    engine.action_stand().map(|_| true)
                }
            }
            Phase::DealerTurn => engine.dealer_step().map(|_| true),
            Phase::Settlement => engine.settle().map(|_| true),
            Phase::Done => {
                if engine.can_start_round() {
                    engine.new_round().map(|_| true)
                } else {
                    Ok(false)
                }
            }
        }
    }
}

fn choose_delay_ms(profile: &BotProfile, state: &mut BotState) -> u64 {
    let min = profile.min_delay_ms;
    let max = profile.max_delay_ms.max(min);
    if max == min {
        min
    } else {
        state.rng.random_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;
    use crate::game::{Outcome, Table};

    fn scripted_table(bankroll: u64, draws: &str) -> Table {
        let mut cards = parse_cards(draws).unwrap();
        cards.reverse();
        let mut t = Table::new(bankroll);
        t.set_next_deck(Deck::from_cards(cards));
        t
    }

    fn drive_to_done(bot: &mut BotAgent, table: &mut Table) {
        for _ in 0..32 {
            if matches!(table.phase(), Phase::Done) {
                return;
            }
            bot.on_turn(table).unwrap();
        }
        panic!("bot did not finish the round");
    }

    #[test]
    fn standard_bot_plays_a_round_to_done() {
        // Dealer 10+7 stands at 17; player 9+5 hits 6 to 20 and stands.
        let mut t = scripted_table(100, "10c 7c 9d 5h 6s");
        let mut bot = BotAgent::new(BotProfile::default().with_seed(7));
        drive_to_done(&mut bot, &mut t);
        assert_eq!(t.outcome(), Some(Outcome::PlayerWin));
        assert_eq!(t.balance(), 110);
    }

    #[test]
    fn standard_bot_doubles_on_hard_eleven() {
        // Player 6+5 = hard 11; doubles, draws 10 to 21; dealer stands at 17.
        let mut t = scripted_table(100, "10c 7c 6d 5h 10s");
        let mut bot = BotAgent::new(BotProfile::default().with_seed(7));
        drive_to_done(&mut bot, &mut t);
        assert!(t.doubled());
        assert_eq!(t.bet(), 20);
        assert_eq!(t.balance(), 120);
    }

    #[test]
    fn cautious_bot_never_doubles() {
        let mut t = scripted_table(100, "10c 7c 6d 5h 10s 2s");
        let mut bot = BotAgent::new(BotProfile::for_style(BotStyle::Cautious).with_seed(7));
        drive_to_done(&mut bot, &mut t);
        assert!(!t.doubled());
    }

    #[test]
    fn delay_throttles_actions() {
        let mut t = scripted_table(100, "10c 7c 9d 5h 6s");
        let mut profile = BotProfile::default().with_seed(7);
        profile.min_delay_ms = 15;
        profile.max_delay_ms = 15;
        let mut bot = BotAgent::new(profile);

        // First tick schedules the bot and does not act yet.
        assert!(!bot.on_turn(&mut t).unwrap());
        assert_eq!(t.phase(), Phase::Betting);

        std::thread::sleep(Duration::from_millis(20));
        assert!(bot.on_turn(&mut t).unwrap());
        assert_eq!(t.phase(), Phase::Dealing);
    }
}
