//! Agents: pluggable controllers for the player seat.
//!
//! This module introduces a small trait `PlayerAgent` and a holder
//! `AgentSeat` that throttles and drives whichever agent controls the seat.
//! It lives in the library so frontends stay thin: the TUI queues intents
//! into a `HumanAgent`, and autoplay swaps in a `BotAgent`, without either
//! touching table internals.

use crate::engine::TableEngine;
use core::fmt;
use std::time::{Duration, Instant};

/// Kinds of agents attached to the seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AgentKind {
    Human,
    Bot,
}

/// Seat-level action intents, typically produced by a UI for a human player.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub enum Action {
    Bet(u64),
    Hit,
    Stand,
    DoubleDown(u64),
}

/// A seat controller that can act when the table is waiting on the player.
pub trait PlayerAgent {
    /// Called when the engine may need a decision. Implementations may
    /// throttle internally. Returns whether an action was taken.
    fn on_turn(
        &mut self,
        engine: &mut dyn TableEngine,
    ) -> Result<bool, crate::game::ActionError>;
    /// The kind of this agent (human, bot).
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    /// Optionally receive a seat-intent action; default is to ignore and return false.
    fn receive(&mut self, _action: Action) -> bool {
        false
    }
}

mod bots;

pub use bots::{BotAgent, BotProfile, BotStyle};

/// A simple agent that executes user-intended actions when the table waits.
pub struct HumanAgent {
    pending: Option<Action>,
}

impl HumanAgent {
    pub fn new() -> Self {
        Self { pending: None }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerAgent for HumanAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::Human
    }
    fn receive(&mut self, action: Action) -> bool {
        if self.pending.is_some() {
            return false;
        }
        self.pending = Some(action);
        true
    }
    fn on_turn(
        &mut self,
        engine: &mut dyn TableEngine,
    ) -> Result<bool, crate::game::ActionError> {
        if matches!(engine.phase(), crate::game::Phase::Done) {
            self.pending = None;
            return Ok(false);
        }
        if let Some(act) = self.pending.take() {
            return match act {
                Action::Bet(amount) => engine.place_bet(amount),
                Action::Hit => engine.action_hit(),
                Action::Stand => engine.action_stand(),
                Action::DoubleDown(amount) => engine.action_double_down(amount),
            }
            .map(|_| true);
        }
        Ok(false)
    }
}

/// Holds the seat's agent (if any) and paces its actions.
pub struct AgentSeat {
    agent: Option<Box<dyn PlayerAgent>>,
    min_action_delay: Duration,
    next_action_at: Option<Instant>,
}

impl fmt::Debug for AgentSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = match self.agent.as_deref().map(|a| a.kind()) {
            Some(AgentKind::Human) => 'H',
            Some(AgentKind::Bot) => 'B',
            None => '-',
        };
        write!(f, "AgentSeat({flag})")
    }
}

impl AgentSeat {
    pub fn empty() -> Self {
        Self { agent: None, min_action_delay: Duration::from_millis(0), next_action_at: None }
    }

    /// Assign an agent (or remove when `None`).
    pub fn set_agent(&mut self, agent: Option<Box<dyn PlayerAgent>>) {
        self.agent = agent;
        self.next_action_at = None;
    }

    /// Get immutable access to the agent for inspection.
    pub fn agent(&self) -> Option<&dyn PlayerAgent> {
        self.agent.as_deref()
    }

    pub fn agent_kind(&self) -> Option<AgentKind> {
        self.agent.as_deref().map(|a| a.kind())
    }

    pub fn has_agent(&self) -> bool {
        self.agent.is_some()
    }

    /// Send an action intent to the seat agent, if any.
    pub fn receive(&mut self, action: Action) -> bool {
        if let Some(agent) = self.agent.as_deref_mut() {
            return agent.receive(action);
        }
        false
    }

    /// Set a global minimum delay between any actions at the seat.
    pub fn set_min_action_delay_ms(&mut self, delay_ms: u64) {
        self.min_action_delay = Duration::from_millis(delay_ms);
    }

    /// Drive the seat's agent, if any.
    pub fn on_turn(
        &mut self,
        engine: &mut dyn TableEngine,
    ) -> Result<bool, crate::game::ActionError> {
        if let Some(agent) = self.agent.as_deref_mut() {
            let is_bot = matches!(agent.kind(), AgentKind::Bot);
            let now = Instant::now();
            if is_bot {
                if let Some(next) = self.next_action_at {
                    if now < next {
                        return Ok(false);
                    }
                }
            }
            let acted = agent.on_turn(engine)?;
            if acted && self.min_action_delay > Duration::from_millis(0) {
                self.next_action_at = Some(now + self.min_action_delay);
            }
            return Ok(acted);
        }
        Ok(false)
    }

    /// Remove the agent.
    pub fn clear(&mut self) {
        self.agent = None;
        self.next_action_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::deck::Deck;
    use crate::game::{Phase, Table};

    fn scripted_table(bankroll: u64, draws: &str) -> Table {
        let mut cards = parse_cards(draws).unwrap();
        cards.reverse();
        let mut t = Table::new(bankroll);
        t.set_next_deck(Deck::from_cards(cards));
        t
    }

    #[test]
    fn human_agent_executes_queued_intents() {
        let mut t = scripted_table(100, "10c 7c 10d 9d");
        let mut human = HumanAgent::new();

        assert!(human.receive(Action::Bet(20)));
        assert!(human.on_turn(&mut t).unwrap());
        assert_eq!(t.phase(), Phase::Dealing);
        t.deal().unwrap();

        assert!(human.receive(Action::Stand));
        assert!(human.on_turn(&mut t).unwrap());
        assert_eq!(t.phase(), Phase::DealerTurn);
    }

    #[test]
    fn human_agent_holds_one_pending_intent() {
        let mut human = HumanAgent::new();
        assert!(human.receive(Action::Hit));
        assert!(!human.receive(Action::Stand), "second intent is refused while one is queued");
    }

    #[test]
    fn empty_seat_does_nothing() {
        let mut t = scripted_table(100, "10c 7c 10d 9d");
        let mut seat = AgentSeat::empty();
        assert!(!seat.on_turn(&mut t).unwrap());
        assert!(!seat.receive(Action::Hit));
    }

    #[test]
    fn seat_routes_intents_to_its_agent() {
        let mut t = scripted_table(100, "10c 7c 10d 9d");
        let mut seat = AgentSeat::empty();
        seat.set_agent(Some(Box::new(HumanAgent::new())));
        assert!(seat.receive(Action::Bet(10)));
        assert!(seat.on_turn(&mut t).unwrap());
        assert_eq!(t.phase(), Phase::Dealing);
    }
}
