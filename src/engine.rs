// Minimal table engine API boundary. This trait exposes the round actions
// and queries so frontends (TUI, bots) can drive a round without depending
// on table internals. It is implemented for the core `Table` type.

pub trait TableEngine {
    // Round lifecycle
    fn new_round(&mut self) -> Result<(), crate::game::ActionError>;
    fn deal(&mut self) -> Result<(), crate::game::ActionError>;
    fn settle(&mut self) -> Result<crate::game::Outcome, crate::game::ActionError>;

    // Player actions
    fn place_bet(&mut self, amount: u64) -> Result<(), crate::game::ActionError>;
    fn action_hit(&mut self) -> Result<(), crate::game::ActionError>;
    fn action_stand(&mut self) -> Result<(), crate::game::ActionError>;
    fn action_double_down(&mut self, additional: u64) -> Result<(), crate::game::ActionError>;

    // Dealer turn
    fn dealer_step(&mut self) -> Result<bool, crate::game::ActionError>;

    // Queries
    fn phase(&self) -> crate::game::Phase;
    fn balance(&self) -> u64;
    fn bet(&self) -> u64;
    fn player_hand(&self) -> &[crate::cards::Card];
    fn dealer_hand(&self) -> &[crate::cards::Card];
    fn player_value(&self) -> u32;
    fn dealer_value(&self) -> u32;
    fn outcome(&self) -> Option<crate::game::Outcome>;
    fn can_start_round(&self) -> bool;
    fn can_double_down(&self) -> bool;
    fn double_down_max(&self) -> u64;
}

impl TableEngine for crate::game::Table {
    fn new_round(&mut self) -> Result<(), crate::game::ActionError> {
        self.new_round()
    }
    fn deal(&mut self) -> Result<(), crate::game::ActionError> {
        self.deal()
    }
    fn settle(&mut self) -> Result<crate::game::Outcome, crate::game::ActionError> {
        self.settle()
    }

    fn place_bet(&mut self, amount: u64) -> Result<(), crate::game::ActionError> {
        self.place_bet(amount)
    }
    fn action_hit(&mut self) -> Result<(), crate::game::ActionError> {
        self.action_hit()
    }
    fn action_stand(&mut self) -> Result<(), crate::game::ActionError> {
        self.action_stand()
    }
    fn action_double_down(&mut self, additional: u64) -> Result<(), crate::game::ActionError> {
        self.action_double_down(additional)
    }

    fn dealer_step(&mut self) -> Result<bool, crate::game::ActionError> {
        self.dealer_step()
    }

    fn phase(&self) -> crate::game::Phase {
        self.phase()
    }
    fn balance(&self) -> u64 {
        self.balance()
    }
    fn bet(&self) -> u64 {
        self.bet()
    }
    fn player_hand(&self) -> &[crate::cards::Card] {
        self.player_hand()
    }
    fn dealer_hand(&self) -> &[crate::cards::Card] {
        self.dealer_hand()
    }
    fn player_value(&self) -> u32 {
        self.player_value()
    }
    fn dealer_value(&self) -> u32 {
        self.dealer_value()
    }
    fn outcome(&self) -> Option<crate::game::Outcome> {
        self.outcome()
    }
    fn can_start_round(&self) -> bool {
        self.can_start_round()
    }
    fn can_double_down(&self) -> bool {
        self.can_double_down()
    }
    fn double_down_max(&self) -> u64 {
        self.double_down_max()
    }
}
