use crate::agents::{BotStyle, HumanAgent};
use crate::game::Table;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    StartingBankroll,
    DefaultBet,
    BotStyle,
    StepDelayMs,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::StartingBankroll,
    MenuItem::DefaultBet,
    MenuItem::BotStyle,
    MenuItem::StepDelayMs,
];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::StartingBankroll => {
                format!("Starting Bankroll: ${}", app.cfg_starting_bankroll)
            }
            MenuItem::DefaultBet => format!("Default Bet: ${}", app.cfg_default_bet),
            MenuItem::BotStyle => {
                format!("Autoplay Style: {}", AppState::style_label(app.cfg_bot_style))
            }
            MenuItem::StepDelayMs => format!("Dealer Pace (ms): {}", app.cfg_step_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::StartingBankroll => {
                app.cfg_starting_bankroll = app.cfg_starting_bankroll.saturating_add(10);
            }
            MenuItem::DefaultBet => {
                app.cfg_default_bet = app.cfg_default_bet.saturating_add(1);
            }
            MenuItem::BotStyle => {
                app.cfg_bot_style = match app.cfg_bot_style {
                    BotStyle::Cautious => BotStyle::Standard,
                    BotStyle::Standard => BotStyle::Aggressive,
                    BotStyle::Aggressive => BotStyle::Cautious,
                };
            }
            MenuItem::StepDelayMs => {
                app.cfg_step_delay_ms = app.cfg_step_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::StartingBankroll => {
                app.cfg_starting_bankroll = app.cfg_starting_bankroll.saturating_sub(10).max(10);
            }
            MenuItem::DefaultBet => {
                if app.cfg_default_bet > 1 {
                    app.cfg_default_bet -= 1;
                }
            }
            MenuItem::BotStyle => {
                app.cfg_bot_style = match app.cfg_bot_style {
                    BotStyle::Cautious => BotStyle::Aggressive,
                    BotStyle::Standard => BotStyle::Cautious,
                    BotStyle::Aggressive => BotStyle::Standard,
                };
            }
            MenuItem::StepDelayMs => {
                app.cfg_step_delay_ms = app.cfg_step_delay_ms.saturating_sub(100);
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_default_bet = self.last_bet;
        self.cfg_bot_style = self.bot_style;
        self.cfg_step_delay_ms = self.step_delay_ms;
        self.scene = super::Scene::Menu;
    }

    /// Apply the edited config and start a fresh session at the table.
    pub fn apply_menu(&mut self) {
        // Ensure invariants
        if self.cfg_starting_bankroll == 0 {
            self.cfg_starting_bankroll = 10;
        }
        if self.cfg_default_bet == 0 {
            self.cfg_default_bet = 1;
        }
        if self.cfg_default_bet > self.cfg_starting_bankroll {
            self.cfg_default_bet = self.cfg_starting_bankroll;
        }

        self.step_delay_ms = self.cfg_step_delay_ms;
        self.bot_style = self.cfg_bot_style;
        self.last_bet = self.cfg_default_bet;
        self.game = Table::new(self.cfg_starting_bankroll);
        self.autoplay = false;
        self.seat.set_agent(Some(Box::new(HumanAgent::new())));
        self.seat.set_min_action_delay_ms(150);
        self.scene = super::Scene::Table;
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
