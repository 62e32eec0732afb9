use crate::agents::{Action, AgentSeat, BotAgent, BotProfile, BotStyle, HumanAgent};
use crate::game::{ActionError, Phase, Table};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// What the amount-entry overlay is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AmountPurpose {
    Bet,
    DoubleDown,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewRound,
    Hit,
    Stand,
    BetOpen,
    DoubleOpen,
    AmountDigit(u8),
    AmountBackspace,
    AmountInc,
    AmountDec,
    AmountSubmit,
    AmountCancel,
    ToggleAutoplay,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core table engine instance
    pub game: Table,
    pub seat: AgentSeat,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_starting_bankroll: u64,
    pub cfg_default_bet: u64,
    pub cfg_bot_style: BotStyle,
    pub cfg_step_delay_ms: u64,
    pub step_delay_ms: u64,
    pub bot_style: BotStyle,
    pub autoplay: bool,
    pub last_bet: u64,
    next_dealer_step_at: Option<Instant>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    amount_entry: Option<String>,
    amount_purpose: AmountPurpose,
    amount_entry_error: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let game = Table::new(100);
        let mut seat = AgentSeat::empty();
        seat.set_agent(Some(Box::new(HumanAgent::new())));
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game,
            seat,
            menu_index: 0,
            cfg_starting_bankroll: 100,
            cfg_default_bet: 10,
            cfg_bot_style: BotStyle::Standard,
            cfg_step_delay_ms: 600,
            step_delay_ms: 600,
            bot_style: BotStyle::Standard,
            autoplay: false,
            last_bet: 10,
            next_dealer_step_at: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            amount_entry: None,
            amount_purpose: AmountPurpose::Bet,
            amount_entry_error: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    pub fn style_label(style: BotStyle) -> &'static str {
        match style {
            BotStyle::Cautious => "Cautious",
            BotStyle::Standard => "Standard",
            BotStyle::Aggressive => "Aggressive",
        }
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub fn amount_entry_active(&self) -> bool {
        self.amount_entry.is_some()
    }

    pub fn amount_entry_text(&self) -> Option<&str> {
        self.amount_entry.as_deref()
    }

    pub fn amount_purpose(&self) -> AmountPurpose {
        self.amount_purpose
    }

    pub fn amount_entry_error(&self) -> Option<&str> {
        self.amount_entry_error.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    /// The dealer's hole card stays hidden until the round resolves.
    pub fn dealer_revealed(&self) -> bool {
        matches!(self.game.phase(), Phase::Settlement | Phase::Done)
    }

    /// Whether the session is over: round done and nothing left to bet.
    pub fn game_over(&self) -> bool {
        matches!(self.game.phase(), Phase::Done) && !self.game.can_start_round()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    fn set_action_error(&mut self, err: &ActionError) {
        self.action_error = Some(err.to_string());
        self.action_error_at = Some(Instant::now());
    }

    fn can_act(&self) -> bool {
        matches!(self.scene, Scene::Table)
            && matches!(self.game.phase(), Phase::Betting | Phase::PlayerTurn)
            && !self.autoplay
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if !self.can_act() {
            return false;
        }
        self.clear_action_error();
        self.seat.receive(action)
    }

    /// Dispatch one input action; returns whether the table may have work to
    /// do right away (the controller then runs a tick immediately).
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::MenuNext => {
                self.menu_next();
                false
            }
            InputAction::MenuPrev => {
                self.menu_prev();
                false
            }
            InputAction::MenuInc => {
                self.menu_inc();
                false
            }
            InputAction::MenuDec => {
                self.menu_dec();
                false
            }
            InputAction::MenuApply => {
                self.apply_menu();
                false
            }
            InputAction::MenuCancel => {
                self.cancel_menu();
                false
            }
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                self.close_history();
                self.help_open = !self.help_open;
                false
            }
            InputAction::ToggleHistory => {
                self.close_help();
                self.history_open = !self.history_open;
                self.history_offset = 0;
                false
            }
            InputAction::HistoryUp => {
                if self.history_open {
                    let max = self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.history_open {
                    self.history_offset = self.history_offset.saturating_sub(1);
                }
                false
            }
            InputAction::NewRound => self.start_new_round(),
            InputAction::Hit => self.queue_action(Action::Hit),
            InputAction::Stand => self.queue_action(Action::Stand),
            InputAction::BetOpen => {
                self.open_bet_entry();
                false
            }
            InputAction::DoubleOpen => {
                self.open_double_entry();
                false
            }
            InputAction::AmountDigit(d) => {
                self.amount_digit(d);
                false
            }
            InputAction::AmountBackspace => {
                self.amount_backspace();
                false
            }
            InputAction::AmountInc => {
                self.amount_adjust(1);
                false
            }
            InputAction::AmountDec => {
                self.amount_adjust(-1);
                false
            }
            InputAction::AmountSubmit => self.amount_submit(),
            InputAction::AmountCancel => {
                self.amount_cancel();
                false
            }
            InputAction::ToggleAutoplay => {
                self.toggle_autoplay();
                true
            }
        }
    }

    fn start_new_round(&mut self) -> bool {
        if !matches!(self.scene, Scene::Table) {
            return false;
        }
        if !matches!(self.game.phase(), Phase::Done) {
            return false;
        }
        self.clear_action_error();
        match self.game.new_round() {
            Ok(()) => true,
            Err(err) => {
                self.set_action_error(&err);
                false
            }
        }
    }

    pub fn toggle_autoplay(&mut self) {
        self.autoplay = !self.autoplay;
        if self.autoplay {
            let mut profile = BotProfile::for_style(self.bot_style);
            profile.min_delay_ms = self.step_delay_ms;
            profile.max_delay_ms = self.step_delay_ms;
            self.seat.set_agent(Some(Box::new(BotAgent::new(profile))));
        } else {
            self.seat.set_agent(Some(Box::new(HumanAgent::new())));
        }
    }

    // --- Amount entry (bet and double-down raise) ---

    fn open_bet_entry(&mut self) {
        if !self.can_act() || !matches!(self.game.phase(), Phase::Betting) {
            return;
        }
        let prefill = self.last_bet.clamp(1, self.game.balance().max(1));
        self.amount_purpose = AmountPurpose::Bet;
        self.amount_entry = Some(prefill.to_string());
        self.amount_entry_error = None;
    }

    fn open_double_entry(&mut self) {
        if !self.can_act() || !self.game.can_double_down() {
            return;
        }
        self.amount_purpose = AmountPurpose::DoubleDown;
        self.amount_entry = Some(self.game.double_down_max().to_string());
        self.amount_entry_error = None;
    }

    fn amount_digit(&mut self, d: u8) {
        if let Some(entry) = self.amount_entry.as_mut() {
            if entry.len() < 9 {
                entry.push((b'0' + d.min(9)) as char);
            }
            self.amount_entry_error = None;
        }
    }

    fn amount_backspace(&mut self) {
        if let Some(entry) = self.amount_entry.as_mut() {
            entry.pop();
            self.amount_entry_error = None;
        }
    }

    fn amount_adjust(&mut self, delta: i64) {
        if let Some(entry) = self.amount_entry.as_mut() {
            let current: u64 = entry.parse().unwrap_or(0);
            let next = current.saturating_add_signed(delta);
            *entry = next.to_string();
            self.amount_entry_error = None;
        }
    }

    /// The legal range for the amount being entered.
    pub fn amount_bounds(&self) -> (u64, u64) {
        match self.amount_purpose {
            AmountPurpose::Bet => (1, self.game.balance()),
            AmountPurpose::DoubleDown => (1, self.game.double_down_max()),
        }
    }

    fn amount_submit(&mut self) -> bool {
        let Some(entry) = self.amount_entry.as_deref() else {
            return false;
        };
        let (min, max) = self.amount_bounds();
        // Invalid input is recoverable: keep the overlay open and re-prompt.
        let amount = match entry.parse::<u64>() {
            Ok(v) if (min..=max).contains(&v) => v,
            _ => {
                self.amount_entry_error = Some(format!("enter a number from {min} to {max}"));
                return false;
            }
        };
        let action = match self.amount_purpose {
            AmountPurpose::Bet => {
                self.last_bet = amount;
                Action::Bet(amount)
            }
            AmountPurpose::DoubleDown => Action::DoubleDown(amount),
        };
        self.amount_entry = None;
        self.amount_entry_error = None;
        self.queue_action(action)
    }

    fn amount_cancel(&mut self) {
        self.amount_entry = None;
        self.amount_entry_error = None;
    }

    // --- Tick-driven advancement ---

    /// Run one scheduling step: expire stale errors, let the seat agent act,
    /// and pace the automatic phases (dealing, dealer draws, settlement).
    pub fn on_tick(&mut self) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        if !matches!(self.scene, Scene::Table) {
            return;
        }

        if let Err(err) = self.seat.on_turn(&mut self.game) {
            self.set_action_error(&err);
        }

        // The bot drives every phase itself; for a human seat the app
        // advances the table's automatic phases at the configured pace.
        if self.autoplay {
            return;
        }
        match self.game.phase() {
            Phase::Dealing => {
                self.next_dealer_step_at = None;
                if let Err(err) = self.game.deal() {
                    self.set_action_error(&err);
                }
            }
            Phase::DealerTurn => {
                let now = Instant::now();
                match self.next_dealer_step_at {
                    Some(next) if now < next => {}
                    _ => {
                        self.next_dealer_step_at =
                            Some(now + Duration::from_millis(self.step_delay_ms));
                        if let Err(err) = self.game.dealer_step() {
                            self.set_action_error(&err);
                        }
                    }
                }
            }
            Phase::Settlement => {
                self.next_dealer_step_at = None;
                if let Err(err) = self.game.settle() {
                    self.set_action_error(&err);
                }
            }
            _ => {
                self.next_dealer_step_at = None;
            }
        }
    }
}
