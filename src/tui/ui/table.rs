use crate::game::{Phase, Seat};
use crate::score;
use crate::tui::app::{AmountPurpose, AppState};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let header_lines_count: u16 = 2;
    // Add borders (2 rows) to get total block height
    let header_height = header_lines_count + 2;
    let status_lines: u16 = 3;
    let status_height: u16 = status_lines + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // header
            Constraint::Min(5),                // dealer hand
            Constraint::Min(5),                // player hand
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    // Header (multi-line for readability)
    let bet_suffix = if app.game.doubled() { " (doubled)" } else { "" };
    let mut header_lines: Vec<Line> = Vec::new();
    header_lines.push(Line::from(format!(
        "Bankroll: ${}   Bet: ${}{}   Round {}",
        app.game.balance(),
        app.game.bet(),
        bet_suffix,
        app.game.rounds_played() + 1,
    )));
    let mode = if app.autoplay {
        format!("Autoplay ({})", AppState::style_label(app.bot_style))
    } else {
        String::from("Manual")
    };
    header_lines.push(Line::from(format!("Phase: {:?}   Mode: {}", app.game.phase(), mode)));
    let header = Paragraph::new(header_lines)
        .block(Block::default().title("blackjack-rs").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_hand(f, chunks[1], app, Seat::Dealer);
    render_hand(f, chunks[2], app, Seat::Player);

    // Status bar: split horizontally for info vs keys
    let status_area = chunks[3];
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), status_area);
    let status_inner = inner(status_area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = phase_info(app);

    if let Some(err) = app.action_error() {
        left_info.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }

    let action_style = |enabled: bool| {
        if enabled {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        }
    };
    let manual = !app.autoplay;
    let bet_enabled = manual && matches!(app.game.phase(), Phase::Betting);
    let play_enabled = manual && matches!(app.game.phase(), Phase::PlayerTurn);
    let double_enabled = manual && app.game.can_double_down();
    let new_round_enabled = matches!(app.game.phase(), Phase::Done) && app.game.can_start_round();
    let action_line = Line::from(vec![
        Span::raw("Actions: "),
        Span::styled("B bet", action_style(bet_enabled)),
        Span::raw(" • "),
        Span::styled("H hit", action_style(play_enabled)),
        Span::raw(" • "),
        Span::styled("S stand", action_style(play_enabled)),
        Span::raw(" • "),
        Span::styled("D double", action_style(double_enabled)),
        Span::raw(" • "),
        Span::styled("Space new round", action_style(new_round_enabled)),
    ]);
    left_info.push(action_line);

    let right_keys = vec![Line::from(""), Line::from("? help • L log • A autoplay • M menu")];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if app.amount_entry_active() {
        draw_amount_entry(f, app);
    }
}

fn phase_info(app: &AppState) -> Vec<Line<'static>> {
    match app.game.phase() {
        Phase::Betting => vec![Line::from("Place a bet to start the round (B).")],
        Phase::Dealing => vec![Line::from("Dealing...")],
        Phase::PlayerTurn => {
            vec![Line::from(format!("Your turn — hand value {}.", app.game.player_value()))]
        }
        Phase::DealerTurn => vec![Line::from("Dealer draws...")],
        Phase::Settlement => vec![Line::from("Settling...")],
        Phase::Done => {
            let outcome = app
                .game
                .outcome()
                .map(|o| o.label().to_string())
                .unwrap_or_else(|| String::from("Round over"));
            if app.game_over() {
                vec![
                    Line::from(Span::styled(
                        format!("{outcome} — bankroll exhausted. Game over."),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from("Open the menu (M) to start a new session."),
                ]
            } else {
                vec![Line::from(Span::styled(
                    format!("{} — press Space for the next round.", outcome),
                    Style::default().add_modifier(Modifier::BOLD),
                ))]
            }
        }
    }
}

fn render_hand(f: &mut Frame, area: Rect, app: &AppState, seat: Seat) {
    let (cards, title) = match seat {
        Seat::Dealer => {
            let revealed = app.dealer_revealed();
            let value = if revealed {
                format!(" — {}", app.game.dealer_value())
            } else {
                String::new()
            };
            (app.game.dealer_hand(), format!("Dealer{value}"))
        }
        Seat::Player => {
            let cards = app.game.player_hand();
            let mut title = String::from("You");
            if !cards.is_empty() {
                title.push_str(&format!(" — {}", app.game.player_value()));
                if score::is_soft(cards) {
                    title.push_str(" (soft)");
                }
                if score::is_bust(cards) {
                    title.push_str(" BUST");
                }
            }
            (cards, title)
        }
    };

    let mut block = Block::default().title(title).borders(Borders::ALL);
    if matches!(seat, Seat::Player)
        && matches!(app.game.phase(), Phase::PlayerTurn)
        && !app.autoplay
    {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    let hand_inner = inner(area);
    f.render_widget(block, area);
    if cards.is_empty() {
        let para = Paragraph::new("--").alignment(Alignment::Center);
        f.render_widget(para, hand_inner);
        return;
    }

    let slots = cards.len().max(1) as u16;
    let card_width = (hand_inner.width / slots).clamp(4, 8);
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            (0..slots).map(|_| Constraint::Length(card_width)).collect::<Vec<_>>(),
        )
        .split(hand_inner);
    for (i, card) in cards.iter().enumerate() {
        // The dealer's first card is face down until the round resolves.
        let hidden = matches!(seat, Seat::Dealer) && i == 0 && !app.dealer_revealed();
        let shown = if hidden { None } else { Some(*card) };
        render_card_widget(f, card_chunks[i], shown, hidden);
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Round Log").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No actions yet this round."));
    } else {
        for entry in entries {
            let who = match entry.seat {
                Seat::Player => "You",
                Seat::Dealer => "Dealer",
            };
            let card = entry.card.map(|c| format!(" {c}")).unwrap_or_default();
            let amount = entry.amount.map(|v| format!(" ${v}")).unwrap_or_default();
            lines.push(Line::from(format!("{who}: {}{card}{amount}", entry.verb.label())));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: L or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let lines = vec![
        Line::from(Span::styled("Table:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- B: place bet"),
        Line::from("- H: hit"),
        Line::from("- S: stand"),
        Line::from("- D: double down"),
        Line::from("- Space: next round"),
        Line::from("- A: toggle autoplay"),
        Line::from("- L: round log"),
        Line::from(""),
        Line::from(Span::styled("Amount Entry:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- 0-9: edit amount"),
        Line::from("- Backspace: delete digit"),
        Line::from("- + / -: adjust by 1"),
        Line::from("- Enter: submit"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from(Span::styled("Menu:", Style::default().add_modifier(Modifier::BOLD))),
        Line::from("- M: open / close menu"),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from("- Q: quit (menu)"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_amount_entry(f: &mut Frame, app: &AppState) {
    let area = centered_rect(50, 30, f.area());
    let title = match app.amount_purpose() {
        AmountPurpose::Bet => "Bet Amount",
        AmountPurpose::DoubleDown => "Double Down Amount",
    };
    let (min, max) = app.amount_bounds();
    let current = app.amount_entry_text().unwrap_or("");
    let lines = vec![
        Line::from(format!("Current: {current}")),
        Line::from(format!("Min: {min}   Max: {max}")),
        Line::from("Digits to edit, Backspace to delete"),
        Line::from("+/- to adjust, Enter submit, Esc cancel"),
    ];
    let block = Block::default().title(title).borders(Borders::ALL);
    let inner_area = inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);
    let para = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, chunks[0]);
    let error = app.amount_entry_error().unwrap_or("");
    let error_line = Line::from(Span::styled(error, Style::default().fg(Color::Red)));
    let error_para = Paragraph::new(error_line).alignment(Alignment::Center);
    f.render_widget(error_para, chunks[1]);
}

fn suit_style(s: crate::cards::Suit) -> Style {
    use crate::cards::Suit::*;
    match s {
        Hearts | Diamonds => Style::default().fg(Color::Red),
        Spades | Clubs => Style::default().fg(Color::White),
    }
}

fn render_card_widget(f: &mut Frame, area: Rect, card: Option<crate::cards::Card>, hidden: bool) {
    let block = Block::default().borders(Borders::ALL).title_alignment(Alignment::Center);
    let inner = inner(area);
    f.render_widget(block, area);
    let content = if let Some(c) = card {
        let text = format!("{}{}", c.rank().label(), c.suit().glyph());
        Line::from(Span::styled(text, suit_style(c.suit())))
    } else if hidden {
        Line::from(Span::styled("##", Style::default().add_modifier(Modifier::DIM)))
    } else {
        Line::from("[  ]")
    };
    let para = Paragraph::new(content).alignment(Alignment::Center);
    f.render_widget(para, inner);
}
