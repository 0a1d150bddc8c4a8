use crate::game::{Player, PlayerColor};
use crate::session::{ColorDraft, SessionController};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::board_widget::ui_color;

/// Which of the two dimension inputs has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeField {
    Width,
    Height,
}

/// Entries of the menu overlay, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    GoToStart,
    ReturnToPrevious,
    Continue,
}

impl MenuEntry {
    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::GoToStart => "Go to Start",
            MenuEntry::ReturnToPrevious => "Return to the previous screen",
            MenuEntry::Continue => "Continue",
        }
    }
}

/// The menu entries currently on offer; returning to the previous screen is
/// only listed while a previous screen is recorded.
pub fn menu_entries(controller: &SessionController) -> Vec<MenuEntry> {
    let mut entries = vec![MenuEntry::GoToStart];
    if controller.previous_screen().is_some() {
        entries.push(MenuEntry::ReturnToPrevious);
    }
    entries.push(MenuEntry::Continue);
    entries
}

fn screen_layout(frame: &Frame) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(6),    // Body
            Constraint::Length(3), // Message
            Constraint::Length(3), // Hints
        ])
        .split(frame.area())
}

fn render_title(frame: &mut Frame, title: &str, area: Rect) {
    let widget = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let widget = Paragraph::new(message.as_deref().unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(widget, area);
}

fn render_hints(frame: &mut Frame, hints: &str, area: Rect) {
    let widget = Paragraph::new(hints)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));
    frame.render_widget(widget, area);
}

pub fn render_opening(frame: &mut Frame, message: &Option<String>) {
    let chunks = screen_layout(frame);
    render_title(frame, "Welcome to 4 in a Row!", chunks[0]);

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("Connect four of your markers in a row to win."),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to start a game",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_hints(frame, "Enter: Start Game  |  Q: Quit", chunks[3]);
}

pub fn render_color_selection(
    frame: &mut Frame,
    draft: &ColorDraft,
    active_row: Player,
    cursor: usize,
    message: &Option<String>,
) {
    let chunks = screen_layout(frame);
    render_title(frame, "Select Colors", chunks[0]);

    let mut lines = vec![Line::from("")];
    for player in [Player::One, Player::Two] {
        let chosen = draft.chosen(player);
        let taken = draft.chosen(player.other());

        let mut spans = vec![Span::styled(
            format!("Player {}: ", player.number()),
            Style::default().add_modifier(Modifier::BOLD),
        )];

        for (idx, &color) in PlayerColor::ALL.iter().enumerate() {
            let mut style = Style::default().fg(ui_color(color));
            if taken == Some(color) {
                // Reserved by the other player
                style = Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            if chosen == Some(color) {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            if player == active_row && idx == cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(format!(" {} ", color.name()), style));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let ready = if draft.complete() {
        Span::styled(
            "Both colors set - press C to continue",
            Style::default().add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Pick one color per player",
            Style::default().fg(Color::DarkGray),
        )
    };
    lines.push(Line::from(ready));

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_hints(
        frame,
        "↑/↓: Player  |  ←/→: Color  |  Enter: Pick  |  C: Continue  |  M: Menu  |  Q: Quit",
        chunks[3],
    );
}

pub fn render_board_size(
    frame: &mut Frame,
    width_input: &str,
    height_input: &str,
    focus: SizeField,
    message: &Option<String>,
) {
    let chunks = screen_layout(frame);
    render_title(frame, "Choose Game Board Width and Height", chunks[0]);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(Span::styled(format!("{} [{}{}]", label, value, cursor), style))
    };

    let body = Paragraph::new(vec![
        Line::from(""),
        Line::from("Values from 1 to 10"),
        Line::from(""),
        field("Board Width: ", width_input, focus == SizeField::Width),
        Line::from(""),
        field("Board Height:", height_input, focus == SizeField::Height),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_hints(
        frame,
        "0-9: Type  |  Tab/↑/↓: Switch Field  |  Backspace: Erase  |  Enter: Continue  |  M: Menu  |  Q: Quit",
        chunks[3],
    );
}

pub fn render_mode_selection(frame: &mut Frame, cursor: usize, message: &Option<String>) {
    let chunks = screen_layout(frame);
    render_title(frame, "Select Game Mode", chunks[0]);

    let options = ["Play against a computer", "Play against a friend"];
    let mut lines = vec![Line::from("")];
    for (idx, option) in options.iter().enumerate() {
        let style = if idx == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {}  ", option), style)));
        lines.push(Line::from(""));
    }

    let body = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(body, chunks[1]);

    render_message(frame, message, chunks[2]);
    render_hints(
        frame,
        "↑/↓: Select  |  Enter: Confirm  |  M: Menu  |  Q: Quit",
        chunks[3],
    );
}

/// Draw the menu overlay centered over whatever screen is underneath.
pub fn render_menu(frame: &mut Frame, entries: &[MenuEntry], cursor: usize) {
    let area = centered_rect(40, (entries.len() + 4) as u16, frame.area());

    let mut lines = vec![Line::from("")];
    for (idx, entry) in entries.iter().enumerate() {
        let style = if idx == cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!(" {} ", entry.label()),
            style,
        )));
    }

    let menu = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Menu"));

    frame.render_widget(Clear, area);
    frame.render_widget(menu, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
