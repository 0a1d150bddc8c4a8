use crate::session::GameSession;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::{render_board, ui_color};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    selected_column: usize,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);

    let selected = if session.state().is_terminal() {
        None
    } else {
        Some(selected_column)
    };
    render_board(
        frame,
        session.board(),
        session.config().colors,
        selected,
        chunks[1],
    );

    render_message(frame, session, message, chunks[2]);
    render_controls(frame, session, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let (status, color) = if let Some(outcome) = session.outcome_message() {
        (outcome, Color::Cyan)
    } else {
        let active = session.state().current_player();
        let color = ui_color(session.config().colors.for_player(active));
        let status = session.turn_message().unwrap_or_default();
        (status, color)
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Four in a Row"));

    frame.render_widget(header, area);
}

fn render_message(
    frame: &mut Frame,
    session: &GameSession,
    message: &Option<String>,
    area: ratatui::layout::Rect,
) {
    let text = if let Some(message) = message {
        message.clone()
    } else if session.is_thinking() {
        "The computer is thinking...".to_string()
    } else {
        String::new()
    };

    let widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, session: &GameSession, area: ratatui::layout::Rect) {
    let line = if session.state().is_terminal() {
        Line::from("N: Start New Game  |  M: Menu  |  Q: Quit")
    } else {
        Line::from("←/→: Move  |  Enter: Drop  |  R: Restart  |  M: Menu  |  Q: Quit")
    };

    let controls = Paragraph::new(vec![line])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
