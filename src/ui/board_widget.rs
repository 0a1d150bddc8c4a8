use crate::game::{Board, Cell, PlayerColor};
use crate::session::PlayerColors;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Terminal rendering of a palette color.
pub fn ui_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Red => Color::Red,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Green => Color::Green,
        PlayerColor::Orange => Color::Rgb(255, 165, 0),
        PlayerColor::Purple => Color::Rgb(128, 0, 128),
        PlayerColor::Pink => Color::Rgb(255, 105, 180),
        PlayerColor::Teal => Color::Rgb(0, 128, 128),
        PlayerColor::Lime => Color::Rgb(50, 205, 50),
        PlayerColor::Brown => Color::Rgb(139, 69, 19),
    }
}

/// Render the grid with column numbers, the players' chosen colors, and an
/// optional column selection indicator. Sized to the board's dimensions.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    colors: PlayerColors,
    selected: Option<usize>,
    area: Rect,
) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection highlight
    let mut col_line = vec![Span::raw("  ")];
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if selected == Some(col) {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    lines.push(Line::from(col_line));

    let horizontal = "═".repeat(width * 3);
    lines.push(Line::from(format!(" ╔{}╗", horizontal)));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw(" ║")];

        for col in 0..width {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::One => (" ● ", ui_color(colors.player1)),
                Cell::Two => (" ● ", ui_color(colors.player2)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!(" ╚{}╝", horizontal)));

    // Selection indicator below the board
    if let Some(selected) = selected {
        let mut indicator = vec![Span::raw("  ")];
        for col in 0..width {
            if col == selected {
                indicator.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator.push(Span::raw("   "));
            }
        }
        lines.push(Line::from(indicator));
    }

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, area);
}
