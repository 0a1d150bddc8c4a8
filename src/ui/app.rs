use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::game::{Player, PlayerColor};
use crate::session::{
    GameMode, Phase, Screen, SessionController, Silent, SoundEffects, TerminalBell,
};

use super::game_view;
use super::screens::{self, MenuEntry, SizeField};

pub struct App {
    controller: SessionController,
    last_screen: Screen,
    // Color selection
    color_row: Player,
    color_cursor: usize,
    // Board size inputs
    width_input: String,
    height_input: String,
    size_focus: SizeField,
    // Mode selection
    mode_cursor: usize,
    // In-game
    selected_column: usize,
    // Menu overlay
    menu_cursor: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let sounds: Box<dyn SoundEffects> = if config.sound.enabled {
            Box::new(TerminalBell)
        } else {
            Box::new(Silent)
        };
        let controller = SessionController::new(config, sounds);
        let (width, height) = controller.default_board_size();

        App {
            controller,
            last_screen: Screen::Opening,
            color_row: Player::One,
            color_cursor: 0,
            width_input: width.to_string(),
            height_input: height.to_string(),
            size_focus: SizeField::Width,
            mode_cursor: 0,
            selected_column: 0,
            menu_cursor: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.sync_screen_state();
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.controller.tick(Instant::now());
            self.handle_events()?;
        }
        Ok(())
    }

    /// Reset per-screen cursors and input buffers when the phase changed
    /// underneath us (forward transition, menu navigation, hard reset).
    fn sync_screen_state(&mut self) {
        let screen = self.controller.screen();
        if screen == self.last_screen {
            return;
        }
        self.last_screen = screen;
        self.menu_cursor = 0;

        match screen {
            Screen::Opening => {}
            Screen::ColorSelection => {
                self.color_row = Player::One;
                self.color_cursor = 0;
            }
            Screen::BoardSizeSelection => {
                let (width, height) = self.controller.default_board_size();
                self.width_input = width.to_string();
                self.height_input = height.to_string();
                self.size_focus = SizeField::Width;
            }
            Screen::ModeSelection => {
                self.mode_cursor = 0;
            }
            Screen::Game => {
                let width = self
                    .controller
                    .session()
                    .map(|s| s.board().width())
                    .unwrap_or(1);
                self.selected_column = width / 2;
            }
        }
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if self.controller.menu_open() {
            self.handle_menu_key(key);
            return;
        }

        if key.code == KeyCode::Char('m') {
            self.controller.toggle_menu();
            self.menu_cursor = 0;
            return;
        }

        match self.controller.screen() {
            Screen::Opening => self.handle_opening_key(key),
            Screen::ColorSelection => self.handle_color_key(key),
            Screen::BoardSizeSelection => self.handle_size_key(key),
            Screen::ModeSelection => self.handle_mode_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let entries = screens::menu_entries(&self.controller);

        match key.code {
            KeyCode::Esc => self.controller.continue_game(),
            KeyCode::Char('m') => self.controller.toggle_menu(),
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.menu_cursor + 1 < entries.len() {
                    self.menu_cursor += 1;
                }
            }
            KeyCode::Enter => match entries[self.menu_cursor] {
                MenuEntry::GoToStart => self.controller.go_to_start(),
                MenuEntry::ReturnToPrevious => self.controller.return_to_previous_screen(),
                MenuEntry::Continue => self.controller.continue_game(),
            },
            _ => {}
        }
    }

    fn handle_opening_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.controller.start_game();
        }
    }

    fn handle_color_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.color_row = self.color_row.other();
            }
            KeyCode::Left => {
                self.color_cursor = self.color_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.color_cursor + 1 < PlayerColor::ALL.len() {
                    self.color_cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let color = PlayerColor::ALL[self.color_cursor];
                if !self.controller.select_color(self.color_row, color) {
                    self.message = Some(format!(
                        "{} is already taken by the other player",
                        color.name()
                    ));
                }
            }
            KeyCode::Char('c') => {
                if !self.controller.confirm_colors() {
                    self.message = Some("Both players need a color before continuing".to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_size_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.size_focus = match self.size_focus {
                    SizeField::Width => SizeField::Height,
                    SizeField::Height => SizeField::Width,
                };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let input = match self.size_focus {
                    SizeField::Width => &mut self.width_input,
                    SizeField::Height => &mut self.height_input,
                };
                if input.len() < 2 {
                    input.push(c);
                }
            }
            KeyCode::Backspace => {
                let input = match self.size_focus {
                    SizeField::Width => &mut self.width_input,
                    SizeField::Height => &mut self.height_input,
                };
                input.pop();
            }
            KeyCode::Enter => {
                // Anything unparsable is out of range and hits the same
                // validation message as 0 or 11
                let width = self.width_input.parse::<i32>().unwrap_or(-1);
                let height = self.height_input.parse::<i32>().unwrap_or(-1);
                if let Err(err) = self.controller.set_board_size(width, height) {
                    self.message = Some(err.to_string());
                }
            }
            _ => {}
        }
    }

    fn handle_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.mode_cursor = self.mode_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.mode_cursor < 1 {
                    self.mode_cursor += 1;
                }
            }
            KeyCode::Enter => {
                let mode = if self.mode_cursor == 0 {
                    GameMode::Computer
                } else {
                    GameMode::Friend
                };
                self.controller.select_game_mode(mode);
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let Some(session) = self.controller.session() else {
            return;
        };
        let width = session.board().width();
        let terminal = session.state().is_terminal();

        match key.code {
            KeyCode::Left if !terminal => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right if !terminal => {
                if self.selected_column + 1 < width {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if !terminal => {
                let column = self.selected_column;
                if !self.controller.column_clicked(column, Instant::now())
                    && !self.controller.is_thinking()
                {
                    if let Some(session) = self.controller.session() {
                        if session.board().is_column_full(column) {
                            self.message = Some("That column is full".to_string());
                        }
                    }
                }
            }
            KeyCode::Char('r') => {
                self.controller.restart_game();
                self.message = Some("New game started".to_string());
            }
            KeyCode::Char('n') if terminal => {
                self.controller.restart_game();
                self.message = Some("New game started".to_string());
            }
            KeyCode::Char('s') if terminal => {
                self.controller.go_to_start();
            }
            _ => {}
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        match self.controller.phase() {
            Phase::Opening => screens::render_opening(frame, &self.message),
            Phase::ColorSelection(draft) => screens::render_color_selection(
                frame,
                draft,
                self.color_row,
                self.color_cursor,
                &self.message,
            ),
            Phase::BoardSizeSelection { .. } => screens::render_board_size(
                frame,
                &self.width_input,
                &self.height_input,
                self.size_focus,
                &self.message,
            ),
            Phase::ModeSelection { .. } => {
                screens::render_mode_selection(frame, self.mode_cursor, &self.message)
            }
            Phase::Game(session) => {
                game_view::render(frame, session, self.selected_column, &self.message)
            }
        }

        if self.controller.menu_open() {
            let entries = screens::menu_entries(&self.controller);
            screens::render_menu(frame, &entries, self.menu_cursor);
        }
    }
}
