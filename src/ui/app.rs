use crate::config::AppConfig;
use crate::error::SessionError;
use crate::game::{GameSession, GameStatus, MoveOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    config: AppConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self, SessionError> {
        let session = GameSession::from_config(&config)?;
        Ok(App {
            selected_column: session.board().width() / 2, // Start in middle
            config,
            session,
            should_quit: false,
            message: None,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press, unless the game has ended
        if !self.session.is_over() {
            self.message = None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => self.rematch(),
            _ => {}
        }
    }

    /// Start a fresh session with the same players and board
    fn rematch(&mut self) {
        match GameSession::from_config(&self.config) {
            Ok(session) => {
                info!("rematch");
                self.selected_column = session.board().width() / 2;
                self.session = session;
                self.message = Some("New game started!".to_string());
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.submit_move(self.selected_column) {
            MoveOutcome::Placed { status, .. } => {
                self.message = match status {
                    GameStatus::Won(seat) => Some(format!(
                        "Player {} won! Press 'r' for a rematch.",
                        self.session.player(seat).color()
                    )),
                    GameStatus::Tied => Some("Tie! Press 'r' for a rematch.".to_string()),
                    GameStatus::InProgress => None,
                };
            }
            MoveOutcome::Ignored { reason, .. } => {
                self.message = Some(reason.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.session, self.selected_column, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seat;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::from(code));
    }

    #[test]
    fn test_starts_in_middle_column() {
        let app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_selection_stays_on_board() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.selected_column, 6);
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.selected_column, 0);
    }

    #[test]
    fn test_vertical_win_message_and_rematch() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for turn in 0..7 {
            if turn % 2 == 0 {
                app.selected_column = 0;
            } else {
                app.selected_column = 1;
            }
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.session().status(), GameStatus::Won(Seat::First));
        assert_eq!(
            app.message.as_deref(),
            Some("Player red won! Press 'r' for a rematch.")
        );

        // Further drops are ignored
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.message.as_deref(), Some("game is over"));
        assert_eq!(app.session().moves_played(), 7);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session().status(), GameStatus::InProgress);
        assert_eq!(app.session().moves_played(), 0);
        assert_eq!(app.selected_column, 3);
    }

    #[test]
    fn test_full_column_message() {
        let mut app = App::new(AppConfig::default()).unwrap();
        for _ in 0..6 {
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.message.as_deref(), Some("column 3 is full"));
        assert_eq!(app.session().current_seat(), Seat::First);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(AppConfig::default()).unwrap();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
