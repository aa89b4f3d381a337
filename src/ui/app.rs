use crate::ai::{Algorithm, MAX_DEPTH};
use crate::controller::{MatchController, Outcome};
use crate::error::MoveError;
use crate::game::COLS;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::warn;

pub struct App {
    controller: MatchController,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(controller: MatchController) -> Self {
        App {
            controller,
            selected_column: 3, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column < COLS - 1 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('m') => self.set_algorithm(Algorithm::Minimax),
            KeyCode::Char('a') => self.set_algorithm(Algorithm::AlphaBeta),
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_depth(1),
            KeyCode::Char('-') => self.change_depth(-1),
            KeyCode::Char('r') => {
                self.controller.reset();
                self.selected_column = 3;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.controller.set_algorithm(algorithm);
        self.message = Some(format!("Search: {}", algorithm.name()));
    }

    fn change_depth(&mut self, delta: i32) {
        let depth = self.controller.search_config().depth as i32 + delta;
        let depth = depth.clamp(1, MAX_DEPTH as i32) as u32;
        match self.controller.set_depth(depth) {
            Ok(()) => self.message = Some(format!("Depth: {depth}")),
            Err(e) => {
                warn!(error = %e, "depth rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.controller.submit_human_move(self.selected_column) {
            Ok(report) => {
                let reply = report
                    .computer_column
                    .map(|col| format!("Computer played {}. ", col + 1))
                    .unwrap_or_default();
                self.message = match report.outcome {
                    Outcome::Continue => Some(reply),
                    Outcome::Win(player) if player == self.controller.human() => {
                        Some("You win!".to_string())
                    }
                    Outcome::Win(_) => Some(format!("{reply}Computer wins!")),
                    Outcome::Draw => Some(format!("{reply}It's a draw!")),
                };
            }
            Err(MoveError::ColumnFull(_)) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::InvalidColumn(_)) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(e @ MoveError::NoLegalMove) => {
                warn!(error = %e, "computer could not move");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.controller, self.selected_column, &self.message);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(MatchController::new_game())
    }
}
