use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::backend::Backend;
use ratatui::style::Color;
use ratatui::Terminal;

use crate::ai::HeuristicOpponent;
use crate::config::{AppConfig, FirstPlayer};
use crate::game::{GameOutcome, GameState, MoveError, Player};

/// Accent palette the frame color cycles through.
const ACCENTS: [Color; 5] = [
    Color::Cyan,
    Color::Blue,
    Color::Magenta,
    Color::Green,
    Color::LightYellow,
];

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct App {
    game_state: GameState,
    opponent: HeuristicOpponent,
    rng: StdRng,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    /// When set, the computer's reply fires once this deadline passes.
    /// Human drops are ignored while it is pending.
    computer_move_due: Option<Instant>,
    started: Instant,
    computer_delay: Duration,
    color_cycle: Duration,
    first_player: FirstPlayer,
}

impl App {
    pub fn new(config: &AppConfig, seed: Option<u64>) -> Self {
        let (rng, opponent) = match seed {
            Some(seed) => (
                StdRng::seed_from_u64(seed),
                HeuristicOpponent::seeded(seed.wrapping_add(1)),
            ),
            None => (StdRng::from_os_rng(), HeuristicOpponent::new()),
        };

        let mut app = App {
            game_state: GameState::initial(),
            opponent,
            rng,
            selected_column: 3, // Start in the middle
            should_quit: false,
            message: None,
            computer_move_due: None,
            started: Instant::now(),
            computer_delay: Duration::from_millis(config.game.computer_delay_ms),
            color_cycle: Duration::from_millis(config.ui.color_cycle_ms),
            first_player: config.game.first_player,
        };
        app.new_game();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let accent = self.accent();
            terminal.draw(|f| {
                super::game_view::render(
                    f,
                    &self.game_state,
                    self.selected_column,
                    &self.message,
                    self.computer_move_due.is_some(),
                    accent,
                )
            })?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.tick();
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
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
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < 6 {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.human_move();
            }
            KeyCode::Char('r') => {
                self.new_game();
            }
            _ => {}
        }
    }

    /// Fire the computer's reply once its deadline has passed.
    fn tick(&mut self) {
        let Some(due) = self.computer_move_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.computer_move_due = None;

        if self.game_state.is_terminal() {
            return;
        }

        let column = self.opponent.select_column(self.game_state.board());
        // The opponent only proposes non-full columns
        if self.game_state.apply_move_mut(column).is_ok() {
            match self.game_state.outcome() {
                Some(outcome) => self.announce(outcome),
                None => self.message = Some(format!("Your turn ({})!", Player::HUMAN.name())),
            }
        }
    }

    /// Drop a disc for the human in the selected column.
    ///
    /// Ignored while the computer's reply is pending, mirroring a detached
    /// input handler; a full column is a notice, not a state change.
    fn human_move(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' for a new game.".to_string());
            return;
        }
        if self.computer_move_due.is_some() || !self.game_state.current_player().is_human() {
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => match self.game_state.outcome() {
                Some(outcome) => self.announce(outcome),
                None => {
                    self.message = Some("The computer is thinking...".to_string());
                    self.computer_move_due = Some(Instant::now() + self.computer_delay);
                }
            },
            Err(MoveError::ColumnFull) => {
                self.message = Some("That column is full!".to_string());
            }
            Err(MoveError::InvalidColumn) | Err(MoveError::GameOver) => {}
        }
    }

    /// Start a fresh game, re-resolving who moves first.
    fn new_game(&mut self) {
        let first = self.first_player.resolve(&mut self.rng);
        self.game_state.reset(first);
        self.selected_column = 3;
        self.computer_move_due = None;

        if first.is_human() {
            self.message = Some(format!("Your turn ({})!", Player::HUMAN.name()));
        } else {
            self.message = Some("The computer starts...".to_string());
            self.computer_move_due = Some(Instant::now() + self.computer_delay);
        }
    }

    fn announce(&mut self, outcome: GameOutcome) {
        self.message = Some(match outcome {
            GameOutcome::Winner(p) if p.is_human() => {
                format!("You win ({})! Press 'r' for a new game.", p.name())
            }
            GameOutcome::Winner(p) => {
                format!("The computer wins ({})! Press 'r' for a new game.", p.name())
            }
            GameOutcome::Draw => "It's a draw! Press 'r' for a new game.".to_string(),
        });
    }

    /// Current frame accent color, cycling on a timer.
    fn accent(&self) -> Color {
        if self.color_cycle.is_zero() {
            return ACCENTS[0];
        }
        let phase = self.started.elapsed().as_millis() / self.color_cycle.as_millis();
        ACCENTS[(phase as usize) % ACCENTS.len()]
    }
}
