//! One game of bingo for a single local player
//!
//! The session owns the card and the display, and runs the blocking input
//! loop: read one input, apply it, redraw, repeat. States:
//!
//! ```text
//! Active --move/confirm word--> Active
//! Active --confirm sentinel, no line--> Active
//! Active --confirm sentinel, line complete--> Won   (terminal)
//! ```

use log::{debug, info, warn};

use crate::bingo_rand::BingoRand;
use crate::config::GameConfig;
use crate::display_trait::{BingoDisplay, DisplayErrorKind};
use crate::error::GameError;
use crate::grid::{Direction, Grid, WinLine};
use crate::input::{InputEvent, InputSource};
use crate::layout::GridView;
use crate::word_list::WordList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Won(WinLine),
}

/// How a call to `run` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won(WinLine),
    Quit,
}

pub struct Session<D: BingoDisplay> {
    player_name: String,
    grid: Grid,
    state: SessionState,
    cell_width: u16,
    cell_height: u16,
    display: D,
}

impl<D: BingoDisplay> Session<D> {
    /// Wrap an already dealt card. Nothing is drawn until `render` or the first input.
    pub fn new(
        player_name: impl Into<String>,
        grid: Grid,
        config: &GameConfig,
        display: D,
    ) -> Self {
        Session {
            player_name: player_name.into(),
            grid,
            state: SessionState::Active,
            cell_width: config.cell_width,
            cell_height: config.cell_height,
            display,
        }
    }

    /// Deal a random card from `words` and draw it
    pub fn start(
        player_name: impl Into<String>,
        words: &WordList,
        config: &GameConfig,
        rng: &mut BingoRand,
        display: D,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let grid = Grid::from_word_list(
            config.rows,
            config.columns,
            words,
            rng,
            &config.sentinel_label,
        )?;
        let mut session = Self::new(player_name, grid, config, display);
        info!(
            "Session started for '{}' with a {}x{} card",
            session.player_name, config.rows, config.columns
        );
        session.render()?;
        Ok(session)
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        matches!(self.state, SessionState::Won(_))
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Redraw the card, or the "too small" notice if it does not fit
    pub fn render(&mut self) -> Result<(), GameError> {
        if let SessionState::Won(line) = self.state {
            self.display.show_win(&self.player_name, line)?;
            return Ok(());
        }

        let view = GridView::new(&self.player_name, &self.grid, self.cell_width, self.cell_height);
        match self.display.render_grid(&view) {
            Ok(()) => Ok(()),
            Err(e) => match e.kind {
                DisplayErrorKind::TooSmall { required, actual } => {
                    warn!("{}", e.message);
                    self.display.show_too_small(required, actual)?;
                    Ok(())
                }
                DisplayErrorKind::Io => Err(e.into()),
            },
        }
    }

    /// Move the highlight; out-of-bounds moves and moves after a win are ignored
    pub fn move_highlight(&mut self, direction: Direction) -> Result<(), GameError> {
        if self.is_won() {
            return Ok(());
        }
        self.grid.move_highlight(direction);
        self.render()
    }

    /// Toggle the highlighted word, or check for a win when the sentinel is highlighted
    pub fn confirm(&mut self) -> Result<Option<WinLine>, GameError> {
        if self.is_won() {
            return Ok(None);
        }

        let index = self.grid.highlighted_index();
        let won = if self.grid.is_sentinel_highlighted() {
            let line = self.check_for_win();
            match line {
                Some(line) => {
                    info!("{} wins with {}", self.player_name, line);
                    self.state = SessionState::Won(line);
                }
                None => debug!("Win claimed without a complete line"),
            }
            line
        } else {
            self.grid.toggle(index);
            None
        };

        self.render()?;
        Ok(won)
    }

    pub fn check_for_win(&self) -> Option<WinLine> {
        self.grid.check_for_win()
    }

    /// Apply one input. Returns `Some` when the session is over.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<Option<Outcome>, GameError> {
        if let SessionState::Won(line) = self.state {
            return Ok(Some(Outcome::Won(line)));
        }

        match event {
            InputEvent::Move(direction) => self.move_highlight(direction)?,
            InputEvent::Confirm => {
                if let Some(line) = self.confirm()? {
                    return Ok(Some(Outcome::Won(line)));
                }
            }
            InputEvent::Resize(width, height) => {
                self.display.handle_resize(width, height);
                self.render()?;
            }
            InputEvent::Redraw => {
                self.display.force_refresh()?;
                self.render()?;
            }
            InputEvent::Quit => {
                info!("{} left the game", self.player_name);
                return Ok(Some(Outcome::Quit));
            }
        }
        Ok(None)
    }

    /// Run the input loop until the player wins or quits
    pub fn run<I: InputSource + ?Sized>(&mut self, input: &mut I) -> Result<Outcome, GameError> {
        loop {
            let event = input.next_event().map_err(GameError::Input)?;
            if let Some(outcome) = self.handle_input(event)? {
                return Ok(outcome);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display_headless::HeadlessDisplay;
    use crate::grid::DEFAULT_SENTINEL_LABEL;
    use crate::input::ScriptedInput;
    use test_log::test;

    fn config() -> GameConfig {
        GameConfig {
            cell_width: 8,
            cell_height: 1,
            ..GameConfig::default()
        }
    }

    fn session() -> Session<HeadlessDisplay> {
        let labels = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];
        let grid = Grid::from_labels(3, 3, labels, DEFAULT_SENTINEL_LABEL).unwrap();
        Session::new("Ada", grid, &config(), HeadlessDisplay::new().unwrap())
    }

    fn go_to_sentinel(s: &mut Session<HeadlessDisplay>) {
        for _ in 0..3 {
            s.move_highlight(Direction::Down).unwrap();
        }
        assert!(s.grid().is_sentinel_highlighted());
    }

    #[test]
    fn test_every_operation_redraws() {
        let mut s = session();
        s.move_highlight(Direction::Right).unwrap();
        s.move_highlight(Direction::Up).unwrap();
        s.confirm().unwrap();
        assert_eq!(s.display().frame_count(), 3);
        assert!(s.display().last_frame().unwrap().contains("> [b] <"));
    }

    #[test]
    fn test_confirm_word_toggles_only_that_word() {
        let mut s = session();
        s.move_highlight(Direction::Down).unwrap();
        assert_eq!(s.confirm().unwrap(), None);
        let toggled: Vec<usize> = s
            .grid()
            .cells()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.toggled)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(toggled, vec![3]);
        assert_eq!(s.state(), SessionState::Active);
    }

    #[test]
    fn test_sentinel_without_line_stays_active() {
        let mut s = session();
        s.confirm().unwrap();
        go_to_sentinel(&mut s);
        assert_eq!(s.confirm().unwrap(), None);
        assert_eq!(s.state(), SessionState::Active);
        assert!(!s.grid().sentinel().toggled);
    }

    #[test]
    fn test_win_is_terminal() {
        let mut s = session();
        for step in 0..3 {
            if step > 0 {
                s.move_highlight(Direction::Down).unwrap();
            }
            s.confirm().unwrap();
        }
        // column 0 is complete; highlight is on (2,0)
        s.move_highlight(Direction::Down).unwrap();
        assert_eq!(s.confirm().unwrap(), Some(WinLine::Column(0)));
        assert_eq!(s.state(), SessionState::Won(WinLine::Column(0)));
        assert_eq!(
            s.display().last_frame(),
            Some("BINGO! Ada wins with column 1.")
        );

        let before = s.grid().clone();
        let frames = s.display().frame_count();
        s.move_highlight(Direction::Up).unwrap();
        assert_eq!(s.confirm().unwrap(), None);
        assert_eq!(s.grid().highlighted_index(), before.highlighted_index());
        assert_eq!(s.grid().cells(), before.cells());
        assert_eq!(s.display().frame_count(), frames);
    }

    #[test]
    fn test_too_small_is_reported_and_recovered() {
        let labels = ["a", "b", "c", "d"];
        let grid = Grid::from_labels(2, 2, labels, DEFAULT_SENTINEL_LABEL).unwrap();
        let display = HeadlessDisplay::with_size(10, 4).unwrap();
        let mut s = Session::new("Ada", grid, &config(), display);

        s.render().unwrap();
        assert_eq!(
            s.display().last_frame(),
            Some("Terminal window is too small. Please resize to at least 21x7.")
        );

        s.move_highlight(Direction::Right).unwrap();
        assert_eq!(s.grid().highlighted_index(), 1);

        assert_eq!(s.handle_input(InputEvent::Resize(80, 24)).unwrap(), None);
        assert!(s.display().last_frame().unwrap().contains("Player: Ada"));
    }

    #[test]
    fn test_run_until_quit() {
        let mut s = session();
        let mut input = ScriptedInput::from_script("right confirm quit confirm");
        assert_eq!(s.run(&mut input).unwrap(), Outcome::Quit);
        assert!(s.grid().cells()[1].toggled);
        assert_eq!(input.remaining(), 1);
    }

    #[test]
    fn test_run_until_win() {
        let mut s = session();
        let script = "confirm down right confirm down right confirm down confirm";
        let mut input = ScriptedInput::from_script(script);
        assert_eq!(s.run(&mut input).unwrap(), Outcome::Won(WinLine::MainDiagonal));
        assert!(s.is_won());
    }

    #[test]
    fn test_start_deals_and_draws() {
        let words = WordList::from_lines((0..12).map(|i| format!("word{i}")));
        let mut rng = BingoRand::new_predictable(5);
        let s = Session::start("Ada", &words, &config(), &mut rng, HeadlessDisplay::new().unwrap())
            .unwrap();
        assert_eq!(s.grid().cells().len(), 10);
        assert_eq!(s.display().frame_count(), 1);
        assert_eq!(s.player_name(), "Ada");
    }

    #[test]
    fn test_start_with_too_few_words() {
        let words = WordList::from_lines(["one", "two"]);
        let mut rng = BingoRand::new_predictable(5);
        let result =
            Session::start("Ada", &words, &config(), &mut rng, HeadlessDisplay::new().unwrap());
        assert!(matches!(
            result,
            Err(GameError::InsufficientWords {
                available: 2,
                required: 9
            })
        ));
    }
}
