//! Ratatui-based full-screen display for the bingo card
//!
//! Owns the terminal for the lifetime of the session: raw mode and the
//! alternate screen are entered on construction and always left on drop.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Terminal,
};
use std::io::{self, Stdout};

use crate::display_trait::{too_small_message, BingoDisplay, DisplayError};
use crate::grid::WinLine;
use crate::layout::{CellStyle, GridView};

/// Display manager using Ratatui
pub struct RatatuiDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    terminal_width: u16,
    terminal_height: u16,
}

impl RatatuiDisplay {
    /// Create a new Ratatui-based display
    pub fn new() -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(e) => {
                restore_terminal();
                return Err(e.into());
            }
        };

        let mut display = RatatuiDisplay {
            terminal,
            terminal_width: 0,
            terminal_height: 0,
        };
        let size = display.terminal.size()?;
        display.terminal_width = size.width;
        display.terminal_height = size.height;
        debug!("RatatuiDisplay ready at {}x{}", size.width, size.height);
        Ok(display)
    }

    fn draw_lines(&mut self, lines: Vec<Line<'static>>, boxed: bool) -> Result<(), DisplayError> {
        self.terminal.draw(|f| {
            let area = f.size();
            f.render_widget(Clear, area);
            let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
            if boxed {
                paragraph = paragraph
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL));
            }
            f.render_widget(paragraph, area);
        })?;
        Ok(())
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Black on white for the cursor, white on green for marked words
fn style_for(style: CellStyle) -> Style {
    match style {
        CellStyle::Plain => Style::default(),
        CellStyle::Highlighted => Style::default().fg(Color::Black).bg(Color::White),
        CellStyle::Toggled | CellStyle::HighlightedToggled => {
            Style::default().fg(Color::White).bg(Color::Green)
        }
        CellStyle::Sentinel => Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        CellStyle::SentinelHighlighted => Style::default()
            .fg(Color::Black)
            .bg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

impl BingoDisplay for RatatuiDisplay {
    fn render_grid(&mut self, view: &GridView<'_>) -> Result<(), DisplayError> {
        view.footprint().check(self.get_terminal_size())?;

        let banner = view.banner();
        let cells = view.placed_cells();
        self.terminal.draw(|f| {
            let area = f.size();
            f.render_widget(Clear, area);

            let banner_x = view.banner_x(area.width);
            let banner_area = Rect::new(banner_x, 0, area.width - banner_x, 1).intersection(area);
            f.render_widget(
                Paragraph::new(Span::styled(
                    banner.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                banner_area,
            );

            for cell in &cells {
                let width = cell.text.chars().count() as u16;
                let cell_area = Rect::new(cell.x, cell.y, width, 1).intersection(area);
                if cell_area.width == 0 || cell_area.height == 0 {
                    continue;
                }
                f.render_widget(
                    Paragraph::new(Span::styled(cell.text.as_str(), style_for(cell.style))),
                    cell_area,
                );
            }
        })?;
        Ok(())
    }

    fn show_too_small(
        &mut self,
        required: (u16, u16),
        actual: (u16, u16),
    ) -> Result<(), DisplayError> {
        debug!("Terminal {:?} smaller than required {:?}", actual, required);
        self.draw_lines(vec![Line::from(too_small_message(required))], false)
    }

    fn show_win(&mut self, player_name: &str, line: WinLine) -> Result<(), DisplayError> {
        let bold = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("B I N G O !", bold)),
            Line::from(""),
            Line::from(format!("{player_name} wins with {line}.")),
            Line::from(""),
            Line::from("Press any key to exit."),
        ];
        self.draw_lines(lines, true)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Resize to {}x{}", width, height);
        self.terminal_width = width;
        self.terminal_height = height;
        if let Err(e) = self.terminal.resize(Rect::new(0, 0, width, height)) {
            warn!("Terminal resize to {}x{} failed: {}", width, height, e);
        }
    }

    fn get_terminal_size(&self) -> (u16, u16) {
        (self.terminal_width, self.terminal_height)
    }

    fn force_refresh(&mut self) -> Result<(), DisplayError> {
        self.terminal.clear()?;
        Ok(())
    }
}

impl Drop for RatatuiDisplay {
    fn drop(&mut self) {
        restore_terminal();
    }
}
