//! Screen geometry for the bingo card
//!
//! Every display places cells at the same coordinates:
//!
//! ```text
//! y = row * (cell_height + 1) + 2      (line 0 holds the player banner)
//! x = column * (cell_width + 2) + 1
//! ```
//!
//! and the sentinel goes at column 1 on the line below the last row.

use crate::display_trait::DisplayError;
use crate::grid::{Cell, Grid};

/// Lines above the first row of cells (player banner plus a blank line)
const HEADER_LINES: u16 = 2;

/// Minimum surface needed to draw a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    pub width: u16,
    pub height: u16,
}

fn saturate(value: Option<usize>) -> u16 {
    value
        .and_then(|v| u16::try_from(v).ok())
        .unwrap_or(u16::MAX)
}

impl Footprint {
    pub fn for_grid(rows: usize, columns: usize, cell_width: u16, cell_height: u16) -> Self {
        let width = columns
            .checked_mul(cell_width as usize + 2)
            .and_then(|w| w.checked_add(1));
        let height = rows
            .checked_mul(cell_height as usize + 1)
            .and_then(|h| h.checked_add(HEADER_LINES as usize + 1));
        Footprint {
            width: saturate(width),
            height: saturate(height),
        }
    }

    /// Widen the footprint so a sentinel label of `len` characters fits on its line
    pub fn with_sentinel(self, len: usize) -> Self {
        Footprint {
            width: self.width.max(saturate(len.checked_add(1))),
            ..self
        }
    }

    pub fn fits(&self, width: u16, height: u16) -> bool {
        self.width <= width && self.height <= height
    }

    pub fn check(&self, size: (u16, u16)) -> Result<(), DisplayError> {
        if self.fits(size.0, size.1) {
            Ok(())
        } else {
            Err(DisplayError::too_small((self.width, self.height), size))
        }
    }
}

/// How a cell should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellStyle {
    Plain,
    Highlighted,
    Toggled,
    HighlightedToggled,
    Sentinel,
    SentinelHighlighted,
}

/// A positioned piece of text ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedCell {
    pub x: u16,
    pub y: u16,
    pub text: String,
    pub style: CellStyle,
}

/// Read-only snapshot of a session for drawing
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub player_name: &'a str,
    pub grid: &'a Grid,
    pub cell_width: u16,
    pub cell_height: u16,
}

impl<'a> GridView<'a> {
    pub fn new(player_name: &'a str, grid: &'a Grid, cell_width: u16, cell_height: u16) -> Self {
        GridView {
            player_name,
            grid,
            cell_width,
            cell_height,
        }
    }

    pub fn footprint(&self) -> Footprint {
        let sentinel_len = self.grid.sentinel().label.chars().count();
        Footprint::for_grid(
            self.grid.rows(),
            self.grid.columns(),
            self.cell_width,
            self.cell_height,
        )
        .with_sentinel(sentinel_len)
    }

    pub fn banner(&self) -> String {
        format!("Player: {}", self.player_name)
    }

    /// Column at which the banner starts when centred in `width`
    pub fn banner_x(&self, width: u16) -> u16 {
        let len = self.banner().chars().count() as u16;
        width.saturating_sub(len) / 2
    }

    /// Word cells followed by the sentinel, with their coordinates and styles.
    /// Word labels are clipped to the cell width; the sentinel has its own line.
    pub fn placed_cells(&self) -> Vec<PlacedCell> {
        let grid = self.grid;
        let mut placed: Vec<PlacedCell> = grid.cells()[..grid.cell_count()]
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let (row, column) = grid.position(index);
                PlacedCell {
                    x: (column * (self.cell_width as usize + 2) + 1) as u16,
                    y: (row * (self.cell_height as usize + 1)) as u16 + HEADER_LINES,
                    text: self.clip(decorate(cell)),
                    style: word_style(cell),
                }
            })
            .collect();

        let sentinel = grid.sentinel();
        placed.push(PlacedCell {
            x: 1,
            y: (grid.rows() * (self.cell_height as usize + 1)) as u16 + HEADER_LINES,
            text: sentinel.label.clone(),
            style: if sentinel.highlighted {
                CellStyle::SentinelHighlighted
            } else {
                CellStyle::Sentinel
            },
        });
        placed
    }

    fn clip(&self, text: String) -> String {
        let limit = self.cell_width as usize + 1;
        if text.chars().count() > limit {
            text.chars().take(limit).collect()
        } else {
            text
        }
    }

    /// Plain-text rendering of the card, one string per line, trailing spaces trimmed
    pub fn text_lines(&self, width: u16) -> Vec<String> {
        let footprint = self.footprint();
        let width = width.max(footprint.width) as usize;
        let mut canvas = vec![vec![' '; width]; footprint.height as usize];

        put(&mut canvas, self.banner_x(width as u16), 0, &self.banner());
        for cell in self.placed_cells() {
            put(&mut canvas, cell.x, cell.y, &cell.text);
        }

        canvas
            .into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

/// Cell label with highlight and toggle markers
pub fn decorate(cell: &Cell) -> String {
    match (cell.highlighted, cell.toggled) {
        (true, true) => format!("> [{}] <", cell.label),
        (true, false) => format!("> {} <", cell.label),
        (false, true) => format!("[{}]", cell.label),
        (false, false) => cell.label.clone(),
    }
}

fn word_style(cell: &Cell) -> CellStyle {
    match (cell.highlighted, cell.toggled) {
        (true, true) => CellStyle::HighlightedToggled,
        (true, false) => CellStyle::Highlighted,
        (false, true) => CellStyle::Toggled,
        (false, false) => CellStyle::Plain,
    }
}

fn put(canvas: &mut [Vec<char>], x: u16, y: u16, text: &str) {
    if let Some(line) = canvas.get_mut(y as usize) {
        for (offset, ch) in text.chars().enumerate() {
            if let Some(slot) = line.get_mut(x as usize + offset) {
                *slot = ch;
            }
        }
    }
}
