//! Logging wrapper for display implementations
//!
//! This wrapper logs every display operation to help debug display issues.
//! Enabled by setting `BINGO_DISPLAY_LOG`.

use log::{debug, info};

use crate::display_trait::{BingoDisplay, DisplayError};
use crate::grid::WinLine;
use crate::layout::GridView;

pub struct LoggingDisplay {
    inner: Box<dyn BingoDisplay>,
    op_count: usize,
}

impl LoggingDisplay {
    pub fn new(inner: Box<dyn BingoDisplay>) -> Self {
        info!("=== DISPLAY LOGGING STARTED ===");
        Self { inner, op_count: 0 }
    }

    pub fn op_count(&self) -> usize {
        self.op_count
    }

    fn log_op(&mut self, op: &str) {
        self.op_count += 1;
        info!("[OP {:04}] {}", self.op_count, op);
    }
}

impl BingoDisplay for LoggingDisplay {
    fn render_grid(&mut self, view: &GridView<'_>) -> Result<(), DisplayError> {
        self.log_op(&format!(
            "render_grid({}x{}, highlighted={})",
            view.grid.rows(),
            view.grid.columns(),
            view.grid.highlighted_index()
        ));
        let result = self.inner.render_grid(view);
        if let Err(e) = &result {
            debug!("render_grid failed: {}", e);
        }
        result
    }

    fn show_too_small(
        &mut self,
        required: (u16, u16),
        actual: (u16, u16),
    ) -> Result<(), DisplayError> {
        self.log_op(&format!("show_too_small({:?}, {:?})", required, actual));
        self.inner.show_too_small(required, actual)
    }

    fn show_win(&mut self, player_name: &str, line: WinLine) -> Result<(), DisplayError> {
        self.log_op(&format!("show_win('{}', {:?})", player_name, line));
        self.inner.show_win(player_name, line)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.log_op(&format!("handle_resize({}, {})", width, height));
        self.inner.handle_resize(width, height)
    }

    fn get_terminal_size(&self) -> (u16, u16) {
        let size = self.inner.get_terminal_size();
        debug!("get_terminal_size() -> {:?}", size);
        size
    }

    fn force_refresh(&mut self) -> Result<(), DisplayError> {
        self.log_op("force_refresh()");
        self.inner.force_refresh()
    }
}

impl Drop for LoggingDisplay {
    fn drop(&mut self) {
        info!(
            "=== DISPLAY LOGGING ENDED ({} operations) ===",
            self.op_count
        );
    }
}
