use std::{
    io::{self, Stdout},
    panic,
    sync::Once,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::{debug, warn};

static RESTORE_ON_PANIC: Once = Once::new();

/// The editor's alternate screen. Raw mode lasts as long as the value does.
pub struct Screen {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Screen {
    pub fn enter() -> Result<Self> {
        RESTORE_ON_PANIC.call_once(|| {
            let report = panic::take_hook();
            panic::set_hook(Box::new(move |info| {
                leave_raw_screen();
                report(info);
            }));
        });

        enable_raw_mode().context("failed to enable raw mode")?;
        let terminal = execute!(io::stdout(), EnterAlternateScreen)
            .context("failed to enter alternate screen")
            .and_then(|_| {
                Terminal::new(CrosstermBackend::new(io::stdout()))
                    .context("failed to initialize terminal")
            })
            .inspect_err(|_| leave_raw_screen())?;
        debug!("entered alternate screen");
        Ok(Self { terminal })
    }

    /// Draws one frame of the editor.
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame<'_>)) -> Result<()> {
        self.terminal
            .draw(draw)
            .map(|_| ())
            .context("failed to draw frame")
    }

    pub fn fit(&mut self, width: u16, height: u16) -> Result<()> {
        self.terminal
            .resize(Rect::new(0, 0, width, height))
            .context("failed to resize terminal")
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        if let Err(err) = self.terminal.show_cursor() {
            warn!(error = %err, "cursor left hidden");
        }
        leave_raw_screen();
        debug!("left alternate screen");
    }
}

fn leave_raw_screen() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}
