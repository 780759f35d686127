//! Application controller.
//!
//! Owns the terminal lifecycle and the blocking event loop: draw, wait
//! for a key, apply it, repeat. The terminal is restored through `Drop`,
//! so raw mode and the alternate screen are unwound on every exit path,
//! including errors and Ctrl-C.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::event::{apply_action, handle_event, poll_event, Action};
use crate::ui::render;
use crate::viewer::ViewerState;

/// The main application controller.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    state: ViewerState,
    /// Event poll timeout
    tick_rate: Duration,
}

impl App {
    /// Puts the terminal in raw mode on the alternate screen and wraps
    /// the viewer state.
    pub fn new(state: ViewerState) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            state,
            tick_rate: Duration::from_millis(50),
        })
    }

    /// Runs the main loop until the user quits.
    pub fn run(&mut self) -> Result<()> {
        self.sync_viewport()?;

        loop {
            self.terminal.draw(|frame| {
                render(frame, &self.state);
            })?;

            if let Some(event) = poll_event(self.tick_rate) {
                let action = handle_event(event, self.state.pending_g);

                // Resize carries the new dimensions; geometry is
                // recomputed before the next draw, content is not
                if let Action::Resize(width, height) = action {
                    self.state.resize(Rect::new(0, 0, width, height));
                }

                apply_action(&mut self.state, action);

                if self.state.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the terminal size and hands it to the viewport.
    fn sync_viewport(&mut self) -> Result<()> {
        let size = self.terminal.size()?;
        self.state.resize(Rect::new(0, 0, size.width, size.height));
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Convenience function to run the viewer with a prepared state.
pub fn run_app(state: ViewerState) -> Result<()> {
    let mut app = App::new(state)?;
    app.run()
}

#[cfg(test)]
mod tests {
    use crate::color::TermCaps;
    use crate::model::{Alignment, Alphabet, Sequence};
    use crate::viewer::ViewerState;

    #[test]
    fn test_viewer_state_creation() {
        let sequences = vec![Sequence::new("seq1", "ACGT"), Sequence::new("seq2", "TGCA")];
        let state = ViewerState::new(
            Alignment::new(sequences),
            "test.fasta".into(),
            false,
            Alphabet::Nucleotide,
            TermCaps {
                supports_colour: true,
                supports_rgb: false,
            },
        )
        .unwrap();

        assert_eq!(state.alignment.sequence_count(), 2);
        assert!(!state.should_quit);
        assert!(!state.pending_g);
    }
}
