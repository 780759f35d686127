//! Keyboard event handling.
//!
//! Key bindings:
//! - `q`/`Q` or Ctrl-C: quit
//! - `j`/`s`/Down: page down, `k`/`w`/Up: page up
//! - `l`/`d`/Right: scroll right 10 columns, `h`/`a`/Left: scroll left 10
//! - `gg` or PageUp: first sequence, `G` or PageDown: last page
//! - `^`/Home: first column, `$`/End: last column
//! - `+`/`-`: grow/shrink the id panel, `=`/`0`: widest/hidden
//! - `1`-`5`: colour scheme

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::viewer::ViewerState;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the viewer
    Quit,
    /// Scroll down one page of sequences
    PageDown,
    /// Scroll up one page of sequences
    PageUp,
    /// Scroll right ten columns
    ScrollRight,
    /// Scroll left ten columns
    ScrollLeft,
    /// Jump to the first sequence
    JumpTop,
    /// Jump to the last page of sequences
    JumpBottom,
    /// Jump to the first column
    JumpLineStart,
    /// Jump to the last page of columns
    JumpLineEnd,
    /// Widen the id panel by one
    GrowIdPanel,
    /// Narrow the id panel by one
    ShrinkIdPanel,
    /// Widen the id panel to the longest id
    MaximiseIdPanel,
    /// Hide the id panel
    MinimiseIdPanel,
    /// Select colour scheme 1-5
    SelectScheme(u8),
    /// First key of the `gg` sequence seen
    PendingG,
    /// Terminal resized
    Resize(u16, u16),
}

/// Polls for an input event with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action.
pub fn handle_event(event: Event, pending_g: bool) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, pending_g),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Decodes one key press. When a `g` is pending, only a second `g`
/// completes the jump; any other key cancels the sequence.
fn handle_key_event(key: KeyEvent, pending_g: bool) -> Action {
    if pending_g {
        return match key.code {
            KeyCode::Char('g') => Action::JumpTop,
            _ => Action::None,
        };
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,

        KeyCode::Char('j') | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Action::PageDown
        }
        KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Action::PageUp
        }
        KeyCode::Char('l') | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Action::ScrollRight
        }
        KeyCode::Char('h') | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Action::ScrollLeft
        }

        KeyCode::Char('g') => Action::PendingG,
        KeyCode::PageUp => Action::JumpTop,
        KeyCode::Char('G') | KeyCode::PageDown => Action::JumpBottom,
        KeyCode::Char('^') | KeyCode::Home => Action::JumpLineStart,
        KeyCode::Char('$') | KeyCode::End => Action::JumpLineEnd,

        KeyCode::Char('+') => Action::GrowIdPanel,
        KeyCode::Char('-') => Action::ShrinkIdPanel,
        KeyCode::Char('=') => Action::MaximiseIdPanel,
        KeyCode::Char('0') => Action::MinimiseIdPanel,

        KeyCode::Char(c @ '1'..='5') => Action::SelectScheme(c as u8 - b'0'),

        _ => Action::None,
    }
}

/// Applies an action to the viewer state.
///
/// Returns `true` if the viewer should keep running.
pub fn apply_action(state: &mut ViewerState, action: Action) -> bool {
    // Any action other than PendingG consumes a pending g
    if action != Action::PendingG {
        state.pending_g = false;
    }

    match action {
        Action::None => {}
        Action::Quit => state.should_quit = true,
        Action::PageDown => state.page_down(),
        Action::PageUp => state.page_up(),
        Action::ScrollRight => state.scroll_right(),
        Action::ScrollLeft => state.scroll_left(),
        Action::JumpTop => state.jump_top(),
        Action::JumpBottom => state.jump_bottom(),
        Action::JumpLineStart => state.jump_line_start(),
        Action::JumpLineEnd => state.jump_line_end(),
        Action::GrowIdPanel => state.grow_id_panel(),
        Action::ShrinkIdPanel => state.shrink_id_panel(),
        Action::MaximiseIdPanel => state.maximise_id_panel(),
        Action::MinimiseIdPanel => state.minimise_id_panel(),
        Action::SelectScheme(n) => state.set_scheme(n),
        Action::PendingG => state.pending_g = true,
        Action::Resize(_, _) => {
            // handled by the controller, which knows the terminal area
        }
    }

    !state.should_quit
}
