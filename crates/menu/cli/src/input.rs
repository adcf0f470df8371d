//! Input processing for the terminal frontend.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events. The [`InputSource`] seam lets tests
//! drive the screen loop with a scripted event stream.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use menu_core::MenuInput;

/// One event polled from the frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// A decoded menu navigation input.
    Key(MenuInput),
    /// The terminal was resized; layout must be recomputed.
    Resize,
}

/// Source of UI events for the screen loop.
///
/// One call corresponds to one frame: the poll must not block, the frame
/// clock owns all waiting.
pub trait InputSource {
    fn poll(&mut self) -> Result<Option<UiEvent>>;
}

/// Crossterm-backed input source used by the real terminal.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> Result<Option<UiEvent>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(decode_key(key).map(UiEvent::Key))
            }
            Event::Resize(_, _) => Ok(Some(UiEvent::Resize)),
            _ => Ok(None),
        }
    }
}

/// Converts a raw key event into a menu input.
pub fn decode_key(key: KeyEvent) -> Option<MenuInput> {
    match key.code {
        KeyCode::Char(ch) => decode_char(ch),
        KeyCode::Up => Some(MenuInput::Up),
        KeyCode::Down => Some(MenuInput::Down),
        KeyCode::PageUp => Some(MenuInput::PageUp),
        KeyCode::PageDown => Some(MenuInput::PageDown),
        KeyCode::Home => Some(MenuInput::Home),
        KeyCode::End => Some(MenuInput::End),
        KeyCode::Enter => Some(MenuInput::Confirm),
        KeyCode::Esc => Some(MenuInput::Cancel),
        _ => None,
    }
}

fn decode_char(raw: char) -> Option<MenuInput> {
    let ch = raw.to_ascii_lowercase();
    match ch {
        'k' | 'w' => Some(MenuInput::Up),
        'j' | 's' => Some(MenuInput::Down),
        ' ' => Some(MenuInput::Confirm),
        'q' => Some(MenuInput::Cancel),
        _ => None,
    }
}
