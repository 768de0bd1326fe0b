//! Editor state and key dispatch.
//!
//! [`Editor`] owns everything a frame needs: the screen geometry, the cursor
//! and the optional loaded row. Keys mutate it through
//! [`Editor::process_key`]; the painter only reads it.

mod row;

pub use row::Row;

use crate::error::Result;
use crate::input::{Key, ctrl_key};
use crate::terminal::Geometry;
use std::path::Path;

/// The byte that quits the editor (Ctrl-X).
pub const QUIT_KEY: u8 = ctrl_key(b'x');

/// Cursor position in 0-indexed screen cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

/// A single-step cursor movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// What the control loop should do after a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Keep running.
    Continue,
    /// Leave the editor.
    Quit,
}

/// Editor state.
#[derive(Clone, Debug)]
pub struct Editor {
    geometry: Geometry,
    cursor: Cursor,
    row: Option<Row>,
}

impl Editor {
    /// Create an empty editor for a screen of the given size.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            cursor: Cursor::default(),
            row: None,
        }
    }

    /// Create an editor showing `row`.
    #[must_use]
    pub fn with_row(geometry: Geometry, row: Row) -> Self {
        Self {
            row: Some(row),
            ..Self::new(geometry)
        }
    }

    /// Load the first line of `path`.
    ///
    /// An empty file leaves the editor without a row.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.row = Row::open(path)?;
        Ok(())
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn row(&self) -> Option<&Row> {
        self.row.as_ref()
    }

    /// Place the cursor, clamping it onto the screen.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Cursor {
            x: x.min(self.geometry.last_col()),
            y: y.min(self.geometry.last_row()),
        };
    }

    /// Move the cursor one cell. Moves past a screen edge do nothing.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (last_col, last_row) = (self.geometry.last_col(), self.geometry.last_row());
        let cursor = &mut self.cursor;
        match direction {
            Direction::Left => cursor.x = cursor.x.saturating_sub(1),
            Direction::Right => {
                if cursor.x < last_col {
                    cursor.x += 1;
                }
            }
            Direction::Up => cursor.y = cursor.y.saturating_sub(1),
            Direction::Down => {
                if cursor.y < last_row {
                    cursor.y += 1;
                }
            }
        }
    }

    /// Apply one key.
    pub fn process_key(&mut self, key: Key) -> Action {
        match key {
            Key::Ctrl(QUIT_KEY) => return Action::Quit,
            Key::Home => self.cursor.x = 0,
            Key::End => self.cursor.x = self.geometry.last_col(),
            Key::PageUp | Key::PageDown => {
                let direction = if key == Key::PageUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                for _ in 0..self.geometry.rows() {
                    self.move_cursor(direction);
                }
            }
            Key::ArrowLeft => self.move_cursor(Direction::Left),
            Key::ArrowRight => self.move_cursor(Direction::Right),
            Key::ArrowUp => self.move_cursor(Direction::Up),
            Key::ArrowDown => self.move_cursor(Direction::Down),
            Key::Char(_) | Key::Ctrl(_) | Key::Delete | Key::Escape => {}
        }
        Action::Continue
    }
}
