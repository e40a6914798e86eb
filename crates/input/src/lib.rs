//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key and
//! mouse events into [`InputAction`]s and tracks the keyboard cursor over the
//! tile grid. Deciding what an action means in the current phase is left to
//! the host.

pub mod cursor;
pub mod map;

pub use cursor::{Direction, TileCursor};
pub use map::{handle_key_event, handle_mouse_event, should_quit, InputAction};
