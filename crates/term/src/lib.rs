//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It renders into
//! a framebuffer that is diffed and flushed to a crossterm backend, without
//! any widget/layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render tile colours exactly (24-bit, alpha composited onto the panel)
//! - Map mouse clicks back to tile indices with the same layout used to draw

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;

pub use colour_clicker_core as core;
pub use colour_clicker_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, Banner, GameView, GridLayout, HudView, Viewport, PANEL_BG};
pub use render_throttle::{frame_fingerprint, RenderThrottle};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
