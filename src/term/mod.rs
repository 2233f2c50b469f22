//! Terminal rendering layer.
//!
//! Renders into a simple styled framebuffer that is flushed to the
//! terminal in one pass, keeping `core` free of any I/O. Cells are
//! drawn two characters wide to compensate for glyph aspect ratio.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, NamePrompt, Viewport};
pub use renderer::TerminalRenderer;
