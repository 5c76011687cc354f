//! Adapters for host operating-environment services.
//!
//! Everything here is a synchronous call into the outside world: the system
//! clipboard and font files on disk. Failures are surfaced as explicit
//! `Result`s; the widgets themselves never touch these services directly
//! except through the [`UiContext`](crate::context::UiContext) seam.

mod clipboard;
mod font;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, TextClipboard};
pub use font::{FontError, FontFace};
