//! Clipboard access for cross-platform copy/paste operations.
//!
//! [`Clipboard`] is a thin wrapper around the `arboard` crate and is the
//! implementation used on desktop hosts. The [`TextClipboard`] trait is the
//! seam the widgets see: a [`UiContext`](crate::context::UiContext) can
//! carry any implementation, which keeps paste handling testable and lets
//! hosts without a system clipboard (headless tools, sandboxed or
//! wasm-style environments) substitute [`MemoryClipboard`].
//!
//! # Example
//!
//! ```ignore
//! use horizon_glint::platform::{Clipboard, TextClipboard};
//!
//! if let Ok(mut clipboard) = Clipboard::new() {
//!     clipboard.set_text("Hello, world!").ok();
//!     if let Ok(text) = clipboard.get_text() {
//!         println!("Clipboard contains: {}", text);
//!     }
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// Error type for clipboard operations.
#[derive(Debug, Error)]
#[error("clipboard error: {message}")]
pub struct ClipboardError {
    message: String,
}

impl ClipboardError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Text transfer to and from a clipboard.
///
/// Implementations should perform their work synchronously; widget updates
/// call these methods from inside a single frame.
pub trait TextClipboard {
    /// Get the current text content from the clipboard.
    fn get_text(&mut self) -> Result<String, ClipboardError>;

    /// Replace the clipboard content with the provided text.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Cross-platform system clipboard access.
///
/// While `Clipboard` is `Send`, it's recommended to perform clipboard
/// operations on the main/UI thread for best compatibility across platforms.
pub struct Clipboard {
    inner: arboard::Clipboard,
}

impl Clipboard {
    /// Create a new clipboard instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be accessed, which can
    /// happen if the system clipboard is unavailable or locked by another
    /// process.
    pub fn new() -> Result<Self, ClipboardError> {
        Ok(Self {
            inner: arboard::Clipboard::new()?,
        })
    }
}

impl TextClipboard for Clipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.inner.get_text().map_err(Into::into)
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner.set_text(text).map_err(Into::into)
    }
}

impl fmt::Debug for Clipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clipboard").finish_non_exhaustive()
    }
}

/// An in-process clipboard holding a single text value.
///
/// For hosts with no system clipboard and for tests. An empty clipboard
/// reports a failure from [`get_text`](TextClipboard::get_text), matching
/// the system clipboard's behavior when no text is available.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    /// Create an empty in-process clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-process clipboard preloaded with text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }
}

impl TextClipboard for MemoryClipboard {
    fn get_text(&mut self) -> Result<String, ClipboardError> {
        self.content
            .clone()
            .ok_or_else(|| ClipboardError::new("clipboard is empty"))
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.content = Some(text.to_owned());
        Ok(())
    }
}
