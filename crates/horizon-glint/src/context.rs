//! The application context passed to widget updates.
//!
//! `UiContext` carries the two pieces of shared environment widgets need:
//! an optional default font applied by the facade constructors, and the
//! clipboard used by text-field paste. Both are explicitly owned values:
//! there is no process-wide global, and a host that wants two independent
//! UI stacks simply creates two contexts.

use std::fmt;

use crate::platform::{Clipboard, ClipboardError, FontFace, TextClipboard};

/// Shared environment for a family of widgets.
///
/// The host creates one `UiContext` during initialization, configures the
/// default font if it wants one, and passes the context to every widget
/// update. The system clipboard is opened lazily on first use; a failed
/// open is reported to the caller and retried on the next access.
#[derive(Default)]
pub struct UiContext {
    default_font: Option<FontFace>,
    clipboard: Option<Box<dyn TextClipboard>>,
}

impl UiContext {
    /// Create a context with no default font and the system clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font using builder pattern.
    pub fn with_default_font(mut self, font: FontFace) -> Self {
        self.default_font = Some(font);
        self
    }

    /// Set the clipboard implementation using builder pattern.
    pub fn with_clipboard(mut self, clipboard: impl TextClipboard + 'static) -> Self {
        self.clipboard = Some(Box::new(clipboard));
        self
    }

    /// Get the default font, if one is configured.
    pub fn default_font(&self) -> Option<&FontFace> {
        self.default_font.as_ref()
    }

    /// Set or clear the default font.
    pub fn set_default_font(&mut self, font: Option<FontFace>) {
        self.default_font = font;
    }

    /// Replace the clipboard implementation.
    pub fn set_clipboard(&mut self, clipboard: impl TextClipboard + 'static) {
        self.clipboard = Some(Box::new(clipboard));
    }

    /// Copy text to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be opened or written.
    pub fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard_mut()?.set_text(text)
    }

    /// Read text from the clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the clipboard cannot be opened, is empty, or
    /// holds non-text content.
    pub fn paste(&mut self) -> Result<String, ClipboardError> {
        self.clipboard_mut()?.get_text()
    }

    fn clipboard_mut(&mut self) -> Result<&mut dyn TextClipboard, ClipboardError> {
        let boxed = match &mut self.clipboard {
            Some(boxed) => boxed,
            empty => empty.insert(Box::new(Clipboard::new()?)),
        };
        Ok(boxed.as_mut())
    }
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("default_font", &self.default_font)
            .field("has_clipboard", &self.clipboard.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryClipboard;

    #[test]
    fn test_default_font_configuration() {
        let mut ctx = UiContext::new();
        assert!(ctx.default_font().is_none());

        ctx.set_default_font(Some(FontFace::with_uniform_advance(16.0, 8.0)));
        assert!(ctx.default_font().is_some());

        ctx.set_default_font(None);
        assert!(ctx.default_font().is_none());
    }

    #[test]
    fn test_copy_paste_through_injected_clipboard() {
        let mut ctx = UiContext::new().with_clipboard(MemoryClipboard::new());
        ctx.copy("hello").unwrap();
        assert_eq!(ctx.paste().unwrap(), "hello");
    }

    #[test]
    fn test_paste_from_empty_memory_clipboard_fails() {
        let mut ctx = UiContext::new().with_clipboard(MemoryClipboard::new());
        assert!(ctx.paste().is_err());
    }
}
