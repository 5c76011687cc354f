//! Per-frame input snapshot.
//!
//! Widgets never poll the operating system. The host reads its own input
//! backend once per frame, fills in a [`FrameInput`], and passes it to every
//! widget update. Widgets only read the snapshot; "just pressed" edges are
//! the host's responsibility to compute between its own polls.

use crate::geometry::Point;

/// The keys widgets consume.
///
/// This is deliberately not a full keyboard map: only the keys that drive
/// widget interaction are named. Printable input arrives through the typed
/// character batch instead, so character keys other than the shortcut
/// letters have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Backspace.
    Backspace,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// The platform shortcut modifier (Ctrl, or Cmd on macOS hosts).
    Control,
    /// The letter A (select-all shortcut when the modifier is held).
    A,
    /// The letter V (paste shortcut when the modifier is held).
    V,
}

/// Input state for one frame.
///
/// The snapshot carries the pointer position, the primary-button state (held
/// and just-pressed), per-key held/just-pressed state, and the ordered batch
/// of characters typed since the previous poll.
///
/// Hosts either rebuild the snapshot each frame or reuse one via
/// [`clear`](Self::clear). The typed batch is expected to contain printable
/// characters only; control keys are reported through [`Key`] state.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pointer: Point,
    primary_down: bool,
    primary_pressed: bool,
    typed: Vec<char>,
    down: Vec<Key>,
    pressed: Vec<Key>,
}

impl FrameInput {
    /// Create an empty snapshot with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Host-side recording
    // =========================================================================

    /// Set the pointer position for this frame.
    pub fn set_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Set the primary button state: currently held, and whether this frame
    /// is the press edge.
    pub fn set_primary(&mut self, down: bool, just_pressed: bool) {
        self.primary_down = down;
        self.primary_pressed = just_pressed;
    }

    /// Append a typed character to the batch. Order is preserved.
    pub fn push_char(&mut self, ch: char) {
        self.typed.push(ch);
    }

    /// Append a string of typed characters to the batch.
    pub fn push_str(&mut self, text: &str) {
        self.typed.extend(text.chars());
    }

    /// Record a key that went down this frame (held + just-pressed).
    pub fn press_key(&mut self, key: Key) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
        self.hold_key(key);
    }

    /// Record a key that is held this frame without a fresh press edge.
    pub fn hold_key(&mut self, key: Key) {
        if !self.down.contains(&key) {
            self.down.push(key);
        }
    }

    /// Reset the per-frame state (typed batch, edges, key sets) so the
    /// snapshot can be refilled for the next frame. The pointer position is
    /// kept; it is absolute, not an edge.
    pub fn clear(&mut self) {
        self.primary_down = false;
        self.primary_pressed = false;
        self.typed.clear();
        self.down.clear();
        self.pressed.clear();
    }

    // =========================================================================
    // Widget-side queries
    // =========================================================================

    /// Current pointer position.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Whether the primary button is currently held.
    #[inline]
    pub fn primary_down(&self) -> bool {
        self.primary_down
    }

    /// Whether the primary button was freshly pressed this frame.
    #[inline]
    pub fn primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// The characters typed since the previous poll, in typing order.
    #[inline]
    pub fn typed(&self) -> &[char] {
        &self.typed
    }

    /// Whether a key is currently held.
    #[inline]
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Whether a key was freshly pressed this frame.
    #[inline]
    pub fn was_pressed(&self, key: Key) -> bool {
        self.pressed.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_batch_preserves_order() {
        let mut input = FrameInput::new();
        input.push_char('h');
        input.push_char('i');
        input.push_str("ya");
        assert_eq!(input.typed(), &['h', 'i', 'y', 'a']);
    }

    #[test]
    fn test_press_implies_down() {
        let mut input = FrameInput::new();
        input.press_key(Key::Backspace);
        assert!(input.was_pressed(Key::Backspace));
        assert!(input.is_down(Key::Backspace));
    }

    #[test]
    fn test_hold_is_not_a_press() {
        let mut input = FrameInput::new();
        input.hold_key(Key::Control);
        assert!(input.is_down(Key::Control));
        assert!(!input.was_pressed(Key::Control));
    }

    #[test]
    fn test_clear_keeps_pointer() {
        let mut input = FrameInput::new();
        input.set_pointer(Point::new(5.0, 6.0));
        input.set_primary(true, true);
        input.push_char('x');
        input.press_key(Key::Home);

        input.clear();
        assert_eq!(input.pointer(), Point::new(5.0, 6.0));
        assert!(!input.primary_down());
        assert!(!input.primary_pressed());
        assert!(input.typed().is_empty());
        assert!(!input.is_down(Key::Home));
    }
}
