//! Single-line text input field.

use horizon_glint_core::{Color, FrameInput, Key, Point, Rect};
use tracing::warn;

use crate::context::UiContext;
use crate::platform::{ClipboardError, FontFace};
use crate::surface::Surface;
use crate::theme::ColorScheme;
use crate::widget::Widget;

/// Horizontal padding between the border and the text run.
const PADDING: f32 = 5.0;

/// Border thickness in both modes.
const BORDER_THICKNESS: f32 = 2.0;

/// Seconds backspace must be held before repeat-delete starts firing.
const BACKSPACE_HOLD_THRESHOLD: f32 = 0.5;

/// Placeholder text color.
const PLACEHOLDER_COLOR: Color = Color::new(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0);

/// A single-line text input.
///
/// The field has two modes. While *inactive* it only watches for an
/// activating click; while *active* it consumes the frame's typed
/// characters and editing keys. A fresh primary press inside the bounds
/// activates the field, a fresh press outside deactivates it. Both are
/// edge-triggered so a held button does not re-trigger every frame.
///
/// Cursor and length arithmetic operate on Unicode code points, never raw
/// bytes: `max_length` caps the character count and the cursor is always a
/// valid insertion point in `[0, char-count]`.
///
/// # Keyboard handling (while active)
///
/// - Typed characters: inserted at the cursor while capacity remains
/// - Backspace: delete before the cursor; held for 0.5 s it repeat-deletes
/// - Left/Right arrows: move the cursor, clamped
/// - Home/End: jump to start/end
/// - Ctrl+A: cursor to end-of-text
/// - Ctrl+V: paste as much of the clipboard as fits
#[derive(Debug)]
pub struct TextField {
    bounds: Rect,
    text: String,
    max_length: usize,
    placeholder: String,

    background_color: Color,
    border_color: Color,
    text_color: Color,

    font: Option<FontFace>,
    font_size: f32,

    active: bool,
    visible: bool,
    editable: bool,

    cursor: usize,
    blink_timer: f32,
    backspace_hold: f32,
    paste_error: Option<ClipboardError>,
}

impl TextField {
    /// Create an empty field holding at most `max_length` characters.
    ///
    /// No font is attached; [`draw`](Self::draw) renders the box and skips
    /// text and cursor until one is set.
    pub fn new(bounds: Rect, max_length: usize) -> Self {
        Self {
            bounds,
            text: String::new(),
            max_length,
            placeholder: String::new(),
            background_color: Color::WHITE,
            border_color: Color::BLACK,
            text_color: Color::BLACK,
            font: None,
            font_size: 20.0,
            active: false,
            visible: true,
            editable: true,
            cursor: 0,
            blink_timer: 0.0,
            backspace_hold: 0.0,
            paste_error: None,
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Consume this frame's input.
    ///
    /// Must be called exactly once per frame; `dt` is the elapsed time in
    /// seconds. When the field is not editable this is a complete no-op:
    /// no blink, no activation tracking, no text handling.
    pub fn update(&mut self, input: &FrameInput, dt: f32, ctx: &mut UiContext) {
        if !self.editable {
            return;
        }

        // The blink timer runs in both modes; only draw() consumes it, and
        // only while active.
        self.blink_timer += dt;
        if self.blink_timer >= 1.0 {
            self.blink_timer = 0.0;
        }

        if input.primary_pressed() {
            self.active = self.bounds.contains(input.pointer());
        }

        if !self.active {
            return;
        }

        for &ch in input.typed() {
            self.insert_char(ch);
        }

        if input.was_pressed(Key::Backspace) {
            self.delete_before_cursor();
        }

        if input.was_pressed(Key::ArrowLeft) && self.cursor > 0 {
            self.cursor -= 1;
        }
        if input.was_pressed(Key::ArrowRight) && self.cursor < self.char_count() {
            self.cursor += 1;
        }
        if input.was_pressed(Key::Home) {
            self.cursor = 0;
        }
        if input.was_pressed(Key::End) {
            self.cursor = self.char_count();
        }

        if input.is_down(Key::Backspace) {
            self.backspace_hold += dt;
            if self.backspace_hold > BACKSPACE_HOLD_THRESHOLD {
                // Pin the timer past the threshold so the repeat keeps
                // firing every frame until release.
                self.backspace_hold = 1.0;
                self.delete_before_cursor();
            }
        } else {
            self.backspace_hold = 0.0;
        }

        if input.is_down(Key::Control) && input.was_pressed(Key::A) {
            self.cursor = self.char_count();
        }

        if input.is_down(Key::Control) && input.was_pressed(Key::V) {
            match ctx.paste() {
                Ok(clip) => self.insert_clipboard(&clip),
                Err(err) => {
                    warn!("paste into text field failed: {err}");
                    self.paste_error = Some(err);
                }
            }
        }
    }

    /// Render the field.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }

        surface.fill_rect(self.bounds, self.background_color);

        // Red border is the active-mode indicator; a hard switch, not
        // animated.
        let border_color = if self.active {
            Color::RED
        } else {
            self.border_color
        };
        surface.stroke_rect(self.bounds, BORDER_THICKNESS, border_color);

        let Some(font) = &self.font else {
            return;
        };

        let text_y = self.bounds.top() + (self.bounds.height() - self.font_size) / 2.0;
        let text_pos = Point::new(self.bounds.left() + PADDING, text_y);

        // Text and placeholder are mutually exclusive.
        if self.text.is_empty() && !self.placeholder.is_empty() {
            surface.draw_text(&self.placeholder, font, text_pos, PLACEHOLDER_COLOR);
        } else {
            surface.draw_text(&self.text, font, text_pos, self.text_color);
        }

        if self.active && self.blink_timer < 0.5 {
            let prefix = &self.text[..self.byte_offset(self.cursor)];
            let cursor_x = self.bounds.left() + PADDING + surface.text_width(prefix, font);
            surface.line(
                Point::new(cursor_x, text_y),
                Point::new(cursor_x, text_y + self.font_size),
                1.0,
                self.text_color,
            );
        }
    }

    // =========================================================================
    // Text access
    // =========================================================================

    /// Get the current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text wholesale.
    ///
    /// Truncates to `max_length` characters and moves the cursor to the end
    /// of the stored text. No validation beyond the length cap: arbitrary
    /// content is accepted verbatim.
    pub fn set_value(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.text = if value.chars().count() > self.max_length {
            value.chars().take(self.max_length).collect()
        } else {
            value
        };
        self.cursor = self.char_count();
    }

    /// Get the text length in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Get the maximum text length in characters.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Current cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    // =========================================================================
    // Mode control
    // =========================================================================

    /// Enter edit mode and move the cursor to the end of the text.
    pub fn activate(&mut self) {
        self.active = true;
        self.cursor = self.char_count();
    }

    /// Leave edit mode.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Check if the field is in edit mode.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The clipboard error from a failed paste, if one happened since the
    /// last call. Taking it clears the slot.
    pub fn take_paste_error(&mut self) -> Option<ClipboardError> {
        self.paste_error.take()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Get the bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Replace the bounds wholesale (move/resize).
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Set the placeholder shown while the field is empty.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// Set placeholder using builder pattern.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Set the background, border, and text colors.
    pub fn set_colors(&mut self, background: Color, border: Color, text: Color) {
        self.background_color = background;
        self.border_color = border;
        self.text_color = text;
    }

    /// Assign the palette from a scheme preset (background, border, text).
    pub fn apply_scheme(&mut self, scheme: &ColorScheme) {
        self.set_colors(scheme.background, scheme.border, scheme.text);
    }

    /// Set the font used for text, placeholder, and cursor measurement.
    pub fn set_font(&mut self, font: Option<FontFace>) {
        self.font = font;
    }

    /// Set font using builder pattern.
    pub fn with_font(mut self, font: FontFace) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the font size (used for vertical layout and cursor height).
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Show or hide the field. Hidden fields skip drawing entirely.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if the field is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Freeze or unfreeze the widget. A frozen field ignores updates
    /// entirely, including activation clicks and the blink timer.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Check if the widget responds to updates.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    // =========================================================================
    // Internal: code-point editing
    // =========================================================================

    /// Byte offset of the given character index.
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    /// Insert one character at the cursor if capacity remains.
    fn insert_char(&mut self, ch: char) {
        if self.char_count() < self.max_length {
            let at = self.byte_offset(self.cursor);
            self.text.insert(at, ch);
            self.cursor += 1;
        }
    }

    /// Delete the character before the cursor, if any.
    fn delete_before_cursor(&mut self) {
        if self.cursor > 0 {
            let start = self.byte_offset(self.cursor - 1);
            let end = self.byte_offset(self.cursor);
            self.text.replace_range(start..end, "");
            self.cursor -= 1;
        }
    }

    /// Insert as much of the pasted text as fits the remaining capacity,
    /// advancing the cursor past the inserted span.
    fn insert_clipboard(&mut self, clip: &str) {
        if clip.is_empty() {
            return;
        }
        let remaining = self.max_length.saturating_sub(self.char_count());
        if remaining == 0 {
            return;
        }
        let inserted: String = clip.chars().take(remaining).collect();
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &inserted);
        self.cursor += inserted.chars().count();
    }
}

impl Widget for TextField {
    fn update(&mut self, input: &FrameInput, dt: f32, ctx: &mut UiContext) {
        TextField::update(self, input, dt, ctx);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        TextField::draw(self, surface);
    }
}
