//! Horizon Glint - retained-mode GUI widgets for game-loop hosts.
//!
//! Glint provides a clickable [`Button`] and a single-line [`TextField`]
//! plus the utilities around them: clipboard access, font loading, and
//! color-scheme presets. It has no event loop of its own: the host's game
//! loop polls its input backend into a
//! [`FrameInput`](horizon_glint_core::FrameInput), calls
//! [`Widget::update`](widget::Widget::update) on every widget, then hands
//! its drawing target to [`Widget::draw`](widget::Widget::draw).
//!
//! # Example
//!
//! ```no_run
//! use horizon_glint::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let font = FontFace::load("assets/DejaVuSans.ttf", 20.0)?;
//!     let mut ctx = UiContext::new().with_default_font(font);
//!
//!     let mut ok = horizon_glint::rounded_button(
//!         &ctx,
//!         Rect::new(10.0, 10.0, 120.0, 32.0),
//!         "OK",
//!         6.0,
//!     );
//!     let mut name = horizon_glint::text_field_with_placeholder(
//!         &ctx,
//!         Rect::new(10.0, 50.0, 220.0, 32.0),
//!         32,
//!         "Enter your name...",
//!     );
//!
//!     // inside the game loop, with `input`, `dt`, and a Surface `frame`:
//!     # let (input, dt) = (FrameInput::new(), 1.0f32 / 60.0);
//!     horizon_glint::update_all(&mut [&mut ok, &mut name], &input, dt, &mut ctx);
//!     if ok.is_clicked() {
//!         println!("hello, {}", name.text());
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod platform;
pub mod surface;
pub mod theme;
pub mod widget;

pub use horizon_glint_core::{
    Color, CornerRadii, FrameInput, Key, Path, PathCommand, Point, Rect, Size,
};

pub use context::UiContext;
pub use platform::{Clipboard, ClipboardError, FontError, FontFace, MemoryClipboard, TextClipboard};
pub use surface::Surface;
pub use theme::ColorScheme;
pub use widget::{Button, TextField, Widget};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::context::UiContext;
    pub use crate::platform::{Clipboard, ClipboardError, FontError, FontFace, TextClipboard};
    pub use crate::surface::Surface;
    pub use crate::theme::ColorScheme;
    pub use crate::widget::{Button, TextField, Widget};
    pub use horizon_glint_core::{Color, CornerRadii, FrameInput, Key, Path, Point, Rect, Size};
}

// =============================================================================
// Facade constructors
// =============================================================================

/// Create a button with the default rounded corners and the context's
/// default font.
pub fn button(ctx: &UiContext, bounds: Rect, label: impl Into<String>) -> Button {
    let mut btn = Button::new(bounds, label);
    btn.set_font(ctx.default_font().cloned());
    btn
}

/// Create a rounded-corner button with an explicit corner radius.
pub fn rounded_button(
    ctx: &UiContext,
    bounds: Rect,
    label: impl Into<String>,
    corner_radius: f32,
) -> Button {
    let mut btn = button(ctx, bounds, label);
    btn.set_rounded_corners(true);
    btn.set_corner_radius(corner_radius);
    btn
}

/// Create a sharp-cornered button.
pub fn normal_button(ctx: &UiContext, bounds: Rect, label: impl Into<String>) -> Button {
    let mut btn = button(ctx, bounds, label);
    btn.set_rounded_corners(false);
    btn
}

/// Create a pointy (hexagonal) button whose side points extrude by
/// `pointy_amount`.
pub fn pointy_button(
    ctx: &UiContext,
    bounds: Rect,
    label: impl Into<String>,
    pointy_amount: f32,
) -> Button {
    let mut btn = button(ctx, bounds, label);
    btn.set_pointy_style(true);
    btn.set_pointy_amount(pointy_amount);
    btn
}

/// Create a text field with the context's default font.
pub fn text_field(ctx: &UiContext, bounds: Rect, max_length: usize) -> TextField {
    let mut tf = TextField::new(bounds, max_length);
    tf.set_font(ctx.default_font().cloned());
    tf
}

/// Create a text field with a placeholder shown while empty.
pub fn text_field_with_placeholder(
    ctx: &UiContext,
    bounds: Rect,
    max_length: usize,
    placeholder: impl Into<String>,
) -> TextField {
    let mut tf = text_field(ctx, bounds, max_length);
    tf.set_placeholder(placeholder);
    tf
}

// =============================================================================
// Batch helpers
// =============================================================================

/// Update every widget once with the same input snapshot.
pub fn update_all(widgets: &mut [&mut dyn Widget], input: &FrameInput, dt: f32, ctx: &mut UiContext) {
    for widget in widgets.iter_mut() {
        widget.update(input, dt, ctx);
    }
}

/// Draw every widget to the same surface, in slice order.
pub fn draw_all(surface: &mut dyn Surface, widgets: &[&dyn Widget]) {
    for widget in widgets {
        widget.draw(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_constructors_apply_default_font() {
        let ctx = UiContext::new().with_default_font(FontFace::with_uniform_advance(16.0, 8.0));
        let bounds = Rect::new(0.0, 0.0, 100.0, 30.0);

        let btn = button(&ctx, bounds, "Go");
        assert_eq!(btn.label(), "Go");

        let tf = text_field_with_placeholder(&ctx, bounds, 8, "name...");
        assert_eq!(tf.placeholder(), "name...");
        assert_eq!(tf.max_length(), 8);
    }

    #[test]
    fn test_pointy_button_configuration() {
        let ctx = UiContext::new();
        let btn = pointy_button(&ctx, Rect::new(0.0, 0.0, 80.0, 24.0), "Fire", 12.0);
        assert!(btn.is_pointy_style());
    }

    #[test]
    fn test_normal_button_has_sharp_corners() {
        let ctx = UiContext::new();
        let btn = normal_button(&ctx, Rect::new(0.0, 0.0, 80.0, 24.0), "Flat");
        assert!(!btn.is_rounded_corners());
    }

    #[test]
    fn test_update_all_fans_out() {
        let mut ctx = UiContext::new();
        let bounds = Rect::new(0.0, 0.0, 100.0, 30.0);
        let mut btn = Button::new(bounds, "A");
        let mut tf = TextField::new(bounds, 8);

        let mut input = FrameInput::new();
        input.set_pointer(Point::new(50.0, 15.0));
        input.set_primary(false, false);

        update_all(&mut [&mut btn, &mut tf], &input, 1.0 / 60.0, &mut ctx);
        assert!(btn.is_hovered());
    }
}
