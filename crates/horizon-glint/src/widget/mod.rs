//! The widget system.
//!
//! Every widget is a self-contained value owned by the host and driven by
//! the host's game loop: once per frame the host calls
//! [`Widget::update`] with the frame's input snapshot and elapsed time,
//! then [`Widget::draw`] with its drawing surface. Widgets hold no
//! references to each other or to any global state.
//!
//! # Frame contract
//!
//! `update` must be called exactly once per frame. The click-edge detector
//! in [`Button`] and the activation edge in [`TextField`] compare against
//! state recorded by the previous update; skipping or doubling calls
//! desyncs them. This is a documented contract, not an accident of the
//! implementation.
//!
//! ```no_run
//! use horizon_glint::widget::Button;
//! use horizon_glint_core::{FrameInput, Rect};
//!
//! let mut quit = Button::new(Rect::new(10.0, 10.0, 120.0, 32.0), "Quit");
//!
//! // inside the game loop:
//! let input = FrameInput::new(); // filled from the host input backend
//! quit.update(&input, 1.0 / 60.0);
//! if quit.is_clicked() {
//!     // handle the click
//! }
//! ```

mod button;
mod text_field;

pub use button::Button;
pub use text_field::TextField;

use horizon_glint_core::FrameInput;

use crate::context::UiContext;
use crate::surface::Surface;

/// The capability every interactive widget exposes to the host loop.
///
/// Implemented by [`Button`] and [`TextField`]; hosts can implement it for
/// their own widgets and drive everything through
/// [`update_all`](crate::update_all)/[`draw_all`](crate::draw_all).
pub trait Widget {
    /// Consume this frame's input and advance animation state.
    ///
    /// `dt` is the elapsed time since the previous frame in seconds; hosts
    /// running a fixed 60 Hz step pass `1.0 / 60.0`.
    fn update(&mut self, input: &FrameInput, dt: f32, ctx: &mut UiContext);

    /// Render to the host's drawing surface.
    fn draw(&self, surface: &mut dyn Surface);
}
