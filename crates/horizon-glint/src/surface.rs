//! The drawing surface trait implemented by hosts.
//!
//! Widgets never own a framebuffer. Each frame the host hands its drawing
//! target to [`Widget::draw`](crate::widget::Widget::draw) as a
//! `&mut dyn Surface`, and the widget issues shape and text calls addressed
//! in the same coordinate space as its bounds.
//!
//! # Implementing a surface
//!
//! ```ignore
//! use horizon_glint::{Surface, FontFace};
//! use horizon_glint_core::{Color, Path, Point, Rect};
//!
//! struct MySurface<'a> {
//!     target: &'a mut my_renderer::Frame,
//! }
//!
//! impl Surface for MySurface<'_> {
//!     fn fill_rect(&mut self, rect: Rect, color: Color) {
//!         self.target.quad(rect.left(), rect.top(), rect.width(), rect.height(), color.to_array());
//!     }
//!     // ...remaining shape and text calls...
//! }
//! ```

use horizon_glint_core::{Color, Path, Point, Rect};

use crate::platform::FontFace;

/// Host-provided drawing target.
///
/// All calls are synchronous and complete within the frame; none can fail.
/// The default [`text_width`](Self::text_width) measures with the font's own
/// advance metrics; hosts with a real shaping stack should override it so
/// cursor placement matches their rendered glyphs.
pub trait Surface {
    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Draw a straight line segment.
    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Color);

    /// Fill a closed path (rounded rectangles, pointy outlines).
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a closed path.
    fn stroke_path(&mut self, path: &Path, thickness: f32, color: Color);

    /// Draw a text run with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, font: &FontFace, pos: Point, color: Color);

    /// Width of `text` as this surface would render it.
    fn text_width(&mut self, text: &str, font: &FontFace) -> f32 {
        font.measure(text)
    }
}
