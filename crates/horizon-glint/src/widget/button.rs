//! Clickable push button with hover/press animation.

use horizon_glint_core::{Color, CornerRadii, FrameInput, Path, Point, Rect};

use crate::context::UiContext;
use crate::platform::FontFace;
use crate::surface::Surface;
use crate::theme::ColorScheme;
use crate::widget::Widget;

/// Rate at which the hover/press animation tracks its target, in progress
/// units per second. At 60 Hz the full idle-to-pressed ramp takes 7.5
/// frames.
const ANIMATION_SPEED: f32 = 8.0;

/// Border thickness at rest and while pressed. The change is a hard snap,
/// not animated.
const BORDER_THICKNESS: f32 = 2.0;
const BORDER_THICKNESS_PRESSED: f32 = 3.0;

/// A clickable button.
///
/// The button derives four logical states from the frame input (idle,
/// hovered, pressed, disabled) and tracks a continuous animation progress
/// value in `[0, 1]` toward whichever state is current (0.0 idle, 0.5
/// hovered, 1.0 pressed). [`draw`](Self::draw) maps that progress onto a
/// two-segment color ramp between the background, hover, and pressed
/// colors.
///
/// Click detection is edge-triggered: [`is_clicked`](Self::is_clicked)
/// reports `true` for exactly one update per physical
/// press-then-release-while-hovered sequence, so hosts can poll it once per
/// frame without debouncing.
///
/// # Example
///
/// ```no_run
/// use horizon_glint::widget::Button;
/// use horizon_glint::ColorScheme;
/// use horizon_glint_core::{FrameInput, Rect};
///
/// let mut save = Button::new(Rect::new(8.0, 8.0, 96.0, 28.0), "Save");
/// save.apply_scheme(&ColorScheme::green());
///
/// // once per frame:
/// let input = FrameInput::new();
/// save.update(&input, 1.0 / 60.0);
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    bounds: Rect,
    label: String,

    background_color: Color,
    hover_color: Color,
    pressed_color: Color,
    border_color: Color,
    text_color: Color,

    font: Option<FontFace>,
    font_size: f32,
    padding: f32,

    rounded_corners: bool,
    corner_radius: f32,
    pointy_style: bool,
    pointy_amount: f32,

    enabled: bool,
    visible: bool,
    editable: bool,

    hovered: bool,
    pressed: bool,
    animation_progress: f32,
    clicked: bool,
    prev_primary_down: bool,
}

impl Button {
    /// Create a button with the default light-gray palette and rounded
    /// corners.
    ///
    /// No font is attached; [`draw`](Self::draw) renders the shape and
    /// silently skips the label until one is set via
    /// [`set_font`](Self::set_font) or a facade constructor.
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        let scheme = ColorScheme::default();
        Self {
            bounds,
            label: label.into(),
            background_color: scheme.background,
            hover_color: scheme.hover,
            pressed_color: scheme.pressed,
            border_color: scheme.border,
            text_color: scheme.text,
            font: None,
            font_size: 20.0,
            padding: 5.0,
            rounded_corners: true,
            corner_radius: 5.0,
            pointy_style: false,
            pointy_amount: 10.0,
            enabled: true,
            visible: true,
            editable: true,
            hovered: false,
            pressed: false,
            animation_progress: 0.0,
            clicked: false,
            prev_primary_down: false,
        }
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Consume this frame's input and advance the animation.
    ///
    /// Must be called exactly once per frame: the click-edge detector
    /// compares against the primary-button state recorded by the previous
    /// call. `dt` is the elapsed time in seconds since that call.
    pub fn update(&mut self, input: &FrameInput, dt: f32) {
        if !self.editable {
            return;
        }

        let down = input.primary_down();

        if !self.enabled {
            // Disabled still tracks the button latch so a release while
            // disabled cannot mint a click after re-enabling.
            self.hovered = false;
            self.pressed = false;
            self.clicked = false;
            self.prev_primary_down = down;
            return;
        }

        self.hovered = self.bounds.contains(input.pointer());
        self.pressed = self.hovered && down;
        self.clicked = self.hovered && !down && self.prev_primary_down;
        self.prev_primary_down = down;

        let target = if self.pressed {
            1.0
        } else if self.hovered {
            0.5
        } else {
            0.0
        };

        // Rate-limited tracker: approach the target at a fixed speed and
        // stop exactly on it, never overshooting.
        let step = dt * ANIMATION_SPEED;
        if self.animation_progress < target {
            self.animation_progress = (self.animation_progress + step).min(target);
        } else if self.animation_progress > target {
            self.animation_progress = (self.animation_progress - step).max(target);
        }
        self.animation_progress = self.animation_progress.clamp(0.0, 1.0);
    }

    /// Render the button.
    pub fn draw(&self, surface: &mut dyn Surface) {
        if !self.visible {
            return;
        }

        let fill = self.fill_color();
        let thickness = if self.pressed {
            BORDER_THICKNESS_PRESSED
        } else {
            BORDER_THICKNESS
        };

        if self.pointy_style {
            let path = Path::pointy_rect(self.bounds, self.pointy_amount);
            surface.fill_path(&path, fill);
            surface.stroke_path(&path, thickness, self.border_color);
        } else if self.rounded_corners {
            let path = Path::rounded_rect(self.bounds, CornerRadii::uniform(self.corner_radius));
            surface.fill_path(&path, fill);
            surface.stroke_path(&path, thickness, self.border_color);
        } else {
            surface.fill_rect(self.bounds, fill);
            surface.stroke_rect(self.bounds, thickness, self.border_color);
        }

        // No font configured: shape only, not an error.
        let Some(font) = &self.font else {
            return;
        };

        let inner = self.bounds.deflate(self.padding);
        let text_width = surface.text_width(&self.label, font);
        let mut pos = Point::new(
            inner.left() + (inner.width() - text_width) / 2.0,
            inner.top() + (inner.height() - self.font_size) / 2.0,
        );
        if self.pressed {
            // Pressed-depth cue
            pos.x += 1.0;
            pos.y += 1.0;
        }
        surface.draw_text(&self.label, font, pos, self.text_color);
    }

    /// Whether the button was clicked this frame.
    ///
    /// True only while enabled, hovered, and on the release edge of a
    /// press; the pulse persists for exactly one update call.
    pub fn is_clicked(&self) -> bool {
        self.enabled && self.hovered && self.clicked
    }

    /// The fill color [`draw`](Self::draw) will use this frame.
    ///
    /// Disabled buttons fade the background to 50% alpha regardless of
    /// animation state; otherwise progress `[0, 0.5]` blends background to
    /// hover and `[0.5, 1]` blends hover to pressed, continuous at 0.5.
    pub fn fill_color(&self) -> Color {
        if !self.enabled {
            return self.background_color.fade(0.5);
        }
        if self.animation_progress <= 0.5 {
            self.background_color
                .lerp(self.hover_color, self.animation_progress * 2.0)
        } else {
            self.hover_color
                .lerp(self.pressed_color, (self.animation_progress - 0.5) * 2.0)
        }
    }

    // =========================================================================
    // State queries
    // =========================================================================

    /// Whether the pointer is currently within bounds.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the button is currently held down under the pointer.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Current animation progress in `[0, 1]`.
    pub fn animation_progress(&self) -> f32 {
        self.animation_progress
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

    /// Get the label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Set the label text.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Set the five palette colors individually.
    pub fn set_colors(
        &mut self,
        background: Color,
        hover: Color,
        pressed: Color,
        border: Color,
        text: Color,
    ) {
        self.background_color = background;
        self.hover_color = hover;
        self.pressed_color = pressed;
        self.border_color = border;
        self.text_color = text;
    }

    /// Bulk-assign the palette from a scheme preset.
    pub fn apply_scheme(&mut self, scheme: &ColorScheme) {
        self.set_colors(
            scheme.background,
            scheme.hover,
            scheme.pressed,
            scheme.border,
            scheme.text,
        );
    }

    /// Set scheme using builder pattern.
    pub fn with_scheme(mut self, scheme: &ColorScheme) -> Self {
        self.apply_scheme(scheme);
        self
    }

    /// Set the font used for the label.
    pub fn set_font(&mut self, font: Option<FontFace>) {
        self.font = font;
    }

    /// Set font using builder pattern.
    pub fn with_font(mut self, font: FontFace) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the label font size (used for vertical centering).
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    /// Set the padding between bounds and label area.
    pub fn set_padding(&mut self, padding: f32) {
        self.padding = padding;
    }

    /// Set the rounded-corner radius.
    pub fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius;
    }

    /// Enable or disable rounded corners.
    pub fn set_rounded_corners(&mut self, rounded: bool) {
        self.rounded_corners = rounded;
        if rounded {
            self.pointy_style = false;
        }
    }

    /// Check if rounded corners are enabled.
    pub fn is_rounded_corners(&self) -> bool {
        self.rounded_corners
    }

    /// Enable or disable the pointy (hexagonal) outline.
    ///
    /// Pointy style takes precedence over rounded corners while enabled.
    pub fn set_pointy_style(&mut self, pointy: bool) {
        self.pointy_style = pointy;
    }

    /// Set how far the pointy edges extrude.
    pub fn set_pointy_amount(&mut self, amount: f32) {
        self.pointy_amount = amount;
    }

    /// Check if the pointy outline is enabled.
    pub fn is_pointy_style(&self) -> bool {
        self.pointy_style
    }

    /// Enable or disable interaction.
    ///
    /// A disabled button still draws (faded) but reports no hover, press,
    /// or clicks.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Check if the button is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Show or hide the button. Hidden buttons skip drawing entirely.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Check if the button is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Freeze or unfreeze the widget. A frozen button's update is a
    /// complete no-op: no hover tracking, no animation, no clicks.
    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
    }

    /// Check if the widget responds to updates.
    pub fn is_editable(&self) -> bool {
        self.editable
    }
}

impl Widget for Button {
    fn update(&mut self, input: &FrameInput, dt: f32, _ctx: &mut UiContext) {
        Button::update(self, input, dt);
    }

    fn draw(&self, surface: &mut dyn Surface) {
        Button::draw(self, surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn button() -> Button {
        Button::new(Rect::new(0.0, 0.0, 100.0, 40.0), "Test")
    }

    fn frame(x: f32, y: f32, down: bool) -> FrameInput {
        let mut input = FrameInput::new();
        input.set_pointer(Point::new(x, y));
        input.set_primary(down, false);
        input
    }

    const INSIDE: (f32, f32) = (50.0, 20.0);
    const OUTSIDE: (f32, f32) = (200.0, 200.0);

    #[test]
    fn test_hover_tracking() {
        let mut btn = button();
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(btn.is_hovered());
        assert!(!btn.is_pressed());

        btn.update(&frame(OUTSIDE.0, OUTSIDE.1, false), DT);
        assert!(!btn.is_hovered());
    }

    #[test]
    fn test_press_requires_hover() {
        let mut btn = button();
        btn.update(&frame(OUTSIDE.0, OUTSIDE.1, true), DT);
        assert!(!btn.is_pressed());

        btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
        assert!(btn.is_pressed());
    }

    #[test]
    fn test_click_fires_exactly_once_per_release() {
        let mut btn = button();
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(!btn.is_clicked());

        // Hold for several frames: no click yet.
        for _ in 0..5 {
            btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
            assert!(!btn.is_clicked());
        }

        // Release inside: one-frame pulse.
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(btn.is_clicked());

        // Pulse does not persist.
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(!btn.is_clicked());
    }

    #[test]
    fn test_release_outside_is_not_a_click() {
        let mut btn = button();
        btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
        btn.update(&frame(OUTSIDE.0, OUTSIDE.1, false), DT);
        assert!(!btn.is_clicked());
    }

    #[test]
    fn test_disabled_button_never_clicks() {
        let mut btn = button();
        btn.set_enabled(false);
        btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(!btn.is_clicked());
        assert!(!btn.is_hovered());
        assert!(!btn.is_pressed());
    }

    #[test]
    fn test_reenabling_mid_release_does_not_mint_a_click() {
        let mut btn = button();
        btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);

        btn.set_enabled(false);
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);

        btn.set_enabled(true);
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        assert!(!btn.is_clicked());
    }

    #[test]
    fn test_uneditable_update_is_a_no_op() {
        let mut btn = button();
        btn.set_editable(false);
        btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
        assert!(!btn.is_hovered());
        assert!(!btn.is_pressed());
        assert_eq!(btn.animation_progress(), 0.0);
    }

    #[test]
    fn test_animation_ramps_at_fixed_rate() {
        let mut btn = button();

        // Hover: two frames of 8.0/60 each toward 0.5.
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        let expected = 2.0 * ANIMATION_SPEED * DT;
        assert!((btn.animation_progress() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_animation_clamps_at_target_without_overshoot() {
        let mut btn = button();

        // 0.5 / (8/60) = 3.75 frames; after 4 frames the progress must sit
        // exactly on the hover target.
        for _ in 0..4 {
            btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        }
        assert_eq!(btn.animation_progress(), 0.5);

        // Holding hover forever never moves it.
        for _ in 0..100 {
            btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        }
        assert_eq!(btn.animation_progress(), 0.5);
    }

    #[test]
    fn test_animation_stays_in_unit_range() {
        let mut btn = button();
        for _ in 0..100 {
            btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
            assert!(btn.animation_progress() >= 0.0);
            assert!(btn.animation_progress() <= 1.0);
        }
        assert_eq!(btn.animation_progress(), 1.0);

        for _ in 0..100 {
            btn.update(&frame(OUTSIDE.0, OUTSIDE.1, false), DT);
            assert!(btn.animation_progress() >= 0.0);
            assert!(btn.animation_progress() <= 1.0);
        }
        assert_eq!(btn.animation_progress(), 0.0);
    }

    #[test]
    fn test_fill_color_segments() {
        let mut btn = button();

        // Idle: exactly the background color.
        assert_eq!(btn.fill_color(), Color::from_rgb8(211, 211, 211));

        // Drive to the hover target (progress clamps at exactly 0.5).
        for _ in 0..4 {
            btn.update(&frame(INSIDE.0, INSIDE.1, false), DT);
        }
        assert_eq!(btn.fill_color(), Color::from_rgb8(200, 200, 200));

        // Drive to the pressed target.
        for _ in 0..8 {
            btn.update(&frame(INSIDE.0, INSIDE.1, true), DT);
        }
        assert_eq!(btn.animation_progress(), 1.0);
        assert_eq!(btn.fill_color(), Color::from_rgb8(169, 169, 169));
    }

    #[test]
    fn test_disabled_fill_is_faded_background() {
        let mut btn = button();
        btn.set_enabled(false);
        let fill = btn.fill_color();
        assert_eq!(fill.r, Color::from_rgb8(211, 211, 211).r);
        assert!((fill.a - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_apply_scheme() {
        let mut btn = button();
        btn.apply_scheme(&ColorScheme::blue());
        assert_eq!(btn.fill_color(), ColorScheme::blue().background);
    }

    #[test]
    fn test_variable_dt_reaches_target() {
        let mut btn = button();
        // A single long frame covers the whole ramp and still clamps.
        btn.update(&frame(INSIDE.0, INSIDE.1, true), 1.0);
        assert_eq!(btn.animation_progress(), 1.0);
    }
}
