//! RGBA color with interpolation helpers.

use bytemuck::{Pod, Zeroable};

/// An RGBA color with straight (non-premultiplied) alpha.
///
/// Components are in the 0.0-1.0 range. Widgets interpolate between their
/// configured colors every frame, so [`lerp`](Self::lerp) is exact at both
/// endpoints: `a.lerp(b, 0.0) == a` and `a.lerp(b, 1.0) == b`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA components (0-255 range).
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Return a new color with the alpha replaced.
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Return a new color with the alpha scaled by `factor`, RGB unchanged.
    ///
    /// A factor of 0.5 produces the half-transparent variant used for
    /// disabled widgets.
    #[inline]
    pub fn fade(self, factor: f32) -> Self {
        Self {
            a: self.a * factor,
            ..self
        }
    }

    /// Linear interpolation between two colors.
    ///
    /// Uses the two-product form so the result is bit-exact at both
    /// endpoints, not just at `t = 0`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
            a: self.a * s + other.a * t,
        }
    }

    /// Convert to an array [r, g, b, a].
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints_are_exact() {
        let a = Color::from_rgb8(211, 211, 211);
        let b = Color::from_rgb8(169, 169, 169);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn test_lerp_midpoint() {
        let gray = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert!((gray.r - 0.5).abs() < 0.001);
        assert!((gray.g - 0.5).abs() < 0.001);
        assert!((gray.b - 0.5).abs() < 0.001);
        assert_eq!(gray.a, 1.0);
    }

    #[test]
    fn test_fade_scales_alpha_only() {
        let c = Color::from_rgba8(200, 100, 50, 255).fade(0.5);
        assert_eq!(c.r, 200.0 / 255.0);
        assert_eq!(c.g, 100.0 / 255.0);
        assert_eq!(c.b, 50.0 / 255.0);
        assert!((c.a - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_with_alpha() {
        let c = Color::WHITE.with_alpha(0.25);
        assert_eq!(c.a, 0.25);
        assert_eq!(c.r, 1.0);
    }
}
