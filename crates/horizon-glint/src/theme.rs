//! Color-scheme presets.
//!
//! A [`ColorScheme`] is pure data: the five colors a widget palette needs,
//! with named presets covering a default gray plus the rainbow. Apply one
//! with [`Button::apply_scheme`](crate::widget::Button::apply_scheme) or
//! [`TextField::apply_scheme`](crate::widget::TextField::apply_scheme).

use horizon_glint_core::Color;

/// A named five-color widget palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    /// Resting fill color.
    pub background: Color,
    /// Fill color while hovered.
    pub hover: Color,
    /// Fill color while pressed.
    pub pressed: Color,
    /// Outline color.
    pub border: Color,
    /// Label/content color.
    pub text: Color,
}

impl ColorScheme {
    /// Red preset.
    pub fn red() -> Self {
        Self {
            background: Color::from_rgb8(255, 200, 200),
            hover: Color::from_rgb8(255, 150, 150),
            pressed: Color::from_rgb8(255, 100, 100),
            border: Color::from_rgb8(200, 0, 0),
            text: Color::from_rgb8(100, 0, 0),
        }
    }

    /// Orange preset.
    pub fn orange() -> Self {
        Self {
            background: Color::from_rgb8(255, 220, 180),
            hover: Color::from_rgb8(255, 200, 140),
            pressed: Color::from_rgb8(255, 180, 100),
            border: Color::from_rgb8(230, 140, 0),
            text: Color::from_rgb8(150, 80, 0),
        }
    }

    /// Yellow preset.
    pub fn yellow() -> Self {
        Self {
            background: Color::from_rgb8(255, 255, 200),
            hover: Color::from_rgb8(255, 255, 150),
            pressed: Color::from_rgb8(255, 255, 100),
            border: Color::from_rgb8(200, 200, 0),
            text: Color::from_rgb8(100, 100, 0),
        }
    }

    /// Green preset.
    pub fn green() -> Self {
        Self {
            background: Color::from_rgb8(200, 255, 200),
            hover: Color::from_rgb8(150, 255, 150),
            pressed: Color::from_rgb8(100, 255, 100),
            border: Color::from_rgb8(0, 200, 0),
            text: Color::from_rgb8(0, 100, 0),
        }
    }

    /// Blue preset.
    pub fn blue() -> Self {
        Self {
            background: Color::from_rgb8(200, 200, 255),
            hover: Color::from_rgb8(150, 150, 255),
            pressed: Color::from_rgb8(100, 100, 255),
            border: Color::from_rgb8(0, 0, 200),
            text: Color::from_rgb8(0, 0, 100),
        }
    }

    /// Indigo preset.
    pub fn indigo() -> Self {
        Self {
            background: Color::from_rgb8(200, 180, 255),
            hover: Color::from_rgb8(180, 150, 255),
            pressed: Color::from_rgb8(160, 120, 255),
            border: Color::from_rgb8(75, 0, 130),
            text: Color::from_rgb8(40, 0, 80),
        }
    }

    /// Violet preset.
    pub fn violet() -> Self {
        Self {
            background: Color::from_rgb8(230, 190, 255),
            hover: Color::from_rgb8(220, 150, 255),
            pressed: Color::from_rgb8(200, 100, 255),
            border: Color::from_rgb8(148, 0, 211),
            text: Color::from_rgb8(75, 0, 130),
        }
    }
}

impl Default for ColorScheme {
    /// The light-gray default palette buttons are constructed with.
    fn default() -> Self {
        Self {
            background: Color::from_rgb8(211, 211, 211),
            hover: Color::from_rgb8(200, 200, 200),
            pressed: Color::from_rgb8(169, 169, 169),
            border: Color::BLACK,
            text: Color::BLACK,
        }
    }
}
