//! Horizon Glint core types.
//!
//! Leaf value types shared by the widget crate and by game-loop hosts:
//!
//! - [`Point`], [`Size`], [`Rect`], [`CornerRadii`]: 2D geometry with
//!   closed-interval hit-testing
//! - [`Color`]: straight-alpha RGBA color with interpolation helpers
//! - [`Path`]: vector outlines for rounded and pointy widget shapes
//! - [`FrameInput`], [`Key`]: the per-frame input snapshot a host hands to
//!   every widget update
//!
//! Nothing in this crate has widget logic or external-system access; it is
//! plain data addressed in the host's drawing coordinate space.

mod color;
mod geometry;
mod input;
mod path;

pub use color::Color;
pub use geometry::{CornerRadii, Point, Rect, Size};
pub use input::{FrameInput, Key};
pub use path::{Path, PathCommand};
