//! Vector paths for non-rectangular widget outlines.
//!
//! Hosts consume a [`Path`] as a command list and tessellate it however
//! their rendering backend prefers (triangle fans, stencil fills, SDFs).

use crate::geometry::{CornerRadii, Point, Rect};

/// Commands that make up a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Move to a point without drawing.
    MoveTo(Point),
    /// Draw a line to a point.
    LineTo(Point),
    /// Draw a quadratic bezier curve.
    QuadTo { control: Point, end: Point },
    /// Close the current subpath.
    Close,
}

/// A 2D outline built from move/line/curve commands.
#[derive(Debug, Clone, Default)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point without drawing.
    pub fn move_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    /// Draw a line to a point.
    pub fn line_to(&mut self, p: Point) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    /// Draw a quadratic bezier curve.
    pub fn quad_to(&mut self, control: Point, end: Point) -> &mut Self {
        self.commands.push(PathCommand::QuadTo { control, end });
        self
    }

    /// Close the current subpath.
    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Get the path commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Create a rounded rectangle path.
    ///
    /// Each radius is clamped to half the rectangle's width and height, so a
    /// radius larger than the shorter extent degrades to a capsule rather
    /// than producing self-intersecting corners.
    pub fn rounded_rect(rect: Rect, radii: CornerRadii) -> Self {
        let cap = (rect.width() / 2.0).min(rect.height() / 2.0);
        let tl = radii.top_left.clamp(0.0, cap);
        let tr = radii.top_right.clamp(0.0, cap);
        let br = radii.bottom_right.clamp(0.0, cap);
        let bl = radii.bottom_left.clamp(0.0, cap);
        let mut path = Self::new();

        // Start on the top edge, after the top-left corner arc.
        path.move_to(Point::new(rect.left() + tl, rect.top()));
        path.line_to(Point::new(rect.right() - tr, rect.top()));
        if tr > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.top()),
                Point::new(rect.right(), rect.top() + tr),
            );
        }
        path.line_to(Point::new(rect.right(), rect.bottom() - br));
        if br > 0.0 {
            path.quad_to(
                Point::new(rect.right(), rect.bottom()),
                Point::new(rect.right() - br, rect.bottom()),
            );
        }
        path.line_to(Point::new(rect.left() + bl, rect.bottom()));
        if bl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.bottom()),
                Point::new(rect.left(), rect.bottom() - bl),
            );
        }
        path.line_to(Point::new(rect.left(), rect.top() + tl));
        if tl > 0.0 {
            path.quad_to(
                Point::new(rect.left(), rect.top()),
                Point::new(rect.left() + tl, rect.top()),
            );
        }
        path.close();
        path
    }

    /// Create a pointy (hexagonal) rectangle path.
    ///
    /// The left and right edges extrude outward to a point at mid-height by
    /// `amount` units, clamped to half the rectangle's width.
    pub fn pointy_rect(rect: Rect, amount: f32) -> Self {
        let a = amount.max(0.0).min(rect.width() / 2.0);
        let mid_y = rect.center().y;
        let mut path = Self::new();

        path.move_to(Point::new(rect.left() + a, rect.top()));
        path.line_to(Point::new(rect.right() - a, rect.top()));
        path.line_to(Point::new(rect.right(), mid_y));
        path.line_to(Point::new(rect.right() - a, rect.bottom()));
        path.line_to(Point::new(rect.left() + a, rect.bottom()));
        path.line_to(Point::new(rect.left(), mid_y));
        path.close();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_creation() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.commands().len(), 0);
    }

    #[test]
    fn test_path_commands() {
        let mut path = Path::new();
        path.move_to(Point::new(0.0, 0.0))
            .line_to(Point::new(100.0, 0.0))
            .line_to(Point::new(100.0, 100.0))
            .close();

        assert!(!path.is_empty());
        assert_eq!(path.commands().len(), 4);
        assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
        assert!(matches!(path.commands().last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_rounded_rect_shape() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), CornerRadii::uniform(10.0));
        // move + 4 edges + 4 corner arcs + close
        assert_eq!(path.commands().len(), 10);
        let quads = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count();
        assert_eq!(quads, 4);
    }

    #[test]
    fn test_rounded_rect_zero_radius_has_no_arcs() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), CornerRadii::ZERO);
        assert!(
            !path
                .commands()
                .iter()
                .any(|c| matches!(c, PathCommand::QuadTo { .. }))
        );
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        // Radius larger than half the height: the first segment must still
        // start inside the rectangle.
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 20.0), CornerRadii::uniform(50.0));
        match path.commands()[0] {
            PathCommand::MoveTo(p) => assert_eq!(p, Point::new(10.0, 0.0)),
            ref other => panic!("expected MoveTo, got {other:?}"),
        }
    }

    #[test]
    fn test_rounded_rect_mixed_radii() {
        // Sharp top-left: the path starts exactly on the corner and only the
        // three rounded corners emit arcs.
        let radii = CornerRadii {
            top_left: 0.0,
            top_right: 8.0,
            bottom_right: 8.0,
            bottom_left: 8.0,
        };
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 100.0, 50.0), radii);
        match path.commands()[0] {
            PathCommand::MoveTo(p) => assert_eq!(p, Point::ZERO),
            ref other => panic!("expected MoveTo, got {other:?}"),
        }
        let quads = path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count();
        assert_eq!(quads, 3);
    }

    #[test]
    fn test_pointy_rect_has_side_points() {
        let rect = Rect::new(0.0, 0.0, 100.0, 40.0);
        let path = Path::pointy_rect(rect, 12.0);
        assert_eq!(path.commands().len(), 7);
        assert!(
            path.commands()
                .iter()
                .any(|c| matches!(c, PathCommand::LineTo(p) if *p == Point::new(100.0, 20.0)))
        );
        assert!(
            path.commands()
                .iter()
                .any(|c| matches!(c, PathCommand::LineTo(p) if *p == Point::new(0.0, 20.0)))
        );
    }
}
