use kurbo::Shape;

use crate::assets::decode::PreparedImage;
use crate::foundation::color::Rgba8;
use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rect};

/// Path flattening tolerance, in drawing units.
const PATH_TOLERANCE: f64 = 0.1;

/// Face weight requested for a text op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Regular face.
    Regular,
    /// Bold face, falling back to regular.
    Bold,
}

/// Horizontal placement of text relative to its anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    /// Anchor marks the left edge.
    Start,
    /// Anchor marks the horizontal center.
    Center,
}

/// One backend-agnostic drawing instruction, in logical canvas units.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Two-stop linear gradient filling `rect`, interpolated along `from -> to`.
    LinearGradient {
        /// Filled area.
        rect: Rect,
        /// Gradient start point.
        from: Point,
        /// Gradient end point.
        to: Point,
        /// Color at `from`.
        start: Rgba8,
        /// Color at `to`.
        end: Rgba8,
    },
    /// Nonzero fill of an arbitrary path.
    FillPath {
        /// Outline in canvas units.
        path: BezPath,
        /// Fill color.
        color: Rgba8,
        /// Applied before filling.
        transform: Affine,
    },
    /// Axis-aligned solid rectangle.
    FillRect {
        /// Filled area.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
    /// Single-line text; `anchor` is the baseline point, like a canvas `fillText`.
    Text {
        /// Content; empty strings draw nothing.
        text: String,
        /// Font size.
        size_px: f32,
        /// Face weight.
        weight: FontWeight,
        /// Horizontal alignment around `anchor`.
        align: TextAlign,
        /// Baseline anchor.
        anchor: Point,
        /// Glyph color.
        color: Rgba8,
    },
    /// Raster image mapped into `dest`, then transformed.
    Image {
        /// Premultiplied source pixels.
        image: PreparedImage,
        /// Target rectangle before `transform`.
        dest: Rect,
        /// Applied after mapping into `dest`.
        transform: Affine,
        /// Global alpha in `0.0..=1.0`.
        opacity: f32,
    },
}

/// Ordered back-to-front list of draw ops for one raster snapshot.
#[derive(Clone, Debug)]
pub struct DisplayList {
    /// Logical drawing area the ops are expressed in.
    pub canvas: Canvas,
    /// Back-to-front draw order.
    pub ops: Vec<DrawOp>,
}

impl DisplayList {
    /// Empty list over `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }

    /// Append `op` on top of everything drawn so far.
    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Fill `rect` with a two-stop gradient from `start` to `end`.
    pub fn gradient(&mut self, rect: Rect, from: Point, to: Point, start: Rgba8, end: Rgba8) {
        self.push(DrawOp::LinearGradient {
            rect,
            from,
            to,
            start,
            end,
        });
    }

    /// Fill `path` untransformed.
    pub fn fill_path(&mut self, path: BezPath, color: Rgba8) {
        self.push(DrawOp::FillPath {
            path,
            color,
            transform: Affine::IDENTITY,
        });
    }

    /// Fill any kurbo shape, flattened to a path.
    pub fn fill_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        self.fill_path(shape.to_path(PATH_TOLERANCE), color);
    }

    /// Closed polygon through `points`.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        let mut path = BezPath::new();
        let mut it = points.iter();
        let Some(first) = it.next() else {
            return;
        };
        path.move_to(*first);
        for p in it {
            path.line_to(*p);
        }
        path.close_path();
        self.fill_path(path, color);
    }

    /// Solid rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba8) {
        self.push(DrawOp::FillRect { rect, color });
    }

    /// Centered single-line text at baseline `anchor`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        size_px: f32,
        weight: FontWeight,
        anchor: Point,
        color: Rgba8,
    ) {
        self.push(DrawOp::Text {
            text: text.into(),
            size_px,
            weight,
            align: TextAlign::Center,
            anchor,
            color,
        });
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Filled half-disc/half-ellipse covering the upper half (angles pi..2pi in y-down space).
pub fn upper_half_ellipse(center: Point, rx: f64, ry: f64) -> BezPath {
    let arc = kurbo::Arc {
        center,
        radii: kurbo::Vec2::new(rx, ry),
        start_angle: std::f64::consts::PI,
        sweep_angle: std::f64::consts::PI,
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.move_to(Point::new(center.x - rx, center.y));
    for el in arc.append_iter(PATH_TOLERANCE) {
        path.push(el);
    }
    path.close_path();
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
