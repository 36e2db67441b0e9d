//! Outline builder for bubble shapes.
//!
//! Every outline is traced clockwise on screen and closed. With an arrow the
//! tour starts and ends at the apex; without one it starts where the top-left
//! corner arc begins.
//!
//! # Corner arcs
//!
//! Each rounded corner is the quarter of the circle inscribed in the
//! `2r × 2r` square sitting in that corner, swept 90° clockwise:
//!
//! | corner       | start angle |
//! |--------------|-------------|
//! | top-left     | 180°        |
//! | top-right    | 270°        |
//! | bottom-right | 0°          |
//! | bottom-left  | 90°         |
//!
//! Angles follow the usual canvas convention: 0° points along +x and positive
//! sweeps turn clockwise because y grows downward.

use glam::{DVec2, dvec2};

use crate::types::{Angle, Rect};

use super::shape::Shape;
use super::style::ArrowDirection;

/// One drawing command of an outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    /// Arc along the ellipse inscribed in `oval`. If the current point is not
    /// the arc start, a straight line to the arc start is implied.
    ArcTo { oval: Rect, start: Angle, sweep: Angle },
    Close,
}

/// Receiver of path commands; implemented by paint adapters.
pub trait PathSink {
    fn move_to(&mut self, p: DVec2);

    fn line_to(&mut self, p: DVec2);

    fn arc_to(&mut self, oval: Rect, start: Angle, sweep: Angle);

    fn close(&mut self);
}

/// Point at `angle` on the ellipse inscribed in `oval`.
pub fn arc_point(oval: &Rect, angle: Angle) -> DVec2 {
    let radii = dvec2(oval.width(), oval.height()) / 2.0;
    let (sin, cos) = angle.radians().sin_cos();
    oval.center() + dvec2(radii.x * cos, radii.y * sin)
}

/// An ordered, closed sequence of path commands.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Feed every command to a sink, in order.
    pub fn replay<S: PathSink + ?Sized>(&self, sink: &mut S) {
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => sink.move_to(p),
                PathCommand::LineTo(p) => sink.line_to(p),
                PathCommand::ArcTo { oval, start, sweep } => sink.arc_to(oval, start, sweep),
                PathCommand::Close => sink.close(),
            }
        }
    }

    /// First point of the outline.
    pub fn start_point(&self) -> Option<DVec2> {
        self.commands.iter().find_map(|c| match c {
            PathCommand::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Pen position after the last drawing command (before `Close`).
    pub fn end_point(&self) -> Option<DVec2> {
        self.commands.iter().rev().find_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::ArcTo { oval, start, sweep } => {
                Some(arc_point(oval, Angle(start.0 + sweep.0)))
            }
            PathCommand::Close => None,
        })
    }

    /// Approximate the outline by a polygon, `segments_per_arc` chords per
    /// corner arc. Consecutive duplicate points are dropped, including the
    /// closing point that repeats the start.
    pub fn flatten(&self, segments_per_arc: usize) -> Vec<DVec2> {
        let mut flattener = Flattener {
            points: Vec::new(),
            segments: segments_per_arc.max(1),
        };
        self.replay(&mut flattener);
        let mut points = flattener.points;
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        points
    }

    /// Bounding box of the flattened outline.
    pub fn bounds(&self) -> Option<Rect> {
        Rect::enclosing(self.flatten(crate::defaults::ARC_SEGMENTS))
    }
}

struct Flattener {
    points: Vec<DVec2>,
    segments: usize,
}

impl Flattener {
    fn push(&mut self, p: DVec2) {
        const EPSILON: f64 = 1e-9;
        if self.points.last().is_none_or(|last| last.distance(p) > EPSILON) {
            self.points.push(p);
        }
    }
}

impl PathSink for Flattener {
    fn move_to(&mut self, p: DVec2) {
        self.push(p);
    }

    fn line_to(&mut self, p: DVec2) {
        self.push(p);
    }

    fn arc_to(&mut self, oval: Rect, start: Angle, sweep: Angle) {
        self.push(arc_point(&oval, start));
        for i in 1..=self.segments {
            let t = i as f64 / self.segments as f64;
            self.push(arc_point(&oval, Angle(start.0 + sweep.0 * t)));
        }
    }

    fn close(&mut self) {}
}

/// Builds bubble outlines from resolved shapes.
///
/// Also usable as a plain recorder: the [`PathSink`] impl appends commands.
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    commands: Vec<PathCommand>,
}

impl PathSink for OutlineBuilder {
    fn move_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: DVec2) {
        self.commands.push(PathCommand::LineTo(p));
    }

    fn arc_to(&mut self, oval: Rect, start: Angle, sweep: Angle) {
        self.commands.push(PathCommand::ArcTo { oval, start, sweep });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trace the outline of `shape` with its arrow on the `direction` edge.
    ///
    /// `Auto` is drawn like `None`; resolve it before building.
    pub fn build(shape: &Shape, direction: ArrowDirection) -> Outline {
        let mut builder = OutlineBuilder::new();
        match direction {
            ArrowDirection::Up => builder.up_arrow(shape),
            ArrowDirection::Right => builder.right_arrow(shape),
            ArrowDirection::Down => builder.down_arrow(shape),
            ArrowDirection::Left => builder.left_arrow(shape),
            ArrowDirection::None | ArrowDirection::Auto => builder.no_arrow(shape),
        }
        builder.close();
        builder.finish()
    }

    /// Take the recorded commands.
    pub fn finish(self) -> Outline {
        Outline { commands: self.commands }
    }

    fn no_arrow(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let radii = &shape.radii;
        self.move_to(dvec2(r.left, r.top + radii.top_left));
        self.top_left_corner(shape);
        self.line_to(dvec2(r.right - radii.top_right, r.top));
        self.top_right_corner(shape);
        self.line_to(dvec2(r.right, r.bottom - radii.bottom_right));
        self.bottom_right_corner(shape);
        self.line_to(dvec2(r.left + radii.bottom_left, r.bottom));
        self.bottom_left_corner(shape);
        self.line_to(dvec2(r.left, r.top + radii.top_left));
    }

    fn up_arrow(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let radii = &shape.radii;
        let peak = shape.arrow_peak;
        let half = shape.arrow_width / 2.0;
        self.move_to(peak);
        self.line_to(dvec2(peak.x + half, r.top));
        self.line_to(dvec2(r.right - radii.top_right, r.top));
        self.top_right_corner(shape);
        self.line_to(dvec2(r.right, r.bottom - radii.bottom_right));
        self.bottom_right_corner(shape);
        self.line_to(dvec2(r.left + radii.bottom_left, r.bottom));
        self.bottom_left_corner(shape);
        self.line_to(dvec2(r.left, r.top + radii.top_left));
        self.top_left_corner(shape);
        self.line_to(dvec2(peak.x - half, r.top));
        self.line_to(peak);
    }

    fn right_arrow(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let radii = &shape.radii;
        let peak = shape.arrow_peak;
        let half = shape.arrow_width / 2.0;
        self.move_to(peak);
        self.line_to(dvec2(r.right, peak.y + half));
        self.line_to(dvec2(r.right, r.bottom - radii.bottom_right));
        self.bottom_right_corner(shape);
        self.line_to(dvec2(r.left + radii.bottom_left, r.bottom));
        self.bottom_left_corner(shape);
        self.line_to(dvec2(r.left, r.top + radii.top_left));
        self.top_left_corner(shape);
        self.line_to(dvec2(r.right - radii.top_right, r.top));
        self.top_right_corner(shape);
        self.line_to(dvec2(r.right, peak.y - half));
        self.line_to(peak);
    }

    fn down_arrow(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let radii = &shape.radii;
        let peak = shape.arrow_peak;
        let half = shape.arrow_width / 2.0;
        self.move_to(peak);
        self.line_to(dvec2(peak.x - half, r.bottom));
        self.line_to(dvec2(r.left + radii.bottom_left, r.bottom));
        self.bottom_left_corner(shape);
        self.line_to(dvec2(r.left, r.top + radii.top_left));
        self.top_left_corner(shape);
        self.line_to(dvec2(r.right - radii.top_right, r.top));
        self.top_right_corner(shape);
        self.line_to(dvec2(r.right, r.bottom - radii.bottom_right));
        self.bottom_right_corner(shape);
        self.line_to(dvec2(peak.x + half, r.bottom));
        self.line_to(peak);
    }

    fn left_arrow(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let radii = &shape.radii;
        let peak = shape.arrow_peak;
        let half = shape.arrow_width / 2.0;
        self.move_to(peak);
        self.line_to(dvec2(r.left, peak.y - half));
        self.line_to(dvec2(r.left, r.top + radii.top_left));
        self.top_left_corner(shape);
        self.line_to(dvec2(r.right - radii.top_right, r.top));
        self.top_right_corner(shape);
        self.line_to(dvec2(r.right, r.bottom - radii.bottom_right));
        self.bottom_right_corner(shape);
        self.line_to(dvec2(r.left + radii.bottom_left, r.bottom));
        self.bottom_left_corner(shape);
        self.line_to(dvec2(r.left, peak.y + half));
        self.line_to(peak);
    }

    fn top_left_corner(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let d = 2.0 * shape.radii.top_left;
        self.corner(Rect::new(r.left, r.top, r.left + d, r.top + d), 180.0);
    }

    fn top_right_corner(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let d = 2.0 * shape.radii.top_right;
        self.corner(Rect::new(r.right - d, r.top, r.right, r.top + d), 270.0);
    }

    fn bottom_right_corner(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let d = 2.0 * shape.radii.bottom_right;
        self.corner(Rect::new(r.right - d, r.bottom - d, r.right, r.bottom), 0.0);
    }

    fn bottom_left_corner(&mut self, shape: &Shape) {
        let r = &shape.rect;
        let d = 2.0 * shape.radii.bottom_left;
        self.corner(Rect::new(r.left, r.bottom - d, r.left + d, r.bottom), 90.0);
    }

    fn corner(&mut self, oval: Rect, start_degrees: f64) {
        self.arc_to(oval, Angle(start_degrees), Angle::RIGHT);
    }
}
