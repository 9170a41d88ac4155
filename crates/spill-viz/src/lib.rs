//! Shared visualization utilities for the spill tree split demo.

use macroquad::prelude::*;
use macroquad::rand::gen_range;
use nalgebra::DMatrix;
use spill_tree::{
    BallBound, Euclidean, HRectBound, Hyperplane, MeanSpaceSplit, MidpointSpaceSplit,
    ProjectionVector, SpaceSplitter, SpillConfig, SplitBound, SplitError,
};

/// Which threshold rule the demo splits with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitMode {
    Midpoint,
    Mean,
}

impl SplitMode {
    pub fn toggled(self) -> Self {
        match self {
            SplitMode::Midpoint => SplitMode::Mean,
            SplitMode::Mean => SplitMode::Midpoint,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SplitMode::Midpoint => "midpoint",
            SplitMode::Mean => "mean",
        }
    }
}

/// Which bound shape each node is wrapped in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundKind {
    Box,
    Ball,
}

impl BoundKind {
    pub fn toggled(self) -> Self {
        match self {
            BoundKind::Box => BoundKind::Ball,
            BoundKind::Ball => BoundKind::Box,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BoundKind::Box => "box (widest axis)",
            BoundKind::Ball => "ball (farthest pair)",
        }
    }
}

/// Parameters of the throwaway recursive build used for drawing.
#[derive(Clone, Copy, Debug)]
pub struct DemoSettings {
    pub mode: SplitMode,
    pub bound: BoundKind,
    pub spill: SpillConfig,
    pub max_depth: usize,
    pub leaf_size: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            mode: SplitMode::Midpoint,
            bound: BoundKind::Box,
            spill: SpillConfig::new(),
            max_depth: 6,
            leaf_size: 8,
        }
    }
}

/// A hyperplane clipped to the rectangle of the node it splits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitSegment {
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub depth: usize,
}

/// Generates a skewed 2-D cloud: a dense blob near the origin plus a sparse
/// tail stretching to the right. Points are the columns of the result.
pub fn generate_skewed_cloud(count: usize, seed: u64) -> DMatrix<f64> {
    macroquad::rand::srand(seed);
    let mut data = DMatrix::zeros(2, count);
    for i in 0..count {
        let (x, y) = if i % 5 == 0 {
            (gen_range(2.0, 10.0), gen_range(-1.5, 1.5))
        } else {
            (gen_range(-1.0, 2.0), gen_range(-1.0, 1.0))
        };
        data[(0, i)] = x;
        data[(1, i)] = y;
    }
    data
}

/// Recursively splits `points` and returns every hyperplane as a segment
/// clipped to its node's rectangle.
///
/// Recursion stops at `max_depth`, at nodes of at most `leaf_size` points,
/// when the splitter reports a degenerate node, or when a child would be
/// as large as its parent.
pub fn collect_splits(
    data: &DMatrix<f64>,
    points: &[usize],
    settings: &DemoSettings,
) -> Vec<SplitSegment> {
    let mut segments = Vec::new();
    collect_splits_recursive(data, points, settings, 0, &mut segments);
    segments
}

fn collect_splits_recursive(
    data: &DMatrix<f64>,
    points: &[usize],
    settings: &DemoSettings,
    depth: usize,
    segments: &mut Vec<SplitSegment>,
) {
    if depth >= settings.max_depth || points.len() <= settings.leaf_size {
        return;
    }

    let rect = HRectBound::from_points(data, points);
    let plane = match settings.bound {
        BoundKind::Box => split_with(&rect, data, points, settings.mode),
        BoundKind::Ball => {
            let ball = BallBound::from_points(data, points, &Euclidean);
            split_with(&ball, data, points, settings.mode)
        }
    };
    let Ok(plane) = plane else {
        return;
    };

    if let Some((start, end)) = clip_to_rect(&plane, &rect) {
        segments.push(SplitSegment { start, end, depth });
    }

    let partition = plane.partition(data, points, &settings.spill);
    for child in [&partition.left, &partition.right] {
        if child.len() < points.len() {
            collect_splits_recursive(data, child, settings, depth + 1, segments);
        }
    }
}

fn split_with<B: SplitBound>(
    bound: &B,
    data: &DMatrix<f64>,
    points: &[usize],
    mode: SplitMode,
) -> Result<Hyperplane, SplitError> {
    match mode {
        SplitMode::Midpoint => MidpointSpaceSplit::new().split_space(bound, data, points),
        SplitMode::Mean => MeanSpaceSplit::new().split_space(bound, data, points),
    }
}

/// Clips the 2-D line of `plane` to `rect`, returning its endpoints.
pub fn clip_to_rect(plane: &Hyperplane, rect: &HRectBound) -> Option<([f64; 2], [f64; 2])> {
    let t = plane.split_value();
    let (origin, along) = match plane.projection() {
        ProjectionVector::AxisParallel { dim: 0 } => ([t, 0.0], [0.0, 1.0]),
        ProjectionVector::AxisParallel { dim: 1 } => ([0.0, t], [1.0, 0.0]),
        ProjectionVector::AxisParallel { .. } => return None,
        ProjectionVector::Dense(normal) if normal.len() == 2 => {
            ([normal[0] * t, normal[1] * t], [-normal[1], normal[0]])
        }
        ProjectionVector::Dense(_) => return None,
    };

    // Liang-Barsky against each slab.
    let mut lo = f64::NEG_INFINITY;
    let mut hi = f64::INFINITY;
    for d in 0..2 {
        if along[d].abs() < 1e-12 {
            if origin[d] < rect.min(d) || origin[d] > rect.max(d) {
                return None;
            }
            continue;
        }
        let a = (rect.min(d) - origin[d]) / along[d];
        let b = (rect.max(d) - origin[d]) / along[d];
        lo = lo.max(a.min(b));
        hi = hi.min(a.max(b));
    }
    if lo > hi {
        return None;
    }

    let at = |s: f64| [origin[0] + along[0] * s, origin[1] + along[1] * s];
    Some((at(lo), at(hi)))
}

/// Maps data coordinates onto the window.
pub struct Viewport {
    min: [f64; 2],
    max: [f64; 2],
    margin: f32,
}

impl Viewport {
    /// Fits the viewport around every column of `data`.
    pub fn fit(data: &DMatrix<f64>, margin: f32) -> Self {
        let all: Vec<usize> = (0..data.ncols()).collect();
        let rect = HRectBound::from_points(data, &all);
        Self {
            min: [rect.min(0), rect.min(1)],
            max: [rect.max(0), rect.max(1)],
            margin,
        }
    }

    /// Converts a data point to screen coordinates (y pointing up).
    pub fn to_screen(&self, point: [f64; 2]) -> Vec2 {
        let width = screen_width() - 2.0 * self.margin;
        let height = screen_height() - 2.0 * self.margin;
        let span_x = (self.max[0] - self.min[0]).max(f64::EPSILON);
        let span_y = (self.max[1] - self.min[1]).max(f64::EPSILON);
        let u = ((point[0] - self.min[0]) / span_x) as f32;
        let v = ((point[1] - self.min[1]) / span_y) as f32;
        vec2(self.margin + u * width, self.margin + (1.0 - v) * height)
    }
}

/// Color for a split segment at the given depth.
pub fn depth_color(depth: usize) -> Color {
    const PALETTE: [Color; 6] = [RED, ORANGE, YELLOW, GREEN, SKYBLUE, VIOLET];
    PALETTE[depth % PALETTE.len()]
}

/// Draws every point of the dataset as a small dot.
pub fn draw_points(data: &DMatrix<f64>, viewport: &Viewport) {
    for column in data.column_iter() {
        let p = viewport.to_screen([column[0], column[1]]);
        draw_circle(p.x, p.y, 2.5, LIGHTGRAY);
    }
}

/// Draws split segments, thicker for shallower splits.
pub fn draw_segments(segments: &[SplitSegment], viewport: &Viewport) {
    for segment in segments {
        let a = viewport.to_screen(segment.start);
        let b = viewport.to_screen(segment.end);
        let thickness = (4.0 - segment.depth as f32 * 0.5).max(1.0);
        draw_line(a.x, a.y, b.x, b.y, thickness, depth_color(segment.depth));
    }
}
