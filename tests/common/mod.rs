// Shared host-side harness.
// The main crate is wasm-only, so the platform-free modules are included
// directly under the same module tree they live in.

#![allow(dead_code)]

pub mod core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod door {
        include!("../../src/core/door.rs");
    }
    pub mod easing {
        include!("../../src/core/easing.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod line {
        include!("../../src/core/line.rs");
    }
    pub mod progress {
        include!("../../src/core/progress.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod surface {
        include!("../../src/core/surface.rs");
    }
    pub mod wave {
        include!("../../src/core/wave.rs");
    }

    pub use config::*;
    pub use geometry::*;
    pub use progress::*;
    pub use scene::*;
    pub use surface::*;
    pub use wave::*;
}

use self::core::{AnchorRect, GeometryProvider, PathCmd, Rgba, Surface, Viewport};
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear,
    Save,
    Restore,
    GlobalAlpha(f64),
    LineWidth(f64),
    RoundStrokes,
    StrokeColor(Rgba),
    FillColor(Rgba),
    StrokePath(Vec<PathCmd>),
    StrokeRect(f64, f64, f64, f64),
    FillRect(f64, f64, f64, f64),
    FillCircle(DVec2, f64),
}

/// Surface double that records every call in order.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn take(&mut self) -> Vec<Op> {
        std::mem::take(&mut self.ops)
    }

    pub fn stroke_paths(&self) -> Vec<&Vec<PathCmd>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::StrokePath(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn fill_rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.ops
            .iter()
            .filter_map(|op| match *op {
                Op::FillRect(x, y, w, h) => Some((x, y, w, h)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, _width: f64, _height: f64) {
        self.ops.push(Op::Clear);
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_round_strokes(&mut self) {
        self.ops.push(Op::RoundStrokes);
    }
    fn set_stroke_color(&mut self, color: Rgba) {
        self.ops.push(Op::StrokeColor(color));
    }
    fn set_fill_color(&mut self, color: Rgba) {
        self.ops.push(Op::FillColor(color));
    }
    fn stroke_path(&mut self, path: &[PathCmd]) {
        self.ops.push(Op::StrokePath(path.to_vec()));
    }
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::StrokeRect(x, y, w, h));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64) {
        self.ops.push(Op::FillCircle(center, radius));
    }
}

/// Geometry double with a fixed anchor and viewport.
pub struct FixedGeometry {
    pub anchor: Option<AnchorRect>,
    pub viewport: Viewport,
}

impl FixedGeometry {
    pub fn desktop() -> Self {
        Self {
            anchor: Some(AnchorRect {
                left: 560.0,
                width: 160.0,
            }),
            viewport: Viewport::new(1280.0, 800.0),
        }
    }

    pub fn without_anchor() -> Self {
        Self {
            anchor: None,
            viewport: Viewport::new(1280.0, 800.0),
        }
    }
}

impl GeometryProvider for FixedGeometry {
    fn anchor(&self) -> Option<AnchorRect> {
        self.anchor
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
