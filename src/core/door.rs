// Hinged door anchored to the strand baseline.

use super::config::DoorTuning;
use super::easing::{clamp01, ease_out_cubic, lerp, smoothstep_pair, unit_to_byte};
use super::geometry::{AnchorRect, Viewport};
use glam::DVec2;
use std::f64::consts::FRAC_PI_2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorGeometry {
    pub center_x: f64,
    pub width: f64,
    pub height: f64,
}

impl DoorGeometry {
    /// Sizes the door around the anchor, or centers a default door without one.
    ///
    /// Non-finite measurements count as a missing anchor; every dimension is
    /// clamped so a degenerate rectangle still yields a drawable door.
    pub fn from_anchor(anchor: Option<AnchorRect>, viewport: Viewport, t: &DoorTuning) -> Self {
        let (center_x, raw_width) = match anchor.filter(AnchorRect::is_finite) {
            Some(r) => {
                let pad = t.min_pad.max(r.width * t.pad_ratio);
                (r.center_x(), r.width + pad * 2.0)
            }
            None => (viewport.center_x(), t.fallback_width),
        };
        let width = raw_width.clamp(t.width_range.0, t.width_range.1);
        let height = (width * t.aspect).clamp(t.height_range.0, t.height_range.1);
        Self {
            center_x,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.center_x - self.width * 0.5
    }

    /// Frame rectangle as (x, y, w, h) for a given baseline.
    pub fn frame(&self, baseline: f64) -> (f64, f64, f64, f64) {
        (self.left(), baseline - self.height, self.width, self.height)
    }

    pub fn leaf(&self, baseline: f64, open: f64, t: &DoorTuning) -> DoorLeaf {
        let angle = open_angle(open, t);
        let left = self.left();
        let top = baseline - self.height;
        let free_x = left + self.width * angle.cos();
        let skew = self.width * angle.sin() * t.skew_ratio;
        DoorLeaf {
            angle,
            hinge_top: DVec2::new(left, top),
            free_top: DVec2::new(free_x, top - skew),
            free_bottom: DVec2::new(free_x, baseline + skew),
            hinge_bottom: DVec2::new(left, baseline),
        }
    }

    pub fn handle_radius(&self, t: &DoorTuning) -> f64 {
        t.handle_min_radius.max(self.width * t.handle_radius_ratio)
    }
}

#[inline]
pub fn open_angle(open: f64, t: &DoorTuning) -> f64 {
    ease_out_cubic(open) * FRAC_PI_2 * t.max_angle_ratio
}

/// The swinging leaf as a quadrilateral, hinge on the left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DoorLeaf {
    pub angle: f64,
    pub hinge_top: DVec2,
    pub free_top: DVec2,
    pub free_bottom: DVec2,
    pub hinge_bottom: DVec2,
}

impl DoorLeaf {
    pub fn corners(&self) -> [DVec2; 4] {
        [self.hinge_top, self.free_top, self.free_bottom, self.hinge_bottom]
    }

    /// Point at `(u, v)` where u runs hinge to free edge and v top to bottom.
    pub fn bilinear(&self, u: f64, v: f64) -> DVec2 {
        self.hinge_top * ((1.0 - u) * (1.0 - v))
            + self.free_top * (u * (1.0 - v))
            + self.free_bottom * (u * v)
            + self.hinge_bottom * ((1.0 - u) * v)
    }

    pub fn handle(&self, t: &DoorTuning) -> DVec2 {
        self.bilinear(t.handle_uv.0, t.handle_uv.1)
    }
}

/// Darkness of the door interior for the current phases.
#[inline]
pub fn inner_darkness(open: f64, appearance: f64, t: &DoorTuning) -> f64 {
    smoothstep_pair(t.inner_edges, open) * appearance
}

/// Decay used once the door is no longer drawn.
#[inline]
pub fn relax_darkness(current: f64, t: &DoorTuning) -> f64 {
    lerp(current, 0.0, t.inner_relax_rate)
}

/// Gray level for the anchor text; lags the interior through the gamma.
#[inline]
pub fn anchor_gray(darkness: f64, t: &DoorTuning) -> u8 {
    unit_to_byte(clamp01(darkness).powf(t.anchor_gamma))
}
