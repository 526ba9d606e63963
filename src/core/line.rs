use super::config::LineTuning;
use super::easing::{lerp, smoothstep_pair, unit_to_byte};
use super::geometry::Viewport;
use super::surface::{PathCmd, Rgba};
use glam::DVec2;

#[inline]
pub fn baseline(viewport: Viewport, t: &LineTuning) -> f64 {
    viewport.height * t.baseline_ratio
}

/// Thinner strokes on narrow screens.
#[inline]
pub fn stroke_width(viewport: Viewport, t: &LineTuning) -> f64 {
    if viewport.width <= t.narrow_viewport {
        t.narrow_width
    } else {
        t.wide_width
    }
}

/// Color of the straight strand: black fading to white as the page darkens.
pub fn morph_color(blackout: f64, appearance: f64, t: &LineTuning) -> Rgba {
    let k = smoothstep_pair(t.morph_edges, blackout);
    let alpha = (t.morph_alpha_base + t.morph_alpha_span * k) * appearance;
    Rgba::gray(unit_to_byte(k), alpha)
}

#[inline]
pub fn wave_amplitude(wave_visible: f64, viewport: Viewport, t: &LineTuning) -> f64 {
    lerp(
        t.amp_min,
        viewport.height * t.amp_max_ratio,
        smoothstep_pair(t.amp_edges, wave_visible),
    )
}

/// Opacity of the door and straight strand, fading out as the overlay darkens.
#[inline]
pub fn door_visibility(blackout: f64, t: &LineTuning) -> f64 {
    1.0 - smoothstep_pair(t.door_fade_edges, blackout)
}

#[inline]
pub fn overlay_alpha(blackout: f64, t: &LineTuning) -> f64 {
    smoothstep_pair(t.overlay_edges, blackout).powf(t.overlay_gamma)
}

/// Smooth curve through `points` using running midpoints.
///
/// Each sample becomes the control point of a quadratic ending halfway to the
/// next sample, so the path bends through the data without facets. The final
/// sample is not reached; the curve ends at the last midpoint.
pub fn midpoint_curve(points: impl IntoIterator<Item = DVec2>) -> Vec<PathCmd> {
    let mut iter = points.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };
    let mut path = Vec::with_capacity(iter.size_hint().0 + 1);
    path.push(PathCmd::MoveTo(first));
    let mut prev = first;
    for p in iter {
        path.push(PathCmd::QuadTo {
            ctrl: prev,
            to: (prev + p) * 0.5,
        });
        prev = p;
    }
    path
}

/// Straight strand across the full viewport width.
pub fn straight_path(viewport: Viewport, y: f64) -> [PathCmd; 2] {
    [
        PathCmd::MoveTo(DVec2::new(0.0, y)),
        PathCmd::LineTo(DVec2::new(viewport.width, y)),
    ]
}
