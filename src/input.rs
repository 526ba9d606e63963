// Input state shared between event handlers and the frame loop.
//
// Each field has exactly one writer: scroll handler -> scroll_y, pointermove ->
// pointer_x, hover/touch handlers -> hover_x, resize -> viewport. The frame
// loop only reads. Nothing here is locked; a frame may see a value one event
// old, which is harmless.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputState {
    pub scroll_y: f64,
    pub pointer_x: f64,
    pub hover_x: Option<f64>,
    pub viewport_w: f64,
    pub viewport_h: f64,
}

impl InputState {
    pub fn new(viewport_w: f64, viewport_h: f64, scroll_y: f64) -> Self {
        Self {
            scroll_y,
            pointer_x: viewport_w * 0.5,
            hover_x: None,
            viewport_w,
            viewport_h,
        }
    }
}

#[inline]
pub fn clamp_dpr(dpr: f64, min: f64, max: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.clamp(min, max)
    } else {
        min
    }
}

/// Normalized horizontal center of an element's box within the viewport.
#[inline]
pub fn element_center_x01(left: f64, width: f64, viewport_w: f64) -> f64 {
    if viewport_w <= 0.0 {
        return 0.5;
    }
    let cx = left + width * 0.5;
    (cx / viewport_w).clamp(0.0, 1.0)
}

/// Backing-store size in device pixels for a logical extent.
#[inline]
pub fn backing_px(logical: f64, dpr: f64) -> u32 {
    (logical * dpr).floor().max(1.0) as u32
}
