/// Logical viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f64 {
        self.width * 0.5
    }
}

/// Horizontal extent of the anchor text element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub width: f64,
}

impl AnchorRect {
    pub fn center_x(&self) -> f64 {
        self.left + self.width * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.left.is_finite() && self.width.is_finite()
    }
}

/// Supplies layout measurements on demand.
///
/// `anchor` is queried every frame while the door is visible, so
/// implementations should measure live rather than cache.
pub trait GeometryProvider {
    fn anchor(&self) -> Option<AnchorRect>;
    fn viewport(&self) -> Viewport;
}
