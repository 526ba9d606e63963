// Page contract: element ids, selectors and class names the stylesheet and
// markup agree on, plus host-side timing.
// Overlay canvas and the word whose color follows the door
pub const CANVAS_ID: &str = "fx";
pub const ANCHOR_ID: &str = "doorAnchor";

// Elements on the closing page that nudge the strand on hover/touch
pub const TAIL_ITEM_SELECTOR: &str = ".tailItem";

// Body classes toggled from the presentation gates
pub const FX_START_CLASS: &str = "fx-start";
pub const TAIL_READY_CLASS: &str = "tail-ready";

// Device pixel ratio clamp for the canvas backing store
pub const DPR_MIN: f64 = 1.0;
pub const DPR_MAX: f64 = 2.0;

// Geometry recompute delay when the font loading API is missing
pub const FONT_FALLBACK_DELAY_MS: i32 = 80;
