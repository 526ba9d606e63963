// Tuning for the scroll-driven overlay.
//
// Every coefficient the animation uses lives here so tests can address it and
// the simulation code stays free of bare numbers. Defaults reproduce the
// production look of the page.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("wave grid needs at least 2 nodes, got {0}")]
    GridTooSmall(usize),
    #[error("{name} must be in (0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} range is inverted: {min} > {max}")]
    InvertedRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
}

/// Scroll-to-phase mapping and smoothing rates.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressTuning {
    // Spans as fractions of the viewport height
    pub appear_span: f64,
    pub door_span: f64,
    pub black_span: f64,
    // Wave target = smoothstep(edge0, edge1, black target)
    pub wave_edges: (f64, f64),
    // One-pole smoothing rates per frame
    pub door_rate: f64,
    pub black_rate: f64,
    pub wave_rate: f64,
    // Momentum
    pub momentum_min_delta: f64, // px
    pub momentum_speed_norm: f64, // px per frame mapped to 1.0
    pub momentum_gain: f64,
    pub momentum_decay: f64,
    // Presentation gates (strict greater-than, no hysteresis)
    pub fx_start_blackout: f64,
    pub tail_ready_blackout: f64,
    pub tail_ready_wave: f64,
}

impl Default for ProgressTuning {
    fn default() -> Self {
        Self {
            appear_span: 0.25,
            door_span: 0.95,
            black_span: 0.75,
            wave_edges: (0.20, 0.90),
            door_rate: 0.085,
            black_rate: 0.165,
            wave_rate: 0.095,
            momentum_min_delta: 0.2,
            momentum_speed_norm: 80.0,
            momentum_gain: 0.35,
            momentum_decay: 0.035,
            fx_start_blackout: 0.06,
            tail_ready_blackout: 0.985,
            tail_ready_wave: 0.75,
        }
    }
}

/// Mass-spring strand coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveTuning {
    pub nodes: usize,
    pub spring: f32,
    pub damping: f32,
    pub spread: f32,
    pub diffusion_passes: usize,
    // Sub-step selection: speed = lerp(min, max, smoothstep(edges, wave visible))
    pub speed_min: f64,
    pub speed_max: f64,
    pub speed_edges: (f64, f64),
    pub fast_speed_threshold: f64,
    pub slow_substeps: usize,
    pub fast_substeps: usize,
    // Active segment growth = smoothstep(edges, p) ^ exponent
    pub segment_edges: (f64, f64),
    pub segment_exponent: f64,
}

impl Default for WaveTuning {
    fn default() -> Self {
        Self {
            nodes: 440,
            spring: 0.0105,
            damping: 0.948,
            spread: 0.110,
            diffusion_passes: 2,
            speed_min: 0.65,
            speed_max: 1.55,
            speed_edges: (0.18, 0.95),
            fast_speed_threshold: 1.2,
            slow_substeps: 2,
            fast_substeps: 3,
            segment_edges: (0.02, 0.12),
            segment_exponent: 1.08,
        }
    }
}

/// Door sizing, swing and shading.
#[derive(Clone, Debug, PartialEq)]
pub struct DoorTuning {
    pub fallback_width: f64,
    pub min_pad: f64,
    pub pad_ratio: f64,
    pub width_range: (f64, f64),
    pub aspect: f64, // height / width
    pub height_range: (f64, f64),
    pub max_angle_ratio: f64, // fraction of a quarter turn
    pub skew_ratio: f64,
    pub handle_uv: (f64, f64),
    pub handle_min_radius: f64,
    pub handle_radius_ratio: f64,
    pub inner_edges: (f64, f64),
    pub inner_fill_alpha: f64,
    pub inner_inset: f64,
    pub inner_relax_rate: f64,
    pub anchor_gamma: f64,
    pub frame_alpha: f64,
    pub leaf_alpha: f64,
    pub handle_alpha: f64,
}

impl Default for DoorTuning {
    fn default() -> Self {
        Self {
            fallback_width: 150.0,
            min_pad: 6.0,
            pad_ratio: 0.06,
            width_range: (96.0, 220.0),
            aspect: 1.72,
            height_range: (300.0, 500.0),
            max_angle_ratio: 0.92,
            skew_ratio: 0.14,
            handle_uv: (0.74, 0.66),
            handle_min_radius: 3.0,
            handle_radius_ratio: 0.022,
            inner_edges: (0.10, 0.85),
            inner_fill_alpha: 0.92,
            inner_inset: 1.0,
            inner_relax_rate: 0.12,
            anchor_gamma: 1.25,
            frame_alpha: 0.35,
            leaf_alpha: 0.42,
            handle_alpha: 0.78,
        }
    }
}

/// Strand placement, stroke styling and layer blending.
#[derive(Clone, Debug, PartialEq)]
pub struct LineTuning {
    pub baseline_ratio: f64, // of viewport height
    pub narrow_viewport: f64,
    pub narrow_width: f64,
    pub wide_width: f64,
    pub door_stroke_ratio: f64,
    pub morph_edges: (f64, f64),
    pub morph_alpha_base: f64,
    pub morph_alpha_span: f64,
    pub amp_min: f64,
    pub amp_max_ratio: f64, // of viewport height
    pub amp_edges: (f64, f64),
    pub wave_alpha: f64,
    pub door_fade_edges: (f64, f64),
    pub overlay_edges: (f64, f64),
    pub overlay_gamma: f64,
    pub visible_epsilon: f64,
    pub overlay_epsilon: f64,
    pub segment_epsilon: f64,
}

impl Default for LineTuning {
    fn default() -> Self {
        Self {
            baseline_ratio: 0.52,
            narrow_viewport: 520.0,
            narrow_width: 1.1,
            wide_width: 1.5,
            door_stroke_ratio: 0.9,
            morph_edges: (0.05, 0.65),
            morph_alpha_base: 0.75,
            morph_alpha_span: 0.20,
            amp_min: 2.0,
            amp_max_ratio: 0.18,
            amp_edges: (0.10, 1.0),
            wave_alpha: 0.95,
            door_fade_edges: (0.0, 0.55),
            overlay_edges: (0.0, 1.0),
            overlay_gamma: 1.06,
            visible_epsilon: 0.001,
            overlay_epsilon: 0.0001,
            segment_epsilon: 0.0001,
        }
    }
}

/// Pointer and hover impulse shaping.
#[derive(Clone, Debug, PartialEq)]
pub struct InputTuning {
    pub pointer_speed_max: f64, // px per frame
    pub pointer_speed_norm: f64,
    pub pointer_min_strength: f64,
    pub pointer_radius: (f64, f64),
    pub pointer_radius_edges: (f64, f64),
    pub pointer_amount_base: f64,
    pub pointer_amount_span: f64,
    pub pointer_amount_edges: (f64, f64),
    pub pointer_flip_rate: f64, // rad per ms
    pub hover_rate: f64,
    pub hover_min_strength: f64,
    pub hover_amount_base: f64,
    pub hover_amount_pulse: f64,
    pub hover_pulse_rate: f64, // rad per ms
    pub hover_black_edges: (f64, f64),
    pub hover_radius: (f64, f64),
}

impl Default for InputTuning {
    fn default() -> Self {
        Self {
            pointer_speed_max: 80.0,
            pointer_speed_norm: 55.0,
            pointer_min_strength: 0.01,
            pointer_radius: (16.0, 60.0),
            pointer_radius_edges: (0.20, 0.95),
            pointer_amount_base: 0.014,
            pointer_amount_span: 0.020,
            pointer_amount_edges: (0.18, 0.95),
            pointer_flip_rate: 0.01,
            hover_rate: 0.08,
            hover_min_strength: 0.001,
            hover_amount_base: 0.0065,
            hover_amount_pulse: 0.0035,
            hover_pulse_rate: 0.004,
            hover_black_edges: (0.55, 1.0),
            hover_radius: (18.0, 36.0),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FxConfig {
    pub progress: ProgressTuning,
    pub wave: WaveTuning,
    pub door: DoorTuning,
    pub line: LineTuning,
    pub input: InputTuning,
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wave.nodes < 2 {
            return Err(ConfigError::GridTooSmall(self.wave.nodes));
        }
        let p = &self.progress;
        for (name, value) in [
            ("progress.door_rate", p.door_rate),
            ("progress.black_rate", p.black_rate),
            ("progress.wave_rate", p.wave_rate),
            ("progress.momentum_decay", p.momentum_decay),
            ("door.inner_relax_rate", self.door.inner_relax_rate),
            ("input.hover_rate", self.input.hover_rate),
        ] {
            check_rate(name, value)?;
        }
        for (name, value) in [
            ("progress.appear_span", p.appear_span),
            ("progress.door_span", p.door_span),
            ("progress.black_span", p.black_span),
            ("progress.momentum_speed_norm", p.momentum_speed_norm),
            ("input.pointer_speed_norm", self.input.pointer_speed_norm),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
        }
        let d = &self.door;
        check_range("door.width_range", d.width_range)?;
        check_range("door.height_range", d.height_range)?;
        check_range("input.pointer_radius", self.input.pointer_radius)?;
        check_range("input.hover_radius", self.input.hover_radius)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}

fn check_range(name: &'static str, (min, max): (f64, f64)) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvertedRange { name, min, max });
    }
    Ok(())
}
