// Scroll offset to animation phases.
//
// The driver is the only writer of [`ScrollProgress`]. It runs once per frame
// with the latest committed scroll offset; everything downstream reads the
// phases it produces.

use super::config::ProgressTuning;
use super::easing::{clamp01, lerp, smoothstep_pair};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollDirection {
    #[default]
    Down,
    Up,
}

impl ScrollDirection {
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Down => 1.0,
            ScrollDirection::Up => -1.0,
        }
    }
}

/// Bounded phase values, all in \[0, 1\].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollProgress {
    /// Instantaneous; the overlay stays invisible until the first scroll.
    pub appearance: f64,
    pub door_open: f64,
    pub blackout: f64,
    pub wave_visible: f64,
    /// Exposed for styling hooks only; nothing in the renderer reads it.
    pub momentum: f64,
    pub direction: ScrollDirection,
}

/// Named body states consumed by the page's stylesheet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresentationStates {
    pub fx_start: bool,
    pub tail_ready: bool,
}

impl PresentationStates {
    pub fn from_progress(p: &ScrollProgress, tuning: &ProgressTuning) -> Self {
        Self {
            fx_start: p.blackout > tuning.fx_start_blackout,
            tail_ready: p.blackout > tuning.tail_ready_blackout
                && p.wave_visible > tuning.tail_ready_wave,
        }
    }
}

/// Unsmoothed targets for a given scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseTargets {
    pub appearance: f64,
    pub door: f64,
    pub black: f64,
    pub wave: f64,
}

impl PhaseTargets {
    pub fn at(scroll_y: f64, viewport_h: f64, t: &ProgressTuning) -> Self {
        let vh = viewport_h.max(1.0);
        let door_span = vh * t.door_span;
        let black_local = (scroll_y - door_span).max(0.0);
        let black = clamp01(black_local / (vh * t.black_span));
        Self {
            appearance: clamp01(scroll_y / (vh * t.appear_span)),
            door: clamp01(scroll_y / door_span),
            black,
            wave: clamp01(smoothstep_pair(t.wave_edges, black)),
        }
    }
}

pub struct ProgressDriver {
    tuning: ProgressTuning,
    progress: ScrollProgress,
    states: PresentationStates,
    last_scroll_y: f64,
}

impl ProgressDriver {
    pub fn new(tuning: ProgressTuning, initial_scroll_y: f64) -> Self {
        Self {
            tuning,
            progress: ScrollProgress::default(),
            states: PresentationStates::default(),
            last_scroll_y: initial_scroll_y,
        }
    }

    pub fn progress(&self) -> &ScrollProgress {
        &self.progress
    }

    pub fn presentation(&self) -> PresentationStates {
        self.states
    }

    pub fn update(&mut self, scroll_y: f64, viewport_h: f64) -> &ScrollProgress {
        let t = &self.tuning;
        let p = &mut self.progress;
        let targets = PhaseTargets::at(scroll_y, viewport_h, t);
        p.appearance = targets.appearance;

        let dy = scroll_y - self.last_scroll_y;
        self.last_scroll_y = scroll_y;
        if dy.abs() > t.momentum_min_delta {
            p.direction = if dy >= 0.0 {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            let speed = clamp01(dy.abs() / t.momentum_speed_norm);
            p.momentum = clamp01(p.momentum + speed * t.momentum_gain);
        }
        p.momentum = lerp(p.momentum, 0.0, t.momentum_decay);

        p.door_open = lerp(p.door_open, targets.door, t.door_rate);
        p.blackout = lerp(p.blackout, targets.black, t.black_rate);
        p.wave_visible = lerp(p.wave_visible, targets.wave, t.wave_rate);

        let states = PresentationStates::from_progress(p, t);
        if states.fx_start != self.states.fx_start {
            log::debug!("[progress] fx-start={} blackout={:.3}", states.fx_start, p.blackout);
        }
        if states.tail_ready != self.states.tail_ready {
            log::debug!(
                "[progress] tail-ready={} blackout={:.3} wave={:.3}",
                states.tail_ready,
                p.blackout,
                p.wave_visible
            );
        }
        self.states = states;
        &self.progress
    }
}
