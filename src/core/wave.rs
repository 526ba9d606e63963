// One-dimensional mass-spring strand.
//
// Nodes are spatial samples left to right across the viewport. Each node is
// pulled toward rest by a spring, loses energy to damping, and exchanges
// velocity with its neighbours through a diffusion term so injected impulses
// travel as ripples. Edge nodes stand in for their own missing neighbour.

use super::config::{ConfigError, WaveTuning};
use super::easing::{lerp, smoothstep_pair};
use smallvec::SmallVec;

/// A localized velocity kick queued between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Impulse {
    pub x_norm: f64,
    pub amount: f32,
    pub radius: usize,
}

/// Inclusive node range currently drawn, grown symmetrically from the middle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActiveSegment {
    pub appear: f64,
    pub start: usize,
    pub end: usize,
}

impl ActiveSegment {
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

pub struct WaveSimulator {
    position: Vec<f32>,
    velocity: Vec<f32>,
    pending: SmallVec<[Impulse; 4]>,
    tuning: WaveTuning,
}

impl WaveSimulator {
    pub fn new(tuning: WaveTuning) -> Result<Self, ConfigError> {
        if tuning.nodes < 2 {
            return Err(ConfigError::GridTooSmall(tuning.nodes));
        }
        Ok(Self {
            position: vec![0.0; tuning.nodes],
            velocity: vec![0.0; tuning.nodes],
            pending: SmallVec::new(),
            tuning,
        })
    }

    pub fn len(&self) -> usize {
        self.position.len()
    }

    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    #[inline]
    pub fn sample(&self, i: usize) -> f32 {
        self.position.get(i).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn velocity(&self, i: usize) -> f32 {
        self.velocity.get(i).copied().unwrap_or(0.0)
    }

    pub fn positions(&self) -> &[f32] {
        &self.position
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocity
    }

    /// Node nearest to a normalized horizontal position.
    pub fn node_index(&self, x_norm: f64) -> usize {
        let last = self.len() - 1;
        let idx = (x_norm * last as f64).round();
        if idx.is_nan() || idx <= 0.0 {
            0
        } else {
            (idx as usize).min(last)
        }
    }

    /// Adds a Gaussian-weighted velocity kick around `x_norm`.
    ///
    /// A zero radius touches only the center node.
    pub fn inject(&mut self, x_norm: f64, amount: f32, radius: usize) {
        let center = self.node_index(x_norm) as isize;
        if radius == 0 {
            self.velocity[center as usize] += amount;
            return;
        }
        let r = radius as isize;
        let n = self.len() as isize;
        for k in -r..=r {
            let i = center + k;
            if i < 0 || i >= n {
                continue;
            }
            let d = k as f32 / radius as f32;
            let w = (-d * d * 2.0).exp();
            self.velocity[i as usize] += amount * w;
        }
    }

    pub fn queue(&mut self, impulse: Impulse) {
        self.pending.push(impulse);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Applies every queued impulse in arrival order.
    pub fn flush_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for imp in pending {
            self.inject(imp.x_norm, imp.amount, imp.radius);
        }
    }

    pub fn substeps(&self, wave_visible: f64) -> usize {
        let t = &self.tuning;
        let speed = lerp(
            t.speed_min,
            t.speed_max,
            smoothstep_pair(t.speed_edges, wave_visible),
        );
        if speed > t.fast_speed_threshold {
            t.fast_substeps
        } else {
            t.slow_substeps
        }
    }

    pub fn step(&mut self, wave_visible: f64) {
        let steps = self.substeps(wave_visible);
        let (spring, damping, spread) =
            (self.tuning.spring, self.tuning.damping, self.tuning.spread);
        let last = self.len() - 1;
        for _ in 0..steps {
            for (y, v) in self.position.iter_mut().zip(self.velocity.iter_mut()) {
                *v += -*y * spring;
                *v *= damping;
                *y += *v;
            }
            for _ in 0..self.tuning.diffusion_passes {
                let y = &self.position;
                for (i, v) in self.velocity.iter_mut().enumerate() {
                    let left = if i > 0 { y[i - 1] } else { y[i] };
                    let right = if i < last { y[i + 1] } else { y[i] };
                    *v += (left + right - 2.0 * y[i]) * spread;
                }
            }
        }
    }

    /// Node range to draw for a given visibility phase.
    ///
    /// Grows around the true center of the strand, so a fully grown segment
    /// spans every node even when the node count is even.
    pub fn active_segment(&self, p: f64) -> ActiveSegment {
        let t = &self.tuning;
        let appear = smoothstep_pair(t.segment_edges, p);
        let grow = appear.powf(t.segment_exponent);
        let last = (self.len() - 1) as f64;
        let center = last * 0.5;
        let half = center * grow;
        let start = (center - half).floor().max(0.0) as usize;
        let end = ((center + half).ceil() as usize).min(self.len() - 1);
        ActiveSegment { appear, start, end }
    }

    pub fn energy(&self) -> f32 {
        self.position
            .iter()
            .zip(self.velocity.iter())
            .map(|(y, v)| y * y + v * v)
            .sum()
    }
}
