// Per-frame orchestration of the overlay.
//
// [`AnimationState::step`] is the whole frame: phases, door and straight
// strand, darkening overlay, then the rippling strand. It reads a snapshot of
// the inputs and never touches the host directly, so tests can drive it frame
// by frame with synthetic inputs.

use super::config::{ConfigError, FxConfig};
use super::door::{anchor_gray, inner_darkness, relax_darkness, DoorGeometry};
use super::easing::{clamp01, lerp, smoothstep_pair};
use super::geometry::{GeometryProvider, Viewport};
use super::line::{
    baseline, door_visibility, midpoint_curve, morph_color, overlay_alpha, straight_path,
    stroke_width, wave_amplitude,
};
use super::progress::{PresentationStates, ProgressDriver, ScrollProgress};
use super::surface::{PathCmd, Rgba, Surface};
use super::wave::{ActiveSegment, Impulse, WaveSimulator};
use glam::DVec2;

/// Input snapshot committed by the event handlers before a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub scroll_y: f64,
    pub pointer_x: f64,
    /// Normalized center of the hovered element, if any.
    pub hover_x: Option<f64>,
    /// Monotonic clock in milliseconds; only the impulse oscillators read it.
    pub time_ms: f64,
}

/// What a frame decided, for the host to mirror into the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub progress: ScrollProgress,
    pub presentation: PresentationStates,
    pub anchor_gray: u8,
    pub door_drawn: bool,
    pub segment: Option<ActiveSegment>,
}

pub struct AnimationState {
    config: FxConfig,
    driver: ProgressDriver,
    wave: WaveSimulator,
    door: DoorGeometry,
    door_darkness: f64,
    hover_strength: f64,
    prev_pointer_x: f64,
}

impl AnimationState {
    pub fn new(
        config: FxConfig,
        viewport: Viewport,
        initial_scroll_y: f64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let wave = WaveSimulator::new(config.wave.clone())?;
        let driver = ProgressDriver::new(config.progress.clone(), initial_scroll_y);
        let door = DoorGeometry::from_anchor(None, viewport, &config.door);
        Ok(Self {
            config,
            driver,
            wave,
            door,
            door_darkness: 0.0,
            hover_strength: 0.0,
            prev_pointer_x: viewport.center_x(),
        })
    }

    pub fn config(&self) -> &FxConfig {
        &self.config
    }

    pub fn progress(&self) -> &ScrollProgress {
        self.driver.progress()
    }

    pub fn wave(&self) -> &WaveSimulator {
        &self.wave
    }

    pub fn door(&self) -> &DoorGeometry {
        &self.door
    }

    pub fn door_darkness(&self) -> f64 {
        self.door_darkness
    }

    pub fn hover_strength(&self) -> f64 {
        self.hover_strength
    }

    /// Re-measures the anchor. Idempotent; safe to call every frame.
    pub fn refresh_geometry(&mut self, geometry: &impl GeometryProvider) {
        self.door = DoorGeometry::from_anchor(
            geometry.anchor(),
            geometry.viewport(),
            &self.config.door,
        );
    }

    pub fn step(
        &mut self,
        inputs: &FrameInputs,
        geometry: &impl GeometryProvider,
        surface: &mut impl Surface,
    ) -> FrameReport {
        let viewport = geometry.viewport();
        let progress = *self.driver.update(inputs.scroll_y, viewport.height);
        surface.clear(viewport.width, viewport.height);

        let eps = self.config.line.visible_epsilon;
        let door_vis = door_visibility(progress.blackout, &self.config.line);
        let door_drawn = door_vis > eps && progress.appearance > eps;
        if door_drawn {
            self.refresh_geometry(geometry);

            surface.save();
            surface.set_global_alpha(door_vis);
            self.draw_morph_line(surface, &progress, viewport);
            surface.restore();

            surface.save();
            surface.set_global_alpha(door_vis * progress.appearance);
            self.draw_door(surface, &progress, viewport);
            surface.restore();
        } else {
            self.door_darkness = relax_darkness(self.door_darkness, &self.config.door);
        }

        if progress.blackout > self.config.line.overlay_epsilon {
            let k = overlay_alpha(progress.blackout, &self.config.line);
            surface.set_fill_color(Rgba::black(k));
            surface.fill_rect(0.0, 0.0, viewport.width, viewport.height);
        }

        let segment = self.wave.active_segment(progress.wave_visible);
        let segment = if segment.appear > self.config.line.segment_epsilon {
            self.queue_pointer_impulse(inputs, &progress, viewport);
            self.queue_hover_impulse(inputs, &progress);
            self.wave.flush_pending();
            self.wave.step(progress.wave_visible);
            self.draw_wave(surface, segment, &progress, viewport);
            Some(segment)
        } else {
            None
        };

        FrameReport {
            progress,
            presentation: self.driver.presentation(),
            anchor_gray: anchor_gray(self.door_darkness, &self.config.door),
            door_drawn,
            segment,
        }
    }

    fn draw_morph_line(&self, surface: &mut impl Surface, p: &ScrollProgress, vp: Viewport) {
        let line = &self.config.line;
        if p.appearance <= line.visible_epsilon {
            return;
        }
        surface.set_round_strokes();
        surface.set_line_width(stroke_width(vp, line));
        surface.set_stroke_color(morph_color(p.blackout, p.appearance, line));
        surface.stroke_path(&straight_path(vp, baseline(vp, line)));
    }

    fn draw_door(&mut self, surface: &mut impl Surface, p: &ScrollProgress, vp: Viewport) {
        let (line, t) = (&self.config.line, &self.config.door);
        let y0 = baseline(vp, line);

        surface.set_line_width((stroke_width(vp, line) * line.door_stroke_ratio).max(1.0));
        surface.set_stroke_color(Rgba::black(t.frame_alpha * p.appearance));
        let (x, y, w, h) = self.door.frame(y0);
        surface.stroke_rect(x, y, w, h);

        let leaf = self.door.leaf(y0, p.door_open, t);

        self.door_darkness = inner_darkness(p.door_open, p.appearance, t);
        if self.door_darkness > line.visible_epsilon {
            let inset = t.inner_inset;
            surface.set_fill_color(Rgba::black(t.inner_fill_alpha * self.door_darkness));
            surface.fill_rect(x + inset, y + inset, w - inset * 2.0, h - inset * 2.0);
        }

        surface.set_stroke_color(Rgba::black(t.leaf_alpha * p.appearance));
        surface.stroke_path(&[
            PathCmd::MoveTo(leaf.hinge_top),
            PathCmd::LineTo(leaf.free_top),
            PathCmd::LineTo(leaf.free_bottom),
            PathCmd::LineTo(leaf.hinge_bottom),
            PathCmd::Close,
        ]);

        surface.set_fill_color(Rgba::black(t.handle_alpha * p.appearance));
        surface.fill_circle(leaf.handle(t), self.door.handle_radius(t));
    }

    fn queue_pointer_impulse(&mut self, inputs: &FrameInputs, p: &ScrollProgress, vp: Viewport) {
        let t = &self.config.input;
        let speed = (inputs.pointer_x - self.prev_pointer_x)
            .abs()
            .min(t.pointer_speed_max);
        self.prev_pointer_x = inputs.pointer_x;
        let strength = clamp01(speed / t.pointer_speed_norm);
        if strength <= t.pointer_min_strength {
            return;
        }
        let wv = p.wave_visible;
        let radius = lerp(
            t.pointer_radius.0,
            t.pointer_radius.1,
            smoothstep_pair(t.pointer_radius_edges, wv),
        )
        .floor();
        let amount = strength
            * (t.pointer_amount_base
                + t.pointer_amount_span * smoothstep_pair(t.pointer_amount_edges, wv));
        // Alternate the kick direction over time so a steady sweep does not
        // pile displacement onto one side.
        let dir = if (inputs.time_ms * t.pointer_flip_rate).sin() > 0.0 {
            1.0
        } else {
            -1.0
        };
        self.wave.queue(Impulse {
            x_norm: clamp01(inputs.pointer_x / vp.width.max(1.0)),
            amount: (amount * dir) as f32,
            radius: radius as usize,
        });
    }

    fn queue_hover_impulse(&mut self, inputs: &FrameInputs, p: &ScrollProgress) {
        let t = &self.config.input;
        let target = if inputs.hover_x.is_some() { 1.0 } else { 0.0 };
        self.hover_strength = lerp(self.hover_strength, target, t.hover_rate);

        let Some(x) = inputs.hover_x else {
            return;
        };
        if self.hover_strength <= t.hover_min_strength {
            return;
        }
        let hs = self.hover_strength;
        let pulse = (inputs.time_ms * t.hover_pulse_rate).sin();
        let amount = (t.hover_amount_base + t.hover_amount_pulse * pulse)
            * hs
            * smoothstep_pair(t.hover_black_edges, p.blackout);
        let radius = lerp(t.hover_radius.0, t.hover_radius.1, hs).floor();
        self.wave.queue(Impulse {
            x_norm: clamp01(x),
            amount: amount as f32,
            radius: radius as usize,
        });
    }

    fn draw_wave(
        &self,
        surface: &mut impl Surface,
        seg: ActiveSegment,
        p: &ScrollProgress,
        vp: Viewport,
    ) {
        let line = &self.config.line;
        let amp = wave_amplitude(p.wave_visible, vp, line);
        let y0 = baseline(vp, line);
        let last = (self.wave.len() - 1) as f64;
        let path = midpoint_curve((seg.start..=seg.end).map(|i| {
            DVec2::new(
                i as f64 / last * vp.width,
                y0 + self.wave.sample(i) as f64 * amp,
            )
        }));
        surface.set_round_strokes();
        surface.set_line_width(stroke_width(vp, line));
        surface.set_stroke_color(Rgba::WHITE.with_alpha(line.wave_alpha));
        surface.stroke_path(&path);
    }
}
