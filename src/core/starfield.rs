// Starfield particle model and its animation loop.
//
// The model is platform-neutral: it paints through [`Surface`] and is driven
// by a [`Scheduler`], so the browser and the host tests share the same code.

use super::constants::*;
use super::schedule::Scheduler;
use super::surface::{Rgba, Surface, SurfaceSize};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Divides position and radius; smaller is nearer, larger and brighter.
    pub depth: f64,
    pub radius: f64,
    pub twinkle_phase: f64,
}

/// Window geometry in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_pixel_ratio: f64,
}

#[derive(Clone, Debug)]
pub struct StarfieldConfig {
    pub pixel_density_cap: f64,
    pub min_particles: usize,
    pub css_px_per_particle: f64,
    pub phase_step: f64,
    pub drift_amplitude: f64,
    pub drift_period: Duration,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            pixel_density_cap: PIXEL_DENSITY_CAP,
            min_particles: MIN_PARTICLES,
            css_px_per_particle: CSS_PX_PER_PARTICLE,
            phase_step: PHASE_STEP,
            drift_amplitude: DRIFT_AMPLITUDE,
            drift_period: Duration::from_millis(DRIFT_PERIOD_MS),
        }
    }
}

impl StarfieldConfig {
    /// `max(min_particles, floor(viewport_width / css_px_per_particle))`.
    pub fn particle_count(&self, viewport_width: f64) -> usize {
        let by_width = if viewport_width.is_finite() && viewport_width > 0.0 {
            (viewport_width / self.css_px_per_particle).floor() as usize
        } else {
            0
        };
        by_width.max(self.min_particles)
    }

    /// Backing-store geometry for `viewport`.
    pub fn surface_size(&self, viewport: Viewport) -> SurfaceSize {
        let dpr = if viewport.device_pixel_ratio.is_finite() && viewport.device_pixel_ratio > 0.0 {
            viewport.device_pixel_ratio
        } else {
            1.0
        };
        let scale = dpr.min(self.pixel_density_cap);
        let css_width = non_negative(viewport.width);
        let css_height = non_negative(viewport.height);
        SurfaceSize {
            css_width,
            css_height,
            width: (css_width * scale).floor() as u32,
            height: (css_height * scale).floor() as u32,
            scale,
        }
    }
}

fn non_negative(v: f64) -> f64 {
    if v.is_finite() {
        v.max(0.0)
    } else {
        0.0
    }
}

/// Wraps `v` into `[0, extent)`. A zero extent pins the value to 0.
#[inline]
pub fn wrap(v: f64, extent: f64) -> f64 {
    if extent <= 0.0 {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    // rem_euclid can round up to `extent` for tiny negative inputs
    if w >= extent {
        0.0
    } else {
        w
    }
}

pub struct Starfield {
    config: StarfieldConfig,
    width: f64,
    height: f64,
    phase: f64,
    particles: Vec<Particle>,
}

impl Starfield {
    pub fn new(config: StarfieldConfig) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            phase: 0.0,
            particles: Vec::new(),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Surface extent in the coordinates particles live in.
    pub fn extent(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Resize the surface and replace every particle.
    pub fn resize<S: Surface, R: Rng>(&mut self, viewport: Viewport, surface: &mut S, rng: &mut R) {
        let size = self.config.surface_size(viewport);
        surface.resize(size);
        self.width = size.width as f64;
        self.height = size.height as f64;

        let count = self.config.particle_count(size.css_width);
        let (w, h) = (self.width, self.height);
        self.particles = (0..count)
            .map(|_| Particle {
                x: wrap(rng.gen::<f64>() * w, w),
                y: wrap(rng.gen::<f64>() * h, h),
                depth: rng.gen_range(DEPTH_RANGE.0..DEPTH_RANGE.1),
                radius: rng.gen_range(RADIUS_RANGE.0..RADIUS_RANGE.1),
                twinkle_phase: rng.gen::<f64>() * TWINKLE_PHASE_MAX,
            })
            .collect();
        log::debug!(
            "[starfield] resized to {}x{} (scale {:.2}), {} particles",
            size.width,
            size.height,
            size.scale,
            count
        );
    }

    /// Advance the phase and paint one frame.
    pub fn render<S: Surface>(&mut self, surface: &mut S) {
        self.phase += self.config.phase_step;
        let (w, h) = (self.width, self.height);
        surface.clear(w, h);
        surface.fill_vertical_gradient(
            w,
            h,
            Rgba::black(FADE_TOP_ALPHA),
            Rgba::black(FADE_BOTTOM_ALPHA),
        );
        for p in &self.particles {
            let tw = twinkle(self.phase, p.twinkle_phase);
            let alpha = TWINKLE_ALPHA * tw + DEPTH_ALPHA / p.depth;
            surface.fill_circle(
                p.x / p.depth,
                p.y / p.depth,
                p.radius / p.depth * (1.0 + TWINKLE_GROWTH * tw),
                Rgba::white(alpha),
            );
        }
    }

    /// Nudge every particle by up to `drift_amplitude` per axis, wrapping at
    /// the surface edges.
    pub fn drift<R: Rng>(&mut self, rng: &mut R) {
        let amp = self.config.drift_amplitude;
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.x = wrap(p.x + (rng.gen::<f64>() - 0.5) * 2.0 * amp, w);
            p.y = wrap(p.y + (rng.gen::<f64>() - 0.5) * 2.0 * amp, h);
        }
    }
}

/// Twinkle factor in [0, 1].
#[inline]
pub fn twinkle(phase: f64, twinkle_phase: f64) -> f64 {
    (TWINKLE_RATE * phase + twinkle_phase).sin() * 0.5 + 0.5
}

/// A starfield bound to its surface and random source.
pub struct StarfieldRunner<S, R> {
    field: Starfield,
    surface: S,
    rng: R,
}

impl<S: Surface, R: Rng> StarfieldRunner<S, R> {
    pub fn resize(&mut self, viewport: Viewport) {
        self.field.resize(viewport, &mut self.surface, &mut self.rng);
    }

    pub fn frame(&mut self) {
        self.field.render(&mut self.surface);
    }

    pub fn drift(&mut self) {
        self.field.drift(&mut self.rng);
    }

    pub fn field(&self) -> &Starfield {
        &self.field
    }
}

/// Size the surface, seed the particles and register the paint and drift
/// tasks. Returns `None` without touching the scheduler when there is no
/// surface to draw on.
pub fn mount<S, R>(
    surface: Option<S>,
    viewport: Viewport,
    config: StarfieldConfig,
    rng: R,
    scheduler: &dyn Scheduler,
) -> Option<Rc<RefCell<StarfieldRunner<S, R>>>>
where
    S: Surface + 'static,
    R: Rng + 'static,
{
    let Some(surface) = surface else {
        log::info!("[starfield] no 2d surface; starfield disabled");
        return None;
    };
    let drift_period = config.drift_period;
    let runner = Rc::new(RefCell::new(StarfieldRunner {
        field: Starfield::new(config),
        surface,
        rng,
    }));
    runner.borrow_mut().resize(viewport);

    let paint = runner.clone();
    scheduler.each_frame(Box::new(move || paint.borrow_mut().frame()));
    let drift = runner.clone();
    scheduler.every(drift_period, Box::new(move || drift.borrow_mut().drift()));
    Some(runner)
}
