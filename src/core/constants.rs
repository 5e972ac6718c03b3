// Tuning constants for the page effects. Shared by the wasm frontend and the
// host-side tests.

// Starfield surface
pub const PIXEL_DENSITY_CAP: f64 = 2.0; // devicePixelRatio is clamped to this
pub const MIN_PARTICLES: usize = 40;
pub const CSS_PX_PER_PARTICLE: f64 = 22.0; // one particle per this many CSS px of width

// Particle ranges, half-open
pub const DEPTH_RANGE: (f64, f64) = (0.3, 1.9);
pub const RADIUS_RANGE: (f64, f64) = (0.4, 2.6);
pub const TWINKLE_PHASE_MAX: f64 = 1.6;

// Per-frame paint
pub const PHASE_STEP: f64 = 0.01;
pub const TWINKLE_RATE: f64 = 2.0; // multiplies the phase inside sin()
pub const TWINKLE_ALPHA: f64 = 0.4;
pub const DEPTH_ALPHA: f64 = 0.45; // divided by depth
pub const TWINKLE_GROWTH: f64 = 0.5; // radius grows by up to 50% at full twinkle
pub const FADE_TOP_ALPHA: f64 = 0.18;
pub const FADE_BOTTOM_ALPHA: f64 = 0.22;

// Drift
pub const DRIFT_PERIOD_MS: u64 = 800;
pub const DRIFT_AMPLITUDE: f64 = 0.3; // max offset per axis per tick

// Profile tilt
pub const TILT_MAX_DEG: f64 = 6.0;

// Audio
pub const DEFAULT_VOLUME: f64 = 0.6;

// Entry overlay
pub const OVERLAY_REMOVE_DELAY_MS: u64 = 600;
pub const TYPEWRITER_START_DELAY_MS: u64 = 700;
