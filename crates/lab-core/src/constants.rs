// Shared tuning constants used by both the simulation logic and the web frontend.

// Particle field
pub const PARTICLE_COUNT: usize = 50; // fixed set, created once per field
pub const PARTICLE_SIZE_MIN: f32 = 1.0; // radius range [min, max)
pub const PARTICLE_SIZE_MAX: f32 = 4.0;
pub const PARTICLE_SPEED_RANGE: f32 = 1.0; // velocity components in [-range, range)
pub const ATTRACTION_RADIUS: f32 = 100.0; // pointer pull only acts inside this distance
pub const ATTRACTION_GAIN: f32 = 0.001; // per-tick velocity gain toward the pointer

// Particle rendering
pub const FIELD_CLEAR_COLOR: &str = "#f9fafb";
pub const PARTICLE_SATURATION_PCT: u32 = 70;
pub const PARTICLE_LIGHTNESS_PCT: u32 = 50;

// Audio player
pub const DURATION_POLL_MS: i32 = 500; // fallback poll while the media duration is unknown
pub const SKIP_SECONDS: f64 = 10.0; // transport skip-button step

// Visualizer rendering
pub const BAR_COLOR: &str = "#3b82f6";

// Mock data source
pub const WEATHER_DELAY_MS: i32 = 500; // simulated response latency
pub const SUN_OFFSET_SECS: i64 = 21_600; // sunrise/sunset offset from "now", six hours
