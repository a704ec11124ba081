// config.rs - board and simulation constants

/// Board edge length in UI points; each cell is drawn at BOARD_SIZE / dimension.
pub const BOARD_SIZE: f32 = 500.0;

/// Default grid dimension (cells per side).
pub const DEFAULT_DIM: usize = 50;

/// Bounds for the dimension input; out-of-range values are clamped, not rejected.
pub const MIN_DIM: usize = 10;
pub const MAX_DIM: usize = 100;

/// Default interval between generations while running.
pub const DEFAULT_TICK_MS: u64 = 300;

/// Default alive probability for randomize.
pub const DEFAULT_DENSITY: f64 = 0.2;
