// main.rs - interactive Conway's Game of Life on an editable board

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

mod config;
mod grid;
mod patterns;
mod ui;

use config::{DEFAULT_DENSITY, DEFAULT_DIM, DEFAULT_TICK_MS, MAX_DIM, MIN_DIM};
use grid::Grid;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(LifeBoard::default())),
    )
}

/// All simulation state, owned by the controller. Nothing lives at module
/// scope; every mutation goes through the methods below.
pub struct LifeBoard {
    grid: Grid,
    generation: u32,
    running: bool,
    last_tick: Instant,
    tick_interval: Duration,
    dim_input: usize,
    selected_pattern: usize,
    live_color: Color32,
    dead_color: Color32,
}

impl Default for LifeBoard {
    fn default() -> Self {
        Self {
            grid: Grid::new(DEFAULT_DIM),
            generation: 0,
            running: false,
            last_tick: Instant::now(),
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            dim_input: DEFAULT_DIM,
            selected_pattern: 0,
            live_color: Color32::from_rgb(0, 200, 200),
            dead_color: Color32::from_rgb(40, 40, 40),
        }
    }
}

impl LifeBoard {
    fn start(&mut self) {
        if !self.running {
            self.running = true;
            self.last_tick = Instant::now();
            log::info!("simulation started");
        }
    }

    fn pause(&mut self) {
        if self.running {
            self.running = false;
            log::info!("simulation paused at generation {}", self.generation);
        }
    }

    /// Advances exactly one generation. Run state is left untouched.
    fn step_once(&mut self) {
        self.grid.step();
        self.generation += 1;
    }

    fn reset(&mut self) {
        self.running = false;
        self.grid.clear();
        self.generation = 0;
        log::info!("board reset to {0}x{0}", self.grid.size());
    }

    /// Overwrites the cells; generation counter and run state are untouched.
    fn randomize(&mut self) {
        self.grid.randomize(DEFAULT_DENSITY, &mut rand::thread_rng());
        log::info!("board randomized, population {}", self.grid.population());
    }

    /// Reallocates an all-dead board at the clamped dimension. Always stops
    /// the tick first so no in-flight step touches the replaced grid.
    fn resize(&mut self, dim: usize) {
        self.running = false;
        let dim = dim.clamp(MIN_DIM, MAX_DIM);
        self.grid = Grid::new(dim);
        self.generation = 0;
        self.dim_input = dim;
        log::info!("board resized to {dim}x{dim}");
    }

    fn stamp_selected(&mut self) {
        self.running = false;
        if let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) {
            patterns::stamp(&mut self.grid, pattern);
            self.generation = 0;
            log::info!("stamped pattern: {}", pattern.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_clamps_and_yields_a_fresh_board() {
        let mut board = LifeBoard::default();
        board.grid.set(2, 2, true);
        board.step_once();
        board.start();

        board.resize(3);
        assert_eq!(board.grid.size(), MIN_DIM);
        assert_eq!(board.dim_input, MIN_DIM);
        assert_eq!(board.generation, 0);
        assert!(!board.running);
        assert_eq!(board.grid.population(), 0);

        board.resize(500);
        assert_eq!(board.grid.size(), MAX_DIM);
    }

    #[test]
    fn reset_stops_the_run_and_zeroes_the_counter() {
        let mut board = LifeBoard::default();
        board.grid.set(1, 1, true);
        board.grid.set(2, 1, true);
        board.grid.set(1, 2, true);
        board.step_once();
        board.start();
        assert!(board.running);
        assert_eq!(board.generation, 1);

        board.reset();
        assert!(!board.running);
        assert_eq!(board.generation, 0);
        assert_eq!(board.grid.population(), 0);
        assert_eq!(board.grid.size(), DEFAULT_DIM);
    }

    #[test]
    fn randomize_touches_neither_generation_nor_run_state() {
        let mut board = LifeBoard::default();
        board.grid.set(1, 1, true);
        board.grid.set(2, 1, true);
        board.grid.set(1, 2, true);
        board.step_once();
        board.step_once();

        board.randomize();
        assert_eq!(board.generation, 2);
        assert!(!board.running);

        board.start();
        board.randomize();
        assert!(board.running);
    }

    #[test]
    fn step_leaves_run_state_alone() {
        let mut board = LifeBoard::default();
        board.step_once();
        assert!(!board.running);
        assert_eq!(board.generation, 1);

        board.start();
        board.step_once();
        assert!(board.running);
        assert_eq!(board.generation, 2);
    }
}
