// grid.rs - square life board with a double-buffered generation step

use rand::Rng;

/// Square board of cells, stored row-major. `cells` holds the visible
/// generation; `scratch` is the write target during a step so neighbor counts
/// only ever read the previous generation. Both buffers always have the same
/// dimension.
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
    scratch: Vec<bool>,
}

impl Grid {
    /// All-dead board of `size` x `size` cells.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
            scratch: vec![false; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.size + x]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.cells[y * self.size + x] = alive;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        self.cells[y * self.size + x] = !self.cells[y * self.size + x];
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        self.cells.fill(false);
        self.scratch.fill(false);
    }

    /// Overwrites every cell, alive independently with probability `density`.
    pub fn randomize(&mut self, density: f64, rng: &mut impl Rng) {
        let density = density.clamp(0.0, 1.0);
        for cell in &mut self.cells {
            *cell = rng.gen_bool(density);
        }
    }

    /// Alive cells in the Moore neighborhood of (x, y). Neighbors outside the
    /// board do not count and do not wrap to the opposite edge.
    pub fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let (x, y) = (x as isize, y as isize);
        let size = self.size as isize;
        let mut n = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= size || ny < 0 || ny >= size {
                    continue;
                }
                if self.cells[(ny * size + nx) as usize] {
                    n += 1;
                }
            }
        }
        n
    }

    /// Advances the board one generation under B3/S23.
    pub fn step(&mut self) {
        for y in 0..self.size {
            for x in 0..self.size {
                let n = self.count_neighbors(x, y);
                self.scratch[y * self.size + x] = match (self.get(x, y), n) {
                    (true, 2) | (true, 3) => true, // survival
                    (false, 3) => true,            // birth
                    _ => false,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }
}
