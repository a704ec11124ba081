// patterns.rs - named seed patterns stamped relative to the board center

use crate::grid::Grid;

/// Cell offsets are (row, col) relative to the board center.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i32, i32)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, -1), (0, 0), (0, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 0), (0, 1), (0, 2), (1, -1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(-1, -1), (-1, 0), (0, -1), (0, 0), (1, 1), (1, 2), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (-6, -4), (-6, -3), (-6, -2), (-6, 2), (-6, 3), (-6, 4),
            (-4, -6), (-4, -1), (-4, 1), (-4, 6),
            (-3, -6), (-3, -1), (-3, 1), (-3, 6),
            (-2, -6), (-2, -1), (-2, 1), (-2, 6),
            (-1, -4), (-1, -3), (-1, -2), (-1, 2), (-1, 3), (-1, 4),
            // Bottom half (mirrored)
            (1, -4), (1, -3), (1, -2), (1, 2), (1, 3), (1, 4),
            (2, -6), (2, -1), (2, 1), (2, 6),
            (3, -6), (3, -1), (3, 1), (3, 6),
            (4, -6), (4, -1), (4, 1), (4, 6),
            (6, -4), (6, -3), (6, -2), (6, 2), (6, 3), (6, 4),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(-1, 1), (0, 0), (0, 1), (1, -1), (1, 0)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, -17), (0, -16), (1, -17), (1, -16),
            (0, -7), (1, -7), (2, -7), (-1, -6), (3, -6), (-2, -5), (4, -5),
            (-2, -4), (4, -4), (1, -3), (-1, -2), (3, -2), (0, -1), (1, -1),
            (2, -1), (1, 0), (-2, 3), (-1, 3), (0, 3), (-2, 4), (-1, 4),
            (0, 4), (-3, 5), (1, 5), (-4, 7), (-3, 7), (1, 7), (2, 7),
            (-2, 17), (-1, 17), (-2, 18), (-1, 18),
        ],
    },
];

/// Clears the board, then stamps `pattern` centered on it. Offsets that fall
/// outside the board are skipped.
pub fn stamp(grid: &mut Grid, pattern: &Pattern) {
    grid.clear();
    let center = (grid.size() / 2) as i32;
    let size = grid.size() as i32;
    for &(dr, dc) in pattern.cells {
        let row = center + dr;
        let col = center + dc;
        if row >= 0 && row < size && col >= 0 && col < size {
            grid.set(col as usize, row as usize, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(name: &str) -> &'static Pattern {
        PATTERNS.iter().find(|p| p.name == name).unwrap()
    }

    #[test]
    fn stamp_replaces_previous_state() {
        let mut grid = Grid::new(20);
        grid.set(0, 0, true);
        stamp(&mut grid, pattern("Blinker"));
        assert!(!grid.get(0, 0));
        assert_eq!(grid.population(), 3);
        assert!(grid.get(9, 10) && grid.get(10, 10) && grid.get(11, 10));
    }

    #[test]
    fn stamp_skips_cells_outside_small_boards() {
        // The gun spans 36 columns; on a 10-wide board the wings are clipped.
        let mut grid = Grid::new(10);
        let gun = pattern("Gosper Glider Gun");
        stamp(&mut grid, gun);
        assert!(grid.population() < gun.cells.len());
    }

    #[test]
    fn stamped_blinker_still_oscillates() {
        let mut grid = Grid::new(15);
        stamp(&mut grid, pattern("Blinker"));
        grid.step();
        grid.step();
        assert!(grid.get(6, 7) && grid.get(7, 7) && grid.get(8, 7));
        assert_eq!(grid.population(), 3);
    }
}
