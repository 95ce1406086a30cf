use super::types::{GRID_SIZE, Mark, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Grid {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn from_rows(cells: [[Mark; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    pub fn get(&self, mv: Move) -> Mark {
        debug_assert!(mv.is_in_bounds(), "move {:?} is outside the grid", mv);
        self.cells[mv.row][mv.col]
    }

    pub fn set(&mut self, mv: Move, mark: Mark) {
        debug_assert!(mv.is_in_bounds(), "move {:?} is outside the grid", mv);
        self.cells[mv.row][mv.col] = mark;
    }

    pub fn rows(&self) -> &[[Mark; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// All nine cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Move, Mark)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, marks)| {
            marks
                .iter()
                .enumerate()
                .map(move |(col, &mark)| (Move::new(row, col), mark))
        })
    }
}

pub fn get_available_moves(grid: &Grid) -> Vec<Move> {
    grid.cells()
        .filter(|&(_, mark)| mark == Mark::Empty)
        .map(|(mv, _)| mv)
        .collect()
}

pub fn moves_remaining(grid: &Grid) -> bool {
    grid.cells().any(|(_, mark)| mark == Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Mark = Mark::Empty;
    const H: Mark = Mark::Human;
    const C: Mark = Mark::Computer;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(get_available_moves(&grid).len(), 9);
        assert!(moves_remaining(&grid));
    }

    #[test]
    fn test_cells_are_row_major() {
        let order: Vec<Move> = Grid::new().cells().map(|(mv, _)| mv).collect();
        assert_eq!(order.len(), 9);
        assert_eq!(order[0], Move::new(0, 0));
        assert_eq!(order[1], Move::new(0, 1));
        assert_eq!(order[3], Move::new(1, 0));
        assert_eq!(order[8], Move::new(2, 2));
    }

    #[test]
    fn test_available_moves_skip_marked_cells() {
        let grid = Grid::from_rows([[H, E, C], [E, C, E], [H, H, C]]);
        assert_eq!(
            get_available_moves(&grid),
            vec![Move::new(0, 1), Move::new(1, 0), Move::new(1, 2)]
        );
    }

    #[test]
    fn test_full_grid_has_no_moves() {
        let grid = Grid::from_rows([[H, C, H], [H, C, C], [C, H, H]]);
        assert!(!moves_remaining(&grid));
        assert!(get_available_moves(&grid).is_empty());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the grid")]
    fn test_get_outside_grid_is_rejected() {
        Grid::new().get(Move::new(3, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the grid")]
    fn test_set_outside_grid_is_rejected() {
        Grid::new().set(Move::new(0, 3), Mark::Human);
    }
}
