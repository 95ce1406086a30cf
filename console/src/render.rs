use ttt_common::games::tictactoe::{GRID_SIZE, Grid, Mark};

#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub human: char,
    pub computer: char,
}

impl Glyphs {
    pub fn for_mark(&self, mark: Mark) -> char {
        match mark {
            Mark::Empty => ' ',
            Mark::Human => self.human,
            Mark::Computer => self.computer,
        }
    }
}

pub fn render_board(grid: &Grid, glyphs: &Glyphs) -> String {
    let mut out = String::from("\n  1   2   3\n");
    for (row, marks) in grid.rows().iter().enumerate() {
        out.push_str(&format!("{} ", row + 1));
        for (col, &mark) in marks.iter().enumerate() {
            out.push_str(&format!(" {} ", glyphs.for_mark(mark)));
            if col + 1 < GRID_SIZE {
                out.push('|');
            }
        }
        out.push('\n');
        if row + 1 < GRID_SIZE {
            out.push_str("  ---+---+---\n");
        }
    }
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttt_common::games::tictactoe::Move;

    #[test]
    fn test_render_board() {
        let mut grid = Grid::new();
        grid.set(Move::new(0, 0), Mark::Human);
        grid.set(Move::new(1, 1), Mark::Computer);
        let glyphs = Glyphs {
            human: 'X',
            computer: 'O',
        };

        let expected = "\n  1   2   3\n\
                        1  X |   |   \n\
                        \x20 ---+---+---\n\
                        2    | O |   \n\
                        \x20 ---+---+---\n\
                        3    |   |   \n\n";
        assert_eq!(render_board(&grid, &glyphs), expected);
    }
}
