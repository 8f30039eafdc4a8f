use std::fmt;

use core_2048::{metrics, Coord, Direction, Grid, EMPTY_GRID, SIZE};
use log::{debug, trace};
use rand::Rng;

use crate::{logic, rules::Rules};

/// The state of one game: tile values plus the running score.
///
/// A finished board is never reset in place; callers start a new game with [`Board::new`].
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Grid,
    score: u32,
    rules: Rules,
}

impl Board {
    /// Starts a game with a single 2 on a uniformly chosen cell.
    pub fn new(rules: Rules, rng: &mut impl Rng) -> Self {
        let mut grid = EMPTY_GRID;
        core_2048::set(&mut grid, (rng.gen_range(0..SIZE), rng.gen_range(0..SIZE)), 2);

        Self::from_grid(grid, 0, rules)
    }

    pub const fn from_grid(grid: Grid, score: u32, rules: Rules) -> Self {
        Self { grid, score, rules }
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, coord: Coord) -> u32 {
        core_2048::get(&self.grid, coord)
    }

    pub const fn score(&self) -> u32 {
        self.score
    }

    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn empty_cells(&self) -> Vec<Coord> {
        logic::empty_cells(&self.grid)
    }

    pub fn max_tile(&self) -> u32 {
        metrics::max_tile(&self.grid)
    }

    pub fn tile_count(&self) -> usize {
        metrics::tile_count(&self.grid)
    }

    pub fn has_won(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .any(|&cell| cell == self.rules.win_tile())
    }

    /// True once the grid is full and no direction has an adjacent equal pair.
    pub fn has_lost(&self) -> bool {
        if metrics::empty_count(&self.grid) > 0 {
            return false;
        }

        !Direction::iter().any(|direction| logic::has_merge(&self.grid, direction))
    }

    /// Whether moving in `direction` would change the grid.
    pub fn can_move(&self, direction: Direction) -> bool {
        logic::resolve(self.grid, direction).moved
    }

    pub fn legal_moves(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::iter().filter(|&direction| self.can_move(direction))
    }

    /// Slides and merges every tile in `direction`.
    ///
    /// If anything changed, the merge score is added and one new tile is spawned; otherwise the
    /// board is left untouched. Returns whether the board changed.
    pub fn move_tiles(&mut self, direction: Direction, rng: &mut impl Rng) -> bool {
        let outcome = logic::resolve(self.grid, direction);

        if !outcome.moved {
            trace!("{direction:?} leaves the board unchanged");
            return false;
        }

        self.grid = outcome.grid;
        self.score = self.score.saturating_add(outcome.score);

        let spawned = logic::spawn_tile(&mut self.grid, &self.rules, rng);

        debug!(
            "{direction:?}: +{} (score {}), spawned {spawned:?}",
            outcome.score, self.score
        );

        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for &cell in row {
                if cell == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{cell:>5}")?;
                }
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    const STUCK: Grid = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    fn board(grid: Grid) -> Board {
        Board::from_grid(grid, 0, Rules::default())
    }

    #[test]
    fn new_board_has_one_two() {
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let board = Board::new(Rules::default(), &mut rng);

            assert_eq!(board.tile_count(), 1);
            assert_eq!(board.max_tile(), 2);
            assert_eq!(board.score(), 0);
            assert_eq!(board.empty_cells().len(), SIZE * SIZE - 1);
        }
    }

    #[test]
    fn same_seed_same_game() {
        let play = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut board = Board::new(Rules::default(), &mut rng);

            for direction in Direction::ALL.into_iter().cycle().take(40) {
                board.move_tiles(direction, &mut rng);
            }

            board
        };

        assert_eq!(play(99), play(99));
    }

    #[test]
    fn scenario_row_left() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut grid = STUCK;
        grid[0] = [2, 0, 2, 4];
        let mut board = board(grid);

        assert!(board.move_tiles(Direction::Left, &mut rng));

        assert_eq!(board.score(), 4);
        assert_eq!(board.grid()[1..], STUCK[1..]);
        assert_eq!(board.grid()[0][..2], [4, 4]);

        let spawned: Vec<u32> = board.grid()[0][2..].iter().copied().filter(|&c| c != 0).collect();
        assert!(spawned == [2] || spawned == [4], "{spawned:?}");
    }

    #[test]
    fn noop_move_changes_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut board = Board::from_grid(single_corner(), 12, Rules::default());
        let before = board.clone();

        assert!(!board.move_tiles(Direction::Up, &mut rng));
        assert!(!board.move_tiles(Direction::Left, &mut rng));
        assert_eq!(board, before);
    }

    fn single_corner() -> Grid {
        let mut grid = EMPTY_GRID;
        grid[0][0] = 8;
        grid
    }

    #[test]
    fn moved_board_gains_exactly_one_tile_over_resolution() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut board = board(single_corner());

        assert!(board.move_tiles(Direction::Down, &mut rng));

        assert_eq!(board.cell((3, 0)), 8);
        assert_eq!(board.tile_count(), 2);
        assert_eq!(board.empty_cells().len(), SIZE * SIZE - 2);
    }

    #[test]
    fn stuck_board_has_lost() {
        assert!(board(STUCK).has_lost());
        assert!(board(STUCK).legal_moves().next().is_none());
    }

    #[test]
    fn empty_cell_prevents_loss() {
        let mut grid = STUCK;
        grid[2][1] = 0;

        assert!(!board(grid).has_lost());
    }

    #[test]
    fn vertical_only_merge_prevents_loss() {
        let board = board([[2, 4, 2, 4], [2, 8, 16, 32], [64, 128, 256, 512], [1024, 4, 8, 16]]);
        assert!(!board.has_lost());
        assert!(board.can_move(Direction::Up));
        assert!(board.can_move(Direction::Down));
        assert!(!board.can_move(Direction::Left));
        assert!(!board.can_move(Direction::Right));
    }

    #[test]
    fn win_needs_the_exact_tile() {
        let mut grid = STUCK;
        grid[3][3] = 2048;
        assert!(board(grid).has_won());
        assert!(!board(STUCK).has_won());

        let small = Rules::new(64, 0.5).unwrap();
        let mut grid = EMPTY_GRID;
        grid[1][2] = 64;
        assert!(Board::from_grid(grid, 0, small).has_won());
        assert!(!board(grid).has_won());
    }

    #[test]
    fn score_saturates() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut board = Board::from_grid(single_row_pair(), u32::MAX - 1, Rules::default());

        assert!(board.move_tiles(Direction::Left, &mut rng));
        assert_eq!(board.score(), u32::MAX);
        assert_eq!(board.cell((0, 0)), 4);
    }

    fn single_row_pair() -> Grid {
        let mut grid = EMPTY_GRID;
        grid[0] = [2, 2, 0, 0];
        grid
    }

    #[test]
    fn display_uses_fixed_width_tokens() {
        let mut grid = EMPTY_GRID;
        grid[0] = [2, 0, 2048, 16];

        let text = board(grid).to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "    2    . 2048   16");
        assert_eq!(lines[1], "    .    .    .    .");
        assert_eq!(lines.len(), SIZE);
    }
}
