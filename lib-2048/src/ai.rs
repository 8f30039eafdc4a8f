use core_2048::{metrics, Direction};

use crate::{board::Board, logic};

pub mod greedy;
pub mod random;

pub trait Ai {
    /// Picks a direction that changes `board`, or `None` when no such direction exists.
    fn next_move(&mut self, board: &Board) -> Option<Direction>;
}

/// Every direction that changes `board`, with the merge score and empty cell count it leads to
/// before a tile is spawned.
fn get_all_moves(board: &Board) -> impl Iterator<Item = (Direction, u32, usize)> + '_ {
    Direction::iter().filter_map(move |direction| {
        let outcome = logic::resolve(*board.grid(), direction);

        outcome
            .moved
            .then(|| (direction, outcome.score, metrics::empty_count(&outcome.grid)))
    })
}
