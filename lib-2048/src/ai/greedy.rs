use std::cmp::Reverse;

use core_2048::Direction;

use crate::board::Board;

use super::Ai;

/// Takes the move with the best immediate merge score, preferring moves that leave more empty
/// cells when scores tie.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAi;

impl Ai for GreedyAi {
    fn next_move(&mut self, board: &Board) -> Option<Direction> {
        // `min_by_key` keeps the first of equal keys, so ties go to the earliest direction.
        super::get_all_moves(board)
            .min_by_key(|&(_, score, empty_count)| Reverse((score, empty_count)))
            .map(|(direction, _, _)| direction)
    }
}
