use core_2048::Direction;
use rand::{seq::IteratorRandom, Rng};

use crate::board::Board;

use super::Ai;

pub struct RandomAi<R> {
    rng: R,
}

impl<R> Ai for RandomAi<R>
where
    R: Rng,
{
    fn next_move(&mut self, board: &Board) -> Option<Direction> {
        board.legal_moves().choose(&mut self.rng)
    }
}

impl<R> RandomAi<R>
where
    R: Rng,
{
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}
