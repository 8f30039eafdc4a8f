use core_2048::{lines_for, Coord, Direction, Grid, Line, SIZE};
use rand::{seq::SliceRandom, Rng};

use crate::rules::Rules;

/// The result of sliding and merging a grid, before any tile is spawned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// Sum of the tiles produced by merges.
    pub score: u32,
    pub moved: bool,
}

/// Closes the gaps in `line`, pushing tiles towards its last index. Returns whether any tile
/// moved.
pub fn shift_line(grid: &mut Grid, line: &Line) -> bool {
    let mut moved = false;

    loop {
        let mut swapped = false;

        for i in 1..SIZE {
            let (from, to) = (line[i - 1], line[i]);

            if core_2048::get(grid, to) == 0 && core_2048::get(grid, from) != 0 {
                core_2048::set(grid, to, core_2048::get(grid, from));
                core_2048::set(grid, from, 0);
                swapped = true;
            }
        }

        if !swapped {
            break moved;
        }

        moved = true;
    }
}

/// Merges equal neighbours in an already shifted `line`, returning the score gained.
///
/// The scan runs from the destination edge backwards so the tile nearest the edge merges first
/// and no tile merges twice.
pub fn merge_line(grid: &mut Grid, line: &Line) -> u32 {
    let mut score = 0;

    for i in (1..SIZE).rev() {
        let (inner, outer) = (line[i - 1], line[i]);
        let cell = core_2048::get(grid, outer);

        if cell == 0 || cell != core_2048::get(grid, inner) {
            continue;
        }

        // A tile that cannot be doubled without overflowing stays put.
        if let Some(merged) = cell.checked_mul(2) {
            core_2048::set(grid, outer, merged);
            core_2048::set(grid, inner, 0);
            score = u32::saturating_add(score, merged);
        }
    }

    score
}

fn shift_lines(grid: &mut Grid, lines: &[Line; SIZE]) -> bool {
    lines
        .iter()
        .fold(false, |moved, line| shift_line(grid, line) | moved)
}

/// Slides and merges every line of `grid` in `direction`: shift, merge, then shift again to close
/// the gaps the merges opened.
pub fn resolve(mut grid: Grid, direction: Direction) -> MoveOutcome {
    let lines = lines_for(direction);

    let shifted = shift_lines(&mut grid, lines);
    let score = lines
        .iter()
        .fold(0, |score, line| u32::saturating_add(score, merge_line(&mut grid, line)));
    let compacted = shift_lines(&mut grid, lines);

    MoveOutcome {
        grid,
        score,
        moved: shifted || score > 0 || compacted,
    }
}

/// Whether any line in `direction` holds two equal adjacent tiles.
pub fn has_merge(grid: &Grid, direction: Direction) -> bool {
    lines_for(direction).iter().any(|line| {
        (1..SIZE).rev().any(|i| {
            let cell = core_2048::get(grid, line[i]);

            cell != 0 && cell == core_2048::get(grid, line[i - 1])
        })
    })
}

pub fn empty_cells(grid: &Grid) -> Vec<Coord> {
    (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |column| (row, column)))
        .filter(|&coord| core_2048::get(grid, coord) == 0)
        .collect()
}

/// Places a 2 or 4 on a uniformly chosen empty cell. Does nothing on a full grid.
pub fn spawn_tile(grid: &mut Grid, rules: &Rules, rng: &mut impl Rng) -> Option<(Coord, u32)> {
    let &coord = empty_cells(grid).choose(rng)?;
    let value = if rng.gen_bool(rules.four_probability()) { 4 } else { 2 };

    core_2048::set(grid, coord, value);

    Some((coord, value))
}
