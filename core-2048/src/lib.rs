pub mod direction;
pub mod metrics;
pub mod traversal;

pub use direction::Direction;
pub use traversal::lines_for;

/// Width and height of the board.
pub const SIZE: usize = 4;

/// Tile values indexed `[row][column]`, row 0 at the top. Empty cells are 0.
pub type Grid = [[u32; SIZE]; SIZE];

/// A `(row, column)` position on the grid.
pub type Coord = (usize, usize);

/// The cells that interact along one direction of travel.
///
/// Tiles travel towards the last index, so `line[SIZE - 1]` sits on the edge the tiles move
/// towards and `line[0]` on the opposite edge.
pub type Line = [Coord; SIZE];

pub const EMPTY_GRID: Grid = [[0; SIZE]; SIZE];

pub fn get(grid: &Grid, (row, column): Coord) -> u32 {
    grid[row][column]
}

pub fn set(grid: &mut Grid, (row, column): Coord, value: u32) {
    grid[row][column] = value;
}
