use std::io::{self, Write};

use lib_2048::{Board, SIZE};

const TOP_ROW: &str = "┏━━━━━━━┳━━━━━━━┳━━━━━━━┳━━━━━━━┓";
const SEPERATOR_ROW: &str = "┣━━━━━━━╋━━━━━━━╋━━━━━━━╋━━━━━━━┫";
const BOTTOM_ROW: &str = "┗━━━━━━━┻━━━━━━━┻━━━━━━━┻━━━━━━━┛";
const COLOUR_TABLE: [u8; 7] = [90, 33, 31, 32, 33, 36, 35];

fn colour(cell: u32) -> u8 {
    // Tiles are powers of two from 2, so the exponent minus one indexes the table.
    let index = cell.trailing_zeros().saturating_sub(1) as usize;

    COLOUR_TABLE[index % COLOUR_TABLE.len()]
}

fn draw_board_row(out: &mut impl Write, row: &[u32; SIZE], use_colour: bool) -> io::Result<()> {
    for &cell in row {
        match cell {
            0 => write!(out, "┃       ")?,
            _ if use_colour => write!(out, "┃\x1b[7m\x1b[{}m{cell:^7}\x1b[m", colour(cell))?,
            _ => write!(out, "┃{cell:^7}")?,
        }
    }

    writeln!(out, "┃")
}

/// Draws `board` as a boxed grid, headed by its score.
pub fn draw_board(out: &mut impl Write, board: &Board, use_colour: bool) -> io::Result<()> {
    writeln!(out, "Score: {}", board.score())?;
    writeln!(out, "{TOP_ROW}")?;

    for (i, row) in board.grid().iter().enumerate() {
        if i != 0 {
            writeln!(out, "{SEPERATOR_ROW}")?;
        }

        draw_board_row(out, row, use_colour)?;
    }

    writeln!(out, "{BOTTOM_ROW}")?;
    out.flush()
}
