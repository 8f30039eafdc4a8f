use crate::{Direction, Line, SIZE};

const fn row(row: usize) -> Line {
    let mut line = [(0, 0); SIZE];
    let mut column = 0;

    while column < SIZE {
        line[column] = (row, column);
        column += 1;
    }

    line
}

const fn column(column: usize) -> Line {
    let mut line = [(0, 0); SIZE];
    let mut row = 0;

    while row < SIZE {
        line[row] = (row, column);
        row += 1;
    }

    line
}

const fn reversed(line: Line) -> Line {
    let mut reversed = line;
    let mut i = 0;

    while i < SIZE {
        reversed[i] = line[SIZE - 1 - i];
        i += 1;
    }

    reversed
}

const fn build_lines(direction: Direction) -> [Line; SIZE] {
    let mut lines = [[(0, 0); SIZE]; SIZE];
    let mut i = 0;

    while i < SIZE {
        // Up and Left travel against the natural order, so their lines are reversed to keep the
        // destination edge at the last index.
        lines[i] = match direction {
            Direction::Up => reversed(column(i)),
            Direction::Down => column(i),
            Direction::Right => row(i),
            Direction::Left => reversed(row(i)),
        };
        i += 1;
    }

    lines
}

static UP_LINES: [Line; SIZE] = build_lines(Direction::Up);
static DOWN_LINES: [Line; SIZE] = build_lines(Direction::Down);
static RIGHT_LINES: [Line; SIZE] = build_lines(Direction::Right);
static LEFT_LINES: [Line; SIZE] = build_lines(Direction::Left);

/// Returns the lines that a move in `direction` resolves independently.
///
/// Columns for `Up`/`Down`, rows for `Left`/`Right`. Together the lines cover every cell exactly
/// once.
pub fn lines_for(direction: Direction) -> &'static [Line; SIZE] {
    match direction {
        Direction::Up => &UP_LINES,
        Direction::Down => &DOWN_LINES,
        Direction::Right => &RIGHT_LINES,
        Direction::Left => &LEFT_LINES,
    }
}
