use crate::Grid;

fn cells(grid: &Grid) -> impl Iterator<Item = u32> + '_ {
    grid.iter().flatten().copied()
}

pub fn empty_count(grid: &Grid) -> usize {
    cells(grid).filter(|&cell| cell == 0).count()
}

pub fn tile_count(grid: &Grid) -> usize {
    cells(grid).filter(|&cell| cell != 0).count()
}

pub fn max_tile(grid: &Grid) -> u32 {
    cells(grid).max().unwrap_or(0)
}

/// Whether `value` can appear in a cell: 0 for empty, otherwise a power of two of at least 2.
pub const fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_split_the_grid() {
        let grid = [[0, 2, 0, 4], [8, 0, 0, 0], [0, 0, 0, 0], [2048, 0, 0, 16]];

        assert_eq!(tile_count(&grid), 5);
        assert_eq!(empty_count(&grid), 11);
        assert_eq!(max_tile(&grid), 2048);
    }

    #[test]
    fn tile_values() {
        assert!(is_tile_value(0));
        assert!(is_tile_value(2));
        assert!(is_tile_value(65536));
        assert!(!is_tile_value(1));
        assert!(!is_tile_value(6));
    }
}
