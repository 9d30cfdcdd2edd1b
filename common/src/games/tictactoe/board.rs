use std::fmt;

use super::types::{Mark, Position};

pub const CELL_COUNT: usize = 9;

/// The 3x3 grid. It knows nothing about players or turns: a cell goes from
/// empty to marked through [`Board::update`] and only [`Board::reset`] clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
    round: u8,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
            round: 1,
        }
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
        self.round = 1;
    }

    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.index()]
    }

    /// Panics when `index` is not below [`CELL_COUNT`].
    pub fn get_index(&self, index: usize) -> Mark {
        assert!(index < CELL_COUNT, "board index {} out of range", index);
        self.cells[index]
    }

    /// Marks an empty cell and advances the round. Returns `false` and leaves
    /// the board untouched when the cell is already marked.
    pub fn update(&mut self, position: Position, mark: Mark) -> bool {
        debug_assert!(mark != Mark::Empty, "cells are only cleared by reset");
        let cell = &mut self.cells[position.index()];
        if *cell != Mark::Empty {
            return false;
        }
        *cell = mark;
        self.round += 1;
        true
    }

    /// 1-based: the number of moves made so far plus one.
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn is_full(&self) -> bool {
        usize::from(self.round) == CELL_COUNT + 1
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn available_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|&position| self.get(position) == Mark::Empty)
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(3).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
            write!(f, " {} | {} | {} ", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
