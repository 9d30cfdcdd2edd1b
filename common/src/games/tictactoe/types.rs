use std::fmt;

use crate::games::SessionRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => ' ',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A board cell numbered 1 to 9, left to right and top to bottom:
///
/// ```text
///  1 | 2 | 3
///  4 | 5 | 6
///  7 | 8 | 9
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position(u8);

impl Position {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Self(number))
    }

    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|number| u8::try_from(number).ok())
            .and_then(Self::new)
    }

    /// Parses player input. Only plain decimal digits are accepted.
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoveError::NotANumber(trimmed.to_string()));
        }

        // Digit strings too long for u64 are still just out of range.
        let number = trimmed.parse::<u64>().unwrap_or(u64::MAX);
        u8::try_from(number)
            .ok()
            .and_then(Self::new)
            .ok_or(MoveError::OutOfRange(number))
    }

    pub fn number(&self) -> u8 {
        self.0
    }

    pub fn index(&self) -> usize {
        usize::from(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (Self::MIN..=Self::MAX).map(Position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who moves first in each game of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirstPlayerMode {
    /// Fair coin flip per game.
    Random,
    Fixed(Mark),
}

impl FirstPlayerMode {
    pub fn select(&self, rng: &mut SessionRng) -> Mark {
        match self {
            FirstPlayerMode::Fixed(mark) if *mark != Mark::Empty => *mark,
            // Fixed(Empty) names nobody, so it falls back to the coin.
            _ => {
                if rng.random_bool() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    Player(Mark),
    Draw,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Player(mark) => write!(f, "{}", mark),
            Winner::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    NotANumber(String),
    OutOfRange(u64),
    Occupied(Position),
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotANumber(input) => write!(f, "'{}' is not a cell number", input),
            MoveError::OutOfRange(number) => {
                write!(f, "Cell {} is outside {}-{}", number, Position::MIN, Position::MAX)
            }
            MoveError::Occupied(position) => write!(f, "Cell {} is already marked", position),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
