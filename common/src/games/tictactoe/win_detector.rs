use super::board::Board;
use super::types::Mark;

/// Rows, then columns, then the two diagonals, as board indices.
pub const WINNING_TRIPLES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_triple(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    if mark == Mark::Empty {
        return None;
    }
    WINNING_TRIPLES
        .iter()
        .copied()
        .find(|triple| triple.iter().all(|&index| board.get_index(index) == mark))
}

pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_triple(board, mark).is_some()
}

pub fn find_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| check_win(board, mark))
}
