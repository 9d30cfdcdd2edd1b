mod board;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use game_state::{MoveOutcome, TicTacToeGameState};
pub use types::{FirstPlayerMode, Mark, MoveError, Position, Winner};
pub use win_detector::{WINNING_TRIPLES, check_win, find_winner, winning_triple};
