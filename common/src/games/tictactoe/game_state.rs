use crate::games::SessionRng;
use super::board::Board;
use super::types::{FirstPlayerMode, Mark, MoveError, Position, Winner};
use super::win_detector::check_win;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Mark },
    Won(Mark),
    Draw,
}

/// Turn order and result of one game on one board.
///
/// `winner` is only ever set together with `running` turning false on a win or
/// draw. A quit stops the game with `winner` left empty.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    first_player_mode: FirstPlayerMode,
    current_player: Mark,
    winner: Option<Winner>,
    running: bool,
}

impl TicTacToeGameState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        Self {
            board: Board::new(),
            first_player_mode,
            current_player: first_player_mode.select(rng),
            winner: None,
            running: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn winner(&self) -> Option<Winner> {
        self.winner
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_quit(&self) -> bool {
        !self.running && self.winner.is_none()
    }

    pub fn place_mark(&mut self, position: Position) -> Result<MoveOutcome, MoveError> {
        if !self.running {
            return Err(MoveError::GameOver);
        }

        if !self.board.update(position, self.current_player) {
            return Err(MoveError::Occupied(position));
        }

        Ok(self.update_game_state())
    }

    fn update_game_state(&mut self) -> MoveOutcome {
        if check_win(&self.board, self.current_player) {
            self.winner = Some(Winner::Player(self.current_player));
            self.running = false;
            return MoveOutcome::Won(self.current_player);
        }

        if self.board.is_full() {
            self.winner = Some(Winner::Draw);
            self.running = false;
            return MoveOutcome::Draw;
        }

        self.switch_turn();
        MoveOutcome::Continue {
            next: self.current_player,
        }
    }

    fn switch_turn(&mut self) {
        self.current_player = if self.current_player == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }

    pub fn quit(&mut self) {
        self.running = false;
        self.winner = None;
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.board.reset();
        self.winner = None;
        self.current_player = self.first_player_mode.select(rng);
        self.running = true;
    }
}
