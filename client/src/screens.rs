use common::games::tictactoe::{Board, Mark, Winner};

pub const TITLE: &str = "Tic-Tac-Toe";
pub const INVALID_MOVE: &str = "Invalid input.";
pub const INVALID_REPLAY_ANSWER: &str = "Invalid input. Please enter [Y/n].";
pub const REPLAY_PROMPT: &str = "Do you want to play again? [Y/n] ";
pub const START_PROMPT: &str = "\nPress Enter to start the game...";
pub const EXITING: &str = "Exiting the game.";
pub const FAREWELL: &str = "Thanks for playing!";

const RULE: &str = "\n-------------------------------------\n";

pub fn instructions() -> String {
    [
        "Welcome to Tic-Tac-Toe!",
        RULE,
        "Instructions:",
        "  1. The game is played on a 3x3 grid.",
        "  2. Players take turns placing their mark (X or O) in an empty cell.",
        "  3. The first player to get 3 marks in a row wins.",
        "  4. If all cells are filled, the game is a draw.",
        "  5. Enter 'quit' or 'q' at any time to quit the game.",
        RULE,
        "The board positions are numbered as follows:\n",
        " 1 | 2 | 3 ",
        "-----------",
        " 4 | 5 | 6 ",
        "-----------",
        " 7 | 8 | 9 ",
    ]
    .join("\n")
}

/// Everything shown between two screen clears while a game is on.
pub fn board_frame(board: &Board) -> String {
    format!("{}\n\n{}\n\n", TITLE, board)
}

pub fn move_prompt(player: Mark) -> String {
    format!("Player {}, enter your move (1-9): ", player)
}

pub fn result_message(winner: Winner) -> String {
    match winner {
        Winner::Draw => "The game is a draw!".to_string(),
        Winner::Player(mark) => format!("Player {} wins!", mark),
    }
}

/// `Exiting the game.` with `frame` extra dots.
pub fn exiting_frame(frame: usize) -> String {
    format!("{}{}", EXITING, ".".repeat(frame))
}
