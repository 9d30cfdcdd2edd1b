use std::io;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{FirstPlayerMode, MoveOutcome, Position, TicTacToeGameState, Winner};
use common::log;

use crate::config::Config;
use crate::console::Console;
use crate::screens;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    pub show_instructions: bool,
    pub first_player_mode: FirstPlayerMode,
    pub exit_frames: u32,
    pub exit_frame_delay: Duration,
}

impl From<&Config> for ControllerSettings {
    fn from(config: &Config) -> Self {
        Self {
            show_instructions: config.display.show_instructions,
            first_player_mode: config.first_player.into(),
            exit_frames: config.exit_animation.frames,
            exit_frame_delay: config.exit_animation.frame_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Games that ended in a win or a draw.
    pub games_played: u32,
    pub last_winner: Option<Winner>,
    pub quit: bool,
}

enum ReplayAnswer {
    Yes,
    No,
    Quit,
}

fn is_quit_command(input: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit")
}

fn parse_replay_answer(input: &str) -> Option<ReplayAnswer> {
    if is_quit_command(input) {
        return Some(ReplayAnswer::Quit);
    }
    match input.trim().to_ascii_lowercase().as_str() {
        "" | "y" => Some(ReplayAnswer::Yes),
        "n" => Some(ReplayAnswer::No),
        _ => None,
    }
}

/// Drives games on one board until a player quits or declines a rematch.
pub struct GameController<C: Console> {
    console: C,
    state: TicTacToeGameState,
    rng: SessionRng,
    settings: ControllerSettings,
    games_played: u32,
    last_winner: Option<Winner>,
}

impl<C: Console> GameController<C> {
    pub fn new(console: C, settings: ControllerSettings, mut rng: SessionRng) -> Self {
        let state = TicTacToeGameState::new(settings.first_player_mode, &mut rng);
        Self {
            console,
            state,
            rng,
            settings,
            games_played: 0,
            last_winner: None,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn run(&mut self) -> io::Result<RunSummary> {
        self.console.clear_screen()?;
        if self.settings.show_instructions {
            self.console.print(&screens::instructions())?;
            self.console.read_line(screens::START_PROMPT)?;
        }

        log!(
            "Game {} started, seed {}, {} moves first",
            self.games_played + 1,
            self.rng.seed(),
            self.state.current_player()
        );
        self.draw_board()?;

        loop {
            while self.state.is_running() {
                self.play_turn()?;
                self.draw_board()?;
            }

            let Some(winner) = self.state.winner() else {
                break;
            };
            self.games_played += 1;
            self.last_winner = Some(winner);
            log!("Game {} over, winner: {}", self.games_played, winner);
            self.console.print(&screens::result_message(winner))?;

            if !self.play_again()? {
                break;
            }
        }

        self.console.clear_screen()?;
        Ok(RunSummary {
            games_played: self.games_played,
            last_winner: self.last_winner,
            quit: self.state.is_quit(),
        })
    }

    fn draw_board(&mut self) -> io::Result<()> {
        self.console.clear_screen()?;
        self.console.print(&screens::board_frame(self.state.board()))
    }

    /// Reads input until one move is applied or the player quits.
    fn play_turn(&mut self) -> io::Result<()> {
        loop {
            let player = self.state.current_player();
            let input = self.console.read_line(&screens::move_prompt(player))?;

            if is_quit_command(&input) {
                log!("Player {} quit", player);
                return self.quit();
            }

            match Position::parse(&input).and_then(|position| {
                self.state.place_mark(position).map(|outcome| (position, outcome))
            }) {
                Ok((position, outcome)) => {
                    log!("Player {} marked {}", player, position);
                    if let MoveOutcome::Continue { next } = outcome {
                        log!("Next turn: {}", next);
                    }
                    return Ok(());
                }
                Err(err) => {
                    log!("Rejected move from {}: {}", player, err);
                    self.console.print(screens::INVALID_MOVE)?;
                }
            }
        }
    }

    fn play_again(&mut self) -> io::Result<bool> {
        loop {
            let input = self.console.read_line(screens::REPLAY_PROMPT)?;
            match parse_replay_answer(&input) {
                Some(ReplayAnswer::Yes) => {
                    self.state.reset(&mut self.rng);
                    log!(
                        "Game {} started, {} moves first",
                        self.games_played + 1,
                        self.state.current_player()
                    );
                    self.draw_board()?;
                    return Ok(true);
                }
                Some(ReplayAnswer::No) => {
                    log!("Rematch declined");
                    return Ok(false);
                }
                Some(ReplayAnswer::Quit) => {
                    log!("Quit at rematch prompt");
                    self.quit()?;
                    return Ok(false);
                }
                None => self.console.print(screens::INVALID_REPLAY_ANSWER)?,
            }
        }
    }

    fn quit(&mut self) -> io::Result<()> {
        self.console.print(screens::EXITING)?;
        for frame in 0..self.settings.exit_frames as usize {
            self.draw_board()?;
            self.console.print(screens::FAREWELL)?;
            self.console.print(&screens::exiting_frame(frame))?;
            self.console.sleep(self.settings.exit_frame_delay);
        }
        self.state.quit();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::testing::{Event, ScriptedConsole};
    use common::games::tictactoe::Mark;
    use common::logger::{LogSink, init_logger};

    fn settings(first: Mark) -> ControllerSettings {
        ControllerSettings {
            show_instructions: false,
            first_player_mode: FirstPlayerMode::Fixed(first),
            exit_frames: 3,
            exit_frame_delay: Duration::from_millis(500),
        }
    }

    fn run_script(first: Mark, inputs: &[&str]) -> (GameController<ScriptedConsole>, RunSummary) {
        let _ = init_logger(None, LogSink::Disabled);
        let console = ScriptedConsole::new(inputs);
        let mut controller = GameController::new(console, settings(first), SessionRng::new(1));
        let summary = controller.run().unwrap();
        (controller, summary)
    }

    #[test]
    fn test_settings_from_config() {
        let mut config = Config::default();
        config.first_player = crate::config::FirstPlayerConfig::O;
        config.display.show_instructions = false;
        config.exit_animation.frames = 5;
        config.exit_animation.frame_delay_ms = 0;

        let settings = ControllerSettings::from(&config);
        assert_eq!(settings.first_player_mode, FirstPlayerMode::Fixed(Mark::O));
        assert!(!settings.show_instructions);
        assert_eq!(settings.exit_frames, 5);
        assert_eq!(settings.exit_frame_delay, Duration::ZERO);
    }

    #[test]
    fn test_quit_command_matching() {
        for input in ["q", "Q", "quit", "QUIT", "Quit", " q "] {
            assert!(is_quit_command(input), "{}", input);
        }
        for input in ["", "qu", "exit", "1"] {
            assert!(!is_quit_command(input), "{}", input);
        }
    }

    #[test]
    fn test_replay_answer_parsing() {
        assert!(matches!(parse_replay_answer(""), Some(ReplayAnswer::Yes)));
        assert!(matches!(parse_replay_answer("Y"), Some(ReplayAnswer::Yes)));
        assert!(matches!(parse_replay_answer("n"), Some(ReplayAnswer::No)));
        assert!(matches!(parse_replay_answer("N"), Some(ReplayAnswer::No)));
        assert!(matches!(parse_replay_answer("quit"), Some(ReplayAnswer::Quit)));
        assert!(parse_replay_answer("yes").is_none());
        assert!(parse_replay_answer("maybe").is_none());
    }

    #[test]
    fn test_diagonal_win_for_x() {
        let (controller, summary) = run_script(Mark::X, &["1", "2", "5", "4", "9", "n"]);

        let state = controller.state();
        assert_eq!(state.winner(), Some(Winner::Player(Mark::X)));
        assert!(!state.is_running());
        assert_eq!(controller.console().count_output("Player X wins!"), 1);
        assert_eq!(
            summary,
            RunSummary {
                games_played: 1,
                last_winner: Some(Winner::Player(Mark::X)),
                quit: false,
            }
        );
        assert_eq!(controller.console().remaining_inputs(), 0);
    }

    #[test]
    fn test_draw_game() {
        // X: 1 2 6 7 8, O: 3 4 5 9
        let (controller, summary) =
            run_script(Mark::X, &["1", "3", "2", "4", "6", "5", "7", "9", "8", "n"]);

        assert_eq!(controller.state().winner(), Some(Winner::Draw));
        assert_eq!(controller.console().count_output("The game is a draw!"), 1);
        assert_eq!(summary.last_winner, Some(Winner::Draw));
        assert!(controller.state().board().is_full());
    }

    #[test]
    fn test_quit_during_move_ends_without_result() {
        let (controller, summary) = run_script(Mark::O, &["5", "quit"]);

        let state = controller.state();
        assert!(!state.is_running());
        assert_eq!(state.winner(), None);
        assert!(summary.quit);
        assert_eq!(summary.games_played, 0);

        let console = controller.console();
        assert_eq!(console.count_output("The game is a draw!"), 0);
        assert!(!console.outputs().iter().any(|line| line.ends_with("wins!")));
        assert!(!console.prompts().contains(&screens::REPLAY_PROMPT));
    }

    #[test]
    fn test_quit_animation_frames() {
        let (controller, _) = run_script(Mark::X, &["Q"]);
        let console = controller.console();

        assert_eq!(console.count_output(screens::FAREWELL), 3);
        assert_eq!(console.count_output("Exiting the game."), 2);
        assert_eq!(console.count_output("Exiting the game.."), 1);
        assert_eq!(console.count_output("Exiting the game..."), 1);
        assert_eq!(console.sleeps(), vec![Duration::from_millis(500); 3]);
        assert_eq!(console.events.last(), Some(&Event::Clear));
    }

    #[test]
    fn test_invalid_moves_are_reprompted() {
        let (controller, _) = run_script(
            Mark::X,
            &["abc", "0", "10", "", "5", "5", "1", "q"],
        );
        let console = controller.console();

        assert_eq!(console.count_output(screens::INVALID_MOVE), 5);
        let board = controller.state().board();
        assert_eq!(board.get(Position::new(5).unwrap()), Mark::X);
        assert_eq!(board.get(Position::new(1).unwrap()), Mark::O);
        assert_eq!(board.round(), 3);
    }

    #[test]
    fn test_rejected_move_keeps_the_same_player() {
        let (controller, _) = run_script(Mark::X, &["5", "5", "q"]);
        let prompts = controller.console().prompts();
        assert_eq!(
            prompts,
            vec![
                "Player X, enter your move (1-9): ",
                "Player O, enter your move (1-9): ",
                "Player O, enter your move (1-9): ",
            ]
        );
    }

    #[test]
    fn test_turns_alternate_from_fixed_first_player() {
        let (controller, _) = run_script(Mark::O, &["1", "2", "3", "quit"]);
        let prompts = controller.console().prompts();
        assert_eq!(prompts[0], "Player O, enter your move (1-9): ");
        assert_eq!(prompts[1], "Player X, enter your move (1-9): ");
        assert_eq!(prompts[2], "Player O, enter your move (1-9): ");
        assert_eq!(prompts[3], "Player X, enter your move (1-9): ");
    }

    #[test]
    fn test_replay_resets_board() {
        let (controller, summary) = run_script(
            Mark::X,
            &["1", "2", "5", "4", "9", "", "7", "q"],
        );

        assert_eq!(summary.games_played, 1);
        assert!(summary.quit);
        let board = controller.state().board();
        assert_eq!(board.round(), 2);
        assert_eq!(board.get(Position::new(7).unwrap()), Mark::X);
        assert_eq!(board.get(Position::new(1).unwrap()), Mark::Empty);
    }

    #[test]
    fn test_two_games_then_decline() {
        let (controller, summary) = run_script(
            Mark::O,
            &["1", "4", "2", "5", "3", "y", "1", "3", "2", "4", "6", "5", "7", "9", "8", "N"],
        );

        assert_eq!(summary.games_played, 2);
        assert_eq!(summary.last_winner, Some(Winner::Draw));
        assert!(!summary.quit);
        let console = controller.console();
        assert_eq!(console.count_output("Player O wins!"), 1);
        assert_eq!(console.count_output("The game is a draw!"), 1);
    }

    #[test]
    fn test_invalid_replay_answer_is_reprompted() {
        let (controller, _) = run_script(Mark::X, &["1", "2", "5", "4", "9", "maybe", "n"]);
        let console = controller.console();
        assert_eq!(console.count_output(screens::INVALID_REPLAY_ANSWER), 1);
        let replay_prompts = console
            .prompts()
            .iter()
            .filter(|&&prompt| prompt == screens::REPLAY_PROMPT)
            .count();
        assert_eq!(replay_prompts, 2);
    }

    #[test]
    fn test_quit_at_replay_prompt_clears_winner() {
        let (controller, summary) = run_script(Mark::X, &["1", "2", "5", "4", "9", "q"]);
        assert!(summary.quit);
        assert_eq!(summary.games_played, 1);
        assert_eq!(summary.last_winner, Some(Winner::Player(Mark::X)));
        assert_eq!(controller.state().winner(), None);
        assert_eq!(controller.console().count_output(screens::FAREWELL), 3);
    }

    #[test]
    fn test_closed_input_quits() {
        let (_, summary) = run_script(Mark::X, &["5"]);
        assert!(summary.quit);
    }

    #[test]
    fn test_instructions_shown_once_before_first_board() {
        let _ = init_logger(None, LogSink::Disabled);
        let console = ScriptedConsole::new(&["", "q"]);
        let settings = ControllerSettings {
            show_instructions: true,
            ..settings(Mark::X)
        };
        let mut controller = GameController::new(console, settings, SessionRng::new(1));
        controller.run().unwrap();

        let events = &controller.console().events;
        assert_eq!(events[0], Event::Clear);
        assert_eq!(events[1], Event::Output(screens::instructions()));
        assert_eq!(events[2], Event::Prompt(screens::START_PROMPT.to_string()));
        assert_eq!(events[3], Event::Clear);
        assert!(matches!(&events[4], Event::Output(frame) if frame.starts_with(screens::TITLE)));
        assert_eq!(controller.console().count_output(&screens::instructions()), 1);
    }

    #[test]
    fn test_random_first_player_is_reproducible_from_seed() {
        let _ = init_logger(None, LogSink::Disabled);
        let random_settings = ControllerSettings {
            first_player_mode: FirstPlayerMode::Random,
            ..settings(Mark::X)
        };
        let first = |seed: u64| {
            GameController::new(ScriptedConsole::new(&[]), random_settings.clone(), SessionRng::new(seed))
                .state()
                .current_player()
        };
        for seed in 0..16 {
            assert_eq!(first(seed), first(seed));
        }
    }
}
