use std::io::{self, BufRead, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

/// Input typed when stdin reaches end of file, so a closed stream quits the
/// game instead of reprompting forever.
pub const EOF_INPUT: &str = "quit";

/// The handful of terminal operations the game needs.
pub trait Console {
    /// Prints `prompt` without a newline and reads one line, without its line ending.
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;
    /// Prints `text` followed by a newline.
    fn print(&mut self, text: &str) -> io::Result<()>;
    fn clear_screen(&mut self) -> io::Result<()>;
    fn sleep(&mut self, duration: Duration);
}

pub struct TerminalConsole {
    clear_enabled: bool,
}

impl TerminalConsole {
    pub fn new(clear_enabled: bool) -> Self {
        Self { clear_enabled }
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(EOF_INPUT.to_string());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", text)?;
        stdout.flush()
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        if !self.clear_enabled {
            return Ok(());
        }
        execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
