//! Line-based territory selection from a terminal

use std::io::{self, BufRead, Write};

use crate::ui::{SelectionInput, SelectionRole};

/// Reads one integer per line from `input`, prompting on `prompt`
///
/// Blank lines are skipped. EOF or a line that is not an integer yields `None`.
#[derive(Debug)]
pub struct ConsoleInput<R: BufRead, W: Write> {
    input: R,
    prompt: W,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> SelectionInput for ConsoleInput<R, W> {
    fn read_selection(&mut self, role: SelectionRole, max: usize) -> io::Result<Option<i64>> {
        if role == SelectionRole::Attacker {
            writeln!(self.prompt, "\nEnter 0 to leave the game.")?;
        }
        let label = match role {
            SelectionRole::Attacker => "attacking",
            SelectionRole::Defender => "defending",
        };
        write!(self.prompt, "Id of the {} territory (1 to {}): ", label, max)?;
        self.prompt.flush()?;

        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.parse::<i64>().ok());
            }
        }
    }
}
