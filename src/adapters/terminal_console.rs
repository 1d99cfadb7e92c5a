//! Console adapter for the process terminal.

use std::io::{self, BufRead, ErrorKind, IsTerminal, Write};

use dialoguer::{Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::Console;

/// Reads answers through `dialoguer` on a terminal and line by line from piped stdin.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        if io::stdin().is_terminal() {
            return match Input::<String>::new().with_prompt(prompt).allow_empty(true).interact_text()
            {
                Ok(value) => Ok(Some(value)),
                Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::UnexpectedEof => Ok(None),
                Err(DialoguerError::IO(err)) => Err(AppError::Io(err)),
            };
        }

        let mut stdout = io::stdout().lock();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;
        drop(stdout);

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
