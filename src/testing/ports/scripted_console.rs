use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::Console;

/// Console that replays canned answers and records everything shown.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Reads past the last answer behave like a closed stream.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn output(&self) -> &[String] {
        &self.output
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> Result<(), AppError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}
