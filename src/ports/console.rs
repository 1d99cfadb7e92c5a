use crate::domain::AppError;

/// Port for line-oriented user interaction.
pub trait Console {
    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Result<(), AppError>;

    /// Show `prompt` and read one line of input.
    ///
    /// Returns `Ok(None)` once the input stream is closed.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError>;
}
