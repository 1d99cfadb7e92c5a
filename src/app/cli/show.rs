use crate::adapters::TerminalConsole;
use crate::app::api::{self, ShowOutcome};
use crate::domain::AppError;
use crate::domain::selection::NO_TEMPLATES_MESSAGE;

const DIVIDER_WIDTH: usize = 40;

pub fn run_show(id: Option<&str>) -> Result<(), AppError> {
    let mut console = TerminalConsole::new();

    match api::show(id, &mut console)? {
        ShowOutcome::NoTemplates => println!("{}", NO_TEMPLATES_MESSAGE),
        ShowOutcome::NotFound { id } => println!("Template with id '{}' not found.", id),
        ShowOutcome::Shown(fetched) => {
            let divider = "=".repeat(DIVIDER_WIDTH);
            println!("\n{divider}\nTemplate: {}\n{divider}\n", fetched.object_name);
            println!("{}", fetched.body);
        }
    }
    Ok(())
}
