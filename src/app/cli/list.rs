use crate::app::api;
use crate::domain::AppError;
use crate::domain::selection::NO_TEMPLATES_MESSAGE;

pub fn run_list() -> Result<(), AppError> {
    let outcome = api::list()?;

    if outcome.is_empty() {
        println!("{}", NO_TEMPLATES_MESSAGE);
    } else {
        println!("{}", outcome.render());
    }
    Ok(())
}
