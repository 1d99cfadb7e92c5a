//! Interactive manifest selection.

use crate::domain::selection::{INVALID_SELECTION_MESSAGE, NO_TEMPLATES_MESSAGE, selection_prompt};
use crate::domain::{AppError, Manifest, SelectionState, format_manifest_list};
use crate::ports::Console;

/// Show the listing and prompt until a valid number is entered.
///
/// Returns `None` only for an empty list, in which case no prompt is shown. There is no
/// retry limit; a closed input stream ends the loop with `AppError::InputClosed`.
pub fn resolve_interactive(
    manifests: &[Manifest],
    console: &mut impl Console,
) -> Result<Option<Manifest>, AppError> {
    if manifests.is_empty() {
        console.write_line(NO_TEMPLATES_MESSAGE)?;
        return Ok(None);
    }

    console.write_line(&format_manifest_list(manifests))?;
    let prompt = selection_prompt(manifests.len());
    let mut state = SelectionState::AwaitingInput;

    loop {
        if let SelectionState::Resolved(index) = state {
            return Ok(manifests.get(index).cloned());
        }

        let raw = console.read_line(&prompt)?.ok_or(AppError::InputClosed)?;
        state = state.advance(&raw, manifests.len());
        if state == SelectionState::AwaitingInput {
            console.write_line(INVALID_SELECTION_MESSAGE)?;
        }
    }
}
