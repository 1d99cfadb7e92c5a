//! Manifest selection rules.
//!
//! The interactive prompt is a two-state machine:
//!
//! ```text
//! AwaitingInput --(invalid)--> AwaitingInput
//! AwaitingInput --(valid k)--> Resolved(k - 1)
//! ```

use crate::domain::Manifest;

pub const NO_TEMPLATES_MESSAGE: &str = "No templates found.";
pub const INVALID_SELECTION_MESSAGE: &str = "Invalid selection. Try again.";

/// State of the interactive selection prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingInput,
    /// Zero-based index into the sorted manifest sequence.
    Resolved(usize),
}

impl SelectionState {
    /// Advance the machine with one line of input against a list of `count` entries.
    pub fn advance(self, raw: &str, count: usize) -> Self {
        match self {
            SelectionState::Resolved(_) => self,
            SelectionState::AwaitingInput => match parse_selection(raw, count) {
                Some(index) => SelectionState::Resolved(index),
                None => SelectionState::AwaitingInput,
            },
        }
    }
}

/// Prompt text shown for a list of `count` entries.
pub fn selection_prompt(count: usize) -> String {
    format!("Enter a template number [1..{count}]")
}

/// Parse a 1-based answer into a zero-based index.
///
/// The trimmed input must be all ASCII decimal digits and fall within `[1, count]`.
pub fn parse_selection(raw: &str, count: usize) -> Option<usize> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Digit strings too large for usize are out of range by definition.
    let value: usize = trimmed.parse().ok()?;
    (1..=count).contains(&value).then(|| value - 1)
}

/// First manifest whose id equals `id` exactly.
pub fn resolve_by_id<'a>(manifests: &'a [Manifest], id: &str) -> Option<&'a Manifest> {
    manifests.iter().find(|manifest| manifest.id == id)
}
