pub mod events;
pub mod labels;
pub mod picker;

use crate::error::{Error, Result};
use labels::LabelState;

pub use picker::TerminalPicker;

/// One candidate pre-rendered in each of its display states
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub active: String,
    pub inactive: String,
    pub selected: String,
}

/// Interactive single-choice prompt returning the chosen index
pub trait Picker {
    fn pick(&mut self, prompt: &str, choices: &[Choice]) -> Result<usize>;
}

/// Choose one of `candidates`.
///
/// A single candidate is returned without prompting and without rendering.
/// The picker's index is only used once it has returned successfully.
pub fn select<T, P, F>(
    prompt: &str,
    mut candidates: Vec<T>,
    picker: &mut P,
    render: F,
) -> Result<T>
where
    P: Picker + ?Sized,
    F: Fn(&T, LabelState) -> String,
{
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }
    if candidates.is_empty() {
        return Err(Error::OutOfRange { index: 0, len: 0 });
    }

    let choices: Vec<Choice> = candidates
        .iter()
        .map(|c| Choice {
            active: render(c, LabelState::Active),
            inactive: render(c, LabelState::Inactive),
            selected: render(c, LabelState::Selected),
        })
        .collect();

    let index = picker.pick(prompt, &choices)?;
    if index >= candidates.len() {
        return Err(Error::OutOfRange {
            index,
            len: candidates.len(),
        });
    }
    Ok(candidates.swap_remove(index))
}
