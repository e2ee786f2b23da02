use std::fmt;

use crate::session::SessionResult;

/// Actions offered by the form menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Translate,
    ReadAloud,
    Download,
    ChangeLanguages,
    ToggleDebug,
    Clear,
    Quit,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Translate => "Translate",
            Self::ReadAloud => "Read aloud",
            Self::Download => "Download MP3",
            Self::ChangeLanguages => "Change languages",
            Self::ToggleDebug => "Toggle debug",
            Self::Clear => "Clear result",
            Self::Quit => "Quit",
        };
        f.write_str(label)
    }
}

/// Returns the actions available for the current state, in menu order.
///
/// Read aloud and clear need a committed translation; download needs audio.
pub fn available_actions(state: &SessionResult) -> Vec<FormAction> {
    let mut actions = vec![FormAction::Translate];

    if state.has_translation() {
        actions.push(FormAction::ReadAloud);
    }
    if state.has_audio() {
        actions.push(FormAction::Download);
    }

    actions.push(FormAction::ChangeLanguages);
    actions.push(FormAction::ToggleDebug);

    if state.has_translation() {
        actions.push(FormAction::Clear);
    }

    actions.push(FormAction::Quit);
    actions
}
