//! Keyboard Shortcuts
//!
//! Maps global chords to actions on the records view.

use leptos_hotkeys::{KeyChord, KeyState};

/// Imperative surface the records view exposes to the filter panel
pub trait RecordsControl {
    /// Start (`true`) or stop (`false`) the active record
    fn toggle(&self, start: bool);
    /// Open the most recent record for editing
    fn edit_latest(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    StartRecord,
    StopRecord,
    EditLatest,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [Shortcut::StartRecord, Shortcut::StopRecord, Shortcut::EditLatest];

    pub fn chord(self) -> &'static str {
        match self {
            Shortcut::StartRecord => "ctrl+alt+s",
            Shortcut::StopRecord => "ctrl+alt+x",
            Shortcut::EditLatest => "ctrl+alt+e",
        }
    }

    pub fn from_key(state: &KeyState) -> Option<Shortcut> {
        Self::ALL.into_iter().find(|shortcut| {
            KeyChord::parse(shortcut.chord()).is_some_and(|chord| chord.matches(state))
        })
    }

    pub fn dispatch(self, control: &dyn RecordsControl) {
        match self {
            Shortcut::StartRecord => control.toggle(true),
            Shortcut::StopRecord => control.toggle(false),
            Shortcut::EditLatest => control.edit_latest(),
        }
    }
}

/// Run the shortcut for `state`, if any, against a mounted records view
pub fn handle_key(state: &KeyState, control: Option<&dyn RecordsControl>) -> Option<Shortcut> {
    let shortcut = Shortcut::from_key(state)?;
    let control = control?;
    log::debug!("shortcut {}", shortcut.chord());
    shortcut.dispatch(control);
    Some(shortcut)
}
