//! Leptos Hotkey Utilities
//!
//! Document-wide keyboard chords for Leptos components.
//! The listener is owned by a guard and removed from the same target it was
//! added to, either when the guard drops or when the owning component unmounts.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Snapshot of a keyboard event
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyState {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl From<&web_sys::KeyboardEvent> for KeyState {
    fn from(ev: &web_sys::KeyboardEvent) -> Self {
        Self {
            key: ev.key(),
            ctrl: ev.ctrl_key(),
            alt: ev.alt_key(),
            shift: ev.shift_key(),
            meta: ev.meta_key(),
        }
    }
}

/// A key plus required modifiers, e.g. `ctrl+alt+s`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyChord {
    key: String,
    ctrl: bool,
    alt: bool,
    shift: bool,
    meta: bool,
}

impl KeyChord {
    /// Parse a `+`-separated chord. Exactly one non-modifier key is allowed.
    pub fn parse(chord: &str) -> Option<Self> {
        let mut parsed = KeyChord {
            key: String::new(),
            ctrl: false,
            alt: false,
            shift: false,
            meta: false,
        };
        for part in chord.split('+') {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "" => return None,
                "ctrl" | "control" => parsed.ctrl = true,
                "alt" | "option" => parsed.alt = true,
                "shift" => parsed.shift = true,
                "meta" | "cmd" | "super" => parsed.meta = true,
                _ => {
                    if !parsed.key.is_empty() {
                        return None;
                    }
                    parsed.key = part;
                }
            }
        }
        if parsed.key.is_empty() {
            None
        } else {
            Some(parsed)
        }
    }

    /// Ctrl and Alt must match exactly; Shift and Meta only when required.
    /// Keys compare case-insensitively.
    pub fn matches(&self, state: &KeyState) -> bool {
        state.ctrl == self.ctrl
            && state.alt == self.alt
            && (!self.shift || state.shift)
            && (!self.meta || state.meta)
            && state.key.to_lowercase() == self.key
    }
}

/// A document `keyup` listener, removed on drop
pub struct DocumentListener {
    target: web_sys::EventTarget,
    callback: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl Drop for DocumentListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keyup", self.callback.as_ref().unchecked_ref());
    }
}

/// Attach `handler` to the document's `keyup` events.
/// Returns None when there is no document (e.g. outside a browser).
pub fn bind_document_keyup<F>(mut handler: F) -> Option<DocumentListener>
where
    F: FnMut(KeyState) + 'static,
{
    let doc = web_sys::window()?.document()?;
    let target: web_sys::EventTarget = doc.into();

    let callback = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        handler(KeyState::from(&ev));
    });
    target
        .add_event_listener_with_callback("keyup", callback.as_ref().unchecked_ref())
        .ok()?;

    Some(DocumentListener { target, callback })
}

/// Bind a document `keyup` handler for the lifetime of the current component
pub fn use_document_keyup<F>(handler: F)
where
    F: FnMut(KeyState) + 'static,
{
    let listener = StoredValue::new_local(bind_document_keyup(handler));
    on_cleanup(move || {
        listener.try_update_value(|l| l.take());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: &str, ctrl: bool, alt: bool) -> KeyState {
        KeyState {
            key: key.to_string(),
            ctrl,
            alt,
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_chord() {
        let chord = KeyChord::parse("Ctrl+Alt+S").unwrap();
        assert!(chord.ctrl && chord.alt && !chord.shift);
        assert_eq!(chord.key, "s");

        assert!(KeyChord::parse("ctrl+alt").is_none());
        assert!(KeyChord::parse("ctrl+a+b").is_none());
        assert!(KeyChord::parse("ctrl++s").is_none());
        assert!(KeyChord::parse("").is_none());
    }

    #[test]
    fn test_matches_requires_modifiers() {
        let chord = KeyChord::parse("ctrl+alt+s").unwrap();
        assert!(chord.matches(&key("s", true, true)));
        assert!(chord.matches(&key("S", true, true)));
        assert!(!chord.matches(&key("s", false, false)));
        assert!(!chord.matches(&key("s", true, false)));
        assert!(!chord.matches(&key("x", true, true)));
    }

    #[test]
    fn test_extra_shift_is_tolerated() {
        let chord = KeyChord::parse("ctrl+alt+e").unwrap();
        let mut state = key("E", true, true);
        state.shift = true;
        assert!(chord.matches(&state));

        let shifted = KeyChord::parse("ctrl+shift+e").unwrap();
        assert!(!shifted.matches(&key("e", true, false)));
    }
}
