use std::cell::RefCell;
use std::rc::Rc;

/// Handle to the one clipboard shared by the editor and the UI.
pub type SharedClipboard = Rc<RefCell<Clipboard>>;

/// Single text slot holding the last copied value.
///
/// The application creates exactly one and hands clones of the
/// [`SharedClipboard`] handle to everything that copies or pastes, so every
/// holder sees the same value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Clipboard {
    content: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clipboard wrapped for sharing.
    pub fn shared() -> SharedClipboard {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Overwrite the slot.
    pub fn copy(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        log::debug!("Copied {} characters to clipboard", text.chars().count());
    }

    /// Current slot value, empty if nothing was ever copied.
    pub fn paste(&self) -> String {
        self.content.clone()
    }
}
