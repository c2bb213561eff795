//! Keyboard input as delivered to container listeners.

pub mod key;

use key::Key;

/// A keyboard event dispatched to a listener on a container element.
///
/// `Id` is the host's element handle type. The current target is the element
/// the listener fired on - the container whose descendants are scanned - and
/// is `None` when the listener was attached to something that is not an
/// element.
#[derive(Debug, Clone)]
pub struct KeyEvent<Id> {
    /// The keystroke, with modifiers.
    pub key: Key,
    /// The element the listener fired on, if any.
    current_target: Option<Id>,
    /// Has the default action for this keystroke been suppressed?
    default_prevented: bool,
}

impl<Id> KeyEvent<Id> {
    /// An event dispatched to a listener on the given container element.
    pub fn new(key: impl Into<Key>, current_target: Id) -> Self {
        Self {
            key: key.into(),
            current_target: Some(current_target),
            default_prevented: false,
        }
    }

    /// An event whose listener fired on a non-element target.
    pub fn detached(key: impl Into<Key>) -> Self {
        Self {
            key: key.into(),
            current_target: None,
            default_prevented: false,
        }
    }

    /// The container element the listener fired on, if it is an element.
    pub fn current_target(&self) -> Option<&Id> {
        self.current_target.as_ref()
    }

    /// Suppress the host's default action for this keystroke.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Has the default action been suppressed?
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
