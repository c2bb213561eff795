//! Binding keyboard-event predicates to focus moves.

use tracing::debug;

use crate::{
    error::{Error, Result},
    event::{KeyEvent, key::KeyCode},
    focus::{FocusSet, PreventScroll, ScanOptions},
    host::Host,
};

/// A predicate deciding whether a keystroke requests a focus move.
pub type KeyPredicate<Id> = Box<dyn Fn(&KeyEvent<Id>) -> bool>;

/// Step configuration: how many extra elements each move skips, either one
/// count applied to both directions or a separate count per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steps {
    /// The same count in both directions.
    Uniform(usize),
    /// Separate counts per direction.
    PerDirection {
        /// Extra elements skipped on forward moves.
        forward: usize,
        /// Extra elements skipped on backward moves.
        backward: usize,
    },
}

impl Steps {
    /// Resolve to a `(forward, backward)` pair.
    pub fn resolve(&self) -> (usize, usize) {
        match *self {
            Self::Uniform(count) => (count, count),
            Self::PerDirection { forward, backward } => (forward, backward),
        }
    }
}

impl Default for Steps {
    fn default() -> Self {
        Self::Uniform(0)
    }
}

impl From<usize> for Steps {
    fn from(count: usize) -> Self {
        Self::Uniform(count)
    }
}

/// Default forward predicate: Tab without shift, ctrl, meta or alt.
fn default_forward<Id>(evt: &KeyEvent<Id>) -> bool {
    let mods = evt.key.mods;
    evt.key.code == KeyCode::Tab && !mods.shift && !mods.ctrl && !mods.meta && !mods.alt
}

/// Default backward predicate: Tab with shift held, or the distinct back-tab
/// code some hosts report for shift-tab; ctrl, meta and alt unheld.
fn default_backward<Id>(evt: &KeyEvent<Id>) -> bool {
    let mods = evt.key.mods;
    if mods.ctrl || mods.meta || mods.alt {
        return false;
    }
    match evt.key.code {
        KeyCode::Tab => mods.shift,
        KeyCode::BackTab => true,
        _ => false,
    }
}

/// A reusable focus-cycling policy for a container element.
///
/// Constructed once with a builder-style chain and then attached as the
/// container's keyboard handler. On each event the policy decides a direction
/// via its predicates, builds a fresh [`FocusSet`] rooted at the event's
/// current target, and delegates the move. No state is retained between
/// events beyond the host's own focus.
pub struct FocusPolicy<H: Host> {
    /// Does this keystroke request a forward move?
    is_forward: KeyPredicate<H::Id>,
    /// Does this keystroke request a backward move?
    is_backward: KeyPredicate<H::Id>,
    /// Selector for the descendants to cycle through.
    children: String,
    /// Ancestor re-resolution selector.
    closest: String,
    /// Wrap past the ends instead of clamping.
    wrap: bool,
    /// Scroll suppression per move.
    prevent_scroll: PreventScroll,
    /// Extra elements skipped per move.
    steps: Steps,
}

impl<H: Host> FocusPolicy<H> {
    /// A policy with default configuration: Tab cycles forward, shift-Tab
    /// (or back-tab) cycles backward, all descendants are candidates, no
    /// wrapping, no scroll suppression, step count zero.
    pub fn new() -> Self {
        FocusPolicy {
            is_forward: Box::new(default_forward),
            is_backward: Box::new(default_backward),
            children: String::new(),
            closest: String::new(),
            wrap: false,
            prevent_scroll: PreventScroll::default(),
            steps: Steps::default(),
        }
    }

    /// Replace the forward predicate.
    pub fn with_forward(mut self, pred: impl Fn(&KeyEvent<H::Id>) -> bool + 'static) -> Self {
        self.is_forward = Box::new(pred);
        self
    }

    /// Replace the backward predicate.
    pub fn with_backward(mut self, pred: impl Fn(&KeyEvent<H::Id>) -> bool + 'static) -> Self {
        self.is_backward = Box::new(pred);
        self
    }

    /// Set the selector for the descendants to cycle through.
    pub fn with_children(mut self, selector: &str) -> Self {
        self.children = selector.to_string();
        self
    }

    /// Set the ancestor re-resolution selector.
    pub fn with_closest(mut self, selector: &str) -> Self {
        self.closest = selector.to_string();
        self
    }

    /// Wrap past the ends instead of clamping.
    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set scroll suppression for focus moves.
    pub fn with_prevent_scroll(mut self, prevent: impl Into<PreventScroll>) -> Self {
        self.prevent_scroll = prevent.into();
        self
    }

    /// Set the step configuration.
    pub fn with_steps(mut self, steps: impl Into<Steps>) -> Self {
        self.steps = steps.into();
        self
    }

    /// Handle a keyboard event. Tests the forward predicate, then the
    /// backward predicate - forward wins if both match. When a direction is
    /// chosen the event's default action is suppressed and focus moves with
    /// the configured step count; when neither matches, the event is left
    /// alone and nothing moves.
    ///
    /// Yields the element that received focus, or `None` when no move
    /// occurred. Errors if the event's current target is not an element.
    pub fn init(&self, host: &mut H, evt: &mut KeyEvent<H::Id>) -> Result<Option<H::Id>> {
        let mut set = self.build_focus_set(host, evt)?;
        let (forward_steps, backward_steps) = self.steps.resolve();

        if (self.is_forward)(evt) {
            evt.prevent_default();
            debug!("focus forward, steps {}", forward_steps);
            return Ok(set.forward(forward_steps));
        }

        if (self.is_backward)(evt) {
            evt.prevent_default();
            debug!("focus backward, steps {}", backward_steps);
            return Ok(set.backward(backward_steps));
        }

        Ok(None)
    }

    /// Move focus forward regardless of the predicates, suppressing the
    /// event's default action.
    pub fn forward(&self, host: &mut H, evt: &mut KeyEvent<H::Id>) -> Result<Option<H::Id>> {
        evt.prevent_default();
        let mut set = self.build_focus_set(host, evt)?;
        let (steps, _) = self.steps.resolve();
        Ok(set.forward(steps))
    }

    /// Move focus backward regardless of the predicates, suppressing the
    /// event's default action.
    pub fn backward(&self, host: &mut H, evt: &mut KeyEvent<H::Id>) -> Result<Option<H::Id>> {
        evt.prevent_default();
        let mut set = self.build_focus_set(host, evt)?;
        let (_, steps) = self.steps.resolve();
        Ok(set.backward(steps))
    }

    /// Build a focus set rooted at the event's current target with this
    /// policy's configuration. Errors if the listener fired on a non-element
    /// target - a listener-attachment mistake.
    pub fn build_focus_set<'a>(
        &self,
        host: &'a mut H,
        evt: &KeyEvent<H::Id>,
    ) -> Result<FocusSet<'a, H>> {
        let root = evt.current_target().ok_or(Error::InvalidTarget)?.clone();
        Ok(FocusSet::new(
            host,
            &root,
            &ScanOptions {
                children: self.children.clone(),
                closest: self.closest.clone(),
                wrap: self.wrap,
                prevent_scroll: self.prevent_scroll,
            },
        ))
    }
}

impl<H: Host> Default for FocusPolicy<H> {
    fn default() -> Self {
        Self::new()
    }
}
