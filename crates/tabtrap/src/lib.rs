//! Focus cycling for keyboard-driven UIs.
//!
//! Given a keyboard event inside a container element, tabtrap computes the
//! set of focusable descendants, finds the one that currently has focus, and
//! moves focus forward or backward through the set, optionally wrapping
//! around. The element tree itself belongs to the host UI, which exposes its
//! capabilities through the [`Host`] trait; the library implements only the
//! cycling logic.
//!
//! [`FocusPolicy`] is the reusable entry point: configure it once with
//! selectors, wrap and step settings, and key predicates, then feed it the
//! keyboard events of a container. Each event builds a one-shot [`FocusSet`]
//! that scans, moves, and releases its element handles.

// Core modules
pub mod backend;
pub mod error;
pub mod event;
mod focus;
mod host;
mod policy;
pub mod tutils;

// Public exports
pub use error::{Error, Result};
pub use event::KeyEvent;
pub use focus::{FocusSet, PreventScroll, ScanOptions};
pub use host::Host;
pub use policy::{FocusPolicy, KeyPredicate, Steps};
