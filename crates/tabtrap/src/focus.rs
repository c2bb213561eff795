//! Scanning a container for focusable elements and moving focus through them.

use tracing::trace;

use crate::host::Host;

/// Scroll suppression for focus moves: either one flag applied to both
/// directions, or a separate flag per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreventScroll {
    /// The same flag in both directions.
    Uniform(bool),
    /// Separate flags per direction.
    PerDirection {
        /// Suppress scrolling on forward moves.
        forward: bool,
        /// Suppress scrolling on backward moves.
        backward: bool,
    },
}

impl PreventScroll {
    /// Resolve to a `(forward, backward)` pair.
    pub fn resolve(&self) -> (bool, bool) {
        match *self {
            Self::Uniform(flag) => (flag, flag),
            Self::PerDirection { forward, backward } => (forward, backward),
        }
    }
}

impl Default for PreventScroll {
    fn default() -> Self {
        Self::Uniform(false)
    }
}

impl From<bool> for PreventScroll {
    fn from(flag: bool) -> Self {
        Self::Uniform(flag)
    }
}

/// Options governing a focus scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Selector for the descendants to cycle through. An empty selector
    /// matches every descendant.
    pub children: String,
    /// Selector used to re-resolve each focusable candidate to its nearest
    /// matching ancestor, for targeting an outer wrapper when the literal
    /// focusable node is nested inside non-focusable markup. Falls back to
    /// `children` when empty.
    pub closest: String,
    /// Wrap past the ends instead of clamping. On by default: a trapped
    /// dialog is the common case for a standalone scan.
    pub wrap: bool,
    /// Scroll suppression passed to the host when focus moves.
    pub prevent_scroll: PreventScroll,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            children: String::new(),
            closest: String::new(),
            wrap: true,
            prevent_scroll: PreventScroll::default(),
        }
    }
}

/// A one-shot scan of the focusable descendants of a container element, with
/// forward and backward movement.
///
/// A `FocusSet` is built fresh for every event and used for exactly one move;
/// the element list is cleared as soon as focus has been handed to the host,
/// so no element handles outlive the call.
pub struct FocusSet<'a, H: Host> {
    /// The host the scan ran against, and the target of the focus move.
    host: &'a mut H,
    /// Focusable descendants in tree order. `None` when the container had no
    /// matching descendants at all; an empty vec when descendants matched
    /// but none were focusable.
    nodes: Option<Vec<H::Id>>,
    /// Position of the host's active element within `nodes`.
    index: Option<usize>,
    /// Wrap past the ends instead of clamping.
    wrap: bool,
    /// Scroll suppression config, resolved per direction at move time.
    prevent_scroll: PreventScroll,
}

impl<'a, H: Host> FocusSet<'a, H> {
    /// Scan the descendants of `root` and capture the current focus
    /// position. The scan is a snapshot: the node list never mutates in
    /// place, and later tree changes are invisible to this set.
    pub fn new(host: &'a mut H, root: &H::Id, opts: &ScanOptions) -> Self {
        let children = host.select(root, &opts.children);
        let nodes = if children.is_empty() {
            None
        } else {
            let closest = if opts.closest.is_empty() {
                opts.children.as_str()
            } else {
                opts.closest.as_str()
            };
            let mut focusable = Vec::new();
            for el in children {
                let tab_ok = host.tab_index_attr(&el).unwrap_or(-1) >= 0
                    || host.tab_index(&el) >= 0;
                if !tab_ok || host.is_disabled(&el) {
                    continue;
                }
                if closest.is_empty() {
                    focusable.push(el);
                } else if let Some(wrapper) = host.closest(&el, closest) {
                    focusable.push(wrapper);
                }
            }
            Some(focusable)
        };

        let index = match (&nodes, host.active()) {
            (Some(ns), Some(active)) => ns.iter().position(|n| *n == active),
            _ => None,
        };

        FocusSet {
            host,
            nodes,
            index,
            wrap: opts.wrap,
            prevent_scroll: opts.prevent_scroll,
        }
    }

    /// The focusable nodes found by the scan. `None` when the container had
    /// no matching descendants, or after the set has been spent.
    pub fn nodes(&self) -> Option<&[H::Id]> {
        self.nodes.as_deref()
    }

    /// Position of the host's active element within the focusable nodes.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move focus forward by `1 + count` positions. Past the last valid
    /// index, wraps to the first element when wrapping is on, else clamps to
    /// the last. A set with no focusable nodes is a no-op.
    pub fn forward(&mut self, count: usize) -> Option<H::Id> {
        let len = self.nodes.as_ref().map_or(0, Vec::len);
        if len == 0 {
            return None;
        }
        let last = len as i64 - 1;
        let next = self.index.map_or(-1, |i| i as i64) + 1 + count as i64;
        let target = if next > last {
            if self.wrap { 0 } else { last as usize }
        } else {
            next as usize
        };
        let (prevent_scroll, _) = self.prevent_scroll.resolve();
        self.focus(target, prevent_scroll)
    }

    /// Move focus backward by `1 + count` positions. Below index zero, wraps
    /// to the last element when wrapping is on, else clamps to the first. A
    /// set with no focusable nodes is a no-op.
    pub fn backward(&mut self, count: usize) -> Option<H::Id> {
        let len = self.nodes.as_ref().map_or(0, Vec::len);
        if len == 0 {
            return None;
        }
        let prev = self.index.map_or(-1, |i| i as i64) - 1 - count as i64;
        let target = if prev < 0 {
            if self.wrap { len - 1 } else { 0 }
        } else {
            prev as usize
        };
        let (_, prevent_scroll) = self.prevent_scroll.resolve();
        self.focus(target, prevent_scroll)
    }

    /// Focus the element at `index` through the host and yield it, clearing
    /// the set. Empty or spent sets and out-of-range indices are no-ops.
    pub fn focus(&mut self, index: usize, prevent_scroll: bool) -> Option<H::Id> {
        let el = self.nodes.as_ref()?.get(index)?.clone();
        trace!("focus -> {:?} (prevent_scroll={})", el, prevent_scroll);
        self.host.focus(&el, prevent_scroll);
        self.destroy();
        Some(el)
    }

    /// Clear the cached element list, releasing element handles. Called
    /// automatically at the end of every successful focus move; exposed for
    /// explicit cleanup.
    pub fn destroy(&mut self) {
        self.nodes = None;
        self.index = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevent_scroll_resolution() {
        assert_eq!(PreventScroll::default().resolve(), (false, false));
        assert_eq!(PreventScroll::from(true).resolve(), (true, true));
        assert_eq!(
            PreventScroll::PerDirection {
                forward: true,
                backward: false
            }
            .resolve(),
            (true, false)
        );
    }

    #[test]
    fn scan_defaults() {
        let opts = ScanOptions::default();
        assert!(opts.children.is_empty());
        assert!(opts.closest.is_empty());
        assert!(opts.wrap);
        assert_eq!(opts.prevent_scroll, PreventScroll::Uniform(false));
    }
}
