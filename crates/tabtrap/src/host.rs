/// The capabilities a host UI must expose for focus cycling.
///
/// The library does not own or implement the element tree. A host - a
/// DOM-like document, a widget tree, a form model - implements this trait,
/// and the library consumes element selection, tab-index and disabled
/// reads, active-element tracking, and the focus-invocation primitive.
pub trait Host {
    /// The host's element handle. Handles are cheap to clone and compare and
    /// do not own the element they refer to.
    type Id: Clone + PartialEq + std::fmt::Debug + 'static;

    /// All descendants of `root` matching `selector`, in tree order. An
    /// empty selector matches every descendant.
    fn select(&self, root: &Self::Id, selector: &str) -> Vec<Self::Id>;

    /// The value of an explicit tab-index attribute on the element, if one
    /// is present and parseable.
    fn tab_index_attr(&self, el: &Self::Id) -> Option<i32>;

    /// The computed tab index of the element: the attribute value where set,
    /// otherwise a default derived from the element kind (interactive
    /// elements are focusable without an attribute).
    fn tab_index(&self, el: &Self::Id) -> i32;

    /// Does the element carry a disabled attribute?
    fn is_disabled(&self, el: &Self::Id) -> bool;

    /// The nearest ancestor of `el`, or `el` itself, matching `selector`.
    fn closest(&self, el: &Self::Id, selector: &str) -> Option<Self::Id>;

    /// The element currently holding input focus, if any.
    fn active(&self) -> Option<Self::Id>;

    /// Give input focus to an element. When `prevent_scroll` is set the host
    /// must not scroll the element into view.
    fn focus(&mut self, el: &Self::Id, prevent_scroll: bool);
}
