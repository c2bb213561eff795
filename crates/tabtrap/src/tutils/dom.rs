//! A small instrumented element tree for exercising focus cycling in tests.
//!
//! `TestDom` models just enough of a document for the library's contract:
//! tagged elements with classes and attributes, a computed tab index derived
//! from the element kind, an active element, and a recorded log of focus
//! invocations so tests can assert on scroll-suppression flags.

use crate::host::Host;

/// Handle to an element in a [`TestDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestId(usize);

/// One recorded focus invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusCall {
    /// The element that received focus.
    pub el: TestId,
    /// The scroll-suppression flag the host was handed.
    pub prevent_scroll: bool,
}

/// Element kinds that are focusable without an explicit tab-index attribute.
const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input", "select", "textarea"];

/// Backing record for a single element.
#[derive(Debug)]
struct ElementData {
    /// Tag name.
    tag: String,
    /// Parent element, `None` for the root.
    parent: Option<usize>,
    /// Child elements in insertion order.
    children: Vec<usize>,
    /// Class list.
    classes: Vec<String>,
    /// Attributes as name/value pairs.
    attrs: Vec<(String, String)>,
}

/// One comma-separated selector alternative: an optional tag name plus any
/// number of required classes and attributes.
#[derive(Debug, Default)]
struct Segment {
    /// Required tag name; `None` or `*` matches any tag.
    tag: Option<String>,
    /// Classes the element must carry.
    classes: Vec<String>,
    /// Attributes the element must carry.
    attrs: Vec<String>,
}

/// Parse a selector into its comma-separated segments. The supported grammar
/// is the small subset the tests need: `*`, `tag`, `.class`, `[attr]`, and
/// compounds such as `button.primary[disabled]`.
fn parse_selector(selector: &str) -> Vec<Segment> {
    selector
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let mut seg = Segment::default();
            let mut rest = s;
            let tag_end = rest.find(['.', '[']).unwrap_or(rest.len());
            if tag_end > 0 {
                seg.tag = Some(rest[..tag_end].to_string());
                rest = &rest[tag_end..];
            }
            while !rest.is_empty() {
                if let Some(stripped) = rest.strip_prefix('.') {
                    let end = stripped.find(['.', '[']).unwrap_or(stripped.len());
                    seg.classes.push(stripped[..end].to_string());
                    rest = &stripped[end..];
                } else if let Some(stripped) = rest.strip_prefix('[') {
                    let end = stripped.find(']').unwrap_or(stripped.len());
                    seg.attrs.push(stripped[..end].to_string());
                    rest = stripped.get(end + 1..).unwrap_or("");
                } else {
                    break;
                }
            }
            seg
        })
        .collect()
}

/// An in-memory element tree implementing [`Host`].
#[derive(Debug)]
pub struct TestDom {
    /// Arena of elements; index 0 is the root.
    elements: Vec<ElementData>,
    /// Index of the active element, if any.
    active: Option<usize>,
    /// Focus invocations in call order.
    focus_log: Vec<FocusCall>,
}

impl TestDom {
    /// An empty tree holding a single root container.
    pub fn new() -> Self {
        TestDom {
            elements: vec![ElementData {
                tag: "root".to_string(),
                parent: None,
                children: vec![],
                classes: vec![],
                attrs: vec![],
            }],
            active: None,
            focus_log: vec![],
        }
    }

    /// The root container element.
    pub fn root(&self) -> TestId {
        TestId(0)
    }

    /// Append a child element under `parent`.
    pub fn append(&mut self, parent: TestId, tag: &str) -> TestId {
        let id = self.elements.len();
        self.elements.push(ElementData {
            tag: tag.to_string(),
            parent: Some(parent.0),
            children: vec![],
            classes: vec![],
            attrs: vec![],
        });
        self.elements[parent.0].children.push(id);
        TestId(id)
    }

    /// Add a class to an element.
    pub fn add_class(&mut self, el: TestId, class: &str) {
        self.elements[el.0].classes.push(class.to_string());
    }

    /// Set an attribute on an element.
    pub fn set_attr(&mut self, el: TestId, name: &str, value: &str) {
        self.elements[el.0]
            .attrs
            .push((name.to_string(), value.to_string()));
    }

    /// Shorthand for setting the tab-index attribute.
    pub fn set_tab_index(&mut self, el: TestId, tab_index: i32) {
        self.set_attr(el, "tabindex", &tab_index.to_string());
    }

    /// Shorthand for setting the disabled attribute.
    pub fn set_disabled(&mut self, el: TestId) {
        self.set_attr(el, "disabled", "");
    }

    /// Move the host's focus state directly, as a pointer click would,
    /// without going through the focus log.
    pub fn set_active(&mut self, el: TestId) {
        self.active = Some(el.0);
    }

    /// Clear the host's focus state.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// The tag name of an element.
    pub fn tag(&self, el: TestId) -> &str {
        &self.elements[el.0].tag
    }

    /// The recorded focus invocations, oldest first.
    pub fn focus_log(&self) -> &[FocusCall] {
        &self.focus_log
    }

    /// Look up an attribute value.
    fn attr(&self, el: usize, name: &str) -> Option<&str> {
        self.elements[el]
            .attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Does the element match the selector? An empty selector matches
    /// everything.
    fn matches(&self, el: usize, selector: &str) -> bool {
        let segments = parse_selector(selector);
        if segments.is_empty() {
            return true;
        }
        let data = &self.elements[el];
        segments.iter().any(|seg| {
            let tag_ok = match seg.tag.as_deref() {
                None | Some("*") => true,
                Some(tag) => data.tag == tag,
            };
            tag_ok
                && seg.classes.iter().all(|c| data.classes.contains(c))
                && seg.attrs.iter().all(|a| self.attr(el, a).is_some())
        })
    }

    /// Collect matching descendants of `el` in tree order.
    fn collect(&self, el: usize, selector: &str, out: &mut Vec<TestId>) {
        for &child in &self.elements[el].children {
            if self.matches(child, selector) {
                out.push(TestId(child));
            }
            self.collect(child, selector, out);
        }
    }
}

impl Default for TestDom {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for TestDom {
    type Id = TestId;

    fn select(&self, root: &TestId, selector: &str) -> Vec<TestId> {
        let mut out = Vec::new();
        self.collect(root.0, selector, &mut out);
        out
    }

    fn tab_index_attr(&self, el: &TestId) -> Option<i32> {
        self.attr(el.0, "tabindex")?.parse().ok()
    }

    fn tab_index(&self, el: &TestId) -> i32 {
        if let Some(explicit) = self.tab_index_attr(el) {
            return explicit;
        }
        if INTERACTIVE_TAGS.contains(&self.elements[el.0].tag.as_str()) {
            0
        } else {
            -1
        }
    }

    fn is_disabled(&self, el: &TestId) -> bool {
        self.attr(el.0, "disabled").is_some()
    }

    fn closest(&self, el: &TestId, selector: &str) -> Option<TestId> {
        let mut current = Some(el.0);
        while let Some(idx) = current {
            if self.matches(idx, selector) {
                return Some(TestId(idx));
            }
            current = self.elements[idx].parent;
        }
        None
    }

    fn active(&self) -> Option<TestId> {
        self.active.map(TestId)
    }

    fn focus(&mut self, el: &TestId, prevent_scroll: bool) {
        self.active = Some(el.0);
        self.focus_log.push(FocusCall {
            el: *el,
            prevent_scroll,
        });
    }
}
