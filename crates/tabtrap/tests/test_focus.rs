//! Integration tests for focus-set scanning and movement.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tabtrap::{
        FocusSet, Host, PreventScroll, ScanOptions,
        tutils::{TestDom, TestId},
    };

    /// A container with `n` focusable buttons as direct children.
    fn button_row(n: usize) -> (TestDom, Vec<TestId>) {
        let mut dom = TestDom::new();
        let root = dom.root();
        let buttons = (0..n).map(|_| dom.append(root, "button")).collect();
        (dom, buttons)
    }

    #[test]
    fn forward_cycles_back_to_start_with_wrap() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();
        dom.set_active(buttons[0]);

        let opts = ScanOptions::default();
        for _ in 0..3 {
            let moved = FocusSet::new(&mut dom, &root, &opts).forward(0);
            assert!(moved.is_some());
        }
        assert_eq!(dom.active(), Some(buttons[0]));
    }

    #[test]
    fn forward_clamps_at_last_without_wrap() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();
        dom.set_active(buttons[2]);

        let opts = ScanOptions {
            wrap: false,
            ..ScanOptions::default()
        };
        for _ in 0..2 {
            let moved = FocusSet::new(&mut dom, &root, &opts).forward(0);
            assert_eq!(moved, Some(buttons[2]));
        }
        assert_eq!(dom.active(), Some(buttons[2]));
    }

    #[test]
    fn backward_from_first_wraps_or_clamps() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();

        dom.set_active(buttons[0]);
        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).backward(0);
        assert_eq!(moved, Some(buttons[2]));

        dom.set_active(buttons[0]);
        let opts = ScanOptions {
            wrap: false,
            ..ScanOptions::default()
        };
        let moved = FocusSet::new(&mut dom, &root, &opts).backward(0);
        assert_eq!(moved, Some(buttons[0]));
    }

    #[test]
    fn negative_tabindex_and_disabled_are_excluded() {
        let mut dom = TestDom::new();
        let root = dom.root();
        let ok = dom.append(root, "button");
        let negative = dom.append(root, "button");
        dom.set_tab_index(negative, -1);
        let disabled = dom.append(root, "button");
        dom.set_disabled(disabled);
        let tabbable_div = dom.append(root, "div");
        dom.set_tab_index(tabbable_div, 2);

        let set = FocusSet::new(&mut dom, &root, &ScanOptions::default());
        assert_eq!(set.nodes(), Some(&[ok, tabbable_div][..]));
    }

    #[test]
    fn matching_but_unfocusable_children_are_a_noop() {
        let mut dom = TestDom::new();
        let root = dom.root();
        dom.append(root, "div");
        dom.append(root, "span");

        let mut set = FocusSet::new(&mut dom, &root, &ScanOptions::default());
        assert_eq!(set.nodes(), Some(&[][..]));
        assert_eq!(set.forward(0), None);
        assert_eq!(set.backward(0), None);
        assert_eq!(dom.active(), None);
        assert!(dom.focus_log().is_empty());
    }

    #[test]
    fn zero_matching_children_yield_no_node_list() {
        let mut dom = TestDom::new();
        let root = dom.root();

        let mut set = FocusSet::new(&mut dom, &root, &ScanOptions::default());
        assert_eq!(set.nodes(), None);
        assert_eq!(set.forward(0), None);
        assert!(dom.focus_log().is_empty());
    }

    #[test]
    fn step_count_skips_extra_elements() {
        let (mut dom, buttons) = button_row(5);
        let root = dom.root();
        dom.set_active(buttons[0]);

        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).forward(2);
        assert_eq!(moved, Some(buttons[3]));

        // Same wrap rule as step 0: past the end lands on the first element.
        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).forward(2);
        assert_eq!(moved, Some(buttons[0]));
    }

    #[test]
    fn forward_from_middle_then_wrap() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();
        dom.set_active(buttons[1]);

        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).forward(0);
        assert_eq!(moved, Some(buttons[2]));

        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).forward(0);
        assert_eq!(moved, Some(buttons[0]));
    }

    #[test]
    fn unset_index_starts_at_the_ends() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();

        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).forward(0);
        assert_eq!(moved, Some(buttons[0]));

        dom.clear_active();
        let moved = FocusSet::new(&mut dom, &root, &ScanOptions::default()).backward(0);
        assert_eq!(moved, Some(buttons[2]));
    }

    #[test]
    fn closest_resolves_to_wrapper() {
        let mut dom = TestDom::new();
        let root = dom.root();
        let cell_a = dom.append(root, "div");
        dom.add_class(cell_a, "cell");
        dom.append(cell_a, "button");
        let cell_b = dom.append(root, "div");
        dom.add_class(cell_b, "cell");
        dom.append(cell_b, "button");

        let opts = ScanOptions {
            children: "button".to_string(),
            closest: ".cell".to_string(),
            ..ScanOptions::default()
        };
        let mut set = FocusSet::new(&mut dom, &root, &opts);
        assert_eq!(set.nodes(), Some(&[cell_a, cell_b][..]));

        let moved = set.forward(0);
        assert_eq!(moved, Some(cell_a));
        assert_eq!(dom.active(), Some(cell_a));
    }

    #[test]
    fn closest_falls_back_to_children_selector() {
        let mut dom = TestDom::new();
        let root = dom.root();
        let wrapper = dom.append(root, "div");
        let button = dom.append(wrapper, "button");

        // No explicit closest: candidates re-resolve against the children
        // selector, which maps each button to itself.
        let opts = ScanOptions {
            children: "button".to_string(),
            ..ScanOptions::default()
        };
        let set = FocusSet::new(&mut dom, &root, &opts);
        assert_eq!(set.nodes(), Some(&[button][..]));
    }

    #[test]
    fn prevent_scroll_resolved_per_direction() {
        let (mut dom, buttons) = button_row(3);
        let root = dom.root();
        dom.set_active(buttons[1]);

        let opts = ScanOptions {
            prevent_scroll: PreventScroll::PerDirection {
                forward: true,
                backward: false,
            },
            ..ScanOptions::default()
        };
        FocusSet::new(&mut dom, &root, &opts).forward(0);
        FocusSet::new(&mut dom, &root, &opts).backward(0);

        let log = dom.focus_log();
        assert_eq!(log.len(), 2);
        assert!(log[0].prevent_scroll);
        assert!(!log[1].prevent_scroll);
    }

    #[test]
    fn destroy_releases_the_node_list() {
        let (mut dom, _) = button_row(2);
        let root = dom.root();

        let mut set = FocusSet::new(&mut dom, &root, &ScanOptions::default());
        assert!(set.nodes().is_some());
        set.destroy();
        assert_eq!(set.nodes(), None);
        assert_eq!(set.index(), None);
        assert_eq!(set.focus(0, false), None);
        assert!(dom.focus_log().is_empty());
    }

    #[test]
    fn spent_set_is_inert() {
        let (mut dom, buttons) = button_row(2);
        let root = dom.root();
        dom.set_active(buttons[0]);

        let mut set = FocusSet::new(&mut dom, &root, &ScanOptions::default());
        assert_eq!(set.forward(0), Some(buttons[1]));
        // The move spent the set; further operations are no-ops.
        assert_eq!(set.forward(0), None);
        assert_eq!(dom.focus_log().len(), 1);
    }

    proptest! {
        #[test]
        fn forward_index_arithmetic(
            len in 1usize..8,
            start in 0usize..8,
            count in 0usize..10,
            wrap in proptest::bool::ANY,
        ) {
            prop_assume!(start < len);
            let (mut dom, buttons) = button_row(len);
            let root = dom.root();
            dom.set_active(buttons[start]);

            let opts = ScanOptions { wrap, ..ScanOptions::default() };
            let moved = FocusSet::new(&mut dom, &root, &opts).forward(count);

            let next = start + 1 + count;
            let expected = if next > len - 1 {
                if wrap { 0 } else { len - 1 }
            } else {
                next
            };
            prop_assert_eq!(moved, Some(buttons[expected]));
        }

        #[test]
        fn backward_index_arithmetic(
            len in 1usize..8,
            start in 0usize..8,
            count in 0usize..10,
            wrap in proptest::bool::ANY,
        ) {
            prop_assume!(start < len);
            let (mut dom, buttons) = button_row(len);
            let root = dom.root();
            dom.set_active(buttons[start]);

            let opts = ScanOptions { wrap, ..ScanOptions::default() };
            let moved = FocusSet::new(&mut dom, &root, &opts).backward(count);

            let expected = if start < 1 + count {
                if wrap { len - 1 } else { 0 }
            } else {
                start - 1 - count
            };
            prop_assert_eq!(moved, Some(buttons[expected]));
        }
    }
}
