use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use furl::widgets::Dropdown;
use furl::{dispatch_activation, ChangeHandler, HandlerRegistry, ToggleState};
use furl_dom::Element;

// ============================================================================
// ToggleState Tests
// ============================================================================

#[test]
fn test_toggle_involution() {
    // n toggles from collapsed: expanded iff n is odd
    for n in 0..8 {
        let state = ToggleState::new();
        for _ in 0..n {
            state.toggle();
        }
        assert_eq!(state.is_expanded(), n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn test_toggle_returns_new_value() {
    let state = ToggleState::new();
    assert!(state.toggle());
    assert!(!state.toggle());
}

#[test]
fn test_expanded_constructor() {
    assert!(ToggleState::expanded().is_expanded());
    assert!(!ToggleState::new().is_expanded());
}

#[test]
fn test_set_expand_collapse() {
    let state = ToggleState::new();
    state.expand();
    assert!(state.is_expanded());
    state.collapse();
    assert!(!state.is_expanded());
    state.set_expanded(true);
    assert!(state.is_expanded());
}

#[test]
fn test_dirty_only_on_change() {
    let state = ToggleState::new();
    assert!(!state.is_dirty());

    state.set_expanded(false); // no-op
    assert!(!state.is_dirty());

    state.toggle();
    assert!(state.is_dirty());

    state.clear_dirty();
    assert!(!state.is_dirty());
}

#[test]
fn test_clones_share_state() {
    let state = ToggleState::new();
    let other = state.clone();
    state.toggle();
    assert!(other.is_expanded());
}

// ============================================================================
// on_change Callback Tests
// ============================================================================

fn build_dropdown(
    registry: &HandlerRegistry,
    state: &ToggleState,
    on_change: ChangeHandler,
) -> Element {
    Dropdown::new()
        .state(state)
        .id("dd")
        .label("More items")
        .on_change(on_change)
        .build(registry)
}

#[test]
fn test_on_change_fires_once_per_activation_with_new_value() {
    let registry = HandlerRegistry::new();
    let state = ToggleState::new();

    let calls = Arc::new(AtomicUsize::new(0));
    let last = Arc::new(Mutex::new(None));
    let on_change: ChangeHandler = {
        let calls = Arc::clone(&calls);
        let last = Arc::clone(&last);
        Arc::new(move |expanded| {
            calls.fetch_add(1, Ordering::SeqCst);
            *last.lock().unwrap() = Some(expanded);
        })
    };

    let page = build_dropdown(&registry, &state, on_change.clone());
    dispatch_activation(&page, &registry, "dd-button").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(*last.lock().unwrap(), Some(true));

    // Rebuild (new page, fresh registry contents), activate again
    registry.clear();
    let page = build_dropdown(&registry, &state, on_change);
    dispatch_activation(&page, &registry, "dd-button").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(*last.lock().unwrap(), Some(false));
}

#[test]
fn test_on_change_never_fires_on_build_alone() {
    let registry = HandlerRegistry::new();
    let state = ToggleState::new();

    let calls = Arc::new(AtomicUsize::new(0));
    let on_change: ChangeHandler = {
        let calls = Arc::clone(&calls);
        Arc::new(move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        })
    };

    for _ in 0..3 {
        registry.clear();
        build_dropdown(&registry, &state, on_change.clone());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_toggle_without_callback_still_commits() {
    let registry = HandlerRegistry::new();
    let state = ToggleState::new();
    let page = Dropdown::new()
        .state(&state)
        .id("dd")
        .label("More items")
        .build(&registry);

    dispatch_activation(&page, &registry, "dd-button").unwrap();
    assert!(state.is_expanded());
}
