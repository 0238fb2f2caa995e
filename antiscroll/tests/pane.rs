mod common;

use antiscroll::{
    Document, Error, FALLBACK_SCROLLBAR_SIZE, INNER_CLASS, MemoryDocument, Options, Pane,
    scrollbar_size,
};
use common::fixture;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_create_without_inner_fails() {
    let mut doc = MemoryDocument::new();
    let root = doc.root();
    let container = doc.create_element(&["antiscroll-wrap"]);
    doc.append_child(root, container);

    let err = Pane::create(&mut doc, container, Options::default()).unwrap_err();
    assert!(matches!(err, Error::MissingInner(id) if id == container));
}

#[test]
fn test_create_on_detached_container_fails() {
    let mut doc = MemoryDocument::new();
    let container = doc.create_element(&["antiscroll-wrap"]);
    let inner = doc.create_element(&[INNER_CLASS]);
    doc.append_child(container, inner);

    let err = Pane::create(&mut doc, container, Options::default()).unwrap_err();
    assert!(matches!(err, Error::MissingContainer(_)));
}

#[test]
fn test_inner_found_at_any_depth() {
    let mut f = fixture(200.0, 100.0, 400.0, 100.0);
    let wrapper = f.doc.create_element(&["wrapper"]);
    f.doc.append_child(f.container, wrapper);
    f.doc.append_child(wrapper, f.inner);

    let pane = f.pane(Options::default());
    assert_eq!(pane.inner(), f.inner);
}

// ============================================================================
// Axis need detection
// ============================================================================

#[test]
fn test_horizontal_needs_more_than_scrollbar_allowance() {
    let size = scrollbar_size(&mut MemoryDocument::new());
    assert_eq!(size, FALLBACK_SCROLLBAR_SIZE);

    // Exactly width + allowance: the native scrollbar absorbs it
    let mut f = fixture(200.0, 100.0, 200.0 + size, 50.0);
    let pane = f.pane(Options::default());
    assert!(pane.horizontal().is_none());

    let mut f = fixture(200.0, 100.0, 200.0 + size + 1.0, 50.0);
    let pane = f.pane(Options::default());
    assert!(pane.horizontal().is_some());
}

#[test]
fn test_no_allowance_without_other_axis() {
    let mut f = fixture(200.0, 100.0, 201.0, 50.0);
    let pane = f.pane(Options::default().y(false));
    assert!(pane.horizontal().is_some());
    assert!(pane.vertical().is_none());
}

#[test]
fn test_vertical_needed_for_tall_content() {
    let mut f = fixture(200.0, 100.0, 100.0, 1000.0);
    let pane = f.pane(Options::default());
    assert!(pane.horizontal().is_none());
    assert!(pane.vertical().is_some());
}

#[test]
fn test_disabled_axis_never_gets_scrollbar() {
    let mut f = fixture(200.0, 100.0, 1000.0, 1000.0);
    let pane = f.pane(Options::default().x(false));
    assert!(pane.horizontal().is_none());
    assert!(pane.vertical().is_some());
}

#[test]
fn test_force_horizontal_overrides_disabled_axis() {
    let mut f = fixture(200.0, 100.0, 1000.0, 50.0);
    let pane = f.pane(Options::default().x(false).force_horizontal(true));
    assert!(pane.horizontal().is_some());
}

#[test]
fn test_zero_sized_content_needs_nothing() {
    let mut f = fixture(200.0, 100.0, 0.0, 0.0);
    let pane = f.pane(Options::default());
    assert!(pane.horizontal().is_none());
    assert!(pane.vertical().is_none());
}

// ============================================================================
// Refresh
// ============================================================================

#[test]
fn test_refresh_is_idempotent() {
    let mut f = fixture(200.0, 100.0, 400.0, 1000.0);
    let mut pane = f.pane(Options::default());
    let horizontal = pane.horizontal().map(|s| s.thumb());
    let vertical = pane.vertical().map(|s| s.thumb());
    let listeners = f.doc.listener_count();

    pane.refresh(&mut f.doc).refresh(&mut f.doc);

    assert_eq!(pane.horizontal().map(|s| s.thumb()), horizontal);
    assert_eq!(pane.vertical().map(|s| s.thumb()), vertical);
    assert_eq!(f.doc.listener_count(), listeners);
    assert_eq!(f.doc.children(f.container).len(), 3);
}

#[test]
fn test_refresh_removes_scrollbar_when_content_shrinks() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    let mut pane = f.pane(Options::default());
    let thumb = pane.horizontal().map(|s| s.thumb()).unwrap();

    f.doc.set_content_size(f.inner, 150.0, 50.0);
    pane.refresh(&mut f.doc);

    assert!(pane.horizontal().is_none());
    assert!(!f.doc.contains(thumb));
    assert_eq!(f.doc.listener_count(), 0);
}

#[test]
fn test_refresh_creates_scrollbar_when_content_grows() {
    let mut f = fixture(200.0, 100.0, 150.0, 50.0);
    let mut pane = f.pane(Options::default());
    assert!(pane.horizontal().is_none());

    f.doc.set_content_size(f.inner, 800.0, 50.0);
    pane.refresh(&mut f.doc);

    assert!(pane.horizontal().is_some());
}

#[test]
fn test_refresh_updates_existing_thumb() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    let mut pane = f.pane(Options::default());
    let thumb = pane.horizontal().map(|s| s.thumb()).unwrap();
    assert_eq!(f.doc.style(thumb, "width").as_deref(), Some("98px"));

    f.doc.set_content_size(f.inner, 800.0, 50.0);
    pane.refresh(&mut f.doc);

    assert_eq!(pane.horizontal().map(|s| s.thumb()), Some(thumb));
    assert_eq!(f.doc.style(thumb, "width").as_deref(), Some("49px"));
}

// ============================================================================
// Rebuild and destroy
// ============================================================================

#[test]
fn test_rebuild_sizes_inner_past_native_scrollbars() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    let mut pane = f.pane(Options::default());
    assert_eq!(f.doc.style(f.inner, "width").as_deref(), Some("214px"));
    assert_eq!(f.doc.style(f.inner, "height").as_deref(), Some("114px"));

    // Inline sizing is cleared first, so rebuilding does not accumulate
    pane.rebuild(&mut f.doc).rebuild(&mut f.doc);
    assert_eq!(f.doc.style(f.inner, "width").as_deref(), Some("214px"));
    assert_eq!(f.doc.style(f.inner, "height").as_deref(), Some("114px"));
}

#[test]
fn test_rebuild_skips_allowance_for_disabled_axes() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    f.pane(Options::default().x(false));
    assert_eq!(f.doc.style(f.inner, "width").as_deref(), Some("214px"));
    assert_eq!(f.doc.style(f.inner, "height").as_deref(), Some("100px"));
}

#[test]
fn test_rebuild_replaces_scrollbars() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    let mut pane = f.pane(Options::default());
    let before = pane.horizontal().map(|s| s.thumb()).unwrap();

    pane.rebuild(&mut f.doc);

    let after = pane.horizontal().map(|s| s.thumb()).unwrap();
    assert_ne!(before, after);
    assert!(!f.doc.contains(before));
    assert!(f.doc.contains(after));
}

#[test]
fn test_destroy_removes_thumbs_and_listeners() {
    let mut f = fixture(200.0, 100.0, 400.0, 1000.0);
    let mut pane = f.pane(Options::default());
    assert_eq!(f.doc.children(f.container).len(), 3);
    assert!(f.doc.listener_count() > 0);
    assert!(f.doc.pending_timers() > 0);

    pane.destroy(&mut f.doc).destroy(&mut f.doc);

    assert!(pane.horizontal().is_none());
    assert!(pane.vertical().is_none());
    assert_eq!(f.doc.children(f.container), &[f.inner]);
    assert_eq!(f.doc.listener_count(), 0);
    assert_eq!(f.doc.pending_timers(), 0);
}

#[test]
fn test_unknown_timer_is_ignored() {
    let mut f = fixture(200.0, 100.0, 400.0, 50.0);
    let mut pane = f.pane(Options::default());
    let other = f.doc.set_timeout(std::time::Duration::from_millis(1));
    assert!(!pane.fire_timer(&mut f.doc, other));
    assert!(pane.horizontal().unwrap().is_shown());
}
