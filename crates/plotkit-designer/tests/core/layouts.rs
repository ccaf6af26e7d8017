use plotkit_core::{AppState, LayoutId};
use plotkit_designer::layout_state::{
    add_element, delete_layout, load_layout, resize_land, save_layout, set_new_element_size,
    LayoutSelection, UNTITLED_LAYOUT_NAME,
};

fn populated() -> AppState {
    let state = resize_land(&AppState::new(), 40.0, 30.0);
    add_element(&state, 5.0, 5.0, Some("Shed"))
}

#[test]
fn test_save_layout_sets_current() {
    let state = save_layout(&populated(), Some("Plot A"));

    assert_eq!(state.saved_layouts.len(), 1);
    let layout = &state.saved_layouts[0];
    assert_eq!(layout.name, "Plot A");
    assert_eq!((layout.land_width, layout.land_height), (40.0, 30.0));
    assert_eq!(layout.elements, state.elements);
    assert_eq!(state.current_layout_id.as_ref(), Some(&layout.id));
}

#[test]
fn test_save_layout_default_name() {
    let state = save_layout(&populated(), None);
    assert_eq!(state.saved_layouts[0].name, UNTITLED_LAYOUT_NAME);

    let state = save_layout(&state, Some(""));
    assert_eq!(state.saved_layouts[1].name, UNTITLED_LAYOUT_NAME);
    assert_ne!(state.saved_layouts[0].id, state.saved_layouts[1].id);
}

#[test]
fn test_snapshot_not_changed_by_later_edits() {
    let state = save_layout(&populated(), Some("Plot A"));
    let edited = add_element(&state, 1.0, 1.0, None);

    assert_eq!(edited.saved_layouts[0].elements.len(), 1);
    assert_eq!(edited.elements.len(), 2);
}

#[test]
fn test_load_new_resets() {
    let state = set_new_element_size(&populated(), 2.0, 3.0);
    let state = save_layout(&state, Some("Plot A"));

    let fresh = load_layout(&state, &LayoutSelection::New);
    assert!(fresh.elements.is_empty());
    assert_eq!((fresh.land_width, fresh.land_height), (100.0, 100.0));
    assert_eq!((fresh.new_element_width, fresh.new_element_height), (10.0, 10.0));
    assert!(fresh.current_layout_id.is_none());
    assert_eq!(fresh.saved_layouts.len(), 1);
}

#[test]
fn test_load_new_is_idempotent() {
    let state = save_layout(&populated(), Some("Plot A"));
    let once = load_layout(&state, &LayoutSelection::New);
    let twice = load_layout(&once, &LayoutSelection::New);
    assert_eq!(once, twice);
}

#[test]
fn test_load_unknown_is_noop() {
    let state = save_layout(&populated(), Some("Plot A"));
    let next = load_layout(&state, &LayoutSelection::Saved(LayoutId::from("missing")));
    assert_eq!(next, state);
}

#[test]
fn test_selection_parsing() {
    assert_eq!(LayoutSelection::from("new"), LayoutSelection::New);
    assert_eq!(
        LayoutSelection::from("1718000000000"),
        LayoutSelection::Saved(LayoutId::from("1718000000000"))
    );
    assert_eq!(LayoutSelection::New.to_string(), "new");
    assert_eq!(LayoutSelection::current(&AppState::new()), LayoutSelection::New);
}

#[test]
fn test_delete_layout_clears_current() {
    let state = save_layout(&populated(), Some("A"));
    let state = save_layout(&state, Some("B"));
    let first = state.saved_layouts[0].id.clone();

    // B is current; deleting A still clears the selection.
    let next = delete_layout(&state, Some(&first));
    assert!(next.saved_layouts.iter().all(|l| l.id != first));
    assert_eq!(next.saved_layouts.len(), 1);
    assert!(next.current_layout_id.is_none());
}

#[test]
fn test_delete_none_is_noop() {
    let state = save_layout(&populated(), Some("A"));
    assert_eq!(delete_layout(&state, None), state);
}
