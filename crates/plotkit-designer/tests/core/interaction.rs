use plotkit_core::{AppState, ElementId};
use plotkit_designer::interaction::{
    clamp_to_land, drop_position, element_summaries, finish_drag,
};
use plotkit_designer::layout_state::{add_element, move_element, LayoutAction};

#[test]
fn test_drop_position_inverts_scale() {
    assert_eq!(drop_position(150.0, 75.0, 5.0), (30.0, 15.0));
    assert_eq!(drop_position(90.0, 30.0, 3.0), (30.0, 10.0));
}

#[test]
fn test_clamp_to_land() {
    let state = AppState::new();
    assert_eq!(clamp_to_land(&state, 10.0, 10.0, 95.0, -4.0), (90.0, 0.0));
    assert_eq!(clamp_to_land(&state, 10.0, 10.0, 20.0, 30.0), (20.0, 30.0));
    // Element larger than the land pins to the origin.
    assert_eq!(clamp_to_land(&state, 150.0, 10.0, 20.0, 5.0), (0.0, 5.0));
}

#[test]
fn test_finish_drag() {
    let state = add_element(&AppState::new(), 10.0, 10.0, None);
    let id = state.elements[0].id;

    let action = finish_drag(&state, id, 150.0, 600.0, 5.0).expect("element exists");
    assert_eq!(action, LayoutAction::MoveElement { id, x: 30.0, y: 90.0 });
    assert!(finish_drag(&state, ElementId(3), 0.0, 0.0, 5.0).is_none());
}

#[test]
fn test_element_summaries() {
    let state = add_element(&AppState::new(), 10.0, 2.5, Some("Shed"));
    let id = state.elements[0].id;
    let state = move_element(&state, id, 12.4, 7.5);

    let rows = element_summaries(&state);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Shed");
    assert_eq!(rows[0].detail, "10m x 2.5m at (12m, 8m)");
}
