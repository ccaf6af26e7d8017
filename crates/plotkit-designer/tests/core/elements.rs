use plotkit_core::{AppState, ElementId};
use plotkit_designer::layout_state::{
    add_element, move_element, remove_element, rename_element, resize_land,
    set_new_element_size, LayoutAction,
};
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn test_add_element_defaults() {
    let state = AppState::new();
    let next = add_element(&state, 10.0, 20.0, None);

    assert!(state.elements.is_empty(), "input must not be mutated");
    assert_eq!(next.elements.len(), 1);
    let element = &next.elements[0];
    assert_eq!(element.name, "Element 1");
    assert_eq!((element.width, element.height), (10.0, 20.0));
    assert_eq!((element.x, element.y), (0.0, 0.0));
}

#[test]
fn test_add_element_empty_name_uses_count() {
    let state = add_element(&AppState::new(), 1.0, 1.0, Some("Shed"));
    let state = add_element(&state, 1.0, 1.0, Some(""));
    assert_eq!(state.elements[0].name, "Shed");
    assert_eq!(state.elements[1].name, "Element 2");
}

#[test]
fn test_add_element_accepts_unvalidated_sizes() {
    let state = add_element(&AppState::new(), -3.0, 0.0, None);
    assert_eq!(state.elements[0].width, -3.0);
    assert_eq!(state.elements[0].height, 0.0);
}

#[test]
fn test_rapid_adds_get_distinct_ids() {
    let mut state = AppState::new();
    for _ in 0..100 {
        state = add_element(&state, 1.0, 1.0, None);
    }
    let ids: HashSet<ElementId> = state.element_ids().collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn test_remove_missing_is_noop() {
    let state = add_element(&AppState::new(), 5.0, 5.0, None);
    let next = remove_element(&state, ElementId(42));
    assert_eq!(next, state);
}

#[test]
fn test_remove_element() {
    let state = add_element(&AppState::new(), 5.0, 5.0, Some("a"));
    let state = add_element(&state, 5.0, 5.0, Some("b"));
    let first = state.elements[0].id;

    let next = remove_element(&state, first);
    assert_eq!(next.elements.len(), 1);
    assert_eq!(next.elements[0].name, "b");
}

#[test]
fn test_move_element_is_unclamped() {
    let state = add_element(&AppState::new(), 5.0, 5.0, None);
    let id = state.elements[0].id;

    let next = move_element(&state, id, 250.0, -12.5);
    assert_eq!(next.elements[0].x, 250.0);
    assert_eq!(next.elements[0].y, -12.5);
    assert_eq!(state.elements[0].x, 0.0);
}

#[test]
fn test_move_missing_is_noop() {
    let state = add_element(&AppState::new(), 5.0, 5.0, None);
    assert_eq!(move_element(&state, ElementId(1), 3.0, 3.0), state);
}

#[test]
fn test_rename_stores_empty_name() {
    let state = add_element(&AppState::new(), 5.0, 5.0, Some("Pond"));
    let id = state.elements[0].id;

    let next = rename_element(&state, id, "");
    assert_eq!(next.elements[0].name, "");
}

#[test]
fn test_resize_land_keeps_elements() {
    let state = add_element(&AppState::new(), 50.0, 50.0, None);
    let id = state.elements[0].id;
    let state = move_element(&state, id, 60.0, 60.0);

    let next = resize_land(&state, 20.0, 30.0);
    assert_eq!((next.land_width, next.land_height), (20.0, 30.0));
    assert_eq!(next.elements, state.elements);
}

#[test]
fn test_staged_size_feeds_add() {
    let state = set_new_element_size(&AppState::new(), 4.0, 6.0);
    let action = LayoutAction::add_staged(&state, None);
    let next = action.apply(&state);

    assert_eq!(next.elements[0].width, 4.0);
    assert_eq!(next.elements[0].height, 6.0);
}

#[test]
fn test_action_names() {
    assert_eq!(
        LayoutAction::ResizeLand {
            width: 1.0,
            height: 1.0
        }
        .name(),
        "Resize Land"
    );
    assert_eq!(LayoutAction::DeleteLayout(None).name(), "Delete Layout");
}

proptest! {
    #[test]
    fn prop_ids_pairwise_distinct(
        ops in proptest::collection::vec((0u8..3, 0usize..8), 1..40)
    ) {
        let mut state = AppState::new();
        for (op, index) in ops {
            state = match op {
                0 | 1 => add_element(&state, 1.0, 1.0, None),
                _ => {
                    let slot = index % state.elements.len().max(1);
                    let target = state.elements.get(slot).map(|e| e.id);
                    match target {
                        Some(id) => remove_element(&state, id),
                        None => state.clone(),
                    }
                }
            };
            let ids: HashSet<ElementId> = state.element_ids().collect();
            prop_assert_eq!(ids.len(), state.elements.len());
        }
    }
}
