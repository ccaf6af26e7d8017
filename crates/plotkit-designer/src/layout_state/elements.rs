//! Element placement operations.

use plotkit_core::{AppState, Element, ElementId};

/// Appends a new element at the land origin.
///
/// An absent or empty name becomes `"Element N"`, N being the new length of
/// the element list.
pub fn add_element(state: &AppState, width: f64, height: f64, name: Option<&str>) -> AppState {
    let id = ElementId::next(state.element_ids());
    let name = match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("Element {}", state.elements.len() + 1),
    };

    tracing::debug!("Adding element {} ({}) {}x{}", id, name, width, height);

    let mut next = state.clone();
    next.elements.push(Element::new(id, name, width, height));
    next
}

/// Removes the element with `id`, if present.
pub fn remove_element(state: &AppState, id: ElementId) -> AppState {
    let mut next = state.clone();
    next.elements.retain(|e| e.id != id);
    if next.elements.len() == state.elements.len() {
        tracing::debug!("Remove ignored, no element {}", id);
    }
    next
}

/// Replaces the position of the element with `id`. No clamping.
pub fn move_element(state: &AppState, id: ElementId, x: f64, y: f64) -> AppState {
    update_element(state, id, |element| {
        element.x = x;
        element.y = y;
    })
}

/// Replaces the name of the element with `id`; empty names are stored as-is.
pub fn rename_element(state: &AppState, id: ElementId, name: &str) -> AppState {
    update_element(state, id, |element| element.name = name.to_string())
}

fn update_element<F>(state: &AppState, id: ElementId, update: F) -> AppState
where
    F: FnOnce(&mut Element),
{
    let mut next = state.clone();
    match next.elements.iter_mut().find(|e| e.id == id) {
        Some(element) => update(element),
        None => tracing::debug!("Update ignored, no element {}", id),
    }
    next
}
