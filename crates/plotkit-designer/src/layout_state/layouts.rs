//! Saved layout snapshots.

use plotkit_core::{
    AppState, LayoutId, SavedLayout, DEFAULT_ELEMENT_HEIGHT, DEFAULT_ELEMENT_WIDTH,
    DEFAULT_LAND_HEIGHT, DEFAULT_LAND_WIDTH,
};

use super::LayoutSelection;

/// Name given to layouts saved without one.
pub const UNTITLED_LAYOUT_NAME: &str = "Untitled layout";

/// Snapshots the live land and elements as a new saved layout and makes it
/// the current one.
pub fn save_layout(state: &AppState, name: Option<&str>) -> AppState {
    let layout = SavedLayout {
        id: LayoutId::generate(),
        name: match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNTITLED_LAYOUT_NAME.to_string(),
        },
        land_width: state.land_width,
        land_height: state.land_height,
        elements: state.elements.clone(),
    };

    tracing::debug!(
        "Saving layout {} ({}) with {} elements",
        layout.id,
        layout.name,
        layout.elements.len()
    );

    let mut next = state.clone();
    next.current_layout_id = Some(layout.id.clone());
    next.saved_layouts.push(layout);
    next
}

/// Switches the live layout.
///
/// `New` resets land, elements and staged sizes to their defaults. A saved
/// id restores that snapshot; an unknown id leaves the state unchanged.
pub fn load_layout(state: &AppState, selection: &LayoutSelection) -> AppState {
    match selection {
        LayoutSelection::New => AppState {
            land_width: DEFAULT_LAND_WIDTH,
            land_height: DEFAULT_LAND_HEIGHT,
            elements: Vec::new(),
            current_layout_id: None,
            new_element_width: DEFAULT_ELEMENT_WIDTH,
            new_element_height: DEFAULT_ELEMENT_HEIGHT,
            ..state.clone()
        },
        LayoutSelection::Saved(id) => match state.saved_layout(id) {
            Some(layout) => AppState {
                land_width: layout.land_width,
                land_height: layout.land_height,
                elements: layout.elements.clone(),
                current_layout_id: Some(layout.id.clone()),
                ..state.clone()
            },
            None => {
                tracing::warn!("Load ignored, no saved layout {}", id);
                state.clone()
            }
        },
    }
}

/// Removes a saved layout and clears the current selection.
///
/// The selection is cleared even when another layout was current.
pub fn delete_layout(state: &AppState, id: Option<&LayoutId>) -> AppState {
    let Some(id) = id else {
        return state.clone();
    };

    let mut next = state.clone();
    next.saved_layouts.retain(|l| &l.id != id);
    next.current_layout_id = None;
    next
}
