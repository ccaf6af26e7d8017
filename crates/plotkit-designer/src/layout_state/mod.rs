//! Layout state operations.
//!
//! Every operation takes the current `AppState` by reference and returns a
//! new one; nothing here mutates its input or fails. Unknown ids are
//! silently ignored since they only come from stale UI state or tampered
//! links.
//!
//! This module is split into submodules:
//! - `elements`: add, remove, move, rename placed elements
//! - `land`: land size and staged element size
//! - `layouts`: save, load, delete snapshots

mod elements;
mod land;
mod layouts;

pub use elements::{add_element, move_element, remove_element, rename_element};
pub use land::{resize_land, set_new_element_size};
pub use layouts::{delete_layout, load_layout, save_layout, UNTITLED_LAYOUT_NAME};

use plotkit_core::{AppState, ElementId, LayoutId};

/// Sentinel value of the layout picker meaning "start a new layout".
pub const NEW_LAYOUT_SENTINEL: &str = "new";

/// Target of a `load_layout` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LayoutSelection {
    /// Reset to an empty default layout.
    New,
    /// Restore a saved snapshot.
    Saved(LayoutId),
}

impl LayoutSelection {
    /// Selection matching the state's current layout, `New` when unsaved.
    pub fn current(state: &AppState) -> Self {
        match &state.current_layout_id {
            Some(id) => LayoutSelection::Saved(id.clone()),
            None => LayoutSelection::New,
        }
    }
}

impl From<&str> for LayoutSelection {
    fn from(value: &str) -> Self {
        if value == NEW_LAYOUT_SENTINEL {
            LayoutSelection::New
        } else {
            LayoutSelection::Saved(LayoutId::from(value))
        }
    }
}

impl From<LayoutId> for LayoutSelection {
    fn from(id: LayoutId) -> Self {
        LayoutSelection::Saved(id)
    }
}

impl std::fmt::Display for LayoutSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutSelection::New => f.write_str(NEW_LAYOUT_SENTINEL),
            LayoutSelection::Saved(id) => f.write_str(id.as_str()),
        }
    }
}

/// A state transition requested by the interaction layer.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutAction {
    AddElement {
        width: f64,
        height: f64,
        name: Option<String>,
    },
    RemoveElement(ElementId),
    MoveElement {
        id: ElementId,
        x: f64,
        y: f64,
    },
    RenameElement {
        id: ElementId,
        name: String,
    },
    ResizeLand {
        width: f64,
        height: f64,
    },
    SetNewElementSize {
        width: f64,
        height: f64,
    },
    SaveLayout {
        name: Option<String>,
    },
    LoadLayout(LayoutSelection),
    DeleteLayout(Option<LayoutId>),
}

impl LayoutAction {
    /// Adds an element using the state's staged dimensions.
    pub fn add_staged(state: &AppState, name: Option<String>) -> Self {
        LayoutAction::AddElement {
            width: state.new_element_width,
            height: state.new_element_height,
            name,
        }
    }

    /// Applies the action, producing the next state.
    pub fn apply(&self, state: &AppState) -> AppState {
        match self {
            LayoutAction::AddElement {
                width,
                height,
                name,
            } => add_element(state, *width, *height, name.as_deref()),
            LayoutAction::RemoveElement(id) => remove_element(state, *id),
            LayoutAction::MoveElement { id, x, y } => move_element(state, *id, *x, *y),
            LayoutAction::RenameElement { id, name } => rename_element(state, *id, name),
            LayoutAction::ResizeLand { width, height } => resize_land(state, *width, *height),
            LayoutAction::SetNewElementSize { width, height } => {
                set_new_element_size(state, *width, *height)
            }
            LayoutAction::SaveLayout { name } => save_layout(state, name.as_deref()),
            LayoutAction::LoadLayout(selection) => load_layout(state, selection),
            LayoutAction::DeleteLayout(id) => delete_layout(state, id.as_ref()),
        }
    }

    /// Returns the name of the action for display and logs.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutAction::AddElement { .. } => "Add Element",
            LayoutAction::RemoveElement(_) => "Remove Element",
            LayoutAction::MoveElement { .. } => "Move Element",
            LayoutAction::RenameElement { .. } => "Rename Element",
            LayoutAction::ResizeLand { .. } => "Resize Land",
            LayoutAction::SetNewElementSize { .. } => "Set New Element Size",
            LayoutAction::SaveLayout { .. } => "Save Layout",
            LayoutAction::LoadLayout(_) => "Load Layout",
            LayoutAction::DeleteLayout(_) => "Delete Layout",
        }
    }
}
