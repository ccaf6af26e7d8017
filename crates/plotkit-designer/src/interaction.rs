//! Helpers for the interaction layer.
//!
//! Dragging is a view concern: nothing is dispatched while a gesture is in
//! progress. When the drag ends, the dropped pixel offset is converted back
//! to meters and sent as a single `MoveElement`.

use crate::layout_state::LayoutAction;
use crate::renderer::format_meters;
use plotkit_core::{AppState, Element, ElementId};

/// Converts a dropped pixel offset to land coordinates in meters.
pub fn drop_position(px: f64, py: f64, scale: f64) -> (f64, f64) {
    (px / scale, py / scale)
}

/// Keeps an element of `width` x `height` inside the land, the way drag
/// bounds do. The state itself never clamps.
pub fn clamp_to_land(state: &AppState, width: f64, height: f64, x: f64, y: f64) -> (f64, f64) {
    let max_x = (state.land_width - width).max(0.0);
    let max_y = (state.land_height - height).max(0.0);
    (x.clamp(0.0, max_x), y.clamp(0.0, max_y))
}

/// Builds the move for a finished drag of element `id`.
///
/// Returns `None` when the element no longer exists.
pub fn finish_drag(
    state: &AppState,
    id: ElementId,
    px: f64,
    py: f64,
    scale: f64,
) -> Option<LayoutAction> {
    let element = state.element(id)?;
    let (x, y) = drop_position(px, py, scale);
    let (x, y) = clamp_to_land(state, element.width, element.height, x, y);
    Some(LayoutAction::MoveElement { id, x, y })
}

/// One row of the element list.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementSummary {
    pub id: ElementId,
    pub name: String,
    /// `"{w}m x {h}m at ({x}m, {y}m)"`, position rounded to whole meters.
    pub detail: String,
}

impl ElementSummary {
    pub fn from_element(element: &Element) -> Self {
        Self {
            id: element.id,
            name: element.name.clone(),
            detail: format!(
                "{}m x {}m at ({}m, {}m)",
                format_meters(element.width),
                format_meters(element.height),
                format_meters(round_half_up(element.x)),
                format_meters(round_half_up(element.y)),
            ),
        }
    }
}

/// Summaries of every element, in list order.
pub fn element_summaries(state: &AppState) -> Vec<ElementSummary> {
    state
        .elements
        .iter()
        .map(ElementSummary::from_element)
        .collect()
}

// Rounds .5 toward +inf like the list display does.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
