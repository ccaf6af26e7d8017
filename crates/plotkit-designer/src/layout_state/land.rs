//! Land and staged element dimensions.

use plotkit_core::AppState;

/// Replaces the land size. Elements outside the new bounds are kept as-is.
pub fn resize_land(state: &AppState, width: f64, height: f64) -> AppState {
    AppState {
        land_width: width,
        land_height: height,
        ..state.clone()
    }
}

/// Replaces the dimensions staged for the next `add_element`.
pub fn set_new_element_size(state: &AppState, width: f64, height: f64) -> AppState {
    AppState {
        new_element_width: width,
        new_element_height: height,
        ..state.clone()
    }
}
