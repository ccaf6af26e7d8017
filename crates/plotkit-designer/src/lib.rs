//! # PlotKit Designer
//!
//! The layout state engine: pure operations over `AppState`, the encodings
//! used to persist and share it, and the renderer that draws it.
//!
//! ## Architecture
//!
//! ```text
//! LayoutAction ──apply──> AppState ──> serialization (blob, share token)
//!                                  └─> renderer (DrawCommand list, image)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plotkit_designer::{render_commands, LayoutAction};
//! use plotkit_core::AppState;
//!
//! let state = AppState::new();
//! let state = LayoutAction::AddElement { width: 10.0, height: 20.0, name: None }.apply(&state);
//! let commands = render_commands(state.land_width, state.land_height, &state.elements, 5.0);
//! ```

pub mod font_manager;
pub mod interaction;
pub mod layout_state;
pub mod renderer;
pub mod serialization;

pub use interaction::{clamp_to_land, drop_position, element_summaries, finish_drag, ElementSummary};
pub use layout_state::{
    add_element, delete_layout, load_layout, move_element, remove_element, rename_element,
    resize_land, save_layout, set_new_element_size, LayoutAction, LayoutSelection,
    NEW_LAYOUT_SENTINEL, UNTITLED_LAYOUT_NAME,
};
pub use renderer::{
    dimension_labels, rasterize, render_commands, DrawCommand, LandEdge, RenderScale, RgbaColor,
};
pub use serialization::{
    decode_share_token, decode_state, encode_share_token, encode_state, share_link,
    STATE_QUERY_PARAM,
};
