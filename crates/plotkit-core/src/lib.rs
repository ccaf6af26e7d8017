//! # PlotKit Core
//!
//! Core types and utilities for PlotKit.
//! Provides the layout document model, the error types shared by every
//! crate, and the event bus used to broadcast committed state.

pub mod error;
pub mod event_bus;
pub mod model;

pub use error::{DecodeError, Error, Result};

pub use event_bus::{
    EventBus, EventCategory, EventFilter, LayoutEvent, StateSource, SubscriptionId,
};

pub use model::{
    AppState, Element, ElementId, LayoutId, SavedLayout, DEFAULT_ELEMENT_HEIGHT,
    DEFAULT_ELEMENT_WIDTH, DEFAULT_LAND_HEIGHT, DEFAULT_LAND_WIDTH,
};
