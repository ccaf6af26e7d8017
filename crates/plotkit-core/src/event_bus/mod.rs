//! # Event Bus Module
//!
//! Broadcasts layout state changes to observers (renderer, element list,
//! logging) without the state engine knowing who is listening.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use plotkit_core::event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Commit]),
//!     |event| {
//!         if let LayoutEvent::Committed { snapshot, .. } = event {
//!             println!("{} elements", snapshot.elements.len());
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
