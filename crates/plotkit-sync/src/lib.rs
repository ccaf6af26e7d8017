//! # PlotKit Sync
//!
//! Keeps the live layout state, the durable store and the shareable link
//! consistent.
//!
//! ```text
//! dispatch(action) ─> reducer ─> commit ─┬─> durable store (retried)
//!                                        ├─> location ?state=<token>
//!                                        └─> EventBus ─> renderer, lists
//! ```

pub mod error;
pub mod observers;
pub mod session;

pub use error::{SyncError, SyncResult};
pub use observers::render_on_commit;
pub use session::{LayoutSession, SyncOptions};
