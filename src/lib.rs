//! # PlotKit
//!
//! A land layout planner: rectangular elements placed on a plot of land,
//! saved as named layouts and shared as self-contained links.
//!
//! ## Architecture
//!
//! PlotKit is organized as a workspace with multiple crates:
//!
//! 1. **plotkit-core** - State model, errors, layout events
//! 2. **plotkit-designer** - State operations, encodings, renderer, drag math
//! 3. **plotkit-settings** - Configuration files and durable stores
//! 4. **plotkit-sync** - The layout session: reconciliation and commits
//! 5. **plotkit** - Command line front end that integrates all crates

pub mod cli;
pub mod commands;

pub use plotkit_core::{
    AppState, DecodeError, Element, ElementId, Error, EventBus, EventFilter, LayoutEvent,
    LayoutId, Result, SavedLayout, StateSource,
};
pub use plotkit_designer::{
    element_summaries, rasterize, render_commands, LayoutAction, LayoutSelection, RenderScale,
};
pub use plotkit_settings::{Config, DurableStore, FileStore, MemoryStore};
pub use plotkit_sync::{LayoutSession, SyncError, SyncOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Version line shown by `plotkit --version`
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr with pretty formatting, keeping stdout for results
/// - RUST_LOG environment variable support, INFO when unset
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
