//! Ready-made bus observers.

use plotkit_core::{EventBus, EventCategory, EventFilter, SubscriptionId};
use plotkit_designer::renderer::{render_commands, DrawCommand};

/// Re-renders on every restore and successful commit.
///
/// `sink` receives the full command list for the new snapshot at `scale`
/// pixels per meter. Failed commits leave the previous drawing in place.
pub fn render_on_commit<F>(bus: &EventBus, scale: f64, sink: F) -> SubscriptionId
where
    F: Fn(Vec<DrawCommand>) + Send + Sync + 'static,
{
    bus.subscribe(
        EventFilter::Categories(vec![EventCategory::Startup, EventCategory::Commit]),
        move |event| {
            if let Some(state) = event.snapshot() {
                sink(render_commands(
                    state.land_width,
                    state.land_height,
                    &state.elements,
                    scale,
                ));
            }
        },
    )
}
