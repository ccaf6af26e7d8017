//! Layout session.
//!
//! `LayoutSession` owns the single live `AppState`. It is created once by
//! `open`, which reconciles the two persisted sources, and afterwards only
//! changes through `dispatch`.

use std::sync::Arc;

use plotkit_core::{AppState, EventBus, EventFilter, LayoutEvent, StateSource, SubscriptionId};
use plotkit_designer::layout_state::{LayoutAction, LayoutSelection};
use plotkit_designer::serialization::{
    decode_share_token, decode_state, encode_share_token, encode_state, set_share_token,
    share_link, share_token_from_url,
};
use plotkit_settings::{Config, DurableStore};
use url::Url;

use crate::error::{SyncError, SyncResult};

/// Keys and retry policy used by a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOptions {
    /// Durable store slot.
    pub storage_key: String,
    /// Query parameter carrying the share token.
    pub share_param: String,
    /// Extra durable write attempts after a failure.
    pub commit_retries: u32,
}

impl SyncOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            storage_key: config.storage.key.clone(),
            share_param: config.share.param.clone(),
            commit_retries: config.sync.commit_retries,
        }
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// The live layout plus its two persisted mirrors.
pub struct LayoutSession<S: DurableStore> {
    state: AppState,
    store: S,
    location: Url,
    bus: Arc<EventBus>,
    options: SyncOptions,
    source: StateSource,
}

impl<S: DurableStore> LayoutSession<S> {
    /// Opens a session with a private event bus.
    pub fn open(store: S, location: Url, options: SyncOptions) -> Self {
        Self::open_with_bus(store, location, options, Arc::new(EventBus::new()))
    }

    /// Opens a session, reconciling the initial state:
    ///
    /// 1. a decodable share token in `location` wins
    /// 2. else a decodable durable blob is adopted and re-published to the
    ///    location; if it has saved layouts but none selected, the first
    ///    one is loaded
    /// 3. else defaults
    ///
    /// Undecodable sources count as absent. A `current_layout_id` naming no
    /// saved layout is cleared before the state is adopted.
    pub fn open_with_bus(
        store: S,
        location: Url,
        options: SyncOptions,
        bus: Arc<EventBus>,
    ) -> Self {
        let mut session = Self {
            state: AppState::new(),
            store,
            location,
            bus,
            options,
            source: StateSource::Defaults,
        };

        if let Some(state) = session.shared_state() {
            session.state = without_dangling_selection(state);
            session.source = StateSource::SharedLink;
        } else if let Some(state) = session.stored_state() {
            session.state = without_dangling_selection(state);
            session.source = StateSource::DurableStore;
            session.republish();
        }

        tracing::info!(
            "Layout session started from {} ({} elements, {} saved layouts)",
            session.source,
            session.state.elements.len(),
            session.state.saved_layouts.len()
        );
        session.bus.publish(LayoutEvent::Restored {
            source: session.source,
            snapshot: session.state.clone(),
        });

        if session.source == StateSource::DurableStore {
            session.select_first_layout();
        }

        session
    }

    fn shared_state(&self) -> Option<AppState> {
        let token = share_token_from_url(&self.location, &self.options.share_param)?;
        match decode_share_token(&token) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring undecodable shared state: {}", e);
                None
            }
        }
    }

    fn stored_state(&self) -> Option<AppState> {
        let blob = match self.store.read(&self.options.storage_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable {}: {}", self.store.name(), e);
                return None;
            }
        };
        match decode_state(&blob) {
            Ok(state) => Some(state),
            Err(e) => {
                tracing::warn!("Ignoring undecodable stored state: {}", e);
                None
            }
        }
    }

    /// Mirrors the live state into the location without touching the store.
    fn republish(&mut self) {
        match encode_share_token(&self.state) {
            Ok(token) => set_share_token(&mut self.location, &self.options.share_param, &token),
            Err(e) => tracing::warn!("Could not publish restored state: {}", e),
        }
    }

    fn select_first_layout(&mut self) {
        if self.state.current_layout_id.is_some() {
            return;
        }
        let Some(first) = self.state.saved_layouts.first() else {
            return;
        };

        let action = LayoutAction::LoadLayout(LayoutSelection::Saved(first.id.clone()));
        if let Err(e) = self.dispatch(action) {
            tracing::warn!("Could not auto-select first saved layout: {}", e);
        }
    }

    /// Applies `action` and commits the result.
    ///
    /// On error nothing changes: state, location and store keep their
    /// previous values.
    pub fn dispatch(&mut self, action: LayoutAction) -> SyncResult<&AppState> {
        let next = action.apply(&self.state);
        self.commit(action.name(), next)?;
        Ok(&self.state)
    }

    fn commit(&mut self, action: &str, next: AppState) -> SyncResult<()> {
        let blob = encode_state(&next)?;
        let token = encode_share_token(&next)?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.store.write(&self.options.storage_key, &blob) {
                Ok(()) => break,
                Err(e) if attempt <= self.options.commit_retries => {
                    tracing::warn!("{} write attempt {} failed: {}", self.store.name(), attempt, e);
                }
                Err(e) => {
                    tracing::warn!("Commit of {} abandoned: {}", action, e);
                    self.bus.publish(LayoutEvent::CommitFailed {
                        action: action.to_string(),
                        reason: e.to_string(),
                    });
                    return Err(SyncError::Persist {
                        attempts: attempt,
                        source: e,
                    });
                }
            }
        }

        set_share_token(&mut self.location, &self.options.share_param, &token);
        self.state = next;

        tracing::debug!(
            "Committed {} ({} elements, {} bytes)",
            action,
            self.state.elements.len(),
            blob.len()
        );
        self.bus.publish(LayoutEvent::Committed {
            action: action.to_string(),
            snapshot: self.state.clone(),
        });
        Ok(())
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Which source the session started from.
    pub fn source(&self) -> StateSource {
        self.source
    }

    /// The application's location, carrying the current share token.
    pub fn location(&self) -> &Url {
        &self.location
    }

    /// A clean link reproducing the current state for another viewer.
    pub fn share_link(&self) -> SyncResult<Url> {
        let token = encode_share_token(&self.state)?;
        Ok(share_link(&self.location, &self.options.share_param, &token))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    pub fn options(&self) -> &SyncOptions {
        &self.options
    }

    /// Registers an observer of committed state.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(LayoutEvent) + Send + Sync + 'static,
    {
        self.bus.subscribe(filter, handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(id)
    }
}

fn without_dangling_selection(mut state: AppState) -> AppState {
    if let Some(id) = &state.current_layout_id {
        if state.saved_layout(id).is_none() {
            tracing::warn!("Clearing selection of missing layout {}", id);
            state.current_layout_id = None;
        }
    }
    state
}

impl<S: DurableStore> std::fmt::Debug for LayoutSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSession")
            .field("store", &self.store.name())
            .field("source", &self.source)
            .field("elements", &self.state.elements.len())
            .field("location", &self.location.as_str())
            .finish()
    }
}
