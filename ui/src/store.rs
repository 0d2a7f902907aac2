//! The catalog store: the client's single source of truth.
//!
//! Only the synchronization path writes here, and always by replacing the
//! whole value, so no reader can observe a partially updated catalog. All
//! mutation effects become visible exclusively through a replace after a
//! fresh fetch.

use api::Catalog;
use dioxus::prelude::*;

/// What the client currently knows about the server's catalog.
#[derive(Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Initial fetch still in flight.
    #[default]
    Loading,
    /// The payload of the last successful fetch, verbatim.
    Ready(Catalog),
    /// The last fetch failed; the view shows a placeholder instead of
    /// whatever was displayed before.
    Failed,
}

/// Handle to the reactive catalog state, provided as a context at the app
/// root. `Copy` so event handlers can capture it freely.
#[derive(Clone, Copy)]
pub struct CatalogStore {
    state: Signal<CatalogState>,
}

impl CatalogStore {
    /// Creates the store and provides it to the component subtree. Call once,
    /// at the app root.
    pub fn provide() -> Self {
        let state = use_signal(CatalogState::default);
        use_context_provider(|| CatalogStore { state })
    }

    /// Read-only signal for subscribing in components.
    pub fn state(&self) -> Signal<CatalogState> {
        self.state
    }

    /// Replaces the catalog wholesale with a fresh fetch payload.
    pub fn replace(&mut self, catalog: Catalog) {
        self.state.set(CatalogState::Ready(catalog));
    }

    /// Records a failed fetch.
    pub fn mark_failed(&mut self) {
        self.state.set(CatalogState::Failed);
    }
}

pub fn use_catalog_store() -> CatalogStore {
    use_context::<CatalogStore>()
}
