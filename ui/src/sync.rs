//! Synchronization and mutation flows.
//!
//! The catalog becomes visible to the user only through [`synchronize`]:
//! fetch, replace the store wholesale, let the reactive view re-derive.
//! Mutations never patch the store themselves; a successful signup or
//! unregister just triggers another full synchronization. Overlapping flows
//! need no locking because every store write is a whole-value replace; the
//! last fetch to complete wins.

use api::ApiError;
use dioxus_logger::tracing;

use crate::hooks::use_status::StatusKind;
use crate::hooks::use_status::StatusNotifier;
use crate::store::CatalogStore;

/// Fallback when an error response carries no detail text.
const GENERIC_ERROR: &str = "An error occurred";

/// Fetches the catalog and replaces the store. On failure the store moves to
/// its failed state and the view falls back to the load-failure placeholder;
/// there is no automatic retry.
pub async fn synchronize(mut store: CatalogStore) {
    match api::activities().await {
        Ok(catalog) => store.replace(catalog),
        Err(e) => {
            tracing::error!("failed to load activities: {e}");
            store.mark_failed();
        }
    }
}

/// Signs `email` up for `activity`. Returns true on success so the form can
/// reset its fields.
pub async fn signup(
    store: CatalogStore,
    mut status: StatusNotifier,
    activity: String,
    email: String,
) -> bool {
    match api::signup(&activity, &email).await {
        Ok(message) => {
            status.show(message, StatusKind::Success);
            synchronize(store).await;
            true
        }
        Err(ApiError::Http { detail, .. }) => {
            status.show(
                detail.unwrap_or_else(|| GENERIC_ERROR.to_string()),
                StatusKind::Error,
            );
            false
        }
        Err(e) => {
            tracing::error!("signup request failed: {e}");
            status.show("Failed to sign up. Please try again.", StatusKind::Error);
            false
        }
    }
}

/// Removes `email` from `activity`'s participant list.
pub async fn unregister(
    store: CatalogStore,
    mut status: StatusNotifier,
    activity: String,
    email: String,
) {
    match api::unregister(&activity, &email).await {
        Ok(message) => {
            status.show(message, StatusKind::Success);
            synchronize(store).await;
        }
        Err(ApiError::Http { detail, .. }) => {
            status.show(
                detail.unwrap_or_else(|| GENERIC_ERROR.to_string()),
                StatusKind::Error,
            );
        }
        Err(e) => {
            tracing::error!("unregister request failed: {e}");
            status.show("Failed to unregister. Please try again.", StatusKind::Error);
        }
    }
}
