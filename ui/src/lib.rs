// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod compat;
mod components;
pub mod hooks;
mod screens;
pub mod store;
pub mod sync;
pub mod view;

use components::pico::Container;
use components::status_banner::StatusBanner;
use hooks::use_status::StatusNotifier;
use screens::activities::ActivitiesScreen;
use store::CatalogStore;

const APP_CSS: &str = r#"
    .filter-bar {
        display: grid;
        grid-template-columns: 2fr 1fr 1fr 1fr;
        gap: 1rem;
        align-items: end;
        margin-bottom: 1rem;
    }

    @media (max-width: 768px) {
        .filter-bar { grid-template-columns: 1fr; }
    }

    .activities-list {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
        gap: 1rem;
    }

    .activity-card {
        margin: 0;
        padding: 1rem;
    }

    .activity-card h4 { margin-bottom: 0.5rem; }
    .activity-card p { margin-bottom: 0.25rem; }

    .participants-container { margin-top: 0.75rem; }
    .participants-container h5 { margin-bottom: 0.25rem; }

    .participants-list {
        list-style: none;
        padding-left: 0;
        margin-bottom: 0;
    }

    .participants-list li {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 0.15rem 0;
    }

    .participant-email { overflow-wrap: anywhere; }

    .delete-btn {
        width: auto;
        margin: 0 0 0 0.5rem;
        padding: 0 0.4rem;
        background: none;
        border: none;
        color: var(--pico-color-red-500, #c62828);
        cursor: pointer;
        font-size: 0.9rem;
        line-height: 1.5;
    }

    .status-banner {
        padding: 0.75rem 1rem;
        border-radius: var(--pico-border-radius);
        margin-bottom: 1rem;
    }

    .status-banner.success {
        background-color: #e8f5e9;
        color: #1b5e20;
    }

    .status-banner.error {
        background-color: #ffebee;
        color: #b71c1c;
    }
"#;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{APP_CSS}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    let store = CatalogStore::provide();
    StatusNotifier::provide();

    // Initial synchronization. Later ones are triggered by the mutation
    // coordinator after a successful signup/unregister; control-input
    // changes re-derive the view without fetching.
    use_future(move || sync::synchronize(store));

    rsx! {
        Container {
            header {
                h1 { "Extracurricular Activities" }
                p { "Browse the catalog and sign up below." }
            }
            StatusBanner {}
            ActivitiesScreen {}
        }
    }
}
