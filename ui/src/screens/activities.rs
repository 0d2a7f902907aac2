//=============================================================================
// File: src/screens/activities.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::components::empty_state::EmptyState;
use crate::components::filter_bar::FilterBar;
use crate::components::pico::Card;
use crate::components::signup_form::SignupForm;
use crate::store::use_catalog_store;
use crate::store::CatalogState;
use crate::view;
use crate::view::AvailabilityFilter;
use crate::view::SortOption;

/// The catalog screen: toolbar, activity list, signup form.
///
/// Everything below is re-derived from the store and the four control
/// signals on every render; nothing here caches a projection of the catalog.
#[component]
pub fn ActivitiesScreen() -> Element {
    let store = use_catalog_store();

    // Control state. Each control owns its field; changing one re-derives
    // the view without touching the network.
    let search = use_signal(String::new);
    let category = use_signal(String::new);
    let availability = use_signal(String::new);
    let sort = use_signal(String::new);

    let state = store.state();
    let state = state.read();

    // The selector and category options come from the full catalog, never
    // the filtered view. On failure or an empty catalog both collapse to
    // their default-only option.
    let categories = match &*state {
        CatalogState::Ready(catalog) => view::build_categories(catalog),
        _ => Vec::new(),
    };
    let activity_names = match &*state {
        CatalogState::Ready(catalog) => view::selector_names(catalog),
        _ => Vec::new(),
    };

    let controls = view::ViewControls {
        search: search(),
        category: category(),
        availability: AvailabilityFilter::from_value(&availability()),
        sort: SortOption::from_value(&sort()),
    };

    let list = match &*state {
        CatalogState::Loading => rsx! {
            p { "Loading..." }
            progress {}
        },
        CatalogState::Failed => rsx! {
            EmptyState {
                title: "Failed to load activities.".to_string(),
                description: "Please try again later.".to_string(),
            }
        },
        CatalogState::Ready(catalog) if catalog.is_empty() => rsx! {
            EmptyState {
                title: "No activities available.".to_string(),
            }
        },
        CatalogState::Ready(catalog) => {
            let entries = view::derive_view(catalog, &controls);
            if entries.is_empty() {
                rsx! {
                    EmptyState {
                        title: "No activities match your filters.".to_string(),
                    }
                }
            } else {
                rsx! {
                    div {
                        class: "activities-list",
                        for (name, record) in entries {
                            ActivityCard {
                                key: "{name}",
                                name: name.clone(),
                                record: record.clone(),
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        Card {
            h3 { "Upcoming Activities" }
            FilterBar {
                search,
                category,
                availability,
                sort,
                categories,
            }
            {list}
        }
        SignupForm {
            activity_names,
        }
    }
}
