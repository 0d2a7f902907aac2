use dioxus::prelude::*;

use crate::components::pico::Input;
use crate::components::pico::Select;

/// The search/filter/sort toolbar. Each control owns its own signal; the
/// screen reads them when deriving the view. Changing a control never
/// triggers a fetch, only a re-derive.
#[component]
pub fn FilterBar(
    search: Signal<String>,
    category: Signal<String>,
    availability: Signal<String>,
    sort: Signal<String>,
    categories: Vec<String>,
) -> Element {
    rsx! {
        div {
            class: "filter-bar",
            Input {
                label: "Search".to_string(),
                name: "search",
                placeholder: "Search activities...".to_string(),
                value: "{search}",
                on_input: move |evt: FormEvent| search.set(evt.value()),
            }
            Select {
                label: "Category".to_string(),
                name: "category-filter",
                value: "{category}",
                on_change: move |evt: FormEvent| category.set(evt.value()),
                option { value: "", "All Categories" }
                for name in categories {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            Select {
                label: "Availability".to_string(),
                name: "availability-filter",
                value: "{availability}",
                on_change: move |evt: FormEvent| availability.set(evt.value()),
                option { value: "", "Any" }
                option { value: "available", "Spots available" }
                option { value: "full", "Full" }
            }
            Select {
                label: "Sort by".to_string(),
                name: "sort-select",
                value: "{sort}",
                on_change: move |evt: FormEvent| sort.set(evt.value()),
                option { value: "", "Default order" }
                option { value: "name-asc", "Name (A-Z)" }
                option { value: "name-desc", "Name (Z-A)" }
                option { value: "time-asc", "Time (earliest first)" }
                option { value: "time-desc", "Time (latest first)" }
            }
        }
    }
}
