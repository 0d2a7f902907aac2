use dioxus::prelude::*;

use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::components::pico::Select;
use crate::store::use_catalog_store;
use crate::hooks::use_status::use_status;
use crate::sync;

/// The signup form: email plus an activity selector.
///
/// The selector is repopulated from every catalog name regardless of the
/// active filters, so an activity hidden from the list can still be joined.
/// On success the coordinator reports true and both fields reset.
#[component]
pub fn SignupForm(activity_names: Vec<String>) -> Element {
    let store = use_catalog_store();
    let status = use_status();

    let mut email = use_signal(String::new);
    let mut selected_activity = use_signal(String::new);

    rsx! {
        Card {
            h3 { "Sign Up" }
            form {
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let activity = selected_activity();
                    let address = email();
                    if activity.is_empty() || address.is_empty() {
                        return;
                    }
                    spawn(async move {
                        if sync::signup(store, status, activity, address).await {
                            email.set(String::new());
                            selected_activity.set(String::new());
                        }
                    });
                },
                Input {
                    label: "Email".to_string(),
                    name: "email",
                    input_type: "email".to_string(),
                    placeholder: "you@school.edu".to_string(),
                    value: "{email}",
                    required: true,
                    on_input: move |evt: FormEvent| email.set(evt.value()),
                }
                Select {
                    label: "Activity".to_string(),
                    name: "activity",
                    value: "{selected_activity}",
                    on_change: move |evt: FormEvent| selected_activity.set(evt.value()),
                    option { value: "", "-- Select an activity --" }
                    for name in activity_names {
                        option { key: "{name}", value: "{name}", "{name}" }
                    }
                }
                Button {
                    "Sign Up"
                }
            }
        }
    }
}
