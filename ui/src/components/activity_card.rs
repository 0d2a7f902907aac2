use api::ActivityRecord;
use dioxus::prelude::*;

use crate::store::use_catalog_store;
use crate::hooks::use_status::use_status;
use crate::sync;

/// A self-contained card for one activity: description, category when
/// present, schedule, remaining capacity, and the participant roster with a
/// removal affordance per row.
#[component]
pub fn ActivityCard(name: String, record: ActivityRecord) -> Element {
    let store = use_catalog_store();
    let status = use_status();

    let spots_left = record.spots_left();

    rsx! {
        article {
            class: "activity-card",
            h4 { "{name}" }
            p { "{record.description}" }
            if let Some(category) = record.category.as_deref().filter(|c| !c.is_empty()) {
                p {
                    strong { "Category: " }
                    "{category}"
                }
            }
            p {
                strong { "Schedule: " }
                "{record.schedule}"
            }
            p {
                strong { "Availability: " }
                "{spots_left} spots left"
            }
            div {
                class: "participants-container",
                if record.participants.is_empty() {
                    p { em { "No participants yet" } }
                } else {
                    h5 { "Participants:" }
                    ul {
                        class: "participants-list",
                        for email in record.participants.iter() {
                            li {
                                key: "{email}",
                                span { class: "participant-email", "{email}" }
                                button {
                                    class: "delete-btn",
                                    "aria-label": "Unregister {email} from {name}",
                                    onclick: {
                                        let activity = name.clone();
                                        let email = email.clone();
                                        move |_| {
                                            spawn(sync::unregister(
                                                store,
                                                status,
                                                activity.clone(),
                                                email.clone(),
                                            ));
                                        }
                                    },
                                    "✕"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
