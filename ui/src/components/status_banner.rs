use dioxus::prelude::*;

use crate::hooks::use_status::use_status;

/// The transient success/error banner. Renders nothing while no message is
/// active; visibility is driven entirely by the notifier's signal.
#[component]
pub fn StatusBanner() -> Element {
    let status = use_status();
    let current = status.current();

    rsx! {
        if let Some(message) = current() {
            div {
                class: "{message.kind.css_class()}",
                role: "status",
                "{message.text}"
            }
        }
    }
}
