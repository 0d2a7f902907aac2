//! Transient status banner state with a fixed auto-hide delay.

use std::time::Duration;

use dioxus::prelude::*;

/// How long a status message stays visible.
pub const STATUS_HIDE_DELAY: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Success => "status-banner success",
            StatusKind::Error => "status-banner error",
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Handle to the status banner, provided as a context at the app root.
///
/// `show` makes the message visible synchronously and schedules a hide after
/// [`STATUS_HIDE_DELAY`]. Each call takes a ticket from a monotonic counter;
/// a hide task only clears the banner if its ticket is still the latest, so
/// a newer message is never blanked by an older message's timer.
#[derive(Clone, Copy)]
pub struct StatusNotifier {
    current: Signal<Option<StatusMessage>>,
    latest_ticket: Signal<u64>,
}

impl StatusNotifier {
    /// Creates the notifier and provides it to the component subtree. Call
    /// once, at the app root.
    pub fn provide() -> Self {
        let current = use_signal(|| None);
        let latest_ticket = use_signal(|| 0u64);
        use_context_provider(|| StatusNotifier {
            current,
            latest_ticket,
        })
    }

    /// Read-only signal for the banner component.
    pub fn current(&self) -> Signal<Option<StatusMessage>> {
        self.current
    }

    pub fn show(&mut self, text: impl Into<String>, kind: StatusKind) {
        let ticket = self.latest_ticket.peek().wrapping_add(1);
        self.latest_ticket.set(ticket);
        self.current.set(Some(StatusMessage {
            text: text.into(),
            kind,
        }));

        let latest_ticket = self.latest_ticket;
        let mut current = self.current;
        spawn(async move {
            crate::compat::sleep(STATUS_HIDE_DELAY).await;
            if hide_still_applies(ticket, *latest_ticket.peek()) {
                current.set(None);
            }
        });
    }
}

/// A hide task fires only for the message that scheduled it.
fn hide_still_applies(ticket: u64, latest_ticket: u64) -> bool {
    ticket == latest_ticket
}

pub fn use_status() -> StatusNotifier {
    use_context::<StatusNotifier>()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two messages shown back to back: the first timer's hide must not blank
    // the second, still-relevant message; the second timer's hide must.
    #[test]
    fn second_show_outlives_first_hide_deadline() {
        let first_ticket = 1u64;
        let second_ticket = 2u64;
        let latest = second_ticket;

        assert!(!hide_still_applies(first_ticket, latest));
        assert!(hide_still_applies(second_ticket, latest));
    }

    #[test]
    fn kinds_map_to_distinct_banner_classes() {
        assert_ne!(
            StatusKind::Success.css_class(),
            StatusKind::Error.css_class()
        );
    }
}
