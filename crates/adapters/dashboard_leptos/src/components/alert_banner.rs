//! Per-row success and error banners.

use std::time::Duration;

use chargehub_app::services::alert::{AlertSlot, AlertView, flash};
use chargehub_domain::notification::{Notification, Polarity};
use leptos::prelude::*;

use crate::timer::BrowserTimer;

/// Reactive handle on one [`AlertSlot`].
#[derive(Debug, Clone, Copy)]
pub struct AlertSignal(RwSignal<AlertSlot>);

impl AlertSignal {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(AlertSlot::default()))
    }

    fn is_visible(self) -> bool {
        self.0.with(AlertSlot::is_visible)
    }

    fn message(self) -> String {
        self.0.with(|slot| slot.message().to_string())
    }
}

impl Default for AlertSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertView for AlertSignal {
    fn with_slot<R>(&self, f: impl FnOnce(&mut AlertSlot) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// The success and error slots of one table row.
#[derive(Debug, Clone, Copy)]
pub struct RowAlerts {
    pub success: AlertSignal,
    pub error: AlertSignal,
}

impl Default for RowAlerts {
    fn default() -> Self {
        Self::new()
    }
}

impl RowAlerts {
    #[must_use]
    pub fn new() -> Self {
        Self {
            success: AlertSignal::new(),
            error: AlertSignal::new(),
        }
    }

    /// Flash `notification` in the slot matching its polarity.
    pub async fn notify(self, notification: Notification, lifetime: Duration) {
        let slot = match notification.polarity {
            Polarity::Success => self.success,
            Polarity::Error => self.error,
        };
        flash(&slot, &BrowserTimer, lifetime, notification.message).await;
    }
}

/// A banner bound to an [`AlertSignal`]. Hidden while the slot is.
#[component]
pub fn AlertBanner(
    /// The slot to display.
    alert: AlertSignal,
    /// `alert-success` or `alert-error`.
    css_class: &'static str,
) -> impl IntoView {
    view! {
        <div
            class=css_class
            role="status"
            style:display=move || if alert.is_visible() { "block" } else { "none" }
        >
            {move || alert.message()}
        </div>
    }
}
