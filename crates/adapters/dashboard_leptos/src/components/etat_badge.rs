//! ON/OFF badge for a charge's state.

use chargehub_domain::charge::{BadgeColor, Etat};
use leptos::prelude::*;

const BADGE_BASE: &str = "px-2 inline-flex text-xs leading-5 font-semibold rounded-full";

fn badge_class(etat: Etat) -> String {
    let color = match etat.badge_color() {
        BadgeColor::Green => "bg-green-100 text-green-800",
        BadgeColor::Red => "bg-red-100 text-red-800",
    };
    format!("{BADGE_BASE} {color}")
}

/// Green `ON` or red `OFF` pill.
#[component]
pub fn EtatBadge(
    /// Last confirmed state.
    #[prop(into)]
    etat: Signal<Etat>,
) -> impl IntoView {
    view! {
        <span class="state-span">
            <span class=move || badge_class(etat.get())>{move || etat.get().badge()}</span>
        </span>
    }
}
