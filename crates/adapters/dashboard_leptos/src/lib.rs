use leptos::prelude::*;

pub mod api;
mod components;
pub mod config;
mod pages;
pub mod timer;

use pages::Charges;

/// Root application component.
///
/// Loads the client configuration once and provides it to every row.
#[component]
pub fn App() -> impl IntoView {
    provide_context(config::load());

    view! {
        <main>
            <Charges/>
        </main>
    }
}
