use chargehub_app::config::ClientConfig;
use leptos::prelude::*;

use crate::api;
use crate::components::{ChargeTable, Loading};

/// Charges page listing every charge with its controls.
#[component]
pub fn Charges() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();

    let charges = LocalResource::new(move || {
        let config = config.clone();
        async move { api::charge_service(&config).list_charges().await }
    });

    view! {
        <div>
            <h1>"Gestion des charges"</h1>
            <Suspense fallback=move || view! { <Loading message="Chargement des charges\u{2026}"/> }>
                {move || {
                    charges.read().as_ref().map(|result| match result {
                        Ok(charge_list) => view! {
                            <ChargeTable charges=charge_list.clone()/>
                        }.into_any(),
                        Err(err) => {
                            leptos::logging::warn!("failed to load charges: {err:?}");
                            view! {
                                <p class="error">{"Impossible de charger les charges: "} {err.to_string()}</p>
                            }.into_any()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
