//! Charge table component: one row per charge with a rename form and an
//! on/off toggle.

use chargehub_app::config::ClientConfig;
use chargehub_app::services::charge_service::{
    reconcile_etat, rename_notification, toggle_notification,
};
use chargehub_domain::charge::{Charge, Etat};
use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::alert_banner::{AlertBanner, RowAlerts};
use super::etat_badge::EtatBadge;
use crate::api;

/// A table displaying a list of charges.
#[component]
pub fn ChargeTable(
    /// The list of charges to display.
    charges: Vec<Charge>,
) -> impl IntoView {
    if charges.is_empty() {
        view! {
            <p>"Aucune charge configurée."</p>
        }
        .into_any()
    } else {
        view! {
            <table>
                <thead>
                    <tr>
                        <th>"Nom"</th>
                        <th>"Type"</th>
                        <th>"Puissance"</th>
                        <th>"État"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {charges.into_iter().map(|charge| {
                        view! {
                            <ChargeRow charge/>
                        }
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        }
        .into_any()
    }
}

/// A single row in the charge table.
///
/// The row owns the last state the server confirmed; the toggle link always
/// targets its negation.
#[component]
fn ChargeRow(
    /// The charge to display.
    charge: Charge,
) -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let endpoints = config.endpoints();
    let lifetime = config.notification_lifetime();

    let id = charge.id;
    let kind = charge.kind.unwrap_or_else(|| "\u{2014}".to_string());
    let power = charge
        .nominal_power
        .map_or_else(|| "\u{2014}".to_string(), |watts| format!("{watts} W"));

    let etat = RwSignal::new(charge.etat);
    let alerts = RowAlerts::new();
    let name_input = NodeRef::<html::Input>::new();

    let submit_name = {
        let id = id.clone();
        let config = config.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let raw = name_input
                .get_untracked()
                .map(|input| input.value())
                .unwrap_or_default();
            let id = id.clone();
            let config = config.clone();
            spawn_local(async move {
                let result = api::charge_service(&config).submit_name(&id, &raw).await;
                alerts.notify(rename_notification(&result), lifetime).await;
            });
        }
    };

    let toggle = {
        let id = id.clone();
        move |ev: MouseEvent| {
            ev.prevent_default();
            let target = etat.get_untracked().toggled();
            let id = id.clone();
            let config = config.clone();
            spawn_local(async move {
                let result = api::charge_service(&config).toggle(&id, target).await;
                etat.update(|current| *current = reconcile_etat(*current, &result));
                alerts.notify(toggle_notification(&result), lifetime).await;
            });
        }
    };

    let href = {
        let id = id.clone();
        move || endpoints.etat(&id, etat.get().toggled())
    };
    let label = move || etat.get().action_label();
    let badge: Signal<Etat> = etat.into();

    view! {
        <tr>
            <td>
                <form class="update-charge-name" data-charge-id=id.to_string() on:submit=submit_name>
                    <input type="text" name="nom" value=charge.name node_ref=name_input/>
                    <button type="submit">"Renommer"</button>
                </form>
            </td>
            <td>{kind}</td>
            <td>{power}</td>
            <td>
                <EtatBadge etat=badge/>
            </td>
            <td>
                <a class="toggle-state" data-charge-id=id.to_string() href=href on:click=toggle>
                    {label}
                </a>
                <AlertBanner alert=alerts.success css_class="alert-success"/>
                <AlertBanner alert=alerts.error css_class="alert-error"/>
            </td>
        </tr>
    }
}
