//! HTTP API client wrapping `gloo-net` for calls to `/api/charges/*`.

use chargehub_app::config::ClientConfig;
use chargehub_app::endpoints::Endpoints;
use chargehub_app::ports::ChargeApi;
use chargehub_app::response;
use chargehub_app::services::charge_service::ChargeService;
use chargehub_domain::charge::{Charge, ChargeName, Etat};
use chargehub_domain::error::{ChargeHubError, TransportError};
use chargehub_domain::id::ChargeId;
use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct RenameRequest<'a> {
    nom: &'a str,
}

#[derive(Deserialize)]
struct EtatResponse {
    etat: Etat,
}

fn transport(err: gloo_net::Error) -> ChargeHubError {
    TransportError::new(err.to_string()).into()
}

/// Check the HTTP response status and extract an error if non-2xx.
async fn check_response(resp: Response) -> Result<Response, ChargeHubError> {
    if resp.ok() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(response::rejection(resp.status(), &body).into())
}

/// [`ChargeApi`] over `fetch`.
#[derive(Debug, Clone, Default)]
pub struct HttpChargeApi {
    endpoints: Endpoints,
}

impl HttpChargeApi {
    #[must_use]
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }
}

impl ChargeApi for HttpChargeApi {
    async fn list(&self) -> Result<Vec<Charge>, ChargeHubError> {
        let resp = Request::get(&self.endpoints.charges())
            .send()
            .await
            .map_err(transport)?;
        let charges: Vec<Charge> = check_response(resp).await?.json().await.map_err(transport)?;
        Ok(charges)
    }

    async fn rename(&self, id: &ChargeId, name: &ChargeName) -> Result<(), ChargeHubError> {
        let resp = Request::post(&self.endpoints.rename(id))
            .json(&RenameRequest {
                nom: name.as_str(),
            })
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_response(resp).await?;
        Ok(())
    }

    async fn set_etat(&self, id: &ChargeId, target: Etat) -> Result<Etat, ChargeHubError> {
        let resp = Request::put(&self.endpoints.etat(id, target))
            .send()
            .await
            .map_err(transport)?;
        let body: EtatResponse = check_response(resp).await?.json().await.map_err(transport)?;
        Ok(body.etat)
    }
}

/// Build a [`ChargeService`] talking to the configured API.
#[must_use]
pub fn charge_service(config: &ClientConfig) -> ChargeService<HttpChargeApi> {
    ChargeService::new(HttpChargeApi::new(config.endpoints()))
}
