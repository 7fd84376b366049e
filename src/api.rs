//! Collection tracker REST client

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::catalog::OwnershipUpdate;
use crate::error::ApiError;
use crate::filter::FilterState;
use crate::record::PokemonRecord;

pub const DEFAULT_SERVER: &str = "http://localhost:5000";

/// Server base URL plus the user whose collection is shown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub base_url: String,
    pub username: String,
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: username.into(),
        }
    }

    fn user_root(&self) -> String {
        format!(
            "{}/api/{}/pokemon",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.username)
        )
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER, "")
    }
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    pokemon: Vec<PokemonRecord>,
}

pub fn catalog_url(endpoint: &Endpoint, filters: &FilterState) -> String {
    format!("{}/get{}", endpoint.user_root(), filters.query_string())
}

pub fn update_url(endpoint: &Endpoint) -> String {
    format!("{}/update", endpoint.user_root())
}

/// Form body for the update endpoint: `data=<json>`.
pub fn update_form(update: &OwnershipUpdate) -> Result<[(&'static str, String); 1], ApiError> {
    Ok([("data", serde_json::to_string(update)?)])
}

/// Fetch the catalog for the current filters.
pub async fn fetch_catalog(
    endpoint: &Endpoint,
    filters: &FilterState,
) -> Result<Vec<PokemonRecord>, ApiError> {
    let url = catalog_url(endpoint, filters);
    tracing::debug!(%url, "fetching catalog");

    let result = get_catalog(&url).await;
    match &result {
        Ok(records) => tracing::debug!(count = records.len(), "catalog loaded"),
        Err(err) => log_failure("catalog fetch", &url, err),
    }
    result
}

/// Send a sparse ownership update. The response body is ignored.
pub async fn update_ownership(
    endpoint: &Endpoint,
    update: &OwnershipUpdate,
) -> Result<(), ApiError> {
    let url = update_url(endpoint);
    tracing::debug!(
        %url,
        name = %update.name,
        flag = update.flag.key(),
        value = update.value,
        "sending update"
    );

    let result = put_update(&url, update).await;
    if let Err(err) = &result {
        log_failure("ownership update", &url, err);
    }
    result
}

async fn get_catalog(url: &str) -> Result<Vec<PokemonRecord>, ApiError> {
    let response = http_client().get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    let body: CatalogResponse = response.json().await?;
    Ok(body.pokemon)
}

async fn put_update(url: &str, update: &OwnershipUpdate) -> Result<(), ApiError> {
    let form = update_form(update)?;
    let response = http_client().put(url).form(&form).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status(status));
    }
    Ok(())
}

fn log_failure(what: &str, url: &str, err: &ApiError) {
    match err.status() {
        Some(status) => tracing::warn!(status = status.as_u16(), %url, "{what} failed: {err}"),
        None => tracing::warn!(%url, "{what} failed: {err}"),
    }
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
