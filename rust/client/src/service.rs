// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parcel data service REST client.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use taxmap_core::{DataSourceInfo, ParcelCollection, ParcelDataService, ParcelFeature, SearchResult};

use crate::config::Config;
use crate::error::ClientError;
use crate::types::{HealthResponse, RefreshResponse, SearchResponse, StatsResponse};

/// REST client for the parcel data service.
#[derive(Debug, Clone)]
pub struct HttpParcelService {
    base_url: Url,
    http: reqwest::Client,
}

impl HttpParcelService {
    /// Create a client for the service described by `config`.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let base_url = Url::parse(config.api_url.trim())
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{}: {e}", config.api_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidBaseUrl(config.api_url.clone()));
        }

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { base_url, http })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `<base>/<segments...>`; segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Fetch and decode a JSON body. `None` for 404.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, ClientError> {
        tracing::debug!(url = %url, "GET");
        let resp = self.http.get(url.clone()).send().await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp.bytes().await?;
        Ok(Some(serde_json::from_slice(&body)?))
    }

    /// Like [`Self::get_json`] but a 404 is an error.
    async fn get_required<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        let url_text = url.to_string();
        self.get_json(url).await?.ok_or(ClientError::Status {
            status: StatusCode::NOT_FOUND.as_u16(),
            url: url_text,
        })
    }

    /// `GET /api/parcels`
    pub async fn parcels(&self) -> Result<ParcelCollection, ClientError> {
        let collection: ParcelCollection = self.get_required(self.endpoint(&["api", "parcels"])).await?;
        tracing::info!(parcels = collection.len(), "Fetched parcel layer");
        Ok(collection)
    }

    /// `GET /api/search?q=`; results are returned in server rank order.
    pub async fn search_parcels(&self, query: &str) -> Result<Vec<SearchResult>, ClientError> {
        let mut url = self.endpoint(&["api", "search"]);
        url.query_pairs_mut().append_pair("q", query);
        let body: SearchResponse = self.get_required(url).await?;
        tracing::debug!(query = %query, hits = body.results.len(), "Search completed");
        Ok(body.results)
    }

    /// `GET /api/parcel/<id>`; `None` when the service does not know the id.
    pub async fn parcel(&self, id: &str) -> Result<Option<ParcelFeature>, ClientError> {
        self.get_json(self.endpoint(&["api", "parcel", id.trim()])).await
    }

    /// `GET /api/stats`
    pub async fn stats(&self) -> Result<StatsResponse, ClientError> {
        self.get_required(self.endpoint(&["api", "stats"])).await
    }

    /// `GET /api/data-source`
    pub async fn data_source(&self) -> Result<DataSourceInfo, ClientError> {
        self.get_required(self.endpoint(&["api", "data-source"])).await
    }

    /// `GET /api/refresh` - ask the service to reload its upstream data.
    pub async fn refresh(&self) -> Result<RefreshResponse, ClientError> {
        let body: RefreshResponse = self.get_required(self.endpoint(&["api", "refresh"])).await?;
        tracing::info!(
            success = body.success,
            parcels = body.parcel_count,
            source = ?body.data_source.source,
            "Service data refreshed"
        );
        Ok(body)
    }

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.get_required(self.endpoint(&["health"])).await
    }
}

impl ParcelDataService for HttpParcelService {
    async fn fetch_parcels(&self) -> taxmap_core::Result<ParcelCollection> {
        Ok(self.parcels().await?)
    }

    async fn search(&self, query: &str) -> taxmap_core::Result<Vec<SearchResult>> {
        Ok(self.search_parcels(query).await?)
    }
}
