// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response bodies of the parcel data service.

use serde::{Deserialize, Serialize};
use taxmap_core::{DataSourceInfo, SearchResult};

/// `GET /api/search` body. `results` is required so that an error payload
/// is not mistaken for a search without hits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

/// `GET /api/stats` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub total_parcels: usize,
    #[serde(default)]
    pub has_data: bool,
    /// Attribute keys of the first parcel, useful to spot schema drift.
    #[serde(default)]
    pub sample_properties: Vec<String>,
    #[serde(default)]
    pub data_source: DataSourceInfo,
}

/// `GET /api/refresh` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data_source: DataSourceInfo,
    #[serde(default)]
    pub parcel_count: usize,
}

/// `GET /health` body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub data_source: String,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
