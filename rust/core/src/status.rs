// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Data load status and the service's data-source report.

use serde::{Deserialize, Serialize};

/// Tag shown by the page's status indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusTag {
    Loaded,
    Error,
}

impl StatusTag {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusTag::Loaded => "loaded",
            StatusTag::Error => "error",
        }
    }
}

/// Where the service obtained its parcel data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    Remote,
    Local,
    Cached,
    None,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Data-source report published by the parcel service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSourceInfo {
    #[serde(default)]
    pub source: DataSource,
    #[serde(default)]
    pub loaded_at: Option<String>,
    #[serde(default)]
    pub parcel_count: usize,
    #[serde(default)]
    pub error: Option<String>,
}

/// Status message after a successful load.
pub fn loaded_message(parcel_count: usize) -> String {
    match parcel_count {
        0 => "No parcel data available yet".to_string(),
        1 => "Loaded 1 parcel".to_string(),
        n => format!("Loaded {n} parcels"),
    }
}
