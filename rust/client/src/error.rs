// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the parcel service client.

use thiserror::Error;

/// Client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid service URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<ClientError> for taxmap_core::Error {
    fn from(err: ClientError) -> Self {
        taxmap_core::Error::Service(err.to_string())
    }
}
