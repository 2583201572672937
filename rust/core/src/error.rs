// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for tax map operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or querying parcel data
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid GeoJSON: {0}")]
    InvalidGeoJson(#[from] serde_json::Error),

    #[error("Unknown parcel: {0}")]
    UnknownParcel(String),

    #[error("Parcel service error: {0}")]
    Service(String),
}
