// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Behaviour when the parcel service cannot be reached.

use std::collections::HashMap;

use taxmap_client::{ClientError, Config, HttpParcelService};
use taxmap_core::{ParcelDataService, Error};

fn offline_config() -> Config {
    let vars: HashMap<&str, &str> = [
        ("TAXMAP_API_URL", "http://127.0.0.1:1"),
        ("TAXMAP_TIMEOUT_SECS", "2"),
    ]
    .into_iter()
    .collect();
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    let service = HttpParcelService::new(&offline_config()).unwrap();
    let err = service.health().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn test_trait_maps_into_service_error() {
    let service = HttpParcelService::new(&offline_config()).unwrap();
    match service.fetch_parcels().await {
        Err(Error::Service(message)) => assert!(message.starts_with("Request failed")),
        other => panic!("expected service error, got {other:?}"),
    }
}
