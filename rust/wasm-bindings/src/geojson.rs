// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON shapes exchanged with the page.

use serde::Deserialize;
use serde_json::{json, Value};
use taxmap_core::{
    AliasPriority, Bounds, Error, FeatureKey, ParcelFeature, ParcelLayer, Result, SearchResult,
    DEFAULT_DEBOUNCE, DEFAULT_PLACEHOLDER,
};

/// A parcel as a GeoJSON `Feature`; `id` is its [`FeatureKey`].
pub(crate) fn feature_geojson(key: FeatureKey, feature: &ParcelFeature) -> Value {
    json!({
        "type": "Feature",
        "id": key.0,
        "geometry": feature.geometry,
        "properties": feature.raw_attributes,
    })
}

/// The whole layer as a GeoJSON `FeatureCollection`, in key order.
pub(crate) fn layer_geojson(layer: &ParcelLayer) -> Value {
    let features: Vec<Value> = layer
        .iter()
        .map(|(key, feature)| feature_geojson(key, feature))
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
}

/// Decode a `/api/search` body. Bare result arrays are accepted too. A body
/// without `results` is an error, carrying the service's `error` text if any.
pub(crate) fn decode_search(json: &str) -> Result<Vec<SearchResult>> {
    let results = match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => Value::Array(items),
        Value::Object(mut fields) => match fields.remove("results") {
            Some(results) => results,
            None => {
                let message = fields
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("response has no results");
                return Err(Error::Service(message.to_string()));
            }
        },
        _ => return Err(Error::Service("response has no results".to_string())),
    };
    Ok(serde_json::from_value(results)?)
}

/// Options object passed to the `TaxMapApi` constructor.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ViewerOptions {
    pub alias_priority: Option<String>,
    pub placeholder_bounds: Option<[f64; 4]>,
    pub debounce_ms: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResolvedOptions {
    pub priority: AliasPriority,
    pub placeholder: Bounds,
    pub debounce: std::time::Duration,
}

impl ViewerOptions {
    pub fn resolve(self) -> std::result::Result<ResolvedOptions, String> {
        let priority = match self.alias_priority {
            Some(text) => text.parse()?,
            None => AliasPriority::default(),
        };
        Ok(ResolvedOptions {
            priority,
            placeholder: Bounds::from_extent(self.placeholder_bounds.unwrap_or(DEFAULT_PLACEHOLDER)),
            debounce: self
                .debounce_ms
                .map(|ms| std::time::Duration::from_millis(u64::from(ms)))
                .unwrap_or(DEFAULT_DEBOUNCE),
        })
    }
}
