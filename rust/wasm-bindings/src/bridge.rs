// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Page-supplied bridge objects and their adapters to the core traits.

use js_sys::Promise;
use serde::Serialize;
use taxmap_core::{
    Bounds, DetailsContent, FeatureKey, FeatureStyle, LonLat, MapSurface, PageShell, ParcelFeature,
    ParcelLayer, SearchResult, StatusTag,
};
use wasm_bindgen::prelude::*;

use crate::geojson::{feature_geojson, layer_geojson};
use crate::utils::{to_js, warn};

#[wasm_bindgen(typescript_custom_section)]
const TS_BRIDGES: &'static str = r#"
export type LatLngBounds = [[number, number], [number, number]];

export interface PathStyle {
  color: string;
  weight: number;
  fillColor: string;
  fillOpacity: number;
}

export type DetailsContent =
  | { kind: "fields"; value: { label: string; value: string }[] }
  | { kind: "placeholder"; value: string };

export interface MapBridge {
  replaceLayer(collection: object): void;
  setFeatureStyle(key: number, style: PathStyle): void;
  bindPopup(key: number, html: string): void;
  showHighlight(key: number, feature: object, style: PathStyle): void;
  clearHighlight(): void;
  setView(lat: number, lng: number): void;
  fitBounds(bounds: LatLngBounds): void;
  showPlaceholderBoundary(bounds: LatLngBounds): void;
}

export interface PageBridge {
  showDetails(content: DetailsContent): void;
  setStatus(tag: "loaded" | "error", message: string): void;
  showSearchResults(results: object[]): void;
  showSearchMessage(message: string): void;
}

export interface DataBridge {
  fetchParcels(): Promise<string | object>;
  search(query: string): Promise<string | object>;
}
"#;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(typescript_type = "MapBridge")]
    #[derive(Clone)]
    pub type MapBridge;

    #[wasm_bindgen(method, js_name = replaceLayer)]
    fn replace_layer(this: &MapBridge, collection: &JsValue);

    #[wasm_bindgen(method, js_name = setFeatureStyle)]
    fn set_feature_style(this: &MapBridge, key: u32, style: &JsValue);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &MapBridge, key: u32, html: &str);

    #[wasm_bindgen(method, js_name = showHighlight)]
    fn show_highlight(this: &MapBridge, key: u32, feature: &JsValue, style: &JsValue);

    #[wasm_bindgen(method, js_name = clearHighlight)]
    fn clear_highlight(this: &MapBridge);

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &MapBridge, lat: f64, lng: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &MapBridge, bounds: &JsValue);

    #[wasm_bindgen(method, js_name = showPlaceholderBoundary)]
    fn show_placeholder_boundary(this: &MapBridge, bounds: &JsValue);

    #[wasm_bindgen(typescript_type = "PageBridge")]
    #[derive(Clone)]
    pub type PageBridge;

    #[wasm_bindgen(method, js_name = showDetails)]
    fn show_details(this: &PageBridge, content: &JsValue);

    #[wasm_bindgen(method, js_name = setStatus)]
    fn set_status(this: &PageBridge, tag: &str, message: &str);

    #[wasm_bindgen(method, js_name = showSearchResults)]
    fn show_search_results(this: &PageBridge, results: &JsValue);

    #[wasm_bindgen(method, js_name = showSearchMessage)]
    fn show_search_message(this: &PageBridge, message: &str);

    #[wasm_bindgen(typescript_type = "DataBridge")]
    #[derive(Clone)]
    pub type DataBridge;

    #[wasm_bindgen(method, catch, js_name = fetchParcels)]
    pub(crate) fn fetch_parcels(this: &DataBridge) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub(crate) fn search(this: &DataBridge, query: &str) -> Result<Promise, JsValue>;
}

/// Convert for a bridge call; conversion failures are logged and the call
/// is skipped.
fn convert<T: Serialize + ?Sized>(what: &str, value: &T) -> Option<JsValue> {
    match to_js(value) {
        Ok(js) => Some(js),
        Err(err) => {
            warn(&format!("taxmap: could not convert {what}: {err}"));
            None
        }
    }
}

fn js_key(key: FeatureKey) -> u32 {
    u32::try_from(key.0).unwrap_or(u32::MAX)
}

/// [`MapSurface`] backed by the page's map bridge.
pub(crate) struct JsMapSurface {
    bridge: MapBridge,
}

impl JsMapSurface {
    pub fn new(bridge: MapBridge) -> Self {
        Self { bridge }
    }
}

impl MapSurface for JsMapSurface {
    fn replace_layer(&mut self, layer: &ParcelLayer) {
        if let Some(collection) = convert("parcel layer", &layer_geojson(layer)) {
            self.bridge.replace_layer(&collection);
        }
    }

    fn set_feature_style(&mut self, key: FeatureKey, style: FeatureStyle) {
        if let Some(path) = convert("path style", &style.path_style()) {
            self.bridge.set_feature_style(js_key(key), &path);
        }
    }

    fn bind_popup(&mut self, key: FeatureKey, html: &str) {
        self.bridge.bind_popup(js_key(key), html);
    }

    fn show_highlight(&mut self, key: FeatureKey, feature: &ParcelFeature) {
        let feature = convert("highlighted parcel", &feature_geojson(key, feature));
        let style = convert("path style", &FeatureStyle::Highlight.path_style());
        if let (Some(feature), Some(style)) = (feature, style) {
            self.bridge.show_highlight(js_key(key), &feature, &style);
        }
    }

    fn clear_highlight(&mut self) {
        self.bridge.clear_highlight();
    }

    fn set_view(&mut self, center: LonLat) {
        self.bridge.set_view(center.lat, center.lon);
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        if let Some(pairs) = convert("bounds", &bounds.to_lat_lng_pairs()) {
            self.bridge.fit_bounds(&pairs);
        }
    }

    fn show_placeholder_boundary(&mut self, bounds: &Bounds) {
        if let Some(pairs) = convert("placeholder bounds", &bounds.to_lat_lng_pairs()) {
            self.bridge.show_placeholder_boundary(&pairs);
        }
    }
}

/// [`PageShell`] backed by the page's DOM bridge.
pub(crate) struct JsPageShell {
    bridge: PageBridge,
}

impl JsPageShell {
    pub fn new(bridge: PageBridge) -> Self {
        Self { bridge }
    }
}

impl PageShell for JsPageShell {
    fn show_details(&mut self, content: &DetailsContent) {
        if let Some(content) = convert("parcel details", content) {
            self.bridge.show_details(&content);
        }
    }

    fn set_status(&mut self, tag: StatusTag, message: &str) {
        self.bridge.set_status(tag.as_str(), message);
    }

    fn show_search_results(&mut self, results: &[SearchResult]) {
        if let Some(results) = convert("search results", results) {
            self.bridge.show_search_results(&results);
        }
    }

    fn show_search_message(&mut self, message: &str) {
        self.bridge.show_search_message(message);
    }
}
