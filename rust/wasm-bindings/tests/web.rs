// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Browser-side tests; run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use js_sys::{Array, Function, Object, Reflect};
use taxmap_wasm::{normalize_attributes, popup_for, version, TaxMapApi};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn properties(pairs: &[(&str, &str)]) -> JsValue {
    let object = Object::new();
    for (key, value) in pairs {
        Reflect::set(&object, &JsValue::from_str(key), &JsValue::from_str(value)).unwrap();
    }
    object.into()
}

#[wasm_bindgen_test]
fn test_version_is_package_version() {
    assert_eq!(version(), env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen_test]
fn test_normalize_attributes_returns_rows() {
    let details = normalize_attributes(properties(&[("MAP_LOT", "12-34"), ("OWNER", "Jane Doe")]), None).unwrap();
    assert_eq!(Reflect::get(&details, &"kind".into()).unwrap(), "fields");

    let rows = js_sys::Array::from(&Reflect::get(&details, &"value".into()).unwrap());
    let first = rows.get(0);
    assert_eq!(Reflect::get(&first, &"label".into()).unwrap(), "Map/Lot");
    assert_eq!(Reflect::get(&first, &"value".into()).unwrap(), "12-34");
}

#[wasm_bindgen_test]
fn test_empty_record_is_placeholder() {
    let details = normalize_attributes(properties(&[]), Some("compact".into())).unwrap();
    assert_eq!(Reflect::get(&details, &"kind".into()).unwrap(), "placeholder");
    assert_eq!(Reflect::get(&details, &"value".into()).unwrap(), "No details available");
}

#[wasm_bindgen_test]
fn test_popup_escapes_owner() {
    let html = popup_for(properties(&[("Owner", "<b>Doe</b>")]), Some("compact".into())).unwrap();
    assert!(html.contains("&lt;b&gt;Doe&lt;/b&gt;"));
    assert!(normalize_attributes(properties(&[]), Some("newest".into())).is_err());
}

const LAYER: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-69.2, 44.7]},
     "properties": {"MAP_LOT": "R01-002", "OWNER": "Jane Doe"}},
    {"type": "Feature", "geometry": {"type": "Point", "coordinates": [-69.3, 44.8]},
     "properties": {"MAP_LOT": "R01-003", "OWNER": "John Roe"}}
]}"#;

const SEARCH: &str = r#"{"results": [{"id": "R01-003", "owner": "John Roe"}]}"#;

/// A bridge object whose methods append `[name, ...args]` to its `calls` array.
fn recorder(methods: &[&str]) -> Object {
    let object = Object::new();
    Reflect::set(&object, &"calls".into(), &Array::new()).unwrap();
    for name in methods {
        let body = format!("this.calls.push(['{name}', ...args]); if (this.on_{name}) this.on_{name}();");
        let method = Function::new_with_args("...args", &body);
        Reflect::set(&object, &JsValue::from_str(name), &method).unwrap();
    }
    object
}

fn map_bridge() -> Object {
    recorder(&[
        "replaceLayer",
        "setFeatureStyle",
        "bindPopup",
        "showHighlight",
        "clearHighlight",
        "setView",
        "fitBounds",
        "showPlaceholderBoundary",
    ])
}

fn page_bridge() -> Object {
    recorder(&["showDetails", "setStatus", "showSearchResults", "showSearchMessage"])
}

/// Data bridge answering every request with canned bodies.
fn data_bridge() -> Object {
    let object = Object::new();
    Reflect::set(&object, &"calls".into(), &Array::new()).unwrap();
    Reflect::set(&object, &"layerBody".into(), &LAYER.into()).unwrap();
    Reflect::set(&object, &"searchBody".into(), &SEARCH.into()).unwrap();
    let fetch = Function::new_no_args("this.calls.push(['fetchParcels']); return Promise.resolve(this.layerBody);");
    let search = Function::new_with_args(
        "query",
        "this.calls.push(['search', query]); return Promise.resolve(this.searchBody);",
    );
    Reflect::set(&object, &"fetchParcels".into(), &fetch).unwrap();
    Reflect::set(&object, &"search".into(), &search).unwrap();
    object
}

/// Recorded calls of `name`, each as its argument list.
fn calls(bridge: &Object, name: &str) -> Vec<Array> {
    let recorded = Array::from(&Reflect::get(bridge, &"calls".into()).unwrap());
    recorded
        .iter()
        .map(|call| Array::from(&call))
        .filter(|call| call.get(0) == name)
        .map(|call| call.slice(1, call.length()))
        .collect()
}

fn viewer(map: &Object, page: &Object, data: &Object, debounce_ms: f64) -> TaxMapApi {
    let options = Object::new();
    Reflect::set(&options, &"debounceMs".into(), &JsValue::from_f64(debounce_ms)).unwrap();
    TaxMapApi::new(
        map.clone().unchecked_into(),
        page.clone().unchecked_into(),
        data.clone().unchecked_into(),
        options.into(),
    )
    .unwrap()
}

#[wasm_bindgen_test]
async fn test_load_parcels_applies_layer() {
    let (map, page, data) = (map_bridge(), page_bridge(), data_bridge());
    let api = viewer(&map, &page, &data, 20.0);

    let applied = JsFuture::from(api.load_parcels().unwrap()).await.unwrap();
    assert_eq!(applied, JsValue::TRUE);
    assert_eq!(api.parcel_count().unwrap(), 2);
    assert_eq!(calls(&data, "fetchParcels").len(), 1);
    assert_eq!(calls(&map, "replaceLayer").len(), 1);

    let status = calls(&page, "setStatus");
    assert_eq!(status.last().unwrap().get(0), "loaded");
}

#[wasm_bindgen_test]
async fn test_search_input_is_debounced() {
    let (map, page, data) = (map_bridge(), page_bridge(), data_bridge());
    let api = viewer(&map, &page, &data, 20.0);
    JsFuture::from(api.load_parcels().unwrap()).await.unwrap();

    api.on_search_input("di".into()).unwrap();
    api.on_search_input("dix".into()).unwrap();
    api.on_search_input("dixmont".into()).unwrap();
    TimeoutFuture::new(120).await;

    let searches = calls(&data, "search");
    assert_eq!(searches.len(), 1);
    assert_eq!(searches[0].get(0), "dixmont");
    assert_eq!(Array::from(&api.results().unwrap()).length(), 1);

    api.on_search_input("d".into()).unwrap();
    TimeoutFuture::new(60).await;
    assert_eq!(calls(&data, "search").len(), 1);
    assert_eq!(Array::from(&api.results().unwrap()).length(), 0);
}

#[wasm_bindgen_test]
fn test_reentrant_call_is_busy() {
    let (map, page, data) = (map_bridge(), page_bridge(), data_bridge());
    let api = Rc::new(viewer(&map, &page, &data, 20.0));
    let reentry: Rc<RefCell<Option<String>>> = Rc::default();

    let callback = {
        let api = api.clone();
        let reentry = reentry.clone();
        Closure::<dyn FnMut()>::new(move || {
            let message = match api.begin_load() {
                Ok(_) => "accepted".to_string(),
                Err(err) => String::from(err.unchecked_into::<js_sys::Error>().message()),
            };
            *reentry.borrow_mut() = Some(message);
        })
    };
    Reflect::set(&page, &"on_setStatus".into(), callback.as_ref()).unwrap();

    let token = api.begin_load().unwrap();
    assert!(api.complete_load(token, LAYER).unwrap());
    assert_eq!(reentry.borrow().as_deref(), Some("Viewer is busy"));
    assert_eq!(api.parcel_count().unwrap(), 2);

    Reflect::delete_property(&page, &"on_setStatus".into()).unwrap();
    drop(callback);
}
