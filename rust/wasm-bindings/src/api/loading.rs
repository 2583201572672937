// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parcel layer loading

use js_sys::Promise;
use taxmap_core::{Completion, Error, ParcelCollection, RequestToken};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

use super::{borrow, TaxMapApi};
use crate::utils::js_error_message;

/// Await a bridge request and return its body as JSON text. Bridges may
/// resolve with the raw response text or with an already parsed object.
pub(super) async fn resolve_text(request: Result<Promise, JsValue>) -> taxmap_core::Result<String> {
    let failed = |e: JsValue| Error::Service(js_error_message(&e));
    let value = JsFuture::from(request.map_err(failed)?).await.map_err(failed)?;
    if let Some(text) = value.as_string() {
        return Ok(text);
    }
    js_sys::JSON::stringify(&value)
        .map(String::from)
        .map_err(failed)
}

pub(super) fn js_token(token: RequestToken) -> u32 {
    u32::try_from(token.0).unwrap_or(u32::MAX)
}

#[wasm_bindgen]
impl TaxMapApi {
    /// Fetch parcels through the data bridge and show them.
    ///
    /// Resolves to `true` when the response was applied and `false` when a
    /// later load overtook it. Load failures do not reject: the status line
    /// reports them and the placeholder boundary is drawn.
    #[wasm_bindgen(js_name = loadParcels)]
    pub fn load_parcels(&self) -> Result<Promise, JsValue> {
        let token = borrow(&self.session)?.begin_load();
        let session = self.session.clone();
        let request = self.service.fetch_parcels();

        Ok(future_to_promise(async move {
            let outcome = resolve_text(request)
                .await
                .and_then(|text| ParcelCollection::from_json(&text));
            let completion = borrow(&session)?.complete_load(token, outcome);
            Ok(JsValue::from_bool(completion == Completion::Applied))
        }))
    }

    /// Start a load driven by the page's own fetch. Pass the returned token
    /// to `completeLoad` or `failLoad`.
    #[wasm_bindgen(js_name = beginLoad)]
    pub fn begin_load(&self) -> Result<u32, JsValue> {
        Ok(js_token(borrow(&self.session)?.begin_load()))
    }

    /// Apply a GeoJSON FeatureCollection fetched by the page. Malformed JSON
    /// is reported like any other load failure.
    #[wasm_bindgen(js_name = completeLoad)]
    pub fn complete_load(&self, token: u32, geojson: &str) -> Result<bool, JsValue> {
        let outcome = ParcelCollection::from_json(geojson);
        let completion = borrow(&self.session)?.complete_load(RequestToken(u64::from(token)), outcome);
        Ok(completion == Completion::Applied)
    }

    #[wasm_bindgen(js_name = failLoad)]
    pub fn fail_load(&self, token: u32, message: &str) -> Result<bool, JsValue> {
        let outcome = Err(Error::Service(message.to_string()));
        let completion = borrow(&self.session)?.complete_load(RequestToken(u64::from(token)), outcome);
        Ok(completion == Completion::Applied)
    }
}
