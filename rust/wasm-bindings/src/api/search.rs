// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Live search: debouncing, requests and result activation

use gloo_timers::future::TimeoutFuture;
use js_sys::Promise;
use taxmap_core::{searchable_query, Completion, Error, RequestToken};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, spawn_local};

use super::loading::{js_token, resolve_text};
use super::{borrow, SharedSession, TaxMapApi};
use crate::bridge::DataBridge;
use crate::error::BindingError;
use crate::geojson::decode_search;
use crate::utils::{to_js, warn};

/// Issue a search for `input` and apply its response. `None` when the query
/// was too short to send.
async fn run_search(
    session: SharedSession,
    service: DataBridge,
    input: String,
) -> Result<Option<Completion>, BindingError> {
    let Some((token, query)) = borrow(&session)?.begin_search(&input) else {
        return Ok(None);
    };
    let outcome = resolve_text(service.search(&query))
        .await
        .and_then(|text| decode_search(&text));
    let completion = borrow(&session)?.complete_search(token, outcome);
    Ok(Some(completion))
}

#[wasm_bindgen]
impl TaxMapApi {
    /// Feed the search box's current text. Short queries clear the results
    /// immediately; longer ones are sent once typing pauses for the debounce
    /// interval, and only the latest keystroke's search is issued.
    #[wasm_bindgen(js_name = onSearchInput)]
    pub fn on_search_input(&self, input: String) -> Result<(), JsValue> {
        if searchable_query(&input).is_none() {
            self.debouncer.borrow_mut().cancel();
            borrow(&self.session)?.begin_search(&input);
            return Ok(());
        }

        let (generation, delay) = {
            let mut debouncer = self.debouncer.borrow_mut();
            (debouncer.trigger(), debouncer.delay())
        };
        let session = self.session.clone();
        let service = self.service.clone();
        let debouncer = self.debouncer.clone();

        spawn_local(async move {
            TimeoutFuture::new(u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)).await;
            if !debouncer.borrow().should_fire(generation) {
                return;
            }
            if let Err(err) = run_search(session, service, input).await {
                warn(&format!("taxmap: search not applied: {err}"));
            }
        });
        Ok(())
    }

    /// Search right away, bypassing the debounce. Resolves to `true` when the
    /// response was applied, `false` when it was stale or the query too short.
    #[wasm_bindgen(js_name = searchNow)]
    pub fn search_now(&self, input: String) -> Promise {
        self.debouncer.borrow_mut().cancel();
        let session = self.session.clone();
        let service = self.service.clone();

        future_to_promise(async move {
            let completion = run_search(session, service, input).await?;
            Ok(JsValue::from_bool(completion == Some(Completion::Applied)))
        })
    }

    /// Start a search driven by the page's own fetch. Returns `undefined`
    /// for queries that are too short, otherwise `{ token, query }`.
    #[wasm_bindgen(js_name = beginSearch)]
    pub fn begin_search(&self, input: &str) -> Result<JsValue, JsValue> {
        #[derive(serde::Serialize)]
        struct PendingSearch {
            token: u32,
            query: String,
        }

        match borrow(&self.session)?.begin_search(input) {
            Some((token, query)) => Ok(to_js(&PendingSearch {
                token: js_token(token),
                query,
            })
            .map_err(BindingError::from)?),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// Apply a `/api/search` body fetched by the page.
    #[wasm_bindgen(js_name = completeSearch)]
    pub fn complete_search(&self, token: u32, body: &str) -> Result<bool, JsValue> {
        let outcome = decode_search(body);
        let completion = borrow(&self.session)?.complete_search(RequestToken(u64::from(token)), outcome);
        Ok(completion == Completion::Applied)
    }

    #[wasm_bindgen(js_name = failSearch)]
    pub fn fail_search(&self, token: u32, message: &str) -> Result<bool, JsValue> {
        let outcome = Err(Error::Service(message.to_string()));
        let completion = borrow(&self.session)?.complete_search(RequestToken(u64::from(token)), outcome);
        Ok(completion == Completion::Applied)
    }

    /// Results currently listed, in server rank order.
    #[wasm_bindgen(getter)]
    pub fn results(&self) -> Result<JsValue, JsValue> {
        let session = borrow(&self.session)?;
        Ok(to_js(session.results()).map_err(BindingError::from)?)
    }

    /// Highlight the parcel of the result at `index` and recenter on it.
    /// Returns `false` when the result has no loaded parcel.
    #[wasm_bindgen(js_name = activateResult)]
    pub fn activate_result(&self, index: u32) -> Result<bool, JsValue> {
        let index = usize::try_from(index).unwrap_or(usize::MAX);
        Ok(borrow(&self.session)?.activate_result(index))
    }
}
