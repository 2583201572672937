// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer session
//!
//! Ties the selection controller to the parcel data service. Every load and
//! search is split into a `begin_*` step that issues a [`RequestToken`] and a
//! `complete_*` step that applies the response only if its token is still the
//! latest of its kind. Front ends with their own fetch machinery (the browser
//! bindings) drive the two steps directly; native callers use the async
//! helpers that run both around a [`ParcelDataService`].

use crate::aliases::AliasPriority;
use crate::bounds::Bounds;
use crate::error::Result;
use crate::feature::ParcelCollection;
use crate::search::{searchable_query, RequestSequencer, RequestToken, SearchResult};
use crate::selection::{MapSurface, PageShell, SelectionController};
use crate::status::{loaded_message, StatusTag};

/// Inline message when a search matched nothing.
pub const NO_RESULTS: &str = "No matching parcels";

/// Source of parcel data and search results.
#[allow(async_fn_in_trait)]
pub trait ParcelDataService {
    /// `GET /api/parcels`
    async fn fetch_parcels(&self) -> Result<ParcelCollection>;

    /// `GET /api/search?q=`
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}

/// Outcome of completing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request of the same kind was issued meanwhile.
    Stale,
}

pub struct ViewerSession<M, P> {
    controller: SelectionController<M, P>,
    loads: RequestSequencer,
    searches: RequestSequencer,
    results: Vec<SearchResult>,
    placeholder: Bounds,
}

impl<M: MapSurface, P: PageShell> ViewerSession<M, P> {
    /// `placeholder` is the outline shown when parcel data cannot be loaded.
    pub fn new(surface: M, shell: P, priority: AliasPriority, placeholder: Bounds) -> Self {
        Self {
            controller: SelectionController::new(surface, shell, priority),
            loads: RequestSequencer::new(),
            searches: RequestSequencer::new(),
            results: Vec::new(),
            placeholder,
        }
    }

    pub fn controller(&self) -> &SelectionController<M, P> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController<M, P> {
        &mut self.controller
    }

    /// Results currently listed in the results panel.
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn begin_load(&mut self) -> RequestToken {
        self.loads.issue()
    }

    /// Apply a finished parcel load. Failures leave the map usable: the status
    /// indicator reports the error and the placeholder outline is drawn.
    pub fn complete_load(&mut self, token: RequestToken, outcome: Result<ParcelCollection>) -> Completion {
        if !self.loads.is_current(token) {
            tracing::debug!(token = token.0, "Discarding stale parcel load");
            return Completion::Stale;
        }

        match outcome {
            Ok(collection) => {
                let count = collection.len();
                self.controller.load_layer(collection);
                self.controller
                    .shell_mut()
                    .set_status(StatusTag::Loaded, &loaded_message(count));
                tracing::info!(parcels = count, "Parcel data loaded");
            }
            Err(err) => {
                tracing::warn!(error = %err, "Parcel data load failed");
                let placeholder = self.placeholder;
                self.controller.show_placeholder_boundary(&placeholder);
                self.controller
                    .shell_mut()
                    .set_status(StatusTag::Error, &format!("Failed to load parcel data: {err}"));
            }
        }
        Completion::Applied
    }

    /// Start a search for `input`. Queries below the minimum length clear the
    /// results panel, invalidate any outstanding search and return `None`.
    pub fn begin_search(&mut self, input: &str) -> Option<(RequestToken, String)> {
        match searchable_query(input) {
            Some(query) => Some((self.searches.issue(), query.to_string())),
            None => {
                self.searches.invalidate();
                self.results.clear();
                self.controller.shell_mut().show_search_results(&[]);
                None
            }
        }
    }

    /// Apply a finished search. Failures are reported inline in the results
    /// panel and never touch the map.
    pub fn complete_search(&mut self, token: RequestToken, outcome: Result<Vec<SearchResult>>) -> Completion {
        if !self.searches.is_current(token) {
            tracing::debug!(token = token.0, "Discarding stale search response");
            return Completion::Stale;
        }

        match outcome {
            Ok(results) if results.is_empty() => {
                self.results.clear();
                self.controller.shell_mut().show_search_message(NO_RESULTS);
            }
            Ok(results) => {
                self.results = results;
                self.controller.shell_mut().show_search_results(&self.results);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Search failed");
                self.results.clear();
                self.controller
                    .shell_mut()
                    .show_search_message(&format!("Search failed: {err}"));
            }
        }
        Completion::Applied
    }

    /// Activate the result at `index` in the results panel.
    pub fn activate_result(&mut self, index: usize) -> bool {
        let Some(result) = self.results.get(index) else {
            return false;
        };
        let (id, center) = (result.id.clone(), result.center);
        self.controller.highlight_by_id(&id, center)
    }

    pub async fn load_parcels<S: ParcelDataService>(&mut self, service: &S) -> Completion {
        let token = self.begin_load();
        let outcome = service.fetch_parcels().await;
        self.complete_load(token, outcome)
    }

    /// Run a search to completion; `None` when the query was too short.
    pub async fn run_search<S: ParcelDataService>(&mut self, service: &S, input: &str) -> Option<Completion> {
        let (token, query) = self.begin_search(input)?;
        let outcome = service.search(&query).await;
        Some(self.complete_search(token, outcome))
    }
}
