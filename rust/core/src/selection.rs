// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection and highlight controller
//!
//! Owns the loaded [`ParcelLayer`] and the single [`SelectionState`], and is
//! the only place that restyles parcels. Two independent axes are tracked:
//!
//! - **selected**: set by clicking a parcel, drawn with [`FeatureStyle::Selected`]
//!   on the parcel layer itself. At most one parcel carries this style.
//! - **highlighted**: set by activating a search result, drawn on a separate
//!   overlay with [`FeatureStyle::Highlight`].
//!
//! Hover is a transient third state that never overrides the selection.

use serde::Serialize;

use crate::aliases::AliasPriority;
use crate::bounds::{Bounds, LonLat};
use crate::error::{Error, Result};
use crate::feature::{ParcelCollection, ParcelFeature};
use crate::layer::{FeatureKey, ParcelLayer};
use crate::normalize::DetailsContent;
use crate::popup::popup_html;
use crate::search::SearchResult;
use crate::status::StatusTag;
use crate::style::FeatureStyle;

/// Vector overlay capabilities the controller needs from the map widget.
///
/// Implementations operate on in-memory map state and cannot fail.
pub trait MapSurface {
    /// Replace the parcel layer, every feature drawn with the default style.
    fn replace_layer(&mut self, layer: &ParcelLayer);
    fn set_feature_style(&mut self, key: FeatureKey, style: FeatureStyle);
    fn bind_popup(&mut self, key: FeatureKey, html: &str);
    /// Draw `feature` alone on the highlight overlay.
    fn show_highlight(&mut self, key: FeatureKey, feature: &ParcelFeature);
    fn clear_highlight(&mut self);
    fn set_view(&mut self, center: LonLat);
    fn fit_bounds(&mut self, bounds: &Bounds);
    /// Outline drawn when parcel data could not be loaded.
    fn show_placeholder_boundary(&mut self, bounds: &Bounds);
}

/// Sinks provided by the page around the map.
pub trait PageShell {
    fn show_details(&mut self, content: &DetailsContent);
    fn set_status(&mut self, tag: StatusTag, message: &str);
    /// Results in server order; activation comes back by index.
    fn show_search_results(&mut self, results: &[SearchResult]);
    /// Inline message in the results panel (failures, no hits).
    fn show_search_message(&mut self, message: &str);
}

/// Which parcels are selected and highlighted. Empty at start, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SelectionState {
    pub selected: Option<FeatureKey>,
    pub highlighted: Option<FeatureKey>,
}

impl SelectionState {
    pub fn is_idle(&self) -> bool {
        self.selected.is_none() && self.highlighted.is_none()
    }
}

pub struct SelectionController<M, P> {
    layer: ParcelLayer,
    state: SelectionState,
    priority: AliasPriority,
    surface: M,
    shell: P,
}

impl<M: MapSurface, P: PageShell> SelectionController<M, P> {
    pub fn new(surface: M, shell: P, priority: AliasPriority) -> Self {
        Self {
            layer: ParcelLayer::default(),
            state: SelectionState::default(),
            priority,
            surface,
            shell,
        }
    }

    pub fn layer(&self) -> &ParcelLayer {
        &self.layer
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn priority(&self) -> AliasPriority {
        self.priority
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut M {
        &mut self.surface
    }

    pub fn shell(&self) -> &P {
        &self.shell
    }

    pub fn shell_mut(&mut self) -> &mut P {
        &mut self.shell
    }

    /// Identifier of the selected parcel, if it has one.
    pub fn selected_id(&self) -> Option<String> {
        self.state
            .selected
            .and_then(|key| self.layer.get(key))
            .and_then(|feature| feature.parcel_id(self.priority))
    }

    pub fn highlighted_id(&self) -> Option<String> {
        self.state
            .highlighted
            .and_then(|key| self.layer.get(key))
            .and_then(|feature| feature.parcel_id(self.priority))
    }

    /// Details content for a loaded feature.
    pub fn details_for(&self, key: FeatureKey) -> Option<DetailsContent> {
        self.layer
            .get(key)
            .map(|feature| feature.view(self.priority).details())
    }

    /// Swap in a freshly loaded dataset. Any selection or highlight refers to
    /// the old dataset and is dropped.
    pub fn load_layer(&mut self, collection: ParcelCollection) {
        self.layer = ParcelLayer::new(collection);
        self.state = SelectionState::default();
        self.surface.clear_highlight();
        self.surface.replace_layer(&self.layer);

        for (key, feature) in self.layer.iter() {
            let html = popup_html(&feature.view(self.priority));
            self.surface.bind_popup(key, &html);
        }

        let bounds = self.layer.bounds();
        if bounds.is_valid() {
            self.surface.fit_bounds(&bounds);
        }
        tracing::debug!(parcels = self.layer.len(), "Parcel layer loaded");
    }

    /// Click selection. Re-selecting the current parcel re-applies its style.
    pub fn select_parcel(&mut self, key: FeatureKey) -> Result<()> {
        let feature = self
            .layer
            .get(key)
            .ok_or_else(|| Error::UnknownParcel(format!("feature #{}", key.0)))?;
        let details = feature.view(self.priority).details();

        if let Some(previous) = self.state.selected {
            if previous != key {
                self.surface.set_feature_style(previous, FeatureStyle::Default);
            }
        }
        self.surface.set_feature_style(key, FeatureStyle::Selected);
        self.state.selected = Some(key);
        self.shell.show_details(&details);

        tracing::debug!(feature = key.0, parcel = ?feature.parcel_id(self.priority), "Parcel selected");
        Ok(())
    }

    /// Select the parcel whose identifier alias equals `id`.
    pub fn select_by_id(&mut self, id: &str) -> Result<()> {
        let key = self
            .layer
            .find_by_id(id)
            .ok_or_else(|| Error::UnknownParcel(id.to_string()))?;
        self.select_parcel(key)
    }

    /// Search-driven highlight. The view is recentered only when the search
    /// result carried a center. Returns `false` when no parcel matches, in
    /// which case the overlay is left empty and the details panel untouched.
    pub fn highlight_by_id(&mut self, id: &str, center: Option<LonLat>) -> bool {
        self.surface.clear_highlight();
        self.state.highlighted = None;

        let Some(key) = self.layer.find_by_id(id) else {
            tracing::debug!(parcel = %id, "No loaded parcel matches highlight id");
            return false;
        };
        let Some(feature) = self.layer.get(key) else {
            return false;
        };

        self.surface.show_highlight(key, feature);
        if let Some(center) = center {
            self.surface.set_view(center);
        }
        self.shell.show_details(&feature.view(self.priority).details());
        self.state.highlighted = Some(key);

        tracing::debug!(parcel = %id, feature = key.0, "Parcel highlighted");
        true
    }

    /// Remove the highlight overlay; the click selection is unaffected.
    pub fn clear_highlight(&mut self) {
        self.surface.clear_highlight();
        self.state.highlighted = None;
    }

    pub fn pointer_enter(&mut self, key: FeatureKey) {
        if self.state.selected != Some(key) && self.layer.get(key).is_some() {
            self.surface.set_feature_style(key, FeatureStyle::Hover);
        }
    }

    pub fn pointer_leave(&mut self, key: FeatureKey) {
        if self.state.selected != Some(key) && self.layer.get(key).is_some() {
            self.surface.set_feature_style(key, FeatureStyle::Default);
        }
    }

    /// Degraded view after a failed load.
    pub fn show_placeholder_boundary(&mut self, bounds: &Bounds) {
        self.surface.show_placeholder_boundary(bounds);
        if bounds.is_valid() {
            self.surface.fit_bounds(bounds);
        }
    }
}
