// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory map surface and page shell used by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;

use taxmap_core::{
    attributes_from_pairs, Bounds, DetailsContent, FeatureKey, FeatureStyle, Geometry, LonLat,
    MapSurface, PageShell, ParcelCollection, ParcelFeature, ParcelLayer, SearchResult, StatusTag,
};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub styles: BTreeMap<FeatureKey, FeatureStyle>,
    pub popups: BTreeMap<FeatureKey, String>,
    pub overlay: Option<FeatureKey>,
    pub view: Option<LonLat>,
    pub fitted: Vec<Bounds>,
    pub placeholder: Option<Bounds>,
    pub layer_replacements: usize,
}

impl RecordingSurface {
    pub fn style_of(&self, key: usize) -> FeatureStyle {
        self.styles[&FeatureKey(key)]
    }

    pub fn count_with(&self, style: FeatureStyle) -> usize {
        self.styles.values().filter(|s| **s == style).count()
    }
}

impl MapSurface for RecordingSurface {
    fn replace_layer(&mut self, layer: &ParcelLayer) {
        self.styles = layer
            .iter()
            .map(|(key, _)| (key, FeatureStyle::Default))
            .collect();
        self.popups.clear();
        self.layer_replacements += 1;
    }

    fn set_feature_style(&mut self, key: FeatureKey, style: FeatureStyle) {
        self.styles.insert(key, style);
    }

    fn bind_popup(&mut self, key: FeatureKey, html: &str) {
        self.popups.insert(key, html.to_string());
    }

    fn show_highlight(&mut self, key: FeatureKey, _feature: &ParcelFeature) {
        self.overlay = Some(key);
    }

    fn clear_highlight(&mut self) {
        self.overlay = None;
    }

    fn set_view(&mut self, center: LonLat) {
        self.view = Some(center);
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        self.fitted.push(*bounds);
    }

    fn show_placeholder_boundary(&mut self, bounds: &Bounds) {
        self.placeholder = Some(*bounds);
    }
}

#[derive(Debug, Default)]
pub struct RecordingShell {
    pub details: Vec<DetailsContent>,
    pub status: Option<(StatusTag, String)>,
    pub results: Vec<SearchResult>,
    pub message: Option<String>,
}

impl PageShell for RecordingShell {
    fn show_details(&mut self, content: &DetailsContent) {
        self.details.push(content.clone());
    }

    fn set_status(&mut self, tag: StatusTag, message: &str) {
        self.status = Some((tag, message.to_string()));
    }

    fn show_search_results(&mut self, results: &[SearchResult]) {
        self.results = results.to_vec();
        self.message = None;
    }

    fn show_search_message(&mut self, message: &str) {
        self.results.clear();
        self.message = Some(message.to_string());
    }
}

fn square(lon: f64, lat: f64) -> Geometry {
    let d = 0.01;
    Geometry::Polygon {
        coordinates: vec![vec![
            vec![lon, lat],
            vec![lon + d, lat],
            vec![lon + d, lat + d],
            vec![lon, lat + d],
            vec![lon, lat],
        ]],
    }
}

/// Four parcels: two legacy-schema, one compact-schema, one unidentified.
pub fn sample_parcels() -> ParcelCollection {
    ParcelCollection {
        features: vec![
            ParcelFeature::new(
                Some(square(-69.20, 44.65)),
                attributes_from_pairs([
                    ("MAP_LOT", "R01-001"),
                    ("OWNER", "DOE JANE"),
                    ("LAND_VALUE", "50000"),
                ]),
            ),
            ParcelFeature::new(
                Some(square(-69.18, 44.66)),
                attributes_from_pairs([
                    ("MAP_LOT", "R01-002"),
                    ("OWNER", "SMITH JOHN"),
                    ("BLDG_VALUE", "120000"),
                ]),
            ),
            ParcelFeature::new(
                Some(square(-69.16, 44.67)),
                attributes_from_pairs([
                    ("MapLot", "U03-014"),
                    ("Owner", "TOWN OF DIXMONT"),
                    ("Street", "Main St"),
                    ("StNumber", "0"),
                ]),
            ),
            ParcelFeature::new(
                Some(square(-69.14, 44.68)),
                attributes_from_pairs([("Zone", "RR")]),
            ),
        ],
    }
}

pub fn placeholder_bounds() -> Bounds {
    Bounds::from_corners(LonLat::new(-69.25, 44.62), LonLat::new(-69.08, 44.74))
}
