// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The loaded parcel dataset and its identifier index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::aliases::ID_ALIASES;
use crate::attributes::attribute_text;
use crate::bounds::Bounds;
use crate::feature::{ParcelCollection, ParcelFeature};

/// Position of a feature within the loaded layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureKey(pub usize);

/// Parcels currently attached to the map.
#[derive(Debug, Clone, Default)]
pub struct ParcelLayer {
    features: Vec<ParcelFeature>,
    /// identifier alias value -> first feature carrying it
    by_id: FxHashMap<String, FeatureKey>,
}

impl ParcelLayer {
    pub fn new(collection: ParcelCollection) -> Self {
        let features = collection.features;
        let mut by_id: FxHashMap<String, FeatureKey> = FxHashMap::default();
        for (index, feature) in features.iter().enumerate() {
            for key in ID_ALIASES.legacy.iter().chain(ID_ALIASES.compact.iter()) {
                if let Some(id) = attribute_text(&feature.raw_attributes, key) {
                    by_id.entry(id).or_insert(FeatureKey(index));
                }
            }
        }
        Self { features, by_id }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn get(&self, key: FeatureKey) -> Option<&ParcelFeature> {
        self.features.get(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FeatureKey, &ParcelFeature)> {
        self.features
            .iter()
            .enumerate()
            .map(|(index, feature)| (FeatureKey(index), feature))
    }

    /// First feature (in dataset order) whose any identifier alias equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<FeatureKey> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        self.by_id.get(id).copied()
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for feature in &self.features {
            bounds.merge(&feature.bounds());
        }
        bounds
    }
}
