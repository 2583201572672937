// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parcel features in GeoJSON shape.

use serde::{Deserialize, Deserializer, Serialize};

use crate::aliases::{matches_id, parcel_id, AliasPriority};
use crate::attributes::RawAttributes;
use crate::bounds::{Bounds, LonLat};
use crate::error::Result;
use crate::normalize::{normalize, CanonicalParcelView};

/// GeoJSON position; extra ordinates (altitude) are carried but ignored.
pub type Position = Vec<f64>;

fn to_lonlat(position: &Position) -> Option<LonLat> {
    match position.as_slice() {
        [lon, lat, ..] => Some(LonLat::new(*lon, *lat)),
        _ => None,
    }
}

/// Parcel boundary geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

impl Geometry {
    /// Every position of the geometry, outer and inner rings alike.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(coordinates)),
            Geometry::LineString { coordinates } => Box::new(coordinates.iter()),
            Geometry::Polygon { coordinates } => Box::new(coordinates.iter().flatten()),
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten().flatten())
            }
            Geometry::Unsupported => Box::new(std::iter::empty()),
        }
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for p in self.positions().filter_map(to_lonlat) {
            bounds.expand(p);
        }
        bounds
    }

    /// Vertex average of the outer ring(s); the point itself for points.
    pub fn vertex_center(&self) -> Option<LonLat> {
        let outer: Vec<LonLat> = match self {
            Geometry::Point { coordinates } => return to_lonlat(coordinates),
            Geometry::LineString { coordinates } => coordinates.iter().filter_map(to_lonlat).collect(),
            Geometry::Polygon { coordinates } => coordinates
                .first()
                .map(|ring| ring.iter().filter_map(to_lonlat).collect::<Vec<_>>())
                .unwrap_or_default(),
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|polygon| polygon.first())
                .flatten()
                .filter_map(to_lonlat)
                .collect(),
            Geometry::Unsupported => Vec::new(),
        };
        if outer.is_empty() {
            return None;
        }
        let n = outer.len() as f64;
        let (lon, lat) = outer
            .iter()
            .fold((0.0, 0.0), |(lon, lat), p| (lon + p.lon, lat + p.lat));
        Some(LonLat::new(lon / n, lat / n))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One tax parcel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelFeature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default, rename = "properties", deserialize_with = "null_as_default")]
    pub raw_attributes: RawAttributes,
}

impl ParcelFeature {
    pub fn new(geometry: Option<Geometry>, raw_attributes: RawAttributes) -> Self {
        Self {
            geometry,
            raw_attributes,
        }
    }

    /// Identifier from the first present identifier alias.
    pub fn parcel_id(&self, priority: AliasPriority) -> Option<String> {
        parcel_id(&self.raw_attributes, priority)
    }

    /// Whether any identifier alias equals `id`.
    pub fn matches_id(&self, id: &str) -> bool {
        matches_id(&self.raw_attributes, id)
    }

    pub fn view(&self, priority: AliasPriority) -> CanonicalParcelView {
        normalize(&self.raw_attributes, priority)
    }

    pub fn bounds(&self) -> Bounds {
        self.geometry
            .as_ref()
            .map(Geometry::bounds)
            .unwrap_or_default()
    }
}

/// GeoJSON FeatureCollection of parcels. Missing or null `features` is an
/// empty collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParcelCollection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub features: Vec<ParcelFeature>,
}

impl ParcelCollection {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for feature in &self.features {
            bounds.merge(&feature.bounds());
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"MapLot": "R01-001", "Owner": "DOE JANE", "Acres": "4.2"},
                "geometry": {"type": "Polygon", "coordinates": [[[-69.2, 44.6, 0], [-69.1, 44.6, 0], [-69.1, 44.7, 0], [-69.2, 44.6, 0]]]}
            },
            {
                "type": "Feature",
                "properties": null,
                "geometry": {"type": "GeometryCollection", "geometries": []}
            }
        ]
    }"#;

    #[test]
    fn test_parse_collection() {
        let collection = ParcelCollection::from_json(SAMPLE).unwrap();
        assert_eq!(collection.len(), 2);
        let first = &collection.features[0];
        assert_eq!(first.parcel_id(AliasPriority::LegacyFirst).as_deref(), Some("R01-001"));
        assert!(collection.features[1].raw_attributes.is_empty());
        assert_eq!(collection.features[1].geometry, Some(Geometry::Unsupported));

        let bounds = collection.bounds();
        assert_eq!(bounds.to_lat_lng_pairs(), [[44.6, -69.2], [44.7, -69.1]]);
    }

    #[test]
    fn test_missing_features_is_empty() {
        assert!(ParcelCollection::from_json("{}").unwrap().is_empty());
        assert!(ParcelCollection::from_json(r#"{"features": null}"#).unwrap().is_empty());
        assert!(ParcelCollection::from_json("not json").is_err());
    }

    #[test]
    fn test_vertex_center() {
        let polygon = Geometry::Polygon {
            coordinates: vec![vec![
                vec![0.0, 0.0],
                vec![2.0, 0.0],
                vec![2.0, 2.0],
                vec![0.0, 2.0],
            ]],
        };
        assert_eq!(polygon.vertex_center(), Some(LonLat::new(1.0, 1.0)));
        assert_eq!(Geometry::Unsupported.vertex_center(), None);
    }

    #[test]
    fn test_attribute_order_survives_decoding() {
        let feature: ParcelFeature =
            serde_json::from_str(r#"{"properties": {"b": "1", "a": "2", "c": "3"}}"#).unwrap();
        let keys: Vec<_> = feature.raw_attributes.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(feature.geometry, None);
    }
}
