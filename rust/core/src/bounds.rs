// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geographic bounding boxes in WGS84 lon/lat.

use serde::{Deserialize, Serialize};

/// A WGS84 position, `[lon, lat]` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<[f64; 2]> for LonLat {
    fn from([lon, lat]: [f64; 2]) -> Self {
        Self { lon, lat }
    }
}

impl From<LonLat> for [f64; 2] {
    fn from(p: LonLat) -> Self {
        [p.lon, p.lat]
    }
}

/// Outline of the Town of Dixmont as `[min_lon, min_lat, max_lon, max_lat]`,
/// drawn when parcel data is unavailable.
pub const DEFAULT_PLACEHOLDER: [f64; 4] = [-69.23, 44.63, -69.08, 44.74];

/// Axis-aligned lon/lat bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
    /// Number of positions folded in
    pub sample_count: usize,
}

impl Bounds {
    /// Create new bounds initialized to invalid state
    pub fn new() -> Self {
        Self {
            min_lon: f64::MAX,
            min_lat: f64::MAX,
            max_lon: f64::MIN,
            max_lat: f64::MIN,
            sample_count: 0,
        }
    }

    /// Bounds spanning two corners.
    pub fn from_corners(a: LonLat, b: LonLat) -> Self {
        let mut bounds = Self::new();
        bounds.expand(a);
        bounds.expand(b);
        bounds
    }

    /// Bounds from `[min_lon, min_lat, max_lon, max_lat]`.
    pub fn from_extent([min_lon, min_lat, max_lon, max_lat]: [f64; 4]) -> Self {
        Self::from_corners(LonLat::new(min_lon, min_lat), LonLat::new(max_lon, max_lat))
    }

    /// Check if bounds are valid (at least one point added)
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.sample_count > 0
    }

    #[inline]
    pub fn expand(&mut self, p: LonLat) {
        if !p.lon.is_finite() || !p.lat.is_finite() {
            return;
        }
        self.min_lon = self.min_lon.min(p.lon);
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lon = self.max_lon.max(p.lon);
        self.max_lat = self.max_lat.max(p.lat);
        self.sample_count += 1;
    }

    pub fn merge(&mut self, other: &Bounds) {
        if !other.is_valid() {
            return;
        }
        self.min_lon = self.min_lon.min(other.min_lon);
        self.min_lat = self.min_lat.min(other.min_lat);
        self.max_lon = self.max_lon.max(other.max_lon);
        self.max_lat = self.max_lat.max(other.max_lat);
        self.sample_count += other.sample_count;
    }

    /// Center of the box, `None` for empty bounds
    pub fn center(&self) -> Option<LonLat> {
        self.is_valid().then(|| {
            LonLat::new(
                (self.min_lon + self.max_lon) / 2.0,
                (self.min_lat + self.max_lat) / 2.0,
            )
        })
    }

    /// Leaflet-style `[[south, west], [north, east]]`
    pub fn to_lat_lng_pairs(&self) -> [[f64; 2]; 2] {
        [[self.min_lat, self.min_lon], [self.max_lat, self.max_lon]]
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}
