// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Visual states of a parcel on the map and their path styles.

use serde::{Deserialize, Serialize};

/// Visual state applied to a parcel polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStyle {
    Default,
    /// Transient pointer-over emphasis
    Hover,
    /// Click selection
    Selected,
    /// Search-result overlay
    Highlight,
}

impl FeatureStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureStyle::Default => "default",
            FeatureStyle::Hover => "hover",
            FeatureStyle::Selected => "selected",
            FeatureStyle::Highlight => "highlight",
        }
    }

    /// Vector path options for this state (Leaflet `PathOptions` shape).
    pub fn path_style(self) -> PathStyle {
        match self {
            FeatureStyle::Default => PathStyle {
                color: "#3388ff",
                weight: 1.5,
                fill_color: "#3388ff",
                fill_opacity: 0.1,
            },
            FeatureStyle::Hover => PathStyle {
                color: "#ff7800",
                weight: 3.0,
                fill_color: "#ff7800",
                fill_opacity: 0.25,
            },
            FeatureStyle::Selected => PathStyle {
                color: "#e31a1c",
                weight: 3.0,
                fill_color: "#e31a1c",
                fill_opacity: 0.3,
            },
            FeatureStyle::Highlight => PathStyle {
                color: "#ffff00",
                weight: 4.0,
                fill_color: "#ffff00",
                fill_opacity: 0.4,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    pub color: &'static str,
    pub weight: f64,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
}
