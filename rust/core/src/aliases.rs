// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Canonical field alias table
//!
//! Two attribute schemas coexist in the municipal exports: the verbose
//! upper-case legacy schema (`MAP_LOT`, `LAND_VALUE`, ...) and the compact
//! schema produced by the newer KMZ description tables (`MapLot`, `LandValue`,
//! ...). Each canonical field lists the spellings of both. Supporting a new
//! schema variant means adding spellings here, not new code paths.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::attributes::{attribute_text, RawAttributes};

/// Schema-independent property names used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Id,
    Owner,
    Address,
    Acreage,
    LandValue,
    BuildingValue,
    TotalValue,
    NetAssessment,
    YearBuilt,
    Account,
    BuildingStyle,
    Exemption,
}

impl CanonicalField {
    /// Sidebar label
    pub fn label(self) -> &'static str {
        match self {
            CanonicalField::Id => "Map/Lot",
            CanonicalField::Owner => "Owner",
            CanonicalField::Address => "Address",
            CanonicalField::Acreage => "Acreage",
            CanonicalField::LandValue => "Land Value",
            CanonicalField::BuildingValue => "Building Value",
            CanonicalField::TotalValue => "Total Value",
            CanonicalField::NetAssessment => "Net Assessment",
            CanonicalField::YearBuilt => "Year Built",
            CanonicalField::Account => "Account",
            CanonicalField::BuildingStyle => "Building Style",
            CanonicalField::Exemption => "Exemption",
        }
    }
}

/// Which schema's spellings are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasPriority {
    #[default]
    LegacyFirst,
    CompactFirst,
}

impl FromStr for AliasPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" | "legacy_first" | "legacy-first" => Ok(AliasPriority::LegacyFirst),
            "compact" | "compact_first" | "compact-first" => Ok(AliasPriority::CompactFirst),
            other => Err(format!("unknown alias priority '{other}'")),
        }
    }
}

/// Spellings of one canonical field, grouped by schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldAliases {
    pub field: CanonicalField,
    pub legacy: &'static [&'static str],
    pub compact: &'static [&'static str],
}

impl FieldAliases {
    /// All spellings in lookup order for the given priority.
    pub fn ordered(&self, priority: AliasPriority) -> impl Iterator<Item = &'static str> {
        let (first, second) = match priority {
            AliasPriority::LegacyFirst => (self.legacy, self.compact),
            AliasPriority::CompactFirst => (self.compact, self.legacy),
        };
        first.iter().chain(second.iter()).copied()
    }

    /// First alias present with a non-empty value, as `(key, text)`.
    pub fn resolve(
        &self,
        raw: &RawAttributes,
        priority: AliasPriority,
    ) -> Option<(&'static str, String)> {
        self.ordered(priority)
            .find_map(|key| attribute_text(raw, key).map(|text| (key, text)))
    }

    /// Whether `key` is one of this field's spellings.
    pub fn contains(&self, key: &str) -> bool {
        self.legacy.contains(&key) || self.compact.contains(&key)
    }
}

pub const ID_ALIASES: FieldAliases = FieldAliases {
    field: CanonicalField::Id,
    legacy: &["MAP_LOT", "Map_Lot", "PARCEL_ID", "MapBkLot", "TRMapBkLot"],
    compact: &["MapLot", "name"],
};

pub const OWNER_ALIASES: FieldAliases = FieldAliases {
    field: CanonicalField::Owner,
    legacy: &["OWNER"],
    compact: &["Owner", "owner"],
};

pub const ADDRESS_ALIASES: FieldAliases = FieldAliases {
    field: CanonicalField::Address,
    legacy: &["ADDRESS", "LOCATION"],
    compact: &["Address"],
};

/// Street name and number used to synthesize an address.
pub const STREET_KEY: &str = "Street";
pub const STREET_NUMBER_KEY: &str = "StNumber";

/// Alias table for every canonical field, in display order.
pub const FIELD_ALIASES: &[FieldAliases] = &[
    ID_ALIASES,
    OWNER_ALIASES,
    ADDRESS_ALIASES,
    FieldAliases {
        field: CanonicalField::Account,
        legacy: &["ACCOUNT"],
        compact: &["Account"],
    },
    FieldAliases {
        field: CanonicalField::Acreage,
        legacy: &["ACREAGE", "ACRES", "GISAcres", "TRIOAcres"],
        compact: &["Acreage", "Acres"],
    },
    FieldAliases {
        field: CanonicalField::LandValue,
        legacy: &["LAND_VALUE", "Land_Value"],
        compact: &["LandValue"],
    },
    FieldAliases {
        field: CanonicalField::BuildingValue,
        legacy: &["BLDG_VALUE", "Bldg_Value"],
        compact: &["BldgValue"],
    },
    FieldAliases {
        field: CanonicalField::TotalValue,
        legacy: &["TOTAL_VALUE", "Total_Value"],
        compact: &["TotalValue"],
    },
    FieldAliases {
        field: CanonicalField::Exemption,
        legacy: &["EXEMPTION"],
        compact: &["Exemption"],
    },
    FieldAliases {
        field: CanonicalField::NetAssessment,
        legacy: &["NET_ASSESS"],
        compact: &["NetAssess"],
    },
    FieldAliases {
        field: CanonicalField::YearBuilt,
        legacy: &["YEAR_BUILT", "Year_Built"],
        compact: &["YearBuilt"],
    },
    FieldAliases {
        field: CanonicalField::BuildingStyle,
        legacy: &["BLDG_STYLE"],
        compact: &["BldgStyle"],
    },
];

/// Aliases of a canonical field.
pub fn aliases_for(field: CanonicalField) -> &'static FieldAliases {
    FIELD_ALIASES
        .iter()
        .find(|entry| entry.field == field)
        .unwrap_or(&ID_ALIASES)
}

/// Parcel identifier, resolved with the identifier aliases.
pub fn parcel_id(raw: &RawAttributes, priority: AliasPriority) -> Option<String> {
    ID_ALIASES.resolve(raw, priority).map(|(_, text)| text)
}

/// Whether any identifier alias of `raw` equals `id` (after trimming).
pub fn matches_id(raw: &RawAttributes, id: &str) -> bool {
    let id = id.trim();
    !id.is_empty()
        && ID_ALIASES
            .ordered(AliasPriority::LegacyFirst)
            .filter_map(|key| attribute_text(raw, key))
            .any(|text| text == id)
}
