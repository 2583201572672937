// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute normalization
//!
//! Projects an arbitrary [`RawAttributes`] map onto the canonical display model.
//! Normalization never fails: values that cannot be parsed are dropped and the
//! field is reported as absent.

use serde::{Deserialize, Serialize};

use crate::aliases::{
    aliases_for, AliasPriority, CanonicalField, FieldAliases, ADDRESS_ALIASES, FIELD_ALIASES,
    OWNER_ALIASES, STREET_KEY, STREET_NUMBER_KEY,
};
use crate::attributes::{attribute_text, scalar_text, RawAttributes};
use crate::format::{
    format_acreage, format_currency, parse_acreage, parse_currency, parse_year,
};

/// Owner shown when no owner alias is present.
pub const UNKNOWN_OWNER: &str = "Unknown Owner";

/// Sentinel shown when a parcel carries no displayable attributes.
pub const NO_DETAILS: &str = "No details available";

/// One label/value line of the details panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// What the details panel renders for a parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DetailsContent {
    Fields(Vec<DetailRow>),
    Placeholder(String),
}

impl DetailsContent {
    pub fn placeholder(text: impl Into<String>) -> Self {
        DetailsContent::Placeholder(text.into())
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DetailsContent::Placeholder(_))
    }
}

/// Normalized, display-ready projection of a parcel's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalParcelView {
    pub id: Option<String>,
    /// Owner as recorded; see [`CanonicalParcelView::owner_text`] for display.
    pub owner: Option<String>,
    pub address: Option<String>,
    pub acreage: Option<f64>,
    pub land_value: Option<u64>,
    pub building_value: Option<u64>,
    pub total_value: Option<u64>,
    pub net_assessment: Option<u64>,
    pub year_built: Option<i32>,
    pub account: Option<String>,
    pub building_style: Option<String>,
    pub exemption: Option<u64>,
    /// Raw entries, populated only when no alias key is present at all.
    pub extra_fields: Vec<DetailRow>,
}

impl Default for CanonicalParcelView {
    fn default() -> Self {
        Self {
            id: None,
            owner: None,
            address: None,
            acreage: None,
            land_value: None,
            building_value: None,
            total_value: None,
            net_assessment: None,
            year_built: None,
            account: None,
            building_style: None,
            exemption: None,
            extra_fields: Vec::new(),
        }
    }
}

impl CanonicalParcelView {
    pub fn has_owner(&self) -> bool {
        self.owner.is_some()
    }

    /// Owner for display, with the placeholder when the record has none.
    pub fn owner_text(&self) -> &str {
        self.owner.as_deref().unwrap_or(UNKNOWN_OWNER)
    }

    /// Whether at least one canonical field was recognized.
    pub fn has_canonical_fields(&self) -> bool {
        self.id.is_some()
            || self.has_owner()
            || self.address.is_some()
            || self.acreage.is_some()
            || self.land_value.is_some()
            || self.building_value.is_some()
            || self.total_value.is_some()
            || self.net_assessment.is_some()
            || self.year_built.is_some()
            || self.account.is_some()
            || self.building_style.is_some()
            || self.exemption.is_some()
    }

    /// Formatted display value of a canonical field, `None` when suppressed.
    pub fn display_value(&self, field: CanonicalField) -> Option<String> {
        match field {
            CanonicalField::Id => self.id.clone(),
            CanonicalField::Owner => self.owner.clone(),
            CanonicalField::Address => self.address.clone(),
            CanonicalField::Acreage => self.acreage.map(format_acreage),
            CanonicalField::LandValue => self.land_value.map(format_currency),
            CanonicalField::BuildingValue => self.building_value.map(format_currency),
            CanonicalField::TotalValue => self.total_value.map(format_currency),
            CanonicalField::NetAssessment => self.net_assessment.map(format_currency),
            CanonicalField::YearBuilt => self.year_built.map(|y| y.to_string()),
            CanonicalField::Account => self.account.clone(),
            CanonicalField::BuildingStyle => self.building_style.clone(),
            CanonicalField::Exemption => self.exemption.map(format_currency),
        }
    }

    /// Details panel content: canonical rows, raw fallback rows, or the sentinel.
    pub fn details(&self) -> DetailsContent {
        let rows: Vec<DetailRow> = FIELD_ALIASES
            .iter()
            .filter_map(|entry| {
                self.display_value(entry.field)
                    .map(|value| DetailRow::new(entry.field.label(), value))
            })
            .collect();

        if !rows.is_empty() {
            DetailsContent::Fields(rows)
        } else if !self.extra_fields.is_empty() {
            DetailsContent::Fields(self.extra_fields.clone())
        } else {
            DetailsContent::placeholder(NO_DETAILS)
        }
    }
}

fn resolve_text(raw: &RawAttributes, aliases: &FieldAliases, priority: AliasPriority) -> Option<String> {
    aliases.resolve(raw, priority).map(|(_, text)| text)
}

fn resolve_field(raw: &RawAttributes, field: CanonicalField, priority: AliasPriority) -> Option<String> {
    resolve_text(raw, aliases_for(field), priority)
}

/// Address from `Street` + `StNumber`; a zero street number is dropped.
pub fn synthesize_address(raw: &RawAttributes) -> Option<String> {
    let street = attribute_text(raw, STREET_KEY)?;
    match attribute_text(raw, STREET_NUMBER_KEY) {
        Some(number) if number != "0" => Some(format!("{number} {street}")),
        _ => Some(street),
    }
}

/// Whether any alias (or the street used for address synthesis) carries a
/// non-empty value, regardless of whether that value survives parsing.
fn has_alias_key(raw: &RawAttributes) -> bool {
    attribute_text(raw, STREET_KEY).is_some()
        || FIELD_ALIASES.iter().any(|entry| {
            entry
                .ordered(AliasPriority::LegacyFirst)
                .any(|key| attribute_text(raw, key).is_some())
        })
}

/// Normalize raw attributes into the canonical view.
pub fn normalize(raw: &RawAttributes, priority: AliasPriority) -> CanonicalParcelView {
    let currency = |field| resolve_field(raw, field, priority).and_then(|t| parse_currency(&t));

    let mut view = CanonicalParcelView {
        id: resolve_field(raw, CanonicalField::Id, priority),
        owner: resolve_text(raw, &OWNER_ALIASES, priority),
        address: resolve_text(raw, &ADDRESS_ALIASES, priority).or_else(|| synthesize_address(raw)),
        acreage: resolve_field(raw, CanonicalField::Acreage, priority).and_then(|t| parse_acreage(&t)),
        land_value: currency(CanonicalField::LandValue),
        building_value: currency(CanonicalField::BuildingValue).filter(|v| *v > 0),
        total_value: currency(CanonicalField::TotalValue),
        net_assessment: currency(CanonicalField::NetAssessment),
        year_built: resolve_field(raw, CanonicalField::YearBuilt, priority).and_then(|t| parse_year(&t)),
        account: resolve_field(raw, CanonicalField::Account, priority),
        building_style: resolve_field(raw, CanonicalField::BuildingStyle, priority),
        exemption: currency(CanonicalField::Exemption).filter(|v| *v > 0),
        extra_fields: Vec::new(),
    };

    // A matched alias whose value was suppressed or malformed must not
    // resurface through the raw rows.
    if !has_alias_key(raw) {
        view.extra_fields = raw
            .iter()
            .filter_map(|(key, value)| scalar_text(value).map(|text| DetailRow::new(key.as_str(), text)))
            .collect();
    }

    view
}
