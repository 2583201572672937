// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # TaxMap Core
//!
//! Parcel attribute normalization and selection state for municipal tax map
//! viewers.
//!
//! ## Overview
//!
//! Upstream GIS exports describe the same property record with different key
//! spellings depending on their vintage. This crate sits between those exports
//! and a map UI:
//!
//! - **Normalization**: [`normalize`] maps any raw attribute map onto a
//!   [`CanonicalParcelView`] using the data-driven alias table in [`aliases`]
//! - **Selection**: [`SelectionController`] owns the loaded parcels and the
//!   single selected/highlighted state, restyling parcels through a
//!   [`MapSurface`]
//! - **Session**: [`ViewerSession`] loads parcels and runs searches against a
//!   [`ParcelDataService`], discarding responses that were overtaken by newer
//!   requests
//!
//! ## Quick Start
//!
//! ```rust
//! use taxmap_core::{normalize, AliasPriority, CanonicalField, attributes_from_pairs};
//!
//! let raw = attributes_from_pairs([
//!     ("MAP_LOT", "12-34"),
//!     ("OWNER", "Jane Doe"),
//!     ("LAND_VALUE", "50000"),
//! ]);
//! let view = normalize(&raw, AliasPriority::LegacyFirst);
//! assert_eq!(view.id.as_deref(), Some("12-34"));
//! assert_eq!(view.display_value(CanonicalField::LandValue).as_deref(), Some("$50,000"));
//! ```

pub mod aliases;
pub mod attributes;
pub mod bounds;
pub mod error;
pub mod feature;
pub mod format;
pub mod layer;
pub mod normalize;
pub mod popup;
pub mod search;
pub mod selection;
pub mod session;
pub mod status;
pub mod style;

pub use aliases::{AliasPriority, CanonicalField, FieldAliases, FIELD_ALIASES, ID_ALIASES};
pub use attributes::{attributes_from_pairs, RawAttributes};
pub use bounds::{Bounds, LonLat, DEFAULT_PLACEHOLDER};
pub use error::{Error, Result};
pub use feature::{Geometry, ParcelCollection, ParcelFeature};
pub use layer::{FeatureKey, ParcelLayer};
pub use normalize::{
    normalize, CanonicalParcelView, DetailRow, DetailsContent, NO_DETAILS, UNKNOWN_OWNER,
};
pub use popup::popup_html;
pub use search::{
    searchable_query, Debouncer, RequestSequencer, RequestToken, SearchResult, DEFAULT_DEBOUNCE,
    MIN_QUERY_LEN,
};
pub use selection::{MapSurface, PageShell, SelectionController, SelectionState};
pub use session::{Completion, ParcelDataService, ViewerSession, NO_RESULTS};
pub use status::{loaded_message, DataSource, DataSourceInfo, StatusTag};
pub use style::{FeatureStyle, PathStyle};
