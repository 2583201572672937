// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # TaxMap Client
//!
//! Native HTTP client for the parcel data service.
//!
//! [`HttpParcelService`] implements [`taxmap_core::ParcelDataService`], so a
//! [`taxmap_core::ViewerSession`] can load parcels and run searches against a
//! live service. The service's operational endpoints (stats, data-source
//! report, refresh, health) are exposed as plain methods.
//!
//! ```rust,no_run
//! use taxmap_client::{Config, HttpParcelService};
//!
//! # async fn run() -> Result<(), taxmap_client::ClientError> {
//! let service = HttpParcelService::new(&Config::from_env())?;
//! let hits = service.search_parcels("dixmont").await?;
//! println!("{} matches", hits.len());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod types;

pub use config::{Config, DEFAULT_PLACEHOLDER};
pub use error::ClientError;
pub use service::HttpParcelService;
pub use types::{HealthResponse, RefreshResponse, SearchResponse, StatsResponse};
