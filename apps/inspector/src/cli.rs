// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Command line definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taxmap_core::AliasPriority;

#[derive(Debug, Parser)]
#[command(name = "taxmap", version, about = "Inspect a tax map parcel service from the terminal")]
pub struct Cli {
    /// Base URL of the parcel data service (overrides TAXMAP_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Attribute schema tried first: `legacy` or `compact`
    #[arg(long, global = true, value_parser = parse_priority)]
    pub alias_priority: Option<AliasPriority>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Load the parcel layer and report the status line
    Load,
    /// Search parcels by owner, identifier or address
    Search {
        query: String,
        /// Highlight the result at this position (0-based) afterwards
        #[arg(long)]
        activate: Option<usize>,
    },
    /// Load the layer and click-select a parcel by identifier
    Select { id: String },
    /// Load the layer and highlight a parcel by identifier
    Highlight { id: String },
    /// Fetch a single parcel from the service and show its details
    Parcel { id: String },
    /// Show details for every parcel in a local GeoJSON file
    Inspect { path: PathBuf },
    /// Print service statistics
    Stats,
    /// Print where the service obtained its data
    Source,
    /// Ask the service to reload its upstream data
    Refresh,
    /// Check service health
    Health,
}

fn parse_priority(s: &str) -> Result<AliasPriority, String> {
    s.parse()
}
