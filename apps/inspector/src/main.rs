// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! TaxMap inspector - drive a viewer session from the terminal.
//!
//! Runs the same selection and search state machine as the browser viewer,
//! with a logging map surface and a terminal page shell. Useful for checking
//! a parcel service deployment and how its attribute schema normalizes.

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;
use taxmap_client::{Config, HttpParcelService};
use taxmap_core::{Completion, ParcelCollection, PageShell, ViewerSession};

mod cli;
mod console;

use cli::{Cli, Command};
use console::{ConsoleShell, TraceSurface};

type Session = ViewerSession<TraceSurface, ConsoleShell>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "warn,taxmap_core=info,taxmap_client=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    if let Some(priority) = cli.alias_priority {
        config.alias_priority = priority;
    }

    tracing::debug!(
        api_url = %config.api_url,
        timeout_secs = config.request_timeout_secs,
        alias_priority = ?config.alias_priority,
        "Configuration loaded"
    );

    let service = HttpParcelService::new(&config)?;
    let mut session = Session::new(
        TraceSurface::default(),
        ConsoleShell,
        config.alias_priority,
        config.placeholder(),
    );

    match cli.command {
        Command::Load => {
            session.load_parcels(&service).await;
        }
        Command::Search { query, activate } => {
            if session.run_search(&service, &query).await.is_none() {
                bail!("query must be at least {} characters", taxmap_core::MIN_QUERY_LEN);
            }
            if let Some(index) = activate {
                load_layer(&mut session, &service).await?;
                if !session.activate_result(index) {
                    bail!("result {index} is not a loaded parcel");
                }
            }
        }
        Command::Select { id } => {
            load_layer(&mut session, &service).await?;
            session.controller_mut().select_by_id(&id)?;
        }
        Command::Highlight { id } => {
            load_layer(&mut session, &service).await?;
            if !session.controller_mut().highlight_by_id(&id, None) {
                bail!("parcel {id} not found");
            }
        }
        Command::Parcel { id } => {
            let feature = service
                .parcel(&id)
                .await?
                .with_context(|| format!("parcel {id} not found"))?;
            let details = feature.view(config.alias_priority).details();
            session.controller_mut().shell_mut().show_details(&details);
        }
        Command::Inspect { path } => {
            let bytes = tokio::fs::read(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            let collection = ParcelCollection::from_slice(&bytes)?;
            for feature in &collection.features {
                let id = feature
                    .parcel_id(config.alias_priority)
                    .unwrap_or_else(|| "(no identifier)".into());
                println!("== {id}");
                session
                    .controller_mut()
                    .shell_mut()
                    .show_details(&feature.view(config.alias_priority).details());
            }
        }
        Command::Stats => print_json(&service.stats().await?)?,
        Command::Source => print_json(&service.data_source().await?)?,
        Command::Refresh => {
            let body = service.refresh().await?;
            print_json(&body)?;
            if !body.success {
                bail!("service refresh failed");
            }
        }
        Command::Health => {
            let health = service.health().await?;
            print_json(&health)?;
            if !health.is_healthy() {
                bail!("service reports status '{}'", health.status);
            }
        }
    }

    Ok(())
}

/// Load parcels, failing the command when the load did not apply cleanly.
async fn load_layer(session: &mut Session, service: &HttpParcelService) -> anyhow::Result<()> {
    let collection = service.parcels().await?;
    let token = session.begin_load();
    if session.complete_load(token, Ok(collection)) == Completion::Stale {
        bail!("parcel load was superseded");
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
