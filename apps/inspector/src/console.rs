// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Headless map surface and terminal page shell.

use std::fmt::Write as _;

use taxmap_core::{
    Bounds, DetailsContent, FeatureKey, FeatureStyle, LonLat, MapSurface, PageShell, ParcelFeature,
    ParcelLayer, SearchResult, StatusTag,
};

/// Map surface with no map: every operation is logged.
#[derive(Debug, Default)]
pub struct TraceSurface {
    pub parcels: usize,
    pub highlighted: Option<FeatureKey>,
}

impl MapSurface for TraceSurface {
    fn replace_layer(&mut self, layer: &ParcelLayer) {
        self.parcels = layer.len();
        tracing::debug!(parcels = layer.len(), "replace_layer");
    }

    fn set_feature_style(&mut self, key: FeatureKey, style: FeatureStyle) {
        tracing::debug!(feature = key.0, style = style.as_str(), "set_feature_style");
    }

    fn bind_popup(&mut self, key: FeatureKey, html: &str) {
        tracing::trace!(feature = key.0, bytes = html.len(), "bind_popup");
    }

    fn show_highlight(&mut self, key: FeatureKey, feature: &ParcelFeature) {
        self.highlighted = Some(key);
        tracing::debug!(feature = key.0, bounds = ?feature.bounds(), "show_highlight");
    }

    fn clear_highlight(&mut self) {
        self.highlighted = None;
    }

    fn set_view(&mut self, center: LonLat) {
        tracing::debug!(lon = center.lon, lat = center.lat, "set_view");
    }

    fn fit_bounds(&mut self, bounds: &Bounds) {
        tracing::debug!(
            min_lon = bounds.min_lon,
            min_lat = bounds.min_lat,
            max_lon = bounds.max_lon,
            max_lat = bounds.max_lat,
            "fit_bounds"
        );
    }

    fn show_placeholder_boundary(&mut self, bounds: &Bounds) {
        tracing::info!(center = ?bounds.center(), "Showing placeholder boundary");
    }
}

/// Page shell that prints to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleShell;

impl PageShell for ConsoleShell {
    fn show_details(&mut self, content: &DetailsContent) {
        print!("{}", render_details(content));
    }

    fn set_status(&mut self, tag: StatusTag, message: &str) {
        match tag {
            StatusTag::Loaded => println!("[{}] {message}", tag.as_str()),
            StatusTag::Error => eprintln!("[{}] {message}", tag.as_str()),
        }
    }

    fn show_search_results(&mut self, results: &[SearchResult]) {
        print!("{}", render_results(results));
    }

    fn show_search_message(&mut self, message: &str) {
        println!("{message}");
    }
}

pub fn render_details(content: &DetailsContent) -> String {
    match content {
        DetailsContent::Placeholder(text) => format!("{text}\n"),
        DetailsContent::Fields(rows) => {
            let width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);
            rows.iter().fold(String::new(), |mut out, row| {
                let _ = writeln!(out, "{:<width$}  {}", row.label, row.value);
                out
            })
        }
    }
}

pub fn render_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for (i, r) in results.iter().enumerate() {
        let _ = write!(out, "{i:>3}. {}  {}", r.id, r.owner);
        if let Some(address) = &r.address {
            let _ = write!(out, ", {address}");
        }
        if let Some(acreage) = &r.acreage {
            let _ = write!(out, " ({acreage} acres)");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use taxmap_core::DetailRow;

    #[test]
    fn test_details_are_aligned() {
        let content = DetailsContent::Fields(vec![
            DetailRow::new("Owner", "DOE JANE"),
            DetailRow::new("Land Value", "$50,000"),
        ]);
        assert_eq!(
            render_details(&content),
            "Owner       DOE JANE\nLand Value  $50,000\n"
        );
        assert_eq!(
            render_details(&DetailsContent::placeholder("No details available")),
            "No details available\n"
        );
    }

    #[test]
    fn test_results_listing() {
        let results: Vec<SearchResult> = serde_json::from_str(
            r#"[{"id": "R01-001", "owner": "DOE JANE", "address": "12 Main St", "acreage": 2.5},
                {"id": "R01-002", "owner": "SMITH JOHN", "address": ""}]"#,
        )
        .unwrap();
        assert_eq!(
            render_results(&results),
            "  0. R01-001  DOE JANE, 12 Main St (2.5 acres)\n  1. R01-002  SMITH JOHN\n"
        );
    }
}
