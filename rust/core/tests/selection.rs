// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection and highlight behaviour against an in-memory map surface.

mod common;

use common::{sample_parcels, RecordingShell, RecordingSurface};
use taxmap_core::{
    AliasPriority, DetailsContent, Error, FeatureKey, FeatureStyle, LonLat, SelectionController,
    NO_DETAILS,
};

fn loaded() -> SelectionController<RecordingSurface, RecordingShell> {
    let mut controller = SelectionController::new(
        RecordingSurface::default(),
        RecordingShell::default(),
        AliasPriority::LegacyFirst,
    );
    controller.load_layer(sample_parcels());
    controller
}

#[test]
fn test_load_binds_popups_and_fits_data() {
    let controller = loaded();
    let surface = controller.surface();
    assert_eq!(surface.layer_replacements, 1);
    assert_eq!(surface.popups.len(), 4);
    assert!(surface.popups[&FeatureKey(0)].contains("DOE JANE"));
    assert_eq!(surface.fitted.len(), 1);
    assert_eq!(surface.count_with(FeatureStyle::Default), 4);
    assert!(controller.state().is_idle());
}

#[test]
fn test_select_is_idempotent() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(1)).unwrap();
    controller.select_parcel(FeatureKey(1)).unwrap();

    let surface = controller.surface();
    assert_eq!(surface.count_with(FeatureStyle::Selected), 1);
    assert_eq!(surface.style_of(1), FeatureStyle::Selected);

    let details = &controller.shell().details;
    assert_eq!(details.len(), 2);
    assert_eq!(details[0], details[1]);
    assert_eq!(controller.selected_id().as_deref(), Some("R01-002"));
}

#[test]
fn test_selection_is_mutually_exclusive() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(0)).unwrap();
    controller.select_parcel(FeatureKey(2)).unwrap();

    let surface = controller.surface();
    assert_eq!(surface.style_of(0), FeatureStyle::Default);
    assert_eq!(surface.style_of(2), FeatureStyle::Selected);
    assert_eq!(surface.count_with(FeatureStyle::Selected), 1);
    assert_eq!(controller.state().selected, Some(FeatureKey(2)));
}

#[test]
fn test_unidentified_parcel_is_selectable() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(3)).unwrap();
    assert_eq!(controller.selected_id(), None);
    match controller.shell().details.last().unwrap() {
        DetailsContent::Fields(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].label, "Zone");
        }
        other => panic!("expected raw rows, got {other:?}"),
    }
}

#[test]
fn test_select_out_of_range_is_an_error() {
    let mut controller = loaded();
    assert!(matches!(
        controller.select_parcel(FeatureKey(99)),
        Err(Error::UnknownParcel(_))
    ));
    assert!(matches!(controller.select_by_id("999"), Err(Error::UnknownParcel(_))));
    assert!(controller.shell().details.is_empty());
}

#[test]
fn test_highlight_leaves_selection_intact() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(1)).unwrap();

    let center = LonLat::new(-69.155, 44.675);
    assert!(controller.highlight_by_id("U03-014", Some(center)));

    let surface = controller.surface();
    assert_eq!(surface.overlay, Some(FeatureKey(2)));
    assert_eq!(surface.view, Some(center));
    assert_eq!(surface.style_of(1), FeatureStyle::Selected);
    assert_eq!(controller.state().selected, Some(FeatureKey(1)));
    assert_eq!(controller.highlighted_id().as_deref(), Some("U03-014"));
}

#[test]
fn test_highlight_without_center_does_not_recenter() {
    let mut controller = loaded();
    assert!(controller.highlight_by_id("R01-001", None));
    assert_eq!(controller.surface().overlay, Some(FeatureKey(0)));
    assert_eq!(controller.surface().view, None);
}

#[test]
fn test_highlight_miss_is_silent() {
    let mut controller = loaded();
    assert!(controller.highlight_by_id("R01-001", None));
    let details_before = controller.shell().details.len();

    assert!(!controller.highlight_by_id("999", Some(LonLat::new(0.0, 0.0))));
    assert_eq!(controller.surface().overlay, None);
    assert_eq!(controller.surface().view, None);
    assert_eq!(controller.shell().details.len(), details_before);
    assert_eq!(controller.state().highlighted, None);
}

#[test]
fn test_clear_highlight_keeps_selection() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(0)).unwrap();
    controller.highlight_by_id("R01-002", None);
    controller.clear_highlight();

    assert_eq!(controller.surface().overlay, None);
    assert_eq!(controller.state().selected, Some(FeatureKey(0)));
    assert_eq!(controller.surface().style_of(0), FeatureStyle::Selected);
}

#[test]
fn test_hover_never_overrides_selection() {
    let mut controller = loaded();
    controller.pointer_enter(FeatureKey(0));
    assert_eq!(controller.surface().style_of(0), FeatureStyle::Hover);

    // click while hovering, then leave
    controller.select_parcel(FeatureKey(0)).unwrap();
    controller.pointer_leave(FeatureKey(0));
    assert_eq!(controller.surface().style_of(0), FeatureStyle::Selected);

    controller.pointer_enter(FeatureKey(0));
    assert_eq!(controller.surface().style_of(0), FeatureStyle::Selected);

    controller.pointer_enter(FeatureKey(1));
    controller.pointer_leave(FeatureKey(1));
    assert_eq!(controller.surface().style_of(1), FeatureStyle::Default);
}

#[test]
fn test_reload_resets_state() {
    let mut controller = loaded();
    controller.select_parcel(FeatureKey(0)).unwrap();
    controller.highlight_by_id("R01-002", None);

    controller.load_layer(sample_parcels());
    assert!(controller.state().is_idle());
    assert_eq!(controller.surface().overlay, None);
    assert_eq!(controller.surface().count_with(FeatureStyle::Selected), 0);
}

#[test]
fn test_empty_record_details_sentinel() {
    let mut controller = SelectionController::new(
        RecordingSurface::default(),
        RecordingShell::default(),
        AliasPriority::LegacyFirst,
    );
    controller.load_layer(taxmap_core::ParcelCollection {
        features: vec![taxmap_core::ParcelFeature::new(None, Default::default())],
    });
    controller.select_parcel(FeatureKey(0)).unwrap();
    assert_eq!(
        controller.shell().details.last(),
        Some(&DetailsContent::placeholder(NO_DETAILS))
    );
    // no geometry, nothing to fit
    assert!(controller.surface().fitted.is_empty());
}
