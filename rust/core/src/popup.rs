// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Popup fragments bound to parcel polygons.

use html_escape::encode_text;

use crate::aliases::CanonicalField;
use crate::normalize::CanonicalParcelView;

/// Short HTML summary of a parcel. All values are escaped.
pub fn popup_html(view: &CanonicalParcelView) -> String {
    let mut html = String::from("<div class=\"parcel-popup\">");
    html.push_str(&format!("<strong>{}</strong>", encode_text(view.owner_text())));

    for field in [
        CanonicalField::Id,
        CanonicalField::Address,
        CanonicalField::Acreage,
    ] {
        if let Some(value) = view.display_value(field) {
            let value = match field {
                CanonicalField::Acreage => format!("{value} acres"),
                _ => value,
            };
            html.push_str(&format!(
                "<br><span class=\"label\">{}:</span> {}",
                field.label(),
                encode_text(&value)
            ));
        }
    }

    html.push_str("</div>");
    html
}
