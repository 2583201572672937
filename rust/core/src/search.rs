// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Search results and the request policy around them.
//!
//! Search ranking is done by the parcel service; the client only gates queries
//! on length, debounces keystrokes and drops responses that arrive after a
//! newer request was issued.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::bounds::LonLat;

/// Queries shorter than this (in characters, after trimming) are not sent.
pub const MIN_QUERY_LEN: usize = 2;

/// Default quiet period before a live search fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// One hit returned by the parcel service, in server rank order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "acreage_text")]
    pub acreage: Option<String>,
    #[serde(default)]
    pub center: Option<LonLat>,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Acreage arrives as a string or a number depending on the export.
fn acreage_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(crate::attributes::scalar_text))
}

/// Trimmed query text when it is long enough to send.
pub fn searchable_query(input: &str) -> Option<&str> {
    let query = input.trim();
    (query.chars().count() >= MIN_QUERY_LEN).then_some(query)
}

/// Identifies one outstanding request of a given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestToken(pub u64);

/// Hands out monotonically increasing tokens; only the latest one is current.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    /// Make every outstanding token stale.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[inline]
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

/// Keystroke debouncer. Each keystroke resets the timer by starting a new
/// generation; a timer that wakes up for an older generation does nothing.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a keystroke; returns the generation its timer must present.
    pub fn trigger(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    /// Whether a timer for `generation` may fire.
    pub fn should_fire(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_length_gate() {
        assert_eq!(searchable_query("s"), None);
        assert_eq!(searchable_query("  s  "), None);
        assert_eq!(searchable_query("sm"), Some("sm"));
        assert_eq!(searchable_query(" é "), None);
        assert_eq!(searchable_query("éa"), Some("éa"));
    }

    #[test]
    fn test_sequencer_only_latest_is_current() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        seq.invalidate();
        assert!(!seq.is_current(second));
    }

    #[test]
    fn test_debouncer_resets_on_keystroke() {
        let mut debounce = Debouncer::default();
        assert_eq!(debounce.delay(), Duration::from_millis(300));
        let a = debounce.trigger();
        let b = debounce.trigger();
        assert!(!debounce.should_fire(a));
        assert!(debounce.should_fire(b));
        debounce.cancel();
        assert!(!debounce.should_fire(b));
    }

    #[test]
    fn test_result_decoding() {
        let result: SearchResult = serde_json::from_str(
            r#"{"id": "R01-001", "owner": "DOE JANE", "address": "", "acreage": 4.5, "center": [-69.1, 44.7]}"#,
        )
        .unwrap();
        assert_eq!(result.address, None);
        assert_eq!(result.acreage.as_deref(), Some("4.5"));
        assert_eq!(result.center, Some(LonLat::new(-69.1, 44.7)));

        let bare: SearchResult = serde_json::from_str(r#"{"id": "7", "center": null}"#).unwrap();
        assert_eq!(bare.owner, "");
        assert_eq!(bare.center, None);
    }
}
