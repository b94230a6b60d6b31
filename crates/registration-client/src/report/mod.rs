// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Registration status report model.
//!
//! The report is the parsed body of `getRegistrationStatus`. Counts are taken
//! verbatim from the server; the client never recomputes or cross-checks them.

use serde::Deserialize;

/// Label placed in front of the optional status basis text.
pub const STATUS_BASIS_LABEL: &str = "Status based on";

/// One registration status summary as returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusReport {
    /// Approved registrations.
    #[serde(rename = "Approved")]
    pub approved_count: u64,

    /// Rejected registrations.
    #[serde(rename = "Reject")]
    pub rejected_count: u64,

    /// Registrations awaiting a decision.
    #[serde(rename = "Pending")]
    pub pending_count: u64,

    /// Registrations nobody has looked at yet.
    #[serde(rename = "None")]
    pub unprocessed_count: u64,

    /// Overall status text.
    pub message: String,

    /// What the status reflects, when the server says.
    #[serde(rename = "status based on", default)]
    pub status_basis: Option<String>,
}

impl StatusReport {
    /// Parse a response body.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Counts in display order: approved, rejected, pending, unprocessed.
    #[must_use]
    pub fn tiles(&self) -> [TileCount; 4] {
        [
            TileCount::new(StatusCategory::Approved, self.approved_count),
            TileCount::new(StatusCategory::Rejected, self.rejected_count),
            TileCount::new(StatusCategory::Pending, self.pending_count),
            TileCount::new(StatusCategory::Unprocessed, self.unprocessed_count),
        ]
    }

    /// The labelled basis line, or `None` when there is nothing to show.
    ///
    /// An empty basis is treated the same as a missing one.
    #[must_use]
    pub fn basis_line(&self) -> Option<String> {
        self.status_basis
            .as_deref()
            .filter(|basis| !basis.is_empty())
            .map(|basis| format!("{STATUS_BASIS_LABEL}: {basis}"))
    }
}

/// Semantic color slot for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

/// The four count categories shown as tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Approved,
    Rejected,
    Pending,
    Unprocessed,
}

impl StatusCategory {
    /// Tile title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            StatusCategory::Approved => "Approved",
            StatusCategory::Rejected => "Rejected",
            StatusCategory::Pending => "Pending",
            StatusCategory::Unprocessed => "Unprocessed",
        }
    }

    /// Glyph drawn next to the count.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            StatusCategory::Approved => "✔",
            StatusCategory::Rejected => "✖",
            StatusCategory::Pending => "⏱",
            StatusCategory::Unprocessed => "❓",
        }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        match self {
            StatusCategory::Approved => Tone::Success,
            StatusCategory::Rejected => Tone::Error,
            StatusCategory::Pending => Tone::Warning,
            StatusCategory::Unprocessed => Tone::Info,
        }
    }
}

/// A single tile's category and count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCount {
    pub category: StatusCategory,
    pub count: u64,
}

impl TileCount {
    fn new(category: StatusCategory, count: u64) -> Self {
        Self { category, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_report() {
        let body = br#"{"Approved":10,"Reject":2,"Pending":5,"None":1,"message":"All clear","status based on":"last 24h"}"#;
        let report = StatusReport::from_json(body).unwrap();

        assert_eq!(report.approved_count, 10);
        assert_eq!(report.rejected_count, 2);
        assert_eq!(report.pending_count, 5);
        assert_eq!(report.unprocessed_count, 1);
        assert_eq!(report.message, "All clear");
        assert_eq!(report.basis_line().as_deref(), Some("Status based on: last 24h"));
    }

    #[test]
    fn test_parse_without_basis() {
        let body = br#"{"Approved":0,"Reject":0,"Pending":0,"None":0,"message":"No requests yet"}"#;
        let report = StatusReport::from_json(body).unwrap();

        assert_eq!(report.status_basis, None);
        assert_eq!(report.basis_line(), None);
        assert!(report.tiles().iter().all(|tile| tile.count == 0));
    }

    #[test]
    fn test_empty_basis_is_hidden() {
        let body = br#"{"Approved":1,"Reject":1,"Pending":1,"None":1,"message":"ok","status based on":""}"#;
        let report = StatusReport::from_json(body).unwrap();
        assert_eq!(report.basis_line(), None);
    }

    #[test]
    fn test_tiles_keep_server_counts_and_order() {
        let report = StatusReport {
            approved_count: 7_000_000_001,
            rejected_count: 3,
            pending_count: 0,
            unprocessed_count: 42,
            message: String::new(),
            status_basis: None,
        };

        let tiles = report.tiles();
        let categories: Vec<_> = tiles.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![
                StatusCategory::Approved,
                StatusCategory::Rejected,
                StatusCategory::Pending,
                StatusCategory::Unprocessed,
            ]
        );
        let counts: Vec<_> = tiles.iter().map(|t| t.count).collect();
        assert_eq!(counts, vec![7_000_000_001, 3, 0, 42]);
    }

    #[test]
    fn test_category_tones() {
        assert_eq!(StatusCategory::Approved.tone(), Tone::Success);
        assert_eq!(StatusCategory::Rejected.tone(), Tone::Error);
        assert_eq!(StatusCategory::Pending.tone(), Tone::Warning);
        assert_eq!(StatusCategory::Unprocessed.tone(), Tone::Info);
        assert_eq!(StatusCategory::Unprocessed.title(), "Unprocessed");
    }

    #[test]
    fn test_rejects_missing_or_negative_counts() {
        assert!(StatusReport::from_json(br#"{"Approved":1,"Reject":1,"Pending":1,"message":"x"}"#).is_err());
        assert!(StatusReport::from_json(br#"{"Approved":-1,"Reject":1,"Pending":1,"None":1,"message":"x"}"#).is_err());
        assert!(StatusReport::from_json(b"<html>oops</html>").is_err());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let body = br#"{"Approved":1,"Reject":2,"Pending":3,"None":4,"message":"m","extra":true}"#;
        let report = StatusReport::from_json(body).unwrap();
        assert_eq!(report.unprocessed_count, 4);
    }
}
