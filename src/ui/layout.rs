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

//! What goes on screen for each view state.
//!
//! [`Screen::from_state`] decides the content; the painters in
//! [`super::dashboard`] only decide how it looks.

use registration_client::{TileCount, ViewState};

pub const PAGE_TITLE: &str = "Registration Requests";
pub const REFRESH_LABEL: &str = "Refresh Data";
pub const OVERVIEW_TITLE: &str = "Registration Status Overview";
pub const PROCESSING_NOTICE: &str =
    "New registrations are processed within 24-48 hours. For urgent inquiries, please contact support.";

// Window widths where the tile grid reflows
const MEDIUM_WIDTH: f32 = 600.0;
const WIDE_WIDTH: f32 = 900.0;

/// Content of the loaded dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub tiles: [TileCount; 4],
    pub message: String,
    pub basis_line: Option<String>,
}

/// The single thing the window shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Centered progress indicator, nothing else.
    Spinner,
    /// Centered error banner, nothing else.
    ErrorBanner(String),
    Dashboard(Dashboard),
}

impl Screen {
    pub fn from_state(state: &ViewState) -> Self {
        match state {
            ViewState::Loading => Screen::Spinner,
            ViewState::Error(message) => Screen::ErrorBanner(message.clone()),
            ViewState::Loaded(report) => Screen::Dashboard(Dashboard {
                tiles: report.tiles(),
                message: report.message.clone(),
                basis_line: report.basis_line(),
            }),
        }
    }

    /// Tiles on screen; empty unless the dashboard is showing.
    pub fn tiles(&self) -> &[TileCount] {
        match self {
            Screen::Dashboard(dashboard) => &dashboard.tiles,
            Screen::Spinner | Screen::ErrorBanner(_) => &[],
        }
    }
}

/// Tiles per row for a given content width: four wide, two medium, one narrow.
pub fn tiles_per_row(width: f32) -> usize {
    if width >= WIDE_WIDTH {
        4
    } else if width >= MEDIUM_WIDTH {
        2
    } else {
        1
    }
}
