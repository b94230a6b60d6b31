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

//! Client library for the registration status endpoint.
//!
//! The library is split into layers that can be used on their own:
//!
//! - **Report layer**: the [`StatusReport`] model and its wire format
//! - **HTTP layer**: [`StatusClient`], one GET per fetch, tagged [`FetchError`]s
//! - **View layer**: [`StatusView`], the Loading/Error/Loaded state machine
//!   driven by [`StatusView::load`]
//!
//! # Quick Start
//!
//! ```no_run
//! use registration_client::{ClientConfig, StatusClient, StatusView, ViewState};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = StatusClient::new(&ClientConfig::default()).unwrap();
//!     let view = StatusView::new(client, tokio::runtime::Handle::current());
//!
//!     view.load().await.unwrap();
//!     match view.state() {
//!         ViewState::Loaded(report) => println!("{} approved", report.approved_count),
//!         ViewState::Error(message) => eprintln!("{message}"),
//!         ViewState::Loading => unreachable!(),
//!     }
//! }
//! ```
//!
//! ## Report Layer Only
//!
//! ```
//! use registration_client::StatusReport;
//!
//! let body = br#"{"Approved":10,"Reject":2,"Pending":5,"None":1,"message":"All clear"}"#;
//! let report = StatusReport::from_json(body).unwrap();
//! assert_eq!(report.tiles()[0].count, 10);
//! assert!(report.basis_line().is_none());
//! ```

pub mod http;
pub mod report;
pub mod view;

#[cfg(test)]
mod test_support;

pub use http::{
    ClientConfig, FetchError, StatusClient, DEFAULT_BASE_URL, FETCH_FAILED_MESSAGE, STATUS_PATH,
};
pub use report::{StatusCategory, StatusReport, TileCount, Tone, STATUS_BASIS_LABEL};
pub use view::{LoadOutcome, RepaintHook, StatusView, ViewState};
