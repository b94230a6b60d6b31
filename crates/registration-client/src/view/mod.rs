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

//! Status view state and the load cycle.
//!
//! [`StatusView`] owns the three-way [`ViewState`]. Each [`StatusView::load`]
//! call flips the state to [`ViewState::Loading`] and spawns one fetch on the
//! runtime. Calls are numbered; a response is only applied if no newer call
//! has been issued since, so overlapping refreshes can never leave an older
//! result on screen.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use reqwest::Url;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::http::StatusClient;
use crate::report::StatusReport;

/// What the view is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// A fetch is in flight.
    Loading,
    /// The last fetch failed; holds the user-facing message.
    Error(String),
    /// The last fetch succeeded.
    Loaded(StatusReport),
}

/// What happened to the result of one [`StatusView::load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result became the current state.
    Applied,
    /// A newer load was issued first; the result was dropped.
    Superseded,
}

/// Callback fired after a result is applied.
pub type RepaintHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
struct Shared {
    state: ViewState,
    issued: u64,
    last_updated: Option<DateTime<Utc>>,
}

/// Owner of the dashboard's state and its fetch cycle.
pub struct StatusView {
    client: StatusClient,
    runtime: Handle,
    shared: Arc<RwLock<Shared>>,
    repaint: Option<RepaintHook>,
}

impl std::fmt::Debug for StatusView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusView")
            .field("client", &self.client)
            .field("shared", &self.shared)
            .finish_non_exhaustive()
    }
}

impl StatusView {
    /// Create a view that spawns its fetches on `runtime`.
    ///
    /// The view starts out in [`ViewState::Loading`]; nothing is fetched
    /// until [`load`](Self::load) is called.
    #[must_use]
    pub fn new(client: StatusClient, runtime: Handle) -> Self {
        Self {
            client,
            runtime,
            shared: Arc::new(RwLock::new(Shared {
                state: ViewState::Loading,
                issued: 0,
                last_updated: None,
            })),
            repaint: None,
        }
    }

    /// Install a callback that runs whenever a fetch result is applied.
    #[must_use]
    pub fn with_repaint(mut self, hook: RepaintHook) -> Self {
        self.repaint = Some(hook);
        self
    }

    /// Start a fetch.
    ///
    /// The state switches to [`ViewState::Loading`] before this returns.
    /// Dropping the returned handle detaches the fetch; it still completes
    /// and applies its result.
    pub fn load(&self) -> JoinHandle<LoadOutcome> {
        let token = {
            let mut shared = write_shared(&self.shared);
            shared.issued += 1;
            shared.state = ViewState::Loading;
            shared.issued
        };

        info!("Loading registration status from {} (request #{})", self.client.endpoint(), token);

        let client = self.client.clone();
        let shared = Arc::clone(&self.shared);
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let next = match client.fetch().await {
                Ok(report) => ViewState::Loaded(report),
                Err(e) => {
                    warn!("Registration status request #{} failed: {}", token, e);
                    ViewState::Error(e.user_message().to_string())
                }
            };

            let outcome = apply(&shared, token, next);
            if outcome == LoadOutcome::Applied {
                if let Some(repaint) = repaint {
                    repaint();
                }
            }
            outcome
        })
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.shared
            .read()
            .map(|s| s.state.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().state.clone())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state(), ViewState::Loading)
    }

    /// When a result (success or failure) was last applied.
    #[must_use]
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.shared
            .read()
            .map(|s| s.last_updated)
            .unwrap_or_else(|poisoned| poisoned.into_inner().last_updated)
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        self.client.endpoint()
    }
}

fn write_shared(shared: &RwLock<Shared>) -> RwLockWriteGuard<'_, Shared> {
    shared.write().unwrap_or_else(PoisonError::into_inner)
}

/// Apply `next` if `token` is still the newest issued load.
fn apply(shared: &RwLock<Shared>, token: u64, next: ViewState) -> LoadOutcome {
    let mut shared = write_shared(shared);
    if shared.issued != token {
        debug!(
            "Discarding response for request #{} (newest is #{})",
            token, shared.issued
        );
        return LoadOutcome::Superseded;
    }

    shared.state = next;
    shared.last_updated = Some(Utc::now());
    LoadOutcome::Applied
}
