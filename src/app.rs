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

use std::sync::Arc;

use eframe::egui;
use log::info;
use registration_client::{StatusClient, StatusView};
use tokio::runtime::Runtime;

use crate::ui::{dashboard, DashboardAction, HeaderInfo, Palette, Screen};

pub struct DashboardApp {
    view: StatusView,
    palette: Palette,
    /// First frame triggers the initial load
    started: bool,
    // Fetch tasks run here; dropping it on exit aborts anything in flight
    _runtime: Runtime,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Runtime,
        client: StatusClient,
        dark_mode: bool,
    ) -> Self {
        cc.egui_ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        let ctx = cc.egui_ctx.clone();
        let view = StatusView::new(client, runtime.handle().clone())
            .with_repaint(Arc::new(move || ctx.request_repaint()));

        info!("Dashboard ready, status endpoint is {}", view.endpoint());

        Self {
            view,
            palette: Palette::for_mode(dark_mode),
            started: false,
            _runtime: runtime,
        }
    }

    fn refresh(&self) {
        // The task applies its own result; the handle is not needed here
        drop(self.view.load());
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.started {
            self.started = true;
            self.refresh();
        }

        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            info!("Refresh requested from keyboard");
            self.refresh();
        }

        let screen = Screen::from_state(&self.view.state());
        let header = HeaderInfo {
            in_flight: self.view.is_loading(),
            last_updated: self.view.last_updated(),
        };

        if dashboard::show(ctx, &screen, &self.palette, header) == DashboardAction::Refresh {
            info!("Refresh requested");
            self.refresh();
        }
    }
}
