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

//! Central panel painter for the registration dashboard.

use chrono::{DateTime, Local, Utc};
use registration_client::Tone;

use super::layout::{
    tiles_per_row, Dashboard, Screen, OVERVIEW_TITLE, PAGE_TITLE, PROCESSING_NOTICE, REFRESH_LABEL,
};
use super::palette::Palette;
use super::tile::{card_frame, status_tile};

const SECTION_SPACING: f32 = 24.0;
const TILE_SPACING: f32 = 12.0;

/// Something the user asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Refresh,
}

/// Header details that come from the view rather than the report.
#[derive(Debug, Clone, Copy)]
pub struct HeaderInfo {
    /// A fetch is running; the refresh button spins and is disabled
    pub in_flight: bool,
    pub last_updated: Option<DateTime<Utc>>,
}

/// Paint the whole window for `screen`.
pub fn show(
    ctx: &egui::Context,
    screen: &Screen,
    palette: &Palette,
    header: HeaderInfo,
) -> DashboardAction {
    let mut action = DashboardAction::None;

    egui::CentralPanel::default().show(ctx, |ui| match screen {
        Screen::Spinner => centered(ui, 24.0, |ui| {
            ui.add(egui::Spinner::new().size(48.0));
        }),
        Screen::ErrorBanner(message) => centered(ui, 20.0, |ui| {
            banner(ui, palette, Tone::Error, "⚠", message);
        }),
        Screen::Dashboard(dashboard) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(8.0);
                    action = render_header(ui, palette, header);
                    ui.add_space(SECTION_SPACING);
                    render_tiles(ui, dashboard, palette);
                    ui.add_space(SECTION_SPACING - TILE_SPACING);
                    render_overview(ui, dashboard, palette);
                    ui.add_space(SECTION_SPACING);
                    banner(ui, palette, Tone::Info, "ℹ", PROCESSING_NOTICE);
                });
        }
    });

    action
}

/// Place `add_contents` in the middle of the available area.
fn centered(ui: &mut egui::Ui, half_height: f32, add_contents: impl FnOnce(&mut egui::Ui)) {
    let top = (ui.available_height() / 2.0 - half_height).max(0.0);
    ui.vertical_centered(|ui| {
        ui.add_space(top);
        add_contents(ui);
    });
}

fn render_header(ui: &mut egui::Ui, palette: &Palette, header: HeaderInfo) -> DashboardAction {
    let mut action = DashboardAction::None;

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(PAGE_TITLE)
            .color(palette.text)
            .size(28.0)
            .strong());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let button = egui::Button::new(egui::RichText::new(format!("⟳ {REFRESH_LABEL}"))
                .color(egui::Color32::WHITE)
                .size(14.0))
                .fill(palette.info)
                .corner_radius(4.0);

            if ui.add_enabled(!header.in_flight, button)
                .on_hover_text("Reload (F5)")
                .clicked() {
                action = DashboardAction::Refresh;
            }

            if header.in_flight {
                ui.spinner();
            }

            if let Some(updated) = header.last_updated {
                ui.add_space(8.0);
                ui.label(egui::RichText::new(format_updated(updated))
                    .color(palette.muted_text)
                    .size(11.0)
                    .monospace());
            }
        });
    });

    action
}

fn render_tiles(ui: &mut egui::Ui, dashboard: &Dashboard, palette: &Palette) {
    let per_row = tiles_per_row(ui.available_width());

    for row in dashboard.tiles.chunks(per_row) {
        ui.columns(per_row, |columns| {
            for (column, tile) in columns.iter_mut().zip(row) {
                status_tile(column, tile, palette);
            }
        });
        ui.add_space(TILE_SPACING);
    }
}

fn render_overview(ui: &mut egui::Ui, dashboard: &Dashboard, palette: &Palette) {
    card_frame(ui, palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.label(egui::RichText::new(OVERVIEW_TITLE)
            .color(palette.text)
            .size(22.0));

        ui.add_space(8.0);

        ui.label(egui::RichText::new(&dashboard.message)
            .color(palette.text)
            .size(15.0));

        // Omitted entirely when the server sent no basis
        if let Some(basis) = &dashboard.basis_line {
            ui.add_space(6.0);
            ui.label(egui::RichText::new(basis)
                .color(palette.muted_text)
                .size(13.0));
        }
    });
}

/// Tinted single-line alert with a leading glyph.
fn banner(ui: &mut egui::Ui, palette: &Palette, tone: Tone, icon: &str, text: &str) {
    let color = palette.tone(tone);

    egui::Frame::new()
        .fill(palette.banner_fill(tone))
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(egui::RichText::new(icon)
                    .color(color)
                    .size(16.0));
                ui.label(egui::RichText::new(text)
                    .color(palette.text)
                    .size(14.0));
            });
        });
}

fn format_updated(updated: DateTime<Utc>) -> String {
    format!("Updated {}", updated.with_timezone(&Local).format("%H:%M:%S"))
}
