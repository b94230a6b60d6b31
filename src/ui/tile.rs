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

use registration_client::TileCount;

use super::palette::Palette;

const ICON_SIZE: f32 = 40.0;

/// Raised card frame shared by tiles and the overview panel.
pub fn card_frame(ui: &egui::Ui, palette: &Palette) -> egui::Frame {
    egui::Frame::window(ui.style())
        .fill(palette.card_fill)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .corner_radius(6.0)
        .inner_margin(egui::Margin::same(16))
}

/// One count card: tone-colored glyph on the left, title and count on the right.
pub fn status_tile(ui: &mut egui::Ui, tile: &TileCount, palette: &Palette) {
    let color = palette.tone(tile.category.tone());

    card_frame(ui, palette).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(tile.category.icon())
                .color(color)
                .size(ICON_SIZE));

            ui.add_space(12.0);

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(tile.category.title())
                    .color(palette.text)
                    .size(18.0));
                ui.label(egui::RichText::new(tile.count.to_string())
                    .color(palette.text)
                    .size(32.0)
                    .strong());
            });
        });
    });
}
