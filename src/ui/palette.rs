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

use egui::Color32;
use registration_client::Tone;

/// Semantic colors for dark and light visuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub card_fill: Color32,
    pub card_stroke: Color32,
    pub text: Color32,
    pub muted_text: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            success: Color32::from_rgb(102, 187, 106),
            error: Color32::from_rgb(244, 67, 54),
            warning: Color32::from_rgb(255, 167, 38),
            info: Color32::from_rgb(41, 182, 246),
            card_fill: Color32::from_rgba_unmultiplied(25, 30, 35, 230),
            card_stroke: Color32::from_rgb(60, 80, 100),
            text: Color32::from_rgb(220, 220, 220),
            muted_text: Color32::from_rgb(150, 150, 150),
        }
    }

    pub fn light() -> Self {
        Self {
            success: Color32::from_rgb(46, 125, 50),
            error: Color32::from_rgb(211, 47, 47),
            warning: Color32::from_rgb(237, 108, 2),
            info: Color32::from_rgb(2, 136, 209),
            card_fill: Color32::WHITE,
            card_stroke: Color32::from_rgb(210, 215, 220),
            text: Color32::from_rgb(33, 33, 33),
            muted_text: Color32::from_rgb(110, 110, 110),
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn tone(&self, tone: Tone) -> Color32 {
        match tone {
            Tone::Success => self.success,
            Tone::Error => self.error,
            Tone::Warning => self.warning,
            Tone::Info => self.info,
        }
    }

    /// Faint background for a banner of the given tone.
    pub fn banner_fill(&self, tone: Tone) -> Color32 {
        self.tone(tone).gamma_multiply(0.15)
    }
}
