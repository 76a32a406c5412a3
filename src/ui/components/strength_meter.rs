// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Labeled strength gauge rendered under the registration password field.
//! Pure presentation; the scoring lives in `models::strength`.

use eframe::egui;
use egui::RichText;

use crate::models::strength::{self, StrengthLevel};

fn fill_color(level: StrengthLevel) -> egui::Color32 {
    match level {
        StrengthLevel::Weak => egui::Color32::from_rgb(0xe5, 0x5a, 0x2b),
        StrengthLevel::Fair => egui::Color32::from_rgb(0xff, 0xa5, 0x00),
        StrengthLevel::Good => egui::Color32::from_rgb(0x32, 0xcd, 0x32),
        StrengthLevel::Strong => egui::Color32::from_rgb(0x00, 0xc9, 0x74),
    }
}

/// Render the gauge for the live password value; recomputed every keystroke.
pub fn view(ui: &mut egui::Ui, password: &str) {
    if password.is_empty() {
        ui.add(
            egui::ProgressBar::new(0.0)
                .desired_height(5.0)
                .corner_radius(2),
        );
        ui.label(
            RichText::new("Password strength")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        return;
    }

    let report = strength::assess(password);
    ui.add(
        egui::ProgressBar::new(report.fraction())
            .fill(fill_color(report.level))
            .desired_height(5.0)
            .corner_radius(2),
    );
    ui.label(
        RichText::new(report.caption())
            .small()
            .color(egui::Color32::from_gray(110)),
    );
}
