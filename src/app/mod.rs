//! Window bootstrap for the companion app.

use crate::ui::CompanionApp;
use eframe::egui;
use egui_phosphor::Variant;

/// Open the native window and hand control to the event loop until the user
/// closes the app.
pub fn run(admin: bool) -> eframe::Result<()> {
    // Icons used across the UI come from the Phosphor set.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([520.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Blockhaven Companion",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(CompanionApp::new(cc, admin)))
        }),
    )
}
