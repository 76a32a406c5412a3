// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Server status widget: a pulsing indicator dot, the latest feed message,
//! and (in admin mode) manual override controls.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::RichText;

use crate::logic::gateway::GatewayError;
use crate::models::status::{SERVER_VERSION, ServerHealth, StatusSnapshot};

/// How often the feed is polled.
pub const POLL_INTERVAL: Duration = Duration::from_secs(30);

#[derive(Debug, Default)]
pub struct StatusModel {
    pub snapshot: Option<StatusSnapshot>,
    /// A poll command is in flight.
    pub polling: bool,
    /// The last poll failed; render the offline fallback.
    pub unreachable: bool,
    last_started: Option<Instant>,
    /// Admin panel input for a custom override message.
    pub custom_message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusMsg {
    Refreshed(Result<StatusSnapshot, GatewayError>),
    RefreshClicked,
    OverrideHealth(ServerHealth),
    CustomMessageChanged(String),
    ApplyCustomMessage,
}

/// Whether the 30 s cadence (or a manual refresh) should start a poll now.
pub fn poll_due(model: &StatusModel, now: Instant) -> bool {
    !model.polling
        && model
            .last_started
            .is_none_or(|started| now.duration_since(started) >= POLL_INTERVAL)
}

pub fn begin_poll(model: &mut StatusModel, now: Instant) {
    model.polling = true;
    model.last_started = Some(now);
}

pub fn update(model: &mut StatusModel, msg: StatusMsg) {
    match msg {
        StatusMsg::Refreshed(Ok(snapshot)) => {
            log::info!("server status: {}", snapshot.message);
            model.polling = false;
            model.unreachable = false;
            model.snapshot = Some(snapshot);
        }
        StatusMsg::Refreshed(Err(err)) => {
            log::warn!("status poll failed: {err}");
            model.polling = false;
            model.unreachable = true;
        }
        StatusMsg::RefreshClicked => {
            // Forces the next tick to poll immediately.
            model.last_started = None;
        }
        StatusMsg::OverrideHealth(health) => {
            model.unreachable = false;
            let snapshot = StatusSnapshot::new(health, SERVER_VERSION);
            // The admin override has no live player count.
            let snapshot = match health {
                ServerHealth::Online { players: 0, .. } => {
                    snapshot.with_message("Online - players joining...")
                }
                _ => snapshot,
            };
            model.snapshot = Some(snapshot);
        }
        StatusMsg::CustomMessageChanged(text) => model.custom_message = text,
        StatusMsg::ApplyCustomMessage => {
            let message = model.custom_message.trim();
            if message.is_empty() {
                return;
            }
            match &mut model.snapshot {
                Some(snapshot) => snapshot.message = message.to_string(),
                None => {
                    model.snapshot = Some(
                        StatusSnapshot::new(ServerHealth::Maintenance, SERVER_VERSION)
                            .with_message(message),
                    );
                }
            }
        }
    }
}

fn presentation(model: &StatusModel) -> (egui::Color32, String, bool) {
    if model.unreachable {
        return (egui::Color32::from_gray(102), "Server unreachable".into(), false);
    }
    match &model.snapshot {
        None => (
            egui::Color32::from_gray(102),
            "Checking server status...".into(),
            false,
        ),
        Some(snapshot) => {
            let (color, pulse) = match snapshot.health {
                ServerHealth::Online { .. } => (egui::Color32::from_rgb(0x00, 0xff, 0x88), true),
                ServerHealth::Maintenance => (egui::Color32::from_rgb(0xff, 0x6b, 0x35), true),
                ServerHealth::Offline => (egui::Color32::from_gray(102), false),
            };
            (color, snapshot.message.clone(), pulse)
        }
    }
}

/// Render the widget. `time` is the UI clock in seconds, used for the pulse.
pub fn view(ui: &mut egui::Ui, model: &StatusModel, admin: bool, time: f64) -> Vec<StatusMsg> {
    let mut msgs = Vec::new();
    let (color, message, pulse) = presentation(model);

    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        let radius = if pulse {
            4.5 + 1.5 * ((time * std::f64::consts::TAU / 2.0).sin() as f32).abs()
        } else {
            5.0
        };
        ui.painter().circle_filled(rect.center(), radius, color);

        ui.label(RichText::new(message).strong());
        if let Some(snapshot) = &model.snapshot {
            ui.label(
                RichText::new(format!("v{}", snapshot.version))
                    .small()
                    .color(egui::Color32::from_gray(110)),
            );
        }
        if model.polling {
            ui.add(egui::Spinner::new().size(12.0));
        } else if ui
            .small_button(egui_phosphor::regular::ARROWS_CLOCKWISE)
            .on_hover_text("Refresh now")
            .clicked()
        {
            msgs.push(StatusMsg::RefreshClicked);
        }
    });

    if admin {
        ui.add_space(6.0);
        egui::CollapsingHeader::new("Status override")
            .default_open(false)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    if ui.button("Online").clicked() {
                        msgs.push(StatusMsg::OverrideHealth(ServerHealth::Online {
                            players: 0,
                            max_players: crate::models::status::MAX_PLAYERS,
                        }));
                    }
                    if ui.button("Maintenance").clicked() {
                        msgs.push(StatusMsg::OverrideHealth(ServerHealth::Maintenance));
                    }
                    if ui.button("Offline").clicked() {
                        msgs.push(StatusMsg::OverrideHealth(ServerHealth::Offline));
                    }
                });
                ui.horizontal(|ui| {
                    let mut text = model.custom_message.clone();
                    if ui
                        .add(
                            egui::TextEdit::singleline(&mut text)
                                .hint_text("Custom status message")
                                .desired_width(220.0),
                        )
                        .changed()
                    {
                        msgs.push(StatusMsg::CustomMessageChanged(text));
                    }
                    if ui.button("Apply").clicked() {
                        msgs.push(StatusMsg::ApplyCustomMessage);
                    }
                });
            });
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_cadence_is_thirty_seconds() {
        let t0 = Instant::now();
        let mut model = StatusModel::default();
        assert!(poll_due(&model, t0), "first poll fires immediately");

        begin_poll(&mut model, t0);
        assert!(!poll_due(&model, t0 + Duration::from_secs(29)), "in flight");

        update(
            &mut model,
            StatusMsg::Refreshed(Ok(StatusSnapshot::new(
                ServerHealth::Offline,
                SERVER_VERSION,
            ))),
        );
        assert!(!poll_due(&model, t0 + Duration::from_secs(29)));
        assert!(poll_due(&model, t0 + POLL_INTERVAL));
    }

    #[test]
    fn failed_poll_degrades_to_unreachable() {
        let mut model = StatusModel::default();
        begin_poll(&mut model, Instant::now());
        update(
            &mut model,
            StatusMsg::Refreshed(Err(GatewayError::Unreachable)),
        );
        assert!(!model.polling);
        assert!(model.unreachable);

        // The next successful poll recovers.
        update(
            &mut model,
            StatusMsg::Refreshed(Ok(StatusSnapshot::new(
                ServerHealth::Maintenance,
                SERVER_VERSION,
            ))),
        );
        assert!(!model.unreachable);
    }

    #[test]
    fn manual_refresh_resets_the_cadence() {
        let t0 = Instant::now();
        let mut model = StatusModel::default();
        begin_poll(&mut model, t0);
        update(
            &mut model,
            StatusMsg::Refreshed(Ok(StatusSnapshot::new(
                ServerHealth::Offline,
                SERVER_VERSION,
            ))),
        );
        assert!(!poll_due(&model, t0 + Duration::from_secs(5)));
        update(&mut model, StatusMsg::RefreshClicked);
        assert!(poll_due(&model, t0 + Duration::from_secs(5)));
    }

    #[test]
    fn overrides_replace_the_snapshot_and_message() {
        let mut model = StatusModel::default();
        update(&mut model, StatusMsg::OverrideHealth(ServerHealth::Offline));
        assert_eq!(
            model.snapshot.as_ref().unwrap().message,
            "Server offline"
        );

        update(
            &mut model,
            StatusMsg::CustomMessageChanged("Back at 18:00".into()),
        );
        update(&mut model, StatusMsg::ApplyCustomMessage);
        assert_eq!(model.snapshot.as_ref().unwrap().message, "Back at 18:00");
    }

    #[test]
    fn empty_custom_message_is_ignored() {
        let mut model = StatusModel::default();
        update(&mut model, StatusMsg::CustomMessageChanged("   ".into()));
        update(&mut model, StatusMsg::ApplyCustomMessage);
        assert!(model.snapshot.is_none());
    }
}
