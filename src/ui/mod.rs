// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! The eframe shell: owns the root model, pumps messages through the MVU
//! kernel each frame, dispatches commands to the worker threads, and persists
//! the small set of profile values between sessions.

pub mod components;

use std::sync::Arc;
use std::time::{Duration, Instant};

use eframe::egui;
use egui::RichText;

use crate::logic::gateway::Services;
use crate::mvu::{self, AppModel, Command, Msg, Route, SERVER_ADDRESS};
use crate::ui::components::{login_form, notifications, register_form, status_widget};

/// Persisted theme override, "dark" or "light". Absent means follow the OS.
pub const THEME_KEY: &str = "theme";
/// Username to prefill when "remember me" was checked.
pub const REMEMBERED_USER_KEY: &str = "remembered_user";
/// The one-shot maintenance banner was already shown on this profile.
pub const MAINTENANCE_SHOWN_KEY: &str = "maintenance_notice_shown";

const WORKER_COUNT: usize = 2;

pub struct CompanionApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
    /// Explicit theme picked with the toggle; `None` follows the OS.
    theme_choice: Option<egui::Theme>,
}

impl CompanionApp {
    pub fn new(cc: &eframe::CreationContext<'_>, admin: bool) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let services = Arc::new(Services::default());
        for _ in 0..WORKER_COUNT {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let services = Arc::clone(&services);
            let ctx = cc.egui_ctx.clone();
            std::thread::spawn(move || {
                while let Ok(cmd) = cmd_rx.recv() {
                    let msg = mvu::run_command(cmd, &services);
                    if msg_tx.send(msg).is_err() {
                        break;
                    }
                    ctx.request_repaint();
                }
            });
        }

        let mut model = AppModel {
            admin,
            ..Default::default()
        };
        let mut theme_choice = None;

        if let Some(storage) = cc.storage {
            if let Some(user) = storage.get_string(REMEMBERED_USER_KEY) {
                model.login.username = components::field::FieldModel::with_value(&user);
                model.login.remember = true;
                model.remembered_user = Some(user);
            }
            model.maintenance_notice_shown = storage
                .get_string(MAINTENANCE_SHOWN_KEY)
                .is_some_and(|v| v == "true");
            theme_choice = match storage.get_string(THEME_KEY).as_deref() {
                Some("dark") => Some(egui::Theme::Dark),
                Some("light") => Some(egui::Theme::Light),
                _ => None,
            };
        }

        match theme_choice {
            Some(theme) => cc.egui_ctx.set_theme(theme),
            None => cc.egui_ctx.set_theme(egui::ThemePreference::System),
        }

        model.show_maintenance_banner_once(Instant::now());

        Self {
            model,
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
            theme_choice,
        }
    }

    /// How soon the next frame is wanted while nothing is being typed.
    fn repaint_cadence(&self) -> Duration {
        if self.model.notices.is_animating() {
            return Duration::from_millis(16);
        }
        if self.model.notices.is_active()
            || self.model.pending_redirect.is_some()
            || self.model.status.polling
        {
            return Duration::from_millis(100);
        }
        if self.model.route == Route::Home {
            // The status dot pulses on the home view.
            return Duration::from_millis(50);
        }
        Duration::from_secs(1)
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!(
                        "{} Blockhaven",
                        egui_phosphor::regular::CUBE
                    ))
                    .heading()
                    .strong(),
                );
                ui.add_space(16.0);

                for (label, route) in [
                    ("Home", Route::Home),
                    ("Sign in", Route::Login),
                    ("Register", Route::Register),
                ] {
                    let selected = self.model.route == route;
                    if ui.selectable_label(selected, label).clicked() && !selected {
                        self.inbox.push(Msg::Navigate(route));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let dark = ctx.theme() == egui::Theme::Dark;
                    let icon = if dark {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui
                        .button(icon)
                        .on_hover_text("Toggle theme")
                        .clicked()
                    {
                        let next = if dark {
                            egui::Theme::Light
                        } else {
                            egui::Theme::Dark
                        };
                        ctx.set_theme(next);
                        self.theme_choice = Some(next);
                    }
                    if self.model.pending_commands > 0 {
                        ui.add(egui::Spinner::new().size(14.0));
                    }
                });
            });
            ui.add_space(2.0);
        });
    }

    fn render_home(&self, ui: &mut egui::Ui) -> Vec<Msg> {
        let mut msgs = Vec::new();

        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.label(RichText::new("BLOCKHAVEN").size(36.0).strong());
            ui.label(
                RichText::new("Survival community server since 2019")
                    .color(egui::Color32::from_gray(130)),
            );
            ui.add_space(20.0);

            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 140.0);
                ui.label(
                    RichText::new(SERVER_ADDRESS)
                        .monospace()
                        .size(18.0),
                );
                if ui
                    .button(format!("{} Copy", egui_phosphor::regular::COPY))
                    .on_hover_text("Copy the server address")
                    .clicked()
                {
                    ui.ctx().copy_text(SERVER_ADDRESS.to_string());
                    msgs.push(Msg::AddressCopied);
                }
            });
            ui.add_space(20.0);

            ui.group(|ui| {
                ui.set_max_width(420.0);
                let time = ui.input(|i| i.time);
                msgs.extend(
                    status_widget::view(ui, &self.model.status, self.model.admin, time)
                        .into_iter()
                        .map(Msg::Status),
                );
            });
            ui.add_space(24.0);

            ui.horizontal(|ui| {
                ui.add_space(ui.available_width() / 2.0 - 130.0);
                if ui.button("Sign in").clicked() {
                    msgs.push(Msg::Navigate(Route::Login));
                }
                if ui.button("Create account").clicked() {
                    msgs.push(Msg::Navigate(Route::Register));
                }
            });
        });

        msgs
    }
}

impl eframe::App for CompanionApp {
    // All rendering happens in `update`, which eframe still calls alongside
    // this required no-op `ui`.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        for msg in self.msg_rx.try_iter() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        let mut cmds = Vec::new();
        for msg in std::mem::take(&mut self.inbox) {
            mvu::update(&mut self.model, msg, now, &mut cmds);
        }
        mvu::tick(&mut self.model, now, &mut cmds);
        for cmd in cmds {
            if self.cmd_tx.send(cmd).is_ok() {
                self.model.pending_commands += 1;
            } else {
                log::error!("worker channel closed, dropping {cmd:?}");
            }
        }

        self.top_bar(ctx);

        egui::CentralPanel::default().show(ctx, |ui| match self.model.route {
            Route::Home => {
                let msgs = self.render_home(ui);
                self.inbox.extend(msgs);
            }
            Route::Login => {
                let msgs = login_form::view(ui, &self.model.login);
                self.inbox.extend(msgs.into_iter().map(Msg::Login));
            }
            Route::Register => {
                let msgs = register_form::view(ui, &self.model.register);
                self.inbox.extend(msgs.into_iter().map(Msg::Register));
            }
        });

        let msgs = notifications::view(ctx, &self.model.notices);
        self.inbox.extend(msgs.into_iter().map(Msg::Notices));

        ctx.request_repaint_after(self.repaint_cadence());
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Some(theme) = self.theme_choice {
            let value = match theme {
                egui::Theme::Dark => "dark",
                egui::Theme::Light => "light",
            };
            storage.set_string(THEME_KEY, value.to_string());
        }
        if let Some(user) = &self.model.remembered_user {
            storage.set_string(REMEMBERED_USER_KEY, user.clone());
        }
        storage.set_string(
            MAINTENANCE_SHOWN_KEY,
            self.model.maintenance_notice_shown.to_string(),
        );
    }
}
