// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Transient notification surface.
//!
//! At most one general notice exists at a time: `notify` purges the previous
//! one synchronously, last write wins. Removal is two-phase: after the
//! configured lifetime the notice enters a short exit fade, then detaches.
//! The maintenance banner is a separate, separately styled element shown at
//! most once per profile; manual dismissal also cancels its pending
//! auto-dismiss.
//!
//! All lifecycle transitions go through `tick(now)` with an explicit instant,
//! so the timing rules are unit-testable without a UI.

use std::time::{Duration, Instant};

use eframe::egui;
use egui::RichText;

/// Lifetime of notices raised by the auth flows.
pub const AUTH_NOTICE_LIFETIME: Duration = Duration::from_secs(4);
/// Lifetime of general notices (clipboard, status, and similar).
pub const GENERAL_NOTICE_LIFETIME: Duration = Duration::from_secs(3);
/// Lifetime of the maintenance banner.
pub const BANNER_LIFETIME: Duration = Duration::from_secs(8);
/// Exit fade before an element detaches.
pub const EXIT_FADE: Duration = Duration::from_millis(300);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// One transient status message.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub kind: NoticeKind,
    shown_at: Instant,
    lifetime: Duration,
    exiting_since: Option<Instant>,
}

impl Notice {
    pub fn is_exiting(&self) -> bool {
        self.exiting_since.is_some()
    }
}

/// The one-shot maintenance banner.
#[derive(Clone, Debug)]
pub struct Banner {
    shown_at: Instant,
    exiting_since: Option<Instant>,
}

impl Banner {
    pub fn is_exiting(&self) -> bool {
        self.exiting_since.is_some()
    }
}

#[derive(Debug, Default)]
pub struct NotificationsModel {
    current: Option<Notice>,
    banner: Option<Banner>,
}

/// Messages emitted by the notification views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeMsg {
    DismissBanner,
}

impl NotificationsModel {
    /// Show a notice, replacing whichever one is currently displayed.
    pub fn notify(
        &mut self,
        text: impl Into<String>,
        kind: NoticeKind,
        lifetime: Duration,
        now: Instant,
    ) {
        self.current = Some(Notice {
            text: text.into(),
            kind,
            shown_at: now,
            lifetime,
            exiting_since: None,
        });
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn show_banner(&mut self, now: Instant) {
        self.banner = Some(Banner {
            shown_at: now,
            exiting_since: None,
        });
    }

    /// Begin the banner's exit fade immediately; the pending auto-dismiss is
    /// thereby cancelled (tick only checks the lifetime while not exiting).
    pub fn dismiss_banner(&mut self, now: Instant) {
        if let Some(banner) = &mut self.banner {
            if banner.exiting_since.is_none() {
                banner.exiting_since = Some(now);
            }
        }
    }

    /// Advance lifecycle state: start exit fades for expired elements and
    /// detach the ones whose fade has finished.
    pub fn tick(&mut self, now: Instant) {
        let mut drop_current = false;
        if let Some(notice) = &mut self.current {
            match notice.exiting_since {
                Some(started) if now.duration_since(started) >= EXIT_FADE => drop_current = true,
                None if now.duration_since(notice.shown_at) >= notice.lifetime => {
                    notice.exiting_since = Some(now);
                }
                _ => {}
            }
        }
        if drop_current {
            self.current = None;
        }

        let mut drop_banner = false;
        if let Some(banner) = &mut self.banner {
            match banner.exiting_since {
                Some(started) if now.duration_since(started) >= EXIT_FADE => drop_banner = true,
                None if now.duration_since(banner.shown_at) >= BANNER_LIFETIME => {
                    banner.exiting_since = Some(now);
                }
                _ => {}
            }
        }
        if drop_banner {
            self.banner = None;
        }
    }

    /// Whether anything is currently displayed (including exit fades).
    pub fn is_active(&self) -> bool {
        self.current.is_some() || self.banner.is_some()
    }

    /// Whether an exit fade is in progress and wants fast repaints.
    pub fn is_animating(&self) -> bool {
        self.current.as_ref().is_some_and(Notice::is_exiting)
            || self.banner.as_ref().is_some_and(Banner::is_exiting)
    }
}

fn kind_fill(kind: NoticeKind) -> egui::Color32 {
    match kind {
        NoticeKind::Info => egui::Color32::from_rgb(0x8b, 0x5c, 0xf6),
        NoticeKind::Success => egui::Color32::from_rgb(0x00, 0xa8, 0x62),
        NoticeKind::Error => egui::Color32::from_rgb(0xe5, 0x5a, 0x2b),
    }
}

/// Render the floating notice and the maintenance banner over the page.
pub fn view(ctx: &egui::Context, model: &NotificationsModel) -> Vec<NoticeMsg> {
    let mut msgs = Vec::new();

    if let Some(notice) = model.current() {
        egui::Area::new(egui::Id::new("notice_toast"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 64.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.set_opacity(if notice.is_exiting() { 0.3 } else { 1.0 });
                egui::Frame::new()
                    .fill(kind_fill(notice.kind))
                    .corner_radius(10)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        ui.set_max_width(300.0);
                        ui.label(
                            RichText::new(&notice.text)
                                .color(egui::Color32::WHITE)
                                .strong(),
                        );
                    });
            });
    }

    if let Some(banner) = model.banner() {
        egui::Area::new(egui::Id::new("maintenance_banner"))
            .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 120.0))
            .show(ctx, |ui| {
                ui.set_opacity(if banner.is_exiting() { 0.3 } else { 1.0 });
                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(0xc2, 0x47, 0x1d))
                    .stroke(egui::Stroke::new(
                        1.0,
                        egui::Color32::from_white_alpha(40),
                    ))
                    .corner_radius(12)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_max_width(340.0);
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(egui_phosphor::regular::WARNING)
                                    .size(24.0)
                                    .color(egui::Color32::WHITE),
                            );
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new("Server maintenance")
                                        .color(egui::Color32::WHITE)
                                        .strong(),
                                );
                                ui.label(
                                    RichText::new(
                                        "The server is currently under maintenance. Back soon!",
                                    )
                                    .color(egui::Color32::from_white_alpha(230))
                                    .small(),
                                );
                            });
                            if ui
                                .button(RichText::new(egui_phosphor::regular::X))
                                .on_hover_text("Dismiss")
                                .clicked()
                            {
                                msgs.push(NoticeMsg::DismissBanner);
                            }
                        });
                    });
            });
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Instant {
        Instant::now()
    }

    #[test]
    fn notify_purges_the_previous_notice_synchronously() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.notify("first", NoticeKind::Info, GENERAL_NOTICE_LIFETIME, t0);
        model.notify("second", NoticeKind::Error, GENERAL_NOTICE_LIFETIME, t0);

        let current = model.current().expect("one notice present");
        assert_eq!(current.text, "second");
        assert_eq!(current.kind, NoticeKind::Error);
    }

    #[test]
    fn notice_expires_in_two_phases() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.notify("bye", NoticeKind::Success, GENERAL_NOTICE_LIFETIME, t0);

        model.tick(t0 + Duration::from_secs(2));
        assert!(!model.current().unwrap().is_exiting());

        model.tick(t0 + GENERAL_NOTICE_LIFETIME);
        assert!(model.current().unwrap().is_exiting(), "fade started");

        model.tick(t0 + GENERAL_NOTICE_LIFETIME + EXIT_FADE);
        assert!(model.current().is_none(), "detached after the fade");
    }

    #[test]
    fn auth_notices_outlive_general_ones() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.notify("auth", NoticeKind::Success, AUTH_NOTICE_LIFETIME, t0);
        model.tick(t0 + Duration::from_millis(3500));
        assert!(!model.current().unwrap().is_exiting());
        model.tick(t0 + AUTH_NOTICE_LIFETIME);
        assert!(model.current().unwrap().is_exiting());
    }

    #[test]
    fn banner_auto_dismisses_after_eight_seconds() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.show_banner(t0);

        model.tick(t0 + Duration::from_secs(7));
        assert!(!model.banner().unwrap().is_exiting());

        model.tick(t0 + BANNER_LIFETIME);
        assert!(model.banner().unwrap().is_exiting());

        model.tick(t0 + BANNER_LIFETIME + EXIT_FADE);
        assert!(model.banner().is_none());
    }

    #[test]
    fn manual_dismissal_cancels_the_auto_timer() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.show_banner(t0);

        model.dismiss_banner(t0 + Duration::from_secs(1));
        model.tick(t0 + Duration::from_secs(1) + EXIT_FADE);
        assert!(model.banner().is_none());

        // The original 8 s deadline passing later changes nothing.
        model.tick(t0 + BANNER_LIFETIME + Duration::from_secs(1));
        assert!(model.banner().is_none());
    }

    #[test]
    fn banner_and_notice_coexist_independently() {
        let t0 = base();
        let mut model = NotificationsModel::default();
        model.show_banner(t0);
        model.notify("hello", NoticeKind::Info, GENERAL_NOTICE_LIFETIME, t0);
        assert!(model.current().is_some());
        assert!(model.banner().is_some());

        model.tick(t0 + GENERAL_NOTICE_LIFETIME);
        model.tick(t0 + GENERAL_NOTICE_LIFETIME + EXIT_FADE);
        assert!(model.current().is_none());
        assert!(model.banner().is_some(), "banner has its own lifetime");
    }
}
