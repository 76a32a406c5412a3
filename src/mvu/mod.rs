// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Root Model-View-Update kernel wiring component state, messages, and
//! commands. Commands run on background workers; `tick` drives everything
//! timer-based: notice lifecycles, scheduled redirects, and the status poll
//! cadence.

use std::time::{Duration, Instant};

use crate::logic::gateway::{Provider, Services};
use crate::ui::components::FormOutcome;
use crate::ui::components::login_form::{self, LoginCommand, LoginModel, LoginMsg};
use crate::ui::components::notifications::{
    self, NoticeKind, NoticeMsg, NotificationsModel,
};
use crate::ui::components::register_form::{self, RegisterCommand, RegisterModel, RegisterMsg};
use crate::ui::components::status_widget::{self, StatusModel, StatusMsg};

/// Address shown on the home view and copied to the clipboard.
pub const SERVER_ADDRESS: &str = "play.blockhaven.net";

/// Delay before a successful login (password or social) returns home.
pub const LOGIN_REDIRECT_DELAY: Duration = Duration::from_millis(1500);
/// Delay before a successful registration lands on the login view.
pub const REGISTER_REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// The views the shell can show; "redirects" are timed route switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Login,
    Register,
}

/// A pending route switch. Submission cannot be cancelled, and neither can
/// this; it simply fires when due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub target: Route,
    pub due: Instant,
}

/// Top-level application state.
#[derive(Debug, Default)]
pub struct AppModel {
    pub route: Route,
    pub login: LoginModel,
    pub register: RegisterModel,
    pub notices: NotificationsModel,
    pub status: StatusModel,
    /// Username persisted when "remember me" was checked on a successful login.
    pub remembered_user: Option<String>,
    /// The one-shot maintenance banner has been shown on this profile.
    pub maintenance_notice_shown: bool,
    /// Manual status override controls are visible.
    pub admin: bool,
    pub pending_redirect: Option<Redirect>,
    /// Count of commands currently on the workers.
    pub pending_commands: usize,
}

impl AppModel {
    /// Raise the maintenance banner unless it was already shown on this
    /// profile. Marks the flag immediately so the banner stays one-shot even
    /// if the profile is saved mid-display.
    pub fn show_maintenance_banner_once(&mut self, now: Instant) {
        if self.maintenance_notice_shown {
            return;
        }
        self.notices.show_banner(now);
        self.maintenance_notice_shown = true;
    }
}

/// Application messages routed through the update function.
#[derive(Clone, Debug)]
pub enum Msg {
    Login(LoginMsg),
    Register(RegisterMsg),
    Status(StatusMsg),
    Notices(NoticeMsg),
    Navigate(Route),
    AddressCopied,
}

/// Side-effects executed on the worker threads between frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Authenticate,
    SocialAuthenticate(Provider),
    CreateAccount,
    PollStatus,
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, now: Instant, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Login(msg) => {
            let mut form_cmds = Vec::new();
            let outcomes = login_form::update(&mut model.login, msg, &mut form_cmds);
            for cmd in form_cmds {
                cmds.push(match cmd {
                    LoginCommand::Authenticate => Command::Authenticate,
                    LoginCommand::SocialAuthenticate(provider) => {
                        Command::SocialAuthenticate(provider)
                    }
                });
            }
            apply_outcomes(model, outcomes, now);
        }
        Msg::Register(msg) => {
            let mut form_cmds = Vec::new();
            let outcomes = register_form::update(&mut model.register, msg, &mut form_cmds);
            for cmd in form_cmds {
                cmds.push(match cmd {
                    RegisterCommand::CreateAccount => Command::CreateAccount,
                });
            }
            apply_outcomes(model, outcomes, now);
        }
        Msg::Status(msg) => status_widget::update(&mut model.status, msg),
        Msg::Notices(NoticeMsg::DismissBanner) => model.notices.dismiss_banner(now),
        Msg::Navigate(route) => model.route = route,
        Msg::AddressCopied => model.notices.notify(
            "Server address copied!",
            NoticeKind::Success,
            notifications::GENERAL_NOTICE_LIFETIME,
            now,
        ),
    }
}

/// Translate form outcomes into notices, persistence state, and redirects.
fn apply_outcomes(model: &mut AppModel, outcomes: Vec<FormOutcome>, now: Instant) {
    for outcome in outcomes {
        match outcome {
            FormOutcome::Notice { text, kind } => model.notices.notify(
                text,
                kind,
                notifications::AUTH_NOTICE_LIFETIME,
                now,
            ),
            FormOutcome::LoggedIn { remember } => {
                if let Some(user) = remember {
                    log::info!("remembering username for the next session");
                    model.remembered_user = Some(user);
                }
                model.pending_redirect = Some(Redirect {
                    target: Route::Home,
                    due: now + LOGIN_REDIRECT_DELAY,
                });
            }
            FormOutcome::Registered => {
                model.pending_redirect = Some(Redirect {
                    target: Route::Login,
                    due: now + REGISTER_REDIRECT_DELAY,
                });
            }
        }
    }
}

/// Advance timer-driven state: notice lifecycles, due redirects, and the
/// status poll cadence. Called once per frame with the current instant.
pub fn tick(model: &mut AppModel, now: Instant, cmds: &mut Vec<Command>) {
    model.notices.tick(now);

    if let Some(redirect) = model.pending_redirect {
        if now >= redirect.due {
            log::info!("navigating to {:?}", redirect.target);
            model.route = redirect.target;
            model.pending_redirect = None;
        }
    }

    if status_widget::poll_due(&model.status, now) {
        status_widget::begin_poll(&mut model.status, now);
        cmds.push(Command::PollStatus);
    }
}

/// Execute a command on a worker thread and return the resulting message.
pub fn run_command(cmd: Command, services: &Services) -> Msg {
    match cmd {
        Command::Authenticate => {
            let result = services.auth.attempt();
            if let Err(err) = &result {
                log::warn!("login attempt failed: {err}");
            }
            Msg::Login(LoginMsg::Finished(result))
        }
        Command::SocialAuthenticate(provider) => {
            let result = services.auth.attempt();
            if let Err(err) = &result {
                log::warn!("{} sign-in failed: {err}", provider.label());
            }
            Msg::Login(LoginMsg::SocialFinished { provider, result })
        }
        Command::CreateAccount => {
            let result = services.auth.attempt();
            if let Err(err) = &result {
                log::warn!("registration failed: {err}");
            }
            Msg::Register(RegisterMsg::Finished(result))
        }
        Command::PollStatus => Msg::Status(StatusMsg::Refreshed(services.status.poll())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::gateway::{GatewayError, SimulatedGateway, SimulatedStatusFeed};
    use crate::ui::components::FormPhase;
    use crate::ui::components::field::FieldModel;

    fn login_ready(model: &mut AppModel) {
        model.route = Route::Login;
        model.login.username = FieldModel::with_value("steve");
        model.login.password = FieldModel::with_value("Abcdefg1");
    }

    #[test]
    fn first_tick_schedules_a_status_poll() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        tick(&mut model, Instant::now(), &mut cmds);
        assert_eq!(cmds, vec![Command::PollStatus]);
        assert!(model.status.polling);

        // No duplicate while the poll is in flight.
        cmds.clear();
        tick(&mut model, Instant::now(), &mut cmds);
        assert!(cmds.is_empty());
    }

    #[test]
    fn login_success_schedules_the_home_redirect() {
        let t0 = Instant::now();
        let mut model = AppModel::default();
        login_ready(&mut model);
        model.login.phase = FormPhase::Submitting;
        let mut cmds = Vec::new();

        update(&mut model, Msg::Login(LoginMsg::Finished(Ok(()))), t0, &mut cmds);

        // Button restored before the redirect fires.
        assert_eq!(model.login.phase, FormPhase::Idle);
        let redirect = model.pending_redirect.expect("redirect scheduled");
        assert_eq!(redirect.target, Route::Home);
        assert_eq!(redirect.due, t0 + LOGIN_REDIRECT_DELAY);

        // Not due yet.
        tick(&mut model, t0 + Duration::from_millis(1000), &mut cmds);
        assert_eq!(model.route, Route::Login);

        tick(&mut model, t0 + LOGIN_REDIRECT_DELAY, &mut cmds);
        assert_eq!(model.route, Route::Home);
        assert!(model.pending_redirect.is_none());
    }

    #[test]
    fn registration_success_redirects_to_login_after_two_seconds() {
        let t0 = Instant::now();
        let mut model = AppModel {
            route: Route::Register,
            ..Default::default()
        };
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Register(RegisterMsg::Finished(Ok(()))),
            t0,
            &mut cmds,
        );

        let redirect = model.pending_redirect.expect("redirect scheduled");
        assert_eq!(redirect.target, Route::Login);
        assert_eq!(redirect.due, t0 + REGISTER_REDIRECT_DELAY);
    }

    #[test]
    fn login_failure_shows_a_notice_and_stays_put() {
        let t0 = Instant::now();
        let mut model = AppModel::default();
        login_ready(&mut model);
        let mut cmds = Vec::new();

        update(
            &mut model,
            Msg::Login(LoginMsg::Finished(Err(GatewayError::Rejected))),
            t0,
            &mut cmds,
        );

        assert!(model.pending_redirect.is_none());
        let notice = model.notices.current().expect("error notice shown");
        assert_eq!(notice.kind, NoticeKind::Error);
    }

    #[test]
    fn remember_me_is_written_only_on_success_with_the_box_checked() {
        let t0 = Instant::now();
        let mut model = AppModel::default();
        login_ready(&mut model);
        model.login.remember = true;
        let mut cmds = Vec::new();

        update(&mut model, Msg::Login(LoginMsg::Finished(Ok(()))), t0, &mut cmds);

        assert_eq!(model.remembered_user.as_deref(), Some("steve"));
    }

    #[test]
    fn aggregate_notice_replaces_whatever_was_displayed() {
        let t0 = Instant::now();
        let mut model = AppModel::default();
        model.login.username = FieldModel::with_value("ab");
        model.login.password = FieldModel::with_value("Abcdefg1");
        let mut cmds = Vec::new();

        update(&mut model, Msg::AddressCopied, t0, &mut cmds);
        update(&mut model, Msg::Login(LoginMsg::SubmitClicked), t0, &mut cmds);

        let notice = model.notices.current().expect("exactly one notice");
        assert_eq!(notice.text, "Please fix the errors above");
        assert!(cmds.is_empty());
    }

    #[test]
    fn end_to_end_login_against_a_deterministic_gateway() {
        let services = Services {
            auth: Box::new(SimulatedGateway::with_behavior(Duration::ZERO, 1.0)),
            status: Box::new(SimulatedStatusFeed::with_delay(Duration::ZERO)),
        };
        let t0 = Instant::now();
        let mut model = AppModel::default();
        login_ready(&mut model);
        let mut cmds = Vec::new();

        update(&mut model, Msg::Login(LoginMsg::SubmitClicked), t0, &mut cmds);
        assert_eq!(cmds, vec![Command::Authenticate]);
        assert_eq!(model.login.phase, FormPhase::Submitting);

        let msg = run_command(cmds.pop().unwrap(), &services);
        let mut cmds2 = Vec::new();
        update(&mut model, msg, t0, &mut cmds2);

        assert_eq!(model.login.phase, FormPhase::Idle);
        assert_eq!(
            model.notices.current().map(|n| n.kind),
            Some(NoticeKind::Success)
        );
        assert!(model.pending_redirect.is_some());
    }

    #[test]
    fn status_poll_round_trip_updates_the_widget() {
        let services = Services {
            auth: Box::new(SimulatedGateway::with_behavior(Duration::ZERO, 1.0)),
            status: Box::new(SimulatedStatusFeed::with_delay(Duration::ZERO)),
        };
        let t0 = Instant::now();
        let mut model = AppModel::default();
        let mut cmds = Vec::new();

        tick(&mut model, t0, &mut cmds);
        let msg = run_command(cmds.pop().unwrap(), &services);
        update(&mut model, msg, t0, &mut cmds);

        assert!(!model.status.polling);
        assert!(model.status.snapshot.is_some());
    }

    #[test]
    fn maintenance_banner_appears_on_a_fresh_profile() {
        let t0 = Instant::now();
        let mut model = AppModel::default();

        model.show_maintenance_banner_once(t0);

        assert!(model.notices.banner().is_some());
        assert!(model.maintenance_notice_shown, "flag set for persistence");

        // Dismiss it, then ask again: the flag keeps it one-shot.
        model.notices.dismiss_banner(t0);
        tick(&mut model, t0 + notifications::EXIT_FADE, &mut Vec::new());
        assert!(model.notices.banner().is_none());

        model.show_maintenance_banner_once(t0 + Duration::from_secs(1));
        assert!(model.notices.banner().is_none());
    }

    #[test]
    fn maintenance_banner_skipped_when_already_shown() {
        // A restored profile carries the flag; no banner on startup.
        let mut model = AppModel {
            maintenance_notice_shown: true,
            ..Default::default()
        };

        model.show_maintenance_banner_once(Instant::now());

        assert!(model.notices.banner().is_none());
        assert!(model.maintenance_notice_shown);
    }

    #[test]
    fn manual_navigation_switches_routes() {
        let mut model = AppModel::default();
        let mut cmds = Vec::new();
        update(
            &mut model,
            Msg::Navigate(Route::Register),
            Instant::now(),
            &mut cmds,
        );
        assert_eq!(model.route, Route::Register);
    }
}
