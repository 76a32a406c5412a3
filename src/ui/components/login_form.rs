// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Login form controller: blur-validated fields, submission gating, and the
//! social sign-in shortcut. The gateway call itself runs as a root command;
//! this module only tracks the form's phase and surfaces outcomes.

use eframe::egui;
use egui::RichText;

use crate::logic::gateway::{GatewayError, Provider};
use crate::models::validation::{validate_password, validate_username};
use crate::ui::components::field::{self, FieldModel, FieldMsg};
use crate::ui::components::{FormOutcome, FormPhase};

#[derive(Debug, Default)]
pub struct LoginModel {
    pub username: FieldModel,
    pub password: FieldModel,
    pub remember: bool,
    pub phase: FormPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginMsg {
    Username(FieldMsg),
    Password(FieldMsg),
    RememberToggled(bool),
    SubmitClicked,
    SocialClicked(Provider),
    Finished(Result<(), GatewayError>),
    SocialFinished {
        provider: Provider,
        result: Result<(), GatewayError>,
    },
}

/// Commands the root maps onto gateway calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginCommand {
    Authenticate,
    SocialAuthenticate(Provider),
}

pub fn update(
    model: &mut LoginModel,
    msg: LoginMsg,
    cmds: &mut Vec<LoginCommand>,
) -> Vec<FormOutcome> {
    match msg {
        LoginMsg::Username(FieldMsg::Changed(value)) => {
            model.username.value = value;
            model.username.clear_feedback();
        }
        LoginMsg::Username(FieldMsg::Blurred) => {
            model.username.set_feedback(validate_username(&model.username.value));
        }
        LoginMsg::Password(FieldMsg::Changed(value)) => {
            model.password.value = value;
            model.password.clear_feedback();
        }
        LoginMsg::Password(FieldMsg::Blurred) => {
            model.password.set_feedback(validate_password(&model.password.value));
        }
        LoginMsg::RememberToggled(checked) => model.remember = checked,
        LoginMsg::SubmitClicked => {
            let username_ok = model
                .username
                .set_feedback(validate_username(&model.username.value));
            let password_ok = model
                .password
                .set_feedback(validate_password(&model.password.value));
            if !(username_ok && password_ok) {
                return vec![FormOutcome::error("Please fix the errors above")];
            }
            model.phase = FormPhase::Submitting;
            cmds.push(LoginCommand::Authenticate);
        }
        LoginMsg::SocialClicked(provider) => {
            cmds.push(LoginCommand::SocialAuthenticate(provider));
            return vec![FormOutcome::info(format!(
                "Signing in with {}...",
                provider.label()
            ))];
        }
        LoginMsg::Finished(result) => {
            // Restore the submit button regardless of outcome.
            model.phase = FormPhase::Idle;
            return match result {
                Ok(()) => vec![
                    FormOutcome::success("Signed in successfully!"),
                    FormOutcome::LoggedIn {
                        remember: model
                            .remember
                            .then(|| model.username.value.clone()),
                    },
                ],
                Err(_) => vec![FormOutcome::error("Wrong username or password")],
            };
        }
        LoginMsg::SocialFinished { result, .. } => {
            return match result {
                Ok(()) => vec![
                    FormOutcome::success("Signed in successfully!"),
                    FormOutcome::LoggedIn { remember: None },
                ],
                Err(_) => vec![FormOutcome::error("Sign-in failed")],
            };
        }
    }
    Vec::new()
}

pub fn view(ui: &mut egui::Ui, model: &LoginModel) -> Vec<LoginMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.add_space(16.0);
        ui.heading("Sign in");
        ui.add_space(12.0);

        msgs.extend(
            field::view(ui, &model.username, "Username", "Your account name", false)
                .into_iter()
                .map(LoginMsg::Username),
        );
        ui.add_space(8.0);
        msgs.extend(
            field::view(ui, &model.password, "Password", "Your password", true)
                .into_iter()
                .map(LoginMsg::Password),
        );
        ui.add_space(8.0);

        let mut remember = model.remember;
        if ui.checkbox(&mut remember, "Remember me").changed() {
            msgs.push(LoginMsg::RememberToggled(remember));
        }
        ui.add_space(12.0);

        let (caption, enabled) = match model.phase {
            FormPhase::Idle => (format!("{} Sign in", egui_phosphor::regular::SIGN_IN), true),
            FormPhase::Submitting => ("Signing in...".to_string(), false),
        };
        if ui
            .add_enabled(
                enabled,
                egui::Button::new(caption).min_size(egui::vec2(200.0, 32.0)),
            )
            .clicked()
        {
            msgs.push(LoginMsg::SubmitClicked);
        }

        ui.add_space(12.0);
        ui.separator();
        ui.label(
            RichText::new("or continue with")
                .small()
                .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            // Keep the provider row visually centered under the form.
            ui.add_space(ui.available_width() / 2.0 - 110.0);
            if ui
                .button(format!("{} Discord", egui_phosphor::regular::DISCORD_LOGO))
                .clicked()
            {
                msgs.push(LoginMsg::SocialClicked(Provider::Discord));
            }
            if ui
                .button(format!("{} Google", egui_phosphor::regular::GOOGLE_LOGO))
                .clicked()
            {
                msgs.push(LoginMsg::SocialClicked(Provider::Google));
            }
        });
    });

    msgs
}
