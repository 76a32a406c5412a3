// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Registration form controller. Same shape as the login controller, with
//! three extras: the live confirmation check (re-validates on every keystroke
//! once both password values are non-empty), the strength meter under the
//! password field, and the server-rules agreement gate.

use eframe::egui;

use crate::logic::gateway::GatewayError;
use crate::models::validation::{
    validate_email, validate_game_handle, validate_password, validate_password_confirm,
    validate_username,
};
use crate::ui::components::field::{self, FieldModel, FieldMsg};
use crate::ui::components::{FormOutcome, FormPhase, strength_meter};

#[derive(Debug, Default)]
pub struct RegisterModel {
    pub username: FieldModel,
    pub email: FieldModel,
    pub password: FieldModel,
    pub confirm: FieldModel,
    /// In-game handle reused on the game server.
    pub handle: FieldModel,
    pub agreed: bool,
    pub phase: FormPhase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterMsg {
    Username(FieldMsg),
    Email(FieldMsg),
    Password(FieldMsg),
    Confirm(FieldMsg),
    Handle(FieldMsg),
    AgreedToggled(bool),
    SubmitClicked,
    Finished(Result<(), GatewayError>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterCommand {
    CreateAccount,
}

pub fn update(
    model: &mut RegisterModel,
    msg: RegisterMsg,
    cmds: &mut Vec<RegisterCommand>,
) -> Vec<FormOutcome> {
    match msg {
        RegisterMsg::Username(FieldMsg::Changed(value)) => {
            model.username.value = value;
            model.username.clear_feedback();
        }
        RegisterMsg::Username(FieldMsg::Blurred) => {
            model.username.set_feedback(validate_username(&model.username.value));
        }
        RegisterMsg::Email(FieldMsg::Changed(value)) => {
            model.email.value = value;
            model.email.clear_feedback();
        }
        RegisterMsg::Email(FieldMsg::Blurred) => {
            model.email.set_feedback(validate_email(&model.email.value));
        }
        RegisterMsg::Password(FieldMsg::Changed(value)) => {
            model.password.value = value;
            model.password.clear_feedback();
        }
        RegisterMsg::Password(FieldMsg::Blurred) => {
            model.password.set_feedback(validate_password(&model.password.value));
        }
        RegisterMsg::Confirm(FieldMsg::Changed(value)) => {
            model.confirm.value = value;
            // Immediate match feedback once both sides are filled; quiet
            // while either is still empty.
            if !model.password.value.is_empty() && !model.confirm.value.is_empty() {
                model.confirm.set_feedback(validate_password_confirm(
                    &model.password.value,
                    &model.confirm.value,
                ));
            } else {
                model.confirm.clear_feedback();
            }
        }
        RegisterMsg::Confirm(FieldMsg::Blurred) => {
            model.confirm.set_feedback(validate_password_confirm(
                &model.password.value,
                &model.confirm.value,
            ));
        }
        RegisterMsg::Handle(FieldMsg::Changed(value)) => {
            model.handle.value = value;
            model.handle.clear_feedback();
        }
        RegisterMsg::Handle(FieldMsg::Blurred) => {
            model.handle.set_feedback(validate_game_handle(&model.handle.value));
        }
        RegisterMsg::AgreedToggled(checked) => model.agreed = checked,
        RegisterMsg::SubmitClicked => {
            let mut all_ok = true;
            all_ok &= model
                .username
                .set_feedback(validate_username(&model.username.value));
            all_ok &= model.email.set_feedback(validate_email(&model.email.value));
            all_ok &= model
                .password
                .set_feedback(validate_password(&model.password.value));
            all_ok &= model.confirm.set_feedback(validate_password_confirm(
                &model.password.value,
                &model.confirm.value,
            ));
            all_ok &= model
                .handle
                .set_feedback(validate_game_handle(&model.handle.value));

            if !model.agreed {
                let text = if all_ok {
                    "You must accept the server rules"
                } else {
                    "Please fix the errors above"
                };
                return vec![FormOutcome::error(text)];
            }
            if !all_ok {
                return vec![FormOutcome::error("Please fix the errors above")];
            }
            model.phase = FormPhase::Submitting;
            cmds.push(RegisterCommand::CreateAccount);
        }
        RegisterMsg::Finished(result) => {
            model.phase = FormPhase::Idle;
            return match result {
                Ok(()) => vec![
                    FormOutcome::success("Account created! Check your inbox."),
                    FormOutcome::Registered,
                ],
                Err(_) => vec![FormOutcome::error("Registration failed. Try again later.")],
            };
        }
    }
    Vec::new()
}

pub fn view(ui: &mut egui::Ui, model: &RegisterModel) -> Vec<RegisterMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.set_max_width(360.0);
        ui.add_space(16.0);
        ui.heading("Create account");
        ui.add_space(12.0);

        msgs.extend(
            field::view(ui, &model.username, "Username", "3-16 characters", false)
                .into_iter()
                .map(RegisterMsg::Username),
        );
        ui.add_space(8.0);
        msgs.extend(
            field::view(ui, &model.email, "Email", "you@example.com", false)
                .into_iter()
                .map(RegisterMsg::Email),
        );
        ui.add_space(8.0);
        msgs.extend(
            field::view(ui, &model.password, "Password", "At least 8 characters", true)
                .into_iter()
                .map(RegisterMsg::Password),
        );
        strength_meter::view(ui, &model.password.value);
        ui.add_space(8.0);
        msgs.extend(
            field::view(
                ui,
                &model.confirm,
                "Confirm password",
                "Repeat the password",
                true,
            )
            .into_iter()
            .map(RegisterMsg::Confirm),
        );
        ui.add_space(8.0);
        msgs.extend(
            field::view(
                ui,
                &model.handle,
                "In-game name",
                "Your handle on the server",
                false,
            )
            .into_iter()
            .map(RegisterMsg::Handle),
        );
        ui.add_space(10.0);

        let mut agreed = model.agreed;
        if ui
            .checkbox(&mut agreed, "I accept the server rules")
            .changed()
        {
            msgs.push(RegisterMsg::AgreedToggled(agreed));
        }
        ui.add_space(12.0);

        let (caption, enabled) = match model.phase {
            FormPhase::Idle => (
                format!("{} Create account", egui_phosphor::regular::USER_PLUS),
                true,
            ),
            FormPhase::Submitting => ("Creating account...".to_string(), false),
        };
        if ui
            .add_enabled(
                enabled,
                egui::Button::new(caption).min_size(egui::vec2(200.0, 32.0)),
            )
            .clicked()
        {
            msgs.push(RegisterMsg::SubmitClicked);
        }
    });

    msgs
}
