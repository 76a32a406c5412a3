// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Single form field: value buffer, validation feedback, and the input widget
//! that renders them. Typing clears feedback eagerly so stale errors never
//! linger next to fresh keystrokes; revalidation happens on blur or submit.

use eframe::egui;
use egui::RichText;

use crate::models::validation::Verdict;

pub(crate) const ERROR_ACCENT: egui::Color32 = egui::Color32::from_rgb(0xff, 0x6b, 0x35);
pub(crate) const SUCCESS_ACCENT: egui::Color32 = egui::Color32::from_rgb(0x00, 0xc9, 0x74);

/// State of one tracked input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldModel {
    pub value: String,
    /// Last verdict shown next to the field; `None` renders neutrally.
    pub feedback: Option<Verdict>,
}

impl FieldModel {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            feedback: None,
        }
    }

    /// Remove error/success marks without revalidating.
    pub fn clear_feedback(&mut self) {
        self.feedback = None;
    }

    /// Replace any prior mark with the new verdict. Returns whether it passed.
    pub fn set_feedback(&mut self, verdict: Verdict) -> bool {
        let passed = verdict.is_pass();
        self.feedback = Some(verdict);
        passed
    }
}

/// Messages emitted by the field widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldMsg {
    Changed(String),
    Blurred,
}

/// Render a labeled input with its feedback state. `mask` hides the text for
/// password entry.
pub fn view(
    ui: &mut egui::Ui,
    model: &FieldModel,
    label: &str,
    hint: &str,
    mask: bool,
) -> Vec<FieldMsg> {
    let mut msgs = Vec::new();

    ui.label(label);
    ui.add_space(2.0);

    let mut value = model.value.clone();
    let response = ui
        .scope(|ui| {
            if let Some(feedback) = &model.feedback {
                let accent = if feedback.is_pass() {
                    SUCCESS_ACCENT
                } else {
                    ERROR_ACCENT
                };
                let widgets = &mut ui.visuals_mut().widgets;
                widgets.inactive.bg_stroke = egui::Stroke::new(1.0, accent);
                widgets.hovered.bg_stroke = egui::Stroke::new(1.5, accent);
                widgets.active.bg_stroke = egui::Stroke::new(1.5, accent);
            }
            ui.add(
                egui::TextEdit::singleline(&mut value)
                    .hint_text(hint)
                    .password(mask)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;

    // Changed before Blurred: the controller clears feedback on input, then
    // revalidates on blur, matching the order the events arrive in.
    if response.changed() {
        msgs.push(FieldMsg::Changed(value));
    }
    if response.lost_focus() {
        msgs.push(FieldMsg::Blurred);
    }

    if let Some(Verdict::Fail(message)) = &model.feedback {
        ui.label(RichText::new(*message).small().color(ERROR_ACCENT));
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validation::validate_username;

    #[test]
    fn set_feedback_replaces_prior_state() {
        let mut field = FieldModel::with_value("ab");
        assert!(!field.set_feedback(validate_username(&field.value)));
        assert!(matches!(field.feedback, Some(Verdict::Fail(_))));

        field.value = "abc".into();
        assert!(field.set_feedback(validate_username(&field.value)));
        assert_eq!(field.feedback, Some(Verdict::Pass));
    }

    #[test]
    fn clear_feedback_leaves_value_untouched() {
        let mut field = FieldModel::with_value("steve");
        field.set_feedback(Verdict::Fail("nope"));
        field.clear_feedback();
        assert_eq!(field.feedback, None);
        assert_eq!(field.value, "steve");
    }
}
