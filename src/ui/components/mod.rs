// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Reusable egui components structured for MVU-style updates.

pub mod field;
pub mod login_form;
pub mod notifications;
pub mod register_form;
pub mod status_widget;
pub mod strength_meter;

use notifications::NoticeKind;

/// Submission state of a form; the submit button is disabled and shows a busy
/// caption while `Submitting`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
}

/// Effects a form surfaces to the root: notices to display, and successful
/// completions the root turns into persistence writes and redirects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormOutcome {
    Notice { text: String, kind: NoticeKind },
    /// Login (password or social) succeeded; `remember` carries the username
    /// to persist when "remember me" was checked.
    LoggedIn { remember: Option<String> },
    /// Registration succeeded.
    Registered,
}

impl FormOutcome {
    pub fn notice(text: impl Into<String>, kind: NoticeKind) -> Self {
        FormOutcome::Notice {
            text: text.into(),
            kind,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::notice(text, NoticeKind::Info)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::notice(text, NoticeKind::Success)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::notice(text, NoticeKind::Error)
    }
}
