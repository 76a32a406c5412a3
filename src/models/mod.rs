// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Domain layer: pure validation, scoring, and status types shared by the UI
//! and the gateway logic.

pub mod status;
pub mod strength;
pub mod validation;
