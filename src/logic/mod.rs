// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Business logic behind the UI: the simulated backend seam.

pub mod gateway;
