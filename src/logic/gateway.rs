// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Stand-in backend: timer-based simulations of the auth endpoint and the
//! server status feed.
//!
//! Callers only observe success/failure (or a status snapshot), never a
//! payload, so a real network client can replace either trait object without
//! touching the forms or the widget. The simulated calls block, which is fine:
//! they run on the command worker threads, never on the UI thread.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;

use crate::models::status::{MAX_PLAYERS, SERVER_VERSION, ServerHealth, StatusSnapshot};

/// Delay of the simulated auth request.
pub const AUTH_DELAY: Duration = Duration::from_millis(1500);

/// Probability the simulated auth request succeeds.
pub const AUTH_SUCCESS_RATE: f64 = 0.9;

/// Delay of the simulated status poll.
pub const STATUS_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("the server rejected the request")]
    Rejected,
    #[error("the status feed did not respond")]
    Unreachable,
}

/// External identity providers offered next to the password form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Discord,
    Google,
}

impl Provider {
    pub fn label(self) -> &'static str {
        match self {
            Provider::Discord => "Discord",
            Provider::Google => "Google",
        }
    }
}

/// The narrow seam between the forms and whatever backend eventually exists.
pub trait AuthGateway: Send + Sync {
    fn attempt(&self) -> Result<(), GatewayError>;
}

/// Source of server status observations.
pub trait StatusFeed: Send + Sync {
    fn poll(&self) -> Result<StatusSnapshot, GatewayError>;
}

/// Simulated auth endpoint: fixed delay, randomized outcome.
pub struct SimulatedGateway {
    delay: Duration,
    success_rate: f64,
}

impl SimulatedGateway {
    pub fn new() -> Self {
        Self {
            delay: AUTH_DELAY,
            success_rate: AUTH_SUCCESS_RATE,
        }
    }

    /// Override timing and outcome probability; used by tests to make the
    /// simulation deterministic.
    pub fn with_behavior(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate,
        }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthGateway for SimulatedGateway {
    fn attempt(&self) -> Result<(), GatewayError> {
        std::thread::sleep(self.delay);
        if rand::rng().random_bool(self.success_rate) {
            Ok(())
        } else {
            Err(GatewayError::Rejected)
        }
    }
}

/// Simulated status feed with the distribution the real server has shown
/// lately: 40% online, 30% maintenance, 30% offline.
pub struct SimulatedStatusFeed {
    delay: Duration,
}

impl SimulatedStatusFeed {
    pub fn new() -> Self {
        Self {
            delay: STATUS_DELAY,
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedStatusFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusFeed for SimulatedStatusFeed {
    fn poll(&self) -> Result<StatusSnapshot, GatewayError> {
        std::thread::sleep(self.delay);
        let mut rng = rand::rng();
        let roll: f64 = rng.random();
        let health = if roll > 0.6 {
            ServerHealth::Online {
                players: rng.random_range(10..90),
                max_players: MAX_PLAYERS,
            }
        } else if roll > 0.3 {
            ServerHealth::Maintenance
        } else {
            ServerHealth::Offline
        };
        Ok(StatusSnapshot::new(health, SERVER_VERSION))
    }
}

/// Backends handed to the command workers at startup. Page-lifetime scope:
/// constructed once, never torn down.
pub struct Services {
    pub auth: Box<dyn AuthGateway>,
    pub status: Box<dyn StatusFeed>,
}

impl Default for Services {
    fn default() -> Self {
        Self {
            auth: Box::new(SimulatedGateway::new()),
            status: Box::new(SimulatedStatusFeed::new()),
        }
    }
}
