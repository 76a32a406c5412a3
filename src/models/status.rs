// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Blockhaven contributors

//! Server status domain types. Shaped like the payload a real status API
//! would return, so the simulated feed can be swapped out later.

use serde::{Deserialize, Serialize};

/// Game version reported by the status feed until a real endpoint exists.
pub const SERVER_VERSION: &str = "1.20.4";

/// Player slots on the server.
pub const MAX_PLAYERS: u32 = 100;

/// Reachability states the status widget distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state")]
pub enum ServerHealth {
    Online { players: u32, max_players: u32 },
    Maintenance,
    Offline,
}

impl ServerHealth {
    pub fn default_message(&self) -> String {
        match self {
            ServerHealth::Online {
                players,
                max_players,
            } => format!("Online - {players}/{max_players} players"),
            ServerHealth::Maintenance => "Under maintenance - back soon!".to_string(),
            ServerHealth::Offline => "Server offline".to_string(),
        }
    }
}

/// One observation of the server, as shown in the status widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub health: ServerHealth,
    pub version: String,
    pub message: String,
}

impl StatusSnapshot {
    pub fn new(health: ServerHealth, version: impl Into<String>) -> Self {
        Self {
            message: health.default_message(),
            health,
            version: version.into(),
        }
    }

    /// Replace the display message, keeping health and version.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_messages_match_health() {
        let online = ServerHealth::Online {
            players: 42,
            max_players: MAX_PLAYERS,
        };
        assert_eq!(online.default_message(), "Online - 42/100 players");
        assert_eq!(ServerHealth::Offline.default_message(), "Server offline");
    }

    #[test]
    fn snapshot_carries_default_then_custom_message() {
        let snap = StatusSnapshot::new(ServerHealth::Maintenance, SERVER_VERSION);
        assert_eq!(snap.message, "Under maintenance - back soon!");
        let snap = snap.with_message("Upgrading to season 5");
        assert_eq!(snap.message, "Upgrading to season 5");
        assert_eq!(snap.health, ServerHealth::Maintenance);
    }
}
