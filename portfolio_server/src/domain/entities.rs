use serde::{Deserialize, Serialize};
use std::time::Duration;

// Identity returned by a credential check, before a token is attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub username: String,
    pub email: String,
}

// Authenticated admin session, persisted as a single record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "id")]
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub token: String,
}

impl Session {
    pub fn new(identity: Identity, token: String) -> Self {
        Self {
            user_id: identity.user_id,
            username: identity.username,
            email: identity.email,
            token,
        }
    }

    // A restored record is only usable when it names somebody.
    pub fn is_well_formed(&self) -> bool {
        !self.user_id.is_empty() && !self.username.is_empty()
    }
}

// Colour scheme preference for the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitState {
    Active,
    Hit,
}

// A spawned minigame target. Positions are percentages of the play area.
#[derive(Debug, Clone)]
pub struct Target {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub hit_state: HitState,
    pub spawned_at: Duration,
}

impl Target {
    pub fn is_hit(&self) -> bool {
        self.hit_state == HitState::Hit
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSnapshot {
    pub id: u64,
    pub x: f32,
    pub y: f32,
    pub hit_state: HitState,
}

impl From<&Target> for TargetSnapshot {
    fn from(t: &Target) -> Self {
        Self {
            id: t.id,
            x: t.x,
            y: t.y,
            hit_state: t.hit_state,
        }
    }
}
