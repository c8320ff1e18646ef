use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /repos/{owner}/{repo}/activity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoActivity {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "ref")]
    pub git_ref: Option<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub activity_type: Option<String>,
    #[serde(default)]
    pub actor: Option<Actor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub login: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, rename = "type")]
    pub account_type: Option<String>,
}

impl RepoActivity {
    pub fn actor_login(&self) -> Option<&str> {
        self.actor.as_ref().map(|a| a.login.as_str())
    }
}

#[cfg(test)]
impl RepoActivity {
    pub fn by(login: &str) -> Self {
        Self {
            id: None,
            git_ref: None,
            timestamp: None,
            activity_type: None,
            actor: Some(Actor {
                login: login.to_string(),
                id: None,
                account_type: None,
            }),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            id: None,
            git_ref: None,
            timestamp: None,
            activity_type: None,
            actor: None,
        }
    }
}
