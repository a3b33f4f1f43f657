// src/core/net.rs

// One blocking HTTPS GET per team page

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, ROSTER_ANCHOR, USER_AGENT};
use crate::error::FetchError;
use crate::teams::TeamCode;

/// Source of roster page markup.
pub trait Fetch {
    fn fetch(&self, team: &TeamCode) -> Result<String, FetchError>;
}

/// `{base}/teams/{CODE}/{season}.html#all_roster`
pub fn team_url(base: &str, season: u16, team: &TeamCode) -> String {
    format!(
        "{}/teams/{}/{}.html{}",
        base.trim_end_matches('/'),
        team,
        season,
        ROSTER_ANCHOR
    )
}

pub struct HttpFetcher {
    client: Client,
    base_url: String,
    season: u16,
}

impl HttpFetcher {
    pub fn new(base_url: &str, season: u16) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, base_url: s!(base_url), season })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, team: &TeamCode) -> Result<String, FetchError> {
        let url = team_url(&self.base_url, self.season, team);
        logf!("Fetch: GET {}", url);

        let resp = match self.client.get(&url).send() {
            Ok(r) => r,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = resp
            .text()
            .map_err(|source| FetchError::Transport { url, source })?;
        logd!("Fetch: {} -> {} bytes", team, body.len());
        Ok(body)
    }
}
