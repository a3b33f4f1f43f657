// src/teams.rs

use std::{fmt, fs, path::Path};

use crate::config::consts::TEAM_CODE_LEN;
use crate::config::options::MatchPolicy;

/// Three-letter uppercase team abbreviation, e.g. `BOS`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TeamCode(String);

impl TeamCode {
    /// Uppercases `raw`; `None` unless it is exactly three characters.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.chars().count() != TEAM_CODE_LEN {
            return None;
        }
        Some(Self(raw.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known team lines, loaded once at start-up and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamRegistry {
    entries: Vec<String>,
}

impl TeamRegistry {
    /// Load `path`, one entry per non-empty trimmed line, in file order.
    /// A missing or unreadable file is reported and yields an empty registry.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(text) => {
                let reg = Self::parse(&text);
                logf!("Teams: loaded {} entries from {}", reg.len(), path.display());
                reg
            }
            Err(e) => {
                println!("File could not be found!");
                loge!("Teams: {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        Self::from_codes(text.lines())
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check a 3-character input against the registry.
    /// On a hit, returns the input uppercased (that is what goes into the URL).
    pub fn lookup(&self, input: &str, policy: MatchPolicy) -> Option<TeamCode> {
        let code = TeamCode::parse(input)?;
        let needle = input.to_lowercase();

        let hit = self.entries.iter().any(|entry| match policy {
            MatchPolicy::Exact => entry.to_lowercase() == needle,
            MatchPolicy::LegacyPrefix => {
                let head: String = entry.chars().take(4).collect();
                head.to_lowercase().contains(&needle)
            }
        });

        if hit { Some(code) } else { None }
    }
}
