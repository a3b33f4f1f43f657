// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

/// How a typed team code is checked against the registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Case-insensitive equality with a stored code.
    #[default]
    Exact,
    /// Input is a case-insensitive substring of the first 4 chars of a stored line.
    /// Kept for old `team_names.txt` files that carry more than the bare code.
    LegacyPrefix,
}

/// How the site's `F-IN` height cell becomes a number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeightMode {
    /// Hyphen becomes a decimal point: "6-7" → 6.7
    #[default]
    Legacy,
    /// Feet and inches to total inches: "6-7" → 79.0
    Inches,
}

impl HeightMode {
    pub fn axis_label(&self) -> &'static str {
        match self {
            HeightMode::Legacy => "ft.in",
            HeightMode::Inches => "in",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub teams_file: PathBuf,
    pub base_url: String,
    pub season: u16,
    pub match_policy: MatchPolicy,
    pub height_mode: HeightMode,
    /// Explicit chart viewer; `None` means the `roster_chart` next to our own exe.
    pub viewer: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            teams_file: PathBuf::from(TEAM_NAMES_FILE),
            base_url: s!(BASE_URL),
            season: SEASON,
            match_policy: MatchPolicy::default(),
            height_mode: HeightMode::default(),
            viewer: None,
        }
    }
}
