// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.basketball-reference.com";
pub const SEASON: u16 = 2023;
pub const ROSTER_ANCHOR: &str = "#all_roster";
pub const USER_AGENT: &str = concat!("nba_roster/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Registry
pub const TEAM_NAMES_FILE: &str = "team_names.txt";
pub const TEAM_CODE_LEN: usize = 3;

// Scrape
pub const STATS_TABLE_SELECTOR: &str = ".stats_table";
pub const STAT_ATTR: &str = "data-stat";

// Chart window
pub const CHART_TITLE: &str = "NBA Team Data";
pub const CANVAS_W: f32 = 1000.0;
pub const CANVAS_H: f32 = 800.0;
pub const VIEWER_BIN: &str = "roster_chart";

// Local files
pub const LOG_FILE: &str = ".store/debug.log";
