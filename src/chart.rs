// src/chart.rs
//
// Hand-off between the prompt loop and the chart window.
// The loop serializes a ChartSpec and pipes it into a separate
// `roster_chart` process, which owns the window from then on.

use std::{
    env,
    io::{Read, Write},
    path::PathBuf,
    process::{Child, Command, Stdio},
};

use serde::{Deserialize, Serialize};

use crate::config::consts::{CHART_TITLE, VIEWER_BIN};
use crate::config::options::HeightMode;
use crate::error::PresentError;
use crate::scrape::RosterTable;
use crate::teams::TeamCode;

/// Everything the chart window needs to draw one team.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub team: String,
    pub height_unit: String,
    pub table: RosterTable,
}

impl ChartSpec {
    pub fn new(team: &TeamCode, table: &RosterTable, height_mode: HeightMode) -> Self {
        Self {
            title: s!(CHART_TITLE),
            team: team.to_string(),
            height_unit: s!(height_mode.axis_label()),
            table: table.clone(),
        }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

/// Something that can show a roster.
pub trait Present {
    fn present(&mut self, team: &TeamCode, table: &RosterTable) -> Result<(), PresentError>;
}

/// Launches the `roster_chart` binary and pipes the spec into it.
pub struct ViewerPresenter {
    viewer: Option<PathBuf>,
    height_mode: HeightMode,
    children: Vec<Child>,
}

impl ViewerPresenter {
    pub fn new(viewer: Option<PathBuf>, height_mode: HeightMode) -> Self {
        Self { viewer, height_mode, children: Vec::new() }
    }

    /// Explicit path, or `roster_chart` next to the running executable.
    pub fn viewer_path(&self) -> Result<PathBuf, PresentError> {
        if let Some(p) = &self.viewer {
            return Ok(p.clone());
        }
        let exe = env::current_exe().map_err(PresentError::Locate)?;
        let dir = exe.parent().map(PathBuf::from).unwrap_or_default();
        Ok(dir.join(format!("{}{}", VIEWER_BIN, env::consts::EXE_SUFFIX)))
    }

    // Windows the user already closed
    fn reap(&mut self) {
        self.children.retain_mut(|c| matches!(c.try_wait(), Ok(None)));
    }
}

impl Present for ViewerPresenter {
    fn present(&mut self, team: &TeamCode, table: &RosterTable) -> Result<(), PresentError> {
        self.reap();

        let spec = ChartSpec::new(team, table, self.height_mode);
        let payload = serde_json::to_vec(&spec)?;
        let path = self.viewer_path()?;

        let mut child = Command::new(&path)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|source| PresentError::Launch { path: path.display().to_string(), source })?;

        // Dropping stdin closes the pipe so the viewer sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(&payload) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(PresentError::Handoff(e));
            }
        }

        logf!("Chart: {} players for {} → {} (pid {})", table.len(), team, path.display(), child.id());
        self.children.push(child);
        Ok(())
    }
}
