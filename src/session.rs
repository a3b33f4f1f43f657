// src/session.rs
//
// The prompt → fetch → parse → plot cycle as an explicit state machine.
// `step` takes one state and returns the next; `run` just drives it.
// Every per-cycle failure prints a short message and lands back on
// AwaitingInput. Only console I/O errors leave `run`.

use std::io::{self, BufRead, Write};

use crate::{
    chart::Present,
    config::options::{AppOptions, HeightMode, MatchPolicy},
    core::net::Fetch,
    error::CycleError,
    scrape::{self, RawPlayerRecord, RosterTable},
    teams::{TeamCode, TeamRegistry},
};

pub const PROMPT: &str = "Type in the 3 letter abbreviations to display that teams Player stats.";
pub const MSG_BAD_LENGTH: &str = "Input must be 3 letters.";
pub const MSG_UNKNOWN_TEAM: &str = "invalid team name.";
pub const MSG_FETCH_FAILED: &str = "Could not get team's data!";
pub const MSG_NO_TABLE: &str = "Data could not be found for this team!";

#[derive(Clone, Debug, PartialEq)]
pub enum State {
    AwaitingInput,
    Validating(String),
    Fetching(TeamCode),
    Extracting(TeamCode, String),
    Normalizing(TeamCode, Vec<RawPlayerRecord>),
    Presenting(TeamCode, RosterTable),
    /// Input reached EOF.
    Closed,
}

pub struct Session<F, P, R, W> {
    registry: TeamRegistry,
    match_policy: MatchPolicy,
    height_mode: HeightMode,
    fetcher: F,
    presenter: P,
    input: R,
    out: W,
}

impl<F, P, R, W> Session<F, P, R, W>
where
    F: Fetch,
    P: Present,
    R: BufRead,
    W: Write,
{
    pub fn new(registry: TeamRegistry, options: &AppOptions, fetcher: F, presenter: P, input: R, out: W) -> Self {
        Self {
            registry,
            match_policy: options.match_policy,
            height_mode: options.height_mode,
            fetcher,
            presenter,
            input,
            out,
        }
    }

    /// Cycle until the input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        let mut state = State::AwaitingInput;
        while state != State::Closed {
            state = self.step(state)?;
        }
        logf!("Session: input closed");
        Ok(())
    }

    pub fn step(&mut self, state: State) -> io::Result<State> {
        match state {
            State::AwaitingInput => self.await_input(),
            State::Validating(input) => self.validate(&input),
            State::Fetching(team) => self.fetch(team),
            State::Extracting(team, markup) => self.extract(team, &markup),
            State::Normalizing(team, records) => self.normalize(team, &records),
            State::Presenting(team, table) => self.present(team, &table),
            State::Closed => Ok(State::Closed),
        }
    }

    fn await_input(&mut self) -> io::Result<State> {
        writeln!(self.out, "{PROMPT}")?;
        self.out.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input, not a dead console.
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(State::Closed);
        }
        let line = String::from_utf8_lossy(&buf);
        let line: &str = &line;
        let input = line.strip_suffix('\n').unwrap_or(line);
        let input = input.strip_suffix('\r').unwrap_or(input);

        if TeamCode::parse(input).is_none() {
            writeln!(self.out, "{MSG_BAD_LENGTH}")?;
            return Ok(State::AwaitingInput);
        }
        Ok(State::Validating(s!(input)))
    }

    fn validate(&mut self, input: &str) -> io::Result<State> {
        match self.registry.lookup(input, self.match_policy) {
            Some(team) => {
                writeln!(self.out, "{team}")?;
                Ok(State::Fetching(team))
            }
            None => {
                logd!("Lookup: {:?} not in registry ({} entries)", input, self.registry.len());
                writeln!(self.out, "{MSG_UNKNOWN_TEAM}")?;
                Ok(State::AwaitingInput)
            }
        }
    }

    fn fetch(&mut self, team: TeamCode) -> io::Result<State> {
        match self.fetcher.fetch(&team) {
            Ok(markup) => Ok(State::Extracting(team, markup)),
            Err(e) => self.abort(&team, e.into()),
        }
    }

    fn extract(&mut self, team: TeamCode, markup: &str) -> io::Result<State> {
        match scrape::extract(markup) {
            Ok(records) => {
                logd!("Extract: {} raw rows: {:?}", team, records);
                Ok(State::Normalizing(team, records))
            }
            Err(e) => self.abort(&team, e.into()),
        }
    }

    fn normalize(&mut self, team: TeamCode, records: &[RawPlayerRecord]) -> io::Result<State> {
        let table = match scrape::normalize(records, self.height_mode) {
            Ok(t) => t,
            Err(e) => return self.abort(&team, e.into()),
        };

        if table.is_empty() {
            writeln!(self.out, "No players found for {team}.")?;
            logf!("Normalize: {} has an empty roster, nothing to plot", team);
            return Ok(State::AwaitingInput);
        }

        writeln!(self.out, "Fetched {} players for {team}.", table.len())?;
        Ok(State::Presenting(team, table))
    }

    fn present(&mut self, team: TeamCode, table: &RosterTable) -> io::Result<State> {
        if let Err(e) = self.presenter.present(&team, table) {
            return self.abort(&team, e.into());
        }
        Ok(State::AwaitingInput)
    }

    fn abort(&mut self, team: &TeamCode, err: CycleError) -> io::Result<State> {
        loge!("Cycle {}: {}", team, err);
        match &err {
            CycleError::Fetch(_) => writeln!(self.out, "{MSG_FETCH_FAILED}")?,
            CycleError::Extract(_) => writeln!(self.out, "{MSG_NO_TABLE}")?,
            CycleError::Field(e) => writeln!(self.out, "Roster data for {team} is malformed: {e}")?,
            CycleError::Present(e) => writeln!(self.out, "Could not display chart: {e}")?,
        }
        Ok(State::AwaitingInput)
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_parts(self) -> (F, P, W) {
        (self.fetcher, self.presenter, self.out)
    }
}
