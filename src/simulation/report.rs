//! Reports emitted during a run and the sinks that receive them

use std::fmt;
use std::io::Write;

use serde::Serialize;

use crate::battle::resolution::BattleOutcome;
use crate::core::error::Result;
use crate::core::types::{PlanetId, Timestamp};
use crate::simulation::summary::{GeneralEvaluation, PlanetHighlights};

/// Everything the simulation tells the outside world
///
/// `Display` renders the console text format, one or more lines without a
/// trailing newline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Report {
    DeploymentStarted,
    Battle(BattleOutcome),
    Median { planet: PlanetId, timestamp: Timestamp, median: u64 },
    EndOfDay { battles: u64 },
    GeneralEvaluation(Vec<GeneralEvaluation>),
    MovieWatcher(Vec<PlanetHighlights>),
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::DeploymentStarted => write!(f, "Deploying troops..."),
            Report::Battle(outcome) => write!(
                f,
                "General {}'s battalion attacked General {}'s battalion on planet {}. {} troops were lost.",
                outcome.sith.general,
                outcome.jedi.general,
                outcome.planet,
                outcome.troops_lost()
            ),
            Report::Median { planet, timestamp, median } => write!(
                f,
                "Median troops lost on planet {} at time {} is {}.",
                planet, timestamp, median
            ),
            Report::EndOfDay { battles } => write!(f, "---End of Day---\nBattles: {}", battles),
            Report::GeneralEvaluation(rows) => {
                write!(f, "---General Evaluation---")?;
                for row in rows {
                    write!(f, "\n{}", row)?;
                }
                Ok(())
            }
            Report::MovieWatcher(planets) => {
                write!(f, "---Movie Watcher---")?;
                for planet in planets {
                    write!(f, "\n{}", planet)?;
                }
                Ok(())
            }
        }
    }
}

/// Receiver for simulation reports
pub trait ReportSink {
    fn emit(&mut self, report: &Report) -> Result<()>;

    /// Called once after the last report of a run
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<S: ReportSink + ?Sized> ReportSink for &mut S {
    fn emit(&mut self, report: &Report) -> Result<()> {
        (**self).emit(report)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

/// Writes the console text format to any writer
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn emit(&mut self, report: &Report) -> Result<()> {
        writeln!(self.out, "{}", report)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Keeps every report in memory
#[derive(Debug, Clone, Default)]
pub struct ReportLog {
    pub reports: Vec<Report>,
}

impl ReportLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn battles(&self) -> impl Iterator<Item = &BattleOutcome> {
        self.reports.iter().filter_map(|r| match r {
            Report::Battle(outcome) => Some(outcome),
            _ => None,
        })
    }

    /// Rendered text, one report per line
    pub fn render(&self) -> String {
        self.reports.iter().map(|r| format!("{}\n", r)).collect()
    }
}

impl ReportSink for ReportLog {
    fn emit(&mut self, report: &Report) -> Result<()> {
        self.reports.push(report.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::deployment::Deployment;
    use crate::core::types::{GeneralId, Side};

    fn unit(side: Side, general: u32) -> Deployment {
        Deployment {
            timestamp: 3,
            general: GeneralId(general),
            planet: PlanetId(1),
            side,
            force: 4,
            troops: 0,
            arrival: 1,
        }
    }

    #[test]
    fn test_battle_line() {
        let report = Report::Battle(BattleOutcome {
            planet: PlanetId(1),
            jedi: unit(Side::Jedi, 2),
            sith: unit(Side::Sith, 0),
            losses_per_side: 7,
        });
        assert_eq!(
            report.to_string(),
            "General 0's battalion attacked General 2's battalion on planet 1. 14 troops were lost."
        );
    }

    #[test]
    fn test_median_and_end_of_day_lines() {
        let median = Report::Median { planet: PlanetId(0), timestamp: 12, median: 30 };
        assert_eq!(median.to_string(), "Median troops lost on planet 0 at time 12 is 30.");
        assert_eq!(Report::EndOfDay { battles: 2 }.to_string(), "---End of Day---\nBattles: 2");
    }

    #[test]
    fn test_console_sink_writes_lines() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.emit(&Report::DeploymentStarted).unwrap();
        sink.emit(&Report::EndOfDay { battles: 0 }).unwrap();
        sink.finish().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(text, "Deploying troops...\n---End of Day---\nBattles: 0\n");
    }

    fn emit_banner<S: ReportSink>(mut sink: S) {
        sink.emit(&Report::DeploymentStarted).unwrap();
    }

    #[test]
    fn test_log_through_mut_reference() {
        let mut log = ReportLog::new();
        emit_banner(&mut log);
        assert_eq!(log.reports, vec![Report::DeploymentStarted]);
        assert_eq!(log.render(), "Deploying troops...\n");
    }
}
