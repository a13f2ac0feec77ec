//! Simulation driver - dispatcher, reports and end-of-run summary

pub mod dispatcher;
pub mod report;
pub mod summary;

pub use dispatcher::Simulation;
pub use report::{ConsoleSink, Report, ReportLog, ReportSink};
pub use summary::{GeneralEvaluation, PlanetHighlights, RunSummary};
