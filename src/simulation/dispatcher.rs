//! Event dispatcher
//!
//! Consumes deployments one at a time in timestamp order. Each deployment is
//! validated, routed to its planet, and followed by as many battles as that
//! planet now allows. Median snapshots go out whenever the clock moves.

use crate::battle::deployment::{Deployment, RawDeployment};
use crate::battle::general::General;
use crate::battle::planet::Planet;
use crate::battle::resolution::resolve_battle;
use crate::core::config::SimulationOptions;
use crate::core::error::{GalaxyError, Result};
use crate::core::types::{GeneralId, PlanetId, Timestamp};
use crate::simulation::report::{Report, ReportSink};
use crate::simulation::summary::{GeneralEvaluation, PlanetHighlights, RunSummary};

pub struct Simulation<S: ReportSink> {
    options: SimulationOptions,
    planets: Vec<Planet>,
    generals: Vec<General>,
    sink: S,
    current_timestamp: Timestamp,
    deployments: u64,
    battles: u64,
}

impl<S: ReportSink> Simulation<S> {
    pub fn new(num_generals: u32, num_planets: u32, options: SimulationOptions, sink: S) -> Self {
        Self {
            options,
            planets: (0..num_planets)
                .map(|id| Planet::new(PlanetId(id), options.watcher))
                .collect(),
            generals: vec![General::new(); num_generals as usize],
            sink,
            current_timestamp: 0,
            deployments: 0,
            battles: 0,
        }
    }

    pub fn options(&self) -> SimulationOptions {
        self.options
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn generals(&self) -> &[General] {
        &self.generals
    }

    pub fn battles(&self) -> u64 {
        self.battles
    }

    pub fn deployments(&self) -> u64 {
        self.deployments
    }

    pub fn current_timestamp(&self) -> Timestamp {
        self.current_timestamp
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Process one deployment and every battle it triggers
    pub fn ingest(&mut self, raw: &RawDeployment) -> Result<()> {
        let arrival = self.deployments + 1;
        let deployment = Deployment::validate(
            raw,
            self.generals.len() as u32,
            self.planets.len() as u32,
            arrival,
        )?;

        if deployment.timestamp < self.current_timestamp {
            return Err(GalaxyError::DecreasingTimestamp {
                previous: self.current_timestamp,
                current: deployment.timestamp,
            });
        }
        if deployment.timestamp != self.current_timestamp {
            if self.options.median {
                self.report_medians()?;
            }
            self.current_timestamp = deployment.timestamp;
        }

        self.deployments = arrival;
        self.generals[deployment.general.index()].record_deployment(deployment.side, deployment.troops);

        tracing::debug!(
            timestamp = deployment.timestamp,
            side = %deployment.side,
            general = %deployment.general,
            planet = %deployment.planet,
            force = deployment.force,
            troops = deployment.troops,
            "deployment"
        );

        let planet = &mut self.planets[deployment.planet.index()];
        planet.deploy(deployment);
        while let Some(outcome) = resolve_battle(planet, &mut self.generals) {
            self.battles += 1;
            if self.options.verbose {
                self.sink.emit(&Report::Battle(outcome))?;
            }
        }
        Ok(())
    }

    /// Emit the median of every planet that has seen a battle
    fn report_medians(&mut self) -> Result<()> {
        for planet in &self.planets {
            if let Some(median) = planet.median_loss() {
                self.sink.emit(&Report::Median {
                    planet: planet.id,
                    timestamp: self.current_timestamp,
                    median,
                })?;
            }
        }
        Ok(())
    }

    /// Close the day: final medians, battle count and the optional sections
    ///
    /// Call once, after the last deployment.
    pub fn finish(&mut self) -> Result<RunSummary> {
        if self.options.median {
            self.report_medians()?;
        }
        self.sink.emit(&Report::EndOfDay { battles: self.battles })?;

        let generals: Vec<GeneralEvaluation> = self
            .generals
            .iter()
            .enumerate()
            .map(|(i, ledger)| GeneralEvaluation::new(GeneralId(i as u32), ledger))
            .collect();
        if self.options.general_eval {
            self.sink.emit(&Report::GeneralEvaluation(generals.clone()))?;
        }

        let highlights = if self.options.watcher {
            let highlights: Vec<PlanetHighlights> =
                self.planets.iter().filter_map(PlanetHighlights::from_planet).collect();
            self.sink.emit(&Report::MovieWatcher(highlights.clone()))?;
            Some(highlights)
        } else {
            None
        };

        self.sink.finish()?;

        tracing::info!(
            deployments = self.deployments,
            battles = self.battles,
            final_timestamp = self.current_timestamp,
            "end of day"
        );

        Ok(RunSummary {
            deployments: self.deployments,
            battles: self.battles,
            final_timestamp: self.current_timestamp,
            final_medians: self.planets.iter().map(Planet::median_loss).collect(),
            generals,
            highlights,
        })
    }

    /// Drain a whole deployment stream, then finish the day
    pub fn run<I>(&mut self, stream: I) -> Result<RunSummary>
    where
        I: IntoIterator<Item = Result<RawDeployment>>,
    {
        for raw in stream {
            self.ingest(&raw?)?;
        }
        self.finish()
    }
}
