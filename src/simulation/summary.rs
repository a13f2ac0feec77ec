//! End-of-run results

use std::fmt;

use serde::Serialize;

use crate::battle::general::General;
use crate::battle::planet::Planet;
use crate::core::error::Result;
use crate::core::types::{GeneralId, PlanetId, Timestamp};
use crate::watcher::Pairing;

/// One row of the general evaluation table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneralEvaluation {
    pub general: GeneralId,
    pub jedi_deployed: u64,
    pub sith_deployed: u64,
    pub survivors: u64,
    pub total_deployed: u64,
}

impl GeneralEvaluation {
    pub fn new(general: GeneralId, ledger: &General) -> Self {
        Self {
            general,
            jedi_deployed: ledger.jedi_deployed,
            sith_deployed: ledger.sith_deployed,
            survivors: ledger.survivors(),
            total_deployed: ledger.total_deployed(),
        }
    }
}

impl fmt::Display for GeneralEvaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "General {} deployed {} Jedi troops and {} Sith troops, and {}/{} troops survived.",
            self.general, self.jedi_deployed, self.sith_deployed, self.survivors, self.total_deployed
        )
    }
}

/// Movie watcher verdict for one planet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetHighlights {
    pub planet: PlanetId,
    pub ambush: Option<Pairing>,
    pub attack: Option<Pairing>,
}

impl PlanetHighlights {
    /// `None` when the planet was not being watched
    pub fn from_planet(planet: &Planet) -> Option<Self> {
        planet.watcher.as_ref().map(|watcher| Self {
            planet: planet.id,
            ambush: watcher.ambush().copied(),
            attack: watcher.attack().copied(),
        })
    }
}

impl fmt::Display for PlanetHighlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let planet = self.planet;
        match &self.ambush {
            Some(p) => writeln!(
                f,
                "On planet {}, a movie watcher would enjoy an ambush with Sith at time {} and Jedi at time {} with a force difference of {}.",
                planet,
                p.sith.timestamp,
                p.jedi.timestamp,
                p.force_difference()
            )?,
            None => writeln!(f, "On planet {}, a movie watcher would not see an interesting ambush.", planet)?,
        }
        match &self.attack {
            Some(p) => write!(
                f,
                "On planet {}, a movie watcher would enjoy an attack with Jedi at time {} and Sith at time {} with a force difference of {}.",
                planet,
                p.jedi.timestamp,
                p.sith.timestamp,
                p.force_difference()
            ),
            None => write!(f, "On planet {}, a movie watcher would not see an interesting attack.", planet),
        }
    }
}

/// Machine-readable record of a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub deployments: u64,
    pub battles: u64,
    pub final_timestamp: Timestamp,
    /// Median combined losses per planet at the end of the run
    pub final_medians: Vec<Option<u64>>,
    pub generals: Vec<GeneralEvaluation>,
    /// Present only when movie watcher tracking was enabled
    pub highlights: Option<Vec<PlanetHighlights>>,
}

impl RunSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::deployment::Deployment;
    use crate::core::types::Side;
    use crate::watcher::PairingKind;

    fn unit(side: Side, timestamp: Timestamp, force: u32) -> Deployment {
        Deployment {
            timestamp,
            general: GeneralId(0),
            planet: PlanetId(0),
            side,
            force,
            troops: 1,
            arrival: 1,
        }
    }

    #[test]
    fn test_general_evaluation_line() {
        let ledger = General { jedi_deployed: 10, sith_deployed: 20, jedi_lost: 5, sith_lost: 5 };
        let row = GeneralEvaluation::new(GeneralId(1), &ledger);
        assert_eq!(
            row.to_string(),
            "General 1 deployed 10 Jedi troops and 20 Sith troops, and 20/30 troops survived."
        );
    }

    #[test]
    fn test_highlights_lines() {
        let highlights = PlanetHighlights {
            planet: PlanetId(0),
            ambush: Some(Pairing {
                kind: PairingKind::Ambush,
                jedi: unit(Side::Jedi, 1, 4),
                sith: unit(Side::Sith, 0, 10),
            }),
            attack: None,
        };
        assert_eq!(
            highlights.to_string(),
            "On planet 0, a movie watcher would enjoy an ambush with Sith at time 0 and Jedi at time 1 with a force difference of 6.\n\
             On planet 0, a movie watcher would not see an interesting attack."
        );
    }

    #[test]
    fn test_summary_json_has_fields() {
        let summary = RunSummary {
            deployments: 2,
            battles: 1,
            final_timestamp: 1,
            final_medians: vec![Some(20)],
            generals: Vec::new(),
            highlights: None,
        };
        let json: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();
        assert_eq!(json["battles"], 1);
        assert_eq!(json["final_medians"][0], 20);
        assert!(json["highlights"].is_null());
    }
}
