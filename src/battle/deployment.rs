//! Troop deployments as they arrive from the input stream

use serde::{Deserialize, Serialize};

use crate::core::error::{GalaxyError, Result};
use crate::core::types::{ArrivalOrder, GeneralId, PlanetId, Side, Timestamp};

/// A deployment record exactly as read, before range checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDeployment {
    pub timestamp: Timestamp,
    pub side: Side,
    pub general: i64,
    pub planet: i64,
    pub force: i64,
    pub troops: i64,
}

/// A validated deployment
///
/// Everything except `troops` is fixed at creation. `troops` only goes down,
/// and only through battle resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub timestamp: Timestamp,
    pub general: GeneralId,
    pub planet: PlanetId,
    pub side: Side,
    pub force: u32,
    pub troops: u32,
    pub arrival: ArrivalOrder,
}

impl Deployment {
    /// Range-check a raw record against the declared galaxy size
    pub fn validate(
        raw: &RawDeployment,
        num_generals: u32,
        num_planets: u32,
        arrival: ArrivalOrder,
    ) -> Result<Self> {
        let general = checked_id(raw.general, num_generals)
            .ok_or_else(|| invalid(raw, "general out of range"))?;
        let planet = checked_id(raw.planet, num_planets)
            .ok_or_else(|| invalid(raw, "planet out of range"))?;
        let force = checked_positive(raw.force)
            .ok_or_else(|| invalid(raw, "force sensitivity must be positive"))?;
        let troops = checked_positive(raw.troops)
            .ok_or_else(|| invalid(raw, "troop count must be positive"))?;

        Ok(Self {
            timestamp: raw.timestamp,
            general: GeneralId(general),
            planet: PlanetId(planet),
            side: raw.side,
            force,
            troops,
            arrival,
        })
    }

    pub fn is_defeated(&self) -> bool {
        self.troops == 0
    }
}

fn checked_id(value: i64, limit: u32) -> Option<u32> {
    u32::try_from(value).ok().filter(|id| *id < limit)
}

fn checked_positive(value: i64) -> Option<u32> {
    u32::try_from(value).ok().filter(|v| *v > 0)
}

fn invalid(raw: &RawDeployment, reason: &str) -> GalaxyError {
    GalaxyError::InvalidDeployment(format!(
        "{} (t={} {} G{} P{} F{} #{})",
        reason, raw.timestamp, raw.side, raw.general, raw.planet, raw.force, raw.troops
    ))
}
