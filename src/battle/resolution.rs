//! Battle resolution
//!
//! The weakest Jedi meets the strongest Sith. Both lose the smaller of the
//! two troop counts, so at least one side is wiped out per battle.

use serde::{Deserialize, Serialize};

use crate::battle::deployment::Deployment;
use crate::battle::general::General;
use crate::battle::planet::Planet;
use crate::core::types::{PlanetId, Side};

/// What happened in one battle
///
/// `jedi` and `sith` carry the troop counts left after the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleOutcome {
    pub planet: PlanetId,
    pub jedi: Deployment,
    pub sith: Deployment,
    /// Troops lost by each side
    pub losses_per_side: u32,
}

impl BattleOutcome {
    /// Casualties across both sides
    pub fn troops_lost(&self) -> u64 {
        2 * self.losses_per_side as u64
    }
}

/// Fight one battle on a contested planet
///
/// Returns `None` without touching anything if the planet is not contested.
pub fn resolve_battle(planet: &mut Planet, generals: &mut [General]) -> Option<BattleOutcome> {
    if !planet.is_contested() {
        return None;
    }
    let mut jedi = planet.jedi.pop()?;
    let mut sith = planet.sith.pop()?;

    let losses = jedi.troops.min(sith.troops);
    generals[jedi.general.index()].record_loss(Side::Jedi, losses);
    generals[sith.general.index()].record_loss(Side::Sith, losses);

    jedi.troops -= losses;
    sith.troops -= losses;
    if !jedi.is_defeated() {
        planet.jedi.push(jedi);
    }
    if !sith.is_defeated() {
        planet.sith.push(sith);
    }

    let outcome = BattleOutcome { planet: planet.id, jedi, sith, losses_per_side: losses };
    planet.losses.observe(outcome.troops_lost());

    tracing::debug!(
        planet = %planet.id,
        jedi_general = %jedi.general,
        sith_general = %sith.general,
        losses,
        "battle resolved"
    );

    Some(outcome)
}

/// Fight until the planet is no longer contested
pub fn resolve_all(planet: &mut Planet, generals: &mut [General]) -> Vec<BattleOutcome> {
    std::iter::from_fn(|| resolve_battle(planet, generals)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::GeneralId;

    fn deployment(side: Side, general: u32, force: u32, troops: u32, arrival: u64) -> Deployment {
        Deployment {
            timestamp: arrival as i64,
            general: GeneralId(general),
            planet: PlanetId(0),
            side,
            force,
            troops,
            arrival,
        }
    }

    #[test]
    fn test_equal_troops_both_defeated() {
        let mut planet = Planet::new(PlanetId(0), false);
        let mut generals = vec![General::new(); 2];
        planet.deploy(deployment(Side::Jedi, 0, 5, 10, 1));
        planet.deploy(deployment(Side::Sith, 1, 5, 10, 2));

        let outcome = resolve_battle(&mut planet, &mut generals).unwrap();
        assert_eq!(outcome.troops_lost(), 20);
        assert!(outcome.jedi.is_defeated() && outcome.sith.is_defeated());
        assert!(planet.jedi.is_empty() && planet.sith.is_empty());
        assert_eq!(generals[0].jedi_lost, 10);
        assert_eq!(generals[1].sith_lost, 10);
        assert_eq!(planet.median_loss(), Some(20));
    }

    #[test]
    fn test_survivor_returns_to_queue() {
        let mut planet = Planet::new(PlanetId(0), false);
        let mut generals = vec![General::new(); 1];
        planet.deploy(deployment(Side::Jedi, 0, 2, 30, 1));
        planet.deploy(deployment(Side::Sith, 0, 4, 12, 2));

        let outcome = resolve_battle(&mut planet, &mut generals).unwrap();
        assert_eq!(outcome.losses_per_side, 12);
        assert_eq!(planet.jedi.peek().map(|d| d.troops), Some(18));
        assert!(planet.sith.is_empty());
        assert_eq!(generals[0].jedi_lost, 12);
        assert_eq!(generals[0].sith_lost, 12);
    }

    #[test]
    fn test_uncontested_planet_is_untouched() {
        let mut planet = Planet::new(PlanetId(0), false);
        let mut generals = vec![General::new(); 1];
        planet.deploy(deployment(Side::Jedi, 0, 9, 10, 1));
        planet.deploy(deployment(Side::Sith, 0, 3, 10, 2));

        assert!(resolve_battle(&mut planet, &mut generals).is_none());
        assert_eq!(planet.jedi.len(), 1);
        assert_eq!(planet.sith.len(), 1);
        assert!(planet.losses.is_empty());
    }

    #[test]
    fn test_resolve_all_drains_until_uncontested() {
        let mut planet = Planet::new(PlanetId(0), false);
        let mut generals = vec![General::new(); 1];
        planet.deploy(deployment(Side::Jedi, 0, 1, 5, 1));
        planet.deploy(deployment(Side::Jedi, 0, 3, 5, 2));
        planet.deploy(deployment(Side::Jedi, 0, 8, 5, 3));
        planet.deploy(deployment(Side::Sith, 0, 4, 12, 4));

        let outcomes = resolve_all(&mut planet, &mut generals);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].jedi.force, 1);
        assert_eq!(outcomes[1].jedi.force, 3);
        assert_eq!(planet.sith.peek().map(|d| d.troops), Some(2));
        assert!(!planet.is_contested());
        assert!(outcomes.iter().all(|o| o.jedi.is_defeated() || o.sith.is_defeated()));
    }
}
