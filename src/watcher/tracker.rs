//! Single-pass best-pairing search
//!
//! For a fixed newly arrived deployment, only the most extreme earlier
//! opponent (strongest Sith for an ambush, weakest Jedi for an attack) can
//! produce the largest force gap, so one running candidate per kind is
//! enough. Each arrival costs O(1).

use serde::Serialize;

use crate::battle::deployment::Deployment;
use crate::core::types::Side;
use crate::watcher::pairing::{Pairing, PairingKind};

#[derive(Debug, Clone, Default, Serialize)]
pub struct MovieWatcher {
    strongest_sith: Option<Deployment>,
    weakest_jedi: Option<Deployment>,
    ambush: Option<Pairing>,
    attack: Option<Pairing>,
}

impl MovieWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next deployment for this planet, in arrival order
    pub fn observe(&mut self, deployment: &Deployment) {
        match deployment.side {
            Side::Jedi => self.observe_jedi(deployment),
            Side::Sith => self.observe_sith(deployment),
        }
    }

    fn observe_jedi(&mut self, jedi: &Deployment) {
        if let Some(sith) = self.strongest_sith {
            if sith.timestamp <= jedi.timestamp && sith.force >= jedi.force {
                let candidate = Pairing { kind: PairingKind::Ambush, jedi: *jedi, sith };
                offer(&mut self.ambush, candidate);
            }
        }

        if self.weakest_jedi.map_or(true, |weakest| jedi.force < weakest.force) {
            self.weakest_jedi = Some(*jedi);
        }
    }

    fn observe_sith(&mut self, sith: &Deployment) {
        if self.strongest_sith.map_or(true, |strongest| sith.force > strongest.force) {
            self.strongest_sith = Some(*sith);
        }

        if let Some(jedi) = self.weakest_jedi {
            if jedi.timestamp <= sith.timestamp && sith.force >= jedi.force {
                let candidate = Pairing { kind: PairingKind::Attack, jedi, sith: *sith };
                offer(&mut self.attack, candidate);
            }
        }
    }

    /// Best ambush seen so far, if any Sith could have waited for a Jedi
    pub fn ambush(&self) -> Option<&Pairing> {
        self.ambush.as_ref().filter(|p| p.force_difference() >= 0)
    }

    /// Best attack seen so far, if any Jedi could have been hit by a Sith
    pub fn attack(&self) -> Option<&Pairing> {
        self.attack.as_ref().filter(|p| p.force_difference() >= 0)
    }
}

fn offer(best: &mut Option<Pairing>, candidate: Pairing) {
    let replace = match best {
        None => true,
        Some(current) => candidate.beats(current),
    };
    if replace {
        *best = Some(candidate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{GeneralId, PlanetId, Timestamp};

    struct Feed {
        watcher: MovieWatcher,
        arrival: u64,
    }

    impl Feed {
        fn new() -> Self {
            Self { watcher: MovieWatcher::new(), arrival: 0 }
        }

        fn send(&mut self, side: Side, timestamp: Timestamp, force: u32) -> &mut Self {
            self.arrival += 1;
            self.watcher.observe(&Deployment {
                timestamp,
                general: GeneralId(0),
                planet: PlanetId(0),
                side,
                force,
                troops: 1,
                arrival: self.arrival,
            });
            self
        }
    }

    fn times(pairing: Option<&Pairing>) -> Option<(Timestamp, Timestamp, i64)> {
        pairing.map(|p| (p.sith.timestamp, p.jedi.timestamp, p.force_difference()))
    }

    #[test]
    fn test_ambush_picks_largest_gap() {
        let mut feed = Feed::new();
        feed.send(Side::Sith, 0, 10).send(Side::Jedi, 1, 4).send(Side::Jedi, 2, 8);
        assert_eq!(times(feed.watcher.ambush()), Some((0, 1, 6)));
        assert!(feed.watcher.attack().is_none());
    }

    #[test]
    fn test_attack_picks_largest_gap() {
        let mut feed = Feed::new();
        feed.send(Side::Jedi, 0, 4).send(Side::Sith, 1, 6).send(Side::Sith, 2, 12);
        assert_eq!(times(feed.watcher.attack()), Some((2, 0, 8)));
        assert!(feed.watcher.ambush().is_none());
    }

    #[test]
    fn test_ambush_tie_keeps_earlier_sith() {
        let mut feed = Feed::new();
        feed.send(Side::Sith, 0, 10).send(Side::Jedi, 1, 5);
        feed.send(Side::Sith, 2, 12).send(Side::Jedi, 3, 7);
        assert_eq!(times(feed.watcher.ambush()), Some((0, 1, 5)));
    }

    #[test]
    fn test_attack_tie_keeps_earlier_jedi() {
        let mut feed = Feed::new();
        feed.send(Side::Jedi, 0, 3).send(Side::Sith, 1, 8);
        feed.send(Side::Jedi, 2, 1).send(Side::Sith, 3, 6);
        assert_eq!(times(feed.watcher.attack()), Some((1, 0, 5)));

        feed.send(Side::Sith, 4, 7);
        assert_eq!(times(feed.watcher.attack()), Some((4, 2, 6)));
    }

    #[test]
    fn test_weaker_sith_never_pairs() {
        let mut feed = Feed::new();
        feed.send(Side::Sith, 0, 3).send(Side::Jedi, 1, 9);
        feed.send(Side::Jedi, 2, 9).send(Side::Sith, 3, 2);
        assert!(feed.watcher.ambush().is_none());
        assert!(feed.watcher.attack().is_none());
    }

    #[test]
    fn test_equal_force_is_interesting() {
        let mut feed = Feed::new();
        feed.send(Side::Sith, 5, 7).send(Side::Jedi, 5, 7);
        assert_eq!(times(feed.watcher.ambush()), Some((5, 5, 0)));
    }

    #[test]
    fn test_candidate_replaced_only_on_strict_improvement() {
        let mut feed = Feed::new();
        feed.send(Side::Sith, 0, 10).send(Side::Sith, 1, 10).send(Side::Jedi, 2, 1);
        assert_eq!(times(feed.watcher.ambush()), Some((0, 2, 9)));
    }
}
