//! Per-planet arena state

use crate::battle::deployment::Deployment;
use crate::battle::queue::BattalionQueue;
use crate::core::types::{PlanetId, Side};
use crate::stats::RunningMedian;
use crate::watcher::MovieWatcher;

#[derive(Debug, Clone)]
pub struct Planet {
    pub id: PlanetId,
    pub jedi: BattalionQueue,
    pub sith: BattalionQueue,
    /// Combined casualties of every battle fought here
    pub losses: RunningMedian,
    /// Present only when movie watcher tracking is enabled
    pub watcher: Option<MovieWatcher>,
}

impl Planet {
    pub fn new(id: PlanetId, track_watcher: bool) -> Self {
        Self {
            id,
            jedi: BattalionQueue::new(Side::Jedi),
            sith: BattalionQueue::new(Side::Sith),
            losses: RunningMedian::new(),
            watcher: track_watcher.then(MovieWatcher::new),
        }
    }

    /// Route an arriving deployment into its side's queue
    pub fn deploy(&mut self, deployment: Deployment) {
        debug_assert_eq!(deployment.planet, self.id);
        if let Some(watcher) = self.watcher.as_mut() {
            watcher.observe(&deployment);
        }
        self.queue_mut(deployment.side).push(deployment);
    }

    pub fn queue_mut(&mut self, side: Side) -> &mut BattalionQueue {
        match side {
            Side::Jedi => &mut self.jedi,
            Side::Sith => &mut self.sith,
        }
    }

    pub fn queue(&self, side: Side) -> &BattalionQueue {
        match side {
            Side::Jedi => &self.jedi,
            Side::Sith => &self.sith,
        }
    }

    /// True when the strongest Sith can take on the weakest Jedi
    pub fn is_contested(&self) -> bool {
        match (self.jedi.peek(), self.sith.peek()) {
            (Some(jedi), Some(sith)) => sith.force >= jedi.force,
            _ => false,
        }
    }

    pub fn median_loss(&self) -> Option<u64> {
        self.losses.median()
    }
}
