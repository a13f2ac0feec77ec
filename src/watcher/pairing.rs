use serde::{Deserialize, Serialize};

use crate::battle::deployment::Deployment;
use crate::core::types::Timestamp;

/// Which of the two interestingness definitions a pairing answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairingKind {
    /// Sith already in place when the Jedi arrive
    Ambush,
    /// Jedi already in place when the Sith arrive
    Attack,
}

/// A Jedi/Sith pair frozen at arrival time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub kind: PairingKind,
    pub jedi: Deployment,
    pub sith: Deployment,
}

impl Pairing {
    pub fn force_difference(&self) -> i64 {
        self.sith.force as i64 - self.jedi.force as i64
    }

    /// Timestamp of the deployment that was waiting first
    pub fn defining_timestamp(&self) -> Timestamp {
        match self.kind {
            PairingKind::Ambush => self.sith.timestamp,
            PairingKind::Attack => self.jedi.timestamp,
        }
    }

    /// Larger force gap wins; equal gaps go to the earlier waiting deployment
    pub fn beats(&self, current: &Pairing) -> bool {
        let (mine, theirs) = (self.force_difference(), current.force_difference());
        mine > theirs || (mine == theirs && self.defining_timestamp() < current.defining_timestamp())
    }
}
