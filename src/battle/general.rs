//! Per-general troop ledger

use serde::{Deserialize, Serialize};

use crate::core::types::Side;

/// Running troop counters for one general
///
/// All four counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct General {
    pub jedi_deployed: u64,
    pub sith_deployed: u64,
    pub jedi_lost: u64,
    pub sith_lost: u64,
}

impl General {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_deployment(&mut self, side: Side, troops: u32) {
        match side {
            Side::Jedi => self.jedi_deployed += troops as u64,
            Side::Sith => self.sith_deployed += troops as u64,
        }
    }

    pub fn record_loss(&mut self, side: Side, troops: u32) {
        match side {
            Side::Jedi => self.jedi_lost += troops as u64,
            Side::Sith => self.sith_lost += troops as u64,
        }
    }

    pub fn total_deployed(&self) -> u64 {
        self.jedi_deployed + self.sith_deployed
    }

    pub fn total_lost(&self) -> u64 {
        self.jedi_lost + self.sith_lost
    }

    pub fn survivors(&self) -> u64 {
        self.total_deployed() - self.total_lost()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_track_sides_separately() {
        let mut general = General::new();
        general.record_deployment(Side::Jedi, 10);
        general.record_deployment(Side::Sith, 5);
        general.record_loss(Side::Jedi, 4);
        assert_eq!(general.jedi_deployed, 10);
        assert_eq!(general.sith_deployed, 5);
        assert_eq!(general.jedi_lost, 4);
        assert_eq!(general.sith_lost, 0);
        assert_eq!(general.total_deployed(), 15);
        assert_eq!(general.survivors(), 11);
    }
}
