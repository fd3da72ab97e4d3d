//! The hiker's supply ledger.
//!
//! A hiker walking a trail collects every supply offered at each rest stop
//! and consumes supplies along the way, whether by eating or by using a tool
//! to get past an obstacle. The ledger is emptied between trail simulations
//! so no two descents share state.

use crate::mountain::{Stop, Supply};

/// Tracks the supplies a hiker is carrying during a single descent.
#[derive(Debug, Default)]
pub struct Hiker {
    supplies: Vec<Supply>,
}

impl Hiker {
    /// Creates a hiker carrying nothing.
    pub fn new() -> Self {
        Hiker {
            supplies: Vec::new(),
        }
    }

    /// Picks up every supply available at the given stop.
    pub fn add_supplies(&mut self, stop: &Stop) {
        self.supplies.extend_from_slice(stop.supplies());
    }

    /// Consumes one unit of the given supply. Returns `false` when the hiker
    /// has none left, in which case the ledger is unchanged.
    pub fn remove_supply(&mut self, supply: Supply) -> bool {
        match self.supplies.iter().position(|&carried| carried == supply) {
            Some(index) => {
                self.supplies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drops everything the hiker is carrying.
    pub fn clear_supplies(&mut self) {
        self.supplies.clear();
    }

    /// Number of supply units currently carried.
    pub fn supply_count(&self) -> usize {
        self.supplies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mountain::Stop;

    fn stocked_stop() -> Stop {
        let mut stop = Stop::new("A");
        stop.add_supply(Supply::Food);
        stop.add_supply(Supply::Food);
        stop.add_supply(Supply::Raft);
        stop
    }

    #[test]
    fn collects_supplies_from_a_stop() {
        let mut hiker = Hiker::new();
        hiker.add_supplies(&stocked_stop());
        assert_eq!(hiker.supply_count(), 3);
    }

    #[test]
    fn remove_supply_consumes_one_unit_at_a_time() {
        let mut hiker = Hiker::new();
        hiker.add_supplies(&stocked_stop());
        assert!(hiker.remove_supply(Supply::Food));
        assert!(hiker.remove_supply(Supply::Food));
        assert!(!hiker.remove_supply(Supply::Food));
        assert!(hiker.remove_supply(Supply::Raft));
        assert!(!hiker.remove_supply(Supply::Axe));
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut hiker = Hiker::new();
        hiker.add_supplies(&stocked_stop());
        hiker.clear_supplies();
        assert_eq!(hiker.supply_count(), 0);
        assert!(!hiker.remove_supply(Supply::Food));
    }
}
