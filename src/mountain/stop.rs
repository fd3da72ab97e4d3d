use std::cmp::Ordering;
use std::fmt;

/// A consumable supply a hiker can pick up at a rest stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Supply {
    Food,
    Raft,
    Axe,
}

impl Supply {
    /// Maps a row token to a supply, if it names one.
    pub fn from_token(token: &str) -> Option<Supply> {
        match token {
            "food" => Some(Supply::Food),
            "raft" => Some(Supply::Raft),
            "axe" => Some(Supply::Axe),
            _ => None,
        }
    }
}

/// An obstacle a hiker runs into when moving on from a rest stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Obstacle {
    River,
    FallenTree,
}

/// A single rest stop on the mountain: a label, the supplies available here,
/// and the obstacles met on the way out.
///
/// Supplies and obstacles accumulate while the stop is being parsed and are
/// read-only afterwards.
#[derive(Clone, Debug)]
pub struct Stop {
    label: String,
    supplies: Vec<Supply>,
    obstacles: Vec<Obstacle>,
}

impl Stop {
    pub fn new(label: impl Into<String>) -> Self {
        Stop {
            label: label.into(),
            supplies: Vec::new(),
            obstacles: Vec::new(),
        }
    }

    pub fn add_supply(&mut self, supply: Supply) {
        self.supplies.push(supply);
    }

    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn supplies(&self) -> &[Supply] {
        &self.supplies
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn has_obstacle(&self, obstacle: Obstacle) -> bool {
        self.obstacles.contains(&obstacle)
    }
}

// Ordering and equality are on the label alone; two stops with the same
// label compare equal regardless of their supplies and obstacles.

impl PartialEq for Stop {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Stop {}

impl PartialOrd for Stop {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Stop {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label.cmp(&other.label)
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
