use std::io::Write;

use super::stop::{Obstacle, Stop, Supply};
use crate::hiker::Hiker;
use crate::tree::{Node, OrderedTree};

/// The mountain: rest stops arranged as an ordered tree whose root is the
/// summit. Every descent runs from the root to a leaf, and a descent only
/// counts as complete when the trail is as long as the tree's height counter.
pub struct Mountain {
    tree: OrderedTree<Stop>,
}

impl Mountain {
    /// Builds the mountain by inserting the stops one by one, in the order
    /// given. No pre-sorting or balancing happens here: insertion order alone
    /// decides the final shape.
    pub fn new(stops: Vec<Stop>) -> Self {
        let mut tree = OrderedTree::new();
        for stop in stops {
            tree.insert(stop);
        }
        Mountain { tree }
    }

    /// The tree's height counter (0 for an empty mountain).
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Number of rest stops on the mountain.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns every root-to-leaf trail, left subtree first.
    pub fn trails(&self) -> Vec<Vec<&Stop>> {
        let mut trails = Vec::new();
        if let Some(root) = self.tree.root() {
            // No trail is longer than the height counter.
            let mut buffer = Vec::with_capacity(self.tree.height());
            Self::collect_trails(root, &mut buffer, &mut trails);
        }
        trails
    }

    fn collect_trails<'a>(
        node: &'a Node<Stop>,
        buffer: &mut Vec<&'a Stop>,
        trails: &mut Vec<Vec<&'a Stop>>,
    ) {
        buffer.push(&node.value);
        if node.left.is_none() && node.right.is_none() {
            trails.push(buffer.clone());
        } else {
            if let Some(left) = node.left.as_deref() {
                Self::collect_trails(left, buffer, trails);
            }
            if let Some(right) = node.right.as_deref() {
                Self::collect_trails(right, buffer, trails);
            }
        }
        buffer.pop();
    }

    /// Replays every trail against the hiker's ledger and reports, per trail,
    /// whether the descent could be completed. The ledger is emptied between
    /// trails regardless of the outcome.
    pub fn survey<'a>(&'a self, hiker: &mut Hiker) -> Vec<TrailRun<'a>> {
        let height = self.tree.height();
        self.trails()
            .into_iter()
            .enumerate()
            .map(|(trail_index, stops)| {
                let feasible = Self::walk(&stops, height, hiker);
                hiker.clear_supplies();
                TrailRun {
                    trail_index,
                    stops,
                    feasible,
                }
            })
            .collect()
    }

    /// Replays every trail and keeps the ones the hiker can complete, in
    /// discovery order.
    pub fn hike<'a>(&'a self, hiker: &mut Hiker) -> Vec<Vec<&'a Stop>> {
        self.survey(hiker)
            .into_iter()
            .filter(|run| run.feasible)
            .map(|run| run.stops)
            .collect()
    }

    /// Walks one trail stop by stop, consuming supplies as it goes. Checks do
    /// not short-circuit: a failed stop still collects supplies and pays for
    /// obstacles further down, so the ledger sees the same consumption either
    /// way.
    fn walk(stops: &[&Stop], height: usize, hiker: &mut Hiker) -> bool {
        let mut feasible = true;
        for (index, &stop) in stops.iter().enumerate() {
            let mut stop_ok = true;
            let last = index + 1 == stops.len();
            hiker.add_supplies(stop);
            if !last && !hiker.remove_supply(Supply::Food) {
                stop_ok = false;
            }
            if stop.has_obstacle(Obstacle::River) && !hiker.remove_supply(Supply::Raft) {
                stop_ok = false;
            }
            if stop.has_obstacle(Obstacle::FallenTree) && !hiker.remove_supply(Supply::Axe) {
                stop_ok = false;
            }
            // A leaf above full depth is not the bottom of the mountain.
            if last && stops.len() < height {
                stop_ok = false;
            }
            if !stop_ok {
                feasible = false;
            }
        }
        feasible
    }

    /// Writes the mountain layout and the per-trail feasibility results to
    /// the given writer.
    pub fn write_report(
        &self,
        runs: &[TrailRun<'_>],
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        writeln!(writer, "=== MOUNTAIN ===")?;
        write!(writer, "{}", self.tree.to_tree_string())?;
        writeln!(writer)?;

        writeln!(writer, "=== TRAILS ===")?;
        writeln!(writer, "Total trails found: {}", runs.len())?;
        for run in runs {
            let status = if run.feasible { "feasible" } else { "infeasible" };
            writeln!(
                writer,
                "Trail {}: {} [{}]",
                run.trail_index,
                run.display_line(),
                status
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// Outcome of replaying a single trail against the hiker's ledger.
#[derive(Clone, Debug)]
pub struct TrailRun<'a> {
    /// Index of the trail in discovery order.
    pub trail_index: usize,
    /// The stops along the trail, summit first.
    pub stops: Vec<&'a Stop>,
    /// Whether the hiker could complete the descent.
    pub feasible: bool,
}

impl TrailRun<'_> {
    /// Space-separated stop labels, the program's output form for a trail.
    pub fn display_line(&self) -> String {
        self.stops
            .iter()
            .map(|stop| stop.label())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
