// mountain module
mod mountain;
// stop module
mod stop;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the mountain modules.
//─────────────────────────────────────────────────────────────────────────────
pub use mountain::{Mountain, TrailRun};
pub use stop::{Obstacle, Stop, Supply};
