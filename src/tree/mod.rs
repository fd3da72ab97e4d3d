// cursor module
mod cursor;
// error module
mod error;
// ordered tree module
mod ordered;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the tree modules.
//─────────────────────────────────────────────────────────────────────────────
pub use cursor::{Traversal, TreeCursor};
pub use error::TreeError;
pub use ordered::OrderedTree;

pub(crate) use ordered::Node;
