// error module
pub mod error;
// loader module
mod loader;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports from the loader module.
//─────────────────────────────────────────────────────────────────────────────
pub use loader::load_stops_from_file;
