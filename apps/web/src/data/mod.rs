// Data layer: CSV tables, the load step, and the process-wide load cache.
// Tables are read once per path triple and never mutated afterwards.

pub mod cache;
pub mod loader;
pub mod models;
pub mod table;

pub use cache::DatasetCache;
pub use models::{DataPaths, Dataset};
