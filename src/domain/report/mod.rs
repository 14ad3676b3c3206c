//! Critical Report Invariants:
//!
//! 1. Reports are ALWAYS derived, NEVER persisted
//! 2. Reports can be recalculated at any time from a catalog snapshot
//! 3. Computing a report NEVER alters catalog state
//! 4. The same snapshot and year always produce the same report
//! 5. The grouping year is release year, falling back to creation year

pub mod aggregator;
pub mod entity;

pub use aggregator::{available_years, compute_report, entry_year, TOP_RATED_LIMIT};
pub use entity::{KindCount, YearlyReport};
