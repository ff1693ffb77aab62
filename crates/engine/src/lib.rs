//! `matchfacile-engine` — engine-request matching core.
//!
//! Pure engine crate: receives two pre-loaded row sequences (inventory
//! catalog, request list), returns a grouped match report. No CLI or IO
//! dependencies.

pub mod columns;
pub mod engine;
pub mod matcher;
pub mod model;
pub mod normalize;
pub mod summary;

pub use engine::run;
pub use matcher::{match_rows, satisfies};
pub use model::{MatchGroup, MatchReport, RowRecord};
pub use normalize::normalize;
