//! Transparency index for public payroll data sources.
//!
//! A source's publication metadata is scored on two axes: *completeness*
//! (how much identity and payroll detail it discloses) and *easiness* (how
//! readily it can be collected by a program). The index combines both with a
//! harmonic mean, so a source that is excellent on one axis and absent on the
//! other scores zero.
//!
//! ```
//! use transparency_index::{compute_score, AccessLevel, DetailLevel, MetadataRecord};
//!
//! let record = MetadataRecord {
//!     base_salary_detail: DetailLevel::Detailed,
//!     other_earnings_detail: DetailLevel::Detailed,
//!     expenses_detail: DetailLevel::Detailed,
//!     access_level: AccessLevel::RequiresUserSimulation,
//!     consistent_format: true,
//!     strictly_tabular: true,
//!     ..MetadataRecord::default()
//! };
//! let score = compute_score(&record);
//! assert_eq!(score.score, 0.5);
//! ```
//!
//! Weighting revisions live in [`policy`]; pick one with
//! [`ScoreCalculator::new`] or from TOML text via
//! [`IndexConfig::from_toml_str`].

pub mod error;
pub mod policy;
pub mod score;
pub mod types;

pub use error::{IndexError, Result};
pub use policy::{Combination, ScoringPolicy};
pub use score::{
    compute_completeness_score, compute_easiness_score, compute_score, ScoreCalculator,
};
pub use types::config::IndexConfig;
pub use types::metadata::{AccessLevel, DetailLevel, MetadataRecord};
pub use types::scoring::Score;
