//! Weighted scoring of training plan templates against a user profile.
//!
//! Every template is compared with the profile along four dimensions:
//! - **Fitness level**: distance between the user's level and the template's
//!   target, where an overly strict template costs more than a mild one.
//! - **Goal**: exact, superset, subset or unrelated relation between goals.
//! - **Schedule**: available days against required days, where missing days
//!   cost more than spare ones.
//! - **Eligibility**: whether the user meets the template's experience floor.
//!
//! [`WeightedScorer`] blends the sub-scores with [`DimensionWeights`] and
//! applies the configured [`EligibilityGate`]. It implements the
//! [`Scorer`](planmatch_core::Scorer) trait so recommenders can plug it in.
//!
//! # Examples
//!
//! ```
//! use planmatch_core::{FitnessLevel, Scorer, TrainingGoal, UserProfile};
//! use planmatch_core::test_support::{mock_templates, WENDLER_ADVANCED};
//! use planmatch_scorer::{EligibilityGate, ScorerConfig, WeightedScorer};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ScorerConfig {
//!     gate: EligibilityGate::soft(),
//!     ..ScorerConfig::default()
//! };
//! let scorer = WeightedScorer::with_config(config)?;
//! let profile = UserProfile::new(FitnessLevel::Beginner, 2, 3, TrainingGoal::Strength)?;
//! let templates = mock_templates();
//! let advanced = templates.get(WENDLER_ADVANCED).ok_or("missing template")?;
//!
//! let score = scorer.score(advanced, &profile);
//! assert!(!score.eligibility.is_excluded());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod dimensions;
mod error;
mod types;
mod weighted;

pub use dimensions::{eligibility_outcome, fitness_level_score, goal_score, schedule_score};
pub use error::ScorerConfigError;
pub use types::{
    DEFAULT_SOFT_PENALTY_FACTOR, DEFAULT_VOLUME_NOTE_MARGIN_MONTHS, DimensionWeights,
    EligibilityGate, ScorerConfig,
};
pub use weighted::WeightedScorer;
