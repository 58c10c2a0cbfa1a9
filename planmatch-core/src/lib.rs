//! Core domain types for the planmatch recommendation engine.
//!
//! The crate defines the inputs (`UserProfile`, `PlanTemplate`), the scored
//! output (`PlanRecommendation`), and the two seams implementations plug
//! into: [`Scorer`] for per-template scoring and [`Recommender`] for ranking
//! a catalog. Constructors and `validate` methods return `Result` to surface
//! invalid input early.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod goal;
pub mod level;
pub mod profile;
pub mod recommendation;
mod recommender;
pub mod scorer;
pub mod template;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use goal::{GoalRelation, TrainingGoal};
pub use level::FitnessLevel;
pub use profile::{MAX_TRAINING_DAYS, UserProfile, UserProfileError, UserProfileRecord};
pub use recommendation::{
    DimensionScores, Eligibility, MAX_SCORE, MIN_SCORE, MatchTier, PlanRecommendation,
    TemplateScore, VolumeNote, VolumeReason,
};
pub use recommender::{RecommendError, Recommender};
pub use scorer::Scorer;
pub use template::{MAX_DIFFICULTY_RATING, PlanTemplate, PlanTemplateError};
